mod common;

use std::collections::HashMap;

use common::{create_container_if_not_exist, get_test_cloudfiles};
use cloudfiles_rsc::error::Result;
use cloudfiles_rsc::options::{builder, CreateContainerOptions, ListContainerOptions};

/// Runs against the service named by `CLOUDFILES_STORAGE_URL`, skipped otherwise.
#[tokio::main]
#[test]
async fn test_container() -> Result<()> {
    let cloudfiles = match get_test_cloudfiles() {
        Some(c) => c,
        None => {
            println!("CLOUDFILES_STORAGE_URL or CLOUDFILES_AUTH_TOKEN not set, skip");
            return Ok(());
        }
    };
    let container1 = "container-test-1";
    let container2 = "container-test-1-versions";

    println!("\r\n====== begin create containers");
    create_container_if_not_exist(&cloudfiles, container2).await?;
    let mut metadata = HashMap::new();
    metadata.insert("owner".to_string(), "alice".to_string());
    let options = CreateContainerOptions::new()
        .metadata(metadata.clone())
        .versions_location(container2);
    assert!(cloudfiles.create_container_if_absent(container1, options).await?);
    assert!(
        !cloudfiles
            .create_container_if_absent(container1, builder::metadata(metadata.clone()))
            .await?
    );

    println!("\r\n====== begin test list_containers");
    let list = cloudfiles
        .list_containers(ListContainerOptions::new().prefix("container-test-"))
        .await?;
    for c in &list {
        println!("container: {} count {} bytes {}", c.name, c.count, c.bytes);
    }
    assert!(list.iter().any(|c| c.name == container1));

    println!("\r\n====== begin test metadata");
    let container = cloudfiles.container(container1);
    let info = container.info().await?.unwrap();
    assert_eq!(info.metadata().get("owner").map(String::as_str), Some("alice"));
    assert_eq!(info.versions_location(), Some(container2));
    let mut update = HashMap::new();
    update.insert("color".to_string(), "blue".to_string());
    assert!(container.update_metadata(update.clone()).await?);
    assert!(container.delete_metadata(metadata).await?);
    let info = container.info().await?.unwrap();
    assert!(info.metadata().get("owner").is_none());
    assert_eq!(info.metadata().get("color").map(String::as_str), Some("blue"));

    println!("====== begin clear test container");
    assert!(container.exists().await?);
    assert!(container.delete_if_empty().await?);
    assert!(!container.exists().await?);
    assert!(container.info().await?.is_none());
    assert!(!container.delete_if_empty().await?);
    assert!(cloudfiles.delete_container_if_empty(container2).await?);
    Ok(())
}
