mod common;

use std::collections::HashMap;

use common::serve_status;
use cloudfiles_rsc::error::{Error, Result};
use cloudfiles_rsc::options::{builder, CreateContainerOptions, ListContainerOptions};

fn meta(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::main]
#[test]
async fn test_create_container_status() -> Result<()> {
    let (cloudfiles, received) = serve_status(201, &[], "").await;
    let options = CreateContainerOptions::new()
        .metadata(meta(&[("Owner", "alice")]))
        .versions_location("archive");
    assert!(cloudfiles.create_container_if_absent("photos", options).await?);
    let heads = received.lock().unwrap().clone();
    assert_eq!(heads.len(), 1);
    assert!(heads[0].starts_with("put /v1/auth_test/photos http/1.1"));
    assert!(heads[0].contains("x-auth-token: test-token"));
    assert!(heads[0].contains("x-container-meta-owner: alice"));
    assert!(heads[0].contains("x-versions-location: archive"));

    let (cloudfiles, _) = serve_status(202, &[], "").await;
    let created = cloudfiles
        .create_container_if_absent("photos", builder::versions_location("archive"))
        .await?;
    assert!(!created);

    let (cloudfiles, _) = serve_status(500, &[], "boom").await;
    let res = cloudfiles
        .create_container_if_absent("photos", CreateContainerOptions::none())
        .await;
    match res {
        Err(Error::SwiftError(e)) => {
            assert_eq!(e.status, 500);
            assert_eq!(e.message, "boom");
            assert_eq!(e.container_name.as_deref(), Some("photos"));
        }
        _ => panic!("expected a SwiftError"),
    }
    Ok(())
}

#[tokio::main]
#[test]
async fn test_create_container_invalid_metadata() -> Result<()> {
    let (cloudfiles, received) = serve_status(201, &[], "").await;
    let options = builder::metadata(meta(&[("bad key", "v")]));
    let res = cloudfiles.create_container_if_absent("photos", options).await;
    assert!(matches!(res, Err(Error::ValueError(_))));
    assert!(received.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::main]
#[test]
async fn test_delete_container_status() -> Result<()> {
    let (cloudfiles, received) = serve_status(204, &[], "").await;
    assert!(cloudfiles.delete_container_if_empty("photos").await?);
    assert!(received.lock().unwrap()[0].starts_with("delete /v1/auth_test/photos"));

    let (cloudfiles, _) = serve_status(404, &[], "Not Found").await;
    assert!(!cloudfiles.delete_container_if_empty("photos").await?);

    let (cloudfiles, _) = serve_status(409, &[], "Conflict").await;
    let res = cloudfiles.delete_container_if_empty("photos").await;
    assert!(matches!(res, Err(Error::ContainerNotEmpty(ref name)) if name == "photos"));
    Ok(())
}

#[tokio::main]
#[test]
async fn test_get_container_status() -> Result<()> {
    let (cloudfiles, _) = serve_status(404, &[], "").await;
    assert!(cloudfiles.get_container("photos").await?.is_none());
    assert!(!cloudfiles.container_exists("photos").await?);

    let headers = &[
        ("x-container-object-count", "2"),
        ("x-container-bytes-used", "14"),
        ("x-container-meta-owner", "alice"),
        ("x-container-read", ".r:*,.rlistings"),
    ];
    let (cloudfiles, _) = serve_status(204, headers, "").await;
    assert!(cloudfiles.container_exists("photos").await?);
    let info = cloudfiles.get_container("photos").await?.unwrap();
    assert_eq!(info.name(), "photos");
    assert_eq!(info.object_count(), 2);
    assert_eq!(info.bytes_used(), 14);
    assert_eq!(info.metadata().get("owner").map(String::as_str), Some("alice"));
    assert!(info.is_anybody_read());
    Ok(())
}

#[tokio::main]
#[test]
async fn test_list_containers_status() -> Result<()> {
    let (cloudfiles, received) = serve_status(204, &[], "").await;
    let list = cloudfiles
        .list_containers(ListContainerOptions::new().prefix("photos"))
        .await?;
    assert!(list.is_empty());
    assert!(received.lock().unwrap()[0].starts_with("get /v1/auth_test?prefix=photos&format=json"));

    let body = r#"[{"count": 1, "bytes": 14, "name": "photos"}, {"count": 0, "bytes": 0, "name": "photos-versions"}]"#;
    let (cloudfiles, _) = serve_status(200, &[("content-type", "application/json")], body).await;
    let list = cloudfiles.list_containers(ListContainerOptions::new()).await?;
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].name, "photos");
    assert_eq!(list[1].count, 0);
    Ok(())
}

#[tokio::main]
#[test]
async fn test_container_metadata_status() -> Result<()> {
    let (cloudfiles, received) = serve_status(204, &[], "").await;
    let container = cloudfiles.container("photos");
    assert!(container.update_metadata(meta(&[("color", "blue")])).await?);
    assert!(container.delete_metadata(meta(&[("owner", "alice")])).await?);
    let heads = received.lock().unwrap().clone();
    assert!(heads[0].starts_with("post /v1/auth_test/photos"));
    assert!(heads[0].contains("x-container-meta-color: blue"));
    assert!(heads[1].contains("x-remove-container-meta-owner:"));
    assert!(!heads[1].contains("alice"));

    let (cloudfiles, _) = serve_status(404, &[], "Not Found").await;
    let updated = cloudfiles
        .update_container_metadata("photos", meta(&[("color", "blue")]))
        .await?;
    assert!(!updated);
    Ok(())
}
