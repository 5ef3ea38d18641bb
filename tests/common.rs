#![allow(dead_code)]
use std::env;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use cloudfiles_rsc::error::Result;
use cloudfiles_rsc::options::CreateContainerOptions;
use cloudfiles_rsc::{provider::StaticProvider, CloudFiles};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Client for a live service, `None` when the environment is not configured.
/// - `CLOUDFILES_STORAGE_URL`
/// - `CLOUDFILES_AUTH_TOKEN`
pub fn get_test_cloudfiles() -> Option<CloudFiles> {
    init_logger();
    dotenv::dotenv().ok();
    let provider = StaticProvider::from_env()?;
    let storage_url = env::var("CLOUDFILES_STORAGE_URL").ok()?;

    CloudFiles::builder()
        .storage_url(storage_url)
        .provider(provider)
        .build()
        .ok()
}

/// Client that is never used to send, only to build requests.
pub fn get_offline_cloudfiles() -> CloudFiles {
    init_logger();
    CloudFiles::builder()
        .storage_url("https://storage101.dfw1.clouddrive.com/v1/MossoCloudFS_test")
        .provider(StaticProvider::new("test-token"))
        .agent("cloudfiles-rs-test")
        .build()
        .unwrap()
}

pub async fn create_container_if_not_exist(cloudfiles: &CloudFiles, container: &str) -> Result<()> {
    let exists = cloudfiles.container_exists(container).await?;
    if !exists {
        cloudfiles
            .create_container_if_absent(container, CreateContainerOptions::none())
            .await?;
    }
    return Ok(());
}

/// Request heads received by a local server, lower-cased.
pub type Received = Arc<Mutex<Vec<String>>>;

/// Start a local server answering every request with `status`, the extra
/// `headers` and `body`. Returns a client pointing at it.
pub async fn serve_status(
    status: u16,
    headers: &'static [(&'static str, &'static str)],
    body: &'static str,
) -> (CloudFiles, Received) {
    init_logger();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let received: Received = Default::default();
    let log = received.clone();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let log = log.clone();
            tokio::spawn(async move {
                let mut buf = Vec::new();
                let mut chunk = [0u8; 1024];
                while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    match socket.read(&mut chunk).await {
                        Ok(0) | Err(_) => break,
                        Ok(n) => buf.extend_from_slice(&chunk[..n]),
                    }
                }
                let head = String::from_utf8_lossy(&buf).to_lowercase();
                log.lock().unwrap().push(head);

                let mut response = format!("HTTP/1.1 {} Status\r\nconnection: close\r\n", status);
                for (k, v) in headers {
                    response.push_str(&format!("{}: {}\r\n", k, v));
                }
                if status != 204 {
                    response.push_str(&format!("content-length: {}\r\n", body.len()));
                }
                response.push_str("\r\n");
                response.push_str(body);
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let cloudfiles = CloudFiles::builder()
        .storage_url(format!("http://127.0.0.1:{port}/v1/AUTH_test"))
        .provider(StaticProvider::new("test-token"))
        .client(client)
        .build()
        .unwrap();
    (cloudfiles, received)
}
