//! Common test utilities for integration tests
#![allow(dead_code)]

use park_menu_mcp::{CatalogSource, FilterState, MenuBrowserHandler};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::NamedTempFile;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// One park with a fried burger and a light salad
pub const BURGER_AND_SALAD: &str = r#"{
    "parks": [
        {
            "id": "test-park",
            "name": "Test Park",
            "subtitle": "Scenario catalog",
            "lands": ["Main Street", "Frontierland"],
            "menuItems": [
                {
                    "name": "Burger",
                    "description": "Quarter-pound burger",
                    "restaurant": "Grill House",
                    "land": "Main Street",
                    "type": "food",
                    "calories": 600,
                    "fat": 25,
                    "carbs": 40,
                    "isFried": true,
                    "vegetarian": false
                },
                {
                    "name": "Salad",
                    "description": "Garden greens",
                    "restaurant": "Green Stand",
                    "land": "Frontierland",
                    "type": "food",
                    "calories": 200,
                    "fat": 5,
                    "carbs": 10,
                    "isFried": false,
                    "vegetarian": true
                }
            ]
        }
    ]
}"#;

/// The demo catalog shipped with the crate
pub fn sample_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample-parks.json")
}

/// Write a catalog document to a temporary file
pub fn write_catalog(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Create a handler over `json` and run the startup load
pub async fn loaded_handler(json: &str) -> (MenuBrowserHandler, NamedTempFile) {
    let file = write_catalog(json);
    let handler = MenuBrowserHandler::new(
        CatalogSource::File(file.path().to_path_buf()),
        FilterState::default(),
    );
    handler.load().await;
    (handler, file)
}

/// Create a handler over the demo catalog and run the startup load
pub async fn sample_handler() -> MenuBrowserHandler {
    let handler = MenuBrowserHandler::new(
        CatalogSource::File(sample_catalog_path()),
        FilterState::default(),
    );
    handler.load().await;
    handler
}

/// Menu item names in the order the `menu` tool lists them
pub fn listed_names(menu_output: &str) -> Vec<String> {
    menu_output
        .lines()
        .filter_map(|line| line.strip_prefix("- "))
        .map(|line| match line.find(" [") {
            Some(end) => line[..end].to_string(),
            None => line.to_string(),
        })
        .collect()
}

/// Serve a single HTTP response on a local port and return the URL
pub async fn serve_once(status_line: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    format!("http://{}/data.json", addr)
}

/// Serve `body` with 200 OK to every request and count the requests
pub async fn serve_counting(body: &str) -> (String, Arc<AtomicUsize>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    let requests = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&requests);

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap_or(0);
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            counter.fetch_add(1, Ordering::SeqCst);
            socket.write_all(response.as_bytes()).await.ok();
            socket.shutdown().await.ok();
        }
    });

    (format!("http://{}/data.json", addr), requests)
}

/// A URL on a local port nothing listens on
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/data.json", addr)
}
