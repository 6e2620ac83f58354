//! Catalog loading tests
mod common;

use park_menu_mcp::*;
use park_menu_mcp::loader::fetch_catalog;
use std::sync::atomic::Ordering;

#[tokio::test]
async fn test_sample_catalog_loads() {
    let source = CatalogSource::File(common::sample_catalog_path());
    let catalog = fetch_catalog(&source).await.unwrap();
    assert_eq!(catalog.park_ids(), vec!["magic-kingdom", "epcot"]);
    assert_eq!(catalog.item_count(), 7);
}

#[tokio::test]
async fn test_fetch_over_http() {
    let url = common::serve_once("200 OK", common::BURGER_AND_SALAD).await;
    let source: CatalogSource = url.parse().unwrap();
    assert!(matches!(source, CatalogSource::Url(_)));

    let catalog = fetch_catalog(&source).await.unwrap();
    assert_eq!(catalog.first_park_id(), Some("test-park"));
    assert_eq!(catalog.item_count(), 2);
}

#[tokio::test]
async fn test_non_success_status_fails() {
    let url = common::serve_once("404 Not Found", "{}").await;
    let err = fetch_catalog(&url.parse().unwrap()).await.unwrap_err();
    match err {
        LoadError::Status(status) => assert_eq!(status.as_u16(), 404),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let url = common::unreachable_url().await;
    let err = fetch_catalog(&url.parse().unwrap()).await.unwrap_err();
    assert!(matches!(err, LoadError::Network(_)));
}

#[tokio::test]
async fn test_handler_load_over_http_selects_first_park() {
    let url = common::serve_once("200 OK", common::BURGER_AND_SALAD).await;
    let handler = MenuBrowserHandler::new(url.parse().unwrap(), FilterState::default());
    handler.load().await;

    handler.with_state(|state| {
        assert_eq!(state.load_state(), &LoadState::Loaded);
        assert_eq!(state.selected_park_id(), Some("test-park"));
    });
}

#[tokio::test]
async fn test_malformed_document_fails_whole_load() {
    let (handler, _file) = common::loaded_handler(r#"{"parks": [{"id": "a"}, "#).await;

    handler.with_state(|state| {
        assert!(matches!(state.load_state(), LoadState::Failed(_)));
        assert!(state.catalog().is_empty());
        assert_eq!(state.selected_park_id(), None);
    });
}

#[tokio::test]
async fn test_second_load_does_not_fetch() {
    let (url, requests) = common::serve_counting(common::BURGER_AND_SALAD).await;
    let handler = MenuBrowserHandler::new(url.parse().unwrap(), FilterState::default());

    handler.load().await;
    handler.load().await;

    assert_eq!(requests.load(Ordering::SeqCst), 1);
    handler.with_state(|state| {
        assert_eq!(state.load_state(), &LoadState::Loaded);
        assert_eq!(state.selected_park_id(), Some("test-park"));
    });
}

#[tokio::test]
async fn test_second_load_is_ignored() {
    let handler = common::sample_handler().await;
    handler
        .handle_select_park("epcot".to_string())
        .await
        .unwrap();

    handler.load().await;

    handler.with_state(|state| {
        assert_eq!(state.load_state(), &LoadState::Loaded);
        assert_eq!(state.selected_park_id(), Some("epcot"));
    });
}
