//! Nutrition tracker tests
mod common;

#[tokio::test]
async fn test_empty_tracker_totals() {
    let handler = common::sample_handler().await;

    let output = handler.handle_tracker().await.unwrap();
    assert!(output.starts_with("Tracker (collapsed, 0 item(s))"));
    assert!(output.contains("Total: Carbs: 0g, Fat: 0g, Calories: 0"));
}

#[tokio::test]
async fn test_add_to_tracker_snapshots_item() {
    let handler = common::sample_handler().await;

    let output = handler
        .handle_add_to_tracker(" Dole Whip ".to_string())
        .await
        .unwrap();
    assert!(output.starts_with("Added Dole Whip (Carbs: 48g, Fat: 0g, Calories: 200)"));
    assert!(output.contains("Tracker (expanded, 1 item(s))"));
    assert!(output.contains("1. Dole Whip - Carbs: 48g, Fat: 0g, Calories: 200"));
}

#[tokio::test]
async fn test_tracker_accumulates_across_parks() {
    let handler = common::sample_handler().await;

    handler
        .handle_add_to_tracker("Grilled Chicken Salad".to_string())
        .await
        .unwrap();
    handler
        .handle_select_park("epcot".to_string())
        .await
        .unwrap();
    handler
        .handle_add_to_tracker("Edamame".to_string())
        .await
        .unwrap();

    let output = handler.handle_tracker().await.unwrap();
    assert!(output.contains("1. Grilled Chicken Salad"));
    assert!(output.contains("2. Edamame"));
    assert!(output.contains("Total: Carbs: 27g, Fat: 24g, Calories: 570"));
}

#[tokio::test]
async fn test_add_unknown_item_fails() {
    let handler = common::sample_handler().await;

    // Churros belong to EPCOT, not the selected park
    let result = handler.handle_add_to_tracker("Churros".to_string()).await;
    assert!(result.is_err());

    handler.with_state(|state| {
        assert!(state.tracker().is_empty());
        assert!(!state.tracker().expanded);
    });
}

#[tokio::test]
async fn test_add_ignores_menu_filters() {
    let handler = common::sample_handler().await;

    handler
        .handle_set_filters(None, None, None, None, None, None, Some(true))
        .await
        .unwrap();
    assert!(
        handler
            .handle_add_to_tracker("Frozen Lemonade".to_string())
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn test_toggle_tracker() {
    let handler = common::sample_handler().await;

    handler
        .handle_add_to_tracker("Dole Whip".to_string())
        .await
        .unwrap();
    let collapsed = handler.handle_toggle_tracker().await.unwrap();
    assert!(collapsed.starts_with("Tracker (collapsed, 1 item(s))"));
    assert!(!collapsed.contains("1. Dole Whip"));

    // Adding expands again
    handler
        .handle_add_to_tracker("Dole Whip".to_string())
        .await
        .unwrap();
    let output = handler.handle_tracker().await.unwrap();
    assert!(output.starts_with("Tracker (expanded, 2 item(s))"));
    assert!(output.contains("Total: Carbs: 96g"));
}

#[tokio::test]
async fn test_scroll_to_sections() {
    let handler = common::sample_handler().await;

    let tracker = handler.handle_scroll_to("#tracker".to_string()).await.unwrap();
    assert_eq!(tracker, handler.handle_tracker().await.unwrap());

    let menu = handler.handle_scroll_to("menu".to_string()).await.unwrap();
    assert_eq!(menu, handler.handle_menu().await.unwrap());

    assert!(handler.handle_scroll_to("footer".to_string()).await.is_err());
}
