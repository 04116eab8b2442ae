//! Change notification gating.
//!
//! Single-select clicks and pill removal notify immediately, while
//! multi-select changes are only reported on blur when the selection size
//! moved since focus. The two paths are intentionally kept different.

use picklist::prelude::*;

fn multi() -> PickListState {
    PickListState::new(
        &PickListConfig::new()
            .options([("CA", "California"), ("TX", "Texas"), ("NY", "New York")])
            .multi_select()
            .field_name("States"),
    )
}

#[test]
fn test_blur_notifies_once_after_count_change() {
    let mut picklist = multi();
    picklist.open_dropdown();
    picklist.on_focus();

    let mut notifications = Vec::new();
    notifications.extend(picklist.select_option("CA"));
    notifications.extend(picklist.select_option("TX"));
    notifications.extend(picklist.on_blur());

    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].payload.values, vec!["CA", "TX"]);
    assert_eq!(notifications[0].field_name.as_deref(), Some("States"));
}

#[test]
fn test_blur_silent_when_count_unchanged() {
    let mut picklist = multi();
    picklist.open_dropdown();
    picklist.on_focus();

    let mut notifications = Vec::new();
    notifications.extend(picklist.select_option("CA"));
    notifications.extend(picklist.select_option("CA"));
    notifications.extend(picklist.on_blur());

    assert!(notifications.is_empty());
}

// Swapping one value for another keeps the count, so blur stays silent.
#[test]
fn test_blur_silent_when_selection_swapped() {
    let mut picklist = PickListState::new(
        &PickListConfig::new()
            .options([("CA", "California"), ("TX", "Texas")])
            .selected_values(["CA"])
            .multi_select(),
    );
    picklist.open_dropdown();
    picklist.on_focus();
    picklist.select_option("CA");
    picklist.select_option("TX");
    assert!(picklist.on_blur().is_none());
    assert_eq!(picklist.values().to_vec(), vec!["TX"]);
}

#[test]
fn test_open_and_close_without_change_is_silent() {
    let mut picklist = multi();
    picklist.on_focus();
    picklist.open_dropdown();
    assert!(picklist.on_blur().is_none());
}

// Only focus takes the snapshot; a host re-init in between does not.
#[test]
fn test_reinitialize_keeps_focus_snapshot() {
    let mut picklist = multi();
    picklist.on_focus();
    picklist.initialize(
        &PickListConfig::new()
            .options([("CA", "California"), ("TX", "Texas")])
            .selected_values(["CA", "TX"])
            .multi_select(),
    );
    picklist.open_dropdown();

    let change = picklist.on_blur().expect("count moved since focus");
    assert_eq!(change.payload.values, vec!["CA", "TX"]);
}

#[test]
fn test_focus_after_reinitialize_takes_new_snapshot() {
    let mut picklist = multi();
    picklist.on_focus();
    picklist.initialize(
        &PickListConfig::new()
            .options([("CA", "California"), ("TX", "Texas")])
            .selected_values(["CA", "TX"])
            .multi_select(),
    );
    picklist.on_focus();
    picklist.open_dropdown();
    assert!(picklist.on_blur().is_none());
}

#[test]
fn test_pill_removal_always_notifies() {
    let mut picklist = PickListState::new(
        &PickListConfig::new()
            .options([("CA", "California"), ("TX", "Texas")])
            .selected_values(["CA", "TX"])
            .multi_select()
            .field_name("States"),
    );

    let change = picklist.remove_selection("TX").expect("removal notifies");
    assert_eq!(change.payload.values, vec!["CA"]);
    assert_eq!(change.payload.value, None);
}

#[test]
fn test_pill_removal_of_unknown_value_is_silent() {
    let mut picklist = multi();
    assert!(picklist.remove_selection("ZZ").is_none());
}

#[test]
fn test_single_select_never_notifies_on_blur() {
    let mut picklist = PickListState::new(
        &PickListConfig::new().options([("CA", "California"), ("TX", "Texas")]),
    );
    picklist.on_focus();
    picklist.open_dropdown();
    assert!(picklist.select_option("TX").is_some());
    picklist.open_dropdown();
    assert!(picklist.on_blur().is_none());
}

#[test]
fn test_emit_change_carries_both_fields() {
    let picklist = PickListState::new(
        &PickListConfig::new()
            .options([("CA", "California")])
            .selected_value("CA")
            .field_name("State"),
    );
    let change = picklist.emit_change();
    assert_eq!(change.payload.value.as_deref(), Some("CA"));
    assert!(change.payload.values.is_empty());
}

#[test]
fn test_notification_json_shape() {
    let change = ChangeNotification::new(
        Some("States".to_string()),
        None,
        vec!["CA".to_string(), "TX".to_string()],
    );
    let json: serde_json::Value = serde_json::from_str(&change.to_json().unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "payloadType": "custom-select",
            "fieldName": "States",
            "payload": { "value": null, "values": ["CA", "TX"] }
        })
    );
}
