use picklist::prelude::*;

#[test]
fn test_from_json_host_payload() {
    let config = PickListConfig::from_json(
        r#"{
            "options": [
                {"value": "CA", "label": "California"},
                {"value": "TX", "label": "Texas", "selected": true}
            ],
            "selectedValues": ["TX"],
            "mode": "multi",
            "minChars": 3,
            "fieldName": "States",
            "required": true
        }"#,
    )
    .unwrap();

    assert_eq!(config.mode, SelectionMode::Multi);
    assert_eq!(config.min_chars, 3);
    assert_eq!(config.field_name.as_deref(), Some("States"));
    assert!(config.required);
    assert!(!config.disabled);

    let picklist = PickListState::new(&config);
    assert_eq!(picklist.search_text(), "1 Option(s) Selected");
    assert!(picklist.is_required());
}

#[test]
fn test_from_json_defaults() {
    let config = PickListConfig::from_json("{}").unwrap();
    assert_eq!(config, PickListConfig::default());
    assert_eq!(config.min_chars, 2);
    assert_eq!(config.mode, SelectionMode::Single);
    assert!(config.options.is_none());
}

#[test]
fn test_from_json_mode_name() {
    let config = PickListConfig::from_json(r#"{"mode": "multi"}"#).unwrap();
    assert_eq!(config.mode, SelectionMode::Multi);
}

#[test]
fn test_from_json_rejects_unknown_keys() {
    let result = PickListConfig::from_json(r#"{"mode": "single", "multiSelect": true}"#);
    match result {
        Err(ConfigError::Parse(e)) => assert!(e.to_string().contains("multiSelect")),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_from_json_rejects_boolean_mode() {
    let result = PickListConfig::from_json(r#"{"mode": true}"#);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_from_json_rejects_option_without_label() {
    let result = PickListConfig::from_json(r#"{"options": [{"value": "CA"}]}"#);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_from_json_rejects_negative_min_chars() {
    let result = PickListConfig::from_json(r#"{"minChars": -1}"#);
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_host_selected_flag_is_ignored() {
    let config = PickListConfig::from_json(
        r#"{"options": [{"value": "CA", "label": "California", "selected": true}], "mode": "multi"}"#,
    )
    .unwrap();
    let picklist = PickListState::new(&config);
    assert!(!picklist.options()[0].selected);
    assert_eq!(picklist.search_text(), "0 Option(s) Selected");
}

#[test]
fn test_validate_reports_empty_value() {
    let config = PickListConfig::new().options([("CA", "California"), ("", "Nowhere")]);
    match config.validate() {
        Err(ConfigError::EmptyValue { index }) => assert_eq!(index, 1),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_validate_reports_duplicate_value() {
    let config = PickListConfig::new().options([("CA", "California"), ("CA", "Cali")]);
    let err = config.validate().unwrap_err();
    assert_eq!(err.to_string(), "Option value 'CA' is not unique");
}

#[test]
fn test_validate_accepts_absent_options() {
    assert!(PickListConfig::new().validate().is_ok());
}

#[test]
fn test_options_from_owned_pairs() {
    let colors = vec![
        ("r".to_string(), "Red".to_string()),
        ("g".to_string(), "Green".to_string()),
    ];
    let picklist = PickListState::new(&PickListConfig::new().options(colors));
    assert_eq!(picklist.options()[1].value, "g");
    assert_eq!(picklist.options()[1].label, "Green");
}
