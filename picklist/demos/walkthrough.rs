//! Drives a multi-select picklist through a scripted session.
//!
//! Run with `cargo run -p picklist --example walkthrough`; state transitions
//! are logged to `picklist-walkthrough.log`.

use std::fs::File;

use picklist::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

fn print_state(picklist: &PickListState) {
    let arrow = if picklist.is_open() { "▲" } else { "▼" };
    println!("[{}] {}", picklist.search_text(), arrow);
    if picklist.is_open() {
        for option in picklist.visible_options() {
            let mark = if option.selected { "x" } else { " " };
            println!("  [{}] {}", mark, option.label);
        }
        if !picklist.message().is_empty() {
            println!("  {}", picklist.message());
        }
    }
    let pills: Vec<&str> = picklist.pills().map(|o| o.label.as_str()).collect();
    if !pills.is_empty() {
        println!("  pills: {}", pills.join(" | "));
    }
}

fn main() {
    let log_file = File::create("picklist-walkthrough.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = PickListConfig::from_json(
        r#"{
            "options": [
                {"value": "CA", "label": "California"},
                {"value": "CO", "label": "Colorado"},
                {"value": "TX", "label": "Texas"}
            ],
            "selectedValues": ["TX"],
            "mode": "multi",
            "fieldName": "States"
        }"#,
    )
    .expect("Invalid demo configuration");

    let mut picklist = PickListState::default();
    let events = vec![
        PickListEvent::Initialize(config),
        PickListEvent::Focus,
        PickListEvent::Open,
        PickListEvent::Input("Co".to_string()),
        PickListEvent::Select("CO".to_string()),
        PickListEvent::Input("Zz".to_string()),
        PickListEvent::Blur,
        PickListEvent::RemovePill("TX".to_string()),
    ];

    for event in events {
        println!("> {:?}", event);
        let dispatch = picklist.handle(event);
        if let Some(notification) = dispatch.notification {
            match notification.to_json() {
                Ok(json) => println!("  notify: {}", json),
                Err(e) => eprintln!("  notify failed: {}", e),
            }
        }
        print_state(&picklist);
    }
}
