//! Event handling for the picklist.
//!
//! The boundary layer (whatever owns the real input box and dropdown) turns
//! user interaction into [`PickListEvent`]s and feeds them to
//! [`PickListState::handle`]. Each event runs to completion and reports
//! whether it was consumed and whether the host must be notified.

use serde::Serialize;

use crate::config::PickListConfig;
use crate::state::PickListState;

// =============================================================================
// Events
// =============================================================================

/// Interaction delivered to a picklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickListEvent {
    /// Host (re)initialization with fresh options and selection.
    Initialize(PickListConfig),
    /// Input box text changed.
    Input(String),
    /// An option in the dropdown was clicked.
    Select(String),
    /// Input box clicked to browse the full list.
    Open,
    /// A pill's remove button was clicked.
    RemovePill(String),
    Focus,
    Blur,
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was a no-op.
    Ignored,
    /// Event changed widget state.
    ///
    /// For a multi-select `Select` this also tells the boundary to suppress
    /// its default so the dropdown stays open.
    Consumed,
}

impl EventResult {
    /// Check if the event changed widget state.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Outcome of one [`PickListState::handle`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub result: EventResult,
    /// Present when the host must be told about a committed change.
    pub notification: Option<ChangeNotification>,
}

impl Dispatch {
    fn ignored() -> Self {
        Self {
            result: EventResult::Ignored,
            notification: None,
        }
    }

    fn consumed(notification: Option<ChangeNotification>) -> Self {
        Self {
            result: EventResult::Consumed,
            notification,
        }
    }
}

// =============================================================================
// Change notification
// =============================================================================

/// The picklist's only outward signal.
///
/// Both selection fields are always present; the host knows which mode it
/// configured. Serializes to the host event shape:
///
/// ```json
/// {"payloadType":"custom-select","fieldName":"State","payload":{"value":null,"values":["TX"]}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeNotification {
    pub payload_type: &'static str,
    pub field_name: Option<String>,
    pub payload: SelectionPayload,
}

/// Selection carried by a [`ChangeNotification`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionPayload {
    /// Single-select value.
    pub value: Option<String>,
    /// Multi-select values in selection order.
    pub values: Vec<String>,
}

impl ChangeNotification {
    pub const PAYLOAD_TYPE: &'static str = "custom-select";

    /// Create a notification for `field_name` with the given selection.
    pub fn new(field_name: Option<String>, value: Option<String>, values: Vec<String>) -> Self {
        Self {
            payload_type: Self::PAYLOAD_TYPE,
            field_name,
            payload: SelectionPayload { value, values },
        }
    }

    /// Serialize to the host event JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// =============================================================================
// Dispatch
// =============================================================================

impl PickListState {
    /// Route one event to the matching operation.
    pub fn handle(&mut self, event: PickListEvent) -> Dispatch {
        log::debug!("PickList::handle field={:?} event={:?}", self.field_name(), event);

        match event {
            PickListEvent::Initialize(config) => {
                self.initialize(&config);
                Dispatch::consumed(None)
            }
            PickListEvent::Input(text) => {
                self.on_search_input(&text);
                Dispatch::consumed(None)
            }
            PickListEvent::Select(value) => {
                if !self.has_option(&value) {
                    return Dispatch::ignored();
                }
                let notification = self.select_option(&value);
                Dispatch::consumed(notification)
            }
            PickListEvent::Open => {
                if self.open_dropdown() {
                    Dispatch::consumed(None)
                } else {
                    Dispatch::ignored()
                }
            }
            PickListEvent::RemovePill(value) => match self.remove_selection(&value) {
                Some(notification) => Dispatch::consumed(Some(notification)),
                None => Dispatch::ignored(),
            },
            PickListEvent::Focus => {
                self.on_focus();
                Dispatch::consumed(None)
            }
            PickListEvent::Blur => {
                if !self.is_open() {
                    return Dispatch::ignored();
                }
                let notification = self.on_blur();
                Dispatch::consumed(notification)
            }
        }
    }
}

/// Pure-function form of [`PickListState::handle`].
///
/// Takes the state by value and hands back the next state together with the
/// notification, if any.
pub fn update(
    mut state: PickListState,
    event: PickListEvent,
) -> (PickListState, Option<ChangeNotification>) {
    let dispatch = state.handle(event);
    (state, dispatch.notification)
}
