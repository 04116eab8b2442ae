//! Headless dropdown picklist with single- and multi-select modes.
//!
//! The crate owns the picklist's state machine: the option catalog, the
//! current selection, the search text with its prefix filter, and whether
//! the dropdown is open. Painting the input box, dropdown and pills is left
//! to the caller, which reads [`PickListState`](state::PickListState) and
//! feeds user interaction back in as [`PickListEvent`](events::PickListEvent)s.

pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod item;
pub mod selection;
pub mod state;

pub mod prelude {
    pub use crate::config::PickListConfig;
    pub use crate::error::ConfigError;
    pub use crate::events::{
        ChangeNotification, Dispatch, EventResult, PickListEvent, SelectionPayload, update,
    };
    pub use crate::item::{OptionInput, PickOption};
    pub use crate::selection::{MultiSelection, SelectionMode};
    pub use crate::state::PickListState;
}
