//! Picklist state and the operations that mutate it.

use crate::config::{DEFAULT_MIN_CHARS, PickListConfig};
use crate::events::ChangeNotification;
use crate::filter::{apply_prefix_filter, no_results_message, selected_count_text, show_all};
use crate::item::PickOption;
use crate::selection::{MultiSelection, SelectionMode};

/// State for a picklist widget.
///
/// Owns a private copy of the options and the selection. The rendering layer
/// reads it through the accessors and repaints while [`is_dirty`] is set.
///
/// # Example
///
/// ```
/// use picklist::prelude::*;
///
/// let mut picklist = PickListState::new(
///     &PickListConfig::new()
///         .options([("CA", "California"), ("TX", "Texas")])
///         .selected_value("TX"),
/// );
/// assert_eq!(picklist.search_text(), "Texas");
///
/// picklist.on_search_input("Cal");
/// assert_eq!(picklist.visible_options().count(), 1);
///
/// let change = picklist.select_option("CA").unwrap();
/// assert_eq!(change.payload.value.as_deref(), Some("CA"));
/// assert!(!picklist.is_open());
/// ```
///
/// [`is_dirty`]: PickListState::is_dirty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickListState {
    options: Vec<PickOption>,
    mode: SelectionMode,
    value: Option<String>,
    values: MultiSelection,
    search_text: String,
    open: bool,
    message: String,
    min_chars: usize,
    values_len_at_focus: usize,
    field_name: Option<String>,
    label: Option<String>,
    disabled: bool,
    required: bool,
    dirty: bool,
}

impl Default for PickListState {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            mode: SelectionMode::Single,
            value: None,
            values: MultiSelection::new(),
            search_text: String::new(),
            open: false,
            message: String::new(),
            min_chars: DEFAULT_MIN_CHARS,
            values_len_at_focus: 0,
            field_name: None,
            label: None,
            disabled: false,
            required: false,
            dirty: false,
        }
    }
}

impl PickListState {
    /// Create a picklist initialized from `config`.
    pub fn new(config: &PickListConfig) -> Self {
        let mut state = Self::default();
        state.initialize(config);
        state
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Replace options, selection and display text from a host config.
    ///
    /// Can be called at any time, including after user interaction. The
    /// config is copied; later changes on either side do not leak across.
    pub fn initialize(&mut self, config: &PickListConfig) {
        self.open = false;
        self.message.clear();
        self.mode = config.mode;
        self.min_chars = config.min_chars;
        self.disabled = config.disabled;
        self.required = config.required;
        self.field_name = config.field_name.clone();
        self.label = config.label.clone();
        self.options = config.build_options();
        self.value = None;
        self.values.clear();

        match self.mode {
            SelectionMode::Multi => {
                for wanted in config.selected_values.iter().flatten() {
                    match self.options.iter_mut().find(|o| &o.value == wanted) {
                        Some(option) => {
                            if self.values.insert(wanted) {
                                option.selected = true;
                            }
                        }
                        None => log::warn!(
                            "PickList::initialize field={:?} unknown selected value={}",
                            self.field_name,
                            wanted
                        ),
                    }
                }
                self.search_text = selected_count_text(self.selected_count());
            }
            SelectionMode::Single => {
                let chosen = config
                    .selected_value
                    .as_deref()
                    .and_then(|wanted| self.find(wanted))
                    .map(|o| (o.value.clone(), o.label.clone()));
                if chosen.is_none() && config.selected_value.is_some() {
                    log::warn!(
                        "PickList::initialize field={:?} unknown selected value={:?}",
                        self.field_name,
                        config.selected_value
                    );
                }
                let (value, label) = chosen.unzip();
                self.value = value;
                self.search_text = label.unwrap_or_default();
            }
        }

        self.dirty = true;

        log::debug!(
            "PickList::initialize field={:?} mode={:?} options={} value={:?} values={}",
            self.field_name,
            self.mode,
            self.options.len(),
            self.value,
            self.values.len()
        );
    }

    /// Handle typing in the input box.
    pub fn on_search_input(&mut self, text: &str) {
        self.search_text = text.to_string();
        self.message.clear();
        self.dirty = true;

        if text.is_empty() {
            self.open = false;
            return;
        }

        // Below the threshold visibility keeps whatever it was
        if text.chars().count() >= self.min_chars {
            let visible = apply_prefix_filter(&mut self.options, text);
            if visible == 0 {
                self.message = no_results_message(text);
            }
            log::debug!(
                "PickList::on_search_input field={:?} text={:?} visible={}",
                self.field_name,
                text,
                visible
            );
        }
        self.open = true;
    }

    /// Commit a click on an option.
    ///
    /// Multi-select toggles the value and leaves the dropdown open; the host
    /// hears about it on blur. Single-select commits, closes the dropdown and
    /// returns the notification right away.
    pub fn select_option(&mut self, value: &str) -> Option<ChangeNotification> {
        let index = self.position(value)?;

        match self.mode {
            SelectionMode::Multi => {
                let selected = self.values.toggle(value);
                self.options[index].selected = selected;
                self.search_text = selected_count_text(self.selected_count());
                self.dirty = true;
                log::debug!(
                    "PickList::select_option field={:?} value={} selected={} count={}",
                    self.field_name,
                    value,
                    selected,
                    self.values.len()
                );
                None
            }
            SelectionMode::Single => {
                let option = &self.options[index];
                self.value = Some(option.value.clone());
                self.search_text = option.label.clone();
                self.open = false;
                self.dirty = true;
                log::debug!(
                    "PickList::select_option field={:?} value={}",
                    self.field_name,
                    value
                );
                Some(self.emit_change())
            }
        }
    }

    /// Open the full, unfiltered list. Returns false when nothing happened.
    pub fn open_dropdown(&mut self) -> bool {
        if self.disabled || self.options.is_empty() {
            return false;
        }
        self.message.clear();
        self.search_text.clear();
        show_all(&mut self.options);
        self.open = true;
        self.dirty = true;
        true
    }

    /// Remove a multi-select pill. Always notifies unless `value` is unknown.
    pub fn remove_selection(&mut self, value: &str) -> Option<ChangeNotification> {
        let index = self.position(value)?;

        self.options[index].selected = false;
        self.values.remove(value);
        if self.mode.is_multi() {
            self.search_text = selected_count_text(self.selected_count());
        }
        self.dirty = true;

        log::debug!(
            "PickList::remove_selection field={:?} value={} count={}",
            self.field_name,
            value,
            self.values.len()
        );
        Some(self.emit_change())
    }

    /// Close the dropdown when focus leaves the input.
    ///
    /// Uncommitted typing is reverted. Notifies only if the number of
    /// multi-select values changed since the last focus; a single-select
    /// picklist never notifies from here.
    pub fn on_blur(&mut self) -> Option<ChangeNotification> {
        if !self.open {
            return None;
        }

        self.search_text = match self.mode {
            SelectionMode::Multi => selected_count_text(self.selected_count()),
            SelectionMode::Single => self.selected_label().unwrap_or_default().to_string(),
        };
        self.open = false;
        self.dirty = true;

        let changed = self.values.len() != self.values_len_at_focus;
        log::debug!(
            "PickList::on_blur field={:?} count={} at_focus={} notify={}",
            self.field_name,
            self.values.len(),
            self.values_len_at_focus,
            changed
        );
        changed.then(|| self.emit_change())
    }

    /// Remember the selection size for the next blur.
    pub fn on_focus(&mut self) {
        self.values_len_at_focus = self.values.len();
    }

    /// Build the notification for the current selection.
    pub fn emit_change(&self) -> ChangeNotification {
        ChangeNotification::new(
            self.field_name.clone(),
            self.value.clone(),
            self.values.to_vec(),
        )
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// All options in render order.
    pub fn options(&self) -> &[PickOption] {
        &self.options
    }

    /// Options the dropdown should currently list.
    pub fn visible_options(&self) -> impl Iterator<Item = &PickOption> {
        self.options.iter().filter(|o| o.visible)
    }

    /// Selected options in the order they were picked.
    pub fn pills(&self) -> impl Iterator<Item = &PickOption> {
        self.values.iter().filter_map(|v| self.find(v))
    }

    /// Current input box text.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Status message, empty unless a filter found nothing.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the dropdown is showing.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Selection mode set by the last initialization.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Filtering threshold in characters.
    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    /// Single-select value.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Multi-select values.
    pub fn values(&self) -> &MultiSelection {
        &self.values
    }

    /// Label of the single-select value.
    pub fn selected_label(&self) -> Option<&str> {
        self.value
            .as_deref()
            .and_then(|v| self.find(v))
            .map(|o| o.label.as_str())
    }

    /// Number of options flagged selected.
    pub fn selected_count(&self) -> usize {
        self.options.iter().filter(|o| o.selected).count()
    }

    /// Field identifier echoed in notifications.
    pub fn field_name(&self) -> Option<&str> {
        self.field_name.as_deref()
    }

    /// Label shown above the input.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether browsing the full list is blocked.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the field is marked required (display only).
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Check if the state has been modified since last check.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub(crate) fn has_option(&self, value: &str) -> bool {
        self.position(value).is_some()
    }

    fn position(&self, value: &str) -> Option<usize> {
        if value.is_empty() {
            return None;
        }
        self.options.iter().position(|o| o.value == value)
    }

    fn find(&self, value: &str) -> Option<&PickOption> {
        self.options.iter().find(|o| o.value == value)
    }
}
