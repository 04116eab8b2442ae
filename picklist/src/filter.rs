//! Prefix filtering and the status texts derived from it.

use crate::item::PickOption;

/// Case-insensitive, whitespace-trimmed starts-with match.
pub fn prefix_match(label: &str, query: &str) -> bool {
    label
        .trim()
        .to_lowercase()
        .starts_with(&query.trim().to_lowercase())
}

/// Recompute `visible` on every option. Returns the visible count.
///
/// Selection flags are left untouched.
pub fn apply_prefix_filter(options: &mut [PickOption], query: &str) -> usize {
    let mut visible = 0;
    for option in options.iter_mut() {
        option.visible = prefix_match(&option.label, query);
        if option.visible {
            visible += 1;
        }
    }
    visible
}

/// Mark every option visible (browse the full list).
pub fn show_all(options: &mut [PickOption]) {
    for option in options.iter_mut() {
        option.visible = true;
    }
}

/// Status message for a filter that matched nothing.
pub fn no_results_message(text: &str) -> String {
    format!("No results found for '{}'", text)
}

/// Input box text for a multi-select picklist.
pub fn selected_count_text(count: usize) -> String {
    format!("{} Option(s) Selected", count)
}
