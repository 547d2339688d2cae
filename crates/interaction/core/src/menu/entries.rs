use crate::env::MenuEntry;

use super::text::normalize;

/// Read-only projection of one menu row in visual order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntryView {
    pub action_text: String,
    pub target_text: String,
    pub identifier: i32,
    /// Visual top-to-bottom index; 0 is what a bare primary click triggers.
    pub display_order: usize,
}

impl MenuEntryView {
    /// Builds display-ordered views from entries in storage (bottom-to-top) order.
    pub fn collect(entries: &[MenuEntry]) -> Vec<MenuEntryView> {
        let total = entries.len();
        entries
            .iter()
            .enumerate()
            .rev()
            .map(|(storage_index, entry)| MenuEntryView {
                action_text: entry.option.clone(),
                target_text: entry.target.clone(),
                identifier: entry.identifier,
                display_order: total - 1 - storage_index,
            })
            .collect()
    }
}

/// The entry triggered by a bare primary click.
pub fn primary_entry(entries: &[MenuEntry]) -> Option<MenuEntryView> {
    let entry = entries.last()?;
    Some(MenuEntryView {
        action_text: entry.option.clone(),
        target_text: entry.target.clone(),
        identifier: entry.identifier,
        display_order: 0,
    })
}

/// Whether a primary click performs `action` (case-insensitive equality).
pub fn is_primary_action(entries: &[MenuEntry], action: &str) -> bool {
    primary_action_matches(entries, action, |option, action| option == action)
}

/// Whether the primary entry's action contains `action` (case-insensitive).
pub fn is_primary_action_containing(entries: &[MenuEntry], action: &str) -> bool {
    primary_action_matches(entries, action, |option, action| option.contains(action))
}

fn primary_action_matches(
    entries: &[MenuEntry],
    action: &str,
    compare: impl Fn(&str, &str) -> bool,
) -> bool {
    let action = normalize(action);
    if action.is_empty() {
        return false;
    }
    match primary_entry(entries) {
        Some(primary) => compare(&normalize(&primary.action_text), &action),
        None => false,
    }
}
