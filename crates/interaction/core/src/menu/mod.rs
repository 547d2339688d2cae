//! Contextual-menu reading: text normalization, entry queries, and the
//! two-tier entry locator.
mod entries;
mod locator;
mod query;
mod text;

pub use entries::{MenuEntryView, is_primary_action, is_primary_action_containing, primary_entry};
pub use locator::{LocateTier, LocatedEntry, MenuEntryLocator, MenuLayout};
pub use query::MenuQuery;
pub use text::{MatchPolicy, normalize};
