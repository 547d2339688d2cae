use crate::humanize::OffsetDistribution;
use crate::menu::{MatchPolicy, MenuLayout};

/// Interaction constants and tunable parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InteractionConfig {
    /// Side of the square clicked around a projected ground tile, in pixels.
    pub ground_click_size: i32,
    /// Text comparison applied by every menu lookup.
    pub match_policy: MatchPolicy,
    /// Stack order reported when the tile cannot be resolved.
    /// `true` means "assume the target is on top" (fail open).
    pub assume_top_when_unresolved: bool,
    pub layout: MenuLayout,
    pub offsets: OffsetDistribution,
    /// Tighten the click spread on small hitboxes and widen it on large ones.
    pub adaptive_precision: bool,
}

impl InteractionConfig {
    // ===== fixed vocabulary =====
    /// Menu verb used to pick an entity up from the ground.
    pub const TAKE_ACTION: &'static str = "Take";
    /// Menu verb that closes a contextual menu without acting.
    pub const CANCEL_ACTION: &'static str = "Cancel";
    /// Number of floor planes a world position may reference.
    pub const MAX_PLANES: i32 = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_GROUND_CLICK_SIZE: i32 = 32;

    pub fn new() -> Self {
        Self {
            ground_click_size: Self::DEFAULT_GROUND_CLICK_SIZE,
            match_policy: MatchPolicy::default(),
            assume_top_when_unresolved: true,
            layout: MenuLayout::default(),
            offsets: OffsetDistribution::default(),
            adaptive_precision: false,
        }
    }
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self::new()
    }
}
