//! Traits describing read-only, frame-by-frame game state.
//!
//! Oracles expose screen projection, the spatial index of co-located entities,
//! and the live contextual menu. Every call returns a fresh snapshot: callers
//! re-query after anything that might have changed the frame instead of caching.
mod menu;
mod projection;
mod scene;

pub use menu::{MenuEntry, MenuGeometry, MenuOracle, MenuWidget};
pub use projection::{ProjectionOracle, project_visible};
pub use scene::{SceneBase, SceneCell, SceneOracle};

/// Everything the interaction pipeline reads from the game.
///
/// Blanket-implemented for any type providing all three oracles, so a single
/// client adapter can be shared as `Arc<dyn GameStateView>`.
pub trait GameStateView: ProjectionOracle + SceneOracle + MenuOracle {}

impl<T> GameStateView for T where T: ProjectionOracle + SceneOracle + MenuOracle {}
