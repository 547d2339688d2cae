//! Pure decision logic for interacting with on-screen game targets.
//!
//! `interaction-core` decides *how* a target should be clicked: whether a
//! primary click reaches it ([`stack`]), where a contextual-menu entry sits
//! ([`menu`]), and which pixel inside a hitbox to aim for ([`humanize`]). It
//! reads game state only through the oracle traits in [`env`] and never
//! suspends; the async pipeline that drives a pointer lives in the runtime crate.
pub mod config;
pub mod env;
pub mod error;
pub mod geometry;
pub mod humanize;
pub mod menu;
pub mod stack;
pub mod target;

pub use config::InteractionConfig;
pub use env::{
    GameStateView, MenuEntry, MenuGeometry, MenuOracle, MenuWidget, ProjectionOracle, SceneBase,
    SceneCell, SceneOracle, project_visible,
};
pub use error::TargetError;
pub use geometry::{CanvasPoint, Hitbox, ScreenPoint, Viewport};
pub use humanize::{ClickSampler, OffsetDistribution};
pub use menu::{
    LocateTier, LocatedEntry, MatchPolicy, MenuEntryLocator, MenuEntryView, MenuLayout, MenuQuery,
};
pub use stack::{StackOrder, StackOrderResolver};
pub use target::{EntityId, GroundTarget, MenuActionTarget, Target, WorldPosition};
