//! Validation errors raised before any interaction side effect.
//!
//! Everything past validation is resolved by the runtime into an outcome; these
//! variants only describe malformed requests.
use thiserror::Error;

use crate::geometry::Hitbox;
use crate::target::WorldPosition;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("world position {0} is outside the valid range")]
    InvalidPosition(WorldPosition),

    #[error("menu action must not be empty")]
    EmptyAction,

    #[error("hitbox {0} has no clickable area")]
    EmptyHitbox(Hitbox),
}
