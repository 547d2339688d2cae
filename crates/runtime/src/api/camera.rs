use async_trait::async_trait;

use interaction_core::WorldPosition;

/// Camera repositioning subsystem.
#[async_trait]
pub trait CameraController: Send + Sync {
    /// Rotate/zoom so `position` is on screen. Best effort: completion says
    /// nothing about whether the tile actually became visible.
    async fn ensure_visible(&self, position: WorldPosition);
}
