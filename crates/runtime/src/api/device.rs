//! Asynchronous abstraction over the pointer and keyboard.
//!
//! Embedders plug in an [`InputDevice`] backed by a real driver, a remote
//! input bridge, or the recording fixture in [`crate::testing`].
use async_trait::async_trait;

use interaction_core::{CanvasPoint, Hitbox};

use super::errors::DeviceError;

/// Pointer/keyboard driver. All coordinates are canvas-relative.
///
/// Each call completes once the physical action has finished; the pipeline
/// never issues the next step before the previous one resolves.
#[async_trait]
pub trait InputDevice: Send + Sync {
    /// Move the pointer along a humanized path to `point`.
    async fn move_to(&self, point: CanvasPoint) -> Result<(), DeviceError>;

    /// Primary click at the current pointer position.
    async fn click(&self) -> Result<(), DeviceError>;

    /// Open the contextual menu over `hitbox`.
    async fn right_click(&self, hitbox: Hitbox) -> Result<(), DeviceError>;

    /// Press the key that closes an open menu.
    async fn press_dismiss_key(&self) -> Result<(), DeviceError>;
}
