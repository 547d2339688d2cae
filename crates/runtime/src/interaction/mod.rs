//! Interaction pipelines.
//!
//! Each pipeline is a strictly sequential chain of awaited steps. The only
//! suspension points are calls into the device, scheduler and camera; the
//! decision logic in `interaction-core` runs to completion between them, and
//! every read of game state happens after the previous step has resolved.
pub(crate) mod ground;
pub(crate) mod menu_action;
pub(crate) mod session;

use interaction_core::{ClickSampler, GameStateView, Hitbox, MenuEntryLocator, StackOrderResolver};

use crate::api::{CameraController, DelayScheduler, InputDevice, Result};
use crate::config::InteractorConfig;

/// Borrowed collaborators for one interaction.
pub(crate) struct Context<'a> {
    pub device: &'a dyn InputDevice,
    pub state: &'a dyn GameStateView,
    pub scheduler: &'a dyn DelayScheduler,
    pub camera: Option<&'a dyn CameraController>,
    pub sampler: &'a ClickSampler,
    pub locator: &'a MenuEntryLocator,
    pub resolver: &'a StackOrderResolver,
    pub config: &'a InteractorConfig,
}

impl Context<'_> {
    /// Moves to a humanized point inside `hitbox` and clicks it.
    pub async fn click_inside(&self, hitbox: &Hitbox) -> Result<()> {
        let point = self.sampler.click_point(hitbox);
        self.device.move_to(point).await?;
        self.device.click().await?;
        Ok(())
    }
}
