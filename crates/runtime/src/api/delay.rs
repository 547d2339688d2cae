//! Named, humanized waits.
use async_trait::async_trait;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Named delay profiles. How long each one lasts is scheduler configuration.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, Display, AsRefStr, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum DelayProfile {
    /// Choosing a menu option after the menu opens.
    MenuSelect,
    /// Reacting to a game event.
    Reaction,
    /// Pause between unrelated actions.
    ActionGap,
}

#[async_trait]
pub trait DelayScheduler: Send + Sync {
    /// Suspend for a duration drawn from `profile`.
    async fn sleep(&self, profile: DelayProfile);
}
