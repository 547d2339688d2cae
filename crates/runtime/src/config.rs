//! Interactor configuration and environment loading.
use std::env;
use std::time::Duration;

use interaction_core::{InteractionConfig, MatchPolicy};

/// Configuration shared by every interaction an [`crate::Interactor`] runs.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractorConfig {
    pub interaction: InteractionConfig,
    /// Upper bound on waiting for an opened menu to report entries.
    pub menu_ready_timeout: Duration,
    /// Interval between menu readiness checks.
    pub menu_poll_interval: Duration,
    /// Seed for click sampling; `None` draws from OS entropy.
    pub sampler_seed: Option<u64>,
}

impl InteractorConfig {
    pub const DEFAULT_MENU_READY_TIMEOUT: Duration = Duration::from_millis(600);
    pub const DEFAULT_MENU_POLL_INTERVAL: Duration = Duration::from_millis(20);
    /// Smallest ground click square that still has a pixel off its center.
    pub const MIN_GROUND_CLICK_SIZE: i32 = 2;

    pub fn new(interaction: InteractionConfig) -> Self {
        Self {
            interaction,
            menu_ready_timeout: Self::DEFAULT_MENU_READY_TIMEOUT,
            menu_poll_interval: Self::DEFAULT_MENU_POLL_INTERVAL,
            sampler_seed: None,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `INTERACTION_MATCH_POLICY` - `exact` or `contains` (default: exact)
    /// - `INTERACTION_ASSUME_TOP` - Treat unresolved tiles as top of stack (default: true)
    /// - `INTERACTION_GROUND_CLICK_SIZE` - Ground click square, in pixels (default: 32)
    /// - `INTERACTION_ADAPTIVE_PRECISION` - Size-dependent click spread (default: false)
    /// - `INTERACTION_MENU_TIMEOUT_MS` - Menu readiness timeout (default: 600)
    /// - `INTERACTION_MENU_POLL_MS` - Menu readiness poll interval (default: 20)
    /// - `INTERACTION_SEED` - Fixed click-sampling seed (default: random)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(policy) = read_env::<MatchPolicy>("INTERACTION_MATCH_POLICY") {
            config.interaction.match_policy = policy;
        }

        if let Some(assume_top) = read_env::<bool>("INTERACTION_ASSUME_TOP") {
            config.interaction.assume_top_when_unresolved = assume_top;
        }

        if let Some(size) = read_env::<i32>("INTERACTION_GROUND_CLICK_SIZE") {
            config.interaction.ground_click_size = size.max(Self::MIN_GROUND_CLICK_SIZE);
        }

        if let Some(adaptive) = read_env::<bool>("INTERACTION_ADAPTIVE_PRECISION") {
            config.interaction.adaptive_precision = adaptive;
        }

        if let Some(millis) = read_env::<u64>("INTERACTION_MENU_TIMEOUT_MS") {
            config.menu_ready_timeout = Duration::from_millis(millis);
        }

        if let Some(millis) = read_env::<u64>("INTERACTION_MENU_POLL_MS") {
            config.menu_poll_interval = Duration::from_millis(millis.max(1));
        }

        config.sampler_seed = read_env::<u64>("INTERACTION_SEED");

        config
    }
}

impl Default for InteractorConfig {
    fn default() -> Self {
        Self::new(InteractionConfig::default())
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
