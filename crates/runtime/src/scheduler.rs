//! Tokio-backed [`DelayScheduler`] with Gaussian durations per profile.
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::api::{DelayProfile, DelayScheduler};

/// Gaussian delay with a lower bound.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DelaySpec {
    pub mean: Duration,
    pub std_dev: Duration,
    pub min: Duration,
}

impl DelaySpec {
    pub const fn from_millis(mean: u64, std_dev: u64, min: u64) -> Self {
        Self {
            mean: Duration::from_millis(mean),
            std_dev: Duration::from_millis(std_dev),
            min: Duration::from_millis(min),
        }
    }

    fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let z: f64 = rng.sample(StandardNormal);
        let secs = self.mean.as_secs_f64() + z * self.std_dev.as_secs_f64();
        Duration::from_secs_f64(secs.max(self.min.as_secs_f64()))
    }
}

/// Maps each [`DelayProfile`] to a [`DelaySpec`] and sleeps on the tokio timer.
pub struct ProfileDelayScheduler {
    profiles: HashMap<DelayProfile, DelaySpec>,
    rng: Mutex<StdRng>,
}

impl ProfileDelayScheduler {
    pub fn new() -> Self {
        let profiles = HashMap::from([
            (DelayProfile::MenuSelect, DelaySpec::from_millis(180, 50, 50)),
            (DelayProfile::Reaction, DelaySpec::from_millis(250, 50, 120)),
            (DelayProfile::ActionGap, DelaySpec::from_millis(800, 200, 300)),
        ]);
        Self {
            profiles,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Override the spec used for `profile`.
    pub fn with_profile(mut self, profile: DelayProfile, spec: DelaySpec) -> Self {
        self.profiles.insert(profile, spec);
        self
    }

    pub fn spec(&self, profile: DelayProfile) -> Option<DelaySpec> {
        self.profiles.get(&profile).copied()
    }

    /// Duration the next `sleep(profile)` would wait.
    pub fn draw(&self, profile: DelayProfile) -> Duration {
        let Some(spec) = self.spec(profile) else {
            return Duration::ZERO;
        };
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        spec.draw(&mut *rng)
    }
}

impl Default for ProfileDelayScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DelayScheduler for ProfileDelayScheduler {
    async fn sleep(&self, profile: DelayProfile) {
        let delay = self.draw(profile);
        tracing::trace!("sleeping {:?} for {}", delay, profile);
        tokio::time::sleep(delay).await;
    }
}
