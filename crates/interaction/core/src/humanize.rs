//! Humanized click placement.
//!
//! Clicks land on a Gaussian around a point near (but never exactly at) the
//! middle of the hitbox. The mean is re-drawn for every sample inside
//! `[center_min, center_max]` of the dimension so there is no constant bias to
//! fingerprint, and the spread is a fixed fraction of the dimension.
//!
//! With adaptive precision the spread tightens on small hitboxes and widens on
//! large ones. Non-rectangular targets are handled by rejection sampling
//! against a `contains` predicate.
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::geometry::{CanvasPoint, Hitbox};

/// Shape of the per-axis offset distribution, as fractions of the dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetDistribution {
    pub center_min: f64,
    pub center_max: f64,
    pub std_dev: f64,
}

impl OffsetDistribution {
    pub const CENTER_MIN: f64 = 0.45;
    pub const CENTER_MAX: f64 = 0.55;
    pub const STD_DEV: f64 = 0.15;
    pub const PRECISE_STD_DEV: f64 = 0.10;
    pub const IMPRECISE_STD_DEV: f64 = 0.20;
    /// Hitboxes whose smaller side is under this many pixels get the precise spread.
    pub const SMALL_TARGET: i32 = 20;
    /// Hitboxes whose smaller side is over this many pixels get the imprecise spread.
    pub const LARGE_TARGET: i32 = 100;

    /// This distribution with its spread picked for `hitbox`'s smaller side.
    pub fn adapted_to(self, hitbox: &Hitbox) -> Self {
        let smallest = hitbox.width.min(hitbox.height);
        let std_dev = if smallest < Self::SMALL_TARGET {
            Self::PRECISE_STD_DEV
        } else if smallest > Self::LARGE_TARGET {
            Self::IMPRECISE_STD_DEV
        } else {
            self.std_dev
        };
        Self { std_dev, ..self }
    }

    /// Draws an offset in `[0, dimension)`.
    ///
    /// For even dimensions the exact center `dimension / 2` is never returned.
    /// Dimensions of 0 or 1 always yield 0.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, dimension: u32) -> u32 {
        if dimension <= 1 {
            return 0;
        }

        let size = f64::from(dimension);
        let center_fraction = if self.center_max > self.center_min {
            rng.gen_range(self.center_min..self.center_max)
        } else {
            self.center_min
        };
        let z: f64 = rng.sample(StandardNormal);
        let draw = size * center_fraction + z * size * self.std_dev;

        let max = i64::from(dimension) - 1;
        let mut offset = (draw.floor() as i64).clamp(0, max);

        if offset * 2 == i64::from(dimension) {
            let step = if rng.gen_bool(0.5) { 1 } else { -1 };
            offset = if (0..=max).contains(&(offset + step)) {
                offset + step
            } else {
                offset - step
            };
            offset = offset.clamp(0, max);
        }

        offset as u32
    }
}

impl Default for OffsetDistribution {
    fn default() -> Self {
        Self {
            center_min: Self::CENTER_MIN,
            center_max: Self::CENTER_MAX,
            std_dev: Self::STD_DEV,
        }
    }
}

/// Turns hitboxes into click points.
///
/// Owns its RNG so samples can be made reproducible with [`ClickSampler::seeded`].
pub struct ClickSampler {
    distribution: OffsetDistribution,
    adaptive: bool,
    rng: Mutex<StdRng>,
}

impl ClickSampler {
    /// Candidates drawn by [`Self::click_point_within`] before falling back.
    pub const SHAPE_ATTEMPTS: usize = 10;

    pub fn new(distribution: OffsetDistribution) -> Self {
        Self {
            distribution,
            adaptive: false,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(distribution: OffsetDistribution, seed: u64) -> Self {
        Self {
            distribution,
            adaptive: false,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Makes [`Self::click_point`] behave like [`Self::adaptive_click_point`].
    pub fn with_adaptive_precision(mut self, adaptive: bool) -> Self {
        self.adaptive = adaptive;
        self
    }

    /// Humanized offset along one axis of `dimension` pixels.
    pub fn offset(&self, dimension: u32) -> u32 {
        self.sample(&self.distribution, dimension)
    }

    /// Samples a point inside `hitbox`, drawing each axis independently.
    ///
    /// Non-positive dimensions are treated as a single pixel.
    pub fn click_point(&self, hitbox: &Hitbox) -> CanvasPoint {
        if self.adaptive {
            return self.adaptive_click_point(hitbox);
        }
        self.point_in(&self.distribution, hitbox)
    }

    /// Like [`Self::click_point`] with the spread adapted to the hitbox size.
    pub fn adaptive_click_point(&self, hitbox: &Hitbox) -> CanvasPoint {
        self.point_in(&self.distribution.adapted_to(hitbox), hitbox)
    }

    /// Samples a point of `bounds` that `inside` accepts.
    ///
    /// Gives up after [`Self::SHAPE_ATTEMPTS`] rejected candidates and returns
    /// a plain point of `bounds`.
    pub fn click_point_within<F>(&self, bounds: &Hitbox, inside: F) -> CanvasPoint
    where
        F: Fn(CanvasPoint) -> bool,
    {
        for _ in 0..Self::SHAPE_ATTEMPTS {
            let candidate = self.click_point(bounds);
            if inside(candidate) {
                return candidate;
            }
        }
        tracing::debug!("no sampled point fell inside the shape bounded by {}", bounds);
        self.click_point(bounds)
    }

    fn point_in(&self, distribution: &OffsetDistribution, hitbox: &Hitbox) -> CanvasPoint {
        let width = u32::try_from(hitbox.width).unwrap_or(0);
        let height = u32::try_from(hitbox.height).unwrap_or(0);

        let dx = self.sample(distribution, width);
        let dy = self.sample(distribution, height);

        let point = CanvasPoint::new(hitbox.x + dx as i32, hitbox.y + dy as i32);
        tracing::trace!("sampled click point {} inside {}", point, hitbox);
        point
    }

    fn sample(&self, distribution: &OffsetDistribution, dimension: u32) -> u32 {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        distribution.sample(&mut *rng, dimension)
    }
}

impl Default for ClickSampler {
    fn default() -> Self {
        Self::new(OffsetDistribution::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DRAWS: usize = 20_000;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn offsets_stay_in_range_and_avoid_center() {
        let distribution = OffsetDistribution::default();
        let mut rng = rng();

        for dimension in 1..=64u32 {
            for _ in 0..500 {
                let offset = distribution.sample(&mut rng, dimension);
                assert!(offset < dimension, "offset {offset} out of [0, {dimension})");
                if dimension % 2 == 0 {
                    assert_ne!(offset, dimension / 2, "center hit for {dimension}");
                }
            }
        }
    }

    #[test]
    fn two_pixel_dimension_never_returns_one() {
        let distribution = OffsetDistribution::default();
        let mut rng = rng();
        for _ in 0..1_000 {
            assert_eq!(distribution.sample(&mut rng, 2), 0);
        }
    }

    #[test]
    fn degenerate_dimensions_yield_zero() {
        let distribution = OffsetDistribution::default();
        let mut rng = rng();
        assert_eq!(distribution.sample(&mut rng, 0), 0);
        assert_eq!(distribution.sample(&mut rng, 1), 0);
    }

    #[test]
    fn empirical_mean_and_spread_match_distribution() {
        let distribution = OffsetDistribution::default();
        let mut rng = rng();
        let dimension = 400u32;
        let size = f64::from(dimension);

        let samples: Vec<f64> = (0..DRAWS)
            .map(|_| f64::from(distribution.sample(&mut rng, dimension)))
            .collect();

        let mean = samples.iter().sum::<f64>() / DRAWS as f64;
        let variance =
            samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / (DRAWS as f64 - 1.0);
        let std_dev = variance.sqrt();

        assert!(
            (0.45 * size..=0.55 * size).contains(&mean),
            "mean {mean} outside 45%-55% of {dimension}"
        );
        // Per-call jitter of the mean adds ~0.029d in quadrature to the 0.15d spread.
        assert!(
            (0.13 * size..=0.17 * size).contains(&std_dev),
            "std dev {std_dev} not near 15% of {dimension}"
        );
    }

    #[test]
    fn click_point_lands_inside_hitbox_but_not_on_center() {
        let sampler = ClickSampler::seeded(OffsetDistribution::default(), 7);
        let hitbox = Hitbox::new(120, 80, 40, 16);
        let center = CanvasPoint::new(140, 88);

        for _ in 0..2_000 {
            let point = sampler.click_point(&hitbox);
            assert!(hitbox.contains(point), "{point} escaped {hitbox}");
            assert_ne!(point, center);
        }
    }

    #[test]
    fn seeded_samplers_are_reproducible() {
        let a = ClickSampler::seeded(OffsetDistribution::default(), 42);
        let b = ClickSampler::seeded(OffsetDistribution::default(), 42);
        let hitbox = Hitbox::new(0, 0, 32, 32);

        for _ in 0..32 {
            assert_eq!(a.click_point(&hitbox), b.click_point(&hitbox));
        }
    }

    #[test]
    fn spread_adapts_to_the_smaller_side() {
        let base = OffsetDistribution::default();

        let small = base.adapted_to(&Hitbox::new(0, 0, 200, 12));
        assert_eq!(small.std_dev, OffsetDistribution::PRECISE_STD_DEV);

        let large = base.adapted_to(&Hitbox::new(0, 0, 240, 180));
        assert_eq!(large.std_dev, OffsetDistribution::IMPRECISE_STD_DEV);

        // Bounds are exclusive on both ends.
        assert_eq!(base.adapted_to(&Hitbox::new(0, 0, 20, 100)).std_dev, base.std_dev);
        assert_eq!(base.adapted_to(&Hitbox::new(0, 0, 100, 100)).std_dev, base.std_dev);
        assert_eq!(small.center_min, base.center_min);
        assert_eq!(small.center_max, base.center_max);
    }

    #[test]
    fn adaptive_points_on_small_targets_cluster_tighter() {
        let sampler = ClickSampler::seeded(OffsetDistribution::default(), 11);
        let hitbox = Hitbox::new(10, 10, 18, 18);
        let center = CanvasPoint::new(19, 19);

        let mut plain = 0.0;
        let mut adaptive = 0.0;
        for _ in 0..DRAWS {
            let p = sampler.click_point(&hitbox);
            let a = sampler.adaptive_click_point(&hitbox);
            assert!(hitbox.contains(a), "{a} escaped {hitbox}");
            assert_ne!(a, center);
            plain += f64::from((p.x - center.x).pow(2) + (p.y - center.y).pow(2));
            adaptive += f64::from((a.x - center.x).pow(2) + (a.y - center.y).pow(2));
        }
        assert!(adaptive < plain, "adaptive spread {adaptive} not below {plain}");
    }

    #[test]
    fn adaptive_precision_switches_click_point() {
        let hitbox = Hitbox::new(0, 0, 300, 300);
        let adaptive = ClickSampler::seeded(OffsetDistribution::default(), 3)
            .with_adaptive_precision(true);
        let explicit = ClickSampler::seeded(OffsetDistribution::default(), 3);

        for _ in 0..32 {
            assert_eq!(adaptive.click_point(&hitbox), explicit.adaptive_click_point(&hitbox));
        }
    }

    #[test]
    fn shape_sampling_returns_points_inside_the_shape() {
        let sampler = ClickSampler::seeded(OffsetDistribution::default(), 5);
        let bounds = Hitbox::new(0, 0, 100, 100);
        // Lower-left triangle of the bounds.
        let triangle = |p: CanvasPoint| p.y >= p.x;

        let mut inside = 0;
        for _ in 0..1_000 {
            let point = sampler.click_point_within(&bounds, triangle);
            assert!(bounds.contains(point));
            if triangle(point) {
                inside += 1;
            }
        }
        // Ten attempts at roughly one-half each almost never all miss.
        assert!(inside >= 990, "only {inside} of 1000 points inside the shape");
    }

    #[test]
    fn shape_sampling_falls_back_to_the_bounds() {
        let sampler = ClickSampler::seeded(OffsetDistribution::default(), 9);
        let bounds = Hitbox::new(50, 60, 30, 20);

        for _ in 0..100 {
            let point = sampler.click_point_within(&bounds, |_| false);
            assert!(bounds.contains(point), "{point} escaped {bounds}");
        }
    }
}
