//! Randomized latency and failure injection.
//!
//! The payment path uses this crate to manufacture the partial failures
//! the order saga has to handle. Every draw takes the random source as a
//! parameter, so production callers can use the thread-local generator
//! while tests seed a [`rand::rngs::StdRng`] for determinism. No state is
//! shared between draws, which keeps concurrent requests uncorrelated.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Returns true with the given probability, drawn uniformly over [0, 100).
///
/// A probability of 0 never fails; 100 or more always fails.
pub fn should_fail<R: Rng>(rng: &mut R, probability_percent: u8) -> bool {
    rng.gen_range(0..100) < probability_percent as u32
}

/// Draws a delay uniformly from the inclusive `[min, max]` range.
///
/// Swapped bounds are normalized rather than rejected.
pub fn draw_delay<R: Rng>(rng: &mut R, min: Duration, max: Duration) -> Duration {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let millis = rng.gen_range(lo.as_millis()..=hi.as_millis());
    Duration::from_millis(millis as u64)
}

/// Draws a delay from `[min_ms, max_ms]` and suspends the calling task
/// for that long. Returns the drawn duration.
pub async fn delay<R: Rng>(rng: &mut R, min_ms: u64, max_ms: u64) -> Duration {
    let drawn = draw_delay(
        rng,
        Duration::from_millis(min_ms),
        Duration::from_millis(max_ms),
    );
    tokio::time::sleep(drawn).await;
    drawn
}

/// Chaos parameters for a single injection point.
///
/// Defaults match the payment gateway's demo behavior: 100 to 2000 ms
/// of latency and a 20% failure rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultProfile {
    /// Probability of an injected failure, in percent.
    pub failure_percent: u8,
    /// Lower latency bound in milliseconds.
    pub min_delay_ms: u64,
    /// Upper latency bound in milliseconds.
    pub max_delay_ms: u64,
}

impl Default for FaultProfile {
    fn default() -> Self {
        Self {
            failure_percent: 20,
            min_delay_ms: 100,
            max_delay_ms: 2000,
        }
    }
}

impl FaultProfile {
    /// A profile that injects nothing, for wiring chaos out of a path.
    pub fn disabled() -> Self {
        Self {
            failure_percent: 0,
            min_delay_ms: 0,
            max_delay_ms: 0,
        }
    }

    /// Sleeps for a duration drawn from this profile's latency bounds.
    pub async fn inject_delay(&self) -> Duration {
        // Drop the non-Send ThreadRng before awaiting so the future stays Send.
        let drawn = {
            let mut rng = rand::thread_rng();
            draw_delay(
                &mut rng,
                Duration::from_millis(self.min_delay_ms),
                Duration::from_millis(self.max_delay_ms),
            )
        };
        tokio::time::sleep(drawn).await;
        drawn
    }

    /// Rolls the failure die once against this profile's rate.
    pub fn roll_failure(&self) -> bool {
        let mut rng = rand::thread_rng();
        should_fail(&mut rng, self.failure_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn should_fail_zero_percent_never_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            assert!(!should_fail(&mut rng, 0));
        }
    }

    #[test]
    fn should_fail_hundred_percent_always_fails() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1000 {
            assert!(should_fail(&mut rng, 100));
        }
    }

    #[test]
    fn should_fail_twenty_percent_is_statistically_close() {
        let mut rng = StdRng::seed_from_u64(42);
        let trials = 100_000;
        let failures = (0..trials).filter(|_| should_fail(&mut rng, 20)).count();
        let rate = failures as f64 / trials as f64;
        assert!(
            (0.18..=0.22).contains(&rate),
            "failure rate {rate} outside 18%..22%"
        );
    }

    #[test]
    fn draw_delay_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let min = Duration::from_millis(100);
        let max = Duration::from_millis(2000);
        for _ in 0..1000 {
            let d = draw_delay(&mut rng, min, max);
            assert!(d >= min && d <= max, "drew {d:?}");
        }
    }

    #[test]
    fn draw_delay_normalizes_swapped_bounds() {
        let mut rng = StdRng::seed_from_u64(8);
        let d = draw_delay(
            &mut rng,
            Duration::from_millis(500),
            Duration::from_millis(100),
        );
        assert!(d >= Duration::from_millis(100) && d <= Duration::from_millis(500));
    }

    #[test]
    fn draw_delay_degenerate_range_is_exact() {
        let mut rng = StdRng::seed_from_u64(9);
        let fixed = Duration::from_millis(250);
        assert_eq!(draw_delay(&mut rng, fixed, fixed), fixed);
    }

    #[tokio::test(start_paused = true)]
    async fn delay_suspends_for_the_drawn_duration() {
        let mut rng = StdRng::seed_from_u64(10);
        let before = tokio::time::Instant::now();
        let drawn = delay(&mut rng, 100, 2000).await;
        assert_eq!(before.elapsed(), drawn);
        assert!(drawn >= Duration::from_millis(100));
        assert!(drawn <= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn disabled_profile_injects_nothing() {
        let profile = FaultProfile::disabled();
        assert!(!profile.roll_failure());
        assert_eq!(profile.inject_delay().await, Duration::ZERO);
    }

    #[test]
    fn default_profile_matches_playground_gateway() {
        let profile = FaultProfile::default();
        assert_eq!(profile.failure_percent, 20);
        assert_eq!(profile.min_delay_ms, 100);
        assert_eq!(profile.max_delay_ms, 2000);
    }
}
