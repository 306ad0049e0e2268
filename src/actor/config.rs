// ABOUTME: Configuration shared by producer and consumer actors.
// ABOUTME: Amount bounds and pacing delay, builder-style with sensible defaults.

use std::time::Duration;

use rand::Rng;

/// Configuration for producer and consumer actors.
///
/// Defaults to amounts drawn uniformly from `[1, 10]` and a one-second
/// producer pace.
#[derive(Debug, Clone)]
pub struct ActorConfig {
    /// Inclusive lower bound for randomly drawn amounts.
    pub min_amount: i64,

    /// Inclusive upper bound for randomly drawn amounts.
    pub max_amount: i64,

    /// Delay between producer iterations. Purely cosmetic pacing to keep
    /// demo output readable; correctness does not depend on it.
    pub pace: Duration,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            min_amount: 1,
            max_amount: 10,
            pace: Duration::from_millis(1000),
        }
    }
}

impl ActorConfig {
    /// Set the inclusive bounds for randomly drawn amounts.
    ///
    /// # Panics
    ///
    /// Panics if `min` is not positive or `max` is below `min`.
    pub fn amounts(mut self, min: i64, max: i64) -> Self {
        assert!(min > 0, "min amount must be positive");
        assert!(max >= min, "max amount must be at least min");
        self.min_amount = min;
        self.max_amount = max;
        self
    }

    /// Set the producer pacing delay.
    pub fn pace(mut self, pace: Duration) -> Self {
        self.pace = pace;
        self
    }

    /// Draw a random amount within the configured bounds.
    pub fn draw_amount(&self) -> i64 {
        rand::thread_rng().gen_range(self.min_amount..=self.max_amount)
    }
}
