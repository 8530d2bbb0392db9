//! Exploration-rate schedule for epsilon-greedy training

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Piecewise-linear exploration schedule.
///
/// Epsilon stays at `initial` until episode `decay_start`, ramps linearly to
/// `final_value` by episode `decay_end`, and stays there afterwards. A
/// degenerate span (`decay_end <= decay_start`) makes the profile a step
/// function, which covers the constant profile used by the default driver
/// (`initial == final_value`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EpsilonProfile {
    pub initial: f64,
    pub final_value: f64,
    pub decay_start: f64,
    pub decay_end: f64,
}

impl EpsilonProfile {
    /// Create a profile, validating that both rates are probabilities and
    /// the decay window is ordered.
    pub fn new(initial: f64, final_value: f64, decay_start: f64, decay_end: f64) -> Result<Self> {
        for (name, value) in [("initial", initial), ("final", final_value)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidConfiguration {
                    message: format!("{name} epsilon {value} must be within [0, 1]"),
                });
            }
        }
        if decay_end < decay_start {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "epsilon decay window end {decay_end} precedes start {decay_start}"
                ),
            });
        }
        Ok(Self {
            initial,
            final_value,
            decay_start,
            decay_end,
        })
    }

    /// A schedule that never decays.
    pub fn constant(epsilon: f64) -> Result<Self> {
        Self::new(epsilon, epsilon, 0.0, 0.0)
    }

    /// Exploration rate for the given episode index.
    pub fn epsilon(&self, episode: usize) -> f64 {
        let k = episode as f64;
        if k <= self.decay_start {
            self.initial
        } else if k >= self.decay_end {
            self.final_value
        } else {
            let t = (k - self.decay_start) / (self.decay_end - self.decay_start);
            self.initial + t * (self.final_value - self.initial)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_profile_never_moves() {
        let profile = EpsilonProfile::constant(1.0).unwrap();
        for episode in [0, 1, 100, 10_000] {
            assert_eq!(profile.epsilon(episode), 1.0);
        }
    }

    #[test]
    fn linear_decay_hits_both_endpoints() {
        let profile = EpsilonProfile::new(1.0, 0.1, 10.0, 110.0).unwrap();
        assert_eq!(profile.epsilon(0), 1.0);
        assert_eq!(profile.epsilon(10), 1.0);
        assert!((profile.epsilon(60) - 0.55).abs() < 1e-12);
        assert_eq!(profile.epsilon(110), 0.1);
        assert_eq!(profile.epsilon(10_000), 0.1);
    }

    #[test]
    fn decay_is_monotone() {
        let profile = EpsilonProfile::new(0.9, 0.05, 0.0, 200.0).unwrap();
        let mut previous = profile.epsilon(0);
        for episode in 1..300 {
            let current = profile.epsilon(episode);
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn step_profile_with_empty_window() {
        let profile = EpsilonProfile::new(1.0, 0.0, 50.0, 50.0).unwrap();
        assert_eq!(profile.epsilon(50), 1.0);
        assert_eq!(profile.epsilon(51), 0.0);
    }

    #[test]
    fn rejects_out_of_range_rates() {
        assert!(EpsilonProfile::new(1.5, 0.0, 0.0, 1.0).is_err());
        assert!(EpsilonProfile::new(0.5, -0.1, 0.0, 1.0).is_err());
        assert!(EpsilonProfile::new(0.5, 0.1, 10.0, 5.0).is_err());
    }
}
