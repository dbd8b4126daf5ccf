//! Simulation tunables.
//!
//! Every time constant, threshold, and probability the engine consults lives
//! here as plain data. [`Rules::default`] returns the reference rule set;
//! tests construct variants to pin probabilities or disable decay.

use serde::{Deserialize, Serialize};

/// The rule table governing decay, growth, sleep, and random rolls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    /// Real milliseconds that make up one game-hour.
    pub game_hour_ms: u64,
    /// Per-hour drop applied to hunger, thirst, happiness, energy, and
    /// cleanliness. Poop accrues at half this rate.
    pub stat_decay_per_hour: f32,
    /// Per-hour rise in loneliness.
    pub loneliness_per_hour: f32,
    /// Minimum energy to play.
    pub min_play_energy: f32,
    /// Minimum energy to train.
    pub min_train_energy: f32,
    /// At or below this, a higher-is-better vital is critical.
    pub low_need_threshold: f32,
    /// At or above this, loneliness/poop are critical.
    pub high_need_threshold: f32,
    /// At or below this, a higher-is-better vital warrants a warning.
    pub warn_low_threshold: f32,
    /// At or above this, loneliness/poop warrant a warning.
    pub warn_high_threshold: f32,
    /// Poop level that raises the needs-cleaning alert.
    pub poop_alert_threshold: f32,
    /// Real milliseconds a nap lasts before auto-wake.
    pub sleep_duration_ms: u64,
    /// Energy restored immediately on falling asleep.
    pub sleep_energy_restore: f32,
    /// Game-hours required in each non-terminal stage before evolving.
    pub stage_hour_requirement: u32,
    /// Chance a healthy hourly tick swaps in a random flavor line.
    pub flavor_probability: f64,
    /// Chance a play or train session teaches a new skill.
    pub skill_probability: f64,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            game_hour_ms: 20_000,
            stat_decay_per_hour: 5.0,
            loneliness_per_hour: 0.5,
            min_play_energy: 20.0,
            min_train_energy: 30.0,
            low_need_threshold: 20.0,
            high_need_threshold: 80.0,
            warn_low_threshold: 30.0,
            warn_high_threshold: 70.0,
            poop_alert_threshold: 50.0,
            sleep_duration_ms: 20_000,
            sleep_energy_restore: 30.0,
            stage_hour_requirement: 30,
            flavor_probability: 0.3,
            skill_probability: 0.25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_rules() {
        let rules = Rules::default();
        assert_eq!(rules.game_hour_ms, 20_000);
        assert_eq!(rules.stat_decay_per_hour, 5.0);
        assert_eq!(rules.stage_hour_requirement, 30);
        assert!(rules.skill_probability > 0.0 && rules.skill_probability < 1.0);
    }
}
