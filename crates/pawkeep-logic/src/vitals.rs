//! Pet vitals: the seven bounded need/mood values.
//!
//! Hunger, thirst, happiness, energy, and cleanliness are higher-is-better;
//! loneliness and poop are higher-is-worse. Every mutation clamps back into
//! `[0, 100]`, so no caller can push a vital out of range.

use serde::{Deserialize, Serialize};

use crate::actions::ActionEffect;
use crate::rules::Rules;

pub const VITAL_MIN: f32 = 0.0;
pub const VITAL_MAX: f32 = 100.0;

/// Identifies one vital, in status-check priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VitalKind {
    Hunger,
    Thirst,
    Happiness,
    Energy,
    Loneliness,
    Poop,
    Cleanliness,
}

/// The full vital block. Fresh pets start sated, rested, and clean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    pub hunger: f32,
    pub thirst: f32,
    pub happiness: f32,
    pub energy: f32,
    pub cleanliness: f32,
    pub loneliness: f32,
    pub poop: f32,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            hunger: VITAL_MAX,
            thirst: VITAL_MAX,
            happiness: VITAL_MAX,
            energy: VITAL_MAX,
            cleanliness: VITAL_MAX,
            loneliness: VITAL_MIN,
            poop: VITAL_MIN,
        }
    }
}

impl Vitals {
    /// Applies one game-hour of decay: the well-being vitals drop by the
    /// decay rate, loneliness creeps up, poop accrues at half the decay rate.
    pub fn apply_hourly_decay(&mut self, rules: &Rules) {
        let decay = rules.stat_decay_per_hour;
        self.hunger = (self.hunger - decay).clamp(VITAL_MIN, VITAL_MAX);
        self.thirst = (self.thirst - decay).clamp(VITAL_MIN, VITAL_MAX);
        self.happiness = (self.happiness - decay).clamp(VITAL_MIN, VITAL_MAX);
        self.energy = (self.energy - decay).clamp(VITAL_MIN, VITAL_MAX);
        self.cleanliness = (self.cleanliness - decay).clamp(VITAL_MIN, VITAL_MAX);
        self.loneliness = (self.loneliness + rules.loneliness_per_hour).clamp(VITAL_MIN, VITAL_MAX);
        self.poop = (self.poop + decay / 2.0).clamp(VITAL_MIN, VITAL_MAX);
    }

    /// Adds an action's deltas, clamping every field.
    pub fn apply_effect(&mut self, effect: &ActionEffect) {
        self.hunger = (self.hunger + effect.hunger).clamp(VITAL_MIN, VITAL_MAX);
        self.thirst = (self.thirst + effect.thirst).clamp(VITAL_MIN, VITAL_MAX);
        self.happiness = (self.happiness + effect.happiness).clamp(VITAL_MIN, VITAL_MAX);
        self.energy = (self.energy + effect.energy).clamp(VITAL_MIN, VITAL_MAX);
        self.cleanliness = (self.cleanliness + effect.cleanliness).clamp(VITAL_MIN, VITAL_MAX);
        self.loneliness = (self.loneliness + effect.loneliness).clamp(VITAL_MIN, VITAL_MAX);
        self.poop = (self.poop + effect.poop).clamp(VITAL_MIN, VITAL_MAX);
    }

    /// A bath: cleanliness back to full, poop gone.
    pub fn groom(&mut self) {
        self.cleanliness = VITAL_MAX;
        self.poop = VITAL_MIN;
    }

    /// True once any fatal threshold is crossed: starved, dehydrated, or
    /// completely lonely.
    pub fn is_fatal(&self) -> bool {
        self.hunger <= VITAL_MIN || self.thirst <= VITAL_MIN || self.loneliness >= VITAL_MAX
    }

    /// The most urgent critical vital, if any. Checked in a fixed priority
    /// order so one advance yields one complaint.
    pub fn critical_need(&self, rules: &Rules) -> Option<VitalKind> {
        let low = rules.low_need_threshold;
        let high = rules.high_need_threshold;
        if self.hunger <= low {
            Some(VitalKind::Hunger)
        } else if self.thirst <= low {
            Some(VitalKind::Thirst)
        } else if self.happiness <= low {
            Some(VitalKind::Happiness)
        } else if self.energy <= low {
            Some(VitalKind::Energy)
        } else if self.loneliness >= high {
            Some(VitalKind::Loneliness)
        } else if self.poop >= high {
            Some(VitalKind::Poop)
        } else if self.cleanliness <= low {
            Some(VitalKind::Cleanliness)
        } else {
            None
        }
    }

    /// Every vital in a warning state, for display styling. Milder than
    /// [`Vitals::critical_need`] and not prioritized.
    pub fn urgent(&self, rules: &Rules) -> Vec<VitalKind> {
        let low = rules.warn_low_threshold;
        let high = rules.warn_high_threshold;
        let mut out = Vec::new();
        if self.hunger <= low {
            out.push(VitalKind::Hunger);
        }
        if self.thirst <= low {
            out.push(VitalKind::Thirst);
        }
        if self.happiness <= low {
            out.push(VitalKind::Happiness);
        }
        if self.energy <= low {
            out.push(VitalKind::Energy);
        }
        if self.loneliness >= high {
            out.push(VitalKind::Loneliness);
        }
        if self.poop >= high {
            out.push(VitalKind::Poop);
        }
        if self.cleanliness <= low {
            out.push(VitalKind::Cleanliness);
        }
        out
    }
}
