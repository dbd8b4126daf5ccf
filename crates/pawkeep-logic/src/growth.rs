//! Life stages and evolution progress.

use serde::{Deserialize, Serialize};

use crate::rules::Rules;

/// The pet's life phase. Linear, forward-only, terminal at Elderly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LifeStage {
    Baby,
    Child,
    Teen,
    Adult,
    Elderly,
}

impl LifeStage {
    pub const ALL: [LifeStage; 5] = [
        LifeStage::Baby,
        LifeStage::Child,
        LifeStage::Teen,
        LifeStage::Adult,
        LifeStage::Elderly,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LifeStage::Baby => "Baby",
            LifeStage::Child => "Child",
            LifeStage::Teen => "Teen",
            LifeStage::Adult => "Adult",
            LifeStage::Elderly => "Elderly",
        }
    }

    /// The stage after this one, or `None` at the end of the line.
    pub fn next(self) -> Option<LifeStage> {
        match self {
            LifeStage::Baby => Some(LifeStage::Child),
            LifeStage::Child => Some(LifeStage::Teen),
            LifeStage::Teen => Some(LifeStage::Adult),
            LifeStage::Adult => Some(LifeStage::Elderly),
            LifeStage::Elderly => None,
        }
    }

    /// Game-hours needed in this stage before evolving. `None` for Elderly,
    /// which never evolves.
    pub fn hour_requirement(self, rules: &Rules) -> Option<u32> {
        match self {
            LifeStage::Elderly => None,
            _ => Some(rules.stage_hour_requirement),
        }
    }
}

/// Progress toward the next stage as a percentage, capped at 100.
/// Elderly pets report 0 forever.
pub fn growth_percent(stage: LifeStage, stage_hours: u32, rules: &Rules) -> f32 {
    match stage.hour_requirement(rules) {
        Some(requirement) if requirement > 0 => {
            (stage_hours as f32 / requirement as f32 * 100.0).min(100.0)
        }
        _ => 0.0,
    }
}
