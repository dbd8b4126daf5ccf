//! Discrete notifications for the presentation layer.
//!
//! Events accumulate inside the engine and are handed over in batch by
//! [`PetSimulation::take_events`](crate::engine::PetSimulation::take_events).
//! They are transient notifications, not persisted state; a reset discards
//! whatever has not been drained.

use serde::{Deserialize, Serialize};

use pawkeep_logic::growth::LifeStage;
use pawkeep_logic::skills::Skill;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PetEvent {
    /// The pet reached a new life stage.
    Evolved { stage: LifeStage },
    /// A play or train session taught a new trick.
    SkillLearned { skill: Skill },
    /// A fatal threshold was crossed.
    Died,
    /// An action landed warmly; the frontend may show hearts.
    Affection,
}
