//! The pet aggregate and its display snapshot.

use serde::{Deserialize, Serialize};

use pawkeep_logic::display;
use pawkeep_logic::growth::LifeStage;
use pawkeep_logic::narration;
use pawkeep_logic::rules::Rules;
use pawkeep_logic::skills::SkillBook;
use pawkeep_logic::species::Species;
use pawkeep_logic::vitals::Vitals;

/// Name given to pets whose owner leaves the field blank.
pub const DEFAULT_NAME: &str = "Fluffy";

/// Background scene shown until the owner picks another.
pub const DEFAULT_BACKGROUND: &str = "default";

/// Everything there is to know about one pet. Exclusively owned by its
/// [`PetSimulation`](crate::engine::PetSimulation); callers read it through
/// a borrow or a [`PetSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetState {
    pub name: String,
    pub species: Species,
    pub background: String,
    pub vitals: Vitals,
    pub stage: LifeStage,
    /// Game-hours spent in the current stage. Resets on evolution.
    pub stage_hours: u32,
    /// Progress toward the next stage, 0..=100. Frozen at 0 once Elderly.
    pub growth_percent: f32,
    /// Game-hours lived since creation or reset.
    pub total_age: u32,
    pub is_running: bool,
    pub is_sleeping: bool,
    pub is_dead: bool,
    pub skills: SkillBook,
    pub status_message: String,
    /// Real milliseconds spent running, napping included.
    pub play_ms: u64,
    /// Latest timestamp the engine has observed.
    pub clock_ms: u64,
    /// Origin of the next game-hour. Trails `clock_ms` by the carried
    /// sub-hour remainder.
    pub last_tick_ms: u64,
    pub sleep_started_ms: Option<u64>,
    pub sleep_deadline_ms: Option<u64>,
}

impl PetState {
    /// Creation defaults: a full-vitals baby with no name of its own yet.
    pub fn new(now_ms: u64) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            species: Species::default(),
            background: DEFAULT_BACKGROUND.to_string(),
            vitals: Vitals::default(),
            stage: LifeStage::Baby,
            stage_hours: 0,
            growth_percent: 0.0,
            total_age: 0,
            is_running: false,
            is_sleeping: false,
            is_dead: false,
            skills: SkillBook::new(),
            status_message: narration::initial(),
            play_ms: 0,
            clock_ms: now_ms,
            last_tick_ms: now_ms,
            sleep_started_ms: None,
            sleep_deadline_ms: None,
        }
    }

    pub fn play_seconds(&self) -> u64 {
        self.play_ms / 1000
    }
}

/// A read-only view with every value rounded and formatted for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetSnapshot {
    pub name: String,
    pub species: Species,
    pub stage: LifeStage,
    pub stage_hours: u32,
    pub total_age: u32,
    pub growth_percent: u8,
    pub hunger: u8,
    pub thirst: u8,
    pub happiness: u8,
    pub energy: u8,
    pub cleanliness: u8,
    pub loneliness: u8,
    pub poop: u8,
    pub is_running: bool,
    pub is_sleeping: bool,
    pub is_dead: bool,
    pub skills: SkillBook,
    pub status_message: String,
    pub play_seconds: u64,
    pub play_time: String,
    pub background: String,
    /// Milliseconds of nap left, `None` while awake.
    pub sleep_remaining_ms: Option<u64>,
    /// True when the pet needs cleaning badly enough to flag it.
    pub poop_alert: bool,
}

impl PetSnapshot {
    pub fn capture(state: &PetState, rules: &Rules) -> Self {
        let vitals = &state.vitals;
        let awake_and_alive = state.is_running && !state.is_sleeping && !state.is_dead;
        Self {
            name: state.name.clone(),
            species: state.species,
            stage: state.stage,
            stage_hours: state.stage_hours,
            total_age: state.total_age,
            growth_percent: display::rounded_percent(state.growth_percent),
            hunger: display::rounded_percent(vitals.hunger),
            thirst: display::rounded_percent(vitals.thirst),
            happiness: display::rounded_percent(vitals.happiness),
            energy: display::rounded_percent(vitals.energy),
            cleanliness: display::rounded_percent(vitals.cleanliness),
            loneliness: display::rounded_percent(vitals.loneliness),
            poop: display::rounded_percent(vitals.poop),
            is_running: state.is_running,
            is_sleeping: state.is_sleeping,
            is_dead: state.is_dead,
            skills: state.skills,
            status_message: state.status_message.clone(),
            play_seconds: state.play_seconds(),
            play_time: display::format_play_time(state.play_seconds()),
            background: state.background.clone(),
            sleep_remaining_ms: state
                .sleep_deadline_ms
                .map(|deadline| deadline.saturating_sub(state.clock_ms)),
            poop_alert: awake_and_alive && vitals.poop >= rules.poop_alert_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_defaults() {
        let state = PetState::new(5_000);
        assert_eq!(state.name, DEFAULT_NAME);
        assert_eq!(state.stage, LifeStage::Baby);
        assert_eq!(state.vitals.hunger, 100.0);
        assert_eq!(state.vitals.loneliness, 0.0);
        assert!(!state.is_running);
        assert_eq!(state.clock_ms, 5_000);
        assert_eq!(state.last_tick_ms, 5_000);
    }

    #[test]
    fn snapshot_rounds_and_formats() {
        let mut state = PetState::new(0);
        state.vitals.hunger = 66.6;
        state.play_ms = 3_725_000;
        let shot = PetSnapshot::capture(&state, &Rules::default());
        assert_eq!(shot.hunger, 67);
        assert_eq!(shot.play_seconds, 3_725);
        assert_eq!(shot.play_time, "1h 2m 5s");
        assert_eq!(shot.sleep_remaining_ms, None);
    }

    #[test]
    fn poop_alert_requires_awake_and_alive() {
        let rules = Rules::default();
        let mut state = PetState::new(0);
        state.vitals.poop = 60.0;

        assert!(!PetSnapshot::capture(&state, &rules).poop_alert);

        state.is_running = true;
        assert!(PetSnapshot::capture(&state, &rules).poop_alert);

        state.is_sleeping = true;
        assert!(!PetSnapshot::capture(&state, &rules).poop_alert);
    }
}
