//! The pet simulation engine.
//!
//! `PetSimulation` owns one pet, the rule table, and a seeded RNG. An
//! external driver feeds it timestamps through [`PetSimulation::advance`]
//! on a fixed cadence; care actions are synchronous calls that mutate state
//! immediately and report whether they applied. Time only ever enters
//! through the API, so every behavior can be replayed under test with a
//! simulated clock and a fixed seed.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use tracing::{debug, info};

use pawkeep_logic::actions::{self, ActionEffect, AffectionKind, DrinkKind, FoodKind, PlayKind};
use pawkeep_logic::growth;
use pawkeep_logic::narration;
use pawkeep_logic::rules::Rules;
use pawkeep_logic::skills::Skill;
use pawkeep_logic::species::Species;

use crate::events::PetEvent;
use crate::state::{PetSnapshot, PetState, DEFAULT_NAME};

pub struct PetSimulation {
    state: PetState,
    rules: Rules,
    rng: ChaCha12Rng,
    events: Vec<PetEvent>,
}

impl Default for PetSimulation {
    fn default() -> Self {
        Self::new()
    }
}

impl PetSimulation {
    /// A simulation with the reference rules and a fresh random seed.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Reference rules, caller-chosen seed. Same seed, same rolls.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rules(Rules::default(), seed)
    }

    pub fn with_rules(rules: Rules, seed: u64) -> Self {
        Self {
            state: PetState::new(0),
            rules,
            rng: ChaCha12Rng::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    pub fn state(&self) -> &PetState {
        &self.state
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn snapshot(&self) -> PetSnapshot {
        PetSnapshot::capture(&self.state, &self.rules)
    }

    /// Hands over every event queued since the last drain.
    pub fn take_events(&mut self) -> Vec<PetEvent> {
        std::mem::take(&mut self.events)
    }

    /// Milliseconds of nap left, `None` while awake.
    pub fn sleep_remaining_ms(&self) -> Option<u64> {
        let deadline = self.state.sleep_deadline_ms?;
        Some(deadline.saturating_sub(self.state.clock_ms))
    }

    // ── Lifecycle ───────────────────────────────────────────────────────

    /// Begins a run. No-op while one is in progress; a dead pet is reset
    /// first. Blank names fall back to the default.
    pub fn start(&mut self, now_ms: u64, name: &str, species: Species) -> bool {
        if self.state.is_running {
            self.state.status_message = narration::already_running();
            return false;
        }
        if self.state.is_dead {
            self.reset(now_ms);
        }
        let name = name.trim();
        self.state.name = if name.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            name.to_string()
        };
        self.state.species = species;
        self.state.is_running = true;
        self.state.clock_ms = now_ms;
        self.state.last_tick_ms = now_ms;
        self.state.status_message = narration::hello(&self.state.name, species);
        info!(
            name = %self.state.name,
            species = species.name(),
            "simulation started"
        );
        true
    }

    /// Back to creation defaults, valid in any state. Pending sleep and
    /// undrained events are discarded.
    pub fn reset(&mut self, now_ms: u64) {
        self.state = PetState::new(now_ms);
        self.state.status_message = narration::reset_line();
        self.events.clear();
        info!("simulation reset");
    }

    fn die(&mut self) {
        self.state.is_dead = true;
        self.state.is_running = false;
        self.state.is_sleeping = false;
        self.state.sleep_started_ms = None;
        self.state.sleep_deadline_ms = None;
        self.state.status_message = narration::passed_away(&self.state.name);
        self.events.push(PetEvent::Died);
        info!(
            name = %self.state.name,
            age_hours = self.state.total_age,
            "pet died"
        );
    }

    // ── Time ────────────────────────────────────────────────────────────

    /// Catches the simulation up to `now_ms`.
    ///
    /// The clock and play time always move; vitals only decay while the
    /// pet is running and awake. Each whole game-hour is applied in order:
    /// decay, aging, evolution check, death check. Death stops the catch-up
    /// at the hour it happens. The sub-hour remainder stays banked in
    /// `last_tick_ms` rather than being discarded.
    pub fn advance(&mut self, now_ms: u64) {
        let now_ms = now_ms.max(self.state.clock_ms);
        let real_delta = now_ms - self.state.clock_ms;
        self.state.clock_ms = now_ms;

        if !self.state.is_running {
            return;
        }
        self.state.play_ms += real_delta;

        if self.state.is_sleeping {
            match self.state.sleep_deadline_ms {
                // Oversleeping is forgiven: decay resumes from the deadline,
                // not from when the nap began.
                Some(deadline) if now_ms >= deadline => self.wake_at(deadline),
                _ => return,
            }
        }

        let elapsed = now_ms - self.state.last_tick_ms;
        let whole_hours = elapsed / self.rules.game_hour_ms;
        if whole_hours == 0 {
            return;
        }

        for _ in 0..whole_hours {
            self.state.vitals.apply_hourly_decay(&self.rules);
            self.state.total_age = self.state.total_age.saturating_add(1);
            self.state.stage_hours = self.state.stage_hours.saturating_add(1);
            self.state.last_tick_ms += self.rules.game_hour_ms;
            self.update_growth();
            if self.state.vitals.is_fatal() {
                self.die();
                return;
            }
        }
        self.refresh_status_message();
    }

    fn update_growth(&mut self) {
        let requirement = match self.state.stage.hour_requirement(&self.rules) {
            Some(requirement) => requirement,
            None => return,
        };
        if self.state.stage_hours >= requirement {
            if let Some(next) = self.state.stage.next() {
                self.state.stage = next;
                self.state.stage_hours = 0;
                self.state.growth_percent = 0.0;
                self.state.status_message = narration::evolved(next, self.state.species);
                self.events.push(PetEvent::Evolved { stage: next });
                info!(
                    stage = next.name(),
                    age_hours = self.state.total_age,
                    "pet evolved"
                );
            }
        } else {
            self.state.growth_percent =
                growth::growth_percent(self.state.stage, self.state.stage_hours, &self.rules);
        }
    }

    /// Picks the one line to show after a surviving hourly tick: the
    /// highest-priority complaint, else occasionally a flavor line, else
    /// whatever was already there.
    fn refresh_status_message(&mut self) {
        if let Some(need) = self.state.vitals.critical_need(&self.rules) {
            self.state.status_message = narration::critical_line(need).to_string();
            return;
        }
        if self.rng.gen_bool(self.rules.flavor_probability) {
            if let Some(line) = narration::FLAVOR_LINES.choose(&mut self.rng) {
                self.state.status_message = (*line).to_string();
            }
        }
    }

    // ── Care actions ────────────────────────────────────────────────────

    /// Common action guard. Dead or sleeping pets ignore actions silently;
    /// a stopped simulation answers with a prompt to start.
    fn guard_action(&mut self) -> bool {
        if self.state.is_dead || self.state.is_sleeping {
            return false;
        }
        if !self.state.is_running {
            self.state.status_message = narration::not_started();
            return false;
        }
        true
    }

    fn apply_affectionate_effect(&mut self, effect: &ActionEffect) {
        self.state.vitals.apply_effect(effect);
        if effect.raises_happiness() {
            self.events.push(PetEvent::Affection);
        }
    }

    pub fn feed(&mut self, food: FoodKind) -> bool {
        if !self.guard_action() {
            return false;
        }
        self.apply_affectionate_effect(&actions::feed_effect(food));
        self.state.status_message = narration::fed(food);
        true
    }

    pub fn drink(&mut self, drink: DrinkKind) -> bool {
        if !self.guard_action() {
            return false;
        }
        self.apply_affectionate_effect(&actions::drink_effect(drink));
        self.state.status_message = narration::drank(drink);
        true
    }

    pub fn play(&mut self, activity: PlayKind) -> bool {
        if !self.guard_action() {
            return false;
        }
        if self.state.vitals.energy < self.rules.min_play_energy {
            self.state.status_message = narration::too_tired_to_play();
            return false;
        }
        self.apply_affectionate_effect(&actions::play_effect(activity));
        self.state.status_message = narration::played(activity);
        self.roll_for_skill();
        true
    }

    pub fn give_affection(&mut self, kind: AffectionKind) -> bool {
        if !self.guard_action() {
            return false;
        }
        self.apply_affectionate_effect(&actions::affection_effect(kind));
        self.state.status_message = narration::adored(kind);
        true
    }

    pub fn clean(&mut self) -> bool {
        if !self.guard_action() {
            return false;
        }
        self.state.vitals.groom();
        self.state.status_message = narration::cleaned();
        true
    }

    pub fn train(&mut self) -> bool {
        if !self.guard_action() {
            return false;
        }
        if self.state.vitals.energy < self.rules.min_train_energy {
            self.state.status_message = narration::too_tired_to_train();
            return false;
        }
        self.state.vitals.apply_effect(&actions::train_effect());
        self.state.status_message = narration::trained();
        self.roll_for_skill();
        true
    }

    /// A quick pat. Always affectionate, never teaches anything.
    pub fn pat(&mut self) -> bool {
        if !self.guard_action() {
            return false;
        }
        self.apply_affectionate_effect(&actions::pat_effect());
        self.state.status_message = narration::loves_attention(&self.state.name);
        true
    }

    /// Performs a trick by name. Unknown or unlearned names are no-ops.
    pub fn use_skill(&mut self, name: &str) -> bool {
        if !self.guard_action() {
            return false;
        }
        let skill = match Skill::from_name(name) {
            Some(skill) => skill,
            None => return false,
        };
        if !self.state.skills.is_learned(skill) {
            return false;
        }
        self.state.vitals.apply_effect(&actions::skill_use_effect());
        self.state.status_message =
            narration::skill_line(&self.state.name, self.state.species, skill);
        true
    }

    /// One learning roll, shared by play and train. A success overrides the
    /// action's own narration.
    fn roll_for_skill(&mut self) {
        let unlearned = self.state.skills.unlearned();
        if unlearned.is_empty() {
            return;
        }
        if !self.rng.gen_bool(self.rules.skill_probability) {
            return;
        }
        if let Some(skill) = unlearned.choose(&mut self.rng).copied() {
            self.state.skills.learn(skill);
            self.state.status_message = narration::learned_skill(skill);
            self.events.push(PetEvent::SkillLearned { skill });
            debug!(skill = skill.name(), "skill learned");
        }
    }

    // ── Sleep ───────────────────────────────────────────────────────────

    /// Puts the pet down for a nap: an immediate energy boost, then decay
    /// stays suspended until the deadline passes or the owner wakes it.
    pub fn sleep(&mut self) -> bool {
        if !self.guard_action() {
            return false;
        }
        let deadline = self.state.clock_ms + self.rules.sleep_duration_ms;
        self.state.is_sleeping = true;
        self.state.sleep_started_ms = Some(self.state.clock_ms);
        self.state.sleep_deadline_ms = Some(deadline);
        self.state.vitals.apply_effect(&ActionEffect {
            energy: self.rules.sleep_energy_restore,
            ..ActionEffect::default()
        });
        self.state.status_message = narration::fell_asleep();
        debug!(deadline_ms = deadline, "pet fell asleep");
        true
    }

    /// Ends the nap now. No-op unless sleeping.
    pub fn wake_up(&mut self) -> bool {
        if !self.state.is_sleeping {
            return false;
        }
        self.wake_at(self.state.clock_ms);
        true
    }

    /// The slept interval never decays: the next game-hour starts counting
    /// from the wake time.
    fn wake_at(&mut self, wake_ms: u64) {
        self.state.is_sleeping = false;
        self.state.sleep_started_ms = None;
        self.state.sleep_deadline_ms = None;
        self.state.last_tick_ms = wake_ms;
        self.state.status_message = narration::woke_up();
        debug!("pet woke up");
    }

    // ── Cosmetics ───────────────────────────────────────────────────────

    /// Swaps the backdrop. Purely cosmetic, allowed in any state.
    pub fn set_background(&mut self, background: &str) {
        self.state.background = background.to_string();
    }

    /// Renames the pet before a run begins. Rejected once running or dead.
    pub fn set_identity(&mut self, name: &str, species: Species) -> bool {
        if self.state.is_running || self.state.is_dead {
            return false;
        }
        let name = name.trim();
        self.state.name = if name.is_empty() {
            DEFAULT_NAME.to_string()
        } else {
            name.to_string()
        };
        self.state.species = species;
        true
    }
}
