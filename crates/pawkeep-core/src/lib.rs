//! Pawkeep Core - Virtual Pet Simulation Engine
//!
//! A tick-based simulation of one pet: vitals that decay hour by hour,
//! care actions that push them back up, a life-stage ladder, learnable
//! tricks, naps, and an ending. The engine owns all state and randomness;
//! a frontend drives it with timestamps and synchronous calls, then reads
//! snapshots and drains events. Wall-clock time never leaks in, so whole
//! lifetimes replay deterministically under test.
//!
//! # Example
//!
//! ```rust
//! use pawkeep_core::prelude::*;
//!
//! let mut sim = PetSimulation::with_seed(7);
//! sim.start(0, "Biscuit", Species::Dog);
//! sim.feed(FoodKind::Kibble);
//!
//! // Drive the clock the way a frontend timer would.
//! for second in 1..=60u64 {
//!     sim.advance(second * 1_000);
//! }
//!
//! let snapshot = sim.snapshot();
//! println!("{}: {}", snapshot.name, snapshot.status_message);
//! for event in sim.take_events() {
//!     println!("{:?}", event);
//! }
//! ```

pub mod engine;
pub mod events;
pub mod state;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::engine::PetSimulation;
    pub use crate::events::PetEvent;
    pub use crate::state::{PetSnapshot, PetState};
    pub use pawkeep_logic::actions::{AffectionKind, DrinkKind, FoodKind, PlayKind};
    pub use pawkeep_logic::growth::LifeStage;
    pub use pawkeep_logic::rules::Rules;
    pub use pawkeep_logic::skills::{Skill, SkillBook};
    pub use pawkeep_logic::species::Species;
    pub use pawkeep_logic::vitals::{VitalKind, Vitals};
}
