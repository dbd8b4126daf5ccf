//! Pure pet-simulation logic for Pawkeep.
//!
//! This crate contains the rule data and pure functions of the pet
//! simulation, independent of any clock, RNG, or runtime. Everything here
//! takes plain data and returns plain results, so it unit-tests in
//! isolation and ports to any engine or frontend.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`actions`] | Care-action subtypes and their vital-delta tables |
//! | [`display`] | Rounded percentages and play-time formatting |
//! | [`growth`] | Life stages, hour requirements, evolution progress |
//! | [`narration`] | Every status line the pet can say |
//! | [`rules`] | The tunable rule table (decay rates, thresholds, odds) |
//! | [`skills`] | The closed trick set and per-pet skill book |
//! | [`species`] | Cosmetic species and speak voices |
//! | [`vitals`] | Bounded vitals, hourly decay, critical-need checks |

pub mod actions;
pub mod display;
pub mod growth;
pub mod narration;
pub mod rules;
pub mod skills;
pub mod species;
pub mod vitals;
