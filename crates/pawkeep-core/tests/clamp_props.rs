//! Property tests: the bound invariants that must hold for every input
//! sequence, not just the curated timelines.

use pawkeep_core::prelude::*;
use proptest::prelude::*;

const HOUR: u64 = 20_000;

fn vitals_in_range(vitals: &Vitals) -> bool {
    [
        vitals.hunger,
        vitals.thirst,
        vitals.happiness,
        vitals.energy,
        vitals.cleanliness,
        vitals.loneliness,
        vitals.poop,
    ]
    .iter()
    .all(|value| (0.0..=100.0).contains(value))
}

/// Maps an opcode onto one public call. Advance steps use a mix of
/// sub-hour and whole-hour deltas so remainder carrying gets exercised.
fn apply_op(sim: &mut PetSimulation, op: u8, now: &mut u64) {
    match op % 12 {
        0 => {
            *now += 7_000;
            sim.advance(*now);
        }
        1 => {
            *now += HOUR;
            sim.advance(*now);
        }
        2 => {
            sim.feed(FoodKind::Kibble);
        }
        3 => {
            sim.feed(FoodKind::Treat);
        }
        4 => {
            sim.drink(DrinkKind::Water);
        }
        5 => {
            sim.play(PlayKind::Fetch);
        }
        6 => {
            sim.give_affection(AffectionKind::Hug);
        }
        7 => {
            sim.clean();
        }
        8 => {
            sim.train();
        }
        9 => {
            sim.sleep();
        }
        10 => {
            sim.wake_up();
        }
        _ => {
            sim.pat();
        }
    }
}

proptest! {
    #[test]
    fn vitals_never_leave_their_bounds(
        seed in any::<u64>(),
        ops in prop::collection::vec(any::<u8>(), 1..300),
    ) {
        let mut sim = PetSimulation::with_seed(seed);
        sim.start(0, "Rex", Species::Dog);

        let mut now = 0u64;
        for op in ops {
            apply_op(&mut sim, op, &mut now);
            prop_assert!(vitals_in_range(&sim.state().vitals));
        }
    }

    #[test]
    fn age_counters_never_run_backwards(
        seed in any::<u64>(),
        ops in prop::collection::vec(any::<u8>(), 1..300),
    ) {
        let mut sim = PetSimulation::with_seed(seed);
        sim.start(0, "Rex", Species::Dog);

        let mut now = 0u64;
        let mut last_age = 0;
        let mut last_stage = sim.state().stage;
        for op in ops {
            apply_op(&mut sim, op, &mut now);
            prop_assert!(sim.state().total_age >= last_age);
            prop_assert!(sim.state().stage >= last_stage);
            last_age = sim.state().total_age;
            last_stage = sim.state().stage;
        }
    }

    #[test]
    fn dead_pets_are_inert(
        ops in prop::collection::vec(any::<u8>(), 1..100),
    ) {
        let mut sim = PetSimulation::with_seed(99);
        sim.start(0, "Rex", Species::Dog);
        sim.advance(30 * HOUR);
        prop_assert!(sim.state().is_dead);

        let frozen_vitals = sim.state().vitals;
        let frozen_skills = sim.state().skills;
        let frozen_age = sim.state().total_age;

        let mut now = 30 * HOUR;
        for op in ops {
            apply_op(&mut sim, op, &mut now);
            prop_assert_eq!(sim.state().vitals, frozen_vitals);
            prop_assert_eq!(sim.state().skills, frozen_skills);
            prop_assert_eq!(sim.state().total_age, frozen_age);
            prop_assert!(sim.state().is_dead);
        }
    }

    #[test]
    fn sleeping_pets_only_answer_to_wake(
        ops in prop::collection::vec(any::<u8>(), 1..50),
    ) {
        let mut sim = PetSimulation::with_seed(5);
        sim.start(0, "Rex", Species::Dog);
        prop_assert!(sim.sleep());

        let resting = sim.state().vitals;
        for op in ops {
            // Everything except wake and the clock: naps are sacred.
            if matches!(op % 12, 0 | 1 | 10) {
                continue;
            }
            let mut now = sim.state().clock_ms;
            apply_op(&mut sim, op, &mut now);
            prop_assert!(sim.state().is_sleeping);
            prop_assert_eq!(sim.state().vitals, resting);
        }
    }
}
