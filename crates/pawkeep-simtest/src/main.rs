//! Pawkeep Headless Simulation Harness
//!
//! Drives the pet engine through complete, deterministic lifetimes with a
//! simulated clock, so no frontend and no wall-clock waits are needed.
//!
//! Usage:
//!   cargo run -p pawkeep-simtest
//!   cargo run -p pawkeep-simtest -- --verbose

use pawkeep_core::engine::PetSimulation;
use pawkeep_core::events::PetEvent;
use pawkeep_logic::actions::{AffectionKind, DrinkKind, FoodKind, PlayKind};
use pawkeep_logic::growth::LifeStage;
use pawkeep_logic::rules::Rules;
use pawkeep_logic::skills::Skill;
use pawkeep_logic::species::Species;
use pawkeep_logic::vitals::VitalKind;
use tracing_subscriber::EnvFilter;

/// One real game-hour at the reference rules.
const HOUR_MS: u64 = 20_000;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

/// Reference rules with both random rolls pinned off, so every sweep is
/// reproducible line for line.
fn quiet_rules() -> Rules {
    Rules {
        flavor_probability: 0.0,
        skill_probability: 0.0,
        ..Rules::default()
    }
}

fn quiet_sim(seed: u64) -> PetSimulation {
    let mut sim = PetSimulation::with_rules(quiet_rules(), seed);
    sim.start(0, "Rex", Species::Dog);
    sim
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    if verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("pawkeep_core=debug")),
            )
            .init();
    }

    println!("=== Pawkeep Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. A full day of neglect
    results.extend(validate_neglect_timeline(verbose));

    // 2. Sustained care and evolution
    results.extend(validate_care_timeline(verbose));

    // 3. Action effect table
    results.extend(validate_action_effects(verbose));

    // 4. Skill acquisition sweep
    results.extend(validate_skill_acquisition(verbose));

    // 5. Sleep cycle
    results.extend(validate_sleep_cycle(verbose));

    // 6. Guard rails
    results.extend(validate_guard_rails(verbose));

    // 7. Display surface
    results.extend(validate_display_surface(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. A full day of neglect ────────────────────────────────────────────

fn validate_neglect_timeline(verbose: bool) -> Vec<TestResult> {
    println!("--- Neglect Timeline ---");
    let mut results = Vec::new();

    let mut sim = quiet_sim(1);
    let mut hungry_warning_hour = 0u64;
    for hour in 1..=30u64 {
        sim.advance(hour * HOUR_MS);
        if hungry_warning_hour == 0
            && sim.state().status_message == "I'm so hungry! Please feed me!"
        {
            hungry_warning_hour = hour;
        }
    }

    results.push(TestResult {
        name: "hungry_warning_at_16".into(),
        passed: hungry_warning_hour == 16,
        detail: format!("hunger complaint first shown at hour {}", hungry_warning_hour),
    });

    results.push(TestResult {
        name: "death_at_hour_20".into(),
        passed: sim.state().is_dead && sim.state().total_age == 20,
        detail: format!(
            "dead={} at age {} game-hours",
            sim.state().is_dead,
            sim.state().total_age
        ),
    });

    results.push(TestResult {
        name: "died_as_a_baby".into(),
        passed: sim.state().stage == LifeStage::Baby,
        detail: format!("stage at death: {}", sim.state().stage.name()),
    });

    results.push(TestResult {
        name: "death_narrated".into(),
        passed: sim.state().status_message == "Rex has passed away... Reset to start over.",
        detail: format!("status: {}", sim.state().status_message),
    });

    let events = sim.take_events();
    results.push(TestResult {
        name: "death_event_emitted".into(),
        passed: events == vec![PetEvent::Died],
        detail: format!("{} event(s) drained", events.len()),
    });

    let refused = !sim.feed(FoodKind::Kibble) && !sim.clean() && !sim.sleep();
    results.push(TestResult {
        name: "dead_pets_refuse_care".into(),
        passed: refused,
        detail: "feed/clean/sleep all rejected after death".into(),
    });

    if verbose {
        let json = serde_json::to_string_pretty(&sim.snapshot()).expect("snapshot serializes");
        println!("{}", json);
    }

    results
}

// ── 2. Sustained care and evolution ─────────────────────────────────────

fn validate_care_timeline(verbose: bool) -> Vec<TestResult> {
    println!("--- Care Timeline ---");
    let mut results = Vec::new();

    let mut sim = quiet_sim(2);
    let mut died_at = None;
    for hour in 1..=40u64 {
        sim.advance(hour * HOUR_MS);
        if sim.state().is_dead {
            died_at = Some(hour);
            break;
        }
        if hour % 3 == 0 {
            sim.feed(FoodKind::Kibble);
            sim.drink(DrinkKind::Water);
        }
    }

    results.push(TestResult {
        name: "care_outlives_neglect_horizon".into(),
        passed: died_at.is_none() && sim.state().total_age == 40,
        detail: match died_at {
            Some(hour) => format!("died at hour {}", hour),
            None => "alive at hour 40".into(),
        },
    });

    results.push(TestResult {
        name: "evolved_to_child_at_30".into(),
        passed: sim.state().stage == LifeStage::Child && sim.state().stage_hours == 10,
        detail: format!(
            "stage {} with {} stage-hours",
            sim.state().stage.name(),
            sim.state().stage_hours
        ),
    });

    let evolved = sim
        .take_events()
        .contains(&PetEvent::Evolved {
            stage: LifeStage::Child,
        });
    results.push(TestResult {
        name: "evolution_event_emitted".into(),
        passed: evolved,
        detail: "Evolved{child} drained from the queue".into(),
    });

    if verbose {
        println!(
            "hunger {:.0}, thirst {:.0} after 40 cared-for hours",
            sim.state().vitals.hunger,
            sim.state().vitals.thirst
        );
    }

    results
}

// ── 3. Action effect table ──────────────────────────────────────────────

fn validate_action_effects(verbose: bool) -> Vec<TestResult> {
    println!("--- Action Effects ---");
    let mut results = Vec::new();

    // Eight hours of decay leaves every vital at 60 and room to observe
    // the exact deltas.
    let mut sim = quiet_sim(3);
    sim.advance(8 * HOUR_MS);

    sim.feed(FoodKind::Kibble);
    results.push(TestResult {
        name: "kibble_feeds_and_fouls".into(),
        passed: sim.state().vitals.hunger == 90.0 && sim.state().vitals.poop == 35.0,
        detail: format!(
            "hunger {:.0}, poop {:.0}",
            sim.state().vitals.hunger,
            sim.state().vitals.poop
        ),
    });

    sim.drink(DrinkKind::Milk);
    results.push(TestResult {
        name: "milk_quenches_and_feeds".into(),
        passed: sim.state().vitals.thirst == 90.0 && sim.state().vitals.hunger == 100.0,
        detail: format!(
            "thirst {:.0}, hunger {:.0}",
            sim.state().vitals.thirst,
            sim.state().vitals.hunger
        ),
    });

    sim.play(PlayKind::Walk);
    results.push(TestResult {
        name: "walk_cheers_and_tires".into(),
        passed: sim.state().vitals.happiness == 80.0 && sim.state().vitals.energy == 45.0,
        detail: format!(
            "happiness {:.0}, energy {:.0}",
            sim.state().vitals.happiness,
            sim.state().vitals.energy
        ),
    });

    sim.give_affection(AffectionKind::Hug);
    results.push(TestResult {
        name: "hug_clamps_both_ways".into(),
        passed: sim.state().vitals.happiness == 100.0 && sim.state().vitals.loneliness == 0.0,
        detail: format!(
            "happiness {:.0}, loneliness {:.0}",
            sim.state().vitals.happiness,
            sim.state().vitals.loneliness
        ),
    });

    sim.clean();
    results.push(TestResult {
        name: "clean_restores_fully".into(),
        passed: sim.state().vitals.cleanliness == 100.0 && sim.state().vitals.poop == 0.0,
        detail: format!(
            "cleanliness {:.0}, poop {:.0}",
            sim.state().vitals.cleanliness,
            sim.state().vitals.poop
        ),
    });

    sim.train();
    results.push(TestResult {
        name: "train_costs_energy".into(),
        passed: sim.state().vitals.energy == 25.0,
        detail: format!("energy {:.0}", sim.state().vitals.energy),
    });

    sim.pat();
    let affection_events = sim
        .take_events()
        .into_iter()
        .filter(|event| *event == PetEvent::Affection)
        .count();
    results.push(TestResult {
        name: "hearts_for_warm_actions_only".into(),
        passed: affection_events == 3,
        detail: format!(
            "{} affection event(s): walk, hug, pat (not kibble/milk/clean/train)",
            affection_events
        ),
    });

    if verbose {
        println!("status after sweep: {}", sim.state().status_message);
    }

    results
}

// ── 4. Skill acquisition sweep ──────────────────────────────────────────

fn validate_skill_acquisition(verbose: bool) -> Vec<TestResult> {
    println!("--- Skill Acquisition ---");
    let mut results = Vec::new();

    // With the learning roll pinned certain, every session teaches a new
    // trick until the set is full.
    let rules = Rules {
        skill_probability: 1.0,
        flavor_probability: 0.0,
        ..Rules::default()
    };
    let mut sim = PetSimulation::with_rules(rules, 4);
    sim.start(0, "Rex", Species::Dog);

    let mut sessions_matched = true;
    for session in 1..=Skill::COUNT {
        if sim.state().vitals.energy < sim.rules().min_play_energy {
            sim.sleep();
            sim.wake_up();
        }
        sim.play(PlayKind::Fetch);
        if sim.state().skills.learned_count() != session {
            sessions_matched = false;
        }
    }
    results.push(TestResult {
        name: "certain_roll_learns_every_session".into(),
        passed: sessions_matched && sim.state().skills.all_learned(),
        detail: format!(
            "{}/{} skills after {} sessions",
            sim.state().skills.learned_count(),
            Skill::COUNT,
            Skill::COUNT
        ),
    });

    if sim.state().vitals.energy < sim.rules().min_play_energy {
        sim.sleep();
        sim.wake_up();
    }
    sim.play(PlayKind::Toy);
    results.push(TestResult {
        name: "full_set_ends_learning".into(),
        passed: sim.state().skills.learned_count() == Skill::COUNT,
        detail: "ninth session learned nothing new".into(),
    });

    let mut all_performable = true;
    for skill in Skill::ALL {
        if !sim.use_skill(skill.name()) {
            all_performable = false;
        } else if verbose {
            println!("{}", sim.state().status_message);
        }
    }
    results.push(TestResult {
        name: "every_learned_trick_performs".into(),
        passed: all_performable,
        detail: format!("{} tricks performed by name", Skill::COUNT),
    });

    results.push(TestResult {
        name: "unknown_trick_rejected".into(),
        passed: !sim.use_skill("backflip"),
        detail: "use_skill(\"backflip\") returned false".into(),
    });

    results
}

// ── 5. Sleep cycle ──────────────────────────────────────────────────────

fn validate_sleep_cycle(verbose: bool) -> Vec<TestResult> {
    println!("--- Sleep Cycle ---");
    let mut results = Vec::new();

    let mut sim = quiet_sim(5);
    sim.advance(8 * HOUR_MS);
    let before = sim.state().vitals.energy;
    sim.sleep();

    results.push(TestResult {
        name: "sleep_restores_thirty_energy".into(),
        passed: before == 60.0 && sim.state().vitals.energy == 90.0,
        detail: format!("energy {:.0} -> {:.0}", before, sim.state().vitals.energy),
    });

    sim.advance(8 * HOUR_MS + 10_000);
    results.push(TestResult {
        name: "nap_suspends_decay".into(),
        passed: sim.state().is_sleeping && sim.state().vitals.hunger == 60.0,
        detail: format!(
            "sleeping={}, hunger {:.0} mid-nap",
            sim.state().is_sleeping,
            sim.state().vitals.hunger
        ),
    });

    results.push(TestResult {
        name: "countdown_reads_remaining".into(),
        passed: sim.sleep_remaining_ms() == Some(10_000),
        detail: format!("{:?} ms left", sim.sleep_remaining_ms()),
    });

    sim.advance(8 * HOUR_MS + 25_000);
    results.push(TestResult {
        name: "auto_wake_at_deadline".into(),
        passed: !sim.state().is_sleeping
            && sim.state().status_message == "I'm awake! Let's play!"
            && sim.state().vitals.hunger == 60.0,
        detail: format!(
            "awake with hunger {:.0} and 5s banked toward the next hour",
            sim.state().vitals.hunger
        ),
    });

    if verbose {
        println!("post-nap snapshot: energy {:.0}", sim.state().vitals.energy);
    }

    results
}

// ── 6. Guard rails ──────────────────────────────────────────────────────

fn validate_guard_rails(_verbose: bool) -> Vec<TestResult> {
    println!("--- Guard Rails ---");
    let mut results = Vec::new();

    let mut sim = PetSimulation::with_rules(quiet_rules(), 6);

    let refused = !sim.feed(FoodKind::Treat);
    results.push(TestResult {
        name: "actions_need_a_running_game".into(),
        passed: refused && sim.state().status_message == "Please start the game first!",
        detail: format!("status: {}", sim.state().status_message),
    });

    let renamed = sim.set_identity("Mochi", Species::Cat);
    results.push(TestResult {
        name: "identity_editable_before_start".into(),
        passed: renamed && sim.state().name == "Mochi",
        detail: format!("name now {}", sim.state().name),
    });

    sim.start(0, "Mochi", Species::Cat);
    results.push(TestResult {
        name: "identity_locked_while_running".into(),
        passed: !sim.set_identity("Renamed", Species::Dog) && sim.state().name == "Mochi",
        detail: format!("name still {}", sim.state().name),
    });

    results.push(TestResult {
        name: "double_start_rejected".into(),
        passed: !sim.start(1_000, "Again", Species::Dog)
            && sim.state().status_message == "Game is already running!",
        detail: format!("status: {}", sim.state().status_message),
    });

    sim.set_background("beach");
    sim.advance(30 * HOUR_MS);
    sim.set_background("bedroom");
    results.push(TestResult {
        name: "background_is_stateless_cosmetic".into(),
        passed: sim.state().is_dead && sim.state().background == "bedroom",
        detail: format!("background {} even after death", sim.state().background),
    });

    sim.reset(31 * HOUR_MS);
    results.push(TestResult {
        name: "reset_revives_to_defaults".into(),
        passed: !sim.state().is_dead
            && !sim.state().is_running
            && sim.state().vitals.hunger == 100.0
            && sim.state().background == "default",
        detail: format!(
            "dead={}, hunger {:.0}, background {}",
            sim.state().is_dead,
            sim.state().vitals.hunger,
            sim.state().background
        ),
    });

    results
}

// ── 7. Display surface ──────────────────────────────────────────────────

fn validate_display_surface(verbose: bool) -> Vec<TestResult> {
    println!("--- Display Surface ---");
    let mut results = Vec::new();

    let mut sim = quiet_sim(7);
    sim.advance(14 * HOUR_MS);

    let snapshot = sim.snapshot();
    results.push(TestResult {
        name: "snapshot_rounds_vitals".into(),
        passed: snapshot.hunger == 30 && snapshot.poop == 35 && snapshot.loneliness == 7,
        detail: format!(
            "hunger {}, poop {}, loneliness {}",
            snapshot.hunger, snapshot.poop, snapshot.loneliness
        ),
    });

    results.push(TestResult {
        name: "play_time_formats".into(),
        passed: snapshot.play_time == "0h 4m 40s",
        detail: format!("play time {}", snapshot.play_time),
    });

    let urgent = sim.state().vitals.urgent(sim.rules());
    results.push(TestResult {
        name: "urgent_list_respects_direction".into(),
        passed: urgent.contains(&VitalKind::Hunger)
            && urgent.contains(&VitalKind::Energy)
            && !urgent.contains(&VitalKind::Loneliness)
            && !urgent.contains(&VitalKind::Poop),
        detail: format!("{} vital(s) flagged at hour 14", urgent.len()),
    });

    results.push(TestResult {
        name: "no_poop_alert_below_threshold".into(),
        passed: !snapshot.poop_alert,
        detail: format!("poop {} of 50 needed", snapshot.poop),
    });

    sim.feed(FoodKind::Kibble);
    let snapshot = sim.snapshot();
    results.push(TestResult {
        name: "poop_alert_at_threshold".into(),
        passed: snapshot.poop_alert && snapshot.poop == 50,
        detail: format!("poop {} raises the alert", snapshot.poop),
    });

    if verbose {
        let json = serde_json::to_string_pretty(&snapshot).expect("snapshot serializes");
        println!("{}", json);
    }

    results
}
