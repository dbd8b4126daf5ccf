//! Narration lines: everything the pet says, in one place.
//!
//! The engine surfaces exactly one of these as the status message after
//! each operation. Keeping them here keeps wording out of the state
//! machine and lets tests assert on full lines.

use crate::actions::{AffectionKind, DrinkKind, FoodKind, PlayKind};
use crate::growth::LifeStage;
use crate::skills::Skill;
use crate::species::Species;
use crate::vitals::VitalKind;

/// Idle chatter a content pet occasionally swaps in after an hourly tick.
pub const FLAVOR_LINES: [&str; 5] = [
    "I love being your pet!",
    "This is so much fun!",
    "You're the best owner!",
    "I'm having a great time!",
    "Life is good with you!",
];

pub fn initial() -> String {
    "Hello! I'm ready to play!".to_string()
}

pub fn hello(name: &str, species: Species) -> String {
    format!("Hello! I'm {} the {}! Let's play!", name, species.name())
}

pub fn already_running() -> String {
    "Game is already running!".to_string()
}

pub fn not_started() -> String {
    "Please start the game first!".to_string()
}

pub fn reset_line() -> String {
    "I've been reset! Start a new game to begin!".to_string()
}

/// The complaint matching a critical vital.
pub fn critical_line(need: VitalKind) -> &'static str {
    match need {
        VitalKind::Hunger => "I'm so hungry! Please feed me!",
        VitalKind::Thirst => "I'm very thirsty! Need water!",
        VitalKind::Happiness => "I'm really bored! Let's play!",
        VitalKind::Energy => "I'm exhausted... Need to sleep",
        VitalKind::Loneliness => "I'm so lonely... Need attention!",
        VitalKind::Poop => "I really need to poop! Clean me!",
        VitalKind::Cleanliness => "I'm filthy! Need a bath!",
    }
}

pub fn fed(food: FoodKind) -> String {
    format!("Yum! {}! Thank you!", food.name())
}

pub fn drank(drink: DrinkKind) -> String {
    format!("Refreshing {}!", drink.name())
}

pub fn played(activity: PlayKind) -> String {
    format!("Playing {} is so much fun!", activity.name())
}

pub fn too_tired_to_play() -> String {
    "I'm too tired to play right now...".to_string()
}

pub fn adored(kind: AffectionKind) -> String {
    format!("I love {}! You're the best!", kind.name())
}

pub fn cleaned() -> String {
    "Ahh, much cleaner! Thank you!".to_string()
}

pub fn trained() -> String {
    "Training is hard work but I'm learning!".to_string()
}

pub fn too_tired_to_train() -> String {
    "I'm too tired to train right now...".to_string()
}

pub fn fell_asleep() -> String {
    "Zzz... Good night...".to_string()
}

pub fn woke_up() -> String {
    "I'm awake! Let's play!".to_string()
}

pub fn learned_skill(skill: Skill) -> String {
    format!("I learned a new skill: {}!", skill.display_name())
}

/// The pet performing a trick it knows.
pub fn skill_line(name: &str, species: Species, skill: Skill) -> String {
    match skill {
        Skill::Speak => format!("{} says: \"{}\"", name, species.voice()),
        Skill::Roll => format!("{} rolls over happily!", name),
        Skill::Sit => format!("{} sits nicely for you!", name),
        Skill::Stay => format!("{} stays perfectly still!", name),
        Skill::Dance => format!("{} dances around joyfully!", name),
        Skill::Fetch => format!("{} fetches the ball and brings it back!", name),
        Skill::Spin => format!("{} spins in circles!", name),
        Skill::PlayDead => format!("{} plays dead dramatically!", name),
    }
}

pub fn evolved(stage: LifeStage, species: Species) -> String {
    format!("Wow! I evolved into a {} {}!", stage.name(), species.name())
}

pub fn loves_attention(name: &str) -> String {
    format!("{} loves the attention!", name)
}

pub fn passed_away(name: &str) -> String {
    format!("{} has passed away... Reset to start over.", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speak_uses_species_voice() {
        assert_eq!(
            skill_line("Rex", Species::Dog, Skill::Speak),
            "Rex says: \"Woof!\""
        );
        assert_eq!(
            skill_line("Mochi", Species::Cat, Skill::Speak),
            "Mochi says: \"Meow!\""
        );
        assert_eq!(
            skill_line("Pip", Species::Other, Skill::Speak),
            "Pip says: \"Squeak!\""
        );
    }

    #[test]
    fn trick_lines_lead_with_the_name() {
        for skill in Skill::ALL {
            let line = skill_line("Biscuit", Species::Dog, skill);
            assert!(line.starts_with("Biscuit "));
        }
    }

    #[test]
    fn learned_line_uses_display_name() {
        assert_eq!(
            learned_skill(Skill::PlayDead),
            "I learned a new skill: play dead!"
        );
    }

    #[test]
    fn every_critical_vital_has_a_complaint() {
        let needs = [
            VitalKind::Hunger,
            VitalKind::Thirst,
            VitalKind::Happiness,
            VitalKind::Energy,
            VitalKind::Loneliness,
            VitalKind::Poop,
            VitalKind::Cleanliness,
        ];
        for need in needs {
            assert!(!critical_line(need).is_empty());
        }
    }

    #[test]
    fn evolution_line_names_stage_and_species() {
        assert_eq!(
            evolved(LifeStage::Child, Species::Dog),
            "Wow! I evolved into a Child dog!"
        );
    }
}
