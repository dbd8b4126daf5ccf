//! The trick set a pet can learn and the book tracking what it knows.
//!
//! Eight fixed skills, learned one at a time through play and training.
//! There is no forgetting; the book only resets with the pet.

use serde::{Deserialize, Serialize};

/// A learnable trick. The set is closed: no runtime-defined skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Skill {
    Speak,
    Roll,
    Sit,
    Stay,
    Dance,
    Fetch,
    Spin,
    PlayDead,
}

impl Skill {
    pub const COUNT: usize = 8;

    pub const ALL: [Skill; Skill::COUNT] = [
        Skill::Speak,
        Skill::Roll,
        Skill::Sit,
        Skill::Stay,
        Skill::Dance,
        Skill::Fetch,
        Skill::Spin,
        Skill::PlayDead,
    ];

    /// Stable identifier used by callers addressing skills by name.
    pub fn name(self) -> &'static str {
        match self {
            Skill::Speak => "speak",
            Skill::Roll => "roll",
            Skill::Sit => "sit",
            Skill::Stay => "stay",
            Skill::Dance => "dance",
            Skill::Fetch => "fetch",
            Skill::Spin => "spin",
            Skill::PlayDead => "play_dead",
        }
    }

    /// Human-readable form for narration.
    pub fn display_name(self) -> &'static str {
        match self {
            Skill::PlayDead => "play dead",
            other => other.name(),
        }
    }

    pub fn from_name(name: &str) -> Option<Skill> {
        Self::ALL.into_iter().find(|skill| skill.name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Which skills the pet has learned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SkillBook {
    learned: [bool; Skill::COUNT],
}

impl SkillBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_learned(&self, skill: Skill) -> bool {
        self.learned[skill.index()]
    }

    /// Marks a skill learned. Returns false if it already was.
    pub fn learn(&mut self, skill: Skill) -> bool {
        let slot = &mut self.learned[skill.index()];
        let newly = !*slot;
        *slot = true;
        newly
    }

    /// Skills still waiting to be taught, in canonical order.
    pub fn unlearned(&self) -> Vec<Skill> {
        Skill::ALL
            .into_iter()
            .filter(|skill| !self.is_learned(*skill))
            .collect()
    }

    pub fn learned_count(&self) -> usize {
        self.learned.iter().filter(|known| **known).count()
    }

    pub fn all_learned(&self) -> bool {
        self.learned_count() == Skill::COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for skill in Skill::ALL {
            assert_eq!(Skill::from_name(skill.name()), Some(skill));
        }
        assert_eq!(Skill::from_name("backflip"), None);
        assert_eq!(Skill::from_name("play dead"), None);
    }

    #[test]
    fn display_name_spaces_play_dead() {
        assert_eq!(Skill::PlayDead.display_name(), "play dead");
        assert_eq!(Skill::Sit.display_name(), "sit");
    }

    #[test]
    fn learning_is_monotone() {
        let mut book = SkillBook::new();
        assert_eq!(book.unlearned().len(), Skill::COUNT);

        assert!(book.learn(Skill::Dance));
        assert!(!book.learn(Skill::Dance));
        assert!(book.is_learned(Skill::Dance));
        assert_eq!(book.learned_count(), 1);
        assert_eq!(book.unlearned().len(), Skill::COUNT - 1);
        assert!(!book.unlearned().contains(&Skill::Dance));
    }

    #[test]
    fn full_book() {
        let mut book = SkillBook::new();
        for skill in Skill::ALL {
            book.learn(skill);
        }
        assert!(book.all_learned());
        assert!(book.unlearned().is_empty());
    }
}
