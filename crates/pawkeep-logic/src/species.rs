//! Pet species. Cosmetic only: it picks the speak voice, never the rules.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Species {
    #[default]
    Dog,
    Cat,
    Other,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Dog, Species::Cat, Species::Other];

    pub fn name(self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Other => "other",
        }
    }

    pub fn from_name(name: &str) -> Option<Species> {
        Self::ALL.into_iter().find(|species| species.name() == name)
    }

    /// What the speak trick sounds like.
    pub fn voice(self) -> &'static str {
        match self {
            Species::Dog => "Woof!",
            Species::Cat => "Meow!",
            Species::Other => "Squeak!",
        }
    }
}
