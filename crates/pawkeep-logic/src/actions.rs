//! Care actions and their vital effects.
//!
//! Each action family has a closed subtype set and a fixed delta table.
//! Subtypes parse from their wire names via `from_name`, returning `None`
//! for anything unrecognized so a bad input can never panic the engine.

use serde::{Deserialize, Serialize};

/// Foods offered by the feed action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodKind {
    Kibble,
    Treat,
    Veggie,
}

impl FoodKind {
    pub const ALL: [FoodKind; 3] = [FoodKind::Kibble, FoodKind::Treat, FoodKind::Veggie];

    pub fn name(self) -> &'static str {
        match self {
            FoodKind::Kibble => "kibble",
            FoodKind::Treat => "treat",
            FoodKind::Veggie => "veggie",
        }
    }

    pub fn from_name(name: &str) -> Option<FoodKind> {
        Self::ALL.into_iter().find(|food| food.name() == name)
    }
}

/// Drinks offered by the drink action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrinkKind {
    Water,
    Milk,
    Juice,
}

impl DrinkKind {
    pub const ALL: [DrinkKind; 3] = [DrinkKind::Water, DrinkKind::Milk, DrinkKind::Juice];

    pub fn name(self) -> &'static str {
        match self {
            DrinkKind::Water => "water",
            DrinkKind::Milk => "milk",
            DrinkKind::Juice => "juice",
        }
    }

    pub fn from_name(name: &str) -> Option<DrinkKind> {
        Self::ALL.into_iter().find(|drink| drink.name() == name)
    }
}

/// Play activities. Each costs energy and lifts the mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayKind {
    Fetch,
    Walk,
    Toy,
}

impl PlayKind {
    pub const ALL: [PlayKind; 3] = [PlayKind::Fetch, PlayKind::Walk, PlayKind::Toy];

    pub fn name(self) -> &'static str {
        match self {
            PlayKind::Fetch => "fetch",
            PlayKind::Walk => "walk",
            PlayKind::Toy => "toy",
        }
    }

    pub fn from_name(name: &str) -> Option<PlayKind> {
        Self::ALL.into_iter().find(|play| play.name() == name)
    }
}

/// Ways to show affection. Each relieves loneliness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AffectionKind {
    Cuddle,
    Hug,
    Talk,
}

impl AffectionKind {
    pub const ALL: [AffectionKind; 3] =
        [AffectionKind::Cuddle, AffectionKind::Hug, AffectionKind::Talk];

    pub fn name(self) -> &'static str {
        match self {
            AffectionKind::Cuddle => "cuddle",
            AffectionKind::Hug => "hug",
            AffectionKind::Talk => "talk",
        }
    }

    pub fn from_name(name: &str) -> Option<AffectionKind> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

/// Vital deltas one action applies. Fields default to zero so tables only
/// spell out what an action actually touches.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ActionEffect {
    pub hunger: f32,
    pub thirst: f32,
    pub happiness: f32,
    pub energy: f32,
    pub cleanliness: f32,
    pub loneliness: f32,
    pub poop: f32,
}

impl ActionEffect {
    /// Whether this effect counts as affectionate for the heart event.
    pub fn raises_happiness(&self) -> bool {
        self.happiness > 0.0
    }
}

/// Poop added by every meal, independent of the food chosen.
pub const FEED_POOP_GAIN: f32 = 15.0;

pub fn feed_effect(food: FoodKind) -> ActionEffect {
    let base = ActionEffect {
        poop: FEED_POOP_GAIN,
        ..ActionEffect::default()
    };
    match food {
        FoodKind::Kibble => ActionEffect {
            hunger: 30.0,
            ..base
        },
        FoodKind::Treat => ActionEffect {
            hunger: 20.0,
            happiness: 15.0,
            ..base
        },
        FoodKind::Veggie => ActionEffect {
            hunger: 25.0,
            energy: 10.0,
            ..base
        },
    }
}

pub fn drink_effect(drink: DrinkKind) -> ActionEffect {
    match drink {
        DrinkKind::Water => ActionEffect {
            thirst: 35.0,
            ..ActionEffect::default()
        },
        DrinkKind::Milk => ActionEffect {
            thirst: 30.0,
            hunger: 10.0,
            ..ActionEffect::default()
        },
        DrinkKind::Juice => ActionEffect {
            thirst: 25.0,
            happiness: 10.0,
            ..ActionEffect::default()
        },
    }
}

pub fn play_effect(activity: PlayKind) -> ActionEffect {
    match activity {
        PlayKind::Fetch => ActionEffect {
            happiness: 25.0,
            energy: -20.0,
            ..ActionEffect::default()
        },
        PlayKind::Walk => ActionEffect {
            happiness: 20.0,
            energy: -15.0,
            ..ActionEffect::default()
        },
        PlayKind::Toy => ActionEffect {
            happiness: 15.0,
            energy: -10.0,
            ..ActionEffect::default()
        },
    }
}

pub fn affection_effect(kind: AffectionKind) -> ActionEffect {
    match kind {
        AffectionKind::Cuddle => ActionEffect {
            happiness: 20.0,
            loneliness: -25.0,
            ..ActionEffect::default()
        },
        AffectionKind::Hug => ActionEffect {
            happiness: 25.0,
            loneliness: -30.0,
            ..ActionEffect::default()
        },
        AffectionKind::Talk => ActionEffect {
            happiness: 15.0,
            loneliness: -20.0,
            ..ActionEffect::default()
        },
    }
}

/// A training session: tiring, mildly rewarding.
pub fn train_effect() -> ActionEffect {
    ActionEffect {
        energy: -20.0,
        happiness: 5.0,
        ..ActionEffect::default()
    }
}

/// Showing off a learned skill.
pub fn skill_use_effect() -> ActionEffect {
    ActionEffect {
        happiness: 10.0,
        energy: -5.0,
        ..ActionEffect::default()
    }
}

/// A quick pat on the head.
pub fn pat_effect() -> ActionEffect {
    ActionEffect {
        happiness: 5.0,
        loneliness: -10.0,
        ..ActionEffect::default()
    }
}
