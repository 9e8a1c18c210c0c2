//! Pet food recommendation by species and age.

use std::fmt;

/// Species the recommender knows about. Anything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Species {
    Dog,
    Cat,
    Other,
}

impl Species {
    /// Case-insensitive, whitespace-trimmed. Never fails.
    pub fn parse(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "dog" => Species::Dog,
            "cat" => Species::Cat,
            _ => Species::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetFood {
    PuppyFood,
    AdultFood,
    SeniorCatFood,
    JuniorCatFood,
    /// Fallback for species we have no rule for.
    UnknownSpecies,
}

impl PetFood {
    pub fn label(self) -> &'static str {
        match self {
            PetFood::PuppyFood => "Puppy food",
            PetFood::AdultFood => "Adult food",
            PetFood::SeniorCatFood => "Senior cat food",
            PetFood::JuniorCatFood => "Junior cat food",
            PetFood::UnknownSpecies => "Unknown species",
        }
    }
}

impl fmt::Display for PetFood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Dogs under 2 get puppy food; cats over 5 get senior food.
pub fn classify_pet(species: &str, age: i64) -> PetFood {
    match Species::parse(species) {
        Species::Dog if age < 2 => PetFood::PuppyFood,
        Species::Dog => PetFood::AdultFood,
        Species::Cat if age > 5 => PetFood::SeniorCatFood,
        Species::Cat => PetFood::JuniorCatFood,
        Species::Other => PetFood::UnknownSpecies,
    }
}
