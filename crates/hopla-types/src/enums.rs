//! Category enumerations for pets, eggs, and hatching potions.
//!
//! Every catalog name belongs to exactly one category. The category is
//! computed once when a model is constructed and never re-derived from
//! string scans afterwards.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Pets
// ---------------------------------------------------------------------------

/// The family a pet belongs to.
///
/// Determines whether a pet can be fed and which food it prefers:
/// - [`PetCategory::Generation1`] and [`PetCategory::Quest`] pets have
///   exactly one favorite food, derived from their hatching potion.
/// - [`PetCategory::MagicPotion`] pets treat every food as a favorite.
/// - [`PetCategory::Wacky`] and [`PetCategory::Rare`] pets cannot be fed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PetCategory {
    /// Drop egg hatched with a standard potion (e.g. `Wolf-Base`).
    Generation1,
    /// Quest egg hatched with a standard potion (e.g. `Gryphon-Red`).
    Quest,
    /// Drop egg hatched with a magic potion (e.g. `Fox-Moonglow`).
    MagicPotion,
    /// Drop egg hatched with a wacky potion (e.g. `Cactus-Veggie`).
    Wacky,
    /// World boss rewards, event pets, and other pets that cannot be hatched.
    Rare,
}

impl PetCategory {
    /// Whether pets of this category accept food at all.
    pub const fn is_feedable(self) -> bool {
        matches!(self, Self::Generation1 | Self::Quest | Self::MagicPotion)
    }

    /// Whether pets of this category like exactly one food.
    pub const fn has_single_favorite_food(self) -> bool {
        matches!(self, Self::Generation1 | Self::Quest)
    }
}

// ---------------------------------------------------------------------------
// Hatching potions
// ---------------------------------------------------------------------------

/// The kind of a hatching potion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PotionCategory {
    /// Drop potions (`Base`, `Desert`, ...). The only potions quest eggs accept.
    Standard,
    /// Magic potions bought with gems (`Rainbow`, `Moonglow`, ...).
    Magic,
    /// Wacky potions (`Veggie`, `Dessert`).
    Wacky,
}

// ---------------------------------------------------------------------------
// Eggs
// ---------------------------------------------------------------------------

/// The kind of an egg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EggCategory {
    /// Eggs that drop from completing tasks.
    Standard,
    /// Eggs rewarded by quests.
    Quest,
}

// ---------------------------------------------------------------------------
// Classes
// ---------------------------------------------------------------------------

/// A Habitica character class, as named by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabiticaClass {
    /// Warrior.
    Warrior,
    /// Mage. The API calls this class `wizard`.
    Wizard,
    /// Healer.
    Healer,
    /// Rogue.
    Rogue,
}

impl HabiticaClass {
    /// The class name used by the API.
    pub const fn api_name(self) -> &'static str {
        match self {
            Self::Warrior => "warrior",
            Self::Wizard => "wizard",
            Self::Healer => "healer",
            Self::Rogue => "rogue",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn feedable_categories() {
        assert!(PetCategory::Generation1.is_feedable());
        assert!(PetCategory::Quest.is_feedable());
        assert!(PetCategory::MagicPotion.is_feedable());
        assert!(!PetCategory::Wacky.is_feedable());
        assert!(!PetCategory::Rare.is_feedable());
    }

    #[test]
    fn single_favorite_categories() {
        assert!(PetCategory::Generation1.has_single_favorite_food());
        assert!(PetCategory::Quest.has_single_favorite_food());
        assert!(!PetCategory::MagicPotion.has_single_favorite_food());
        assert!(!PetCategory::Wacky.has_single_favorite_food());
        assert!(!PetCategory::Rare.has_single_favorite_food());
    }

    #[test]
    fn class_serializes_lowercase() {
        let json = serde_json::to_string(&HabiticaClass::Wizard).unwrap();
        assert_eq!(json, "\"wizard\"");
        assert_eq!(HabiticaClass::Rogue.api_name(), "rogue");
    }
}
