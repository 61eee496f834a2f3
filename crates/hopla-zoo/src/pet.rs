//! Pets and their mount pairing.
//!
//! A [`Pet`] is a catalog-validated name plus a [`FeedingStatus`]. Its
//! category is looked up once at construction and drives every feeding
//! rule afterwards.

use std::fmt;

use hopla_types::{PetCategory, PotionCategory};
use hopla_types::catalog;
use serde::Serialize;

use crate::error::ZooError;
use crate::feeding_status::FeedingStatus;

// ---------------------------------------------------------------------------
// Favorite food
// ---------------------------------------------------------------------------

/// What a pet likes to eat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FavoriteFood {
    /// Wacky and rare pets cannot be fed at all.
    Unfeedable,
    /// Magic potion pets treat every food as a favorite.
    Any,
    /// Generation 1 and quest pets like exactly one food.
    Food(&'static str),
}

impl FavoriteFood {
    /// The single favorite food, if there is one.
    pub const fn food(self) -> Option<&'static str> {
        match self {
            Self::Food(name) => Some(name),
            Self::Unfeedable | Self::Any => None,
        }
    }
}

impl fmt::Display for FavoriteFood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unfeedable => f.write_str("Unfeedable"),
            Self::Any => f.write_str("Any"),
            Self::Food(name) => f.write_str(name),
        }
    }
}

// ---------------------------------------------------------------------------
// Pet
// ---------------------------------------------------------------------------

/// A pet owned by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pet {
    name: String,
    feeding_status: FeedingStatus,
    #[serde(skip)]
    category: PetCategory,
}

impl Pet {
    /// Create a pet, validating its name against the catalog.
    pub fn new(name: impl Into<String>, feeding_status: FeedingStatus) -> Result<Self, ZooError> {
        let name = name.into();
        let Some(category) = catalog::pet_category(&name) else {
            return Err(ZooError::InvalidPet { name });
        };
        Ok(Self {
            name,
            feeding_status,
            category,
        })
    }

    /// Create a freshly hatched pet (feeding status 5).
    pub fn hatched(name: impl Into<String>) -> Result<Self, ZooError> {
        Self::new(name, FeedingStatus::HATCHED)
    }

    /// The pet's name, e.g. `Wolf-Base`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pet's feeding status.
    pub const fn feeding_status(&self) -> FeedingStatus {
        self.feeding_status
    }

    /// The pet's category.
    pub const fn category(&self) -> PetCategory {
        self.category
    }

    /// The hatching potion the pet was hatched with. `None` for rare pets.
    pub fn hatching_potion(&self) -> Option<&str> {
        catalog::split_pet_name(&self.name).and_then(|(_, potion)| potion)
    }

    /// Whether the pet accepts food at all.
    pub const fn is_feedable(&self) -> bool {
        self.category.is_feedable()
    }

    /// Whether the pet likes exactly one food.
    pub const fn has_just_1_favorite_food(&self) -> bool {
        self.category.has_single_favorite_food()
    }

    /// Whether every food counts as a favorite for this pet.
    pub fn likes_all_food(&self) -> bool {
        self.category == PetCategory::MagicPotion
    }

    /// Hatched from a drop egg and a standard potion.
    pub fn is_generation1_pet(&self) -> bool {
        self.category == PetCategory::Generation1
    }

    /// Hatched from a quest egg. Event and world boss pets are not quest pets.
    pub fn is_quest_pet(&self) -> bool {
        self.category == PetCategory::Quest
    }

    /// Hatched with a magic potion.
    pub fn is_magic_hatching_pet(&self) -> bool {
        self.category == PetCategory::MagicPotion
    }

    /// Hatched with a wacky potion.
    pub fn is_wacky_pet(&self) -> bool {
        self.category == PetCategory::Wacky
    }

    /// A pet that cannot be hatched from eggs.
    pub fn is_rare_pet(&self) -> bool {
        self.category == PetCategory::Rare
    }

    /// Hatched with one of the standard drop potions (`Base`, `Desert`, ...).
    pub fn is_from_drop_hatching_potions(&self) -> bool {
        self.hatching_potion()
            .and_then(catalog::potion_category)
            .is_some_and(|category| category == PotionCategory::Standard)
    }

    /// The food this pet prefers.
    ///
    /// Errors only if a single-favorite pet carries a potion with no food
    /// in the table, which the catalog rules out.
    pub fn favorite_food(&self) -> Result<FavoriteFood, ZooError> {
        if !self.is_feedable() {
            return Ok(FavoriteFood::Unfeedable);
        }
        if self.likes_all_food() {
            return Ok(FavoriteFood::Any);
        }
        self.hatching_potion()
            .and_then(catalog::favorite_food_of_potion)
            .map(FavoriteFood::Food)
            .ok_or_else(|| ZooError::UnknownFeedingHabits {
                pet: self.name.clone(),
            })
    }

    /// Whether `food` feeds this pet at the favorite rate.
    pub fn is_favorite_food(&self, food: &str) -> bool {
        match self.favorite_food() {
            Ok(FavoriteFood::Any) => true,
            Ok(FavoriteFood::Food(favorite)) => favorite == food,
            Ok(FavoriteFood::Unfeedable) | Err(_) => false,
        }
    }

    /// How many units of `food` turn this pet into a mount.
    pub fn required_food_items_until_mount(&self, food: &str) -> u32 {
        self.feeding_status
            .required_food_items_to_become_mount(self.is_favorite_food(food))
    }

    /// A human readable explanation of whether this pet can be fed.
    pub fn feeding_status_explanation(&self) -> String {
        if !self.is_feedable() {
            return format!("{} can't be fed because it is special.", self.name);
        }
        if self.feeding_status.is_mount_only() {
            return format!("You can't feed {}, you only have the mount.", self.name);
        }
        if self.feeding_status == FeedingStatus::HATCHED {
            return format!(
                "Cannot determine if {} can be fed. You either have:\n\
                 1. Both the pet and the mount. In this case, you cannot feed the pet.\n\
                 2. A pet that hasn't been fed, but no mount. In this case, you can feed your pet.",
                self.name
            );
        }
        format!("{} can be fed.", self.name)
    }
}

// ---------------------------------------------------------------------------
// Pet-mount pair
// ---------------------------------------------------------------------------

/// A pet together with whether its mount is owned.
///
/// Mount-only entries reuse a default-status [`Pet`] with
/// `pet_available == false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetMountPair {
    /// The pet side of the pair.
    pub pet: Pet,
    /// The user owns the pet itself.
    pub pet_available: bool,
    /// The user owns the matching mount.
    pub mount_available: bool,
}

impl PetMountPair {
    /// Pair a pet with its ownership flags.
    pub const fn new(pet: Pet, pet_available: bool, mount_available: bool) -> Self {
        Self {
            pet,
            pet_available,
            mount_available,
        }
    }

    /// Feeding would make progress: there is a feedable pet and no mount yet.
    pub const fn can_feed_pet(&self) -> bool {
        !self.mount_available
            && self.pet_available
            && self.pet.is_feedable()
            && !self.pet.feeding_status.is_mount_only()
    }
}
