//! Eggs.

use hopla_types::{EggCategory, HabiticaUser, catalog};
use serde::Serialize;

use crate::collection::{Collection, Stackable, checked_quantity};
use crate::error::HatcheryError;
use crate::potion::HatchPotion;

/// A stack of one kind of egg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Egg {
    name: String,
    quantity: u32,
    #[serde(skip)]
    category: EggCategory,
}

impl Egg {
    /// Create an egg stack, validating name and quantity.
    pub fn new(name: impl Into<String>, quantity: i64) -> Result<Self, HatcheryError> {
        let name = name.into();
        let Some(category) = catalog::egg_category(&name) else {
            return Err(HatcheryError::InvalidEgg { name });
        };
        let quantity = checked_quantity(&name, quantity)?;
        Ok(Self {
            name,
            quantity,
            category,
        })
    }

    /// The egg's category.
    pub const fn category(&self) -> EggCategory {
        self.category
    }

    /// A drop egg.
    pub fn is_standard_egg(&self) -> bool {
        self.category == EggCategory::Standard
    }

    /// A quest egg.
    pub fn is_quest_egg(&self) -> bool {
        self.category == EggCategory::Quest
    }

    /// Whether `potion` can hatch this egg right now.
    ///
    /// Both stacks must be non-empty. Quest eggs only accept drop potions.
    pub fn can_be_hatched_by(&self, potion: &HatchPotion) -> bool {
        if self.quantity == 0 || potion.quantity() == 0 {
            return false;
        }
        if self.is_quest_egg() {
            return potion.is_standard_hatch_potion();
        }
        true
    }
}

impl Stackable for Egg {
    const KIND: &'static str = "egg";

    fn validated(name: String, quantity: i64) -> Result<Self, HatcheryError> {
        Self::new(name, quantity)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

/// The user's eggs, in server order.
pub type EggCollection = Collection<Egg>;

impl Collection<Egg> {
    /// Build from `items.eggs`.
    pub fn from_user(user: &HabiticaUser) -> Result<Self, HatcheryError> {
        Self::from_section(user.eggs())
    }

    /// Only the drop eggs.
    pub fn get_standard_egg_collection(&self) -> Self {
        self.filter(Egg::is_standard_egg)
    }

    /// Only the quest eggs.
    pub fn get_quest_egg_collection(&self) -> Self {
        self.filter(Egg::is_quest_egg)
    }
}
