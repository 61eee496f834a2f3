//! Hatching potions.

use hopla_types::{HabiticaUser, PotionCategory, catalog};
use serde::Serialize;

use crate::collection::{Collection, Stackable, checked_quantity};
use crate::error::HatcheryError;

/// A stack of one kind of hatching potion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HatchPotion {
    name: String,
    quantity: u32,
    #[serde(skip)]
    category: PotionCategory,
}

impl HatchPotion {
    /// Create a potion stack, validating name and quantity.
    pub fn new(name: impl Into<String>, quantity: i64) -> Result<Self, HatcheryError> {
        let name = name.into();
        let Some(category) = catalog::potion_category(&name) else {
            return Err(HatcheryError::InvalidPotion { name });
        };
        let quantity = checked_quantity(&name, quantity)?;
        Ok(Self {
            name,
            quantity,
            category,
        })
    }

    /// The potion's category.
    pub const fn category(&self) -> PotionCategory {
        self.category
    }

    /// A drop potion. The only kind quest eggs accept.
    pub fn is_standard_hatch_potion(&self) -> bool {
        self.category == PotionCategory::Standard
    }

    /// A magic potion.
    pub fn is_magic_hatch_potion(&self) -> bool {
        self.category == PotionCategory::Magic
    }

    /// A wacky potion.
    pub fn is_wacky_hatch_potion(&self) -> bool {
        self.category == PotionCategory::Wacky
    }
}

impl Stackable for HatchPotion {
    const KIND: &'static str = "hatching potion";

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

/// The user's hatching potions, in server order.
pub type HatchPotionCollection = Collection<HatchPotion>;

impl Collection<HatchPotion> {
    /// Build from `items.hatchingPotions`.
    pub fn from_user(user: &HabiticaUser) -> Result<Self, HatcheryError> {
        Self::from_section(user.hatching_potions())
    }

    /// Only the drop potions.
    pub fn get_standard_potion_collection(&self) -> Self {
        self.filter(HatchPotion::is_standard_hatch_potion)
    }

    /// Only the magic potions.
    pub fn get_magic_potion_collection(&self) -> Self {
        self.filter(HatchPotion::is_magic_hatch_potion)
    }

    /// Only the wacky potions.
    pub fn get_wacky_potion_collection(&self) -> Self {
        self.filter(HatchPotion::is_wacky_hatch_potion)
    }
}
