//! Eggs, hatching potions, and hatch planning.
//!
//! # Modules
//!
//! - [`collection`] -- The ordered [`Collection`] shared by eggs and potions
//! - [`egg`] -- [`Egg`] and [`EggCollection`]
//! - [`error`] -- Error types for hatchery operations
//! - [`plan`] -- The [`HatchPlanMaker`] behind `hatch-all`
//! - [`potion`] -- [`HatchPotion`] and [`HatchPotionCollection`]

pub mod collection;
pub mod egg;
pub mod error;
pub mod plan;
pub mod potion;

// Re-export primary types at crate root for convenience.
pub use collection::{Collection, Stackable};
pub use egg::{Egg, EggCollection};
pub use error::HatcheryError;
pub use plan::{HatchPlan, HatchPlanItem, HatchPlanMaker};
pub use potion::{HatchPotion, HatchPotionCollection};
