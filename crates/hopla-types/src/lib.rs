//! Shared reference data and types for the hopla crates.
//!
//! This crate holds everything that is fixed for the lifetime of a command:
//! the game catalogs, the category enums computed from them, the spell book,
//! and the read-only user snapshot the other crates build their models from.
//!
//! # Modules
//!
//! - [`catalog`] -- Pet, egg, hatching potion, and food names with O(1) lookups
//! - [`enums`] -- Category enumerations ([`PetCategory`], [`PotionCategory`], [`EggCategory`])
//! - [`spells`] -- Target-less class spells and their mana costs
//! - [`user`] -- The `GET /user` snapshot ([`HabiticaUser`])

pub mod catalog;
pub mod enums;
pub mod spells;
pub mod user;

// Re-export primary types at crate root for convenience.
pub use enums::{EggCategory, HabiticaClass, PetCategory, PotionCategory};
pub use spells::Spell;
pub use user::HabiticaUser;
