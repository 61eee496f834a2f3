//! Pets, mounts, food, and the zoo feeding planner.
//!
//! Everything here is built fresh from a [`hopla_types::HabiticaUser`]
//! snapshot and thrown away when the command ends. Construction validates
//! every name and status up front, so planning itself never fails on user
//! data.
//!
//! # Modules
//!
//! - [`error`] -- Error types for zoo operations
//! - [`feeding_status`] -- Validated progress towards a mount
//! - [`pet`] -- [`Pet`], [`FavoriteFood`], and [`PetMountPair`]
//! - [`zoo`] -- The ordered [`Zoo`] and its [`ZooBuilder`]
//! - [`food`] -- The [`FoodStockpile`] and its [`FoodStockpileBuilder`]
//! - [`feeding`] -- The greedy [`ZooFeedingAlgorithm`] and its [`ZookeeperFeedPlan`]

pub mod error;
pub mod feeding;
pub mod feeding_status;
pub mod food;
pub mod pet;
pub mod zoo;

// Re-export primary types at crate root for convenience.
pub use error::ZooError;
pub use feeding::{FeedPlanItem, FeedingOutcome, ZooFeedingAlgorithm, ZookeeperFeedPlan};
pub use feeding_status::FeedingStatus;
pub use food::{FoodStockpile, FoodStockpileBuilder};
pub use pet::{FavoriteFood, Pet, PetMountPair};
pub use zoo::{Zoo, ZooBuilder};
