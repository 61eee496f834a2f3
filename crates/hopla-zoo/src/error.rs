//! Error types for the hopla-zoo crate.
//!
//! Construction-time validation failures and stockpile consistency
//! violations both surface as [`ZooError`]. Running out of food during
//! planning is not an error: the planner skips the pet instead.

/// Errors that can occur while building or mutating zoo models.
#[derive(Debug, thiserror::Error)]
pub enum ZooError {
    /// The pet name is not in the catalog.
    #[error("pet_name={name:?} is not recognized by hopla; check the spelling, or report it if the pet is new")]
    InvalidPet {
        /// The rejected name.
        name: String,
    },

    /// The feeding status is outside {-1} and 5..=49.
    #[error("feeding_status={status} is invalid")]
    InvalidFeedingStatus {
        /// The rejected status.
        status: i64,
    },

    /// The feeding status in the user snapshot is not an integer.
    #[error("feeding status of {pet} is not an integer: {value}")]
    MalformedFeedingStatus {
        /// The pet whose status could not be read.
        pet: String,
        /// The raw JSON value.
        value: String,
    },

    /// A feedable pet whose favorite food could not be derived from its name.
    #[error("could not find the feeding habits of {pet}")]
    UnknownFeedingHabits {
        /// The pet in question.
        pet: String,
    },

    /// The food name is not in the catalog.
    #[error("{name:?} is not a valid food name")]
    InvalidFood {
        /// The rejected name.
        name: String,
    },

    /// A food count was negative or not an integer.
    #[error("invalid quantity for food {food}: {value}")]
    InvalidFoodQuantity {
        /// The food whose count was rejected.
        food: String,
        /// The raw value.
        value: String,
    },

    /// Tried to take food that is not in the stockpile at all.
    #[error("{food} is not in the stockpile")]
    FoodNotInStockpile {
        /// The missing food.
        food: String,
    },

    /// Tried to take more food than the stockpile holds.
    #[error("insufficient food: wanted {requested} of {food} but only have {available}")]
    InsufficientFood {
        /// The food being removed.
        food: String,
        /// The quantity the caller attempted to remove.
        requested: u32,
        /// The quantity actually in the stockpile.
        available: u32,
    },

    /// An arithmetic overflow occurred during a stockpile computation.
    #[error("arithmetic overflow: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },
}
