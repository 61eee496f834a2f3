//! Error types for the hopla-hatchery crate.

/// Errors that can occur while building or mutating hatchery collections.
#[derive(Debug, thiserror::Error)]
pub enum HatcheryError {
    /// The egg name is not in the catalog.
    #[error("{name} is not a valid egg name")]
    InvalidEgg {
        /// The rejected name.
        name: String,
    },

    /// The hatching potion name is not in the catalog.
    #[error("{name} is not a valid hatching potion name")]
    InvalidPotion {
        /// The rejected name.
        name: String,
    },

    /// A quantity was negative or too large.
    #[error("{quantity} is not a valid quantity for {name}")]
    InvalidQuantity {
        /// The item whose quantity was rejected.
        name: String,
        /// The rejected quantity.
        quantity: i64,
    },

    /// A quantity in the user snapshot is not an integer.
    #[error("quantity of {name} is not an integer: {value}")]
    MalformedQuantity {
        /// The item whose quantity could not be read.
        name: String,
        /// The raw JSON value.
        value: String,
    },

    /// Tried to remove an item that is not in the collection.
    #[error("{kind} {name} is not in the collection")]
    NotInCollection {
        /// `egg` or `hatching potion`.
        kind: &'static str,
        /// The missing item.
        name: String,
    },

    /// Tried to remove an item whose quantity is already zero.
    #[error("no {kind} {name} left in the collection, cannot remove any more")]
    Exhausted {
        /// `egg` or `hatching potion`.
        kind: &'static str,
        /// The exhausted item.
        name: String,
    },
}
