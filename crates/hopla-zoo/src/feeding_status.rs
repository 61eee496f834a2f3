//! A pet's progress towards becoming a mount.
//!
//! Feeding a pet raises its status by 5 for a favorite food and by 2 for
//! anything else. At 50 the pet turns into a mount and its status becomes
//! -1. Freshly hatched pets start at 5, so 0..=4 never occur.
//!
//! 50 itself is rejected as an input: the server flips the status to -1 in
//! the same request that reaches 50, so a snapshot never contains it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ZooError;

/// The status at which a pet becomes a mount.
pub const MOUNT_THRESHOLD: i8 = 50;

/// Status gained per favorite food item.
const FAVORITE_FOOD_GAIN: u8 = 5;

/// Status gained per non-favorite food item.
const OTHER_FOOD_GAIN: u8 = 2;

/// A validated feeding status: -1 or 5..=49.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct FeedingStatus(i8);

impl FeedingStatus {
    /// The status of a pet that has already been raised to a mount.
    pub const MOUNT_ONLY: Self = Self(-1);

    /// The status of a freshly hatched pet.
    pub const HATCHED: Self = Self(5);

    /// Validate a raw feeding status.
    pub fn new(status: i64) -> Result<Self, ZooError> {
        match i8::try_from(status) {
            Ok(s) if s == -1 || (5..MOUNT_THRESHOLD).contains(&s) => Ok(Self(s)),
            _ => Err(ZooError::InvalidFeedingStatus { status }),
        }
    }

    /// The raw status value.
    pub const fn value(self) -> i8 {
        self.0
    }

    /// Whether the pet has already become a mount.
    pub const fn is_mount_only(self) -> bool {
        self.0 == -1
    }

    /// How many food items are needed to reach the mount threshold.
    ///
    /// `ceil((50 - status) / 5)` for a favorite food and
    /// `ceil((50 - status) / 2)` otherwise.
    pub fn required_food_items_to_become_mount(self, is_favorite: bool) -> u32 {
        let remaining = MOUNT_THRESHOLD.abs_diff(self.0);
        let gain = if is_favorite {
            FAVORITE_FOOD_GAIN
        } else {
            OTHER_FOOD_GAIN
        };
        u32::from(remaining.div_ceil(gain))
    }

    /// Progress as a percentage. Mount-only pets count as fully fed.
    pub const fn to_percentage(self) -> u8 {
        if self.is_mount_only() {
            100
        } else {
            self.0.unsigned_abs().saturating_mul(2)
        }
    }
}

impl Default for FeedingStatus {
    fn default() -> Self {
        Self::HATCHED
    }
}

impl TryFrom<i64> for FeedingStatus {
    type Error = ZooError;

    fn try_from(status: i64) -> Result<Self, Self::Error> {
        Self::new(status)
    }
}

impl From<FeedingStatus> for i64 {
    fn from(status: FeedingStatus) -> Self {
        Self::from(status.0)
    }
}

impl fmt::Display for FeedingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
