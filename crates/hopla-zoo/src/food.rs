//! The food stockpile and its builder.
//!
//! The stockpile keeps the server's key order. That order decides ties
//! in [`FoodStockpile::get_most_abundant_food`], so it must not be lost
//! between the user snapshot and the planner.

use std::collections::HashMap;

use hopla_types::HabiticaUser;
use hopla_types::catalog;
use serde_json::{Map, Value};

use crate::error::ZooError;

// ---------------------------------------------------------------------------
// Stockpile
// ---------------------------------------------------------------------------

/// Food name to count, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoodStockpile {
    entries: Vec<(String, u32)>,
    index: HashMap<String, usize>,
}

impl FoodStockpile {
    /// Build a stockpile, validating every food name.
    ///
    /// A repeated name keeps its first position and the last count.
    pub fn new<I, S>(entries: I) -> Result<Self, ZooError>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut stockpile = Self::default();
        for (name, count) in entries {
            let name = name.into();
            if !catalog::is_feeding_food(&name) {
                return Err(ZooError::InvalidFood { name });
            }
            stockpile.set(name, count);
        }
        Ok(stockpile)
    }

    /// The count of `food`, or `None` if it was never stocked.
    pub fn get(&self, food: &str) -> Option<u32> {
        self.position(food)
            .and_then(|i| self.entries.get(i))
            .map(|(_, count)| *count)
    }

    /// Whether at least `n` units of `food` are available.
    pub fn has_sufficient(&self, food: &str, n: u32) -> bool {
        self.get(food).is_some_and(|count| count >= n)
    }

    /// Add `n` units of `food`, stocking it if it is new.
    pub fn add(&mut self, food: &str, n: u32) -> Result<(), ZooError> {
        if !catalog::is_feeding_food(food) {
            return Err(ZooError::InvalidFood {
                name: food.to_owned(),
            });
        }
        let current = self.get(food).unwrap_or(0);
        let updated = current
            .checked_add(n)
            .ok_or_else(|| ZooError::ArithmeticOverflow {
                context: format!("adding {n} to {food} count {current}"),
            })?;
        self.set(food.to_owned(), updated);
        Ok(())
    }

    /// Take `n` units of `food` out of the stockpile.
    ///
    /// Fails without modifying anything if the food is absent or the count
    /// would drop below zero.
    pub fn subtract(&mut self, food: &str, n: u32) -> Result<(), ZooError> {
        let slot = self
            .position(food)
            .and_then(|i| self.entries.get_mut(i))
            .ok_or_else(|| ZooError::FoodNotInStockpile {
                food: food.to_owned(),
            })?;
        let available = slot.1;
        slot.1 = available
            .checked_sub(n)
            .ok_or_else(|| ZooError::InsufficientFood {
                food: food.to_owned(),
                requested: n,
                available,
            })?;
        Ok(())
    }

    /// The food with the highest count. Ties go to the first one stocked.
    pub fn get_most_abundant_food(&self) -> Option<&str> {
        let mut best: Option<(&str, u32)> = None;
        for (name, count) in &self.entries {
            if best.is_none_or(|(_, top)| *count > top) {
                best = Some((name, *count));
            }
        }
        best.map(|(name, _)| name)
    }

    /// Iterate over `(food, count)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Number of distinct foods.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no food is stocked at all.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, food: &str) -> Option<usize> {
        self.index.get(food).copied()
    }

    fn set(&mut self, name: String, count: u32) {
        match self.position(&name).and_then(|i| self.entries.get_mut(i)) {
            Some(slot) => slot.1 = count,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, count));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builds a [`FoodStockpile`] from the `items.food` section of a user.
#[derive(Debug, Clone, Default)]
pub struct FoodStockpileBuilder {
    food: Map<String, Value>,
}

impl FoodStockpileBuilder {
    /// Start with an empty food section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the food section from a user snapshot.
    #[must_use]
    pub fn user(mut self, user: &HabiticaUser) -> Self {
        self.food = user.food().clone();
        self
    }

    /// Take the food section from a raw `name -> count` mapping.
    #[must_use]
    pub fn food(mut self, food: Map<String, Value>) -> Self {
        self.food = food;
        self
    }

    /// Validate every entry and build the stockpile. Saddles are skipped.
    pub fn build(self) -> Result<FoodStockpile, ZooError> {
        let mut entries = Vec::with_capacity(self.food.len());
        for (name, value) in self.food {
            if name == catalog::SADDLE {
                continue;
            }
            let Some(count) = value.as_u64().and_then(|n| u32::try_from(n).ok()) else {
                return Err(ZooError::InvalidFoodQuantity {
                    food: name,
                    value: value.to_string(),
                });
            };
            entries.push((name, count));
        }
        FoodStockpile::new(entries)
    }
}
