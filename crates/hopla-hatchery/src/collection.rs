//! Ordered, quantity-tracking collections of eggs and hatching potions.
//!
//! [`Collection`] is shared by [`crate::EggCollection`] and
//! [`crate::HatchPotionCollection`]. Each keeps the server's key order, which
//! decides the order the hatch planner visits items in.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::HatcheryError;

/// An item that can be stacked in a [`Collection`].
pub trait Stackable: Sized {
    /// Human readable kind, used in error messages.
    const KIND: &'static str;

    /// Validate a name and quantity.
    fn validated(name: String, quantity: i64) -> Result<Self, HatcheryError>;

    /// The catalog name.
    fn name(&self) -> &str;

    /// How many of this item are held.
    fn quantity(&self) -> u32;

    /// Overwrite the held quantity.
    fn set_quantity(&mut self, quantity: u32);
}

/// Name to item, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Stackable> Collection<T> {
    /// Build a collection, validating every entry. One bad entry fails the
    /// whole collection.
    pub fn new<I, S>(entries: I) -> Result<Self, HatcheryError>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut collection = Self::default();
        for (name, quantity) in entries {
            collection.insert(T::validated(name.into(), quantity)?);
        }
        Ok(collection)
    }

    /// Build a collection from a raw `name -> count` JSON section.
    pub fn from_section(section: &Map<String, Value>) -> Result<Self, HatcheryError> {
        let mut entries = Vec::with_capacity(section.len());
        for (name, value) in section {
            let Some(quantity) = value.as_i64() else {
                return Err(HatcheryError::MalformedQuantity {
                    name: name.clone(),
                    value: value.to_string(),
                });
            };
            entries.push((name.as_str(), quantity));
        }
        Self::new(entries)
    }

    /// Look up an item by name.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).and_then(|&i| self.items.get(i))
    }

    /// The held quantity of `name`, zero if absent.
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.get(name).map_or(0, Stackable::quantity)
    }

    /// Iterate over items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Item names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(Stackable::name)
    }

    /// Number of distinct items.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no entries.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Take one unit of `name` out of the collection.
    pub fn remove_one(&mut self, name: &str) -> Result<(), HatcheryError> {
        let item = self
            .index
            .get(name)
            .copied()
            .and_then(|i| self.items.get_mut(i))
            .ok_or_else(|| HatcheryError::NotInCollection {
                kind: T::KIND,
                name: name.to_owned(),
            })?;
        let remaining = item
            .quantity()
            .checked_sub(1)
            .ok_or_else(|| HatcheryError::Exhausted {
                kind: T::KIND,
                name: name.to_owned(),
            })?;
        item.set_quantity(remaining);
        Ok(())
    }

    /// A new collection with the items matching `predicate`.
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
        T: Clone,
    {
        let mut filtered = Self::default();
        for item in self.items.iter().filter(|item| predicate(item)) {
            filtered.insert(item.clone());
        }
        filtered
    }

    fn insert(&mut self, item: T) {
        let slot = self
            .index
            .get(item.name())
            .copied()
            .and_then(|i| self.items.get_mut(i));
        match slot {
            Some(existing) => *existing = item,
            None => {
                self.index.insert(item.name().to_owned(), self.items.len());
                self.items.push(item);
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Convert a signed quantity into a held count.
pub(crate) fn checked_quantity(name: &str, quantity: i64) -> Result<u32, HatcheryError> {
    u32::try_from(quantity)
        .ok()
        .ok_or_else(|| HatcheryError::InvalidQuantity {
            name: name.to_owned(),
            quantity,
        })
}
