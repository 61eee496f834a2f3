//! The zoo: every pet and mount a user owns.
//!
//! A [`Zoo`] maps pet names to [`PetMountPair`]s in the order the server
//! listed them. Filters return new zoos and leave the source untouched.

use std::collections::HashMap;

use hopla_types::HabiticaUser;
use serde_json::{Map, Value};

use crate::error::ZooError;
use crate::feeding_status::FeedingStatus;
use crate::pet::{Pet, PetMountPair};

// ---------------------------------------------------------------------------
// Zoo
// ---------------------------------------------------------------------------

/// An ordered collection of pet-mount pairs keyed by pet name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Zoo {
    pairs: Vec<PetMountPair>,
    index: HashMap<String, usize>,
}

impl Zoo {
    /// Create an empty zoo.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pair, replacing an existing pair for the same pet in place.
    pub fn insert(&mut self, pair: PetMountPair) {
        let slot = self
            .index
            .get(pair.pet.name())
            .copied()
            .and_then(|i| self.pairs.get_mut(i));
        match slot {
            Some(existing) => *existing = pair,
            None => {
                self.index.insert(pair.pet.name().to_owned(), self.pairs.len());
                self.pairs.push(pair);
            }
        }
    }

    /// Look up the pair for a pet.
    pub fn get(&self, pet_name: &str) -> Option<&PetMountPair> {
        self.index.get(pet_name).and_then(|&i| self.pairs.get(i))
    }

    /// Whether the zoo holds an entry for `pet_name`.
    pub fn contains(&self, pet_name: &str) -> bool {
        self.index.contains_key(pet_name)
    }

    /// Iterate over pairs in zoo order.
    pub fn iter(&self) -> std::slice::Iter<'_, PetMountPair> {
        self.pairs.iter()
    }

    /// Pet names in zoo order.
    pub fn pet_names(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|pair| pair.pet.name())
    }

    /// Number of entries.
    pub const fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the zoo is empty.
    pub const fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Keep the pairs that match `predicate`.
    pub fn filter_on_pet_mount_pairs<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&PetMountPair) -> bool,
    {
        self.pairs
            .iter()
            .filter(|pair| predicate(pair))
            .cloned()
            .collect()
    }

    /// Keep the pairs whose pet matches `predicate`.
    pub fn filter_on_pet<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&Pet) -> bool,
    {
        self.filter_on_pet_mount_pairs(|pair| predicate(&pair.pet))
    }

    /// Keep the pairs whose pet name matches `predicate`.
    pub fn filter_on_pet_name<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&str) -> bool,
    {
        self.filter_on_pet_mount_pairs(|pair| predicate(pair.pet.name()))
    }

    /// Only the pets that can be fed right now.
    pub fn get_feedable_zoo(&self) -> Self {
        self.filter_on_pet_mount_pairs(PetMountPair::can_feed_pet)
    }
}

impl FromIterator<PetMountPair> for Zoo {
    fn from_iter<T: IntoIterator<Item = PetMountPair>>(iter: T) -> Self {
        let mut zoo = Self::new();
        for pair in iter {
            zoo.insert(pair);
        }
        zoo
    }
}

impl<'a> IntoIterator for &'a Zoo {
    type Item = &'a PetMountPair;
    type IntoIter = std::slice::Iter<'a, PetMountPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builds a [`Zoo`] from the `items.pets` and `items.mounts` sections.
#[derive(Debug, Clone)]
pub struct ZooBuilder {
    pets: Map<String, Value>,
    mounts: Map<String, Value>,
}

impl ZooBuilder {
    /// Take the pet and mount sections from a user snapshot.
    pub fn new(user: &HabiticaUser) -> Self {
        Self {
            pets: user.pets().clone(),
            mounts: user.mounts().clone(),
        }
    }

    /// Validate every entry and build the zoo.
    ///
    /// Pets come first in server order. Mounts without a pet entry follow,
    /// each paired with a hatched-status pet marked unavailable.
    pub fn build(self) -> Result<Zoo, ZooError> {
        let Self { pets, mut mounts } = self;
        let mut zoo = Zoo::new();

        for (name, raw_status) in pets {
            let status = raw_status
                .as_i64()
                .ok_or_else(|| ZooError::MalformedFeedingStatus {
                    pet: name.clone(),
                    value: raw_status.to_string(),
                })?;
            let feeding_status = FeedingStatus::new(status)?;
            let mount_available = mounts.remove(&name).is_some_and(|m| is_owned(&m));
            let pet = Pet::new(name, feeding_status)?;
            let pet_available = !feeding_status.is_mount_only();
            zoo.insert(PetMountPair::new(pet, pet_available, mount_available));
        }

        for (name, owned) in mounts {
            if !is_owned(&owned) {
                continue;
            }
            let pet = Pet::hatched(name)?;
            zoo.insert(PetMountPair::new(pet, false, true));
        }

        tracing::debug!(entries = zoo.len(), "built zoo");
        Ok(zoo)
    }
}

/// Released mounts linger in the mounts map as `null` or `false`.
fn is_owned(value: &Value) -> bool {
    value.as_bool().unwrap_or(false)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn build(items: &Value) -> Result<Zoo, ZooError> {
        ZooBuilder::new(&HabiticaUser::new(json!({ "items": items }))).build()
    }

    #[test]
    fn pets_then_remaining_mounts() {
        let zoo = build(&json!({
            "pets": {"Wolf-Base": 10, "Fox-Red": -1, "Cactus-Veggie": 5},
            "mounts": {"Turkey-Base": true, "Fox-Red": true, "Dragon-Golden": null}
        }))
        .unwrap();

        let names: Vec<&str> = zoo.pet_names().collect();
        assert_eq!(names, vec!["Wolf-Base", "Fox-Red", "Cactus-Veggie", "Turkey-Base"]);

        let wolf = zoo.get("Wolf-Base");
        assert_eq!(wolf.map(|p| (p.pet_available, p.mount_available)), Some((true, false)));

        let fox = zoo.get("Fox-Red");
        assert_eq!(fox.map(|p| (p.pet_available, p.mount_available)), Some((false, true)));

        let turkey = zoo.get("Turkey-Base");
        assert_eq!(
            turkey.map(|p| (p.pet_available, p.mount_available, p.pet.feeding_status())),
            Some((false, true, FeedingStatus::HATCHED))
        );
        assert!(!zoo.contains("Dragon-Golden"));
    }

    #[test]
    fn false_mount_counts_as_released() {
        let zoo = build(&json!({
            "pets": {"Wolf-Base": 10},
            "mounts": {"Wolf-Base": false, "Fox-Red": false}
        }))
        .unwrap();

        assert_eq!(zoo.pet_names().collect::<Vec<_>>(), vec!["Wolf-Base"]);
        assert!(!zoo.get("Wolf-Base").unwrap().mount_available);
        assert!(zoo.get("Wolf-Base").unwrap().can_feed_pet());
    }

    #[test]
    fn missing_sections_build_empty_zoo() {
        let zoo = build(&json!({}));
        assert!(zoo.is_ok_and(|z| z.is_empty()));
    }

    #[test]
    fn one_bad_entry_fails_the_build() {
        assert!(matches!(
            build(&json!({"pets": {"Wolf-Base": 5, "Nope-Nope": 5}})),
            Err(ZooError::InvalidPet { .. })
        ));
        assert!(matches!(
            build(&json!({"pets": {"Wolf-Base": 3}})),
            Err(ZooError::InvalidFeedingStatus { status: 3 })
        ));
        assert!(matches!(
            build(&json!({"pets": {"Wolf-Base": "five"}})),
            Err(ZooError::MalformedFeedingStatus { .. })
        ));
        assert!(build(&json!({"mounts": {"Nope-Nope": true}})).is_err());
    }

    #[test]
    fn filters_preserve_order_and_source() {
        let zoo = build(&json!({
            "pets": {
                "TigerCub-Fluorite": 5,
                "Wolf-Base": 5,
                "Gryphon-Red": 20,
                "Fox-Base": 5
            },
            "mounts": {"Fox-Base": true}
        }))
        .unwrap();

        let gen1 = zoo.filter_on_pet(Pet::is_generation1_pet);
        let names: Vec<&str> = gen1.pet_names().collect();
        assert_eq!(names, vec!["Wolf-Base", "Fox-Base"]);

        let feedable = zoo.get_feedable_zoo();
        let names: Vec<&str> = feedable.pet_names().collect();
        assert_eq!(names, vec!["TigerCub-Fluorite", "Wolf-Base", "Gryphon-Red"]);

        let g = zoo.filter_on_pet_name(|name| name.starts_with('G'));
        assert_eq!(g.len(), 1);
        assert_eq!(zoo.len(), 4);
    }
}
