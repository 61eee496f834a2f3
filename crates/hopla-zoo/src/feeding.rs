//! The zoo feeding planner.
//!
//! [`ZooFeedingAlgorithm`] distributes a food stockpile over the feedable
//! pets of a zoo so that as many pets as possible turn into mounts, without
//! ever promising food that is not there.
//!
//! # Algorithm
//!
//! 1. Keep only pets that [`PetMountPair::can_feed_pet`].
//! 2. Split them into generation 1, quest, and magic potion pets and visit
//!    the groups in that order, each in zoo order.
//! 3. Single-favorite pets get their favorite food. Magic pets get whatever
//!    food is most abundant at that moment.
//! 4. If the stockpile holds enough of that food to finish the pet, take it
//!    and record a [`FeedPlanItem`]. Otherwise skip the pet.
//!
//! The planner is greedy. It never backtracks to feed more pets overall.

use std::fmt::Write as _;

use serde::Serialize;

use crate::error::ZooError;
use crate::food::FoodStockpile;
use crate::pet::{Pet, PetMountPair};
use crate::zoo::Zoo;

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

/// One committed feeding decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedPlanItem {
    /// The pet to feed.
    pub pet_name: String,
    /// The food to give it.
    pub food_name: String,
    /// How many units of food to give.
    pub times: u32,
}

/// An append-only list of feeding decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ZookeeperFeedPlan {
    items: Vec<FeedPlanItem>,
}

impl ZookeeperFeedPlan {
    /// Create an empty plan.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a feeding decision.
    pub fn add_to_feed_plan(
        &mut self,
        pet_name: impl Into<String>,
        food_name: impl Into<String>,
        times: u32,
    ) {
        self.items.push(FeedPlanItem {
            pet_name: pet_name.into(),
            food_name: food_name.into(),
            times,
        });
    }

    /// The decisions in the order they were made.
    pub fn feed_plan(&self) -> &[FeedPlanItem] {
        &self.items
    }

    /// Whether nothing was planned.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of planned feedings.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over the decisions.
    pub fn iter(&self) -> std::slice::Iter<'_, FeedPlanItem> {
        self.items.iter()
    }

    /// Render the plan for a confirmation prompt, one line per item.
    pub fn format_plan(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            // Writing to a String cannot fail.
            let _ = writeln!(
                out,
                "{} will be fed {} {}.",
                item.pet_name, item.times, item.food_name
            );
        }
        out
    }
}

impl<'a> IntoIterator for &'a ZookeeperFeedPlan {
    type Item = &'a FeedPlanItem;
    type IntoIter = std::slice::Iter<'a, FeedPlanItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ZookeeperFeedPlan {
    type Item = FeedPlanItem;
    type IntoIter = std::vec::IntoIter<FeedPlanItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// The result of a planning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedingOutcome {
    /// What to feed to whom, in order.
    pub plan: ZookeeperFeedPlan,
    /// The stockpile after every planned feeding has been taken out.
    pub stockpile: FoodStockpile,
}

/// Greedy planner that owns the stockpile for the duration of a run.
#[derive(Debug, Clone)]
pub struct ZooFeedingAlgorithm {
    zoo: Zoo,
    stockpile: FoodStockpile,
    plan: ZookeeperFeedPlan,
}

impl ZooFeedingAlgorithm {
    /// Prepare a run over the feedable part of `zoo`.
    pub fn new(zoo: &Zoo, stockpile: FoodStockpile) -> Self {
        Self {
            zoo: zoo.get_feedable_zoo(),
            stockpile,
            plan: ZookeeperFeedPlan::new(),
        }
    }

    /// Build the plan, consuming the algorithm.
    ///
    /// Running out of food is not an error. Errors only surface if the
    /// zoo holds a pet whose feeding habits cannot be determined.
    pub fn make_plan(mut self) -> Result<FeedingOutcome, ZooError> {
        let groups: [fn(&Pet) -> bool; 3] = [
            Pet::is_generation1_pet,
            Pet::is_quest_pet,
            Pet::is_magic_hatching_pet,
        ];
        for group in groups {
            let sub_zoo = self.zoo.filter_on_pet(group);
            for pair in &sub_zoo {
                self.plan_pet(pair)?;
            }
        }

        tracing::debug!(
            items = self.plan.len(),
            feedable = self.zoo.len(),
            "feeding plan complete"
        );
        Ok(FeedingOutcome {
            plan: self.plan,
            stockpile: self.stockpile,
        })
    }

    fn plan_pet(&mut self, pair: &PetMountPair) -> Result<(), ZooError> {
        let pet = &pair.pet;
        let food = if pet.has_just_1_favorite_food() {
            pet.favorite_food()?.food().map(str::to_owned)
        } else {
            self.stockpile.get_most_abundant_food().map(str::to_owned)
        };
        let Some(food) = food else {
            tracing::debug!(pet = pet.name(), "no food to choose from");
            return Ok(());
        };

        let times = pet.required_food_items_until_mount(&food);
        if !self.stockpile.has_sufficient(&food, times) {
            tracing::debug!(pet = pet.name(), food = %food, times, "insufficient food, skipping");
            return Ok(());
        }

        self.stockpile.subtract(&food, times)?;
        tracing::debug!(pet = pet.name(), food = %food, times, "planned feeding");
        self.plan.add_to_feed_plan(pet.name(), food, times);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::feeding_status::FeedingStatus;

    fn zoo(pets: &[(&str, i64)]) -> Zoo {
        pets.iter()
            .map(|(name, status)| {
                let pet = Pet::new(*name, FeedingStatus::new(*status).unwrap()).unwrap();
                PetMountPair::new(pet, true, false)
            })
            .collect()
    }

    fn stockpile(entries: &[(&str, u32)]) -> FoodStockpile {
        FoodStockpile::new(entries.iter().copied()).unwrap()
    }

    fn plan_of(items: &[(&str, &str, u32)]) -> ZookeeperFeedPlan {
        let mut plan = ZookeeperFeedPlan::new();
        for (pet, food, times) in items {
            plan.add_to_feed_plan(*pet, *food, *times);
        }
        plan
    }

    fn run(pets: &[(&str, i64)], food: &[(&str, u32)]) -> FeedingOutcome {
        ZooFeedingAlgorithm::new(&zoo(pets), stockpile(food))
            .make_plan()
            .unwrap()
    }

    #[test]
    fn favorite_food_feeding() {
        let outcome = run(&[("Wolf-Shade", 5)], &[("Chocolate", 10)]);
        assert_eq!(outcome.plan, plan_of(&[("Wolf-Shade", "Chocolate", 9)]));
        assert_eq!(outcome.stockpile.get("Chocolate"), Some(1));
    }

    #[test]
    fn insufficient_food_skips_pet() {
        let outcome = run(&[("Wolf-Shade", 5)], &[("Chocolate", 3)]);
        assert!(outcome.plan.is_empty());
        assert_eq!(outcome.stockpile.get("Chocolate"), Some(3));
    }

    #[test]
    fn magic_pet_takes_most_abundant_food() {
        let outcome = run(&[("TigerCub-Fluorite", 5)], &[("Fish", 20), ("Honey", 1)]);
        assert_eq!(outcome.plan, plan_of(&[("TigerCub-Fluorite", "Fish", 9)]));
        assert_eq!(outcome.stockpile.get("Fish"), Some(11));
    }

    #[test]
    fn magic_pet_tie_goes_to_first_food() {
        let outcome = run(&[("TigerCub-Fluorite", 5)], &[("Honey", 9), ("Fish", 9)]);
        assert_eq!(outcome.plan, plan_of(&[("TigerCub-Fluorite", "Honey", 9)]));
        assert_eq!(outcome.stockpile.get("Fish"), Some(9));
    }

    #[test]
    fn unfeedable_pets_are_ignored() {
        let pets = [("Cactus-Veggie", 5), ("Phoenix-Base", 5), ("Wolf-Base", -1)];
        assert_eq!(zoo(&pets).len(), 3);

        let outcome = run(&pets, &[("Meat", 50)]);
        assert!(outcome.plan.is_empty());
        assert_eq!(outcome.stockpile.get("Meat"), Some(50));
    }

    #[test]
    #[should_panic(expected = "InvalidPet")]
    fn misspelled_fixture_fails_loudly() {
        zoo(&[("Cactus-Vegie", 5)]);
    }

    #[test]
    fn empty_stockpile_gives_empty_plan() {
        let pets = zoo(&[("TigerCub-Fluorite", 5)]);
        let outcome = ZooFeedingAlgorithm::new(&pets, FoodStockpile::default())
            .make_plan()
            .unwrap();
        assert!(outcome.plan.is_empty());
    }

    #[test]
    fn format_plan_lists_items() {
        let plan = plan_of(&[("Wolf-Shade", "Chocolate", 9), ("Fox-Base", "Meat", 2)]);
        assert_eq!(
            plan.format_plan(),
            "Wolf-Shade will be fed 9 Chocolate.\nFox-Base will be fed 2 Meat.\n"
        );
        assert_eq!(ZookeeperFeedPlan::new().format_plan(), "");
    }
}
