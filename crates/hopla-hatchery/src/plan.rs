//! Planning `hatch-all`: which egg to pair with which potion.
//!
//! The planner walks eggs and potions in collection order and hatches
//! every combination that yields a pet the user does not own yet. Each
//! pet is hatched at most once per plan. Pets the user only has as a
//! mount (status -1) can be hatched again.

use std::collections::HashSet;
use std::fmt::Write as _;

use hopla_types::{HabiticaUser, PetCategory, catalog};
use serde::Serialize;

use crate::collection::Stackable;
use crate::egg::EggCollection;
use crate::error::HatcheryError;
use crate::potion::HatchPotionCollection;

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

/// One egg and one potion to combine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HatchPlanItem {
    /// The egg to hatch.
    pub egg_name: String,
    /// The potion to pour on it.
    pub potion_name: String,
}

impl HatchPlanItem {
    /// The pet this hatch produces, e.g. `Wolf-Base`.
    pub fn pet_name(&self) -> String {
        format!("{}-{}", self.egg_name, self.potion_name)
    }
}

/// An ordered list of hatches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HatchPlan {
    items: Vec<HatchPlanItem>,
}

impl HatchPlan {
    /// Append a hatch.
    pub fn add(&mut self, egg_name: impl Into<String>, potion_name: impl Into<String>) {
        self.items.push(HatchPlanItem {
            egg_name: egg_name.into(),
            potion_name: potion_name.into(),
        });
    }

    /// The hatches in order.
    pub fn items(&self) -> &[HatchPlanItem] {
        &self.items
    }

    /// Whether nothing can be hatched.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of planned hatches.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterate over the hatches.
    pub fn iter(&self) -> std::slice::Iter<'_, HatchPlanItem> {
        self.items.iter()
    }

    /// Render the plan for a confirmation prompt, one line per item.
    pub fn format_plan(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            // Writing to a String cannot fail.
            let _ = writeln!(
                out,
                "A {} egg will be hatched by a {} potion.",
                item.egg_name, item.potion_name
            );
        }
        out
    }
}

impl<'a> IntoIterator for &'a HatchPlan {
    type Item = &'a HatchPlanItem;
    type IntoIter = std::slice::Iter<'a, HatchPlanItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ---------------------------------------------------------------------------
// Planner
// ---------------------------------------------------------------------------

/// Pairs eggs with potions for every pet the user is missing.
#[derive(Debug, Clone)]
pub struct HatchPlanMaker {
    eggs: EggCollection,
    potions: HatchPotionCollection,
    owned_pets: HashSet<String>,
}

impl HatchPlanMaker {
    /// Plan over the given collections. `owned_pets` are the pets that
    /// must not be hatched again.
    pub fn new<I, S>(eggs: EggCollection, potions: HatchPotionCollection, owned_pets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            eggs,
            potions,
            owned_pets: owned_pets.into_iter().map(Into::into).collect(),
        }
    }

    /// Read eggs, potions, and owned pets from a user snapshot.
    pub fn from_user(user: &HabiticaUser) -> Result<Self, HatcheryError> {
        let owned = user
            .pets()
            .iter()
            .filter(|(_, status)| status.as_i64() != Some(-1))
            .map(|(name, _)| name.as_str());
        Ok(Self::new(
            EggCollection::from_user(user)?,
            HatchPotionCollection::from_user(user)?,
            owned,
        ))
    }

    /// Build the plan, consuming the planner.
    pub fn make_plan(mut self) -> Result<HatchPlan, HatcheryError> {
        let mut plan = HatchPlan::default();
        let egg_names: Vec<String> = self.eggs.names().map(str::to_owned).collect();
        let potion_names: Vec<String> = self.potions.names().map(str::to_owned).collect();

        for egg_name in &egg_names {
            for potion_name in &potion_names {
                let (Some(egg), Some(potion)) =
                    (self.eggs.get(egg_name), self.potions.get(potion_name))
                else {
                    continue;
                };
                if egg.quantity() == 0 {
                    break;
                }
                if !egg.can_be_hatched_by(potion) {
                    continue;
                }
                let pet_name = format!("{egg_name}-{potion_name}");
                if !is_hatchable_pet(&pet_name) || self.owned_pets.contains(&pet_name) {
                    continue;
                }

                self.eggs.remove_one(egg_name)?;
                self.potions.remove_one(potion_name)?;
                tracing::debug!(pet = %pet_name, "planned hatch");
                self.owned_pets.insert(pet_name);
                plan.add(egg_name.as_str(), potion_name.as_str());
            }
        }

        tracing::debug!(items = plan.len(), "hatch plan complete");
        Ok(plan)
    }
}

fn is_hatchable_pet(pet_name: &str) -> bool {
    catalog::pet_category(pet_name).is_some_and(|category| category != PetCategory::Rare)
}
