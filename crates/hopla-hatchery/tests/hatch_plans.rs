//! `hatch-all` planning against full user snapshots.

#![allow(clippy::unwrap_used)]

use hopla_hatchery::{HatchPlan, HatchPlanItem, HatchPlanMaker};
use hopla_types::HabiticaUser;
use pretty_assertions::assert_eq;
use serde_json::json;

fn plan_for(items: serde_json::Value) -> HatchPlan {
    let user = HabiticaUser::new(json!({ "items": items }));
    HatchPlanMaker::from_user(&user).unwrap().make_plan().unwrap()
}

fn pets(plan: &HatchPlan) -> Vec<String> {
    plan.iter().map(HatchPlanItem::pet_name).collect()
}

#[test]
fn hatches_missing_pets_only() {
    let plan = plan_for(json!({
        "eggs": {"Wolf": 2, "Owl": 1},
        "hatchingPotions": {"Base": 2, "Golden": 1},
        "pets": {"Wolf-Base": 12, "Owl-Base": -1}
    }));

    assert_eq!(pets(&plan), vec!["Wolf-Golden", "Owl-Base"]);
}

#[test]
fn stops_when_eggs_or_potions_run_out() {
    let plan = plan_for(json!({
        "eggs": {"Fox": 1, "Cactus": 3},
        "hatchingPotions": {"Red": 1, "Shade": 1, "Veggie": 1}
    }));

    assert_eq!(pets(&plan), vec!["Fox-Red", "Cactus-Shade", "Cactus-Veggie"]);
}

#[test]
fn quest_eggs_only_take_drop_potions() {
    let plan = plan_for(json!({
        "eggs": {"Gryphon": 2},
        "hatchingPotions": {"RoyalPurple": 1, "Moonglow": 1, "White": 1}
    }));

    assert_eq!(pets(&plan), vec!["Gryphon-White"]);
}

#[test]
fn nothing_to_hatch() {
    let plan = plan_for(json!({
        "eggs": {"Wolf": 0},
        "hatchingPotions": {"Base": 4}
    }));

    assert!(plan.is_empty());
    assert_eq!(plan.format_plan(), "");
}

#[test]
fn invalid_inventory_fails() {
    let user = HabiticaUser::new(json!({
        "items": {"eggs": {"Wolf": 1, "Dodo": 1}}
    }));
    assert!(HatchPlanMaker::from_user(&user).is_err());
}
