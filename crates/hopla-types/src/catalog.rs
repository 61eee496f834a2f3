//! Immutable reference data: pets, eggs, hatching potions, and food.
//!
//! Almost every hatchable pet is named `"<Species>-<Potion>"`, so the catalog
//! stores species and potion tables and derives the full pet name set from
//! their products. Only the rare pets, which cannot be hatched, are listed
//! explicitly.
//!
//! Lookups go through lazily built maps, so membership and category checks
//! are O(1) after first use.
//!
//! Source: `GET /content` (`.petInfo`, `.eggs`, `.hatchingPotions`, `.food`).

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::enums::{EggCategory, PetCategory, PotionCategory};

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// Species hatched from drop eggs. These are also the drop egg names.
pub const GENERATION1_SPECIES: &[&str] = &[
    "Wolf", "TigerCub", "PandaCub", "LionCub", "Fox", "FlyingPig", "Dragon", "Cactus", "BearCub",
];

/// Species hatched from quest eggs. These are also the quest egg names.
pub const QUEST_SPECIES: &[&str] = &[
    "Gryphon", "Hedgehog", "Deer", "Egg", "Rat", "Octopus", "Seahorse", "Parrot", "Rooster",
    "Spider", "Owl", "Penguin", "TRex", "Rock", "Bunny", "Slime", "Sheep", "Cuttlefish", "Whale",
    "Cheetah", "Horse", "Frog", "Snake", "Unicorn", "Sabretooth", "Monkey", "Snail", "Falcon",
    "Treeling", "Axolotl", "Turtle", "Armadillo", "Cow", "Beetle", "Ferret", "Sloth",
    "Triceratops", "GuineaPig", "Peacock", "Butterfly", "Nudibranch", "Hippo", "Yarn",
    "Pterodactyl", "Badger", "Squirrel", "SeaSerpent", "Kangaroo", "Alligator", "Velociraptor",
    "Dolphin", "Robot",
];

// ---------------------------------------------------------------------------
// Hatching potions
// ---------------------------------------------------------------------------

/// Drop hatching potions paired with the food a pet of that color loves.
///
/// The order is the order of `.dropHatchingPotions` in the content API.
pub const STANDARD_POTION_FAVORITE_FOOD: &[(&str, &str)] = &[
    ("Base", "Meat"),
    ("White", "Milk"),
    ("Desert", "Potatoe"),
    ("Red", "Strawberry"),
    ("Shade", "Chocolate"),
    ("Skeleton", "Fish"),
    ("Zombie", "RottenMeat"),
    ("CottonCandyPink", "CottonCandyPink"),
    ("CottonCandyBlue", "CottonCandyBlue"),
    ("Golden", "Honey"),
];

/// Magic hatching potions. Pets hatched with these like every food.
pub const MAGIC_POTIONS: &[&str] = &[
    "RoyalPurple", "Cupid", "Shimmer", "Fairy", "Floral", "Aquatic", "Ember", "Thunderstorm",
    "Spooky", "Ghost", "Holly", "Peppermint", "StarryNight", "Rainbow", "Glass", "Glow", "Frost",
    "IcySnow", "RoseQuartz", "Celestial", "Sunshine", "Bronze", "Watery", "Silver", "Shadow",
    "Amber", "Aurora", "Ruby", "BirchBark", "Fluorite", "SandSculpture", "Windup", "Turquoise",
    "Vampire", "AutumnLeaf", "BlackPearl", "StainedGlass", "PolkaDot", "MossyStone", "Sunset",
    "Moonglow", "SolarSystem",
];

/// Wacky hatching potions. Pets hatched with these cannot be fed.
pub const WACKY_POTIONS: &[&str] = &["Veggie", "Dessert"];

// ---------------------------------------------------------------------------
// Rare pets
// ---------------------------------------------------------------------------

/// Pets that cannot be hatched: world boss rewards, event item sequences,
/// and a handful of one-off specials.
pub const RARE_PETS: &[&str] = &[
    // World boss rewards
    "Hippogriff-Hopeful", "MagicalBee-Base", "Phoenix-Base", "Mammoth-Base", "MantisShrimp-Base",
    // Event item sequences
    "Wolf-Veteran", "Turkey-Base", "JackOLantern-Base", "Tiger-Veteran", "Turkey-Gilded",
    "Lion-Veteran", "Gryphon-RoyalPurple", "JackOLantern-Ghost", "Orca-Base", "Bear-Veteran",
    "Fox-Veteran", "JackOLantern-Glow", "JackOLantern-RoyalPurple",
    // Other
    "Jackalope-RoyalPurple", "BearCub-Polar", "Dragon-Hydra", "Wolf-Cerberus",
    "Gryphon-Gryphatrice", "Aether-Invisible",
];

// ---------------------------------------------------------------------------
// Food
// ---------------------------------------------------------------------------

/// Special food: cakes, candy, and pies for every standard potion color.
pub const SPECIAL_FOODS: &[&str] = &[
    "Cake_Base", "Cake_White", "Cake_Desert", "Cake_Red", "Cake_Shade", "Cake_Skeleton",
    "Cake_Zombie", "Cake_CottonCandyPink", "Cake_CottonCandyBlue", "Cake_Golden",
    "Candy_Base", "Candy_White", "Candy_Desert", "Candy_Red", "Candy_Shade", "Candy_Skeleton",
    "Candy_Zombie", "Candy_CottonCandyPink", "Candy_CottonCandyBlue", "Candy_Golden",
    "Pie_Base", "Pie_White", "Pie_Desert", "Pie_Red", "Pie_Shade", "Pie_Skeleton",
    "Pie_Zombie", "Pie_CottonCandyPink", "Pie_CottonCandyBlue", "Pie_Golden",
];

/// The saddle lives in the food inventory but turns a pet into a mount
/// instantly. It is never planned as food.
pub const SADDLE: &str = "Saddle";

// ---------------------------------------------------------------------------
// Lookup tables
// ---------------------------------------------------------------------------

static PET_CATEGORIES: LazyLock<HashMap<String, PetCategory>> = LazyLock::new(|| {
    let mut pets = HashMap::new();
    for species in GENERATION1_SPECIES {
        for (potion, _) in STANDARD_POTION_FAVORITE_FOOD {
            pets.insert(pet_name(species, potion), PetCategory::Generation1);
        }
        for potion in MAGIC_POTIONS {
            pets.insert(pet_name(species, potion), PetCategory::MagicPotion);
        }
        for potion in WACKY_POTIONS {
            pets.insert(pet_name(species, potion), PetCategory::Wacky);
        }
    }
    for species in QUEST_SPECIES {
        for (potion, _) in STANDARD_POTION_FAVORITE_FOOD {
            pets.insert(pet_name(species, potion), PetCategory::Quest);
        }
    }
    for rare in RARE_PETS {
        pets.insert((*rare).to_owned(), PetCategory::Rare);
    }
    pets
});

static POTION_CATEGORIES: LazyLock<HashMap<&'static str, PotionCategory>> =
    LazyLock::new(|| {
        let standard = STANDARD_POTION_FAVORITE_FOOD
            .iter()
            .map(|(potion, _)| (*potion, PotionCategory::Standard));
        let magic = MAGIC_POTIONS.iter().map(|p| (*p, PotionCategory::Magic));
        let wacky = WACKY_POTIONS.iter().map(|p| (*p, PotionCategory::Wacky));
        standard.chain(magic).chain(wacky).collect()
    });

static EGG_CATEGORIES: LazyLock<HashMap<&'static str, EggCategory>> = LazyLock::new(|| {
    let standard = GENERATION1_SPECIES
        .iter()
        .map(|s| (*s, EggCategory::Standard));
    let quest = QUEST_SPECIES.iter().map(|s| (*s, EggCategory::Quest));
    standard.chain(quest).collect()
});

fn pet_name(species: &str, potion: &str) -> String {
    format!("{species}-{potion}")
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Look up the category of a pet. `None` if the name is not a known pet.
pub fn pet_category(name: &str) -> Option<PetCategory> {
    PET_CATEGORIES.get(name).copied()
}

/// Whether `name` is a known pet.
pub fn is_pet(name: &str) -> bool {
    PET_CATEGORIES.contains_key(name)
}

/// Total number of known pets.
pub fn pet_count() -> usize {
    PET_CATEGORIES.len()
}

/// Look up the category of a hatching potion.
pub fn potion_category(name: &str) -> Option<PotionCategory> {
    POTION_CATEGORIES.get(name).copied()
}

/// Look up the category of an egg.
pub fn egg_category(name: &str) -> Option<EggCategory> {
    EGG_CATEGORIES.get(name).copied()
}

/// The food a pet hatched with the given standard potion loves.
///
/// `None` for magic, wacky, and unknown potions.
pub fn favorite_food_of_potion(potion: &str) -> Option<&'static str> {
    STANDARD_POTION_FAVORITE_FOOD
        .iter()
        .find(|(p, _)| *p == potion)
        .map(|(_, food)| *food)
}

/// Whether `name` is a standard drop food.
pub fn is_drop_food(name: &str) -> bool {
    STANDARD_POTION_FAVORITE_FOOD
        .iter()
        .any(|(_, food)| *food == name)
}

/// Whether `name` can be fed to a pet. Excludes the saddle.
pub fn is_feeding_food(name: &str) -> bool {
    is_drop_food(name) || SPECIAL_FOODS.contains(&name)
}

/// Whether `name` appears in the food inventory at all.
pub fn is_food(name: &str) -> bool {
    name == SADDLE || is_feeding_food(name)
}

/// Split a pet name into its species and hatching potion.
///
/// Rare pets were never hatched, so their potion is `None` even though
/// their names contain a suffix.
pub fn split_pet_name(name: &str) -> Option<(&str, Option<&str>)> {
    let category = pet_category(name)?;
    let (species, suffix) = name.split_once('-')?;
    if category == PetCategory::Rare {
        Some((species, None))
    } else {
        Some((species, Some(suffix)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn pet_catalog_size() {
        // 90 gen1 + 378 magic + 520 quest + 18 wacky + 24 rare
        assert_eq!(pet_count(), 1030);
    }

    #[test]
    fn every_pet_has_one_category() {
        assert_eq!(pet_category("Wolf-Base"), Some(PetCategory::Generation1));
        assert_eq!(pet_category("Gryphon-Red"), Some(PetCategory::Quest));
        assert_eq!(pet_category("TigerCub-Fluorite"), Some(PetCategory::MagicPotion));
        assert_eq!(pet_category("Cactus-Veggie"), Some(PetCategory::Wacky));
        assert_eq!(pet_category("Phoenix-Base"), Some(PetCategory::Rare));
        assert_eq!(pet_category("Gryphon-RoyalPurple"), Some(PetCategory::Rare));
    }

    #[test]
    fn unknown_pets_are_rejected() {
        assert_eq!(pet_category("INVALID_PET"), None);
        assert_eq!(pet_category("Gryphon-Moonglow"), None);
        assert_eq!(pet_category("wolf-base"), None);
        assert!(!is_pet(""));
    }

    #[test]
    fn potion_categories() {
        assert_eq!(potion_category("Base"), Some(PotionCategory::Standard));
        assert_eq!(potion_category("Golden"), Some(PotionCategory::Standard));
        assert_eq!(potion_category("SolarSystem"), Some(PotionCategory::Magic));
        assert_eq!(potion_category("Dessert"), Some(PotionCategory::Wacky));
        assert_eq!(potion_category("InvalidName"), None);
    }

    #[test]
    fn egg_categories() {
        assert_eq!(egg_category("Wolf"), Some(EggCategory::Standard));
        assert_eq!(egg_category("Egg"), Some(EggCategory::Quest));
        assert_eq!(egg_category("Robot"), Some(EggCategory::Quest));
        assert_eq!(egg_category("Phoenix"), None);
    }

    #[test]
    fn favorite_food_table() {
        assert_eq!(favorite_food_of_potion("Shade"), Some("Chocolate"));
        assert_eq!(favorite_food_of_potion("Desert"), Some("Potatoe"));
        assert_eq!(favorite_food_of_potion("Golden"), Some("Honey"));
        assert_eq!(favorite_food_of_potion("Moonglow"), None);
    }

    #[test]
    fn food_membership() {
        assert!(is_drop_food("RottenMeat"));
        assert!(!is_drop_food("Cake_Base"));
        assert!(is_feeding_food("Pie_Golden"));
        assert!(!is_feeding_food(SADDLE));
        assert!(is_food(SADDLE));
        assert!(!is_food("Pizza"));
    }

    #[test]
    fn split_names() {
        assert_eq!(split_pet_name("Wolf-Shade"), Some(("Wolf", Some("Shade"))));
        assert_eq!(
            split_pet_name("TigerCub-CottonCandyBlue"),
            Some(("TigerCub", Some("CottonCandyBlue")))
        );
        assert_eq!(split_pet_name("Turkey-Gilded"), Some(("Turkey", None)));
        assert_eq!(split_pet_name("Nope-Nope"), None);
    }
}
