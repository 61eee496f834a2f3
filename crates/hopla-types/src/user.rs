//! The user snapshot returned by `GET /user`.
//!
//! [`HabiticaUser`] wraps the `data` object of the response envelope. It is
//! read-only: every command fetches a fresh snapshot, builds its models from
//! it, and drops it when the command ends.
//!
//! Missing sections are treated as empty rather than as errors. A brand-new
//! account has no `items.pets` key at all, and that simply means "no pets".

use std::str::FromStr;
use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Gems are stored as `balance`, where one unit of balance is four gems.
const GEMS_PER_BALANCE: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

static EMPTY: LazyLock<Map<String, Value>> = LazyLock::new(Map::new);

/// A snapshot of a Habitica user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabiticaUser {
    data: Value,
}

impl HabiticaUser {
    /// Wrap the `data` object of a `GET /user` response.
    pub const fn new(data: Value) -> Self {
        Self { data }
    }

    /// The full, unfiltered user object.
    pub const fn as_value(&self) -> &Value {
        &self.data
    }

    /// A top-level section of the user object, or an empty map.
    pub fn section(&self, key: &str) -> &Map<String, Value> {
        self.data
            .get(key)
            .and_then(Value::as_object)
            .unwrap_or(&*EMPTY)
    }

    /// `items`: the whole inventory.
    pub fn items(&self) -> &Map<String, Value> {
        self.section("items")
    }

    /// `items.pets`: pet name to feeding status.
    pub fn pets(&self) -> &Map<String, Value> {
        self.item_group("pets")
    }

    /// `items.mounts`: mount name to ownership flag.
    pub fn mounts(&self) -> &Map<String, Value> {
        self.item_group("mounts")
    }

    /// `items.food`: food name to count.
    pub fn food(&self) -> &Map<String, Value> {
        self.item_group("food")
    }

    /// `items.eggs`: egg name to count.
    pub fn eggs(&self) -> &Map<String, Value> {
        self.item_group("eggs")
    }

    /// `items.hatchingPotions`: potion name to count.
    pub fn hatching_potions(&self) -> &Map<String, Value> {
        self.item_group("hatchingPotions")
    }

    /// `stats`: hp, mp, exp, gp, lvl, class, ...
    pub fn stats(&self) -> &Map<String, Value> {
        self.section("stats")
    }

    /// `auth`: login names and timestamps.
    pub fn auth(&self) -> &Map<String, Value> {
        self.section("auth")
    }

    /// Current mana (`stats.mp`), if present.
    pub fn mana(&self) -> Option<f64> {
        self.stats().get("mp").and_then(Value::as_f64)
    }

    /// The number of gems this user owns.
    ///
    /// Computed from `balance` with exact decimal arithmetic. `None` if the
    /// balance is missing, not a number, or the product overflows.
    pub fn gems(&self) -> Option<Decimal> {
        let balance = self.data.get("balance")?;
        let balance = match balance {
            Value::Number(n) => Decimal::from_str(&n.to_string()).ok()?,
            _ => return None,
        };
        balance.checked_mul(GEMS_PER_BALANCE).map(|d| d.normalize())
    }

    /// Select values by comma-separated dotted paths.
    ///
    /// `"stats.hp, items.currentPet"` yields
    /// `{"stats.hp": 50, "items.currentPet": "Wolf-Base"}`. Paths that do not
    /// resolve map to an empty object. Blank segments are ignored.
    pub fn filter_user(&self, filter: &str) -> Map<String, Value> {
        filter
            .split(',')
            .map(str::trim)
            .filter(|keys| !keys.is_empty())
            .map(|keys| {
                let value = self
                    .lookup(keys)
                    .cloned()
                    .unwrap_or_else(|| Value::Object(Map::new()));
                (keys.to_owned(), value)
            })
            .collect()
    }

    fn lookup(&self, dotted: &str) -> Option<&Value> {
        dotted
            .split('.')
            .try_fold(&self.data, |value, key| value.get(key))
    }

    fn item_group(&self, key: &str) -> &Map<String, Value> {
        self.items()
            .get(key)
            .and_then(Value::as_object)
            .unwrap_or(&*EMPTY)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample_user() -> HabiticaUser {
        HabiticaUser::new(json!({
            "balance": 2.5,
            "stats": {"hp": 50, "mp": 32.5, "class": "healer"},
            "items": {
                "pets": {"Wolf-Base": 5, "Fox-Red": -1},
                "mounts": {"Fox-Red": true},
                "food": {"Meat": 3, "Saddle": 1},
                "currentPet": "Wolf-Base"
            }
        }))
    }

    #[test]
    fn missing_sections_are_empty() {
        let user = HabiticaUser::new(json!({}));
        assert!(user.items().is_empty());
        assert!(user.pets().is_empty());
        assert!(user.mounts().is_empty());
        assert!(user.eggs().is_empty());
        assert!(user.stats().is_empty());
    }

    #[test]
    fn item_groups_keep_server_order() {
        let user = sample_user();
        let names: Vec<&str> = user.pets().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Wolf-Base", "Fox-Red"]);
        assert_eq!(user.food().get("Meat"), Some(&json!(3)));
    }

    #[test]
    fn gems_are_four_per_balance() {
        let user = sample_user();
        assert_eq!(user.gems(), Some(Decimal::from(10)));
    }

    #[test]
    fn gems_missing_balance() {
        let user = HabiticaUser::new(json!({"balance": "lots"}));
        assert_eq!(user.gems(), None);
    }

    #[test]
    fn mana_reads_stats() {
        assert_eq!(sample_user().mana(), Some(32.5));
    }

    #[test]
    fn filter_user_dotted_paths() {
        let user = sample_user();
        let filtered = user.filter_user("stats.hp, items.currentPet,,");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered.get("stats.hp"), Some(&json!(50)));
        assert_eq!(filtered.get("items.currentPet"), Some(&json!("Wolf-Base")));
    }

    #[test]
    fn filter_user_missing_path_is_empty_object() {
        let user = sample_user();
        let filtered = user.filter_user("items.currentMount");
        assert_eq!(filtered.get("items.currentMount"), Some(&json!({})));
    }
}
