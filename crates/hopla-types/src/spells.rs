//! The spell book: class skills that take no target argument.
//!
//! Mana costs come from `GET /content` (`.spells.<class>`). Spells that need
//! a target (a task or another party member) are not listed here.

use crate::enums::HabiticaClass;

/// Spell name and mana cost, per class.
const SPELL_BOOK: &[(HabiticaClass, &[(&str, u32)])] = &[
    (
        HabiticaClass::Warrior,
        &[("defensiveStance", 25), ("valorousPresence", 20), ("intimidate", 15)],
    ),
    (HabiticaClass::Wizard, &[("mpheal", 30), ("earth", 35)]),
    (HabiticaClass::Rogue, &[("toolsOfTrade", 25), ("stealth", 45)]),
    (
        HabiticaClass::Healer,
        &[("heal", 15), ("brightness", 15), ("protectAura", 30), ("healAll", 25)],
    ),
];

/// A castable spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spell {
    name: &'static str,
    class: HabiticaClass,
    mana_required: u32,
}

impl Spell {
    /// Look up a spell by its API name. `None` if it is not in the book.
    pub fn from_name(name: &str) -> Option<Self> {
        SPELL_BOOK.iter().find_map(|(class, spells)| {
            spells
                .iter()
                .find(|(spell, _)| *spell == name)
                .map(|(spell, mana)| Self {
                    name: *spell,
                    class: *class,
                    mana_required: *mana,
                })
        })
    }

    /// The API name, used in `POST /user/class/cast/{name}`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The class that owns this spell.
    pub const fn class(&self) -> HabiticaClass {
        self.class
    }

    /// Mana spent per cast.
    pub const fn mana_required(&self) -> u32 {
        self.mana_required
    }
}

/// All spell names in the book, class by class.
pub fn spell_names() -> impl Iterator<Item = &'static str> {
    SPELL_BOOK
        .iter()
        .flat_map(|(_, spells)| spells.iter().map(|(name, _)| *name))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn known_spell() {
        let spell = Spell::from_name("earth");
        assert_eq!(spell.map(|s| s.class()), Some(HabiticaClass::Wizard));
        assert_eq!(spell.map(|s| s.mana_required()), Some(35));
    }

    #[test]
    fn unknown_spell() {
        assert!(Spell::from_name("fireball").is_none());
        assert!(Spell::from_name("").is_none());
    }

    #[test]
    fn every_listed_spell_resolves() {
        let names: Vec<&str> = spell_names().collect();
        assert_eq!(names.len(), 11);
        for name in names {
            assert_eq!(Spell::from_name(name).map(|s| s.name()), Some(name));
        }
    }
}
