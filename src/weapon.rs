//! Weapon record module.
//!
//! Contains the static weapon data model: the weapon itself, its
//! `Attacks` table, the four melee swings with light/heavy variants and the
//! four special attacks. Records are plain values; every calculation in
//! this crate reads them and produces new records instead of mutating.

use crate::damage::DamageType;
use crate::error::ArmoryError;
use crate::target::{CharacterClass, CharacterSubclass};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weapon family tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponType {
    Axe,
    Hammer,
    Club,
    Tool,
    Polearm,
    Spear,
    Sword,
    Dagger,
    Bow,
    #[serde(rename = "Two Handed")]
    TwoHanded,
    #[serde(rename = "One Handed")]
    OneHanded,
}

impl WeaponType {
    /// Get the display name of this weapon type.
    pub fn as_str(self) -> &'static str {
        match self {
            WeaponType::Axe => "Axe",
            WeaponType::Hammer => "Hammer",
            WeaponType::Club => "Club",
            WeaponType::Tool => "Tool",
            WeaponType::Polearm => "Polearm",
            WeaponType::Spear => "Spear",
            WeaponType::Sword => "Sword",
            WeaponType::Dagger => "Dagger",
            WeaponType::Bow => "Bow",
            WeaponType::TwoHanded => "Two Handed",
            WeaponType::OneHanded => "One Handed",
        }
    }
}

impl fmt::Display for WeaponType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single attack: one variant of a swing, or a special attack.
///
/// Timing fields are durations in milliseconds. They are carried through
/// every transformation unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    pub damage: f64,
    pub holding: f64,
    pub windup: f64,
    pub release: f64,
    pub recovery: f64,
    pub combo: f64,
    /// Windup when the attack is thrown out of a riposte.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub riposte: Option<f64>,
    /// Release window of a thwack follow-up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thwack: Option<f64>,
    /// Damage dealt to a blocking defender's stamina.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stamina_damage: Option<f64>,
    /// Reach of a special attack. Swings carry their range on the `Swing`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<f64>,
    /// Forces cleaving on (`Some(true)`) or off (`Some(false)`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleave_override: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage_type_override: Option<DamageType>,
}

impl Attack {
    /// Create an attack with the given damage and timings and no optional stats.
    pub fn new(damage: f64, holding: f64, windup: f64, release: f64, recovery: f64, combo: f64) -> Self {
        Self {
            damage,
            holding,
            windup,
            release,
            recovery,
            combo,
            riposte: None,
            thwack: None,
            stamina_damage: None,
            range: None,
            cleave_override: None,
            damage_type_override: None,
        }
    }

    /// The damage type this attack actually deals, given its weapon's type.
    pub fn effective_damage_type(&self, weapon_type: DamageType) -> DamageType {
        self.damage_type_override.unwrap_or(weapon_type)
    }

    fn validate(&self, weapon: &str, location: &str) -> Result<(), ArmoryError> {
        let required = [
            ("damage", self.damage),
            ("holding", self.holding),
            ("windup", self.windup),
            ("release", self.release),
            ("recovery", self.recovery),
            ("combo", self.combo),
        ];
        let optional = [
            ("riposte", self.riposte),
            ("thwack", self.thwack),
            ("staminaDamage", self.stamina_damage),
            ("range", self.range),
        ];
        let present = required
            .into_iter()
            .chain(optional.into_iter().filter_map(|(name, v)| v.map(|v| (name, v))));

        for (name, value) in present {
            if !value.is_finite() || value < 0.0 {
                return Err(ArmoryError::InvalidWeapon {
                    weapon: weapon.to_string(),
                    reason: format!("{location}.{name} must be a non-negative number, got {value}"),
                });
            }
        }
        Ok(())
    }
}

/// A melee swing family with light and heavy variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Swing {
    pub range: f64,
    pub alt_range: f64,
    pub light: Attack,
    pub heavy: Attack,
}

/// The full attack table of a weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attacks {
    /// Mean of slash, overhead and stab.
    pub average: Swing,
    pub slash: Swing,
    pub overhead: Swing,
    pub stab: Swing,
    pub sprint_attack: Attack,
    pub sprint_charge: Attack,
    pub special: Attack,
    pub throw: Attack,
}

/// A static weapon record.
///
/// # Examples
///
/// ```rust
/// use armory::WeaponCatalog;
///
/// let catalog = WeaponCatalog::builtin().unwrap();
/// let axe = catalog.find_weapon_by_id("axe").unwrap();
/// assert_eq!(axe.name, "Axe");
/// assert!(axe.attacks.slash.heavy.damage > axe.attacks.slash.light.damage);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub classes: Vec<CharacterClass>,
    #[serde(default)]
    pub subclasses: Vec<CharacterSubclass>,
    #[serde(default)]
    pub weapon_types: Vec<WeaponType>,
    pub damage_type: DamageType,
    pub attacks: Attacks,
    /// Percentage (0-100) of incoming stamina damage this weapon negates when blocking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stamina_damage_negation: Option<f64>,
}

impl Weapon {
    /// Check that every numeric stat is usable.
    ///
    /// Damage and timings must be finite and non-negative, swing ranges
    /// must be finite and non-negative, and stamina damage negation must
    /// lie within 0-100.
    pub fn validate(&self) -> Result<(), ArmoryError> {
        if self.id.is_empty() {
            return Err(ArmoryError::InvalidWeapon {
                weapon: self.name.clone(),
                reason: "id must not be empty".to_string(),
            });
        }

        let swings = [
            ("average", &self.attacks.average),
            ("slash", &self.attacks.slash),
            ("overhead", &self.attacks.overhead),
            ("stab", &self.attacks.stab),
        ];
        for (name, swing) in swings {
            for (key, value) in [("range", swing.range), ("altRange", swing.alt_range)] {
                if !value.is_finite() || value < 0.0 {
                    return Err(ArmoryError::InvalidWeapon {
                        weapon: self.name.clone(),
                        reason: format!("attacks.{name}.{key} must be a non-negative number, got {value}"),
                    });
                }
            }
            swing.light.validate(&self.name, &format!("attacks.{name}.light"))?;
            swing.heavy.validate(&self.name, &format!("attacks.{name}.heavy"))?;
        }

        let specials = [
            ("sprintAttack", &self.attacks.sprint_attack),
            ("sprintCharge", &self.attacks.sprint_charge),
            ("special", &self.attacks.special),
            ("throw", &self.attacks.throw),
        ];
        for (name, attack) in specials {
            attack.validate(&self.name, &format!("attacks.{name}"))?;
        }

        if let Some(negation) = self.stamina_damage_negation {
            if !(0.0..=100.0).contains(&negation) {
                return Err(ArmoryError::InvalidWeapon {
                    weapon: self.name.clone(),
                    reason: format!("staminaDamageNegation must be within 0-100, got {negation}"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A weapon with distinct damage on every attack.
    pub(crate) fn sample_weapon(damage_type: DamageType) -> Weapon {
        let swing = |light: f64, heavy: f64| Swing {
            range: 60.0,
            alt_range: 55.0,
            light: Attack::new(light, 0.0, 400.0, 250.0, 600.0, 350.0),
            heavy: Attack::new(heavy, 0.0, 700.0, 250.0, 700.0, 400.0),
        };
        Weapon {
            id: "test_axe".to_string(),
            name: "Test Axe".to_string(),
            aliases: vec!["tester".to_string()],
            classes: vec![CharacterClass::Vanguard],
            subclasses: vec![CharacterSubclass::Raider],
            weapon_types: vec![WeaponType::Axe, WeaponType::TwoHanded],
            damage_type,
            attacks: Attacks {
                average: swing(40.0, 50.0),
                slash: swing(40.0, 50.0),
                overhead: swing(45.0, 60.0),
                stab: swing(35.0, 40.0),
                sprint_attack: Attack::new(55.0, 0.0, 500.0, 200.0, 800.0, 0.0),
                sprint_charge: Attack::new(70.0, 0.0, 650.0, 200.0, 900.0, 0.0),
                special: Attack::new(65.0, 0.0, 600.0, 250.0, 850.0, 0.0),
                throw: Attack::new(80.0, 0.0, 450.0, 100.0, 700.0, 0.0),
            },
            stamina_damage_negation: Some(40.0),
        }
    }

    #[test]
    fn test_sample_weapon_is_valid() {
        assert!(sample_weapon(DamageType::Chop).validate().is_ok());
    }

    #[test]
    fn test_negative_damage_rejected() {
        let mut weapon = sample_weapon(DamageType::Cut);
        weapon.attacks.stab.heavy.damage = -1.0;
        let err = weapon.validate().unwrap_err();
        match err {
            ArmoryError::InvalidWeapon { reason, .. } => {
                assert!(reason.contains("attacks.stab.heavy.damage"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_nan_timing_rejected() {
        let mut weapon = sample_weapon(DamageType::Cut);
        weapon.attacks.throw.windup = f64::NAN;
        assert!(weapon.validate().is_err());
    }

    #[test]
    fn test_negation_out_of_range_rejected() {
        let mut weapon = sample_weapon(DamageType::Blunt);
        weapon.stamina_damage_negation = Some(120.0);
        assert!(weapon.validate().is_err());
    }

    #[test]
    fn test_camel_case_round_trip_keys() {
        let weapon = sample_weapon(DamageType::Chop);
        let json = serde_json::to_value(&weapon).unwrap();
        assert!(json["attacks"]["sprintCharge"]["damage"].is_number());
        assert!(json["attacks"]["slash"]["altRange"].is_number());
        assert_eq!(json["weaponTypes"][1], "Two Handed");
        assert!(json["attacks"]["slash"]["light"].get("cleaveOverride").is_none());
    }

    #[test]
    fn test_effective_damage_type() {
        let mut attack = Attack::new(10.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(attack.effective_damage_type(DamageType::Cut), DamageType::Cut);
        attack.damage_type_override = Some(DamageType::Blunt);
        assert_eq!(attack.effective_damage_type(DamageType::Cut), DamageType::Blunt);
    }
}
