//! Weapon adjuster.
//!
//! Rewrites every attack's damage for a set of combat conditions: how many
//! targets are in reach, whether the attacker is mounted, and which class is
//! being struck. The input weapon is cloned, never mutated.

use crate::bonus::bonus_mult;
use crate::catalog::TargetCatalog;
use crate::cleave::can_cleave;
use crate::error::ArmoryError;
use crate::path::{AttackField, SpecialKind};
use crate::target::{CharacterClass, TargetClass};
use crate::weapon::Weapon;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Produce a copy of `weapon` with every damage field adjusted.
///
/// Each damage becomes
/// `damage * bonus_mult(target_count, target, weapon.damage_type, cleaves) * mounted_damage_multiplier`,
/// where `cleaves` comes from the cleave rule for that attack. A sprint
/// charge never cleaves. Every other field is copied unchanged.
///
/// # Examples
///
/// ```rust
/// use armory::{adjust_weapon, CharacterClass, TargetCatalog, WeaponCatalog};
///
/// let weapons = WeaponCatalog::builtin().unwrap();
/// let targets = TargetCatalog::builtin();
/// let axe = weapons.find_weapon_by_id("axe").unwrap();
/// let archer = targets.get(CharacterClass::Archer).unwrap();
///
/// let adjusted = adjust_weapon(axe, 3, 1.0, archer);
/// assert_eq!(adjusted.attacks.slash.heavy.damage, axe.attacks.slash.heavy.damage * 3.0);
/// assert_eq!(adjusted.attacks.sprint_charge.damage, axe.attacks.sprint_charge.damage);
/// ```
pub fn adjust_weapon(
    weapon: &Weapon,
    target_count: u32,
    mounted_damage_multiplier: f64,
    target: &TargetClass,
) -> Weapon {
    let mut adjusted = weapon.clone();

    for field in AttackField::ALL {
        let cleaves = match field {
            AttackField::Special(SpecialKind::SprintCharge) => false,
            _ => can_cleave(weapon, &field.damage_path()),
        };
        let multiplier = bonus_mult(target_count, target, weapon.damage_type, cleaves);
        let attack = field.get_mut(&mut adjusted.attacks);
        attack.damage *= multiplier * mounted_damage_multiplier;
    }

    debug!(
        weapon = %weapon.id,
        target = target.name(),
        target_count,
        mounted_damage_multiplier,
        "adjusted weapon damage"
    );
    adjusted
}

/// Combat conditions for one calculation.
///
/// # Examples
///
/// ```rust
/// use armory::{CombatConditions, TargetCatalog, WeaponCatalog};
///
/// let conditions: CombatConditions =
///     serde_json::from_str(r#"{"targetCount": 2, "target": "Knight"}"#).unwrap();
/// assert_eq!(conditions.mounted_damage_multiplier, 1.0);
///
/// let weapons = WeaponCatalog::builtin().unwrap();
/// let maul = weapons.find_weapon_by_id("maul").unwrap();
/// let adjusted = conditions.apply(maul, TargetCatalog::builtin()).unwrap();
/// assert_eq!(adjusted.attacks.overhead.heavy.damage, maul.attacks.overhead.heavy.damage * 1.5 * 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CombatConditions {
    /// Targets within reach of a cleaving attack.
    pub target_count: u32,
    /// Damage multiplier applied while mounted. 1.0 on foot.
    pub mounted_damage_multiplier: f64,
    /// Name of the class being struck, matched ignoring case.
    pub target: String,
}

impl Default for CombatConditions {
    fn default() -> Self {
        Self {
            target_count: 1,
            mounted_damage_multiplier: 1.0,
            target: CharacterClass::Average.as_str().to_string(),
        }
    }
}

impl CombatConditions {
    /// Conditions against a single target of the given class, on foot.
    pub fn against(target: CharacterClass) -> Self {
        Self {
            target: target.as_str().to_string(),
            ..Self::default()
        }
    }

    /// Check the numeric conditions.
    ///
    /// At least one target must be in reach, and the mounted multiplier
    /// must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ArmoryError> {
        if self.target_count == 0 {
            return Err(ArmoryError::InvalidConditions(
                "target count must be at least 1".to_string(),
            ));
        }
        let mounted = self.mounted_damage_multiplier;
        if !mounted.is_finite() || mounted < 0.0 {
            return Err(ArmoryError::InvalidConditions(format!(
                "mounted damage multiplier must be a non-negative number, got {mounted}"
            )));
        }
        Ok(())
    }

    /// Resolve the target class and adjust `weapon` under these conditions.
    ///
    /// # Errors
    ///
    /// * `InvalidConditions` - if [`CombatConditions::validate`] fails
    /// * `UnknownTarget` - if no class in `targets` has the given name
    pub fn apply(&self, weapon: &Weapon, targets: &TargetCatalog) -> Result<Weapon, ArmoryError> {
        self.validate()?;
        let target = targets
            .find_target_by_name(&self.target)
            .ok_or_else(|| ArmoryError::UnknownTarget(self.target.clone()))?;
        Ok(adjust_weapon(
            weapon,
            self.target_count,
            self.mounted_damage_multiplier,
            target,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damage::DamageType;
    use crate::weapon::tests::sample_weapon;

    fn targets() -> TargetCatalog {
        TargetCatalog::standard()
    }

    #[test]
    fn test_chop_heavy_against_footman() {
        let weapon = sample_weapon(DamageType::Chop);
        let targets = targets();
        let footman = targets.get(CharacterClass::Footman).unwrap();
        let adjusted = adjust_weapon(&weapon, 3, 1.0, footman);
        assert!((adjusted.attacks.slash.heavy.damage - 176.25).abs() < 1e-9);
    }

    #[test]
    fn test_chop_heavy_against_archer() {
        let weapon = sample_weapon(DamageType::Chop);
        let targets = targets();
        let archer = targets.get(CharacterClass::Archer).unwrap();
        let adjusted = adjust_weapon(&weapon, 3, 1.0, archer);
        assert_eq!(adjusted.attacks.slash.heavy.damage, 150.0);
    }

    #[test]
    fn test_sprint_charge_never_cleaves() {
        let mut weapon = sample_weapon(DamageType::Cut);
        weapon.attacks.sprint_charge.cleave_override = Some(true);
        let targets = targets();
        let archer = targets.get(CharacterClass::Archer).unwrap();
        let adjusted = adjust_weapon(&weapon, 4, 1.5, archer);
        assert_eq!(adjusted.attacks.sprint_charge.damage, 70.0 * 1.5);
        assert_eq!(adjusted.attacks.sprint_attack.damage, 55.0 * 4.0 * 1.5);
    }

    #[test]
    fn test_blunt_lights_hit_one_target() {
        let weapon = sample_weapon(DamageType::Blunt);
        let targets = targets();
        let knight = targets.get(CharacterClass::Knight).unwrap();
        let adjusted = adjust_weapon(&weapon, 2, 1.0, knight);
        assert_eq!(adjusted.attacks.stab.light.damage, 35.0 * 1.5);
        assert_eq!(adjusted.attacks.stab.heavy.damage, 40.0 * 1.5 * 2.0);
    }

    #[test]
    fn test_input_untouched_and_other_fields_copied() {
        let mut weapon = sample_weapon(DamageType::Chop);
        weapon.attacks.overhead.light.cleave_override = Some(false);
        let before = weapon.clone();
        let targets = targets();
        let adjusted = adjust_weapon(&weapon, 5, 2.0, targets.average());

        assert_eq!(weapon, before);
        assert_eq!(adjusted.attacks.slash.range, weapon.attacks.slash.range);
        assert_eq!(adjusted.attacks.overhead.light.windup, weapon.attacks.overhead.light.windup);
        assert_eq!(adjusted.attacks.overhead.light.cleave_override, Some(false));
        assert_eq!(adjusted.name, weapon.name);
        assert_ne!(adjusted.attacks.slash.light.damage, weapon.attacks.slash.light.damage);
    }

    #[test]
    fn test_conditions_defaults_and_validation() {
        let conditions = CombatConditions::default();
        assert_eq!(conditions.target_count, 1);
        assert_eq!(conditions.target, "Average");
        assert!(conditions.validate().is_ok());

        let zero = CombatConditions {
            target_count: 0,
            ..CombatConditions::default()
        };
        assert!(matches!(zero.validate(), Err(ArmoryError::InvalidConditions(_))));

        let negative = CombatConditions {
            mounted_damage_multiplier: -0.5,
            ..CombatConditions::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_conditions_unknown_target() {
        let weapon = sample_weapon(DamageType::Cut);
        let conditions = CombatConditions {
            target: "Peasant".to_string(),
            ..CombatConditions::default()
        };
        assert_eq!(
            conditions.apply(&weapon, &targets()),
            Err(ArmoryError::UnknownTarget("Peasant".to_string()))
        );
    }

    #[test]
    fn test_conditions_apply_matches_adjust() {
        let weapon = sample_weapon(DamageType::Blunt);
        let targets = targets();
        let conditions = CombatConditions {
            target_count: 3,
            mounted_damage_multiplier: 1.25,
            ..CombatConditions::against(CharacterClass::Footman)
        };
        let footman = targets.get(CharacterClass::Footman).unwrap();
        assert_eq!(
            conditions.apply(&weapon, &targets).unwrap(),
            adjust_weapon(&weapon, 3, 1.25, footman)
        );
    }
}
