//! Bonus multiplier module.
//!
//! Computes how much an attack's damage scales against a target class:
//! the class's resistance to the damage type, times the number of targets
//! hit when the attack cleaves.
//!
//! The resistance comes from the struck profile's `CharacterClass`, never
//! from caller data. `Average` needs no special case here: its table is the
//! mean of the concrete tables, and the cleave factor distributes over that
//! mean.

use crate::damage::DamageType;
use crate::target::TargetClass;

/// Number of targets an attack actually damages.
///
/// # Examples
///
/// ```rust
/// use armory::bonus::cleaving_multiplier;
///
/// assert_eq!(cleaving_multiplier(3, true), 3.0);
/// assert_eq!(cleaving_multiplier(3, false), 1.0);
/// ```
#[inline]
pub fn cleaving_multiplier(target_count: u32, cleaves: bool) -> f64 {
    if cleaves {
        f64::from(target_count)
    } else {
        1.0
    }
}

/// Damage scaling factor for an attack against `target`.
///
/// Archers and Vanguards take no class bonus. Footmen and Knights take
/// extra chop and blunt damage, Knights more than Footmen. For `Average`
/// the result equals the mean of the four concrete results.
///
/// # Arguments
///
/// * `target_count` - Targets inside the attack's arc
/// * `target` - The class being struck
/// * `damage_type` - Damage type of the attack
/// * `cleaves` - Whether the attack hits every target in its arc
///
/// # Examples
///
/// ```rust
/// use armory::bonus::bonus_mult;
/// use armory::{CharacterClass, DamageType, TargetCatalog};
///
/// let targets = TargetCatalog::builtin();
/// let footman = targets.get(CharacterClass::Footman).unwrap();
/// let archer = targets.get(CharacterClass::Archer).unwrap();
///
/// assert_eq!(bonus_mult(3, footman, DamageType::Chop, true), 1.175 * 3.0);
/// assert_eq!(bonus_mult(3, archer, DamageType::Blunt, true), 3.0);
/// assert_eq!(bonus_mult(3, footman, DamageType::Blunt, false), 1.35);
/// ```
pub fn bonus_mult(target_count: u32, target: &TargetClass, damage_type: DamageType, cleaves: bool) -> f64 {
    cleaving_multiplier(target_count, cleaves) * target.damage_multiplier(damage_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::CharacterClass;

    fn standard(class: CharacterClass) -> TargetClass {
        TargetClass::standard(class)
    }

    #[test]
    fn test_unarmored_classes_take_no_bonus() {
        for class in [CharacterClass::Archer, CharacterClass::Vanguard] {
            let target = standard(class);
            for dt in DamageType::ALL {
                assert_eq!(bonus_mult(1, &target, dt, true), 1.0);
                assert_eq!(bonus_mult(4, &target, dt, true), 4.0);
                assert_eq!(bonus_mult(4, &target, dt, false), 1.0);
            }
        }
    }

    #[test]
    fn test_armored_classes() {
        let footman = standard(CharacterClass::Footman);
        let knight = standard(CharacterClass::Knight);
        for n in 1..=5u32 {
            let nf = f64::from(n);
            assert_eq!(bonus_mult(n, &footman, DamageType::Chop, true), 1.175 * nf);
            assert_eq!(bonus_mult(n, &knight, DamageType::Chop, true), 1.25 * nf);
            assert_eq!(bonus_mult(n, &footman, DamageType::Blunt, true), 1.35 * nf);
            assert_eq!(bonus_mult(n, &knight, DamageType::Blunt, true), 1.5 * nf);
            assert_eq!(bonus_mult(n, &footman, DamageType::Cut, true), nf);
            assert_eq!(bonus_mult(n, &knight, DamageType::Cut, true), nf);
        }
    }

    #[test]
    fn test_average_is_mean_of_concrete() {
        let concrete: Vec<TargetClass> = CharacterClass::CONCRETE.iter().map(|c| standard(*c)).collect();
        let average = standard(CharacterClass::Average);

        for n in 1..=4u32 {
            for dt in DamageType::ALL {
                for cleaves in [true, false] {
                    let mean = concrete
                        .iter()
                        .map(|t| bonus_mult(n, t, dt, cleaves))
                        .sum::<f64>()
                        / concrete.len() as f64;
                    let got = bonus_mult(n, &average, dt, cleaves);
                    assert!((got - mean).abs() < 1e-12, "n={n} {dt} cleaves={cleaves}");
                }
            }
        }
    }

    #[test]
    fn test_zero_targets_cleaving() {
        let knight = standard(CharacterClass::Knight);
        assert_eq!(bonus_mult(0, &knight, DamageType::Chop, true), 0.0);
        assert_eq!(bonus_mult(0, &knight, DamageType::Chop, false), 1.25);
    }

    #[test]
    fn test_bonus_follows_class_not_profile() {
        let knight = TargetClass::new(CharacterClass::Knight, Vec::new(), 10.0, 10.0);
        assert_eq!(bonus_mult(2, &knight, DamageType::Chop, true), 2.5);

        let json = r#"{"class": "Archer", "subclasses": [], "hp": 90.0, "stamina": 60.0,
                       "multipliers": {"cut": 2.0, "chop": 2.0, "blunt": 2.0}}"#;
        let archer: TargetClass = serde_json::from_str(json).unwrap();
        assert_eq!(bonus_mult(1, &archer, DamageType::Cut, true), 1.0);
    }
}
