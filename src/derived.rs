//! Derived stats.
//!
//! Stats that are computed from a weapon's measured data rather than
//! recorded: stamina damage per attack, and the synthetic `average` swing
//! built from slash, overhead and stab.

use crate::constants::{
    BASE_STAMINA_DAMAGE_MULTIPLIER, BLUNT_STAMINA_DAMAGE_FACTOR, CHOP_STAMINA_DAMAGE_FACTOR,
};
use crate::damage::DamageType;
use crate::path::{AttackField, SwingKind};
use crate::weapon::{Attack, Swing, Weapon};

/// Stamina damage dealt to a blocker by an attack.
///
/// # Examples
///
/// ```rust
/// use armory::derived::stamina_damage;
/// use armory::DamageType;
///
/// assert!((stamina_damage(100.0, DamageType::Cut) - 30.0).abs() < 1e-9);
/// assert!((stamina_damage(100.0, DamageType::Chop) - 33.0).abs() < 1e-9);
/// assert!((stamina_damage(100.0, DamageType::Blunt) - 37.5).abs() < 1e-9);
/// ```
pub fn stamina_damage(damage: f64, damage_type: DamageType) -> f64 {
    let base = damage * BASE_STAMINA_DAMAGE_MULTIPLIER;
    match damage_type {
        DamageType::Cut => base,
        DamageType::Chop => base * CHOP_STAMINA_DAMAGE_FACTOR,
        DamageType::Blunt => base * BLUNT_STAMINA_DAMAGE_FACTOR,
    }
}

/// Fill in stamina damage on every attack that lacks it.
///
/// The average swing is skipped; rebuild it with [`with_average_swing`]
/// afterwards. Attacks with a damage type override use that type.
/// Recorded stamina damage is kept as is.
pub fn with_stamina_damage(weapon: &Weapon) -> Weapon {
    let mut derived = weapon.clone();
    for field in AttackField::ALL {
        if matches!(field, AttackField::Swing(SwingKind::Average, _)) {
            continue;
        }
        let attack = field.get_mut(&mut derived.attacks);
        if attack.stamina_damage.is_none() {
            let damage_type = attack.effective_damage_type(weapon.damage_type);
            attack.stamina_damage = Some(stamina_damage(attack.damage, damage_type));
        }
    }
    derived
}

fn mean3(values: [f64; 3]) -> f64 {
    values.iter().sum::<f64>() / 3.0
}

fn mean3_optional(values: [Option<f64>; 3]) -> Option<f64> {
    match values {
        [Some(a), Some(b), Some(c)] => Some(mean3([a, b, c])),
        _ => None,
    }
}

fn average_attack(attacks: [&Attack; 3]) -> Attack {
    let [a, b, c] = attacks;
    Attack {
        damage: mean3([a.damage, b.damage, c.damage]),
        holding: mean3([a.holding, b.holding, c.holding]),
        windup: mean3([a.windup, b.windup, c.windup]),
        release: mean3([a.release, b.release, c.release]),
        recovery: mean3([a.recovery, b.recovery, c.recovery]),
        combo: mean3([a.combo, b.combo, c.combo]),
        riposte: mean3_optional([a.riposte, b.riposte, c.riposte]),
        thwack: mean3_optional([a.thwack, b.thwack, c.thwack]),
        stamina_damage: mean3_optional([a.stamina_damage, b.stamina_damage, c.stamina_damage]),
        range: mean3_optional([a.range, b.range, c.range]),
        cleave_override: None,
        damage_type_override: None,
    }
}

/// Rebuild the `average` swing as the mean of slash, overhead and stab.
///
/// Optional stats are averaged only when all three swings carry them.
/// Cleave and damage type overrides are not carried over.
pub fn with_average_swing(weapon: &Weapon) -> Weapon {
    let mut derived = weapon.clone();
    let attacks = &weapon.attacks;
    let swings: [&Swing; 3] = [&attacks.slash, &attacks.overhead, &attacks.stab];

    derived.attacks.average = Swing {
        range: mean3(swings.map(|s| s.range)),
        alt_range: mean3(swings.map(|s| s.alt_range)),
        light: average_attack(swings.map(|s| &s.light)),
        heavy: average_attack(swings.map(|s| &s.heavy)),
    };
    derived
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weapon::tests::sample_weapon;

    #[test]
    fn test_stamina_damage_uses_override() {
        let mut weapon = sample_weapon(DamageType::Cut);
        weapon.attacks.special.damage_type_override = Some(DamageType::Blunt);
        let derived = with_stamina_damage(&weapon);

        let special = derived.attacks.special.stamina_damage.unwrap();
        assert!((special - 65.0 * 0.3 * 1.25).abs() < 1e-9);
        let slash = derived.attacks.slash.light.stamina_damage.unwrap();
        assert!((slash - 40.0 * 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_stamina_damage_keeps_recorded_values() {
        let mut weapon = sample_weapon(DamageType::Chop);
        weapon.attacks.stab.heavy.stamina_damage = Some(99.0);
        let derived = with_stamina_damage(&weapon);
        assert_eq!(derived.attacks.stab.heavy.stamina_damage, Some(99.0));
        assert!(derived.attacks.average.light.stamina_damage.is_none());
        assert!(weapon.attacks.slash.light.stamina_damage.is_none());
    }

    #[test]
    fn test_average_swing_means() {
        let weapon = sample_weapon(DamageType::Chop);
        let derived = with_average_swing(&weapon);
        let average = &derived.attacks.average;
        assert!((average.light.damage - 40.0).abs() < 1e-9);
        assert!((average.heavy.damage - 50.0).abs() < 1e-9);
        assert!((average.range - 60.0).abs() < 1e-9);
        assert!((average.light.windup - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_swing_optional_stats() {
        let mut weapon = sample_weapon(DamageType::Chop);
        weapon.attacks.slash.light.riposte = Some(300.0);
        weapon.attacks.overhead.light.riposte = Some(400.0);
        assert!(with_average_swing(&weapon).attacks.average.light.riposte.is_none());

        weapon.attacks.stab.light.riposte = Some(500.0);
        let riposte = with_average_swing(&weapon).attacks.average.light.riposte.unwrap();
        assert!((riposte - 400.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_swing_drops_overrides() {
        let mut weapon = sample_weapon(DamageType::Blunt);
        weapon.attacks.average.light.cleave_override = Some(true);
        let derived = with_average_swing(&weapon);
        assert_eq!(derived.attacks.average.light.cleave_override, None);
    }

    #[test]
    fn test_derive_then_average_stamina() {
        let weapon = sample_weapon(DamageType::Chop);
        let derived = with_average_swing(&with_stamina_damage(&weapon));
        let expected = stamina_damage(40.0, DamageType::Chop);
        let got = derived.attacks.average.light.stamina_damage.unwrap();
        assert!((got - expected).abs() < 1e-9);
    }
}
