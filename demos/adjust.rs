//! Adjust example: Condition-adjusted damage for one weapon
//!
//! This example demonstrates:
//! - Looking up weapons and targets in the built-in catalogs
//! - Checking which attacks cleave
//! - Adjusting a weapon for several targets and a mount
//!
//! Set `RUST_LOG=armory=debug` to see each adjustment logged.

use armory::path::AttackField;
use armory::*;

fn main() -> Result<(), ArmoryError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let weapons = WeaponCatalog::builtin()?;
    let targets = TargetCatalog::builtin();

    println!("=== Weapon Adjustment Demo ===\n");

    // ===== Cleave Rule =====
    println!("1. Cleave Rule\n");

    for name in ["Axe", "Mace", "Spear"] {
        let weapon = weapons
            .find_weapon_by_name(name)
            .ok_or_else(|| ArmoryError::InvalidCatalog(format!("no weapon named {name}")))?;
        let cleaving: Vec<String> = AttackField::ALL
            .iter()
            .filter(|field| can_cleave_field(weapon, **field))
            .map(|field| field.to_string())
            .collect();
        println!("  {} ({}): {}", weapon.name, weapon.damage_type, cleaving.join(", "));
    }
    println!();

    // ===== Adjustment =====
    println!("2. Three Targets, Every Class\n");

    let axe = weapons
        .find_weapon_by_name("Axe")
        .ok_or_else(|| ArmoryError::InvalidCatalog("no weapon named Axe".to_string()))?;
    println!("  Axe slash heavy, base: {:.2}", axe.attacks.slash.heavy.damage);
    for target in targets.iter() {
        let adjusted = adjust_weapon(axe, 3, 1.0, target);
        println!(
            "  vs {:<8} → {:>7.2}",
            target.name(),
            adjusted.attacks.slash.heavy.damage
        );
    }
    println!();

    // ===== Combat Conditions =====
    println!("3. Mounted Charge\n");

    let conditions: CombatConditions = serde_json::from_str(
        r#"{"targetCount": 2, "mountedDamageMultiplier": 1.5, "target": "Knight"}"#,
    )
    .map_err(ArmoryError::from)?;
    let adjusted = conditions.apply(axe, targets)?;
    println!(
        "  Sprint charge: {:.2} → {:.2}",
        axe.attacks.sprint_charge.damage, adjusted.attacks.sprint_charge.damage
    );
    println!(
        "  Overhead heavy: {:.2} → {:.2}",
        axe.attacks.overhead.heavy.damage, adjusted.attacks.overhead.heavy.damage
    );

    println!("\n✓ Source weapon unchanged: {}", axe.attacks.slash.heavy.damage);
    Ok(())
}
