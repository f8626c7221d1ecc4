//! Cleave rule.
//!
//! Decides whether an attack damages every target inside its arc or only
//! the first one. An explicit `cleaveOverride` on the attack always wins.
//! Without one, heavy attacks cleave, and every other attack cleaves unless
//! the weapon deals blunt damage.

use crate::damage::DamageType;
use crate::path::{extract, AttackField};
use crate::weapon::Weapon;

const OVERRIDE_KEY: &str = "cleaveOverride";

/// Whether the attack whose damage lives at `damage_path` cleaves.
///
/// The override is looked up on the sibling `cleaveOverride` key, one level
/// up from `damage_path`. Paths outside `attacks` never cleave.
///
/// # Examples
///
/// ```rust
/// use armory::cleave::can_cleave;
/// use armory::WeaponCatalog;
///
/// let catalog = WeaponCatalog::builtin().unwrap();
/// let mace = catalog.find_weapon_by_id("mace").unwrap();
///
/// // Blunt weapons only cleave with heavies by default.
/// assert!(can_cleave(mace, "attacks.slash.heavy.damage"));
/// assert!(!can_cleave(mace, "attacks.slash.light.damage"));
/// ```
pub fn can_cleave(weapon: &Weapon, damage_path: &str) -> bool {
    let override_path = match damage_path.rsplit_once('.') {
        Some((parent, _)) => format!("{parent}.{OVERRIDE_KEY}"),
        None => OVERRIDE_KEY.to_string(),
    };

    // An optional probe never fails.
    let forced = extract(weapon, &override_path, true)
        .ok()
        .flatten()
        .and_then(|value| value.as_bool());
    if let Some(forced) = forced {
        return forced;
    }

    if !damage_path.starts_with("attacks") {
        return false;
    }
    let heavy = damage_path.split('.').any(|segment| segment == "heavy");
    default_cleave(weapon.damage_type, heavy)
}

/// Typed form of [`can_cleave`] for a known attack location.
pub fn can_cleave_field(weapon: &Weapon, field: AttackField) -> bool {
    field
        .get(&weapon.attacks)
        .cleave_override
        .unwrap_or_else(|| default_cleave(weapon.damage_type, field.is_heavy()))
}

fn default_cleave(damage_type: DamageType, heavy: bool) -> bool {
    heavy || damage_type != DamageType::Blunt
}
