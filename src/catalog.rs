//! Catalog module.
//!
//! Holds the immutable weapon and target catalogs and the lookups over
//! them. Catalogs are built once, validated on construction, and only read
//! afterwards. A lookup that finds nothing returns `None`.

use crate::error::ArmoryError;
use crate::target::{CharacterClass, TargetClass};
use crate::weapon::Weapon;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::{debug, trace, warn};

/// Weapon catalog shipped with the crate.
const BUILTIN_WEAPONS: &str = include_str!("../data/weapons.json");

/// The concrete target classes plus their derived `Average`.
///
/// # Examples
///
/// ```rust
/// use armory::TargetCatalog;
///
/// let targets = TargetCatalog::builtin();
/// let knight = targets.find_target_by_name("KNIGHT").unwrap();
/// assert_eq!(knight.hp, 175.0);
/// assert!(targets.find_target_by_name("Peasant").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TargetCatalog {
    concrete: Vec<TargetClass>,
    average: TargetClass,
}

impl TargetCatalog {
    /// Build a catalog from concrete classes and fold their `Average`.
    ///
    /// # Errors
    ///
    /// * `DerivedTarget` - if a caller supplies an `Average` class
    /// * `InvalidTarget` - if a profile fails [`TargetClass::validate`]
    /// * `DuplicateTarget` - if two profiles share a class
    /// * `EmptyTargetList` - if `classes` is empty
    pub fn from_classes(classes: Vec<TargetClass>) -> Result<Self, ArmoryError> {
        let mut seen = HashSet::new();
        for target in &classes {
            if target.is_average() {
                return Err(ArmoryError::DerivedTarget(target.name().to_string()));
            }
            target.validate()?;
            if !seen.insert(target.class) {
                return Err(ArmoryError::DuplicateTarget(target.name().to_string()));
            }
        }
        let average = TargetClass::average_of(&classes).ok_or(ArmoryError::EmptyTargetList)?;
        debug!(
            classes = classes.len(),
            hp = average.hp,
            stamina = average.stamina,
            "built target catalog"
        );
        Ok(Self {
            concrete: classes,
            average,
        })
    }

    /// The four in-game classes and their average.
    pub fn standard() -> Self {
        Self {
            concrete: CharacterClass::CONCRETE.map(TargetClass::standard).to_vec(),
            average: TargetClass::standard(CharacterClass::Average),
        }
    }

    /// Process-wide standard catalog, built on first use.
    pub fn builtin() -> &'static TargetCatalog {
        static TARGETS: OnceLock<TargetCatalog> = OnceLock::new();
        TARGETS.get_or_init(TargetCatalog::standard)
    }

    /// Find a class by name, ignoring case. `Average` is included.
    pub fn find_target_by_name(&self, name: &str) -> Option<&TargetClass> {
        let found = self.iter().find(|t| t.name().eq_ignore_ascii_case(name));
        if found.is_none() {
            trace!(name, "no target class matched");
        }
        found
    }

    /// Get a class by identifier.
    pub fn get(&self, class: CharacterClass) -> Option<&TargetClass> {
        self.iter().find(|t| t.class == class)
    }

    /// The concrete classes, in catalog order.
    pub fn concrete(&self) -> &[TargetClass] {
        &self.concrete
    }

    /// The derived average class.
    pub fn average(&self) -> &TargetClass {
        &self.average
    }

    /// Every class, concrete ones first and `Average` last.
    pub fn iter(&self) -> impl Iterator<Item = &TargetClass> {
        self.concrete.iter().chain(std::iter::once(&self.average))
    }
}

/// An ordered list of validated weapons.
///
/// # Examples
///
/// ```rust
/// use armory::WeaponCatalog;
///
/// let weapons = WeaponCatalog::builtin().unwrap();
/// assert!(weapons.find_weapon_by_name("Longsword").is_some());
/// assert!(weapons.find_weapon_by_name("longsword").is_none());
/// assert!(weapons.find_weapon_by_id("longsword").is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponCatalog {
    weapons: Vec<Weapon>,
}

impl WeaponCatalog {
    /// Build a catalog, validating every weapon.
    ///
    /// # Errors
    ///
    /// * `InvalidWeapon` - if a record fails [`Weapon::validate`]
    /// * `DuplicateWeapon` - if two records share an id
    pub fn from_weapons(weapons: Vec<Weapon>) -> Result<Self, ArmoryError> {
        let mut seen = HashSet::new();
        for weapon in &weapons {
            weapon.validate()?;
            if !seen.insert(weapon.id.as_str()) {
                return Err(ArmoryError::DuplicateWeapon(weapon.id.clone()));
            }
        }
        debug!(weapons = weapons.len(), "built weapon catalog");
        Ok(Self { weapons })
    }

    /// Parse a JSON array of weapon records and build a catalog from it.
    ///
    /// # Errors
    ///
    /// * `InvalidCatalog` - if the text is not a valid weapon array
    /// * any error of [`WeaponCatalog::from_weapons`]
    pub fn from_json(json: &str) -> Result<Self, ArmoryError> {
        let weapons: Vec<Weapon> = serde_json::from_str(json)?;
        Self::from_weapons(weapons)
    }

    /// Process-wide catalog parsed from the embedded weapon data.
    pub fn builtin() -> Result<&'static WeaponCatalog, ArmoryError> {
        static WEAPONS: OnceLock<Result<WeaponCatalog, ArmoryError>> = OnceLock::new();
        WEAPONS
            .get_or_init(|| {
                WeaponCatalog::from_json(BUILTIN_WEAPONS)
                    .inspect_err(|err| warn!(%err, "built-in weapon catalog failed to load"))
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Find a weapon by its exact display name.
    pub fn find_weapon_by_name(&self, name: &str) -> Option<&Weapon> {
        let found = self.weapons.iter().find(|w| w.name == name);
        if found.is_none() {
            trace!(name, "no weapon matched name");
        }
        found
    }

    /// Find a weapon by its exact identifier.
    pub fn find_weapon_by_id(&self, id: &str) -> Option<&Weapon> {
        let found = self.weapons.iter().find(|w| w.id == id);
        if found.is_none() {
            trace!(id, "no weapon matched id");
        }
        found
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn iter(&self) -> impl Iterator<Item = &Weapon> {
        self.weapons.iter()
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::damage::DamageType;
    use crate::weapon::tests::sample_weapon;

    #[test]
    fn test_standard_target_catalog() {
        let targets = TargetCatalog::standard();
        assert_eq!(targets.concrete().len(), 4);
        assert_eq!(targets.iter().count(), 5);
        assert!(targets.average().is_average());
        assert_eq!(targets.iter().last().unwrap().class, CharacterClass::Average);
    }

    #[test]
    fn test_find_target_case_insensitive() {
        let targets = TargetCatalog::standard();
        for name in ["footman", "FOOTMAN", "Footman"] {
            let found = targets.find_target_by_name(name).unwrap();
            assert_eq!(found.class, CharacterClass::Footman);
        }
        assert!(targets.find_target_by_name("average").unwrap().is_average());
        assert!(targets.find_target_by_name("Foot").is_none());
    }

    #[test]
    fn test_from_classes_rejects_empty() {
        assert_eq!(TargetCatalog::from_classes(Vec::new()), Err(ArmoryError::EmptyTargetList));
    }

    #[test]
    fn test_standard_average_matches_fold() {
        let targets = TargetCatalog::standard();
        let folded = TargetClass::average_of(targets.concrete()).unwrap();
        assert_eq!(targets.average(), &folded);
        assert_eq!(targets.average().hp, 136.25);
        assert_eq!(targets.average().stamina, 80.0);
    }

    #[test]
    fn test_from_classes_rejects_average() {
        let standard = TargetCatalog::standard();
        let mut classes = standard.concrete().to_vec();
        classes.push(standard.average().clone());
        assert_eq!(
            TargetCatalog::from_classes(classes),
            Err(ArmoryError::DerivedTarget("Average".to_string()))
        );
    }

    #[test]
    fn test_from_classes_rejects_duplicate_class() {
        let knight = TargetClass::standard(CharacterClass::Knight);
        let archer = TargetClass::standard(CharacterClass::Archer);
        assert_eq!(
            TargetCatalog::from_classes(vec![knight.clone(), archer, knight]),
            Err(ArmoryError::DuplicateTarget("Knight".to_string()))
        );
    }

    #[test]
    fn test_from_classes_rejects_bad_profiles() {
        let knight = TargetClass::standard(CharacterClass::Knight);
        let mut archer = TargetClass::standard(CharacterClass::Archer);
        archer.hp = -50.0;
        assert!(matches!(
            TargetCatalog::from_classes(vec![knight.clone(), archer]),
            Err(ArmoryError::InvalidTarget { .. })
        ));

        let mut vanguard = TargetClass::standard(CharacterClass::Vanguard);
        vanguard.stamina = f64::NAN;
        assert!(matches!(
            TargetCatalog::from_classes(vec![knight, vanguard]),
            Err(ArmoryError::InvalidTarget { .. })
        ));
    }

    #[test]
    fn test_from_classes_custom_average() {
        let archer = TargetClass::standard(CharacterClass::Archer);
        let knight = TargetClass::standard(CharacterClass::Knight);
        let targets = TargetCatalog::from_classes(vec![archer, knight]).unwrap();
        assert!((targets.average().hp - 132.5).abs() < 1e-9);
        // The multiplier table of Average always spans the four classes.
        assert!((targets.average().damage_multiplier(DamageType::Blunt) - 1.2125).abs() < 1e-12);
        assert!(targets.get(CharacterClass::Footman).is_none());
    }

    #[test]
    fn test_from_classes_keeps_class_tables() {
        let knight = TargetClass::new(CharacterClass::Knight, Vec::new(), 200.0, 90.0);
        let targets = TargetCatalog::from_classes(vec![knight]).unwrap();
        let knight = targets.find_target_by_name("knight").unwrap();
        assert_eq!(knight.damage_multiplier(DamageType::Chop), 1.25);
        assert_eq!(targets.average().hp, 200.0);
    }

    #[test]
    fn test_weapon_lookups() {
        let catalog = WeaponCatalog::from_weapons(vec![sample_weapon(DamageType::Chop)]).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find_weapon_by_name("Test Axe").is_some());
        assert!(catalog.find_weapon_by_name("test axe").is_none());
        assert!(catalog.find_weapon_by_id("test_axe").is_some());
        assert!(catalog.find_weapon_by_id("Test Axe").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let weapons = vec![sample_weapon(DamageType::Chop), sample_weapon(DamageType::Cut)];
        assert_eq!(
            WeaponCatalog::from_weapons(weapons),
            Err(ArmoryError::DuplicateWeapon("test_axe".to_string()))
        );
    }

    #[test]
    fn test_invalid_weapon_rejected() {
        let mut weapon = sample_weapon(DamageType::Chop);
        weapon.attacks.slash.range = f64::INFINITY;
        assert!(matches!(
            WeaponCatalog::from_weapons(vec![weapon]),
            Err(ArmoryError::InvalidWeapon { .. })
        ));
    }

    #[test]
    fn test_from_json_round_trip() {
        let weapon = sample_weapon(DamageType::Blunt);
        let json = serde_json::to_string(&vec![weapon.clone()]).unwrap();
        let catalog = WeaponCatalog::from_json(&json).unwrap();
        assert_eq!(catalog.weapons(), &[weapon]);
    }

    #[test]
    fn test_from_json_rejects_partial_record() {
        let json = r#"[{"id": "stick", "name": "Stick", "damageType": "Blunt"}]"#;
        assert!(matches!(
            WeaponCatalog::from_json(json),
            Err(ArmoryError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = WeaponCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());
    }
}
