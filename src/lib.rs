//! # armory - Deterministic Weapon Damage Calculator
//!
//! Computes condition-adjusted combat stats for melee weapons:
//! - **Deterministic** (same weapon and conditions → same numbers)
//! - **Non-mutating** (every adjustment returns a fresh weapon record)
//! - **Typed paths** (dotted stat paths resolve against real struct fields)
//!
//! ## Core Concepts
//!
//! ### Damage Pipeline
//!
//! ```text
//! [Weapon] → [Cleave Rule] → [Bonus Multiplier] → [Adjusted Weapon]
//! ```
//!
//! 1. The **cleave rule** decides whether each attack hits every target in
//!    its arc
//! 2. The **bonus multiplier** scales damage by target class resistance and
//!    by the number of targets hit
//! 3. The **adjuster** applies both, plus a mounted multiplier, to all
//!    twelve attack records
//!
//! ## Example
//!
//! ```rust
//! use armory::*;
//!
//! let weapons = WeaponCatalog::builtin().unwrap();
//! let targets = TargetCatalog::builtin();
//!
//! let axe = weapons.find_weapon_by_name("Axe").unwrap();
//! let footman = targets.find_target_by_name("footman").unwrap();
//!
//! // Three footmen in the arc of a chop heavy.
//! let adjusted = adjust_weapon(axe, 3, 1.0, footman);
//! let expected = axe.attacks.slash.heavy.damage * 1.175 * 3.0;
//! assert!((adjusted.attacks.slash.heavy.damage - expected).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`damage`] - Damage types
//! - [`target`] - Target classes and resistance tables
//! - [`weapon`] - Weapon records
//! - [`catalog`] - Weapon and target catalogs with lookups
//! - [`path`] - Stat path extraction and typed attack selectors
//! - [`cleave`] - Cleave rule
//! - [`bonus`] - Bonus multiplier function
//! - [`adjust`] - Weapon adjuster and combat conditions
//! - [`derived`] - Stamina damage and average swing
//! - [`matchup`] - Weapon versus weapon scoring
//! - [`constants`] - Balance constants
//! - [`error`] - Error types

pub mod adjust;
pub mod bonus;
pub mod catalog;
pub mod cleave;
pub mod constants;
pub mod damage;
pub mod derived;
pub mod error;
pub mod matchup;
pub mod path;
pub mod target;
pub mod weapon;

// Re-export main types for convenience
pub use adjust::{adjust_weapon, CombatConditions};
pub use bonus::bonus_mult;
pub use catalog::{TargetCatalog, WeaponCatalog};
pub use cleave::{can_cleave, can_cleave_field};
pub use damage::DamageType;
pub use error::ArmoryError;
pub use path::{extract, extract_number, AttackField, FieldValue};
pub use target::{CharacterClass, CharacterSubclass, DamageMultipliers, TargetClass};
pub use weapon::{Attack, Attacks, Swing, Weapon, WeaponType};

// Re-export derived stats and matchups
pub use derived::{stamina_damage, with_average_swing, with_stamina_damage};
pub use matchup::{matchup, matchup_table, MatchupRow};
