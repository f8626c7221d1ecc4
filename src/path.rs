//! Stat path module.
//!
//! Resolves dot-separated field paths such as `attacks.slash.light.damage`
//! against a [`Weapon`]. Each segment is matched against the typed record
//! at the current level, so a path can only ever reach real struct fields.
//!
//! The twelve attack locations are also available as the [`AttackField`]
//! selector, which reads and writes attacks directly without any string
//! handling.

use crate::damage::DamageType;
use crate::error::ArmoryError;
use crate::weapon::{Attack, Attacks, Swing, Weapon};
use std::fmt;

/// Value found at the end of a stat path.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Flag(bool),
    DamageType(DamageType),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Get the numeric value, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the boolean value, if this is a flag.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

/// One step of a path walk.
enum Node<'a> {
    Weapon(&'a Weapon),
    Attacks(&'a Attacks),
    Swing(&'a Swing),
    Attack(&'a Attack),
    Leaf(FieldValue),
}

/// Outcome of stepping into one segment.
enum Step<'a> {
    Found(Node<'a>),
    /// The key exists in the schema but this record leaves it unset.
    Unset,
    /// The key does not exist at this level.
    Unknown,
}

fn optional_number(value: Option<f64>) -> Step<'static> {
    value.map_or(Step::Unset, |n| Step::Found(Node::Leaf(FieldValue::Number(n))))
}

impl<'a> Node<'a> {
    fn step(&self, segment: &str) -> Step<'a> {
        match self {
            Node::Weapon(w) => match segment {
                "id" => Step::Found(Node::Leaf(FieldValue::Text(w.id.clone()))),
                "name" => Step::Found(Node::Leaf(FieldValue::Text(w.name.clone()))),
                "aliases" => Step::Found(Node::Leaf(FieldValue::List(w.aliases.clone()))),
                "classes" => Step::Found(Node::Leaf(FieldValue::List(
                    w.classes.iter().map(|c| c.as_str().to_string()).collect(),
                ))),
                "weaponTypes" => Step::Found(Node::Leaf(FieldValue::List(
                    w.weapon_types.iter().map(|t| t.as_str().to_string()).collect(),
                ))),
                "damageType" => Step::Found(Node::Leaf(FieldValue::DamageType(w.damage_type))),
                "staminaDamageNegation" => optional_number(w.stamina_damage_negation),
                "attacks" => Step::Found(Node::Attacks(&w.attacks)),
                _ => Step::Unknown,
            },
            Node::Attacks(a) => match segment {
                "average" => Step::Found(Node::Swing(&a.average)),
                "slash" => Step::Found(Node::Swing(&a.slash)),
                "overhead" => Step::Found(Node::Swing(&a.overhead)),
                "stab" => Step::Found(Node::Swing(&a.stab)),
                "sprintAttack" => Step::Found(Node::Attack(&a.sprint_attack)),
                "sprintCharge" => Step::Found(Node::Attack(&a.sprint_charge)),
                "special" => Step::Found(Node::Attack(&a.special)),
                "throw" => Step::Found(Node::Attack(&a.throw)),
                _ => Step::Unknown,
            },
            Node::Swing(s) => match segment {
                "range" => Step::Found(Node::Leaf(FieldValue::Number(s.range))),
                "altRange" => Step::Found(Node::Leaf(FieldValue::Number(s.alt_range))),
                "light" => Step::Found(Node::Attack(&s.light)),
                "heavy" => Step::Found(Node::Attack(&s.heavy)),
                _ => Step::Unknown,
            },
            Node::Attack(a) => match segment {
                "damage" => Step::Found(Node::Leaf(FieldValue::Number(a.damage))),
                "holding" => Step::Found(Node::Leaf(FieldValue::Number(a.holding))),
                "windup" => Step::Found(Node::Leaf(FieldValue::Number(a.windup))),
                "release" => Step::Found(Node::Leaf(FieldValue::Number(a.release))),
                "recovery" => Step::Found(Node::Leaf(FieldValue::Number(a.recovery))),
                "combo" => Step::Found(Node::Leaf(FieldValue::Number(a.combo))),
                "riposte" => optional_number(a.riposte),
                "thwack" => optional_number(a.thwack),
                "staminaDamage" => optional_number(a.stamina_damage),
                "range" => optional_number(a.range),
                "cleaveOverride" => a
                    .cleave_override
                    .map_or(Step::Unset, |b| Step::Found(Node::Leaf(FieldValue::Flag(b)))),
                "damageTypeOverride" => a
                    .damage_type_override
                    .map_or(Step::Unset, |dt| Step::Found(Node::Leaf(FieldValue::DamageType(dt)))),
                _ => Step::Unknown,
            },
            Node::Leaf(_) => Step::Unknown,
        }
    }
}

/// Full resolution of a path.
enum Resolution {
    Value(FieldValue),
    /// The final segment names an optional field that is unset.
    Unset,
    /// Some segment does not exist, or the path stops at a record.
    Missing,
}

fn resolve(weapon: &Weapon, path: &str) -> Resolution {
    let mut node = Node::Weapon(weapon);
    let mut segments = path.split('.').peekable();
    while let Some(segment) = segments.next() {
        node = match node.step(segment) {
            Step::Found(next) => next,
            Step::Unset if segments.peek().is_none() => return Resolution::Unset,
            Step::Unset | Step::Unknown => return Resolution::Missing,
        };
    }
    match node {
        Node::Leaf(value) => Resolution::Value(value),
        _ => Resolution::Missing,
    }
}

/// Read the value at `path` on `weapon`.
///
/// When a segment does not exist on the record, or names an optional field
/// that is unset, the result depends on `optional`: `Ok(None)` when it is
/// true, `Err(ArmoryError::MissingField)` when it is false. Paths must end
/// at a value; a path that stops at a record (`attacks.slash`) is treated as
/// missing.
///
/// # Examples
///
/// ```rust
/// use armory::path::{extract, FieldValue};
/// use armory::{ArmoryError, WeaponCatalog};
///
/// let catalog = WeaponCatalog::builtin().unwrap();
/// let axe = catalog.find_weapon_by_id("axe").unwrap();
///
/// let damage = extract(axe, "attacks.slash.light.damage", false).unwrap();
/// assert_eq!(damage, Some(FieldValue::Number(axe.attacks.slash.light.damage)));
///
/// assert_eq!(extract(axe, "attacks.slash.light.bogus", true), Ok(None));
/// assert!(matches!(
///     extract(axe, "attacks.slash.light.bogus", false),
///     Err(ArmoryError::MissingField { .. })
/// ));
/// ```
pub fn extract(weapon: &Weapon, path: &str, optional: bool) -> Result<Option<FieldValue>, ArmoryError> {
    match resolve(weapon, path) {
        Resolution::Value(value) => Ok(Some(value)),
        Resolution::Unset | Resolution::Missing if optional => Ok(None),
        Resolution::Unset | Resolution::Missing => Err(ArmoryError::MissingField {
            weapon: weapon.name.clone(),
            path: path.to_string(),
        }),
    }
}

/// Read a numeric stat, treating an unset optional field as 0.
///
/// A path that names no field at all is still an error, as is a field that
/// holds something other than a number.
pub fn extract_number(weapon: &Weapon, path: &str) -> Result<f64, ArmoryError> {
    match resolve(weapon, path) {
        Resolution::Value(value) => value.as_f64().ok_or_else(|| ArmoryError::NotNumeric {
            weapon: weapon.name.clone(),
            path: path.to_string(),
        }),
        Resolution::Unset => Ok(0.0),
        Resolution::Missing => Err(ArmoryError::MissingField {
            weapon: weapon.name.clone(),
            path: path.to_string(),
        }),
    }
}

/// Swing family of a melee attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwingKind {
    Average,
    Slash,
    Overhead,
    Stab,
}

impl SwingKind {
    pub const ALL: [SwingKind; 4] = [
        SwingKind::Average,
        SwingKind::Slash,
        SwingKind::Overhead,
        SwingKind::Stab,
    ];

    /// Path segment of this swing.
    pub fn key(self) -> &'static str {
        match self {
            SwingKind::Average => "average",
            SwingKind::Slash => "slash",
            SwingKind::Overhead => "overhead",
            SwingKind::Stab => "stab",
        }
    }

    pub fn get(self, attacks: &Attacks) -> &Swing {
        match self {
            SwingKind::Average => &attacks.average,
            SwingKind::Slash => &attacks.slash,
            SwingKind::Overhead => &attacks.overhead,
            SwingKind::Stab => &attacks.stab,
        }
    }

    pub fn get_mut(self, attacks: &mut Attacks) -> &mut Swing {
        match self {
            SwingKind::Average => &mut attacks.average,
            SwingKind::Slash => &mut attacks.slash,
            SwingKind::Overhead => &mut attacks.overhead,
            SwingKind::Stab => &mut attacks.stab,
        }
    }
}

/// Light or heavy variant of a swing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Light,
    Heavy,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Light, Variant::Heavy];

    /// Path segment of this variant.
    pub fn key(self) -> &'static str {
        match self {
            Variant::Light => "light",
            Variant::Heavy => "heavy",
        }
    }
}

/// Attack without light/heavy variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKind {
    SprintAttack,
    SprintCharge,
    Special,
    Throw,
}

impl SpecialKind {
    pub const ALL: [SpecialKind; 4] = [
        SpecialKind::SprintAttack,
        SpecialKind::SprintCharge,
        SpecialKind::Special,
        SpecialKind::Throw,
    ];

    /// Path segment of this special attack.
    pub fn key(self) -> &'static str {
        match self {
            SpecialKind::SprintAttack => "sprintAttack",
            SpecialKind::SprintCharge => "sprintCharge",
            SpecialKind::Special => "special",
            SpecialKind::Throw => "throw",
        }
    }
}

/// Typed selector for one of the twelve attack records of a weapon.
///
/// # Examples
///
/// ```rust
/// use armory::path::{AttackField, SwingKind, Variant};
///
/// let field = AttackField::Swing(SwingKind::Slash, Variant::Heavy);
/// assert_eq!(field.damage_path(), "attacks.slash.heavy.damage");
/// assert_eq!(AttackField::ALL.len(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackField {
    Swing(SwingKind, Variant),
    Special(SpecialKind),
}

impl AttackField {
    /// Every attack location, swings first.
    pub const ALL: [AttackField; 12] = [
        AttackField::Swing(SwingKind::Average, Variant::Light),
        AttackField::Swing(SwingKind::Average, Variant::Heavy),
        AttackField::Swing(SwingKind::Slash, Variant::Light),
        AttackField::Swing(SwingKind::Slash, Variant::Heavy),
        AttackField::Swing(SwingKind::Overhead, Variant::Light),
        AttackField::Swing(SwingKind::Overhead, Variant::Heavy),
        AttackField::Swing(SwingKind::Stab, Variant::Light),
        AttackField::Swing(SwingKind::Stab, Variant::Heavy),
        AttackField::Special(SpecialKind::SprintAttack),
        AttackField::Special(SpecialKind::SprintCharge),
        AttackField::Special(SpecialKind::Special),
        AttackField::Special(SpecialKind::Throw),
    ];

    /// Dotted path of the attack record, e.g. `attacks.stab.light`.
    pub fn path(self) -> String {
        match self {
            AttackField::Swing(swing, variant) => {
                format!("attacks.{}.{}", swing.key(), variant.key())
            }
            AttackField::Special(special) => format!("attacks.{}", special.key()),
        }
    }

    /// Dotted path of the attack's damage field.
    pub fn damage_path(self) -> String {
        format!("{}.damage", self.path())
    }

    pub fn is_heavy(self) -> bool {
        matches!(self, AttackField::Swing(_, Variant::Heavy))
    }

    pub fn get(self, attacks: &Attacks) -> &Attack {
        match self {
            AttackField::Swing(swing, Variant::Light) => &swing.get(attacks).light,
            AttackField::Swing(swing, Variant::Heavy) => &swing.get(attacks).heavy,
            AttackField::Special(SpecialKind::SprintAttack) => &attacks.sprint_attack,
            AttackField::Special(SpecialKind::SprintCharge) => &attacks.sprint_charge,
            AttackField::Special(SpecialKind::Special) => &attacks.special,
            AttackField::Special(SpecialKind::Throw) => &attacks.throw,
        }
    }

    pub fn get_mut(self, attacks: &mut Attacks) -> &mut Attack {
        match self {
            AttackField::Swing(swing, Variant::Light) => &mut swing.get_mut(attacks).light,
            AttackField::Swing(swing, Variant::Heavy) => &mut swing.get_mut(attacks).heavy,
            AttackField::Special(SpecialKind::SprintAttack) => &mut attacks.sprint_attack,
            AttackField::Special(SpecialKind::SprintCharge) => &mut attacks.sprint_charge,
            AttackField::Special(SpecialKind::Special) => &mut attacks.special,
            AttackField::Special(SpecialKind::Throw) => &mut attacks.throw,
        }
    }
}

impl fmt::Display for AttackField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
