//! Target class module.
//!
//! A `TargetClass` is one enemy archetype: hit points and stamina, plus
//! the damage multiplier table of its `CharacterClass`. The synthetic
//! `Average` class takes the mean of the four concrete tables; its hit
//! points and stamina are folded from the concrete profiles when a
//! [`TargetCatalog`](crate::TargetCatalog) is built.

use crate::constants::{
    FOOTMAN_BLUNT_MULTIPLIER, FOOTMAN_CHOP_MULTIPLIER, KNIGHT_BLUNT_MULTIPLIER,
    KNIGHT_CHOP_MULTIPLIER,
};
use crate::damage::DamageType;
use crate::error::ArmoryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Character class identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CharacterClass {
    Archer,
    Vanguard,
    Footman,
    Knight,
    /// Synthetic mean of all concrete classes.
    Average,
}

impl CharacterClass {
    /// The four classes that exist in game, in catalog order.
    pub const CONCRETE: [CharacterClass; 4] = [
        CharacterClass::Archer,
        CharacterClass::Vanguard,
        CharacterClass::Footman,
        CharacterClass::Knight,
    ];

    /// Get the display name of this class.
    pub fn as_str(self) -> &'static str {
        match self {
            CharacterClass::Archer => "Archer",
            CharacterClass::Vanguard => "Vanguard",
            CharacterClass::Footman => "Footman",
            CharacterClass::Knight => "Knight",
            CharacterClass::Average => "Average",
        }
    }

    /// Get the subclasses that belong to this class.
    pub fn subclasses(self) -> Vec<CharacterSubclass> {
        use CharacterSubclass::*;
        match self {
            CharacterClass::Archer => vec![Longbowman, Crossbowman, Skirmisher],
            CharacterClass::Vanguard => vec![Devastator, Raider, Ambusher],
            CharacterClass::Footman => vec![Poleman, ManAtArms, Engineer],
            CharacterClass::Knight => vec![Officer, Guardian, Crusader],
            CharacterClass::Average => vec![Average],
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Character subclass. Used for display and grouping only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterSubclass {
    Average,
    Longbowman,
    Crossbowman,
    Skirmisher,
    Devastator,
    Raider,
    Ambusher,
    Poleman,
    #[serde(rename = "Man at Arms")]
    ManAtArms,
    Engineer,
    Officer,
    Guardian,
    Crusader,
}

/// Damage multiplier per damage type.
///
/// # Examples
///
/// ```rust
/// use armory::{CharacterClass, DamageType};
///
/// let plate = CharacterClass::Knight.damage_multipliers();
/// assert_eq!(plate.get(DamageType::Blunt), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageMultipliers {
    pub cut: f64,
    pub chop: f64,
    pub blunt: f64,
}

impl DamageMultipliers {
    /// Multipliers that leave every damage type unscaled.
    pub const NEUTRAL: DamageMultipliers = DamageMultipliers {
        cut: 1.0,
        chop: 1.0,
        blunt: 1.0,
    };

    /// Create a multiplier table.
    pub fn new(cut: f64, chop: f64, blunt: f64) -> Self {
        Self { cut, chop, blunt }
    }

    /// Get the multiplier for a damage type.
    pub fn get(&self, damage_type: DamageType) -> f64 {
        match damage_type {
            DamageType::Cut => self.cut,
            DamageType::Chop => self.chop,
            DamageType::Blunt => self.blunt,
        }
    }

    /// Type-by-type mean of a non-empty set of tables.
    fn mean_of<const N: usize>(tables: [DamageMultipliers; N]) -> Self {
        let n = N as f64;
        let sum = tables.iter().fold(DamageMultipliers::new(0.0, 0.0, 0.0), |acc, t| {
            DamageMultipliers::new(acc.cut + t.cut, acc.chop + t.chop, acc.blunt + t.blunt)
        });
        DamageMultipliers::new(sum.cut / n, sum.chop / n, sum.blunt / n)
    }
}

impl CharacterClass {
    /// Damage this class takes from each damage type, relative to cut.
    ///
    /// The table is fixed per class. `Average` gets the mean of the four
    /// concrete tables.
    pub fn damage_multipliers(self) -> DamageMultipliers {
        match self {
            CharacterClass::Archer | CharacterClass::Vanguard => DamageMultipliers::NEUTRAL,
            CharacterClass::Footman => {
                DamageMultipliers::new(1.0, FOOTMAN_CHOP_MULTIPLIER, FOOTMAN_BLUNT_MULTIPLIER)
            }
            CharacterClass::Knight => {
                DamageMultipliers::new(1.0, KNIGHT_CHOP_MULTIPLIER, KNIGHT_BLUNT_MULTIPLIER)
            }
            CharacterClass::Average => DamageMultipliers::mean_of(
                CharacterClass::CONCRETE.map(CharacterClass::damage_multipliers),
            ),
        }
    }

    /// In-game hit points and stamina, as `(hp, stamina)`.
    ///
    /// `Average` gets the mean of the four concrete classes.
    pub fn base_stats(self) -> (f64, f64) {
        match self {
            CharacterClass::Archer => (90.0, 60.0),
            CharacterClass::Vanguard => (130.0, 100.0),
            CharacterClass::Footman => (150.0, 80.0),
            CharacterClass::Knight => (175.0, 80.0),
            CharacterClass::Average => {
                let stats = CharacterClass::CONCRETE.map(CharacterClass::base_stats);
                let n = stats.len() as f64;
                let hp = stats.iter().map(|(hp, _)| hp).sum::<f64>() / n;
                let stamina = stats.iter().map(|(_, stamina)| stamina).sum::<f64>() / n;
                (hp, stamina)
            }
        }
    }
}

/// One enemy archetype.
///
/// Hit points and stamina are per profile. Damage multipliers always come
/// from the class, so a profile can never disagree with its class table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetClass {
    pub class: CharacterClass,
    pub subclasses: Vec<CharacterSubclass>,
    pub hp: f64,
    pub stamina: f64,
}

impl TargetClass {
    /// Create a target class.
    pub fn new(class: CharacterClass, subclasses: Vec<CharacterSubclass>, hp: f64, stamina: f64) -> Self {
        Self {
            class,
            subclasses,
            hp,
            stamina,
        }
    }

    /// The in-game profile of a class.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use armory::{CharacterClass, DamageType, TargetClass};
    ///
    /// let knight = TargetClass::standard(CharacterClass::Knight);
    /// assert_eq!(knight.hp, 175.0);
    /// assert_eq!(knight.damage_multiplier(DamageType::Chop), 1.25);
    ///
    /// let average = TargetClass::standard(CharacterClass::Average);
    /// assert_eq!(average.hp, 136.25);
    /// ```
    pub fn standard(class: CharacterClass) -> Self {
        let (hp, stamina) = class.base_stats();
        Self::new(class, class.subclasses(), hp, stamina)
    }

    /// Fold concrete profiles into the synthetic `Average` class.
    ///
    /// Hit points and stamina are the means of the given profiles. Any
    /// `Average` entries in `classes` are skipped. Returns `None` when no
    /// concrete class remains.
    pub fn average_of<'a>(classes: impl IntoIterator<Item = &'a TargetClass>) -> Option<Self> {
        let concrete: Vec<&TargetClass> = classes.into_iter().filter(|t| !t.is_average()).collect();
        if concrete.is_empty() {
            return None;
        }
        let n = concrete.len() as f64;
        let hp = concrete.iter().map(|t| t.hp).sum::<f64>() / n;
        let stamina = concrete.iter().map(|t| t.stamina).sum::<f64>() / n;
        Some(Self::new(
            CharacterClass::Average,
            CharacterClass::Average.subclasses(),
            hp,
            stamina,
        ))
    }

    /// Check that the profile is usable.
    ///
    /// Hit points, stamina and every damage multiplier must be finite and
    /// positive.
    pub fn validate(&self) -> Result<(), ArmoryError> {
        for (key, value) in [("hp", self.hp), ("stamina", self.stamina)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ArmoryError::InvalidTarget {
                    target: self.name().to_string(),
                    reason: format!("{key} must be a positive number, got {value}"),
                });
            }
        }
        for dt in DamageType::ALL {
            let value = self.damage_multiplier(dt);
            if !value.is_finite() || value <= 0.0 {
                return Err(ArmoryError::InvalidTarget {
                    target: self.name().to_string(),
                    reason: format!("{dt} multiplier must be a positive number, got {value}"),
                });
            }
        }
        Ok(())
    }

    /// Get the display name of this class.
    pub fn name(&self) -> &'static str {
        self.class.as_str()
    }

    /// Whether this is the synthetic aggregate class.
    pub fn is_average(&self) -> bool {
        self.class == CharacterClass::Average
    }

    /// The multiplier table of this profile's class.
    pub fn multipliers(&self) -> DamageMultipliers {
        self.class.damage_multipliers()
    }

    /// Scaling applied to damage of the given type against this class.
    pub fn damage_multiplier(&self, damage_type: DamageType) -> f64 {
        self.multipliers().get(damage_type)
    }
}
