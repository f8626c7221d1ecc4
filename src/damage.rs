//! Damage type module.
//!
//! Provides the closed set of physical damage categories that decide how
//! much extra damage an armored target class takes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical damage category of a weapon or attack.
///
/// Serialized as `"Cut"`, `"Chop"` or `"Blunt"`.
///
/// # Examples
///
/// ```rust
/// use armory::DamageType;
///
/// let dt: DamageType = serde_json::from_str("\"Chop\"").unwrap();
/// assert_eq!(dt, DamageType::Chop);
/// assert_eq!(dt.to_string(), "Chop");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DamageType {
    Cut,
    Chop,
    Blunt,
}

impl DamageType {
    /// Every damage type, in declaration order.
    pub const ALL: [DamageType; 3] = [DamageType::Cut, DamageType::Chop, DamageType::Blunt];

    /// Get the display name of this damage type.
    pub fn as_str(self) -> &'static str {
        match self {
            DamageType::Cut => "Cut",
            DamageType::Chop => "Chop",
            DamageType::Blunt => "Blunt",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
