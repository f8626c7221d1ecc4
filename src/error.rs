//! Error types for weapon stat calculation.
//!
//! All fatal conditions are represented by the `ArmoryError` enum.
//! Normal absence (a lookup that finds nothing, an optional field that is
//! unset) is never an error and is reported through `Option` instead.

use thiserror::Error;

/// Errors that can occur while building catalogs or reading weapon stats.
///
/// # Examples
///
/// ```rust
/// use armory::ArmoryError;
///
/// let err = ArmoryError::MissingField {
///     weapon: "Axe".to_string(),
///     path: "attacks.slash.light.bogus".to_string(),
/// };
/// assert!(err.to_string().contains("attacks.slash.light.bogus"));
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ArmoryError {
    /// A required field path does not exist on a weapon record.
    ///
    /// This signals a mismatch between the caller's path literal and the
    /// weapon schema and aborts the calculation for that weapon.
    #[error("Invalid stat path for {weapon}: {path}")]
    MissingField { weapon: String, path: String },

    /// A numeric read hit a field that holds something other than a number.
    #[error("Stat {path} of {weapon} is not numeric")]
    NotNumeric { weapon: String, path: String },

    /// A weapon record failed validation.
    #[error("Invalid weapon {weapon}: {reason}")]
    InvalidWeapon { weapon: String, reason: String },

    /// Two weapons in one catalog share an identifier.
    #[error("Duplicate weapon id: {0}")]
    DuplicateWeapon(String),

    /// Catalog text could not be parsed.
    #[error("Invalid weapon catalog: {0}")]
    InvalidCatalog(String),

    /// A target class profile failed validation.
    #[error("Invalid target class {target}: {reason}")]
    InvalidTarget { target: String, reason: String },

    /// Two profiles in one target catalog share a class.
    #[error("Duplicate target class: {0}")]
    DuplicateTarget(String),

    /// A derived class was supplied where only concrete classes belong.
    #[error("Target class {0} is derived and cannot be supplied")]
    DerivedTarget(String),

    /// No target class with the given name exists.
    #[error("Unknown target class: {0}")]
    UnknownTarget(String),

    /// Combat conditions are outside their valid range.
    #[error("Invalid combat conditions: {0}")]
    InvalidConditions(String),

    /// A target catalog needs at least one concrete class to average over.
    #[error("Target catalog has no concrete classes")]
    EmptyTargetList,
}

impl From<serde_json::Error> for ArmoryError {
    fn from(err: serde_json::Error) -> Self {
        ArmoryError::InvalidCatalog(err.to_string())
    }
}
