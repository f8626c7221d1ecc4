//! Named balance constants.
//!
//! Every tuning number used by the calculations lives here as an immutable
//! constant. Nothing in the crate mutates these at runtime.

/// Damage taken by a Footman from chop attacks, relative to cut.
pub const FOOTMAN_CHOP_MULTIPLIER: f64 = 1.175;

/// Damage taken by a Footman from blunt attacks, relative to cut.
pub const FOOTMAN_BLUNT_MULTIPLIER: f64 = 1.35;

/// Damage taken by a Knight from chop attacks, relative to cut.
pub const KNIGHT_CHOP_MULTIPLIER: f64 = 1.25;

/// Damage taken by a Knight from blunt attacks, relative to cut.
pub const KNIGHT_BLUNT_MULTIPLIER: f64 = 1.5;

/// Share of an attack's damage dealt to a blocker's stamina.
pub const BASE_STAMINA_DAMAGE_MULTIPLIER: f64 = 0.3;

/// Extra stamina damage factor for chop attacks.
pub const CHOP_STAMINA_DAMAGE_FACTOR: f64 = 1.1;

/// Extra stamina damage factor for blunt attacks.
pub const BLUNT_STAMINA_DAMAGE_FACTOR: f64 = 1.25;

/// Weight of light attack variants in a matchup.
pub const LIGHT_WEIGHT: f64 = 1.0;

/// Weight of heavy attack variants in a matchup.
pub const HEAVY_WEIGHT: f64 = 1.0;

/// Scores above this margin count as a won matchup, below its negation as lost.
pub const MATCHUP_TIE_MARGIN: f64 = 0.01;
