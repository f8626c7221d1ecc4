//! Matchup scoring.
//!
//! Compares two weapons stat by stat. Every stat where one weapon is
//! strictly better earns it that stat's weight, and costs the other weapon
//! the same amount. Timing stats carry negative weights since shorter is
//! better.
//!
//! Before comparing, damage is scaled by the `Average` class multiplier
//! for each weapon's damage type, and stamina damage by how much of it the
//! opposing weapon fails to negate.

use crate::catalog::TargetCatalog;
use crate::constants::{HEAVY_WEIGHT, LIGHT_WEIGHT, MATCHUP_TIE_MARGIN};
use crate::path::{AttackField, SpecialKind, SwingKind};
use crate::weapon::{Attack, Weapon};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Weights of per-attack stats.
pub const STAT_WEIGHTS: [(AttackStat, f64); 8] = [
    (AttackStat::Windup, -0.125),
    (AttackStat::Riposte, -0.125),
    (AttackStat::Release, 0.25),
    (AttackStat::Recovery, -0.25),
    (AttackStat::Combo, -0.25),
    (AttackStat::Damage, 1.0),
    (AttackStat::StaminaDamage, 1.0),
    (AttackStat::Range, 1.0),
];

/// Weight of swing-level range and alt range.
pub const SWING_RANGE_WEIGHT: f64 = 1.0;

/// Per-attack stat compared in a matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackStat {
    Windup,
    Riposte,
    Release,
    Recovery,
    Combo,
    Damage,
    StaminaDamage,
    Range,
}

impl AttackStat {
    /// Read this stat, treating an unset one as 0.
    pub fn read(self, attack: &Attack) -> f64 {
        match self {
            AttackStat::Windup => attack.windup,
            AttackStat::Riposte => attack.riposte.unwrap_or(0.0),
            AttackStat::Release => attack.release,
            AttackStat::Recovery => attack.recovery,
            AttackStat::Combo => attack.combo,
            AttackStat::Damage => attack.damage,
            AttackStat::StaminaDamage => attack.stamina_damage.unwrap_or(0.0),
            AttackStat::Range => attack.range.unwrap_or(0.0),
        }
    }
}

/// Weight of a swing family in a matchup.
pub fn swing_weight(kind: SwingKind) -> f64 {
    match kind {
        SwingKind::Average => 0.0,
        SwingKind::Slash | SwingKind::Overhead | SwingKind::Stab => 1.0,
    }
}

/// Weight of a special attack in a matchup.
pub fn special_weight(_kind: SpecialKind) -> f64 {
    0.0
}

fn winner(weight: f64, ours: f64, theirs: f64) -> f64 {
    match ours.partial_cmp(&theirs) {
        Some(Ordering::Greater) => weight,
        Some(Ordering::Less) => -weight,
        _ => 0.0,
    }
}

fn compare_attacks(weight: f64, ours: &Attack, theirs: &Attack) -> f64 {
    STAT_WEIGHTS
        .iter()
        .map(|(stat, stat_weight)| winner(weight * stat_weight, stat.read(ours), stat.read(theirs)))
        .sum()
}

/// Scale damage and stamina damage the way a matchup sees them.
fn prepare(weapon: &Weapon, opponent: &Weapon, targets: &TargetCatalog) -> Weapon {
    let damage_multiplier = targets.average().damage_multiplier(weapon.damage_type);
    let stamina_multiplier = (100.0 - opponent.stamina_damage_negation.unwrap_or(0.0)) / 100.0;

    let mut prepared = weapon.clone();
    for field in AttackField::ALL {
        let attack = field.get_mut(&mut prepared.attacks);
        attack.damage *= damage_multiplier;
        attack.stamina_damage = attack.stamina_damage.map(|s| s * stamina_multiplier);
    }
    prepared
}

/// Score `weapon` against `opponent`. Positive means `weapon` is better.
///
/// # Examples
///
/// ```rust
/// use armory::matchup::matchup;
/// use armory::{TargetCatalog, WeaponCatalog};
///
/// let weapons = WeaponCatalog::builtin().unwrap();
/// let targets = TargetCatalog::builtin();
/// let axe = weapons.find_weapon_by_id("axe").unwrap();
/// let mace = weapons.find_weapon_by_id("mace").unwrap();
///
/// assert_eq!(matchup(axe, axe, targets), 0.0);
/// assert_eq!(matchup(axe, mace, targets), -matchup(mace, axe, targets));
/// ```
pub fn matchup(weapon: &Weapon, opponent: &Weapon, targets: &TargetCatalog) -> f64 {
    let ours = prepare(weapon, opponent, targets);
    let theirs = prepare(opponent, weapon, targets);

    let mut score = 0.0;
    for kind in SwingKind::ALL {
        let weight = swing_weight(kind);
        if weight == 0.0 {
            continue;
        }
        let (a, b) = (kind.get(&ours.attacks), kind.get(&theirs.attacks));
        score += winner(weight * SWING_RANGE_WEIGHT, a.range, b.range);
        score += winner(weight * SWING_RANGE_WEIGHT, a.alt_range, b.alt_range);
        score += compare_attacks(weight * LIGHT_WEIGHT, &a.light, &b.light);
        score += compare_attacks(weight * HEAVY_WEIGHT, &a.heavy, &b.heavy);
    }
    for kind in SpecialKind::ALL {
        let weight = special_weight(kind);
        if weight == 0.0 {
            continue;
        }
        let field = AttackField::Special(kind);
        score += compare_attacks(weight, field.get(&ours.attacks), field.get(&theirs.attacks));
    }
    score
}

/// One weapon's results against a whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchupRow {
    pub name: String,
    /// Score against each weapon, in catalog order, itself included.
    pub scores: Vec<(String, f64)>,
    pub average_matchup: f64,
    pub winning_matchups: usize,
    pub losing_matchups: usize,
    pub tied_matchups: usize,
}

/// Score every weapon against every other, best average first.
pub fn matchup_table(weapons: &[Weapon], targets: &TargetCatalog) -> Vec<MatchupRow> {
    let mut rows: Vec<MatchupRow> = weapons
        .iter()
        .map(|weapon| {
            let scores: Vec<(String, f64)> = weapons
                .iter()
                .map(|other| (other.name.clone(), matchup(weapon, other, targets)))
                .collect();
            let winning = scores.iter().filter(|(_, s)| *s > MATCHUP_TIE_MARGIN).count();
            let losing = scores.iter().filter(|(_, s)| *s < -MATCHUP_TIE_MARGIN).count();
            let average = if scores.is_empty() {
                0.0
            } else {
                scores.iter().map(|(_, s)| s).sum::<f64>() / scores.len() as f64
            };
            MatchupRow {
                name: weapon.name.clone(),
                average_matchup: average,
                winning_matchups: winning,
                losing_matchups: losing,
                tied_matchups: scores.len() - winning - losing,
                scores,
            }
        })
        .collect();

    rows.sort_by(|a, b| b.average_matchup.total_cmp(&a.average_matchup));
    debug!(weapons = weapons.len(), "computed matchup table");
    rows
}
