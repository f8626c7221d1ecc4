//! Matchups example: Rank every built-in weapon against the rest
//!
//! This example demonstrates:
//! - Deriving stamina damage and the average swing
//! - Scoring weapons pairwise
//! - Printing the ranked matchup table

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

    let derived: Vec<Weapon> = weapons
        .iter()
        .map(|weapon| with_average_swing(&with_stamina_damage(weapon)))
        .collect();

    println!("=== Matchup Table ===\n");
    println!(
        "  {:<12} {:>8} {:>5} {:>5} {:>5}",
        "Weapon", "Average", "Win", "Loss", "Tie"
    );
    for row in matchup_table(&derived, targets) {
        println!(
            "  {:<12} {:>8.3} {:>5} {:>5} {:>5}",
            row.name,
            row.average_matchup,
            row.winning_matchups,
            row.losing_matchups,
            row.tied_matchups
        );
    }
    Ok(())
}
