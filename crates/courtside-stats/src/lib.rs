//! Pure derivations over a session snapshot.
//!
//! Every function here is read-only and total: an empty log or ledger maps
//! to an empty table, never an error. Percentages are 0 to 100, rounded to
//! one decimal place, and identical for a live game and a finished one.

pub mod plays;
pub mod report;
pub mod shooting;

pub use plays::{
    Conversion, GameFlowPoint, conversion_rate_by_play_type, game_flow, loss_causes,
    lost_plays_by_player, play_type_distribution, turnover_causes, turnovers_by_player,
};
pub use report::MatchReport;
pub use shooting::{
    PlayerQuarterPercentage, QuarterShootingRow, QuarterStartShooting, ShootingLine,
    player_shooting_summary, quarter_shot_percentage, shooting_percentage,
    shooting_percentage_by_player, shooting_percentage_by_player_and_quarter,
};

/// Round to one decimal place. All percentage outputs go through here.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
