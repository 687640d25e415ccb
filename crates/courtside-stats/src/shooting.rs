use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use courtside_session::ShotLedger;
use courtside_types::{PlayRecord, PlayerName, Quarter, StartKind};

use crate::round1;

/// Shot percentage for one `(quarter, play start)` group of plays.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuarterStartShooting {
    pub quarter: Quarter,
    pub start: StartKind,
    pub percentage: f64,
}

/// One flattened ledger entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuarterShootingRow {
    pub player: PlayerName,
    pub quarter: Quarter,
    pub scored: u32,
    pub missed: u32,
}

/// Whole-game shooting line for one player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShootingLine {
    pub scored: u32,
    pub missed: u32,
    pub total: u32,
    pub percentage: f64,
}

/// Per-quarter shooting percentage for one player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerQuarterPercentage {
    pub player: PlayerName,
    pub quarter: Quarter,
    pub percentage: f64,
}

/// `scored / total` as a rounded percentage, with the empty case explicit:
/// no attempts means 0%, never a division.
pub fn shooting_percentage(scored: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round1(f64::from(scored) * 100.0 / f64::from(total))
}

/// Shot percentage per `(quarter, play start)` over the plays that carry a
/// shot result. A group whose plays were all `Lost` has nothing to divide
/// by and is omitted rather than reported as zero.
///
/// Scan complexity: O(n).
pub fn quarter_shot_percentage(plays: &[PlayRecord]) -> Vec<QuarterStartShooting> {
    let mut groups: BTreeMap<(Quarter, StartKind), (u32, u32)> = BTreeMap::new();
    for play in plays {
        if let Some(made) = play.shot_made() {
            let (makes, attempts) = groups.entry((play.quarter, play.start_kind())).or_default();
            if made {
                *makes += 1;
            }
            *attempts += 1;
        }
    }
    groups
        .into_iter()
        .map(|((quarter, start), (makes, attempts))| QuarterStartShooting {
            quarter,
            start,
            percentage: round1(f64::from(makes) * 100.0 / f64::from(attempts)),
        })
        .collect()
}

/// The ledger flattened to rows in `(quarter, player)` order.
pub fn player_shooting_summary(shots: &ShotLedger) -> Vec<QuarterShootingRow> {
    shots
        .entries()
        .map(|(quarter, player, tally)| QuarterShootingRow {
            player: player.clone(),
            quarter,
            scored: tally.scored,
            missed: tally.missed,
        })
        .collect()
}

/// Whole-game shooting line per player, summed across quarters.
///
/// Scan complexity: O(n) over ledger entries.
pub fn shooting_percentage_by_player(shots: &ShotLedger) -> BTreeMap<PlayerName, ShootingLine> {
    let mut lines: BTreeMap<PlayerName, ShootingLine> = BTreeMap::new();
    for (_, player, tally) in shots.entries() {
        let line = lines.entry(player.clone()).or_insert(ShootingLine {
            scored: 0,
            missed: 0,
            total: 0,
            percentage: 0.0,
        });
        line.scored += tally.scored;
        line.missed += tally.missed;
    }
    for line in lines.values_mut() {
        line.total = line.scored + line.missed;
        line.percentage = shooting_percentage(line.scored, line.total);
    }
    lines
}

/// Shot percentage per `(player, quarter)`, same percentage rule at finer
/// granularity. Rows sort by player, then quarter.
pub fn shooting_percentage_by_player_and_quarter(
    shots: &ShotLedger,
) -> Vec<PlayerQuarterPercentage> {
    let mut rows: Vec<PlayerQuarterPercentage> = shots
        .entries()
        .map(|(quarter, player, tally)| PlayerQuarterPercentage {
            player: player.clone(),
            quarter,
            percentage: shooting_percentage(tally.scored, tally.total()),
        })
        .collect();
    rows.sort_by(|a, b| (&a.player, a.quarter).cmp(&(&b.player, b.quarter)));
    rows
}
