use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use courtside_types::{
    Attribution, LossCause, PlayKind, PlayOutcome, PlayRecord, PlayStart, Quarter, TurnoverCause,
};

use crate::round1;

/// Attempts and makes for one play type, over shot-eligible plays.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub attempts: u32,
    pub made: u32,
    pub rate: f64,
}

/// Number of plays of one type within one quarter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFlowPoint {
    pub quarter: Quarter,
    pub play: PlayKind,
    pub count: u32,
}

/// Turnovers won, keyed by who is credited. The unattributed bucket is a
/// real category and keeps its own count.
///
/// Scan complexity: O(n).
pub fn turnovers_by_player(plays: &[PlayRecord]) -> BTreeMap<Attribution, u32> {
    let mut counts = BTreeMap::new();
    for play in plays {
        if let PlayStart::Turnover { won_by, .. } = &play.start {
            *counts.entry(won_by.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Plays lost, keyed by who is charged with the loss.
///
/// Scan complexity: O(n).
pub fn lost_plays_by_player(plays: &[PlayRecord]) -> BTreeMap<Attribution, u32> {
    let mut counts = BTreeMap::new();
    for play in plays {
        if let PlayOutcome::Lost { lost_by, .. } = &play.outcome {
            *counts.entry(lost_by.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Conversion per play type over the plays that carry a shot result.
///
/// A group only exists once an eligible play produced it, so `attempts` is
/// always positive here, unlike the per-player shooting line where an empty
/// total is possible and guarded.
///
/// Scan complexity: O(n).
pub fn conversion_rate_by_play_type(plays: &[PlayRecord]) -> BTreeMap<PlayKind, Conversion> {
    let mut groups: BTreeMap<PlayKind, (u32, u32)> = BTreeMap::new();
    for play in plays {
        if let Some(made) = play.shot_made() {
            let (attempts, makes) = groups.entry(play.play_kind()).or_default();
            *attempts += 1;
            if made {
                *makes += 1;
            }
        }
    }
    groups
        .into_iter()
        .map(|(kind, (attempts, makes))| {
            let conversion = Conversion {
                attempts,
                made: makes,
                rate: round1(f64::from(makes) * 100.0 / f64::from(attempts)),
            };
            (kind, conversion)
        })
        .collect()
}

/// How often each play type occurred, over every record.
///
/// Scan complexity: O(n).
pub fn play_type_distribution(plays: &[PlayRecord]) -> BTreeMap<PlayKind, u32> {
    let mut counts = BTreeMap::new();
    for play in plays {
        *counts.entry(play.play_kind()).or_insert(0) += 1;
    }
    counts
}

/// Why possessions were won, over turnover starts.
///
/// Scan complexity: O(n).
pub fn turnover_causes(plays: &[PlayRecord]) -> BTreeMap<TurnoverCause, u32> {
    let mut counts = BTreeMap::new();
    for play in plays {
        if let PlayStart::Turnover { cause, .. } = &play.start {
            *counts.entry(*cause).or_insert(0) += 1;
        }
    }
    counts
}

/// Why possessions were lost, over lost plays.
///
/// Scan complexity: O(n).
pub fn loss_causes(plays: &[PlayRecord]) -> BTreeMap<LossCause, u32> {
    let mut counts = BTreeMap::new();
    for play in plays {
        if let PlayOutcome::Lost { cause, .. } = &play.outcome {
            *counts.entry(*cause).or_insert(0) += 1;
        }
    }
    counts
}

/// Play counts per `(quarter, play type)`, quarter ascending. Combinations
/// that never occurred are absent rather than zero rows.
///
/// Scan complexity: O(n).
pub fn game_flow(plays: &[PlayRecord]) -> Vec<GameFlowPoint> {
    let mut counts: BTreeMap<(Quarter, PlayKind), u32> = BTreeMap::new();
    for play in plays {
        *counts.entry((play.quarter, play.play_kind())).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|((quarter, play), count)| GameFlowPoint {
            quarter,
            play,
            count,
        })
        .collect()
}
