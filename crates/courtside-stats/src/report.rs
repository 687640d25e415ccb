use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use courtside_session::Session;
use courtside_types::{Attribution, LossCause, PlayKind, PlayerName, TurnoverCause};

use crate::plays::{
    Conversion, GameFlowPoint, conversion_rate_by_play_type, game_flow, loss_causes,
    lost_plays_by_player, play_type_distribution, turnover_causes, turnovers_by_player,
};
use crate::shooting::{
    PlayerQuarterPercentage, QuarterShootingRow, QuarterStartShooting, ShootingLine,
    player_shooting_summary, quarter_shot_percentage, shooting_percentage_by_player,
    shooting_percentage_by_player_and_quarter,
};

/// Every table the review surface renders, computed in one pass over a
/// session snapshot.
///
/// Works the same on a live session (the in-game sidebar) and a finished
/// one; the caller decides when to rebuild.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub quarter_shooting: Vec<QuarterStartShooting>,
    pub shooting_summary: Vec<QuarterShootingRow>,
    pub shooting_by_player: BTreeMap<PlayerName, ShootingLine>,
    pub shooting_by_player_and_quarter: Vec<PlayerQuarterPercentage>,
    pub turnovers_by_player: BTreeMap<Attribution, u32>,
    pub lost_plays_by_player: BTreeMap<Attribution, u32>,
    pub conversion_by_play_type: BTreeMap<PlayKind, Conversion>,
    pub play_type_distribution: BTreeMap<PlayKind, u32>,
    pub turnover_causes: BTreeMap<TurnoverCause, u32>,
    pub loss_causes: BTreeMap<LossCause, u32>,
    pub game_flow: Vec<GameFlowPoint>,
}

impl MatchReport {
    /// Compute every table from one consistent view of the session.
    ///
    /// Callers sharing the session across threads should hold a read guard
    /// for the duration of this call, which is how the tables stay mutually
    /// consistent.
    pub fn build(session: &Session) -> Self {
        let plays = session.plays();
        let shots = session.shots();
        Self {
            quarter_shooting: quarter_shot_percentage(plays),
            shooting_summary: player_shooting_summary(shots),
            shooting_by_player: shooting_percentage_by_player(shots),
            shooting_by_player_and_quarter: shooting_percentage_by_player_and_quarter(shots),
            turnovers_by_player: turnovers_by_player(plays),
            lost_plays_by_player: lost_plays_by_player(plays),
            conversion_by_play_type: conversion_rate_by_play_type(plays),
            play_type_distribution: play_type_distribution(plays),
            turnover_causes: turnover_causes(plays),
            loss_causes: loss_causes(plays),
            game_flow: game_flow(plays),
        }
    }
}
