use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

use courtside_types::{GameDescriptor, PlayCandidate, PlayRecord, PlayerName, Quarter, Roster};

use crate::error::SessionError;
use crate::ledger::ShotLedger;

/// All state for one scored game, owned by a single scorer.
///
/// The play log is append-only: records are stamped with the current quarter
/// on the way in and only ever handed back as shared slices. The shot ledger
/// is kept apart from the log. A `shot_made` flag on a play is context for
/// that play, while a ledger entry is a raw attempt; the two are never
/// merged or reconciled.
#[derive(Clone, Debug, Default)]
pub struct Session {
    game: Option<GameDescriptor>,
    quarter: Quarter,
    plays: Vec<PlayRecord>,
    shots: ShotLedger,
    finished: bool,
}

impl Session {
    /// A fresh session with no game configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the game and open the first quarter.
    pub fn start_game(&mut self, game: GameDescriptor) -> Result<(), SessionError> {
        if self.game.is_some() {
            return Err(SessionError::AlreadyStarted);
        }
        tracing::info!(
            target: "session",
            "game started against {} at {} with {} players",
            game.opposition,
            game.venue,
            game.team.len()
        );
        self.game = Some(game);
        self.quarter = Quarter::FIRST;
        self.finished = false;
        Ok(())
    }

    /// Validate and append one play, stamped with the current quarter.
    ///
    /// A rejected candidate leaves the log and ledger untouched; on success
    /// the stored record is returned.
    pub fn submit_play(&mut self, candidate: &PlayCandidate) -> Result<PlayRecord, SessionError> {
        self.guard_active()?;
        let record = PlayRecord::validate(candidate, self.quarter, Utc::now())
            .inspect_err(|err| tracing::warn!(target: "session", "play rejected: {err}"))?;
        tracing::debug!(
            target: "session",
            "play recorded in {}: {} -> {}",
            record.quarter,
            record.start_kind(),
            record.play_kind()
        );
        self.plays.push(record.clone());
        Ok(record)
    }

    /// Count one shot attempt for `player` in the current quarter.
    ///
    /// Ledger entries are independent of the play log; recording a shot
    /// never appends a play.
    pub fn record_shot(&mut self, player: &PlayerName, made: bool) -> Result<(), SessionError> {
        self.guard_active()?;
        tracing::debug!(
            target: "session",
            "shot {} by {} in {}",
            if made { "scored" } else { "missed" },
            player,
            self.quarter
        );
        self.shots.record(self.quarter, player.clone(), made);
        Ok(())
    }

    /// Move to the next quarter. Only the final quarter refuses.
    pub fn advance_quarter(&mut self) -> Result<(), SessionError> {
        match self.quarter.next() {
            Some(next) => {
                tracing::info!(target: "session", "advanced to {next}");
                self.quarter = next;
                Ok(())
            }
            None => Err(SessionError::FinalQuarter),
        }
    }

    /// Close the game. Only available in the final quarter; afterwards the
    /// log and the ledger are read-only inputs to aggregation. The quarter
    /// is the only gate: finishing is reachable before any game starts,
    /// and `start_game` clears it when it opens Q1.
    pub fn finish_game(&mut self) -> Result<(), SessionError> {
        if !self.quarter.is_final() {
            return Err(SessionError::NotFinalQuarter);
        }
        tracing::info!(target: "session", "game finished");
        self.finished = true;
        Ok(())
    }

    fn guard_active(&self) -> Result<(), SessionError> {
        if self.game.is_none() {
            return Err(SessionError::GameNotStarted);
        }
        if self.finished {
            return Err(SessionError::GameFinished);
        }
        Ok(())
    }

    pub fn current_quarter(&self) -> Quarter {
        self.quarter
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn game(&self) -> Option<&GameDescriptor> {
        self.game.as_ref()
    }

    /// The team sheet, once a game is configured.
    pub fn roster(&self) -> Option<&Roster> {
        self.game.as_ref().map(|game| &game.team)
    }

    /// Every submitted play in submission order.
    pub fn plays(&self) -> &[PlayRecord] {
        &self.plays
    }

    pub fn shots(&self) -> &ShotLedger {
        &self.shots
    }

    /// Where the session sits in its forward-only lifecycle.
    pub fn phase(&self) -> SessionPhase {
        if self.game.is_none() {
            SessionPhase::NotStarted
        } else if self.finished {
            SessionPhase::Finished
        } else {
            SessionPhase::Active {
                quarter: self.quarter,
            }
        }
    }
}

/// Derived lifecycle position. Not stored; computed from the session
/// fields on demand, so it can never disagree with them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    NotStarted,
    Active { quarter: Quarter },
    /// Terminal.
    Finished,
}

impl SessionPhase {
    /// Whether the session has reached its terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "NotStarted"),
            Self::Active { quarter } => write!(f, "Active({quarter})"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}
