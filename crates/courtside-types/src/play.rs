use crate::game::PlayerName;
use crate::quarter::Quarter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who an event is credited to: a named player, or nobody in particular.
///
/// Every player dropdown on the input surface offers a blank option. That
/// blank is a real recorded value with its own bucket in the aggregates,
/// not a missing field.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribution {
    Player(PlayerName),
    Unknown,
}

impl Attribution {
    pub fn player(&self) -> Option<&PlayerName> {
        match self {
            Self::Player(name) => Some(name),
            Self::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl From<PlayerName> for Attribution {
    fn from(name: PlayerName) -> Self {
        Self::Player(name)
    }
}

impl fmt::Display for Attribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player(name) => write!(f, "{name}"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// How the team came to have the ball on a turnover start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TurnoverCause {
    PickUp,
    Intercept,
    Rebound,
    OppositionError,
    OutOfCourt,
    Other,
}

impl fmt::Display for TurnoverCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::PickUp => "Pick up",
            Self::Intercept => "Intercept",
            Self::Rebound => "Rebound",
            Self::OppositionError => "Opposition error",
            Self::OutOfCourt => "Out of Court",
            Self::Other => "Other",
        };
        f.write_str(label)
    }
}

/// How a possession ended when it did not reach a shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LossCause {
    BadPass,
    BadHands,
    MissedShot,
    OutOfCourt,
    Step,
    Held,
    ShortPass,
    Other,
}

impl fmt::Display for LossCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::BadPass => "Bad Pass",
            Self::BadHands => "Bad Hands",
            Self::MissedShot => "Missed Shot",
            Self::OutOfCourt => "Out of Court",
            Self::Step => "Step",
            Self::Held => "Held",
            Self::ShortPass => "Short Pass",
            Self::Other => "Other",
        };
        f.write_str(label)
    }
}

/// Discriminant label for the start axis.
///
/// Used as a grouping key in the aggregates and as the candidate's selection
/// before the data-carrying variant is assembled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StartKind {
    CentrePass,
    Turnover,
}

impl fmt::Display for StartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::CentrePass => "Centre Pass",
            Self::Turnover => "Turnover",
        };
        f.write_str(label)
    }
}

/// Discriminant label for the play axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayKind {
    CircleEdgeFeed,
    LongFeed,
    Lost,
}

impl fmt::Display for PlayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::CircleEdgeFeed => "Circle Edge Feed",
            Self::LongFeed => "Long Feed",
            Self::Lost => "Lost",
        };
        f.write_str(label)
    }
}

/// How the recorded possession began.
///
/// Each variant carries exactly the fields its discriminant requires, so a
/// turnover can never hold a receiver and a centre pass can never hold a
/// turnover cause.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayStart {
    /// Our centre pass, received by `receiver`.
    CentrePass { receiver: Attribution },
    /// Possession won from the opposition.
    Turnover {
        cause: TurnoverCause,
        won_by: Attribution,
    },
}

impl PlayStart {
    pub fn kind(&self) -> StartKind {
        match self {
            Self::CentrePass { .. } => StartKind::CentrePass,
            Self::Turnover { .. } => StartKind::Turnover,
        }
    }
}

/// How the recorded possession played out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayOutcome {
    /// Ball fed into the circle from its edge, ending in a shot.
    CircleEdgeFeed {
        played_by: Attribution,
        shot_made: bool,
    },
    /// Long ball into the circle, ending in a shot.
    LongFeed {
        played_by: Attribution,
        shot_made: bool,
    },
    /// Possession lost before a shot went up.
    Lost {
        cause: LossCause,
        lost_by: Attribution,
    },
}

impl PlayOutcome {
    pub fn kind(&self) -> PlayKind {
        match self {
            Self::CircleEdgeFeed { .. } => PlayKind::CircleEdgeFeed,
            Self::LongFeed { .. } => PlayKind::LongFeed,
            Self::Lost { .. } => PlayKind::Lost,
        }
    }

    /// The shot result, when this outcome is shot-eligible (both feeds).
    /// A `Lost` play has no shot to report.
    pub fn shot_made(&self) -> Option<bool> {
        match self {
            Self::CircleEdgeFeed { shot_made, .. } | Self::LongFeed { shot_made, .. } => {
                Some(*shot_made)
            }
            Self::Lost { .. } => None,
        }
    }
}

/// One logged possession.
///
/// `quarter` is stamped by the session at submission time and never edited
/// afterwards. `recorded_at` is wall-clock for post-game review only; no
/// aggregate reads it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub quarter: Quarter,
    pub recorded_at: DateTime<Utc>,
    pub start: PlayStart,
    pub outcome: PlayOutcome,
}

impl PlayRecord {
    pub fn start_kind(&self) -> StartKind {
        self.start.kind()
    }

    pub fn play_kind(&self) -> PlayKind {
        self.outcome.kind()
    }

    /// Forwards to [`PlayOutcome::shot_made`].
    pub fn shot_made(&self) -> Option<bool> {
        self.outcome.shot_made()
    }
}
