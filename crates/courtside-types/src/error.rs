use std::fmt;

/// Errors raised while assembling a roster.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("roster must contain at least one player")]
    Empty,
    #[error("player name must not be blank")]
    BlankName,
}

/// Why a submitted candidate could not be shaped into a record.
///
/// The only rejection the model performs is a missing required field for the
/// selected discriminants. Populated fields that do not belong to the
/// selection are ignored, never an error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing selection: {0}")]
    MissingSelection(SelectionField),
}

/// The candidate field a `MissingSelection` refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionField {
    PlayStart,
    Play,
    Receiver,
    TurnoverType,
    WhoTurnover,
    WhoPlayed,
    ShotMade,
    LossType,
    WhoLost,
}

impl fmt::Display for SelectionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::PlayStart => "play start",
            Self::Play => "play",
            Self::Receiver => "receiver",
            Self::TurnoverType => "turnover type",
            Self::WhoTurnover => "who got the turnover",
            Self::WhoPlayed => "who made the play",
            Self::ShotMade => "whether the shot was made",
            Self::LossType => "how it was lost",
            Self::WhoLost => "who lost it",
        };
        f.write_str(label)
    }
}
