pub mod candidate;
pub mod error;
pub mod game;
pub mod play;
pub mod quarter;
pub mod tally;

pub use candidate::PlayCandidate;
pub use error::{RosterError, SelectionField, ValidationError};
pub use game::{GameDescriptor, PlayerName, Roster};
pub use play::{
    Attribution, LossCause, PlayKind, PlayOutcome, PlayRecord, PlayStart, StartKind, TurnoverCause,
};
pub use quarter::Quarter;
pub use tally::ShotTally;
