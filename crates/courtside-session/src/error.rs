use courtside_types::ValidationError;

/// Errors produced by session lifecycle operations.
///
/// Every variant is a recoverable caller mistake, surfaced to the operator
/// and guaranteed to leave the session unmodified.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// `start_game` was called while a game is in progress.
    #[error("a game is already in progress")]
    AlreadyStarted,
    /// A mutation arrived before `start_game`.
    #[error("no game has been started")]
    GameNotStarted,
    /// A mutation arrived after `finish_game`.
    #[error("the game is already finished")]
    GameFinished,
    /// `advance_quarter` was called in the final quarter.
    #[error("already in the final quarter")]
    FinalQuarter,
    /// `finish_game` was called before the final quarter.
    #[error("a game can only be finished in the final quarter")]
    NotFinalQuarter,
    /// The submitted candidate failed shaping; nothing was appended.
    #[error("rejected play: {0}")]
    RejectedPlay(#[from] ValidationError),
}
