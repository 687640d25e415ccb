//! Game session lifecycle: the quarter state machine, the append-only play
//! log, and the shot ledger it deliberately does not share.

pub mod error;
pub mod ledger;
pub mod session;
pub mod shared;

pub use error::SessionError;
pub use ledger::ShotLedger;
pub use session::{Session, SessionPhase};
pub use shared::SharedSession;
