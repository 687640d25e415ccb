use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::session::Session;

/// Clonable handle sharing one session between the input surface and any
/// number of aggregation readers.
///
/// Every mutating operation goes through the write lock, which serializes
/// submissions from a single scorer. Readers hold the lock for the length
/// of one snapshot, so a tally increment is never observed half-applied.
#[derive(Clone, Debug, Default)]
pub struct SharedSession {
    inner: Arc<RwLock<Session>>,
}

impl SharedSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access for accessors and aggregation.
    pub fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.inner.read().expect("session lock poisoned")
    }

    /// Exclusive access for the mutating operations.
    pub fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.inner.write().expect("session lock poisoned")
    }
}
