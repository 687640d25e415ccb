use serde::{Deserialize, Serialize};

/// Running made/missed counters for one `(quarter, player)` key.
///
/// Counters only ever increase. A key with no recorded shots reads as all
/// zeroes rather than being an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotTally {
    pub scored: u32,
    pub missed: u32,
}

impl ShotTally {
    /// Total attempts recorded under the key.
    pub fn total(self) -> u32 {
        self.scored + self.missed
    }
}
