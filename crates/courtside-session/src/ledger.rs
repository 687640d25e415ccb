use std::collections::BTreeMap;

use courtside_types::{PlayerName, Quarter, ShotTally};

/// Per-quarter, per-player shot counters, held apart from the play log.
///
/// Entries are created lazily on the first shot for a key and only ever
/// incremented; there is no decrement, reset, or removal within a session.
/// Iteration order is `(quarter, player)` ascending, which is the order the
/// summary tables want.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShotLedger {
    tallies: BTreeMap<(Quarter, PlayerName), ShotTally>,
}

impl ShotLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one attempt for `(quarter, player)`, creating the entry on
    /// first use. Exactly one counter moves per call.
    pub fn record(&mut self, quarter: Quarter, player: PlayerName, made: bool) {
        let tally = self.tallies.entry((quarter, player)).or_default();
        if made {
            tally.scored += 1;
        } else {
            tally.missed += 1;
        }
    }

    /// The counters for `(quarter, player)`. All zeroes when the key has
    /// never seen a shot; reads never fail.
    pub fn tally(&self, quarter: Quarter, player: &PlayerName) -> ShotTally {
        self.tallies
            .get(&(quarter, player.clone()))
            .copied()
            .unwrap_or_default()
    }

    /// Every `(quarter, player, tally)` entry in key order.
    pub fn entries(&self) -> impl Iterator<Item = (Quarter, &PlayerName, ShotTally)> {
        self.tallies
            .iter()
            .map(|((quarter, player), tally)| (*quarter, player, *tally))
    }

    /// Number of `(quarter, player)` keys with at least one recorded shot.
    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }
}
