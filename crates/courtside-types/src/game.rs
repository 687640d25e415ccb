use crate::error::RosterError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A player on the team sheet.
///
/// Names are trimmed on construction and must not be blank. Uniqueness is
/// not enforced here; two players may share a name on the sheet.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(name: impl Into<String>) -> Result<Self, RosterError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RosterError::BlankName);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PlayerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered team sheet. Non-empty; order is entry order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<PlayerName>,
}

impl Roster {
    /// A roster from already-constructed names. Fails on an empty list.
    pub fn new(players: Vec<PlayerName>) -> Result<Self, RosterError> {
        if players.is_empty() {
            return Err(RosterError::Empty);
        }
        Ok(Self { players })
    }

    /// Parse raw names, e.g. from comma-separated entry on the setup form.
    pub fn from_names<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let players = names
            .into_iter()
            .map(PlayerName::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(players)
    }

    pub fn contains(&self, name: &PlayerName) -> bool {
        self.players.contains(name)
    }

    pub fn players(&self) -> &[PlayerName] {
        &self.players
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerName> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false: construction rejects an empty sheet.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Fixture details captured on the setup form.
///
/// Immutable once the game starts; the session owns the only copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDescriptor {
    pub date: NaiveDate,
    pub opposition: String,
    pub venue: String,
    pub team: Roster,
}

impl GameDescriptor {
    pub fn new(
        date: NaiveDate,
        opposition: impl Into<String>,
        venue: impl Into<String>,
        team: Roster,
    ) -> Self {
        Self {
            date,
            opposition: opposition.into(),
            venue: venue.into(),
            team,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_names_are_trimmed() {
        let name = PlayerName::new("  Maia ").unwrap();
        assert_eq!(name.as_str(), "Maia");
        assert_eq!(name.to_string(), "Maia");
        let borrowed: &str = name.as_ref();
        assert_eq!(borrowed, "Maia");
    }

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(PlayerName::new("   "), Err(RosterError::BlankName));
        assert_eq!(PlayerName::new(""), Err(RosterError::BlankName));
    }

    #[test]
    fn roster_must_not_be_empty() {
        assert_eq!(Roster::new(Vec::new()), Err(RosterError::Empty));
        let names: Vec<&str> = Vec::new();
        assert_eq!(Roster::from_names(names), Err(RosterError::Empty));
    }

    #[test]
    fn roster_keeps_entry_order_and_duplicates() {
        let roster = Roster::from_names(["Ana", "Bec", "Ana"]).unwrap();
        assert_eq!(roster.len(), 3);
        assert!(!roster.is_empty());
        let names: Vec<&str> = roster.iter().map(PlayerName::as_str).collect();
        assert_eq!(names, ["Ana", "Bec", "Ana"]);
        assert_eq!(roster.players()[2], PlayerName::new("Ana").unwrap());
        assert!(roster.contains(&PlayerName::new("Bec").unwrap()));
        assert!(!roster.contains(&PlayerName::new("Cas").unwrap()));
    }

    #[test]
    fn a_bad_name_fails_the_whole_roster() {
        assert_eq!(
            Roster::from_names(["Ana", "  "]),
            Err(RosterError::BlankName)
        );
    }
}
