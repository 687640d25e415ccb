use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed periods that structure a game.
///
/// Quarters only move forward. `next` returns `None` from the final quarter,
/// so a fifth period cannot be reached by advancing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Quarter {
    #[default]
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    /// The quarter every game opens in.
    pub const FIRST: Quarter = Quarter::Q1;

    /// 1-based quarter number (1 through 4).
    pub fn number(self) -> u8 {
        match self {
            Self::Q1 => 1,
            Self::Q2 => 2,
            Self::Q3 => 3,
            Self::Q4 => 4,
        }
    }

    /// The following quarter, or `None` from the final quarter.
    pub fn next(self) -> Option<Quarter> {
        match self {
            Self::Q1 => Some(Self::Q2),
            Self::Q2 => Some(Self::Q3),
            Self::Q3 => Some(Self::Q4),
            Self::Q4 => None,
        }
    }

    /// Whether this is the final quarter.
    pub fn is_final(self) -> bool {
        matches!(self, Self::Q4)
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_walks_forward_and_stops_at_the_final_quarter() {
        assert_eq!(Quarter::Q1.next(), Some(Quarter::Q2));
        assert_eq!(Quarter::Q2.next(), Some(Quarter::Q3));
        assert_eq!(Quarter::Q3.next(), Some(Quarter::Q4));
        assert_eq!(Quarter::Q4.next(), None);
    }

    #[test]
    fn quarters_order_by_number() {
        assert!(Quarter::Q1 < Quarter::Q4);
        assert_eq!(Quarter::FIRST.number(), 1);
        assert!(Quarter::Q4.is_final());
        assert!(!Quarter::Q1.is_final());
    }

    #[test]
    fn displays_as_short_label() {
        assert_eq!(Quarter::Q3.to_string(), "Q3");
    }
}
