use crate::error::{SelectionField, ValidationError};
use crate::play::{
    Attribution, LossCause, PlayKind, PlayOutcome, PlayRecord, PlayStart, StartKind, TurnoverCause,
};
use crate::quarter::Quarter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw field values collected by the input surface, before shaping.
///
/// Everything is optional: the operator may not have touched a control yet,
/// and which fields are required depends on the two selected discriminants.
/// `quarter` is deliberately absent. The session stamps it at submission,
/// so a stale form can never write into the wrong quarter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayCandidate {
    pub play_start: Option<StartKind>,
    pub receiver: Option<Attribution>,
    pub turnover_type: Option<TurnoverCause>,
    pub who_turnover: Option<Attribution>,
    pub play: Option<PlayKind>,
    pub who_played: Option<Attribution>,
    pub shot_made: Option<bool>,
    pub loss_type: Option<LossCause>,
    pub who_lost: Option<Attribution>,
}

impl PlayRecord {
    /// Shape a raw candidate into a well-formed record for `quarter`.
    ///
    /// Checks run in a fixed order (start discriminant, play discriminant,
    /// start-axis fields, play-axis fields) so the first missing field
    /// reported is deterministic. Fields that do not belong to the selected
    /// discriminants are ignored. Pure: the caller supplies the quarter
    /// stamp and the wall-clock stamp.
    pub fn validate(
        candidate: &PlayCandidate,
        quarter: Quarter,
        recorded_at: DateTime<Utc>,
    ) -> Result<PlayRecord, ValidationError> {
        let start_kind = candidate
            .play_start
            .ok_or(ValidationError::MissingSelection(SelectionField::PlayStart))?;
        let play_kind = candidate
            .play
            .ok_or(ValidationError::MissingSelection(SelectionField::Play))?;

        let start = match start_kind {
            StartKind::CentrePass => PlayStart::CentrePass {
                receiver: require(&candidate.receiver, SelectionField::Receiver)?,
            },
            StartKind::Turnover => PlayStart::Turnover {
                cause: require(&candidate.turnover_type, SelectionField::TurnoverType)?,
                won_by: require(&candidate.who_turnover, SelectionField::WhoTurnover)?,
            },
        };

        let outcome = match play_kind {
            PlayKind::CircleEdgeFeed => PlayOutcome::CircleEdgeFeed {
                played_by: require(&candidate.who_played, SelectionField::WhoPlayed)?,
                shot_made: require(&candidate.shot_made, SelectionField::ShotMade)?,
            },
            PlayKind::LongFeed => PlayOutcome::LongFeed {
                played_by: require(&candidate.who_played, SelectionField::WhoPlayed)?,
                shot_made: require(&candidate.shot_made, SelectionField::ShotMade)?,
            },
            PlayKind::Lost => PlayOutcome::Lost {
                cause: require(&candidate.loss_type, SelectionField::LossType)?,
                lost_by: require(&candidate.who_lost, SelectionField::WhoLost)?,
            },
        };

        Ok(PlayRecord {
            quarter,
            recorded_at,
            start,
            outcome,
        })
    }
}

fn require<T: Clone>(field: &Option<T>, name: SelectionField) -> Result<T, ValidationError> {
    field.clone().ok_or(ValidationError::MissingSelection(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PlayerName;
    use chrono::TimeZone;

    fn player(name: &str) -> Attribution {
        Attribution::Player(PlayerName::new(name).unwrap())
    }

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 22, 10, 0, 0).unwrap()
    }

    fn missing(field: SelectionField) -> ValidationError {
        ValidationError::MissingSelection(field)
    }

    fn validate(candidate: &PlayCandidate) -> Result<PlayRecord, ValidationError> {
        PlayRecord::validate(candidate, Quarter::Q1, ts())
    }

    #[test]
    fn empty_candidate_is_missing_its_start_first() {
        let err = validate(&PlayCandidate::default()).unwrap_err();
        assert_eq!(err, missing(SelectionField::PlayStart));
    }

    #[test]
    fn play_discriminant_is_checked_before_start_fields() {
        let candidate = PlayCandidate {
            play_start: Some(StartKind::CentrePass),
            ..PlayCandidate::default()
        };
        assert_eq!(
            validate(&candidate).unwrap_err(),
            missing(SelectionField::Play)
        );
    }

    #[test]
    fn centre_pass_requires_a_receiver() {
        let candidate = PlayCandidate {
            play_start: Some(StartKind::CentrePass),
            play: Some(PlayKind::Lost),
            loss_type: Some(LossCause::Step),
            who_lost: Some(Attribution::Unknown),
            ..PlayCandidate::default()
        };
        assert_eq!(
            validate(&candidate).unwrap_err(),
            missing(SelectionField::Receiver)
        );
    }

    #[test]
    fn turnover_requires_cause_then_winner() {
        let mut candidate = PlayCandidate {
            play_start: Some(StartKind::Turnover),
            play: Some(PlayKind::CircleEdgeFeed),
            who_played: Some(player("Ana")),
            shot_made: Some(true),
            ..PlayCandidate::default()
        };
        assert_eq!(
            validate(&candidate).unwrap_err(),
            missing(SelectionField::TurnoverType)
        );

        candidate.turnover_type = Some(TurnoverCause::PickUp);
        assert_eq!(
            validate(&candidate).unwrap_err(),
            missing(SelectionField::WhoTurnover)
        );

        candidate.who_turnover = Some(player("Bec"));
        assert!(validate(&candidate).is_ok());
    }

    #[test]
    fn feeds_require_a_player_and_a_shot_result() {
        let mut candidate = PlayCandidate {
            play_start: Some(StartKind::CentrePass),
            receiver: Some(player("Ana")),
            play: Some(PlayKind::LongFeed),
            ..PlayCandidate::default()
        };
        assert_eq!(
            validate(&candidate).unwrap_err(),
            missing(SelectionField::WhoPlayed)
        );

        candidate.who_played = Some(player("Ana"));
        assert_eq!(
            validate(&candidate).unwrap_err(),
            missing(SelectionField::ShotMade)
        );

        candidate.shot_made = Some(false);
        assert!(validate(&candidate).is_ok());
    }

    #[test]
    fn lost_requires_cause_and_culprit() {
        let mut candidate = PlayCandidate {
            play_start: Some(StartKind::CentrePass),
            receiver: Some(player("Ana")),
            play: Some(PlayKind::Lost),
            ..PlayCandidate::default()
        };
        assert_eq!(
            validate(&candidate).unwrap_err(),
            missing(SelectionField::LossType)
        );

        candidate.loss_type = Some(LossCause::Held);
        assert_eq!(
            validate(&candidate).unwrap_err(),
            missing(SelectionField::WhoLost)
        );

        candidate.who_lost = Some(Attribution::Unknown);
        assert!(validate(&candidate).is_ok());
    }

    #[test]
    fn fields_outside_the_selection_are_dropped_not_rejected() {
        // Turnover start with a stale receiver left over from a previous
        // centre-pass entry. The receiver must not survive into the record.
        let candidate = PlayCandidate {
            play_start: Some(StartKind::Turnover),
            receiver: Some(player("Ana")),
            turnover_type: Some(TurnoverCause::Intercept),
            who_turnover: Some(player("Bec")),
            play: Some(PlayKind::Lost),
            who_played: Some(player("Ana")),
            shot_made: Some(true),
            loss_type: Some(LossCause::BadPass),
            who_lost: Some(player("Bec")),
        };
        let record = validate(&candidate).unwrap();
        similar_asserts::assert_eq!(
            record.start,
            PlayStart::Turnover {
                cause: TurnoverCause::Intercept,
                won_by: player("Bec"),
            }
        );
        similar_asserts::assert_eq!(
            record.outcome,
            PlayOutcome::Lost {
                cause: LossCause::BadPass,
                lost_by: player("Bec"),
            }
        );
    }

    #[test]
    fn valid_centre_pass_feed_shapes_fully() {
        let candidate = PlayCandidate {
            play_start: Some(StartKind::CentrePass),
            receiver: Some(player("Ana")),
            play: Some(PlayKind::CircleEdgeFeed),
            who_played: Some(player("Cas")),
            shot_made: Some(true),
            ..PlayCandidate::default()
        };
        let record = PlayRecord::validate(&candidate, Quarter::Q3, ts()).unwrap();
        assert_eq!(record.quarter, Quarter::Q3);
        assert_eq!(record.recorded_at, ts());
        assert_eq!(
            record.start,
            PlayStart::CentrePass {
                receiver: player("Ana")
            }
        );
        assert_eq!(
            record.outcome,
            PlayOutcome::CircleEdgeFeed {
                played_by: player("Cas"),
                shot_made: true,
            }
        );
        assert_eq!(record.shot_made(), Some(true));
    }

    #[test]
    fn unknown_attribution_is_a_valid_selection() {
        let candidate = PlayCandidate {
            play_start: Some(StartKind::CentrePass),
            receiver: Some(Attribution::Unknown),
            play: Some(PlayKind::LongFeed),
            who_played: Some(Attribution::Unknown),
            shot_made: Some(false),
            ..PlayCandidate::default()
        };
        let record = validate(&candidate).unwrap();
        assert_eq!(
            record.start,
            PlayStart::CentrePass {
                receiver: Attribution::Unknown
            }
        );
    }
}
