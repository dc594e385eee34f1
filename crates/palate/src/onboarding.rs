//! Questionnaire onboarding
//!
//! Validates raw questionnaire payloads into typed taste vectors and
//! builds the initial profile for a new user. Raw payloads arrive as
//! untyped JSON from the onboarding collaborator; nothing untyped crosses
//! past this module.

use crate::profile::TasteProfile;
use crate::types::{TasteAxis, TasteVector, AXIS_COUNT};
use chrono::Utc;
use savora_core::{Result, SavoraError};
use uuid::Uuid;

/// Raw taste questionnaire answers
///
/// The onboarding flow asks the user to rate each of the eleven axes from
/// 0 to 10 and submits the answers as a flat JSON object keyed by axis
/// name.
pub struct QuestionnaireAnswers;

impl QuestionnaireAnswers {
    /// Validate a raw payload into a taste vector
    ///
    /// # Errors
    ///
    /// - `Validation` if the payload is not a JSON object or an axis value
    ///   is not a number
    /// - `InvalidVector` if an axis is missing or out of range
    pub fn parse(payload: &serde_json::Value) -> Result<TasteVector> {
        let object = payload.as_object().ok_or_else(|| {
            SavoraError::validation("Questionnaire payload must be a JSON object")
        })?;

        let mut scores = [0.0f32; AXIS_COUNT];
        for (slot, axis) in scores.iter_mut().zip(TasteAxis::ALL.iter()) {
            let value = object.get(axis.as_str()).ok_or_else(|| {
                SavoraError::invalid_vector_axis(
                    format!("Missing axis '{}'", axis),
                    axis.as_str(),
                )
            })?;

            let number = value.as_f64().ok_or_else(|| {
                SavoraError::validation_field(
                    format!("Axis '{}' must be a number, got {}", axis, value),
                    axis.as_str(),
                )
            })?;

            *slot = number as f32;
        }

        TasteVector::new(scores)
    }
}

/// Build the starting profile for a new user
///
/// Uses the questionnaire vector when answers were submitted; users who
/// skipped the questionnaire start from the neutral palate and let journal
/// history shape the profile from there.
pub struct HandleColdStartProfile;

impl HandleColdStartProfile {
    pub fn execute(user_id: Uuid, answers: Option<&serde_json::Value>) -> Result<TasteProfile> {
        let vector = match answers {
            Some(payload) => {
                let parsed = QuestionnaireAnswers::parse(payload)?;
                tracing::info!(%user_id, "onboarded profile from questionnaire");
                parsed
            }
            None => {
                tracing::info!(%user_id, "no questionnaire answers, starting neutral");
                TasteVector::neutral()
            }
        };

        Ok(TasteProfile {
            user_id,
            vector,
            experience_count: 0,
            updated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> serde_json::Value {
        json!({
            "sweet": 6.0, "salty": 8.0, "sour": 3.0, "bitter": 4.0, "umami": 9.0,
            "spicy": 7.0, "crunchy": 5.0, "creamy": 6.0, "chewy": 4.0, "hot": 8.0, "cold": 2.0
        })
    }

    #[test]
    fn test_parse_valid_payload() {
        let vector = QuestionnaireAnswers::parse(&full_payload()).unwrap();
        assert_eq!(vector.axis(TasteAxis::Sweet), 6.0);
        assert_eq!(vector.axis(TasteAxis::Umami), 9.0);
        assert_eq!(vector.axis(TasteAxis::Cold), 2.0);
    }

    #[test]
    fn test_parse_integer_scores() {
        let payload = json!({
            "sweet": 6, "salty": 8, "sour": 3, "bitter": 4, "umami": 9,
            "spicy": 7, "crunchy": 5, "creamy": 6, "chewy": 4, "hot": 8, "cold": 2
        });
        let vector = QuestionnaireAnswers::parse(&payload).unwrap();
        assert_eq!(vector.axis(TasteAxis::Salty), 8.0);
    }

    #[test]
    fn test_parse_rejects_missing_axis() {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove("umami");

        let err = QuestionnaireAnswers::parse(&payload).unwrap_err();
        match err {
            SavoraError::InvalidVector { axis, .. } => {
                assert_eq!(axis.as_deref(), Some("umami"));
            }
            _ => panic!("expected InvalidVector"),
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_score() {
        let mut payload = full_payload();
        payload["sweet"] = json!(15.0);

        let err = QuestionnaireAnswers::parse(&payload).unwrap_err();
        assert!(matches!(err, SavoraError::InvalidVector { .. }));
    }

    #[test]
    fn test_parse_rejects_non_numeric_score() {
        let mut payload = full_payload();
        payload["spicy"] = json!("very");

        let err = QuestionnaireAnswers::parse(&payload).unwrap_err();
        match err {
            SavoraError::Validation { field, .. } => {
                assert_eq!(field.as_deref(), Some("spicy"));
            }
            _ => panic!("expected Validation"),
        }
    }

    #[test]
    fn test_parse_rejects_non_object_payload() {
        let err = QuestionnaireAnswers::parse(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, SavoraError::Validation { .. }));
    }

    #[test]
    fn test_parse_ignores_unknown_keys() {
        let mut payload = full_payload();
        payload["favorite_cuisine"] = json!("sichuan");

        assert!(QuestionnaireAnswers::parse(&payload).is_ok());
    }

    #[test]
    fn test_cold_start_with_answers() {
        let profile =
            HandleColdStartProfile::execute(Uuid::new_v4(), Some(&full_payload())).unwrap();
        assert_eq!(profile.vector.axis(TasteAxis::Umami), 9.0);
        assert_eq!(profile.experience_count, 0);
    }

    #[test]
    fn test_cold_start_without_answers_is_neutral() {
        let profile = HandleColdStartProfile::execute(Uuid::new_v4(), None).unwrap();
        assert_eq!(profile.vector, TasteVector::neutral());
    }
}
