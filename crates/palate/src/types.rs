//! Core type definitions for the palate engine
//!
//! All records crossing the engine boundary are plain data: taste vectors,
//! emotional responses, logged experiences, and scored recommendations.
//! Construction validates every numeric field, so a value of these types is
//! always within its domain.

use chrono::{DateTime, Utc};
use savora_core::validation::{validate_axis_score, validate_response_score};
use savora_core::{Result, SavoraError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Number of axes in the taste model
pub const AXIS_COUNT: usize = 11;

/// Lower bound of the taste axis domain
pub const AXIS_MIN: f32 = 0.0;

/// Upper bound of the taste axis domain
pub const AXIS_MAX: f32 = 10.0;

/// Midpoint of the axis domain, the "neutral" score
pub const AXIS_MIDPOINT: f32 = 5.0;

/// One axis of the eleven-dimensional taste model
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TasteAxis {
    Sweet,
    Salty,
    Sour,
    Bitter,
    Umami,
    Spicy,
    Crunchy,
    Creamy,
    Chewy,
    Hot,
    Cold,
}

impl TasteAxis {
    /// Every axis, in canonical order
    pub const ALL: [TasteAxis; AXIS_COUNT] = [
        TasteAxis::Sweet,
        TasteAxis::Salty,
        TasteAxis::Sour,
        TasteAxis::Bitter,
        TasteAxis::Umami,
        TasteAxis::Spicy,
        TasteAxis::Crunchy,
        TasteAxis::Creamy,
        TasteAxis::Chewy,
        TasteAxis::Hot,
        TasteAxis::Cold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TasteAxis::Sweet => "sweet",
            TasteAxis::Salty => "salty",
            TasteAxis::Sour => "sour",
            TasteAxis::Bitter => "bitter",
            TasteAxis::Umami => "umami",
            TasteAxis::Spicy => "spicy",
            TasteAxis::Crunchy => "crunchy",
            TasteAxis::Creamy => "creamy",
            TasteAxis::Chewy => "chewy",
            TasteAxis::Hot => "hot",
            TasteAxis::Cold => "cold",
        }
    }
}

impl fmt::Display for TasteAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire representation of a taste vector, one named field per axis
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawTasteVector {
    sweet: f32,
    salty: f32,
    sour: f32,
    bitter: f32,
    umami: f32,
    spicy: f32,
    crunchy: f32,
    creamy: f32,
    chewy: f32,
    hot: f32,
    cold: f32,
}

/// Eleven-axis flavor/texture/temperature profile, each axis in [0, 10]
///
/// Immutable once constructed: every update produces a new vector, so
/// concurrent readers never observe a partial write. Equality is exact
/// field-wise comparison; use [`crate::similarity`] for closeness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "RawTasteVector", try_from = "RawTasteVector")]
pub struct TasteVector {
    scores: [f32; AXIS_COUNT],
}

impl TasteVector {
    /// Construct from per-axis scores in [`TasteAxis::ALL`] order
    ///
    /// # Errors
    ///
    /// `InvalidVector` if any score lies outside [0, 10] or is NaN.
    pub fn new(scores: [f32; AXIS_COUNT]) -> Result<Self> {
        for (axis, value) in TasteAxis::ALL.iter().zip(scores.iter()) {
            validate_axis_score(*value, axis.as_str())?;
        }
        Ok(Self { scores })
    }

    /// Construct from a mapping of axis name to score
    ///
    /// All eleven axes must be present. Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// `InvalidVector` if an axis is missing or a score is out of range.
    pub fn from_scores(scores: &BTreeMap<String, f32>) -> Result<Self> {
        let mut values = [0.0; AXIS_COUNT];
        for (slot, axis) in values.iter_mut().zip(TasteAxis::ALL.iter()) {
            let value = scores.get(axis.as_str()).copied().ok_or_else(|| {
                SavoraError::invalid_vector_axis(
                    format!("Missing axis '{}'", axis),
                    axis.as_str(),
                )
            })?;
            *slot = value;
        }
        Self::new(values)
    }

    /// Construct with every axis set to the same score
    pub fn uniform(value: f32) -> Result<Self> {
        Self::new([value; AXIS_COUNT])
    }

    /// The neutral profile: every axis at the 5.0 midpoint
    pub fn neutral() -> Self {
        Self {
            scores: [AXIS_MIDPOINT; AXIS_COUNT],
        }
    }

    /// The zero profile: every axis at 0.0
    ///
    /// Valid as a vector, but degenerate for cosine similarity (see
    /// [`crate::similarity::cosine_similarity`]).
    pub fn zero() -> Self {
        Self {
            scores: [0.0; AXIS_COUNT],
        }
    }

    /// Construct from already-computed scores, clamping each into [0, 10]
    ///
    /// Reserved for engine arithmetic (updates, aggregation) whose inputs
    /// are valid vectors; external input goes through [`TasteVector::new`].
    pub(crate) fn from_scores_clamped(scores: [f32; AXIS_COUNT]) -> Self {
        let mut clamped = scores;
        for value in clamped.iter_mut() {
            *value = value.clamp(AXIS_MIN, AXIS_MAX);
        }
        Self { scores: clamped }
    }

    /// Score for one axis
    ///
    /// Discriminant order matches [`TasteAxis::ALL`].
    pub fn axis(&self, axis: TasteAxis) -> f32 {
        self.scores[axis as usize]
    }

    /// All scores in [`TasteAxis::ALL`] order
    pub fn to_array(&self) -> [f32; AXIS_COUNT] {
        self.scores
    }

    /// Whether every axis is 0.0
    pub fn is_zero(&self) -> bool {
        self.scores.iter().all(|v| *v == 0.0)
    }
}

impl From<TasteVector> for RawTasteVector {
    fn from(v: TasteVector) -> Self {
        let s = v.scores;
        RawTasteVector {
            sweet: s[0],
            salty: s[1],
            sour: s[2],
            bitter: s[3],
            umami: s[4],
            spicy: s[5],
            crunchy: s[6],
            creamy: s[7],
            chewy: s[8],
            hot: s[9],
            cold: s[10],
        }
    }
}

impl TryFrom<RawTasteVector> for TasteVector {
    type Error = SavoraError;

    fn try_from(raw: RawTasteVector) -> Result<Self> {
        TasteVector::new([
            raw.sweet, raw.salty, raw.sour, raw.bitter, raw.umami, raw.spicy, raw.crunchy,
            raw.creamy, raw.chewy, raw.hot, raw.cold,
        ])
    }
}

/// Wire representation of an emotional response
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawEmotionalResponse {
    satisfaction: f32,
    excitement: f32,
    comfort: f32,
    surprise: f32,
    nostalgia: f32,
}

/// Five-field signal describing how a user felt about an eating experience
///
/// Each field lies in [0, 10]. Consumed by the preference updater and the
/// engagement weighting in profile aggregation; never persisted here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "RawEmotionalResponse", try_from = "RawEmotionalResponse")]
pub struct EmotionalResponse {
    satisfaction: f32,
    excitement: f32,
    comfort: f32,
    surprise: f32,
    nostalgia: f32,
}

impl EmotionalResponse {
    /// # Errors
    ///
    /// `InvalidResponse` if any field lies outside [0, 10] or is NaN.
    pub fn new(
        satisfaction: f32,
        excitement: f32,
        comfort: f32,
        surprise: f32,
        nostalgia: f32,
    ) -> Result<Self> {
        validate_response_score(satisfaction, "satisfaction")?;
        validate_response_score(excitement, "excitement")?;
        validate_response_score(comfort, "comfort")?;
        validate_response_score(surprise, "surprise")?;
        validate_response_score(nostalgia, "nostalgia")?;
        Ok(Self {
            satisfaction,
            excitement,
            comfort,
            surprise,
            nostalgia,
        })
    }

    /// The indifferent response: every field at the 5.0 midpoint
    pub fn neutral() -> Self {
        Self {
            satisfaction: 5.0,
            excitement: 5.0,
            comfort: 5.0,
            surprise: 5.0,
            nostalgia: 5.0,
        }
    }

    pub fn satisfaction(&self) -> f32 {
        self.satisfaction
    }

    pub fn excitement(&self) -> f32 {
        self.excitement
    }

    pub fn comfort(&self) -> f32 {
        self.comfort
    }

    pub fn surprise(&self) -> f32 {
        self.surprise
    }

    pub fn nostalgia(&self) -> f32 {
        self.nostalgia
    }
}

impl From<EmotionalResponse> for RawEmotionalResponse {
    fn from(r: EmotionalResponse) -> Self {
        RawEmotionalResponse {
            satisfaction: r.satisfaction,
            excitement: r.excitement,
            comfort: r.comfort,
            surprise: r.surprise,
            nostalgia: r.nostalgia,
        }
    }
}

impl TryFrom<RawEmotionalResponse> for EmotionalResponse {
    type Error = SavoraError;

    fn try_from(raw: RawEmotionalResponse) -> Result<Self> {
        EmotionalResponse::new(
            raw.satisfaction,
            raw.excitement,
            raw.comfort,
            raw.surprise,
            raw.nostalgia,
        )
    }
}

/// One journal entry as the engine sees it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedExperience {
    pub dish_id: Uuid,
    pub dish_vector: TasteVector,
    pub response: Option<EmotionalResponse>,
    pub logged_at: DateTime<Utc>,
    pub favorite: bool,
}

/// Candidate dish supplied by the recommendation collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateDish {
    pub dish_id: Uuid,
    pub vector: TasteVector,
    pub name: Option<String>,
}

/// Where a recommendation's score came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    TasteSimilarity,
    ColdStart,
}

/// Candidate with accumulated score and provenance
#[derive(Debug, Clone)]
pub struct ScoredDish {
    pub dish_id: Uuid,
    pub vector: TasteVector,
    pub name: Option<String>,
    pub score: f32,
    pub source: RecommendationSource,
    pub based_on: Vec<String>,
}

/// Ranked output handed back to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishRecommendation {
    pub dish_id: Uuid,
    pub score: f32,
    pub source: RecommendationSource,
    pub based_on: Vec<String>,
    pub explanation: String,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taste_vector_rejects_out_of_range() {
        let mut scores = [5.0; AXIS_COUNT];
        scores[0] = 15.0; // sweet
        let err = TasteVector::new(scores).unwrap_err();
        assert!(matches!(err, SavoraError::InvalidVector { .. }));
    }

    #[test]
    fn test_taste_vector_from_scores_missing_axis() {
        let mut scores = BTreeMap::new();
        for axis in TasteAxis::ALL.iter().skip(1) {
            scores.insert(axis.as_str().to_string(), 5.0);
        }
        let err = TasteVector::from_scores(&scores).unwrap_err();
        match err {
            SavoraError::InvalidVector { axis, .. } => {
                assert_eq!(axis.as_deref(), Some("sweet"));
            }
            _ => panic!("expected InvalidVector"),
        }
    }

    #[test]
    fn test_taste_vector_exact_equality() {
        let a = TasteVector::uniform(5.0).unwrap();
        let b = TasteVector::neutral();
        assert_eq!(a, b);

        let mut scores = a.to_array();
        scores[3] += 0.0001;
        let c = TasteVector::new(scores).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn test_taste_vector_axis_accessor() {
        let mut scores = [1.0; AXIS_COUNT];
        scores[4] = 9.0; // umami
        let v = TasteVector::new(scores).unwrap();
        assert_eq!(v.axis(TasteAxis::Umami), 9.0);
        assert_eq!(v.axis(TasteAxis::Sweet), 1.0);
    }

    #[test]
    fn test_taste_vector_serde_roundtrip() {
        let v = TasteVector::new([6.0, 8.0, 3.0, 4.0, 9.0, 7.0, 5.0, 6.0, 4.0, 8.0, 2.0]).unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert!(json.contains("\"umami\":9.0"));
        let recovered: TasteVector = serde_json::from_str(&json).unwrap();
        assert_eq!(v, recovered);
    }

    #[test]
    fn test_taste_vector_deserialization_validates() {
        let json = r#"{"sweet":15.0,"salty":5.0,"sour":5.0,"bitter":5.0,"umami":5.0,
                       "spicy":5.0,"crunchy":5.0,"creamy":5.0,"chewy":5.0,"hot":5.0,"cold":5.0}"#;
        let result: std::result::Result<TasteVector, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_scores_clamped() {
        let mut scores = [5.0; AXIS_COUNT];
        scores[0] = 12.5;
        scores[1] = -3.0;
        let v = TasteVector::from_scores_clamped(scores);
        assert_eq!(v.axis(TasteAxis::Sweet), 10.0);
        assert_eq!(v.axis(TasteAxis::Salty), 0.0);
    }

    #[test]
    fn test_zero_vector() {
        let v = TasteVector::zero();
        assert!(v.is_zero());
        assert!(!TasteVector::neutral().is_zero());
    }

    #[test]
    fn test_emotional_response_rejects_out_of_range() {
        let err = EmotionalResponse::new(11.0, 5.0, 5.0, 5.0, 5.0).unwrap_err();
        match err {
            SavoraError::InvalidResponse { field, .. } => {
                assert_eq!(field.as_deref(), Some("satisfaction"));
            }
            _ => panic!("expected InvalidResponse"),
        }
    }

    #[test]
    fn test_emotional_response_serde_roundtrip() {
        let r = EmotionalResponse::new(9.0, 7.0, 8.0, 2.0, 5.0).unwrap();
        let json = serde_json::to_string(&r).unwrap();
        let recovered: EmotionalResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(r, recovered);
    }

    #[test]
    fn test_taste_axis_names() {
        assert_eq!(TasteAxis::ALL.len(), AXIS_COUNT);
        assert_eq!(TasteAxis::Umami.as_str(), "umami");
        assert_eq!(TasteAxis::Cold.to_string(), "cold");
    }
}
