//! Palate Personalization Engine
//!
//! This crate implements the personalization layer for Savora, providing
//! taste vectors, similarity scoring, diversity measurement, adaptive
//! preference learning, and candidate ranking.
//!
//! The engine is purely computational: it holds no connections, performs
//! no I/O, and owns no storage. Callers pass plain data in and persist
//! whatever comes back. Every operation is a pure function over immutable
//! inputs, so the whole surface is safe to call concurrently.

pub mod onboarding;
pub mod profile;
pub mod ranking;
pub mod similarity;
pub mod types;
pub mod updater;

// Re-export key types
pub use onboarding::{HandleColdStartProfile, QuestionnaireAnswers};
pub use profile::{BuildTasteVector, ProgressiveRefresh, TasteProfile};
pub use ranking::RankCandidates;
pub use similarity::{cosine_similarity, diversity_score, euclidean_distance, normalize};
pub use types::*;
pub use updater::ApplyPreferenceUpdate;

use chrono::{DateTime, Utc};
use savora_core::config::{env_f32, env_usize, ConfigLoader};
use savora_core::validation::{validate_tuning_parameter, validate_unit_interval};
use savora_core::{Result, SavoraError};
use uuid::Uuid;

/// Palate engine configuration
#[derive(Debug, Clone)]
pub struct PalateConfig {
    /// Step size for preference updates (default: 0.1)
    pub learning_rate: f32,
    /// How strongly a single experience is trusted (default: 1.0)
    pub confidence_weight: f32,
    /// How strongly surprise damps an update (default: 0.5)
    pub novelty_weight: f32,
    /// Temporal decay rate for journal aggregation (default: 0.95)
    pub decay_rate: f32,
    /// Minimum engagement for an entry to count (default: 0.3)
    pub min_engagement_threshold: f32,
    /// Relevance/diversity balance for MMR reranking (default: 0.7)
    pub diversity_lambda: f32,
    /// Hard cap on ranked output (default: 20)
    pub max_recommendations: usize,
}

impl Default for PalateConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            confidence_weight: 1.0,
            novelty_weight: 0.5,
            decay_rate: 0.95,
            min_engagement_threshold: 0.3,
            diversity_lambda: 0.7,
            max_recommendations: 20,
        }
    }
}

impl ConfigLoader for PalateConfig {
    fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            learning_rate: env_f32("PALATE_LEARNING_RATE", defaults.learning_rate)?,
            confidence_weight: env_f32("PALATE_CONFIDENCE_WEIGHT", defaults.confidence_weight)?,
            novelty_weight: env_f32("PALATE_NOVELTY_WEIGHT", defaults.novelty_weight)?,
            decay_rate: env_f32("PALATE_DECAY_RATE", defaults.decay_rate)?,
            min_engagement_threshold: env_f32(
                "PALATE_MIN_ENGAGEMENT_THRESHOLD",
                defaults.min_engagement_threshold,
            )?,
            diversity_lambda: env_f32("PALATE_DIVERSITY_LAMBDA", defaults.diversity_lambda)?,
            max_recommendations: env_usize(
                "PALATE_MAX_RECOMMENDATIONS",
                defaults.max_recommendations,
            )?,
        })
    }

    fn validate(&self) -> Result<()> {
        validate_tuning_parameter(self.learning_rate, "learning_rate")?;
        validate_tuning_parameter(self.confidence_weight, "confidence_weight")?;
        validate_tuning_parameter(self.novelty_weight, "novelty_weight")?;
        validate_unit_interval(self.decay_rate, "decay_rate")?;
        validate_unit_interval(self.min_engagement_threshold, "min_engagement_threshold")?;
        validate_unit_interval(self.diversity_lambda, "diversity_lambda")?;
        if self.max_recommendations == 0 {
            return Err(SavoraError::configuration(
                "max_recommendations must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Palate engine instance
///
/// A value wrapper around the tuning configuration. Holds no other state;
/// cloning is cheap and instances are freely shareable across tasks.
#[derive(Debug, Clone)]
pub struct PalateEngine {
    config: PalateConfig,
}

impl PalateEngine {
    pub fn new(config: PalateConfig) -> Self {
        Self { config }
    }

    pub fn with_default_config() -> Self {
        Self::new(PalateConfig::default())
    }

    /// Build an engine from `SAVORA_PALATE_*` environment variables
    pub fn from_env() -> Result<Self> {
        let config = PalateConfig::from_env()?;
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &PalateConfig {
        &self.config
    }

    /// Build a new user's starting profile from raw questionnaire answers
    pub fn onboard(
        &self,
        user_id: Uuid,
        answers: Option<&serde_json::Value>,
    ) -> Result<TasteProfile> {
        HandleColdStartProfile::execute(user_id, answers)
    }

    /// Fold one logged experience into a taste vector
    pub fn apply_experience(
        &self,
        current: &TasteVector,
        experienced: &TasteVector,
        response: &EmotionalResponse,
    ) -> Result<TasteVector> {
        ApplyPreferenceUpdate::execute(
            current,
            experienced,
            response,
            self.config.learning_rate,
            self.config.confidence_weight,
            self.config.novelty_weight,
        )
    }

    /// Rebuild a taste vector from full journal history
    pub fn rebuild_vector(
        &self,
        user_id: Uuid,
        experiences: &[LoggedExperience],
        now: DateTime<Utc>,
    ) -> Result<TasteVector> {
        BuildTasteVector::execute(user_id, experiences, now, &self.config)
    }

    /// Rank candidate dishes against a taste profile
    pub fn rank(
        &self,
        profile_vector: &TasteVector,
        candidates: Vec<CandidateDish>,
        limit: usize,
    ) -> Result<Vec<DishRecommendation>> {
        RankCandidates::execute(profile_vector, candidates, limit, &self.config)
    }
}

#[cfg(test)]
mod tests;
