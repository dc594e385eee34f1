//! Taste profile aggregation
//!
//! Rebuilds a user's taste vector from their journal history. Entries are
//! weighted by engagement (how strongly the user reacted) and temporal
//! decay, then averaged per axis into a single profile vector.

use crate::types::{LoggedExperience, TasteVector, AXIS_COUNT};
use crate::PalateConfig;
use chrono::{DateTime, Utc};
use ndarray::Array1;
use savora_core::Result;
use uuid::Uuid;

const ENGAGEMENT_SATISFACTION_WEIGHT: f32 = 0.5;
const ENGAGEMENT_COMFORT_WEIGHT: f32 = 0.2;
const ENGAGEMENT_EXCITEMENT_WEIGHT: f32 = 0.2;
const ENGAGEMENT_NOSTALGIA_WEIGHT: f32 = 0.1;
const FAVORITE_BONUS: f32 = 0.2;
const IMPLICIT_ENGAGEMENT: f32 = 0.5;
const DECAY_WINDOW_DAYS: f32 = 30.0;

/// A user's current palate, as owned by the caller's storage layer
#[derive(Debug, Clone)]
pub struct TasteProfile {
    pub user_id: Uuid,
    pub vector: TasteVector,
    pub experience_count: usize,
    pub updated_at: DateTime<Utc>,
}

impl TasteProfile {
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            vector: TasteVector::neutral(),
            experience_count: 0,
            updated_at: Utc::now(),
        }
    }
}

/// Rebuild a taste vector from journal history
///
/// - Filters entries whose engagement falls below the configured threshold
/// - Applies temporal decay (`decay_rate^(days/30)`)
/// - Weights each dish vector by engagement and decay
/// - Averages per axis
///
/// Empty or fully-filtered history yields the neutral vector.
pub struct BuildTasteVector;

impl BuildTasteVector {
    pub fn execute(
        user_id: Uuid,
        experiences: &[LoggedExperience],
        now: DateTime<Utc>,
        config: &PalateConfig,
    ) -> Result<TasteVector> {
        let mut weighted_entries = Vec::new();

        for experience in experiences {
            let engagement = Self::engagement_weight(experience);

            // Skip entries the user barely reacted to
            if engagement < config.min_engagement_threshold {
                continue;
            }

            let days_since = (now - experience.logged_at).num_days().max(0) as f32;
            let decay_weight = config.decay_rate.powf(days_since / DECAY_WINDOW_DAYS);

            weighted_entries.push((experience.dish_vector, engagement * decay_weight));
        }

        let total_weight: f32 = weighted_entries.iter().map(|(_, w)| w).sum();

        if weighted_entries.is_empty() || total_weight == 0.0 {
            tracing::debug!(%user_id, "no usable journal history, using neutral palate");
            return Ok(TasteVector::neutral());
        }

        let mut aggregated = Array1::<f32>::zeros(AXIS_COUNT);
        for (vector, weight) in &weighted_entries {
            let normalized_weight = weight / total_weight;
            let axis_array = Array1::from_vec(vector.to_array().to_vec());
            aggregated = aggregated + &(axis_array * normalized_weight);
        }

        let mut scores = [0.0f32; AXIS_COUNT];
        for (slot, value) in scores.iter_mut().zip(aggregated.iter()) {
            *slot = *value;
        }

        tracing::debug!(
            %user_id,
            kept = weighted_entries.len(),
            total = experiences.len(),
            "rebuilt taste vector from journal history"
        );

        Ok(TasteVector::from_scores_clamped(scores))
    }

    /// Engagement weight for one journal entry, in [0, 1]
    ///
    /// A satisfaction-led blend of the emotional response, with a bonus
    /// for entries the user marked as a favorite. Entries without a
    /// response fall back to a middling implicit weight.
    pub fn engagement_weight(experience: &LoggedExperience) -> f32 {
        let mut weight = match &experience.response {
            Some(response) => {
                (response.satisfaction() / 10.0) * ENGAGEMENT_SATISFACTION_WEIGHT
                    + (response.comfort() / 10.0) * ENGAGEMENT_COMFORT_WEIGHT
                    + (response.excitement() / 10.0) * ENGAGEMENT_EXCITEMENT_WEIGHT
                    + (response.nostalgia() / 10.0) * ENGAGEMENT_NOSTALGIA_WEIGHT
            }
            None => IMPLICIT_ENGAGEMENT,
        };

        if experience.favorite {
            weight += FAVORITE_BONUS;
        }

        weight.clamp(0.0, 1.0)
    }
}

/// Rebuild cadence as a user's journal grows
pub struct ProgressiveRefresh;

impl ProgressiveRefresh {
    /// Rebuild the stored vector every 5 logged experiences
    pub fn should_rebuild_vector(experience_count: usize) -> bool {
        experience_count > 0 && experience_count % 5 == 0
    }
}
