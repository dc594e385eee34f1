//! Dish candidate ranking
//!
//! Scores a caller-supplied candidate set against a taste profile, merges
//! duplicate candidates, applies MMR diversity reranking, and emits
//! recommendations with human-readable explanations. Candidates are never
//! fetched and rankings are never persisted here; both sides of that
//! boundary belong to the caller.

use crate::similarity::{cosine_similarity, diversity_score};
use crate::types::{
    CandidateDish, DishRecommendation, RecommendationSource, ScoredDish, TasteVector,
};
use crate::PalateConfig;
use chrono::Utc;
use savora_core::Result;
use std::collections::HashMap;
use uuid::Uuid;

const ADVENTUROUS_BONUS_WEIGHT: f32 = 0.15;

/// Rank candidate dishes for a taste profile
///
/// Steps:
/// 1. Score each candidate by cosine similarity to the profile, plus an
///    adventurousness bonus for polarized dishes when the profile itself
///    is polarized
/// 2. Merge duplicate dish ids by score accumulation
/// 3. Apply MMR diversity reranking
///    (`mmr = lambda * relevance - (1 - lambda) * max similarity to selected`)
/// 4. Generate explanations
///
/// A zero profile vector (nothing learned yet) falls back to cold-start
/// ordering by candidate diversity.
pub struct RankCandidates;

impl RankCandidates {
    pub fn execute(
        profile_vector: &TasteVector,
        candidates: Vec<CandidateDish>,
        limit: usize,
        config: &PalateConfig,
    ) -> Result<Vec<DishRecommendation>> {
        if candidates.is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let scored = if profile_vector.is_zero() {
            Self::cold_start_candidates(candidates)
        } else {
            Self::similarity_candidates(profile_vector, candidates)
        };

        let merged = Self::merge_candidates(scored);

        let selected = Self::apply_diversity_filter(
            merged,
            limit.min(config.max_recommendations),
            config.diversity_lambda,
        );

        tracing::debug!(selected = selected.len(), "ranked dish candidates");

        Ok(selected
            .into_iter()
            .map(|dish| {
                let explanation = Self::generate_explanation(&dish);
                DishRecommendation {
                    dish_id: dish.dish_id,
                    score: dish.score,
                    source: dish.source,
                    based_on: dish.based_on,
                    explanation,
                    generated_at: Utc::now(),
                }
            })
            .collect())
    }

    fn similarity_candidates(
        profile_vector: &TasteVector,
        candidates: Vec<CandidateDish>,
    ) -> Vec<ScoredDish> {
        let profile_diversity = diversity_score(profile_vector);
        let mut scored = Vec::new();

        for candidate in candidates {
            let similarity = cosine_similarity(profile_vector, &candidate.vector);

            // Zero similarity here means a degenerate (all-zero) dish vector
            if similarity == 0.0 {
                continue;
            }

            let bonus =
                ADVENTUROUS_BONUS_WEIGHT * profile_diversity * diversity_score(&candidate.vector);
            let mut based_on = vec!["taste_similarity".to_string()];
            if bonus > 0.05 {
                based_on.push("adventurous_palate".to_string());
            }

            scored.push(ScoredDish {
                dish_id: candidate.dish_id,
                vector: candidate.vector,
                name: candidate.name,
                score: similarity + bonus,
                source: RecommendationSource::TasteSimilarity,
                based_on,
            });
        }

        scored
    }

    fn cold_start_candidates(candidates: Vec<CandidateDish>) -> Vec<ScoredDish> {
        candidates
            .into_iter()
            .map(|candidate| {
                let score = diversity_score(&candidate.vector);
                ScoredDish {
                    dish_id: candidate.dish_id,
                    vector: candidate.vector,
                    name: candidate.name,
                    score,
                    source: RecommendationSource::ColdStart,
                    based_on: vec!["cold_start".to_string()],
                }
            })
            .collect()
    }

    fn merge_candidates(candidates: Vec<ScoredDish>) -> Vec<ScoredDish> {
        let mut merged: HashMap<Uuid, ScoredDish> = HashMap::new();

        for candidate in candidates {
            merged
                .entry(candidate.dish_id)
                .and_modify(|existing| {
                    existing.score += candidate.score;
                    existing.based_on.extend(candidate.based_on.clone());
                })
                .or_insert(candidate);
        }

        merged.into_values().collect()
    }

    fn apply_diversity_filter(
        candidates: Vec<ScoredDish>,
        limit: usize,
        lambda: f32,
    ) -> Vec<ScoredDish> {
        let mut remaining = candidates;
        remaining.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut selected: Vec<ScoredDish> = Vec::new();

        while selected.len() < limit && !remaining.is_empty() {
            let mut best_score = f32::NEG_INFINITY;
            let mut best_index = 0;

            for (index, candidate) in remaining.iter().enumerate() {
                let max_similarity = selected
                    .iter()
                    .map(|s| cosine_similarity(&candidate.vector, &s.vector))
                    .fold(0.0f32, f32::max);

                let mmr = lambda * candidate.score - (1.0 - lambda) * max_similarity;

                if mmr > best_score {
                    best_score = mmr;
                    best_index = index;
                }
            }

            selected.push(remaining.remove(best_index));
        }

        selected
    }

    fn generate_explanation(dish: &ScoredDish) -> String {
        let subject = dish.name.as_deref().unwrap_or("This dish");
        match dish.source {
            RecommendationSource::TasteSimilarity => {
                format!("{} is close to your taste profile", subject)
            }
            RecommendationSource::ColdStart => {
                format!("{} helps us learn your palate", subject)
            }
        }
    }
}
