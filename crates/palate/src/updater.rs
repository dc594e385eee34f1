//! Adaptive preference learning
//!
//! Evolves a user's taste vector in response to a newly logged experience
//! and its emotional outcome. Above-neutral responses pull the profile
//! toward the experienced dish, below-neutral responses push it away, and
//! a surprising-but-uncomfortable experience shrinks the step toward zero.

use crate::types::{EmotionalResponse, TasteVector, AXIS_COUNT};
use savora_core::validation::validate_tuning_parameter;
use savora_core::Result;

const SATISFACTION_WEIGHT: f32 = 0.45;
const COMFORT_WEIGHT: f32 = 0.25;
const EXCITEMENT_WEIGHT: f32 = 0.20;
const NOSTALGIA_WEIGHT: f32 = 0.10;
const RESPONSE_SCALE: f32 = 10.0;

/// Apply one preference update
///
/// For each axis, `updated = current + coeff * (experienced - current)`
/// where `coeff = clamp(learning_rate * confidence_weight * signal, -1, 1)`
/// and `signal` is the signed emotional pull in [-1, 1]. A positive-signal
/// update therefore never overshoots past the experienced dish, and every
/// output axis is clamped back into the [0, 10] domain.
///
/// Pure and deterministic: `current` is never mutated, identical inputs
/// give identical outputs. Applying the update twice in sequence moves the
/// vector further, which is intentional.
pub struct ApplyPreferenceUpdate;

impl ApplyPreferenceUpdate {
    /// # Errors
    ///
    /// `InvalidParameter` if `learning_rate`, `confidence_weight`, or
    /// `novelty_weight` is negative, NaN, or infinite. Vector and response
    /// validity is guaranteed by construction of the typed records.
    pub fn execute(
        current: &TasteVector,
        experienced: &TasteVector,
        response: &EmotionalResponse,
        learning_rate: f32,
        confidence_weight: f32,
        novelty_weight: f32,
    ) -> Result<TasteVector> {
        validate_tuning_parameter(learning_rate, "learning_rate")?;
        validate_tuning_parameter(confidence_weight, "confidence_weight")?;
        validate_tuning_parameter(novelty_weight, "novelty_weight")?;

        let signal = Self::response_signal(response, novelty_weight);
        let coeff = (learning_rate * confidence_weight * signal).clamp(-1.0, 1.0);

        let cur = current.to_array();
        let exp = experienced.to_array();
        let mut updated = [0.0f32; AXIS_COUNT];
        for ((slot, c), e) in updated.iter_mut().zip(cur.iter()).zip(exp.iter()) {
            *slot = c + coeff * (e - c);
        }

        tracing::debug!(signal, coeff, "applying preference update");

        Ok(TasteVector::from_scores_clamped(updated))
    }

    /// Signed pull strength in [-1, 1]
    ///
    /// A weighted blend of satisfaction, comfort, excitement, and
    /// nostalgia is recentered around the neutral midpoint: an all-5
    /// response yields 0 (no movement). `surprise * (1 - comfort)` acts as
    /// a hesitation damper scaled by `novelty_weight` — one startling,
    /// uncomfortable meal is weak evidence about lasting preferences.
    fn response_signal(response: &EmotionalResponse, novelty_weight: f32) -> f32 {
        let satisfaction = response.satisfaction() / RESPONSE_SCALE;
        let comfort = response.comfort() / RESPONSE_SCALE;
        let excitement = response.excitement() / RESPONSE_SCALE;
        let nostalgia = response.nostalgia() / RESPONSE_SCALE;
        let surprise = response.surprise() / RESPONSE_SCALE;

        let affinity = satisfaction * SATISFACTION_WEIGHT
            + comfort * COMFORT_WEIGHT
            + excitement * EXCITEMENT_WEIGHT
            + nostalgia * NOSTALGIA_WEIGHT;

        let mut signal = (affinity - 0.5) * 2.0;

        let hesitation = surprise * (1.0 - comfort);
        signal *= 1.0 - (novelty_weight * hesitation).min(1.0);

        signal
    }
}
