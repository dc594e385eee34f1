//! Taste similarity and distance metrics
//!
//! Pure functions over [`TasteVector`] pairs, built on the raw-slice math
//! in `savora-core`. Safe to call concurrently from any number of tasks;
//! nothing here holds state.

use crate::types::{TasteVector, AXIS_MAX, AXIS_MIDPOINT};
use savora_core::math;

/// Angular closeness of two taste profiles, in [0, 1]
///
/// Both vectors live in the non-negative axis domain, so the standard
/// dot-product-over-norms formula never goes below zero. Field-wise
/// identical vectors score 1.0 (up to float rounding).
///
/// Edge case: when either vector is the zero vector the similarity is 0.0
/// by convention rather than a division by zero.
pub fn cosine_similarity(a: &TasteVector, b: &TasteVector) -> f32 {
    math::cosine_similarity(&a.to_array(), &b.to_array())
}

/// Straight-line distance between two profiles in axis space
///
/// Symmetric, non-negative, and 0 exactly when `a == b`.
pub fn euclidean_distance(a: &TasteVector, b: &TasteVector) -> f32 {
    math::l2_distance(&a.to_array(), &b.to_array())
}

/// Rescale a raw [0, 10] vector into the [0, 1] range
///
/// The axis domain is fixed, so this always divides by 10; it is not a
/// per-call min-max normalization and depends on no other vector. The
/// input must be a raw-domain vector: feeding an already-normalized
/// vector back in is a caller error this function does not detect.
pub fn normalize(v: &TasteVector) -> TasteVector {
    let mut scores = v.to_array();
    for value in scores.iter_mut() {
        *value /= AXIS_MAX;
    }
    TasteVector::from_scores_clamped(scores)
}

/// How polarized a single profile is, in [0, 1]
///
/// Root-mean-square deviation from the neutral midpoint 5, rescaled by the
/// maximum possible deviation. The all-5 profile scores 0; an all-0 or
/// all-10 profile scores 1. Higher means a more extreme, adventurous
/// palate.
pub fn diversity_score(v: &TasteVector) -> f32 {
    let scores = v.to_array();
    let mean_square = scores
        .iter()
        .map(|s| {
            let d = s - AXIS_MIDPOINT;
            d * d
        })
        .sum::<f32>()
        / scores.len() as f32;

    mean_square.sqrt() / AXIS_MIDPOINT
}
