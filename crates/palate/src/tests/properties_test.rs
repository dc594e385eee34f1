//! Metric property tests for the similarity engine and updater
//!
//! Exercises reflexivity, symmetry, range, clamping, and direction across
//! a spread of palate profiles rather than single hand-picked pairs.

use crate::similarity::{cosine_similarity, diversity_score, euclidean_distance, normalize};
use crate::types::{EmotionalResponse, TasteVector, AXIS_COUNT};
use crate::updater::ApplyPreferenceUpdate;

const EPSILON: f32 = 1e-6;

fn profiles() -> Vec<TasteVector> {
    vec![
        TasteVector::neutral(),
        TasteVector::uniform(10.0).unwrap(),
        TasteVector::uniform(1.0).unwrap(),
        TasteVector::new([6.0, 8.0, 3.0, 4.0, 9.0, 7.0, 5.0, 6.0, 4.0, 8.0, 2.0]).unwrap(),
        TasteVector::new([0.0, 10.0, 0.0, 10.0, 0.0, 10.0, 0.0, 10.0, 0.0, 10.0, 0.0]).unwrap(),
        TasteVector::new([2.5, 2.5, 2.5, 2.5, 2.5, 7.5, 7.5, 7.5, 7.5, 7.5, 5.0]).unwrap(),
    ]
}

#[test]
fn test_cosine_reflexivity_across_profiles() {
    for v in profiles() {
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < EPSILON);
    }
}

#[test]
fn test_euclidean_reflexivity_across_profiles() {
    for v in profiles() {
        assert_eq!(euclidean_distance(&v, &v), 0.0);
    }
}

#[test]
fn test_symmetry_across_profile_pairs() {
    let all = profiles();
    for a in &all {
        for b in &all {
            assert_eq!(cosine_similarity(a, b), cosine_similarity(b, a));
            assert_eq!(euclidean_distance(a, b), euclidean_distance(b, a));
        }
    }
}

#[test]
fn test_cosine_range_across_profile_pairs() {
    let all = profiles();
    for a in &all {
        for b in &all {
            let sim = cosine_similarity(a, b);
            assert!((0.0..=1.0 + EPSILON).contains(&sim));
        }
    }
}

#[test]
fn test_euclidean_non_negative_across_profile_pairs() {
    let all = profiles();
    for a in &all {
        for b in &all {
            assert!(euclidean_distance(a, b) >= 0.0);
        }
    }
}

#[test]
fn test_diversity_range_across_profiles() {
    for v in profiles() {
        let score = diversity_score(&v);
        assert!((0.0..=1.0 + EPSILON).contains(&score));
    }
}

#[test]
fn test_normalize_stays_within_unit_range() {
    for v in profiles() {
        for value in normalize(&v).to_array().iter() {
            assert!((0.0..=1.0).contains(value));
        }
    }
}

#[test]
fn test_update_clamping_across_profiles() {
    let responses = [
        EmotionalResponse::new(10.0, 10.0, 10.0, 0.0, 10.0).unwrap(),
        EmotionalResponse::new(0.0, 0.0, 0.0, 10.0, 0.0).unwrap(),
        EmotionalResponse::neutral(),
    ];

    let all = profiles();
    for current in &all {
        for experienced in &all {
            for response in &responses {
                let updated = ApplyPreferenceUpdate::execute(
                    current,
                    experienced,
                    response,
                    0.5,
                    2.0,
                    0.5,
                )
                .unwrap();

                for value in updated.to_array().iter() {
                    assert!((0.0..=10.0).contains(value));
                }
            }
        }
    }
}

// Concrete acceptance scenarios

#[test]
fn test_scenario_close_profiles_exceed_point_nine() {
    let a = TasteVector::new([6.0, 8.0, 3.0, 4.0, 9.0, 7.0, 5.0, 6.0, 4.0, 8.0, 2.0]).unwrap();
    let b = TasteVector::new([6.2, 7.8, 3.1, 4.3, 8.9, 7.2, 5.1, 6.2, 4.1, 8.1, 1.9]).unwrap();
    assert!(cosine_similarity(&a, &b) > 0.9);
}

#[test]
fn test_scenario_neutral_profile_has_zero_diversity() {
    assert!(diversity_score(&TasteVector::neutral()).abs() < EPSILON);
}

#[test]
fn test_scenario_out_of_range_axis_is_rejected() {
    let mut scores = [5.0; AXIS_COUNT];
    scores[0] = 15.0; // sweet
    assert!(TasteVector::new(scores).is_err());
}

#[test]
fn test_scenario_high_satisfaction_update_lands_between_bounds() {
    let current = TasteVector::neutral();
    let experienced = TasteVector::uniform(9.0).unwrap();
    let response = EmotionalResponse::new(9.0, 8.0, 8.0, 2.0, 5.0).unwrap();

    let updated =
        ApplyPreferenceUpdate::execute(&current, &experienced, &response, 0.1, 1.0, 0.5).unwrap();

    for value in updated.to_array().iter() {
        assert!(*value > 5.0);
        assert!(*value < 9.0);
    }
}

#[test]
fn test_scenario_zero_vector_similarity_is_exactly_zero() {
    let zero = TasteVector::zero();
    let v = TasteVector::new([6.0, 8.0, 3.0, 4.0, 9.0, 7.0, 5.0, 6.0, 4.0, 8.0, 2.0]).unwrap();
    assert_eq!(cosine_similarity(&zero, &v), 0.0);
    assert!(!cosine_similarity(&zero, &v).is_nan());
}
