//! Single-item evaluation.
//!
//! One prediction against one ground-truth record: run every field scorer,
//! aggregate, classify each dimension, and turn the low scores into
//! concrete suggestions. Oracle failures degrade to an errored
//! [`TestResult`]; they never propagate.

use crate::oracle::Oracle;
use crate::schema::{ExpectedIdentification, FieldScores, GroundTruthItem, PredictionOutput, TestResult};
use crate::score::{aggregate, score_all};
use crate::vocab::SCORE_WEIGHTS;

/// Dimensions scoring at least this are partial matches rather than failures.
const PARTIAL_THRESHOLD: u8 = 70;

/// Evaluate one item by calling the oracle for a fresh prediction.
///
/// A failed oracle call (model error, timeout, missing image) produces a
/// result with `error` set and every score at zero; the caller's run
/// continues.
pub fn evaluate_single(item: &GroundTruthItem, oracle: &dyn Oracle) -> TestResult {
    match oracle.predict(&item.id) {
        Ok(prediction) => score_prediction(item, prediction),
        Err(err) => {
            log::warn!("oracle failed for '{}': {}", item.id, err);
            TestResult::errored(&item.id, err.to_string())
        }
    }
}

/// Score an already-obtained prediction against its ground-truth item.
///
/// Pure: same inputs, same result. Used directly when replaying stored
/// predictions, and by [`evaluate_single`] after a live oracle call.
#[must_use]
pub fn score_prediction(item: &GroundTruthItem, prediction: PredictionOutput) -> TestResult {
    let expected = &item.expected;
    let scores = score_all(expected, &prediction);
    let overall_score = aggregate(&scores, &SCORE_WEIGHTS);

    let mut successes = Vec::new();
    let mut partial_matches = Vec::new();
    let mut failures = Vec::new();
    for (dimension, score) in scores.named() {
        if score == 100 {
            successes.push(format!("{dimension}: exact match"));
        } else if score >= PARTIAL_THRESHOLD {
            partial_matches.push(format!("{dimension}: close match ({score}/100)"));
        } else if score > 0 {
            failures.push(format!("{dimension}: needs improvement ({score}/100)"));
        } else {
            failures.push(format!("{dimension}: complete miss"));
        }
    }

    let improvement_suggestions = build_suggestions(expected, &prediction, &scores);

    TestResult {
        item_id: item.id.clone(),
        prediction: Some(prediction),
        error: None,
        scores,
        overall_score,
        successes,
        partial_matches,
        failures,
        improvement_suggestions,
    }
}

fn build_suggestions(
    expected: &ExpectedIdentification,
    prediction: &PredictionOutput,
    scores: &FieldScores,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if scores.name < 70 {
        suggestions.push(format!(
            "Name missed: expected '{}', got '{}'. Key terms to surface: {}.",
            expected.name,
            prediction.name,
            expected.name_keywords.join(", ")
        ));
    }

    if scores.maker < 70 {
        if let Some(maker) = &expected.maker {
            suggestions.push(format!(
                "Maker attribution weak: expected '{}', got '{}'.",
                maker,
                prediction.maker.as_deref().unwrap_or("no attribution")
            ));
        }
    }

    if scores.value < 60 {
        let predicted_range = match (prediction.estimated_value_min, prediction.estimated_value_max) {
            (Some(min), Some(max)) => format!("{min:.0}-{max:.0}"),
            (Some(min), None) => format!("{min:.0}"),
            (None, Some(max)) => format!("{max:.0}"),
            (None, None) => "no estimate".into(),
        };
        suggestions.push(format!(
            "Value estimate off: expected {:.0}-{:.0}, got {}.",
            expected.value_min, expected.value_max, predicted_range
        ));
    }

    if scores.features < 60 && !expected.must_identify_features.is_empty() {
        suggestions.push(format!(
            "Description missed required features: {}.",
            expected.must_identify_features.join(", ")
        ));
    }

    suggestions
}
