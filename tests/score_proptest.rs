//! Property-based tests for the field scorers.

use curio::normalize::normalize;
use curio::schema::{EraRange, ExpectedIdentification, PredictionOutput};
use curio::score::{score_features, score_name, score_value};
use proptest::prelude::*;

fn expected_with_name(name: &str) -> ExpectedIdentification {
    ExpectedIdentification {
        name: name.into(),
        name_keywords: vec![name.into()],
        maker: None,
        maker_alternatives: vec![],
        era: "unspecified".into(),
        era_range: EraRange { start: 1800, end: 1900 },
        style: "unspecified".into(),
        style_alternatives: vec![],
        category: "misc".into(),
        domain_expert: "generalist".into(),
        origin_region: "unknown".into(),
        value_min: 1000.0,
        value_max: 2000.0,
        must_identify_features: vec![],
        authentication_markers: vec![],
    }
}

fn prediction_with_name(name: &str) -> PredictionOutput {
    PredictionOutput {
        name: name.into(),
        ..PredictionOutput::default()
    }
}

/// Score a 500-wide predicted range whose lower bound sits `offset` above
/// the expected minimum of 1000.
fn value_score_at_offset(offset: f64) -> u8 {
    let expected = expected_with_name("fixture");
    let prediction = PredictionOutput {
        name: "fixture".into(),
        estimated_value_min: Some(1000.0 + offset),
        estimated_value_max: Some(1500.0 + offset),
        ..PredictionOutput::default()
    };
    score_value(&expected, &prediction)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Identical names after normalization always score 100.
    #[test]
    fn identical_name_scores_100(name in "[a-zA-Z0-9 ]{1,40}") {
        prop_assume!(!normalize(&name).is_empty());
        let expected = expected_with_name(&name);
        let prediction = prediction_with_name(&name);
        prop_assert_eq!(score_name(&expected, &prediction), 100);
    }

    /// Every scorer output stays within 0-100.
    #[test]
    fn name_score_bounded(a in ".{0,40}", b in ".{0,40}") {
        let expected = expected_with_name(&a);
        let prediction = prediction_with_name(&b);
        prop_assert!(score_name(&expected, &prediction) <= 100);
    }

    /// Sliding a fixed-width predicted range further from the expected
    /// range never raises the value score.
    #[test]
    fn value_score_non_increasing_with_distance(
        near in 0.0f64..4000.0,
        extra in 0.0f64..4000.0,
    ) {
        let far = near + extra;
        prop_assert!(
            value_score_at_offset(far) <= value_score_at_offset(near),
            "score rose as the range moved away: offset {} -> {}, score {} -> {}",
            near, far, value_score_at_offset(near), value_score_at_offset(far)
        );
    }

    /// An empty requirement list is vacuously satisfied no matter what the
    /// prediction says.
    #[test]
    fn empty_feature_list_scores_100(description in ".{0,80}") {
        let expected = expected_with_name("fixture");
        let prediction = PredictionOutput {
            name: "anything".into(),
            description,
            ..PredictionOutput::default()
        };
        prop_assert_eq!(score_features(&expected, &prediction), 100);
    }
}
