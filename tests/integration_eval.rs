//! End-to-end evaluation scenarios.
//!
//! Each test drives the public API the way a caller would: build a corpus,
//! wire up an oracle, run the harness, inspect the report.

use curio::eval::format_report;
use curio::schema::{EraRange, ExpectedIdentification, GroundTruthItem, PredictionOutput};
use curio::{evaluate_corpus, score_prediction, Corpus, EvalOptions, MockOracle};

fn eames_item(id: &str) -> GroundTruthItem {
    GroundTruthItem {
        id: id.into(),
        expected: ExpectedIdentification {
            name: "Eames Lounge Chair".into(),
            name_keywords: vec!["eames".into(), "lounge".into(), "chair".into()],
            maker: Some("Herman Miller".into()),
            maker_alternatives: vec!["Vitra".into()],
            era: "Mid-Century Modern".into(),
            era_range: EraRange { start: 1950, end: 1960 },
            style: "Mid-Century Modern".into(),
            style_alternatives: vec![],
            category: "furniture".into(),
            domain_expert: "furniture specialist".into(),
            origin_region: "United States".into(),
            value_min: 1000.0,
            value_max: 2000.0,
            must_identify_features: vec!["molded plywood".into()],
            authentication_markers: vec![],
        },
        difficulty: "easy".into(),
    }
}

fn perfect_prediction() -> PredictionOutput {
    PredictionOutput {
        name: "Herman Miller Eames Lounge Chair".into(),
        maker: Some("Herman Miller".into()),
        era: Some("circa 1956".into()),
        style: Some("Mid-Century Modern".into()),
        category: Some("furniture".into()),
        domain_expert: Some("furniture specialist".into()),
        origin_region: Some("United States".into()),
        estimated_value_min: Some(1000.0),
        estimated_value_max: Some(2000.0),
        description: "Molded plywood lounge chair with rosewood veneer".into(),
        confidence: 0.95,
        ..PredictionOutput::default()
    }
}

fn junk_prediction() -> PredictionOutput {
    PredictionOutput {
        name: "woven basket".into(),
        ..PredictionOutput::default()
    }
}

/// Brand-prefixed names still count as exact: substring containment wins.
#[test]
fn test_scenario_brand_prefixed_name() {
    let result = score_prediction(
        &eames_item("eames"),
        PredictionOutput {
            name: "Herman Miller Eames Lounge Chair".into(),
            ..PredictionOutput::default()
        },
    );
    assert_eq!(result.scores.name, 100);
}

/// "circa 1975" against 1950-1960 is 15 years out: the 25-year band.
#[test]
fn test_scenario_era_distance_band() {
    let result = score_prediction(
        &eames_item("eames"),
        PredictionOutput {
            name: "chair".into(),
            era: Some("circa 1975".into()),
            ..PredictionOutput::default()
        },
    );
    assert_eq!(result.scores.era, 50);
}

/// Overlap of 200 against an expected size of 1000: round(60 + 0.2*40) = 68.
#[test]
fn test_scenario_value_overlap() {
    let result = score_prediction(
        &eames_item("eames"),
        PredictionOutput {
            name: "chair".into(),
            estimated_value_min: Some(1800.0),
            estimated_value_max: Some(2500.0),
            ..PredictionOutput::default()
        },
    );
    assert_eq!(result.scores.value, 68);
}

/// Five items, three excellent and two failed: the histogram shows exactly
/// that split and the median comes from the sorted middle element.
#[test]
fn test_scenario_corpus_distribution() {
    let items: Vec<GroundTruthItem> = (0..5).map(|i| eames_item(&format!("item-{i}"))).collect();
    let corpus = Corpus::new(items).unwrap();
    let mut oracle = MockOracle::new();
    for i in 0..3 {
        oracle = oracle.with_prediction(format!("item-{i}"), perfect_prediction());
    }
    for i in 3..5 {
        oracle = oracle.with_prediction(format!("item-{i}"), junk_prediction());
    }

    let report = evaluate_corpus(&corpus, &oracle, EvalOptions::default()).unwrap();
    let dist = report.score_distribution;
    assert_eq!(dist.excellent, 3);
    assert_eq!(dist.failed, 2);
    assert_eq!(dist.good + dist.acceptable + dist.poor, 0);
    assert_eq!(report.median_score, 100.0);
}

/// A failing oracle call yields an errored result with zeroed scores and
/// the rest of the corpus is still evaluated and reported.
#[test]
fn test_scenario_oracle_failure_mid_corpus() {
    let corpus = Corpus::new(vec![
        eames_item("first"),
        eames_item("broken"),
        eames_item("last"),
    ])
    .unwrap();
    // "broken" is unregistered, so the oracle errors on it.
    let oracle = MockOracle::new()
        .with_prediction("first", perfect_prediction())
        .with_prediction("last", perfect_prediction());

    let report = evaluate_corpus(&corpus, &oracle, EvalOptions::default()).unwrap();
    assert_eq!(report.total_items, 3);
    assert_eq!(report.errored_items, 1);

    let broken = report.results.iter().find(|r| r.item_id == "broken").unwrap();
    assert!(broken.error.is_some());
    assert_eq!(broken.overall_score, 0);
    assert!(broken.prediction.is_none());

    let first = report.results.iter().find(|r| r.item_id == "first").unwrap();
    assert_eq!(first.overall_score, 100);
}

#[test]
fn test_report_renders_and_round_trips() {
    let corpus = Corpus::new(vec![eames_item("a"), eames_item("b")]).unwrap();
    let oracle = MockOracle::new()
        .with_prediction("a", perfect_prediction())
        .with_prediction("b", junk_prediction());

    let report = evaluate_corpus(&corpus, &oracle, EvalOptions::default()).unwrap();

    let text = format_report(&report);
    assert!(text.contains("=== Appraisal Evaluation Report ==="));
    assert!(text.contains("Items evaluated: 2"));
    assert!(text.contains("furniture specialist"));

    // A run's report survives serialization for later replay.
    let json = serde_json::to_string(&report).unwrap();
    let back: curio::EvaluationReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_corpus_loading_from_json() {
    let json = serde_json::to_string(&vec![eames_item("from-json")]).unwrap();
    let corpus = Corpus::from_json(&json).unwrap();
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.get("from-json").unwrap().expected.category, "furniture");
}
