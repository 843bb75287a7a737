//! # curio
//!
//! Appraisal evaluation for Rust.
//!
//! `curio` scores the structured output of an antique-identification model
//! against expert-curated ground truth and reports calibrated accuracy
//! with diagnostic failure analysis.
//!
//! - **Field scoring**: tiered fuzzy matching per dimension (name, maker,
//!   era, style, category, domain, origin, value, features, markers)
//! - **Aggregation**: a fixed weight table folds field scores into one
//!   overall score per item
//! - **Corpus runs**: sequential evaluation with degraded-not-fatal oracle
//!   failures, score distributions, per-domain breakdowns, failure-pattern
//!   mining, and improvement priorities
//!
//! ## Quick Start
//!
//! ```
//! use curio::{score_prediction, PredictionOutput};
//! # use curio::schema::{EraRange, ExpectedIdentification, GroundTruthItem};
//! # let item = GroundTruthItem {
//! #     id: "eames-lounge".into(),
//! #     expected: ExpectedIdentification {
//! #         name: "Eames Lounge Chair".into(),
//! #         name_keywords: vec!["eames".into(), "lounge".into(), "chair".into()],
//! #         maker: None,
//! #         maker_alternatives: vec![],
//! #         era: "Mid-Century Modern".into(),
//! #         era_range: EraRange { start: 1950, end: 1960 },
//! #         style: "Mid-Century Modern".into(),
//! #         style_alternatives: vec![],
//! #         category: "furniture".into(),
//! #         domain_expert: "furniture specialist".into(),
//! #         origin_region: "United States".into(),
//! #         value_min: 1000.0,
//! #         value_max: 2000.0,
//! #         must_identify_features: vec![],
//! #         authentication_markers: vec![],
//! #     },
//! #     difficulty: "easy".into(),
//! # };
//!
//! let prediction = PredictionOutput {
//!     name: "Herman Miller Eames Lounge Chair".into(),
//!     ..Default::default()
//! };
//! let result = score_prediction(&item, prediction);
//! assert_eq!(result.scores.name, 100);
//! ```
//!
//! ## Architecture
//!
//! | Layer | Module | Role |
//! |-------|--------|------|
//! | Text | [`normalize`], [`similarity`] | canonical form, edit-distance ratio |
//! | Config | [`vocab`] | weight table, synonym/vocabulary tables |
//! | Scoring | [`score`] | ten tiered field scorers + aggregate |
//! | Data | [`schema`], [`corpus`] | ground truth, predictions, results |
//! | Runs | [`eval`] | single-item and corpus evaluation, reports |
//!
//! The prediction model itself is outside the crate: anything implementing
//! [`Oracle`] can be evaluated, and per-item oracle failures are recorded
//! on the result rather than aborting a run.
//!
//! ## Design Philosophy
//!
//! - **Pure scorers**: every field scorer is a total function; missing
//!   prediction fields are zero-score misses, never panics
//! - **Tables over branches**: matching vocabularies and weights are
//!   immutable configuration data, not code
//! - **Degrade, don't abort**: a corpus run survives any single item

#![warn(missing_docs)]

pub mod corpus;
mod error;
pub mod eval;
pub mod normalize;
mod oracle;
pub mod schema;
pub mod score;
pub mod similarity;
pub mod vocab;

pub use corpus::Corpus;
pub use error::{Error, Result};
pub use eval::{evaluate_corpus, evaluate_single, format_report, score_prediction, EvalHarness, EvalOptions};
pub use oracle::{MockOracle, Oracle};
pub use schema::{
    EvaluationReport, FieldScores, GroundTruthItem, PredictionOutput, TestResult,
};
pub use vocab::ScoreWeights;
