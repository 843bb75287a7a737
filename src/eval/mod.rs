//! Evaluation of appraisal predictions against curated ground truth.
//!
//! # Overview
//!
//! - **Single item**: [`evaluate_single`] calls the oracle and scores the
//!   result; [`score_prediction`] scores a prediction you already hold.
//! - **Corpus**: [`EvalHarness`] / [`evaluate_corpus`] walk the corpus,
//!   degrade per-item oracle failures, and aggregate statistics, failure
//!   patterns, and improvement priorities into an
//!   [`EvaluationReport`](crate::schema::EvaluationReport).
//! - **Rendering**: [`format_report`] turns a report into a text summary.
//!
//! # Example
//!
//! ```
//! use curio::{Corpus, EvalOptions, MockOracle, PredictionOutput};
//! use curio::eval::{evaluate_corpus, format_report};
//! # use curio::schema::{EraRange, ExpectedIdentification, GroundTruthItem};
//! # fn item() -> GroundTruthItem {
//! #     GroundTruthItem {
//! #         id: "eames-lounge".into(),
//! #         expected: ExpectedIdentification {
//! #             name: "Eames Lounge Chair".into(),
//! #             name_keywords: vec!["eames".into(), "lounge".into(), "chair".into()],
//! #             maker: None,
//! #             maker_alternatives: vec![],
//! #             era: "Mid-Century Modern".into(),
//! #             era_range: EraRange { start: 1950, end: 1960 },
//! #             style: "Mid-Century Modern".into(),
//! #             style_alternatives: vec![],
//! #             category: "furniture".into(),
//! #             domain_expert: "furniture specialist".into(),
//! #             origin_region: "United States".into(),
//! #             value_min: 1000.0,
//! #             value_max: 2000.0,
//! #             must_identify_features: vec![],
//! #             authentication_markers: vec![],
//! #         },
//! #         difficulty: "easy".into(),
//! #     }
//! # }
//!
//! let corpus = Corpus::new(vec![item()])?;
//! let oracle = MockOracle::new().with_prediction(
//!     "eames-lounge",
//!     PredictionOutput { name: "Eames Lounge Chair".into(), ..Default::default() },
//! );
//!
//! let report = evaluate_corpus(&corpus, &oracle, EvalOptions::default())?;
//! println!("{}", format_report(&report));
//! # Ok::<(), curio::Error>(())
//! ```

mod evaluator;
mod harness;
mod patterns;
mod report;

pub use evaluator::{evaluate_single, score_prediction};
pub use harness::{evaluate_corpus, EvalHarness, EvalOptions};
pub use patterns::PatternAccumulator;
pub use report::format_report;
