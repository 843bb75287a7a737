//! Corpus-level evaluation runs.
//!
//! Walks the ground-truth corpus in order, evaluates each item against the
//! oracle, and folds the per-item results into one [`EvaluationReport`]:
//! headline statistics, a score histogram, per-domain breakdowns, mined
//! failure patterns, and ranked improvement priorities.
//!
//! Items are processed sequentially so progress logs and result order are
//! reproducible. Per-item oracle failures are recorded and the run
//! continues; only an empty corpus aborts it.
//!
//! # Usage
//!
//! ```
//! use curio::{Corpus, EvalHarness, EvalOptions, MockOracle};
//!
//! let corpus = Corpus::new(vec![])        // items elided
//!     .unwrap();
//! let oracle = MockOracle::new();
//! let report = EvalHarness::new(&corpus, &oracle)
//!     .with_options(EvalOptions::default().with_max_items(25))
//!     .run();
//! assert!(report.is_err()); // empty corpus is the one hard failure
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::corpus::Corpus;
use crate::error::{Error, Result};
use crate::eval::evaluator::evaluate_single;
use crate::eval::patterns::PatternAccumulator;
use crate::oracle::Oracle;
use crate::schema::{
    CategoryStats, EvaluationReport, GroundTruthItem, ScoreDistribution, TestResult,
};

/// Field or category averages below this trigger an improvement priority.
const PRIORITY_THRESHOLD: f64 = 70.0;

/// Mean scores below this gate `overall_accuracy` to zero.
const ACCURACY_GATE: f64 = 70.0;

/// How many mined failure patterns a report keeps.
const TOP_PATTERNS: usize = 10;

// =============================================================================
// Options
// =============================================================================

/// Configuration for a corpus evaluation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvalOptions {
    /// Evaluate at most this many items (after skips). `None` = all.
    pub max_items: Option<usize>,
    /// Item ids to leave out of the run.
    pub skip_ids: Vec<String>,
}

impl EvalOptions {
    /// Cap the number of items evaluated.
    #[must_use]
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    /// Skip the given item ids.
    #[must_use]
    pub fn skipping(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.skip_ids.extend(ids.into_iter().map(Into::into));
        self
    }
}

// =============================================================================
// Harness
// =============================================================================

/// Runs a corpus of ground-truth items through an oracle and aggregates
/// the outcome.
pub struct EvalHarness<'a> {
    corpus: &'a Corpus,
    oracle: &'a dyn Oracle,
    options: EvalOptions,
}

impl<'a> EvalHarness<'a> {
    /// Create a harness over a corpus and oracle with default options.
    #[must_use]
    pub fn new(corpus: &'a Corpus, oracle: &'a dyn Oracle) -> Self {
        Self {
            corpus,
            oracle,
            options: EvalOptions::default(),
        }
    }

    /// Replace the run options.
    #[must_use]
    pub fn with_options(mut self, options: EvalOptions) -> Self {
        self.options = options;
        self
    }

    /// Evaluate every selected item and build the aggregate report.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCorpus`] when no items remain after applying
    /// the options. Per-item oracle failures never abort the run.
    pub fn run(&self) -> Result<EvaluationReport> {
        let selected: Vec<&GroundTruthItem> = self
            .corpus
            .items()
            .iter()
            .filter(|item| !self.options.skip_ids.iter().any(|id| id == &item.id))
            .take(self.options.max_items.unwrap_or(usize::MAX))
            .collect();

        if selected.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        log::info!(
            "evaluating {} items against oracle '{}'",
            selected.len(),
            self.oracle.name()
        );

        let mut results = Vec::with_capacity(selected.len());
        for (index, item) in selected.iter().enumerate() {
            log::info!("[{}/{}] {}", index + 1, selected.len(), item.id);
            let result = evaluate_single(item, self.oracle);
            log::info!("  -> {}", result.summary());
            results.push(result);
        }

        Ok(build_report(&selected, results))
    }
}

/// One-call convenience wrapper over [`EvalHarness`].
pub fn evaluate_corpus(
    corpus: &Corpus,
    oracle: &dyn Oracle,
    options: EvalOptions,
) -> Result<EvaluationReport> {
    EvalHarness::new(corpus, oracle).with_options(options).run()
}

// =============================================================================
// Aggregation
// =============================================================================

fn build_report(items: &[&GroundTruthItem], results: Vec<TestResult>) -> EvaluationReport {
    let total_items = results.len();
    let errored_items = results.iter().filter(|r| r.error.is_some()).count();

    let mut sorted_scores: Vec<u8> = results.iter().map(|r| r.overall_score).collect();
    sorted_scores.sort_unstable();
    let average_score =
        sorted_scores.iter().map(|&s| f64::from(s)).sum::<f64>() / total_items as f64;
    let median_score = f64::from(sorted_scores[total_items / 2]);
    let overall_accuracy = if average_score >= ACCURACY_GATE {
        average_score
    } else {
        0.0
    };

    let mut score_distribution = ScoreDistribution::default();
    for result in &results {
        score_distribution.record(result.overall_score);
    }

    let mut category_totals: BTreeMap<String, (usize, f64)> = BTreeMap::new();
    let mut patterns = PatternAccumulator::new();
    for (item, result) in items.iter().zip(&results) {
        let entry = category_totals
            .entry(item.expected.domain_expert.clone())
            .or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += f64::from(result.overall_score);
        patterns.record(item, result);
    }
    let category_breakdown: BTreeMap<String, CategoryStats> = category_totals
        .into_iter()
        .map(|(category, (count, total))| {
            (
                category,
                CategoryStats {
                    items: count,
                    average_score: total / count as f64,
                },
            )
        })
        .collect();

    let improvement_priorities = build_priorities(&category_breakdown, &results);

    EvaluationReport {
        total_items,
        errored_items,
        overall_accuracy,
        average_score,
        median_score,
        category_breakdown,
        score_distribution,
        failure_patterns: patterns.top(TOP_PATTERNS),
        improvement_priorities,
        results,
    }
}

fn build_priorities(
    category_breakdown: &BTreeMap<String, CategoryStats>,
    results: &[TestResult],
) -> Vec<String> {
    let mut priorities = Vec::new();

    let weakest = category_breakdown.iter().min_by(|a, b| {
        a.1.average_score
            .partial_cmp(&b.1.average_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if let Some((category, stats)) = weakest {
        if stats.average_score < PRIORITY_THRESHOLD {
            priorities.push(format!(
                "Focus on {} items: averaging {:.1}/100",
                category, stats.average_score
            ));
        }
    }

    let field_average = |pick: fn(&TestResult) -> u8| {
        results.iter().map(|r| f64::from(pick(r))).sum::<f64>() / results.len() as f64
    };

    let value_average = field_average(|r| r.scores.value);
    if value_average < PRIORITY_THRESHOLD {
        priorities.push(format!(
            "Improve value estimation: corpus average {value_average:.1}/100"
        ));
    }
    let maker_average = field_average(|r| r.scores.maker);
    if maker_average < PRIORITY_THRESHOLD {
        priorities.push(format!(
            "Improve maker attribution: corpus average {maker_average:.1}/100"
        ));
    }
    let feature_average = field_average(|r| r.scores.features);
    if feature_average < PRIORITY_THRESHOLD {
        priorities.push(format!(
            "Improve feature coverage: corpus average {feature_average:.1}/100"
        ));
    }

    priorities
}
