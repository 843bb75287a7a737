//! Data model for ground truth, predictions, and evaluation results.
//!
//! Field names serialize as camelCase to match the JSON the curated corpus
//! and the vision-model pipeline already produce.
//!
//! Ownership is one-directional: a [`GroundTruthItem`] is loaded once and
//! never mutated; a [`PredictionOutput`] is created once per oracle call;
//! [`TestResult`] and [`EvaluationReport`] are built by the evaluation layer
//! and read-only downstream.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// Ground Truth
// =============================================================================

/// Inclusive year range an object is expected to date from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EraRange {
    /// Earliest plausible year.
    pub start: i32,
    /// Latest plausible year.
    pub end: i32,
}

/// The expert-authored identification for one object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedIdentification {
    /// Canonical object name.
    pub name: String,
    /// Terms that must appear in a correct name, in importance order.
    pub name_keywords: Vec<String>,
    /// Attributed maker, when attribution exists.
    #[serde(default)]
    pub maker: Option<String>,
    /// Other acceptable maker attributions.
    #[serde(default)]
    pub maker_alternatives: Vec<String>,
    /// Era label, e.g. "Mid-Century Modern" or "circa 1900".
    pub era: String,
    /// Numeric year bounds backing the era label.
    pub era_range: EraRange,
    /// Primary style label.
    pub style: String,
    /// Other acceptable style labels.
    #[serde(default)]
    pub style_alternatives: Vec<String>,
    /// Object category, e.g. "furniture".
    pub category: String,
    /// Appraisal domain this item belongs to, e.g. "furniture specialist".
    pub domain_expert: String,
    /// Region of origin, e.g. "France".
    pub origin_region: String,
    /// Lower bound of fair-market value.
    pub value_min: f64,
    /// Upper bound of fair-market value.
    pub value_max: f64,
    /// Descriptive phrases a correct identification must mention.
    #[serde(default)]
    pub must_identify_features: Vec<String>,
    /// Marks, signatures, or construction details that authenticate the piece.
    #[serde(default)]
    pub authentication_markers: Vec<String>,
}

/// Immutable reference record for one physical object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundTruthItem {
    /// Unique corpus key.
    pub id: String,
    /// The correct identification.
    pub expected: ExpectedIdentification,
    /// Curator-assigned difficulty label, e.g. "easy", "hard".
    pub difficulty: String,
}

// =============================================================================
// Prediction
// =============================================================================

/// Structured output from the external vision-model oracle for one image.
///
/// Optional fields are `None` when the model declined to answer that
/// dimension; scorers treat a missing required field as a zero-score miss,
/// never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PredictionOutput {
    /// Predicted object name.
    pub name: String,
    /// Predicted maker, if the model attributed one.
    #[serde(default)]
    pub maker: Option<String>,
    /// Predicted era as free text, e.g. "circa 1975".
    #[serde(default)]
    pub era: Option<String>,
    /// Predicted style label.
    #[serde(default)]
    pub style: Option<String>,
    /// Predicted category.
    #[serde(default)]
    pub category: Option<String>,
    /// Appraisal domain the model routed the item to.
    #[serde(default)]
    pub domain_expert: Option<String>,
    /// Predicted region of origin.
    #[serde(default)]
    pub origin_region: Option<String>,
    /// Lower bound of the predicted value range.
    #[serde(default)]
    pub estimated_value_min: Option<f64>,
    /// Upper bound of the predicted value range.
    #[serde(default)]
    pub estimated_value_max: Option<f64>,
    /// Free-text description of the object.
    #[serde(default)]
    pub description: String,
    /// Free-text historical context.
    #[serde(default)]
    pub historical_context: String,
    /// Observations supporting the identification.
    #[serde(default)]
    pub evidence_for: Vec<String>,
    /// Observations cutting against the identification.
    #[serde(default)]
    pub evidence_against: Vec<String>,
    /// Model self-reported confidence in [0, 1].
    #[serde(default)]
    pub confidence: f64,
}

// =============================================================================
// Scores and Results
// =============================================================================

/// Per-dimension match scores, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldScores {
    /// Object name match.
    pub name: u8,
    /// Maker attribution match.
    pub maker: u8,
    /// Era/date match.
    pub era: u8,
    /// Style match.
    pub style: u8,
    /// Category match.
    pub category: u8,
    /// Appraisal-domain routing match.
    pub domain: u8,
    /// Origin region match.
    pub origin: u8,
    /// Value range match.
    pub value: u8,
    /// Required-feature coverage.
    pub features: u8,
    /// Authentication-marker coverage.
    pub markers: u8,
}

impl FieldScores {
    /// All dimension names paired with their scores, in fixed order.
    ///
    /// The order here is the order dimensions appear in classification
    /// lists and reports.
    #[must_use]
    pub fn named(&self) -> [(&'static str, u8); 10] {
        [
            ("name", self.name),
            ("maker", self.maker),
            ("era", self.era),
            ("style", self.style),
            ("category", self.category),
            ("domain", self.domain),
            ("origin", self.origin),
            ("value", self.value),
            ("features", self.features),
            ("markers", self.markers),
        ]
    }
}

/// Outcome of evaluating one prediction against one ground-truth item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    /// Id of the ground-truth item evaluated.
    pub item_id: String,
    /// The oracle's prediction, or `None` when the call failed.
    pub prediction: Option<PredictionOutput>,
    /// Error message when the oracle call failed.
    pub error: Option<String>,
    /// Per-dimension scores (all zero when `error` is set).
    pub scores: FieldScores,
    /// Weighted overall score, 0-100.
    pub overall_score: u8,
    /// Dimensions scored exactly 100.
    pub successes: Vec<String>,
    /// Dimensions scored 70-99.
    pub partial_matches: Vec<String>,
    /// Dimensions scored below 70.
    pub failures: Vec<String>,
    /// Templated guidance for the lowest-scoring dimensions.
    pub improvement_suggestions: Vec<String>,
}

impl TestResult {
    /// Build the degraded result recorded when the oracle call fails.
    ///
    /// All scores stay at their zero defaults; the run continues.
    #[must_use]
    pub fn errored(item_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            prediction: None,
            error: Some(error.into()),
            scores: FieldScores::default(),
            overall_score: 0,
            successes: Vec::new(),
            partial_matches: Vec::new(),
            failures: Vec::new(),
            improvement_suggestions: Vec::new(),
        }
    }

    /// One-line rendering used in report listings.
    #[must_use]
    pub fn summary(&self) -> String {
        match &self.error {
            Some(err) => format!("{}: ERRORED ({})", self.item_id, err),
            None => format!(
                "{}: {}/100 ({} exact, {} partial, {} missed)",
                self.item_id,
                self.overall_score,
                self.successes.len(),
                self.partial_matches.len(),
                self.failures.len()
            ),
        }
    }
}

// =============================================================================
// Aggregate Report
// =============================================================================

/// Item count and mean score for one appraisal domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStats {
    /// Items evaluated in this domain.
    pub items: usize,
    /// Mean overall score for this domain.
    pub average_score: f64,
}

/// Five-band histogram of overall scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDistribution {
    /// Scores 90-100.
    pub excellent: usize,
    /// Scores 75-89.
    pub good: usize,
    /// Scores 60-74.
    pub acceptable: usize,
    /// Scores 40-59.
    pub poor: usize,
    /// Scores below 40.
    pub failed: usize,
}

impl ScoreDistribution {
    /// Count one overall score into its band.
    pub fn record(&mut self, score: u8) {
        match score {
            90..=100 => self.excellent += 1,
            75..=89 => self.good += 1,
            60..=74 => self.acceptable += 1,
            40..=59 => self.poor += 1,
            _ => self.failed += 1,
        }
    }
}

/// A recurring low-score outcome mined across many items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailurePattern {
    /// Pattern key, e.g. "name identification failure in furniture".
    pub pattern: String,
    /// How many items exhibited it.
    pub count: usize,
    /// Ids of the contributing items.
    pub item_ids: Vec<String>,
}

/// Aggregate outcome of one corpus evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    /// Items evaluated (including errored ones).
    pub total_items: usize,
    /// Items whose oracle call failed.
    pub errored_items: usize,
    /// Pass/fail-gated accuracy: the mean score when it is at least 70,
    /// otherwise exactly 0. Use [`Self::average_score`] for the raw mean.
    pub overall_accuracy: f64,
    /// Ungated mean of overall scores.
    pub average_score: f64,
    /// Median overall score (sorted scores at index `len / 2`).
    pub median_score: f64,
    /// Per-appraisal-domain breakdown, keyed by domain label.
    pub category_breakdown: BTreeMap<String, CategoryStats>,
    /// Histogram of overall scores.
    pub score_distribution: ScoreDistribution,
    /// Top recurring failure patterns, highest count first.
    pub failure_patterns: Vec<FailurePattern>,
    /// Ranked guidance on where improvement matters most.
    pub improvement_priorities: Vec<String>,
    /// Every per-item result, in evaluation order.
    pub results: Vec<TestResult>,
}
