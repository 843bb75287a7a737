//! Text rendering of evaluation reports.
//!
//! Pure presentation: every number printed here was computed by the
//! harness; nothing is recalculated or adjusted.

use std::fmt;

use crate::schema::EvaluationReport;

/// Patterns shown in the rendered report (the full report keeps more).
const RENDERED_PATTERNS: usize = 5;

/// Render a report as a fixed-layout text block.
///
/// Sections: headline stats, score distribution, per-category table, top
/// failure patterns, improvement priorities.
#[must_use]
pub fn format_report(report: &EvaluationReport) -> String {
    let mut out = String::new();

    out.push_str("=== Appraisal Evaluation Report ===\n");
    out.push_str(&format!(
        "Items evaluated: {} ({} errored)\n",
        report.total_items, report.errored_items
    ));
    out.push_str(&format!("Overall accuracy: {:.1}%\n", report.overall_accuracy));
    out.push_str(&format!("Average score:    {:.1}\n", report.average_score));
    out.push_str(&format!("Median score:     {:.1}\n\n", report.median_score));

    out.push_str("## Score Distribution\n");
    let dist = &report.score_distribution;
    out.push_str(&format!("  excellent (90-100): {}\n", dist.excellent));
    out.push_str(&format!("  good      (75-89):  {}\n", dist.good));
    out.push_str(&format!("  acceptable (60-74): {}\n", dist.acceptable));
    out.push_str(&format!("  poor      (40-59):  {}\n", dist.poor));
    out.push_str(&format!("  failed    (<40):    {}\n\n", dist.failed));

    if !report.category_breakdown.is_empty() {
        out.push_str("## Per-Category Results\n");
        for (category, stats) in &report.category_breakdown {
            out.push_str(&format!(
                "  {:24} avg={:5.1} (n={})\n",
                category, stats.average_score, stats.items
            ));
        }
        out.push('\n');
    }

    if !report.failure_patterns.is_empty() {
        out.push_str("## Top Failure Patterns\n");
        for pattern in report.failure_patterns.iter().take(RENDERED_PATTERNS) {
            out.push_str(&format!("  - {} ({}x)\n", pattern.pattern, pattern.count));
        }
        out.push('\n');
    }

    if !report.improvement_priorities.is_empty() {
        out.push_str("## Improvement Priorities\n");
        for (rank, priority) in report.improvement_priorities.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", rank + 1, priority));
        }
    }

    out
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_report(self))
    }
}
