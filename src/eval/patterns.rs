//! Cross-item failure-pattern mining.
//!
//! Individual low scores say an item went wrong; patterns say a *kind* of
//! item keeps going wrong. Each result contributes pattern keys derived
//! from its weak dimensions, and the accumulated counts rank what to fix
//! first.

use std::collections::HashMap;

use crate::schema::{FailurePattern, GroundTruthItem, TestResult};

/// Overall scores below this mark an item as failing for its difficulty level.
const OVERALL_FAILING: u8 = 60;

/// Accumulates failure-pattern observations across a corpus run.
#[derive(Debug, Default)]
pub struct PatternAccumulator {
    observed: HashMap<String, Vec<String>>,
}

impl PatternAccumulator {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive pattern keys from one result and record them.
    pub fn record(&mut self, item: &GroundTruthItem, result: &TestResult) {
        for key in derive_patterns(item, result) {
            self.observed.entry(key).or_default().push(result.item_id.clone());
        }
    }

    /// The `limit` most frequent patterns, highest count first.
    ///
    /// Ties break on the pattern key so repeated runs over the same results
    /// rank identically.
    #[must_use]
    pub fn top(&self, limit: usize) -> Vec<FailurePattern> {
        let mut patterns: Vec<FailurePattern> = self
            .observed
            .iter()
            .map(|(pattern, item_ids)| FailurePattern {
                pattern: pattern.clone(),
                count: item_ids.len(),
                item_ids: item_ids.clone(),
            })
            .collect();
        patterns.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.pattern.cmp(&b.pattern)));
        patterns.truncate(limit);
        patterns
    }
}

fn derive_patterns(item: &GroundTruthItem, result: &TestResult) -> Vec<String> {
    let expected = &item.expected;
    let scores = &result.scores;
    let mut keys = Vec::new();

    if scores.name < 70 {
        keys.push(format!("name identification failure in {}", expected.category));
    }
    if scores.maker < 70 && expected.maker.is_some() {
        keys.push(format!("maker attribution failure in {}", expected.category));
    }
    if scores.value < 60 {
        keys.push(format!("value estimation off in {}", expected.category));
    }
    if scores.style < 70 {
        keys.push(format!("style identification failure for {}", expected.style));
    }
    if result.overall_score < OVERALL_FAILING {
        keys.push(format!("difficulty level {} items failing", item.difficulty));
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EraRange, ExpectedIdentification, FieldScores};

    fn item(id: &str, category: &str, difficulty: &str) -> GroundTruthItem {
        GroundTruthItem {
            id: id.into(),
            expected: ExpectedIdentification {
                name: "thing".into(),
                name_keywords: vec!["thing".into()],
                maker: Some("Maker".into()),
                maker_alternatives: vec![],
                era: "old".into(),
                era_range: EraRange { start: 1900, end: 1950 },
                style: "Art Deco".into(),
                style_alternatives: vec![],
                category: category.into(),
                domain_expert: "generalist".into(),
                origin_region: "Europe".into(),
                value_min: 100.0,
                value_max: 200.0,
                must_identify_features: vec![],
                authentication_markers: vec![],
            },
            difficulty: difficulty.into(),
        }
    }

    fn result_with(id: &str, scores: FieldScores, overall: u8) -> TestResult {
        TestResult {
            item_id: id.into(),
            prediction: None,
            error: None,
            scores,
            overall_score: overall,
            successes: vec![],
            partial_matches: vec![],
            failures: vec![],
            improvement_suggestions: vec![],
        }
    }

    fn good_scores() -> FieldScores {
        FieldScores {
            name: 100,
            maker: 100,
            era: 100,
            style: 100,
            category: 100,
            domain: 100,
            origin: 100,
            value: 100,
            features: 100,
            markers: 100,
        }
    }

    #[test]
    fn test_no_patterns_from_clean_result() {
        let mut acc = PatternAccumulator::new();
        acc.record(&item("a", "furniture", "easy"), &result_with("a", good_scores(), 95));
        assert!(acc.top(10).is_empty());
    }

    #[test]
    fn test_name_pattern_keyed_by_category() {
        let mut acc = PatternAccumulator::new();
        let mut scores = good_scores();
        scores.name = 40;
        acc.record(&item("a", "ceramics", "easy"), &result_with("a", scores, 85));
        let top = acc.top(10);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].pattern, "name identification failure in ceramics");
        assert_eq!(top[0].item_ids, vec!["a"]);
    }

    #[test]
    fn test_maker_pattern_requires_expected_maker() {
        let mut acc = PatternAccumulator::new();
        let mut unattributed = item("a", "ceramics", "easy");
        unattributed.expected.maker = None;
        let mut scores = good_scores();
        scores.maker = 0;
        acc.record(&unattributed, &result_with("a", scores, 85));
        assert!(acc.top(10).is_empty());
    }

    #[test]
    fn test_low_overall_keys_on_difficulty() {
        let mut acc = PatternAccumulator::new();
        let mut scores = good_scores();
        scores.name = 0;
        scores.style = 0;
        acc.record(&item("a", "furniture", "expert"), &result_with("a", scores, 30));
        let patterns: Vec<String> = acc.top(10).into_iter().map(|p| p.pattern).collect();
        assert!(patterns.contains(&"difficulty level expert items failing".to_string()));
    }

    #[test]
    fn test_ranking_is_count_then_key() {
        let mut acc = PatternAccumulator::new();
        let mut name_low = good_scores();
        name_low.name = 10;
        // Two name failures in furniture, one in ceramics.
        acc.record(&item("a", "furniture", "easy"), &result_with("a", name_low, 80));
        acc.record(&item("b", "furniture", "easy"), &result_with("b", name_low, 80));
        acc.record(&item("c", "ceramics", "easy"), &result_with("c", name_low, 80));

        let top = acc.top(10);
        assert_eq!(top[0].pattern, "name identification failure in furniture");
        assert_eq!(top[0].count, 2);
        assert_eq!(top[1].count, 1);
    }

    #[test]
    fn test_truncates_to_limit() {
        let mut acc = PatternAccumulator::new();
        for (idx, category) in ["a", "b", "c"].iter().enumerate() {
            let mut scores = good_scores();
            scores.name = 10;
            let id = format!("item-{idx}");
            acc.record(&item(&id, category, "easy"), &result_with(&id, scores, 80));
        }
        assert_eq!(acc.top(2).len(), 2);
    }
}
