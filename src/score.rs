//! Per-dimension field scorers and the weighted aggregate.
//!
//! Every scorer follows the same shape: try the strict check first, fall
//! through to fuzzier checks, floor at zero. Each takes the expected
//! identification and the raw prediction and returns an integer score
//! 0-100. All scorers are pure; a missing prediction field is a zero-score
//! miss, never an error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::normalize;
use crate::schema::{ExpectedIdentification, FieldScores, PredictionOutput};
use crate::similarity::similarity;
use crate::vocab::{ScoreWeights, MATERIAL_WORDS, OBJECT_TYPE_WORDS, STYLE_SYNONYMS};

// No word boundaries: era text like "1950s" still carries a usable year.
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").expect("valid year regex"));

static PERIOD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,2}(?:st|nd|rd|th) century\b").expect("valid period regex"));

// =============================================================================
// Name
// =============================================================================

/// Score the predicted object name against the expected one.
///
/// Tiers: exact/substring match, edit-distance similarity, required-keyword
/// coverage, shared object-type term, shared material term.
#[must_use]
pub fn score_name(expected: &ExpectedIdentification, prediction: &PredictionOutput) -> u8 {
    let truth = normalize(&expected.name);
    let predicted = normalize(&prediction.name);
    if predicted.is_empty() || truth.is_empty() {
        return 0;
    }
    if truth == predicted || truth.contains(&predicted) || predicted.contains(&truth) {
        return 100;
    }

    let sim = similarity(&truth, &predicted);
    if sim > 0.85 {
        return 95;
    }
    if sim > 0.70 {
        return 85;
    }

    let keywords: Vec<String> = expected.name_keywords.iter().map(|k| normalize(k)).collect();
    if !keywords.is_empty() {
        let matched = keywords
            .iter()
            .filter(|k| !k.is_empty() && predicted.contains(k.as_str()))
            .count();
        let coverage = matched as f64 / keywords.len() as f64;
        if coverage >= 1.0 {
            return 95;
        }
        if coverage >= 0.75 {
            return 85;
        }
        if coverage >= 0.5 {
            return 70;
        }
        if coverage >= 0.25 {
            return 50;
        }
        if matched >= 2 {
            return 60;
        }
        if matched == 1 {
            return 35;
        }
    }

    // Both texts at least agree on what kind of object this is.
    if OBJECT_TYPE_WORDS
        .iter()
        .any(|word| contains_word(&truth, word) && contains_word(&predicted, word))
    {
        return 35;
    }
    if MATERIAL_WORDS
        .iter()
        .any(|word| contains_word(&truth, word) && contains_word(&predicted, word))
    {
        return 20;
    }
    0
}

// =============================================================================
// Maker
// =============================================================================

/// Score the predicted maker attribution.
///
/// When no maker is expected, an abstaining prediction scores 100 and an
/// overclaiming one 50. When a maker is expected, matching falls through
/// substring, similarity, the name-field conflation case, the alternatives
/// list, and finally word overlap.
#[must_use]
pub fn score_maker(expected: &ExpectedIdentification, prediction: &PredictionOutput) -> u8 {
    let Some(expected_maker) = expected.maker.as_deref() else {
        return match prediction.maker.as_deref() {
            None => 100,
            Some(claimed) => {
                let claimed = normalize(claimed);
                if claimed.is_empty()
                    || claimed.contains("unknown")
                    || claimed.contains("unattributed")
                {
                    100
                } else {
                    50
                }
            }
        };
    };

    let truth = normalize(expected_maker);
    let predicted = prediction.maker.as_deref().map(normalize).unwrap_or_default();

    if !predicted.is_empty()
        && (predicted.contains(&truth)
            || truth.contains(&predicted)
            || similarity(&truth, &predicted) > 0.8)
    {
        return 100;
    }

    // Models often fold the maker into the object name ("Herman Miller
    // Eames chair") and leave the maker field empty.
    if normalize(&prediction.name).contains(&truth) {
        return 95;
    }

    if !predicted.is_empty() {
        if similarity(&truth, &predicted) > 0.6 {
            return 70;
        }

        for alternative in &expected.maker_alternatives {
            let alternative = normalize(alternative);
            if alternative.is_empty() {
                continue;
            }
            if predicted.contains(&alternative) || alternative.contains(&predicted) {
                return 90;
            }
            if similarity(&alternative, &predicted) > 0.7 {
                return 80;
            }
        }

        let substantial: Vec<&str> = truth.split(' ').filter(|w| w.len() > 3).collect();
        if !substantial.is_empty() {
            let matched = substantial.iter().filter(|w| predicted.contains(*w)).count();
            if matched == substantial.len() {
                return 85;
            }
            if matched > 0 {
                return 50;
            }
        }
    }
    0
}

// =============================================================================
// Era
// =============================================================================

/// Score the predicted era text against the expected year range.
///
/// Extractable years are averaged and compared against the range; the
/// score decays with distance from the nearest bound. Year-free era text
/// falls back to label matching.
#[must_use]
pub fn score_era(expected: &ExpectedIdentification, prediction: &PredictionOutput) -> u8 {
    let Some(era_text) = prediction.era.as_deref() else {
        return 0;
    };
    if era_text.trim().is_empty() {
        return 0;
    }

    let years: Vec<f64> = YEAR_RE
        .find_iter(era_text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect();

    if !years.is_empty() {
        let average = years.iter().sum::<f64>() / years.len() as f64;
        let start = f64::from(expected.era_range.start);
        let end = f64::from(expected.era_range.end);
        if average >= start && average <= end {
            return 100;
        }
        let distance = if average < start { start - average } else { average - end };
        return match distance {
            d if d <= 10.0 => 80,
            d if d <= 25.0 => 50,
            d if d <= 50.0 => 25,
            _ => 0,
        };
    }

    let truth = normalize(&expected.era);
    let predicted = normalize(era_text);
    if !truth.is_empty() && (predicted.contains(&truth) || truth.contains(&predicted)) {
        return 90;
    }
    // An era was mentioned but nothing verifiable was in it.
    20
}

// =============================================================================
// Style
// =============================================================================

/// Score the predicted style label.
///
/// Tiers: substring match, alternatives list, synonym-family cross match,
/// similarity, shared century phrase.
#[must_use]
pub fn score_style(expected: &ExpectedIdentification, prediction: &PredictionOutput) -> u8 {
    let Some(style_text) = prediction.style.as_deref() else {
        return 0;
    };
    let truth = normalize(&expected.style);
    let predicted = normalize(style_text);
    if predicted.is_empty() || truth.is_empty() {
        return 0;
    }

    if predicted.contains(&truth) || truth.contains(&predicted) {
        return 100;
    }

    for alternative in &expected.style_alternatives {
        let alternative = normalize(alternative);
        if !alternative.is_empty()
            && (predicted.contains(&alternative) || alternative.contains(&predicted))
        {
            return 95;
        }
    }

    for (base, synonyms) in STYLE_SYNONYMS.iter() {
        let in_family =
            |text: &str| text.contains(base) || synonyms.iter().any(|syn| text.contains(syn));
        if in_family(&truth) && in_family(&predicted) {
            return 85;
        }
    }

    let sim = similarity(&truth, &predicted);
    if sim > 0.7 {
        return 75;
    }
    if sim > 0.5 {
        return 50;
    }

    if let (Some(a), Some(b)) = (
        PERIOD_RE.find(&truth).map(|m| m.as_str()),
        PERIOD_RE.find(&predicted).map(|m| m.as_str()),
    ) {
        if a == b {
            return 40;
        }
    }
    0
}

// =============================================================================
// Category / Domain / Origin
// =============================================================================

/// Score the predicted category: exact equality after normalization.
#[must_use]
pub fn score_category(expected: &ExpectedIdentification, prediction: &PredictionOutput) -> u8 {
    exact_match(&expected.category, prediction.category.as_deref())
}

/// Score the predicted appraisal-domain routing: exact equality only.
#[must_use]
pub fn score_domain(expected: &ExpectedIdentification, prediction: &PredictionOutput) -> u8 {
    exact_match(&expected.domain_expert, prediction.domain_expert.as_deref())
}

fn exact_match(expected: &str, predicted: Option<&str>) -> u8 {
    let truth = normalize(expected);
    match predicted {
        Some(predicted) if !truth.is_empty() && normalize(predicted) == truth => 100,
        _ => 0,
    }
}

/// Score the predicted origin region: the expected region must appear
/// inside the predicted one.
#[must_use]
pub fn score_origin(expected: &ExpectedIdentification, prediction: &PredictionOutput) -> u8 {
    let Some(region) = prediction.origin_region.as_deref() else {
        return 0;
    };
    let truth = normalize(&expected.origin_region);
    let predicted = normalize(region);
    if !truth.is_empty() && predicted.contains(&truth) {
        100
    } else {
        0
    }
}

// =============================================================================
// Value
// =============================================================================

/// Score the predicted value range against the expected bounds.
///
/// Overlapping ranges score `60 + 40 * overlap/expected_size` (clamped to
/// 100); disjoint ranges score by banded midpoint percent-difference.
///
/// Touching ranges take the overlap branch with zero overlap and land on
/// the 60 floor, which a disjoint range of small gap can also reach via
/// the 25% band — the two formulas meet discontinuously at that boundary.
#[must_use]
pub fn score_value(expected: &ExpectedIdentification, prediction: &PredictionOutput) -> u8 {
    let (predicted_min, predicted_max) =
        match (prediction.estimated_value_min, prediction.estimated_value_max) {
            (Some(min), Some(max)) => (min, max),
            (Some(min), None) => (min, min),
            (None, Some(max)) => (max, max),
            (None, None) => return 0,
        };

    let expected_min = expected.value_min;
    let expected_max = expected.value_max;

    let overlap_start = predicted_min.max(expected_min);
    let overlap_end = predicted_max.min(expected_max);
    if overlap_end >= overlap_start {
        let expected_size = expected_max - expected_min;
        if expected_size <= 0.0 {
            return 100;
        }
        let coverage = (overlap_end - overlap_start) / expected_size;
        let score = 60.0 + 40.0 * coverage;
        return score.min(100.0).round() as u8;
    }

    let predicted_mid = (predicted_min + predicted_max) / 2.0;
    let expected_mid = (expected_min + expected_max) / 2.0;
    if expected_mid <= 0.0 {
        return 0;
    }
    let percent_off = (predicted_mid - expected_mid).abs() / expected_mid;
    match percent_off {
        p if p <= 0.25 => 60,
        p if p <= 0.50 => 40,
        p if p <= 1.00 => 20,
        _ => 0,
    }
}

// =============================================================================
// Features / Authentication Markers
// =============================================================================

/// Score coverage of the required feature phrases.
#[must_use]
pub fn score_features(expected: &ExpectedIdentification, prediction: &PredictionOutput) -> u8 {
    phrase_coverage(&expected.must_identify_features, prediction)
}

/// Score coverage of the authentication markers.
#[must_use]
pub fn score_markers(expected: &ExpectedIdentification, prediction: &PredictionOutput) -> u8 {
    phrase_coverage(&expected.authentication_markers, prediction)
}

/// Fraction of required phrases found in the prediction's free text,
/// scaled to 0-100. An empty requirement list is vacuously satisfied.
///
/// A phrase counts as found when it appears verbatim (case-insensitive) in
/// the combined description, historical context, and evidence text, or
/// when every individual word of it appears somewhere in that text.
fn phrase_coverage(required: &[String], prediction: &PredictionOutput) -> u8 {
    if required.is_empty() {
        return 100;
    }

    let haystack = [
        prediction.description.as_str(),
        prediction.historical_context.as_str(),
        &prediction.evidence_for.join(" "),
        &prediction.evidence_against.join(" "),
    ]
    .join(" ")
    .to_lowercase();

    let found = required
        .iter()
        .filter(|phrase| {
            let phrase = phrase.to_lowercase();
            haystack.contains(&phrase)
                || (!phrase.trim().is_empty()
                    && phrase.split_whitespace().all(|word| haystack.contains(word)))
        })
        .count();

    (100.0 * found as f64 / required.len() as f64).round() as u8
}

// =============================================================================
// Aggregation
// =============================================================================

/// Run every field scorer against one prediction.
#[must_use]
pub fn score_all(expected: &ExpectedIdentification, prediction: &PredictionOutput) -> FieldScores {
    FieldScores {
        name: score_name(expected, prediction),
        maker: score_maker(expected, prediction),
        era: score_era(expected, prediction),
        style: score_style(expected, prediction),
        category: score_category(expected, prediction),
        domain: score_domain(expected, prediction),
        origin: score_origin(expected, prediction),
        value: score_value(expected, prediction),
        features: score_features(expected, prediction),
        markers: score_markers(expected, prediction),
    }
}

/// Combine field scores into one overall score using the weight table.
///
/// Returns the rounded weighted mean over the dimensions whose weight is
/// non-zero; zero when every weight is zero.
#[must_use]
pub fn aggregate(scores: &FieldScores, weights: &ScoreWeights) -> u8 {
    let pairs = [
        (scores.name, weights.name),
        (scores.maker, weights.maker),
        (scores.era, weights.era),
        (scores.style, weights.style),
        (scores.category, weights.category),
        (scores.domain, weights.domain),
        (scores.origin, weights.origin),
        (scores.value, weights.value),
        (scores.features, weights.features),
        (scores.markers, weights.markers),
    ];
    let total_weight: f64 = pairs.iter().map(|(_, w)| w).sum();
    if total_weight <= 0.0 {
        return 0;
    }
    let weighted: f64 = pairs.iter().map(|(s, w)| f64::from(*s) * w).sum();
    (weighted / total_weight).round() as u8
}

fn contains_word(text: &str, word: &str) -> bool {
    text.split(' ').any(|w| w == word)
}
