//! Contract fairness rating

use shared_types::{ContractRating, DocumentType, RedFlag};

use crate::dictionary::{
    POSITIVE_INDICATORS, RATING_HIGH_TERMS, RATING_LOW_TERMS, RATING_MEDIUM_TERMS,
};
use crate::normalize::count_matches;

pub const MAX_SCORE: f64 = 10.0;
pub const MIN_SCORE: f64 = 1.0;

const HIGH_DEDUCTION: f64 = 2.0;
const MEDIUM_DEDUCTION: f64 = 1.0;
const LOW_DEDUCTION: f64 = 0.5;
const POSITIVE_BONUS: f64 = 0.5;
const FLAG_VOLUME_THRESHOLDS: [usize; 2] = [10, 20];

const DESCRIPTION_BANDS: &[(f64, &str)] = &[
    (9.0, "Excellent - Very fair and transparent"),
    (8.0, "Very Good - Generally fair terms"),
    (7.0, "Good - Mostly reasonable terms"),
    (6.0, "Fair - Some concerns but acceptable"),
    (5.0, "Average - Mixed terms, proceed with caution"),
    (4.0, "Below Average - Several concerning terms"),
    (3.0, "Poor - Many problematic clauses"),
    (2.0, "Very Poor - Highly restrictive terms"),
];
const LOWEST_DESCRIPTION: &str = "Extremely Poor - Avoid if possible";

const COLOR_BANDS: &[(f64, &str)] = &[(8.0, "#2ed573"), (6.0, "#ffa502"), (4.0, "#ff6348")];
const LOWEST_COLOR: &str = "#ff4757";

/// Rate a document from 1 to 10 in half-point steps.
///
/// Each rating term counts once regardless of how often it occurs. The flag
/// list only contributes through its length.
pub fn rate(text: &str, red_flags: &[RedFlag], _document_type: DocumentType) -> ContractRating {
    let mut score = MAX_SCORE;

    score -= HIGH_DEDUCTION * count_matches(text, RATING_HIGH_TERMS) as f64;
    score -= MEDIUM_DEDUCTION * count_matches(text, RATING_MEDIUM_TERMS) as f64;
    score -= LOW_DEDUCTION * count_matches(text, RATING_LOW_TERMS) as f64;

    for threshold in FLAG_VOLUME_THRESHOLDS {
        if red_flags.len() > threshold {
            score -= 1.0;
        }
    }

    score += POSITIVE_BONUS * count_matches(text, POSITIVE_INDICATORS) as f64;

    let score = round_half(score.clamp(MIN_SCORE, MAX_SCORE));
    ContractRating {
        score,
        description: describe(score).to_string(),
        color_tag: color(score).to_string(),
    }
}

/// Round to the nearest 0.5
pub fn round_half(score: f64) -> f64 {
    (score * 2.0).round() / 2.0
}

pub fn describe(score: f64) -> &'static str {
    DESCRIPTION_BANDS
        .iter()
        .find(|(floor, _)| score >= *floor)
        .map(|(_, description)| *description)
        .unwrap_or(LOWEST_DESCRIPTION)
}

pub fn color(score: f64) -> &'static str {
    COLOR_BANDS
        .iter()
        .find(|(floor, _)| score >= *floor)
        .map(|(_, color)| *color)
        .unwrap_or(LOWEST_COLOR)
}
