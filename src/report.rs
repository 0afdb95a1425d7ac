//! Diagnosis report: one respondent's answer sheet → everything the result page shows.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::constants::*;
use crate::error::InvalidInput;
use crate::feedback::feedback_for_score;
use crate::rules::{Classification, RuleTable};
use crate::scoring::score_named_answers;
use crate::types::{Category, CategoryScores, Level, Variant};

/// One row of the "life elements" breakdown.
#[derive(Clone, Debug, Serialize)]
pub struct CategoryReport {
    pub category: Category,
    pub score: f64,
    pub level: Level,
    pub tag: &'static str,
    pub feedback: &'static str,
    /// Width of the score bar, score / 5 × 100.
    pub bar_percent: f64,
}

/// Radar chart series in canonical category order.
#[derive(Clone, Debug, Serialize)]
pub struct RadarChart {
    pub axes: Vec<&'static str>,
    pub values: Vec<f64>,
    pub range: [f64; 2],
}

#[derive(Clone, Debug, Serialize)]
pub struct Diagnosis {
    pub respondent: String,
    pub variant: Variant,
    pub archetype: Classification,
    pub categories: Vec<CategoryReport>,
    pub radar: RadarChart,
}

/// Per-category breakdown for already validated scores.
pub fn category_reports(scores: &CategoryScores) -> Vec<CategoryReport> {
    scores
        .iter()
        .map(|(category, score)| {
            let (level, cell) = feedback_for_score(category, score);
            CategoryReport {
                category,
                score,
                level,
                tag: cell.tag,
                feedback: cell.text,
                bar_percent: score / SCORE_MAX * 100.0,
            }
        })
        .collect()
}

pub fn radar_chart(scores: &CategoryScores) -> RadarChart {
    RadarChart {
        axes: CATEGORY_NAMES.to_vec(),
        values: scores.as_array().to_vec(),
        range: RADAR_RANGE,
    }
}

/// Build the report for an already trimmed, non-empty name and validated scores.
pub fn build_diagnosis(
    respondent: &str,
    variant: Variant,
    table: &RuleTable,
    scores: &CategoryScores,
) -> Diagnosis {
    Diagnosis {
        respondent: respondent.to_string(),
        variant,
        archetype: table.classify(scores),
        categories: category_reports(scores),
        radar: radar_chart(scores),
    }
}

/// Validate a named answer sheet, score it, and build the report.
pub fn diagnose(
    respondent: &str,
    variant: Variant,
    table: &RuleTable,
    answers: &BTreeMap<String, Vec<u8>>,
) -> Result<Diagnosis, InvalidInput> {
    let respondent = respondent.trim();
    if respondent.is_empty() {
        return Err(InvalidInput::MissingName);
    }
    let scores = score_named_answers(variant, answers)?;
    Ok(build_diagnosis(respondent, variant, table, &scores))
}
