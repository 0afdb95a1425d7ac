//! Score aggregation: Likert answers → per-category means.

use std::collections::BTreeMap;

use crate::constants::*;
use crate::error::InvalidInput;
use crate::questions::question_count;
use crate::types::{Category, CategoryScores, Variant};

/// Arithmetic mean of one category's answers.
///
/// Fails on an empty list rather than returning zero, and on any answer
/// outside 1..=5, so a successful result always lies in [1.0, 5.0].
pub fn aggregate(responses: &[u8]) -> Result<f64, InvalidInput> {
    if responses.is_empty() {
        return Err(InvalidInput::EmptyResponses);
    }
    let mut sum = 0u32;
    for &value in responses {
        if !is_valid_response(value) {
            return Err(InvalidInput::ResponseOutOfRange { value });
        }
        sum += value as u32;
    }
    Ok(sum as f64 / responses.len() as f64)
}

/// Score a full answer sheet for `variant`.
///
/// Every category must be present with exactly as many answers as the
/// variant asks questions.
pub fn score_answers(
    variant: Variant,
    answers: &BTreeMap<Category, Vec<u8>>,
) -> Result<CategoryScores, InvalidInput> {
    let mut values = [0.0f64; CATEGORY_COUNT];
    for category in Category::ALL {
        let list = answers
            .get(&category)
            .ok_or(InvalidInput::MissingCategory(category))?;
        let expected = question_count(variant, category);
        if list.len() != expected {
            return Err(InvalidInput::AnswerCountMismatch {
                category,
                expected,
                actual: list.len(),
            });
        }
        values[category.index()] = aggregate(list)?;
    }
    CategoryScores::new(values)
}

/// [`score_answers`] for string-keyed sheets as they arrive over the wire.
pub fn score_named_answers(
    variant: Variant,
    answers: &BTreeMap<String, Vec<u8>>,
) -> Result<CategoryScores, InvalidInput> {
    let mut parsed = BTreeMap::new();
    for (name, list) in answers {
        let category = name.parse::<Category>()?;
        if parsed.insert(category, list.clone()).is_some() {
            return Err(InvalidInput::DuplicateCategory(category));
        }
    }
    score_answers(variant, &parsed)
}
