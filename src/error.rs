//! Error types for Life Mapping.

use crate::types::Category;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("Rule table error: {0}")]
    RuleTable(#[from] RuleTableError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Caller-supplied data failed validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInput {
    #[error("response list is empty")]
    EmptyResponses,

    #[error("response {value} is outside the 1-5 scale")]
    ResponseOutOfRange { value: u8 },

    #[error("missing score for category {0}")]
    MissingCategory(Category),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("category {0} given more than once")]
    DuplicateCategory(Category),

    #[error("score {score} for {category} is outside [1.0, 5.0]")]
    ScoreOutOfRange { category: Category, score: f64 },

    #[error("{category} expects {expected} answers, got {actual}")]
    AnswerCountMismatch {
        category: Category,
        expected: usize,
        actual: usize,
    },

    #[error("unknown variant: {0}")]
    UnknownVariant(String),

    #[error("respondent name is required")]
    MissingName,

    #[error("census needs at least one respondent")]
    EmptyCensus,
}

/// A rule table could not be loaded or failed validation.
#[derive(Debug, thiserror::Error)]
pub enum RuleTableError {
    #[error("rule table has no rules")]
    Empty,

    #[error("rule {index} has no conditions")]
    EmptyRule { index: usize },

    #[error("rule {index}: threshold {threshold} is outside [1.0, 5.0]")]
    ThresholdOutOfRange { index: usize, threshold: f64 },

    #[error("unknown feature: {0}")]
    UnknownFeature(String),

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rule table: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
