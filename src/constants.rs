//! Questionnaire constants and category indexing.
//!
//! - |categories| = [`CATEGORY_COUNT`] = 6
//! - Likert scale = [`LIKERT_MIN`]..=[`LIKERT_MAX`] (1..=5)
//! - Level bands: H ≥ [`HIGH_THRESHOLD`], M ≥ [`MEDIUM_THRESHOLD`], L below.

/// Number of life-domain categories.
pub const CATEGORY_COUNT: usize = 6;

/// Lowest Likert answer ("not true at all").
pub const LIKERT_MIN: u8 = 1;

/// Highest Likert answer ("very true").
pub const LIKERT_MAX: u8 = 5;

/// Slider position before the respondent touches it.
pub const LIKERT_DEFAULT: u8 = 3;

/// Likert option labels, index 0 = answer 1.
pub const LIKERT_LABELS: [&str; 5] = [
    "Not true at all",
    "Mostly not true",
    "Neither",
    "Somewhat true",
    "Very true",
];

/// Lower bound of a valid category score.
pub const SCORE_MIN: f64 = 1.0;

/// Upper bound of a valid category score.
pub const SCORE_MAX: f64 = 5.0;

/// Score at or above which a category is "high": H tag and archetype rules.
pub const HIGH_THRESHOLD: f64 = 4.0;

/// Score at or above which a category is tagged M rather than L.
pub const MEDIUM_THRESHOLD: f64 = 2.5;

/// Vitality below this marks burnout.
pub const BURNOUT_VITALITY_THRESHOLD: f64 = 3.0;

/// Every category below this marks burnout (flat-low profile).
pub const BURNOUT_CEILING_THRESHOLD: f64 = 2.5;

/// Vitality floor for the Magnetic Leader compound rule.
pub const LEADER_VITALITY_THRESHOLD: f64 = 3.5;

/// Radial axis range for the radar chart.
pub const RADAR_RANGE: [f64; 2] = [0.0, 5.0];

/// Category indices, canonical order.
pub const CATEGORY_PHILOSOPHY: usize = 0;
pub const CATEGORY_ENVIRONMENT: usize = 1;
pub const CATEGORY_TALENT: usize = 2;
pub const CATEGORY_VISION: usize = 3;
pub const CATEGORY_VITALITY: usize = 4;
pub const CATEGORY_CONNECTION: usize = 5;

/// Human-readable category names.
pub const CATEGORY_NAMES: [&str; CATEGORY_COUNT] = [
    "Philosophy",
    "Environment",
    "Talent",
    "Vision",
    "Vitality",
    "Connection",
];

/// Whether a score lies in the closed interval [SCORE_MIN, SCORE_MAX].
#[inline(always)]
pub fn is_valid_score(score: f64) -> bool {
    (SCORE_MIN..=SCORE_MAX).contains(&score)
}

/// Whether a raw answer lies on the Likert scale.
#[inline(always)]
pub fn is_valid_response(response: u8) -> bool {
    (LIKERT_MIN..=LIKERT_MAX).contains(&response)
}
