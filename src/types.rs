//! Core data structures: categories, validated score vectors, variants and level tags.
//!
//! The central type is [`CategoryScores`], the six per-category means that every
//! classification consumes. It can only be built through validation
//! ([`CategoryScores::from_map`] / [`CategoryScores::from_named`]), so the rule
//! engine never sees a missing category or an out-of-range value.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::InvalidInput;

/// One of the six life domains, in canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Philosophy,
    Environment,
    Talent,
    Vision,
    Vitality,
    Connection,
}

impl Category {
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Philosophy,
        Category::Environment,
        Category::Talent,
        Category::Vision,
        Category::Vitality,
        Category::Connection,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            Category::Philosophy => CATEGORY_PHILOSOPHY,
            Category::Environment => CATEGORY_ENVIRONMENT,
            Category::Talent => CATEGORY_TALENT,
            Category::Vision => CATEGORY_VISION,
            Category::Vitality => CATEGORY_VITALITY,
            Category::Connection => CATEGORY_CONNECTION,
        }
    }

    pub fn name(self) -> &'static str {
        CATEGORY_NAMES[self.index()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = InvalidInput;

    /// Case-insensitive match on the English name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| InvalidInput::UnknownCategory(s.to_string()))
    }
}

/// Validated per-category scores, indexed by [`Category::index`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CategoryScores([f64; CATEGORY_COUNT]);

impl CategoryScores {
    /// Build from a raw array, rejecting any value outside [1.0, 5.0] (NaN included).
    pub fn new(values: [f64; CATEGORY_COUNT]) -> Result<Self, InvalidInput> {
        for category in Category::ALL {
            let score = values[category.index()];
            if !is_valid_score(score) {
                return Err(InvalidInput::ScoreOutOfRange { category, score });
            }
        }
        Ok(Self(values))
    }

    /// Build from a category map. All six keys are required; none are defaulted.
    pub fn from_map(map: &BTreeMap<Category, f64>) -> Result<Self, InvalidInput> {
        let mut values = [0.0f64; CATEGORY_COUNT];
        for category in Category::ALL {
            values[category.index()] = *map
                .get(&category)
                .ok_or(InvalidInput::MissingCategory(category))?;
        }
        Self::new(values)
    }

    /// Build from string keys as they arrive over the wire.
    pub fn from_named(map: &BTreeMap<String, f64>) -> Result<Self, InvalidInput> {
        let mut parsed = BTreeMap::new();
        for (name, &score) in map {
            let category = name.parse::<Category>()?;
            if parsed.insert(category, score).is_some() {
                return Err(InvalidInput::DuplicateCategory(category));
            }
        }
        Self::from_map(&parsed)
    }

    #[inline(always)]
    pub fn get(&self, category: Category) -> f64 {
        self.0[category.index()]
    }

    pub fn as_array(&self) -> &[f64; CATEGORY_COUNT] {
        &self.0
    }

    pub fn min(&self) -> f64 {
        self.0.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Lowest-scoring category; the earliest in canonical order wins ties.
    pub fn lowest(&self) -> Category {
        let mut best = Category::Philosophy;
        for category in Category::ALL {
            if self.get(category) < self.get(best) {
                best = category;
            }
        }
        best
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    pub fn to_map(&self) -> BTreeMap<Category, f64> {
        self.iter().collect()
    }
}

/// Feedback band for one category score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "H")]
    High,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Low,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::High, Level::Medium, Level::Low];

    /// H (≥ 4.0), M (≥ 2.5), L otherwise.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            Level::High
        } else if score >= MEDIUM_THRESHOLD {
            Level::Medium
        } else {
            Level::Low
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Level::High => "H",
            Level::Medium => "M",
            Level::Low => "L",
        }
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            Level::High => 0,
            Level::Medium => 1,
            Level::Low => 2,
        }
    }
}

/// Which burnout guard a rule table uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BurnoutRule {
    /// `vitality < 3.0`
    VitalityOnly,
    /// `vitality < 3.0 OR max(all) < 2.5`
    VitalityOrFlat,
}

/// App revision. Each carries its own question bank and rule table.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 30 questions; single-category rules only.
    Classic,
    /// 47 questions; compound rules.
    Extended,
    /// 36 questions; compound rules and a reflective question per archetype.
    #[default]
    Reflective,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Classic, Variant::Extended, Variant::Reflective];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Extended => "extended",
            Variant::Reflective => "reflective",
        }
    }

    pub fn burnout_rule(self) -> BurnoutRule {
        match self {
            Variant::Classic | Variant::Extended => BurnoutRule::VitalityOrFlat,
            Variant::Reflective => BurnoutRule::VitalityOnly,
        }
    }

    pub fn has_compound_rules(self) -> bool {
        !matches!(self, Variant::Classic)
    }

    pub fn has_reflections(self) -> bool {
        matches!(self, Variant::Reflective)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Variant::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| InvalidInput::UnknownVariant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_map(score: f64) -> BTreeMap<Category, f64> {
        Category::ALL.into_iter().map(|c| (c, score)).collect()
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("vitality".parse::<Category>(), Ok(Category::Vitality));
        assert_eq!(" Connection ".parse::<Category>(), Ok(Category::Connection));
        assert!(matches!(
            "Health".parse::<Category>(),
            Err(InvalidInput::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_missing_category_is_rejected() {
        let mut map = full_map(3.0);
        map.remove(&Category::Vision);
        assert_eq!(
            CategoryScores::from_map(&map),
            Err(InvalidInput::MissingCategory(Category::Vision))
        );
    }

    #[test]
    fn test_named_duplicate_category_is_rejected() {
        let mut named: BTreeMap<String, f64> = Category::ALL
            .into_iter()
            .map(|c| (c.name().to_string(), 3.0))
            .collect();
        named.insert("Vision".to_string(), 4.5);
        named.insert("vision".to_string(), 2.0);
        assert_eq!(
            CategoryScores::from_named(&named),
            Err(InvalidInput::DuplicateCategory(Category::Vision))
        );
    }

    #[test]
    fn test_out_of_range_scores() {
        let mut map = full_map(3.0);
        map.insert(Category::Talent, 5.01);
        assert!(matches!(
            CategoryScores::from_map(&map),
            Err(InvalidInput::ScoreOutOfRange {
                category: Category::Talent,
                ..
            })
        ));
        map.insert(Category::Talent, 0.99);
        assert!(CategoryScores::from_map(&map).is_err());
        map.insert(Category::Talent, f64::NAN);
        assert!(CategoryScores::from_map(&map).is_err());
        map.insert(Category::Talent, 1.0);
        assert!(CategoryScores::from_map(&map).is_ok());
    }

    #[test]
    fn test_lowest_prefers_canonical_order() {
        let scores = CategoryScores::new([3.0, 2.0, 4.0, 2.0, 3.5, 5.0]).unwrap();
        assert_eq!(scores.lowest(), Category::Environment);
        assert_eq!(scores.min(), 2.0);
        assert_eq!(scores.max(), 5.0);
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(Level::from_score(4.0), Level::High);
        assert_eq!(Level::from_score(3.99), Level::Medium);
        assert_eq!(Level::from_score(2.5), Level::Medium);
        assert_eq!(Level::from_score(2.49), Level::Low);
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!("Extended".parse::<Variant>(), Ok(Variant::Extended));
        assert!("v4".parse::<Variant>().is_err());
        assert_eq!(Variant::default(), Variant::Reflective);
    }
}
