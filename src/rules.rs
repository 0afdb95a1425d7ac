//! Archetype classification as an ordered decision list.
//!
//! A [`RuleTable`] is an ordered list of rules, each a conjunction of
//! `feature op threshold` conditions mapped to an archetype, plus a fallback.
//! Evaluation stops at the first rule whose conditions all hold; later rules
//! are never consulted even if they would also match. An OR between two
//! guards is expressed as two adjacent rules with the same archetype.
//!
//! The built-in tables ([`RuleTable::for_variant`]) encode the priority order:
//!
//! | Step | Rule | Archetype |
//! |------|------|-----------|
//! | 1 | min ≥ 4.0 | Integrated Sovereign |
//! | 2 | vitality < 3.0 (or max < 2.5) | Burnout Warrior |
//! | 3 | compound pairs/triples ≥ 4.0 | Leader, Architect, Performer, Tactician |
//! | 4 | single category ≥ 4.0 | Sage, Guardian, Artisan, Wanderer, Adventurer, Loving Heart |
//! | 5 | fallback | Harmonious Traveler (+ lowest category as focus) |
//!
//! Tables are plain data and round-trip through JSON, so a deployment can ship
//! its own thresholds without touching code.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::archetype::ArchetypeId;
use crate::constants::*;
use crate::error::{InvalidInput, RuleTableError};
use crate::types::{BurnoutRule, Category, CategoryScores, Variant};

// ── Conditions ──────────────────────────────────────────────────────────

/// Scalar a condition reads from the score vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Feature {
    Score(Category),
    Min,
    Max,
}

impl Feature {
    fn value(self, scores: &CategoryScores) -> f64 {
        match self {
            Feature::Score(category) => scores.get(category),
            Feature::Min => scores.min(),
            Feature::Max => scores.max(),
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::Score(category) => write!(f, "{}", category.name().to_lowercase()),
            Feature::Min => f.write_str("min"),
            Feature::Max => f.write_str("max"),
        }
    }
}

impl TryFrom<String> for Feature {
    type Error = RuleTableError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(Feature::Min),
            "max" => Ok(Feature::Max),
            other => other
                .parse::<Category>()
                .map(Feature::Score)
                .map_err(|_| RuleTableError::UnknownFeature(s)),
        }
    }
}

impl From<Feature> for String {
    fn from(feature: Feature) -> Self {
        feature.to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    #[serde(rename = "<", alias = "lt")]
    Lt,
    #[serde(rename = "<=", alias = "le")]
    Le,
    #[serde(rename = ">", alias = "gt")]
    Gt,
    #[serde(rename = ">=", alias = "ge")]
    Ge,
}

/// A single condition in a rule: feature op threshold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub feature: Feature,
    pub op: CompareOp,
    pub threshold: f64,
}

impl Condition {
    fn holds(&self, scores: &CategoryScores) -> bool {
        let val = self.feature.value(scores);
        match self.op {
            CompareOp::Lt => val < self.threshold,
            CompareOp::Le => val <= self.threshold,
            CompareOp::Gt => val > self.threshold,
            CompareOp::Ge => val >= self.threshold,
        }
    }
}

/// A single rule in the decision list. All conditions must hold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub archetype: ArchetypeId,
    pub conditions: Vec<Condition>,
}

impl Rule {
    pub fn new(archetype: ArchetypeId) -> Self {
        Self {
            archetype,
            conditions: Vec::new(),
        }
    }

    pub fn when(mut self, feature: Feature, op: CompareOp, threshold: f64) -> Self {
        self.conditions.push(Condition {
            feature,
            op,
            threshold,
        });
        self
    }

    /// Shorthand for `category >= threshold`.
    pub fn at_least(self, category: Category, threshold: f64) -> Self {
        self.when(Feature::Score(category), CompareOp::Ge, threshold)
    }

    pub fn matches(&self, scores: &CategoryScores) -> bool {
        self.conditions.iter().all(|c| c.holds(scores))
    }
}

// ── Classification result ───────────────────────────────────────────────

/// Outcome of one classification.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Classification {
    pub archetype: ArchetypeId,
    pub type_number: u8,
    /// Display name, e.g. "Type 13: Visionary Architect".
    pub name: String,
    pub description: String,
    pub icon: &'static str,
    /// Reflective question; only tables with reflections enabled fill it.
    pub question: Option<&'static str>,
    /// Lowest-scoring category, set when the fallback fired.
    pub focus: Option<Category>,
    /// Index of the rule that fired; `None` for the fallback.
    pub rule_index: Option<usize>,
}

impl Classification {
    /// (name, description, icon, question)
    pub fn as_tuple(&self) -> (&str, &str, &str, Option<&str>) {
        (&self.name, &self.description, self.icon, self.question)
    }
}

// ── Rule table ──────────────────────────────────────────────────────────

fn default_table_name() -> String {
    "custom".to_string()
}

/// The complete decision list: ordered rules plus a fallback archetype.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleTable {
    #[serde(default = "default_table_name")]
    pub name: String,
    pub rules: Vec<Rule>,
    pub fallback: ArchetypeId,
    #[serde(default)]
    pub reflections: bool,
}

/// Single-category rules in priority order.
const SINGLE_RULES: [(Category, ArchetypeId); CATEGORY_COUNT] = [
    (Category::Philosophy, ArchetypeId::PhilosopherSage),
    (Category::Environment, ArchetypeId::NurturingGuardian),
    (Category::Talent, ArchetypeId::SolitaryArtisan),
    (Category::Vision, ArchetypeId::DreamingWanderer),
    (Category::Vitality, ArchetypeId::VibrantAdventurer),
    (Category::Connection, ArchetypeId::LovingHeart),
];

impl RuleTable {
    /// Built-in table for an app revision.
    pub fn for_variant(variant: Variant) -> Self {
        Self::standard(
            variant.name(),
            variant.burnout_rule(),
            variant.has_compound_rules(),
            variant.has_reflections(),
        )
    }

    /// Assemble the standard decision list.
    pub fn standard(name: &str, burnout: BurnoutRule, compound: bool, reflections: bool) -> Self {
        let mut rules = vec![Rule::new(ArchetypeId::IntegratedSovereign).when(
            Feature::Min,
            CompareOp::Ge,
            HIGH_THRESHOLD,
        )];

        rules.push(Rule::new(ArchetypeId::BurnoutWarrior).when(
            Feature::Score(Category::Vitality),
            CompareOp::Lt,
            BURNOUT_VITALITY_THRESHOLD,
        ));
        if burnout == BurnoutRule::VitalityOrFlat {
            rules.push(Rule::new(ArchetypeId::BurnoutWarrior).when(
                Feature::Max,
                CompareOp::Lt,
                BURNOUT_CEILING_THRESHOLD,
            ));
        }

        if compound {
            rules.push(
                Rule::new(ArchetypeId::MagneticLeader)
                    .at_least(Category::Connection, HIGH_THRESHOLD)
                    .at_least(Category::Vision, HIGH_THRESHOLD)
                    .at_least(Category::Vitality, LEADER_VITALITY_THRESHOLD),
            );
            rules.push(
                Rule::new(ArchetypeId::VisionaryArchitect)
                    .at_least(Category::Talent, HIGH_THRESHOLD)
                    .at_least(Category::Vision, HIGH_THRESHOLD),
            );
            rules.push(
                Rule::new(ArchetypeId::RadiantPerformer)
                    .at_least(Category::Talent, HIGH_THRESHOLD)
                    .at_least(Category::Connection, HIGH_THRESHOLD),
            );
            rules.push(
                Rule::new(ArchetypeId::StrategicTactician)
                    .at_least(Category::Philosophy, HIGH_THRESHOLD)
                    .at_least(Category::Vision, HIGH_THRESHOLD),
            );
        }

        for (category, archetype) in SINGLE_RULES {
            rules.push(Rule::new(archetype).at_least(category, HIGH_THRESHOLD));
        }

        Self {
            name: name.to_string(),
            rules,
            fallback: ArchetypeId::HarmoniousTraveler,
            reflections,
        }
    }

    /// Parse and validate a JSON rule table.
    pub fn from_json(json: &str) -> Result<Self, RuleTableError> {
        let table: RuleTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    pub fn to_json(&self) -> Result<String, RuleTableError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject tables that could never classify a valid score vector sensibly.
    pub fn validate(&self) -> Result<(), RuleTableError> {
        if self.rules.is_empty() {
            return Err(RuleTableError::Empty);
        }
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.conditions.is_empty() {
                return Err(RuleTableError::EmptyRule { index });
            }
            for cond in &rule.conditions {
                if !is_valid_score(cond.threshold) {
                    return Err(RuleTableError::ThresholdOutOfRange {
                        index,
                        threshold: cond.threshold,
                    });
                }
            }
        }
        Ok(())
    }

    /// First matching rule, as (archetype, rule index). `None` index = fallback.
    pub fn evaluate(&self, scores: &CategoryScores) -> (ArchetypeId, Option<usize>) {
        self.rules
            .iter()
            .position(|rule| rule.matches(scores))
            .map_or((self.fallback, None), |i| (self.rules[i].archetype, Some(i)))
    }

    /// Classify validated scores. Exactly one archetype is returned.
    pub fn classify(&self, scores: &CategoryScores) -> Classification {
        let (archetype, rule_index) = self.evaluate(scores);
        let profile = archetype.profile();

        let focus = rule_index.is_none().then(|| scores.lowest());
        let description = match focus {
            Some(category) => format!(
                "{} Suggested focus area: {}.",
                profile.description, category
            ),
            None => profile.description.to_string(),
        };

        tracing::debug!(
            table = %self.name,
            archetype = %archetype,
            rule = ?rule_index,
            "classified"
        );

        Classification {
            archetype,
            type_number: profile.type_number,
            name: profile.display_name(),
            description,
            icon: profile.icon,
            question: self.reflections.then_some(profile.reflection),
            focus,
            rule_index,
        }
    }

    /// Archetypes this table can produce, in type-number order.
    pub fn archetypes(&self) -> Vec<ArchetypeId> {
        let set: BTreeSet<ArchetypeId> = self
            .rules
            .iter()
            .map(|r| r.archetype)
            .chain(std::iter::once(self.fallback))
            .collect();
        set.into_iter().collect()
    }
}

/// Validate a raw score map and classify it.
///
/// A missing category or a score outside [1.0, 5.0] is rejected; nothing is
/// defaulted.
pub fn classify(
    table: &RuleTable,
    scores: &BTreeMap<Category, f64>,
) -> Result<Classification, InvalidInput> {
    let scores = CategoryScores::from_map(scores)?;
    Ok(table.classify(&scores))
}
