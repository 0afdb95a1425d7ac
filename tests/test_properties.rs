//! Property-based tests for aggregation and classification.

use proptest::prelude::*;

use life_mapping::archetype::ArchetypeId;
use life_mapping::constants::*;
use life_mapping::rules::RuleTable;
use life_mapping::scoring::aggregate;
use life_mapping::types::{BurnoutRule, CategoryScores, Level, Variant};

/// Strategy: a valid score vector (each in [1.0, 5.0]).
fn scores_strategy() -> impl Strategy<Value = CategoryScores> {
    prop::array::uniform6(1.0..=5.0f64).prop_map(|v| CategoryScores::new(v).unwrap())
}

/// Strategy: a non-empty list of Likert answers.
fn responses_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(LIKERT_MIN..=LIKERT_MAX, 1..=12)
}

fn variant_strategy() -> impl Strategy<Value = Variant> {
    prop::sample::select(Variant::ALL.to_vec())
}

proptest! {
    // 1. Aggregates of valid answers stay on the scale
    #[test]
    fn aggregate_within_bounds(responses in responses_strategy()) {
        let score = aggregate(&responses).unwrap();
        prop_assert!((SCORE_MIN..=SCORE_MAX).contains(&score), "score={score}");
    }

    // 2. Aggregate lies between the smallest and largest answer
    #[test]
    fn aggregate_between_extremes(responses in responses_strategy()) {
        let score = aggregate(&responses).unwrap();
        let lo = *responses.iter().min().unwrap() as f64;
        let hi = *responses.iter().max().unwrap() as f64;
        prop_assert!(score >= lo - 1e-12 && score <= hi + 1e-12);
    }

    // 3. All six ≥ 4.0 is always Sovereign
    #[test]
    fn all_high_is_sovereign(
        v in prop::array::uniform6(4.0..=5.0f64),
        variant in variant_strategy(),
    ) {
        let scores = CategoryScores::new(v).unwrap();
        let result = RuleTable::for_variant(variant).classify(&scores);
        prop_assert_eq!(result.archetype, ArchetypeId::IntegratedSovereign);
        prop_assert_eq!(result.rule_index, Some(0));
    }

    // 4. Classification is deterministic
    #[test]
    fn classify_deterministic(scores in scores_strategy(), variant in variant_strategy()) {
        let table = RuleTable::for_variant(variant);
        prop_assert_eq!(table.classify(&scores), table.classify(&scores));
    }

    // 5. The fired rule really matches and no earlier rule does
    #[test]
    fn first_match_wins(scores in scores_strategy(), variant in variant_strategy()) {
        let table = RuleTable::for_variant(variant);
        let (archetype, index) = table.evaluate(&scores);
        match index {
            Some(i) => {
                prop_assert!(table.rules[i].matches(&scores));
                prop_assert_eq!(table.rules[i].archetype, archetype);
                for earlier in &table.rules[..i] {
                    prop_assert!(!earlier.matches(&scores));
                }
            }
            None => {
                prop_assert_eq!(archetype, table.fallback);
                prop_assert!(table.rules.iter().all(|r| !r.matches(&scores)));
            }
        }
    }

    // 6. Vitality below 3.0 without all-high is always burnout
    #[test]
    fn low_vitality_is_burnout(
        v in prop::array::uniform6(1.0..=5.0f64),
        vitality in 1.0..2.999f64,
        variant in variant_strategy(),
    ) {
        let mut v = v;
        v[CATEGORY_VITALITY] = vitality;
        let scores = CategoryScores::new(v).unwrap();
        let result = RuleTable::for_variant(variant).classify(&scores);
        prop_assert_eq!(result.archetype, ArchetypeId::BurnoutWarrior);
    }

    // 7. Both burnout guards agree under the default thresholds
    #[test]
    fn burnout_rules_equivalent(scores in scores_strategy(), compound in any::<bool>()) {
        let narrow = RuleTable::standard("narrow", BurnoutRule::VitalityOnly, compound, false);
        let wide = RuleTable::standard("wide", BurnoutRule::VitalityOrFlat, compound, false);
        prop_assert_eq!(narrow.evaluate(&scores).0, wide.evaluate(&scores).0);
    }

    // 8. Only the fallback carries a focus, and it is a minimum category
    #[test]
    fn focus_only_on_fallback(scores in scores_strategy(), variant in variant_strategy()) {
        let result = RuleTable::for_variant(variant).classify(&scores);
        match result.focus {
            Some(category) => {
                prop_assert_eq!(result.archetype, ArchetypeId::HarmoniousTraveler);
                prop_assert_eq!(scores.get(category), scores.min());
            }
            None => prop_assert!(result.rule_index.is_some()),
        }
    }

    // 9. Level tags are monotonic in the score
    #[test]
    fn level_monotonic(a in 1.0..=5.0f64, b in 1.0..=5.0f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Level::from_score(lo).index() >= Level::from_score(hi).index());
    }

    // 10. The archetype is always one the table declares
    #[test]
    fn archetype_is_declared(scores in scores_strategy(), variant in variant_strategy()) {
        let table = RuleTable::for_variant(variant);
        let result = table.classify(&scores);
        prop_assert!(table.archetypes().contains(&result.archetype));
    }
}
