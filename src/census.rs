//! Census: classify many simulated respondents and tally the outcome.
//!
//! Each simulated respondent answers every question of the variant uniformly
//! at random on the 1-5 scale. Respondent `i` draws from its own
//! `SmallRng::seed_from_u64(seed + i)`, so a census is reproducible for a
//! fixed (variant, table, respondents, seed) regardless of thread count.
//!
//! Content authors use the archetype shares to check that every archetype the
//! table names is reachable and none dominates.

use std::collections::BTreeMap;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

use crate::archetype::ArchetypeId;
use crate::constants::*;
use crate::error::InvalidInput;
use crate::questions::question_count;
use crate::rules::RuleTable;
use crate::scoring::aggregate;
use crate::types::{Category, CategoryScores, Level, Variant};

#[derive(Clone, Debug, Serialize)]
pub struct ArchetypeShare {
    pub archetype: ArchetypeId,
    pub name: String,
    pub count: u64,
    pub share: f64,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct LevelCounts {
    pub high: u64,
    pub medium: u64,
    pub low: u64,
}

#[derive(Clone, Debug, Serialize)]
pub struct CategoryStatistics {
    pub category: Category,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub levels: LevelCounts,
}

#[derive(Clone, Debug, Serialize)]
pub struct CensusReport {
    pub variant: Variant,
    pub table: String,
    pub respondents: u64,
    pub seed: u64,
    /// Every archetype the table can produce, zero counts included.
    pub archetypes: Vec<ArchetypeShare>,
    pub categories: Vec<CategoryStatistics>,
    /// Respondents resolved by the fallback rather than an explicit rule.
    pub fallback_count: u64,
    pub elapsed_ms: u64,
}

/// Answer every question of `variant` at random and score the sheet.
pub fn simulate_respondent(
    variant: Variant,
    rng: &mut SmallRng,
) -> Result<CategoryScores, InvalidInput> {
    let mut values = [0.0f64; CATEGORY_COUNT];
    let mut answers = Vec::with_capacity(8);
    for category in Category::ALL {
        answers.clear();
        for _ in 0..question_count(variant, category) {
            answers.push(rng.random_range(LIKERT_MIN..=LIKERT_MAX));
        }
        values[category.index()] = aggregate(&answers)?;
    }
    CategoryScores::new(values)
}

/// Run a census of `respondents` simulated respondents in parallel.
pub fn run_census(
    variant: Variant,
    table: &RuleTable,
    respondents: usize,
    seed: u64,
) -> Result<CensusReport, InvalidInput> {
    if respondents == 0 {
        return Err(InvalidInput::EmptyCensus);
    }
    let start = Instant::now();

    let outcomes: Vec<(CategoryScores, ArchetypeId, bool)> = (0..respondents)
        .into_par_iter()
        .map(|i| -> Result<_, InvalidInput> {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            let scores = simulate_respondent(variant, &mut rng)?;
            let (archetype, rule_index) = table.evaluate(&scores);
            Ok((scores, archetype, rule_index.is_none()))
        })
        .collect::<Result<_, InvalidInput>>()?;

    let mut counts: BTreeMap<ArchetypeId, u64> =
        table.archetypes().into_iter().map(|a| (a, 0)).collect();
    let mut sums = [0.0f64; CATEGORY_COUNT];
    let mut mins = [f64::INFINITY; CATEGORY_COUNT];
    let mut maxs = [f64::NEG_INFINITY; CATEGORY_COUNT];
    let mut levels: Vec<LevelCounts> = vec![LevelCounts::default(); CATEGORY_COUNT];
    let mut fallback_count = 0u64;

    for (scores, archetype, fell_back) in &outcomes {
        *counts.entry(*archetype).or_insert(0) += 1;
        if *fell_back {
            fallback_count += 1;
        }
        for (category, score) in scores.iter() {
            let c = category.index();
            sums[c] += score;
            mins[c] = mins[c].min(score);
            maxs[c] = maxs[c].max(score);
            match Level::from_score(score) {
                Level::High => levels[c].high += 1,
                Level::Medium => levels[c].medium += 1,
                Level::Low => levels[c].low += 1,
            }
        }
    }

    let n = respondents as f64;
    let archetypes = counts
        .into_iter()
        .map(|(archetype, count)| ArchetypeShare {
            archetype,
            name: archetype.profile().display_name(),
            count,
            share: count as f64 / n,
        })
        .collect();
    let categories = Category::ALL
        .into_iter()
        .zip(levels)
        .map(|(category, levels)| {
            let c = category.index();
            CategoryStatistics {
                category,
                mean: sums[c] / n,
                min: mins[c],
                max: maxs[c],
                levels,
            }
        })
        .collect();

    let elapsed = start.elapsed();
    tracing::info!(
        variant = %variant,
        respondents,
        seed,
        fallback_count,
        elapsed_ms = elapsed.as_millis() as u64,
        "census complete"
    );

    Ok(CensusReport {
        variant,
        table: table.name.clone(),
        respondents: respondents as u64,
        seed,
        archetypes,
        categories,
        fallback_count,
        elapsed_ms: elapsed.as_millis() as u64,
    })
}
