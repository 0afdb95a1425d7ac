use std::path::PathBuf;

use clap::Parser;

use life_mapping::census::run_census;
use life_mapping::env_config::{init_rayon_threads, init_tracing};
use life_mapping::rules::RuleTable;
use life_mapping::storage::{load_rule_table, save_json};
use life_mapping::types::Variant;

/// Classify simulated respondents and report the archetype distribution.
#[derive(Parser)]
#[command(name = "life-mapping-census")]
struct Args {
    /// Questionnaire variant: classic, extended or reflective.
    #[arg(long, default_value = "reflective", env = "LIFE_MAPPING_VARIANT")]
    variant: Variant,

    /// Number of simulated respondents.
    #[arg(long, default_value_t = 100_000)]
    respondents: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// JSON rule table to use instead of the variant's built-in one.
    #[arg(long, env = "LIFE_MAPPING_RULES")]
    rules: Option<PathBuf>,

    /// Write the full report as JSON here.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() {
    init_tracing();
    let args = Args::parse();
    init_rayon_threads();

    let table = match &args.rules {
        Some(path) => match load_rule_table(path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Failed to load rule table: {}", e);
                std::process::exit(1);
            }
        },
        None => RuleTable::for_variant(args.variant),
    };

    let report = match run_census(args.variant, &table, args.respondents, args.seed) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Census failed: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Variant {} / table {} / {} respondents (seed {}) in {} ms",
        report.variant, report.table, report.respondents, report.seed, report.elapsed_ms
    );
    println!("{:<32} {:>10} {:>8}", "Archetype", "Count", "Share");
    for share in &report.archetypes {
        println!(
            "{:<32} {:>10} {:>7.2}%",
            share.name,
            share.count,
            share.share * 100.0
        );
    }
    println!();
    println!(
        "{:<12} {:>6} {:>8} {:>8} {:>8}",
        "Category", "Mean", "H", "M", "L"
    );
    for stats in &report.categories {
        println!(
            "{:<12} {:>6.3} {:>8} {:>8} {:>8}",
            stats.category.name(),
            stats.mean,
            stats.levels.high,
            stats.levels.medium,
            stats.levels.low
        );
    }
    println!("Fallback (no rule matched): {}", report.fallback_count);

    if let Some(path) = &args.output {
        if let Err(e) = save_json(&report, path) {
            eprintln!("Failed to write {}: {}", path.display(), e);
            std::process::exit(1);
        }
        println!("Report written to {}", path.display());
    }
}
