//! Shared environment configuration for the Life Mapping binaries.
//!
//! Consolidates `LIFE_MAPPING_PORT`, `LIFE_MAPPING_VARIANT`,
//! `LIFE_MAPPING_RULES`, `RAYON_NUM_THREADS` and `RUST_LOG` reads.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::error::InvalidInput;
use crate::types::Variant;

pub const DEFAULT_PORT: u16 = 9000;
pub const DEFAULT_RAYON_THREADS: usize = 8;

/// Server settings resolved from the environment.
#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub variant: Variant,
    /// Optional JSON rule table that replaces the default variant's built-in table.
    pub rules_path: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, InvalidInput> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary key lookup.
    ///
    /// An unparsable port falls back to the default; an unknown variant is an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, InvalidInput> {
        let port = lookup("LIFE_MAPPING_PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let variant = match lookup("LIFE_MAPPING_VARIANT") {
            Some(s) if !s.trim().is_empty() => s.parse()?,
            _ => Variant::default(),
        };
        let rules_path = lookup("LIFE_MAPPING_RULES")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        Ok(Self {
            port,
            variant,
            rules_path,
        })
    }
}

/// Install the global tracing subscriber (`RUST_LOG`, default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Read `RAYON_NUM_THREADS` (default 8) and build the global pool.
/// Tolerates an already-initialized pool. Returns thread count.
pub fn init_rayon_threads() -> usize {
    let num_threads = std::env::var("RAYON_NUM_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_RAYON_THREADS);
    if rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
        .is_err()
    {
        tracing::debug!("rayon pool already initialized");
    }
    tracing::info!(threads = num_threads, "rayon pool ready");
    num_threads
}
