//! JSON file I/O for rule tables and census reports.
//!
//! Rule table format: see [`crate::rules::RuleTable`]. Loading always
//! validates, so a table that reaches the classifier is well formed.

use std::fs;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use crate::error::{Error, RuleTableError};
use crate::rules::RuleTable;

/// Load and validate a rule table.
pub fn load_rule_table(path: impl AsRef<Path>) -> Result<RuleTable, RuleTableError> {
    let path = path.as_ref();
    let start_time = Instant::now();
    let content = fs::read_to_string(path).map_err(|source| RuleTableError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let table = RuleTable::from_json(&content)?;
    tracing::info!(
        path = %path.display(),
        name = %table.name,
        rules = table.rules.len(),
        elapsed_us = start_time.elapsed().as_micros() as u64,
        "loaded rule table"
    );
    Ok(table)
}

/// Write a rule table as pretty JSON, creating parent directories.
pub fn save_rule_table(table: &RuleTable, path: impl AsRef<Path>) -> Result<(), Error> {
    save_json(table, path)
}

/// Write any serializable report as pretty JSON, creating parent directories.
pub fn save_json<T: Serialize>(value: &T, path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    tracing::info!(path = %path.display(), "wrote JSON");
    Ok(())
}
