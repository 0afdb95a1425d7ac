//! Shared, immutable classification context.
//!
//! Holds one rule table per variant and the variant used when a request does
//! not name one. Built once at startup and shared as `Arc<LifeMapContext>`
//! across request handlers.

use crate::error::InvalidInput;
use crate::rules::RuleTable;
use crate::types::Variant;

pub struct LifeMapContext {
    /// Indexed by `Variant as usize`.
    tables: [RuleTable; 3],
    pub default_variant: Variant,
}

impl Default for LifeMapContext {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

impl LifeMapContext {
    /// Built-in rule tables for every variant.
    pub fn new(default_variant: Variant) -> Self {
        Self {
            tables: Variant::ALL.map(RuleTable::for_variant),
            default_variant,
        }
    }

    /// Replace one variant's table.
    pub fn with_table(mut self, variant: Variant, table: RuleTable) -> Self {
        self.tables[variant as usize] = table;
        self
    }

    pub fn table(&self, variant: Variant) -> &RuleTable {
        &self.tables[variant as usize]
    }

    /// Parse an optional variant name, falling back to the default.
    pub fn resolve_variant(&self, name: Option<&str>) -> Result<Variant, InvalidInput> {
        match name {
            Some(s) if !s.trim().is_empty() => s.parse(),
            _ => Ok(self.default_variant),
        }
    }
}
