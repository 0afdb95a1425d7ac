//! # Life Mapping: self-assessment scoring and archetype classification
//!
//! Respondents answer Likert questions (1-5) in six life-domain categories.
//! Each category's answers are averaged into a score, the six scores are run
//! through an ordered decision list to pick one narrative archetype, and every
//! category gets H/M/L feedback text.
//!
//! ## Pipeline
//!
//! | Step | Rust module | Description |
//! |------|-------------|-------------|
//! | Questions | [`questions`] | Per-variant question banks and Likert labels |
//! | Aggregate | [`scoring`] | Answers → per-category mean ([`types::CategoryScores`]) |
//! | Classify | [`rules`] | First-match-wins [`rules::RuleTable`] → [`archetype::ArchetypeId`] |
//! | Feedback | [`feedback`] | Score → [`types::Level`] → canned (tag, paragraph) |
//! | Report | [`report`] | Named answer sheet → full diagnosis with radar series |
//!
//! [`server`] exposes the pipeline over HTTP; [`census`] tallies archetype
//! frequencies over simulated respondents.
//!
//! ## Variants
//!
//! Three app revisions share the pipeline and differ only in data: question
//! count (30 / 47 / 36), burnout guard, compound rules, and whether the
//! archetype carries a reflective question. See [`types::Variant`].

pub mod archetype;
pub mod census;
pub mod constants;
pub mod context;
pub mod env_config;
pub mod error;
pub mod feedback;
pub mod questions;
pub mod report;
pub mod rules;
pub mod scoring;
pub mod server;
pub mod storage;
pub mod types;
