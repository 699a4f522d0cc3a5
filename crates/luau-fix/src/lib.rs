//! Deterministic, idempotent textual repair for Luau scripts.
//!
//! [`AutoFixer`] never parses the script it repairs: it runs a fixed
//! pipeline of five textual rewrites, each skip-aware of string, comment,
//! and long-bracket spans so it never mutates bytes inside them. The
//! pipeline is meant to run once per script and then hand the result back
//! to `luau-par` for re-validation — it does not guarantee the output
//! parses, only that brackets balance and the specific malformed patterns
//! it targets are gone.

mod closers;
mod fixer;
mod regex_rules;
mod scan;

pub use fixer::{AutoFixer, FixResult, RuleSet};
