//! Orchestration layer: ties the lexer/parser, the fixer, and the bundle
//! reader together into the two operations a caller actually wants —
//! validate a bundle, and fix one.
//!
//! Per-script validation is embarrassingly parallel; behind the `parallel`
//! feature it runs over `rayon`'s `into_par_iter()` instead of sequentially.
//! Off by default, since most bundles are small enough that thread
//! spin-up outweighs the win.

mod report;

use luau_bundle::{EditableBundle, ScriptEntry};
use luau_diag::Diagnostic;
use luau_fix::{AutoFixer, RuleSet};

pub use report::{FixSummary, ValidationReport};

/// Which auto-fix rules to run. Defaults to the full rule set.
#[derive(Debug, Clone, Copy)]
pub struct FixOptions {
    pub rules: RuleSet,
}

impl Default for FixOptions {
    fn default() -> Self {
        FixOptions { rules: RuleSet::all() }
    }
}

/// Validates every script in `bundle`, returning one diagnostic per script
/// that fails to parse. Scripts are independent: one failing does not stop
/// the rest from being checked.
pub fn validate_bundle(bundle: &EditableBundle) -> ValidationReport {
    let entries = bundle.entries();
    tracing::info!(script_count = entries.len(), "validating bundle");
    let diagnostics = diagnose_all(entries);
    ValidationReport { script_count: entries.len(), diagnostics }
}

/// Runs the fixer over a subset of `bundle`'s scripts, writes repaired text
/// back into `bundle`, and re-validates the whole bundle.
///
/// `target_paths` selects which scripts are eligible for fixing: when
/// `Some` and non-empty, only entries whose `path` appears in it are
/// touched, even if that path isn't currently failing (or doesn't exist at
/// all, in which case it's silently skipped) — an entry not named is left
/// untouched even if the fixer would otherwise have rewritten it. When
/// `None` or empty, every script in the bundle is eligible.
///
/// `original_diagnostics` and `remaining_diagnostics` are always computed
/// fresh from the bundle's current content, not echoed back from whatever
/// diagnostics the caller supplied — the bundle's own state is the source
/// of truth.
pub fn fix_bundle(bundle: &mut EditableBundle, target_paths: Option<&[String]>, options: &FixOptions) -> FixSummary {
    let original_diagnostics = diagnose_all(bundle.entries());
    let applied_rules = options.rules.enabled_names().into_iter().map(str::to_string).collect();

    let fixer = AutoFixer::new(options.rules);
    let mut fixed_files = Vec::new();
    let all_paths: Vec<String> = bundle.entries().iter().map(|e| e.path.clone()).collect();
    let candidate_paths: Vec<String> = match target_paths {
        Some(paths) if !paths.is_empty() => paths.to_vec(),
        _ => all_paths,
    };

    for path in &candidate_paths {
        let Some(entry) = bundle.entries().iter().find(|e| &e.path == path) else {
            continue;
        };
        tracing::debug!(path = %entry.path, "applying auto-fix rules");
        let result = fixer.apply(&entry.content);
        if result.fixed != entry.content {
            bundle.set_content(path, result.fixed);
            fixed_files.push(path.clone());
        }
    }
    fixed_files.sort();
    fixed_files.dedup();

    let remaining_diagnostics = diagnose_all(bundle.entries());
    tracing::info!(
        fixed = fixed_files.len(),
        remaining = remaining_diagnostics.len(),
        "auto-fix pass complete"
    );

    FixSummary {
        auto_fix_applied: !fixed_files.is_empty(),
        fixed_files,
        applied_rules,
        remaining_diagnostics,
        original_diagnostics,
    }
}

fn diagnose_one(entry: &ScriptEntry) -> Option<Diagnostic> {
    match luau_par::parse(&entry.content) {
        Ok(()) => None,
        Err(err) => Some(Diagnostic::new(entry.path.clone(), err.line, err.message.clone(), &entry.content)),
    }
}

#[cfg(not(feature = "parallel"))]
fn diagnose_all(entries: &[ScriptEntry]) -> Vec<Diagnostic> {
    entries.iter().filter_map(diagnose_one).collect()
}

#[cfg(feature = "parallel")]
fn diagnose_all(entries: &[ScriptEntry]) -> Vec<Diagnostic> {
    use rayon::prelude::*;
    entries.par_iter().filter_map(diagnose_one).collect()
}
