use serde::Serialize;

use luau_diag::Diagnostic;

/// The result of checking every script in a bundle.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub script_count: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// The result of running the fixer over every script that failed
/// validation, then re-validating the whole bundle. Field names mirror the
/// JSON report the CLI writes out.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixSummary {
    pub auto_fix_applied: bool,
    pub fixed_files: Vec<String>,
    pub applied_rules: Vec<String>,
    pub remaining_diagnostics: Vec<Diagnostic>,
    pub original_diagnostics: Vec<Diagnostic>,
}
