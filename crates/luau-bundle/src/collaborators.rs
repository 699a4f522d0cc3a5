//! Trait-only stubs for collaborator tools that sit alongside the syntax
//! checker in the originating toolchain but are out of scope here: a docs
//! link checker, a Mermaid diagram linter, and a manifest paginator. None
//! of `validate_bundle`/`fix_bundle` depends on these; they exist so a host
//! application can plug in its own implementation without this crate
//! needing to know about it.

use std::path::Path;

use serde_json::Value;

/// Checks that links inside a repository's documentation resolve.
pub trait DocsLinkChecker {
    fn check(&self, repo_root: &Path) -> Vec<LinkIssue>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkIssue {
    pub file: String,
    pub line: u32,
    pub target: String,
    pub reason: String,
}

/// Lints Mermaid diagrams embedded in Markdown.
pub trait MermaidLinter {
    fn lint(&self, markdown: &str) -> Vec<MermaidBlock>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MermaidBlock {
    pub start_line: u32,
    pub diagram: String,
}

/// Splits a large manifest document into smaller pages.
pub trait ManifestPaginator {
    fn paginate(&self, manifest: &Value) -> Vec<Value>;
}
