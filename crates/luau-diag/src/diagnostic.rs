use serde::{Deserialize, Serialize};

/// Context lines kept on either side of the offending line.
const SNIPPET_CONTEXT: i64 = 2;

/// A single reported problem in one script.
///
/// This is the wire record spec.md §3 describes: a diagnostic is produced at
/// most once per script per validation pass, and `snippet` is always
/// pre-rendered rather than regenerated by a downstream consumer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub path: String,
    pub line: u32,
    pub message: String,
    pub snippet: String,
}

impl Diagnostic {
    pub fn new(path: impl Into<String>, line: u32, message: impl Into<String>, source: &str) -> Self {
        let message = message.into();
        let snippet = build_snippet(source, line);
        Diagnostic {
            path: path.into(),
            line,
            message,
            snippet,
        }
    }
}

/// Renders up to `2 * context + 1` lines of `source` centered on `error_line`
/// (1-based), clamped to the file's bounds.
///
/// Each line is `"{prefix}{line_number:4}: {text}"`, where `prefix` is
/// `"> "` on the offending line and `"  "` otherwise. Lines are joined with
/// `\n` and the result carries no trailing newline.
pub fn build_snippet(source: &str, error_line: u32) -> String {
    let lines: Vec<&str> = source.lines().collect();
    if lines.is_empty() {
        return String::new();
    }
    let error_line = i64::from(error_line);
    let last_idx = (lines.len() - 1) as i64;
    let start = (error_line - 1 - SNIPPET_CONTEXT).max(0);
    let end = (error_line - 1 + SNIPPET_CONTEXT).min(last_idx);
    if start > end {
        return String::new();
    }

    let mut out = String::new();
    for idx in start..=end {
        if !out.is_empty() {
            out.push('\n');
        }
        let prefix = if idx == error_line - 1 { "> " } else { "  " };
        out.push_str(&format!("{prefix}{:>4}: {}", idx + 1, lines[idx as usize]));
    }
    out
}
