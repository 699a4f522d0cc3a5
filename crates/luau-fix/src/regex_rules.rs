//! The three purely textual, regex-driven rewrite rules.

use regex::Regex;

/// Rewrites a function-type alias where the author typed `=` instead of
/// `->` after the parameter list, e.g. `type F = (a: number) = number`
/// becomes `type F = (a: number) -> number`.
pub fn rewrite_type_arrow(source: &str) -> String {
    let re = Regex::new(r"(type\s+\w+\s*=\s*\([^)]*\))\s*=\s*").expect("valid regex");
    re.replace_all(source, "$1 -> ").into_owned()
}

/// Inserts a statement-separating `;` between a closing bracket and a line
/// that opens with `(` or `{`, preventing Lua from parsing the next line as
/// a continuation of the previous expression (the classic
/// `foo()\n(bar)()` ambiguity).
pub fn insert_semicolon_before_brace_or_paren(source: &str) -> String {
    let re = Regex::new(r"([)\]\}])(\s*\n\s*)(?=[({])").expect("valid regex");
    re.replace_all(source, "$1;$2").into_owned()
}

/// Collapses runs of duplicated commas (`a,, b` -> `a, b`) and strips a
/// single trailing comma immediately before a closing bracket
/// (`{1, 2,}` -> `{1, 2}`).
pub fn remove_redundant_commas(source: &str) -> String {
    let duplicate = Regex::new(r",\s*,+").expect("valid regex");
    let collapsed = duplicate.replace_all(source, ",");
    let trailing = Regex::new(r",(\s*)([)\]\}])").expect("valid regex");
    trailing.replace_all(&collapsed, "$1$2").into_owned()
}
