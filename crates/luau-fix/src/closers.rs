use crate::scan::{closer_for, skip_span, starts_with_type_keyword_after_whitespace};

/// Inserts an empty `{}` immediately before any `{` that is itself followed
/// (across whitespace only) by a `type` alias header — the author almost
/// always meant to close the previous table there and simply forgot. This
/// is a blunt, context-free literal scan, not a bracket-depth check: it
/// fires on every `{` immediately preceding `type`, trusting that pattern
/// to be rare and always a mistake when it does occur.
pub fn close_tables_before_type(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '{' && starts_with_type_keyword_after_whitespace(&chars, i + 1) {
            out.push_str("{}");
            i += 1;
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// Appends whatever closing brackets remain open at end of file, in
/// last-opened-first-closed order. The final safety net: every other rule
/// can leave brackets unbalanced, this one cannot.
pub fn append_missing_closers(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut stack: Vec<char> = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let skipped = skip_span(&chars, i);
        if skipped != i {
            i = skipped;
            continue;
        }
        match chars[i] {
            '(' | '[' | '{' => stack.push(chars[i]),
            ')' | ']' | '}' => {
                if stack.last().and_then(|open| closer_for(*open)) == Some(chars[i]) {
                    stack.pop();
                }
            }
            _ => {}
        }
        i += 1;
    }

    if stack.is_empty() {
        return source.to_string();
    }
    let mut result = source.to_string();
    if !result.ends_with('\n') {
        result.push('\n');
    }
    while let Some(open) = stack.pop() {
        result.push(closer_for(open).unwrap());
    }
    result
}
