//! Recursive-descent structural validation for Luau source.
//!
//! This parser builds no AST. It walks a token stream the same way a real
//! parser would — statements, expressions, suffix chains, table
//! constructors — but its only product is a verdict: either the script is
//! structurally well-formed, or [`parse`] returns the first
//! [`luau_diag::SyntaxError`] encountered. Type annotations are not parsed
//! into a type grammar at all; they are skipped as balanced token runs (see
//! `types`), matching the reference checker's deliberately tolerant
//! handling of Luau's type-level syntax.

mod expr;
mod parser;
mod stmt;
mod types;

pub use parser::{parse, Parser};

#[cfg(test)]
mod tests {
    use super::parse;

    #[test]
    fn validates_a_realistic_module() {
        let source = r#"
            local Module = {}

            export type Config = {
                retries: number,
                timeout: number?,
            }

            function Module.new(config: Config)
                local self = setmetatable({}, {__index = Module})
                self.retries = config.retries
                self.timeout = config.timeout or 30
                return self
            end

            function Module:run(task: () -> ())
                for attempt = 1, self.retries do
                    local ok = pcall(task)
                    if ok then
                        return true
                    end
                end
                return false
            end

            return Module
        "#;
        assert!(parse(source).is_ok());
    }

    #[test]
    fn reports_first_error_in_malformed_module() {
        let source = "local function broken(\n  return 1\nend";
        assert!(parse(source).is_err());
    }

    #[test]
    fn empty_and_comment_only_scripts_are_valid() {
        assert!(parse("").is_ok());
        assert!(parse("-- just a comment").is_ok());
        assert!(parse("--[[ long comment ]]").is_ok());
    }

    proptest::proptest! {
        #[test]
        fn never_panics_on_arbitrary_utf8(s in ".{0,200}") {
            let _ = parse(&s);
        }

        #[test]
        fn deterministic_across_repeated_runs(s in ".{0,120}") {
            let first = parse(&s).map_err(|e| (e.line, e.column, e.message));
            let second = parse(&s).map_err(|e| (e.line, e.column, e.message));
            prop_assert_eq!(first, second);
        }
    }
}
