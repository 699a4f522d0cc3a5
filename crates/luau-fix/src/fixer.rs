use crate::closers::{append_missing_closers, close_tables_before_type};
use crate::regex_rules::{insert_semicolon_before_brace_or_paren, remove_redundant_commas, rewrite_type_arrow};

/// Which of the five textual rewrite rules an [`AutoFixer`] runs, and in
/// what order they are always tried (the order is fixed; only membership is
/// configurable). Every field defaults to enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleSet {
    pub type_arrow_rewrite: bool,
    pub insert_semicolon_before_brace_or_paren: bool,
    pub remove_redundant_commas: bool,
    pub close_tables_before_type: bool,
    pub append_missing_closers: bool,
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet {
            type_arrow_rewrite: true,
            insert_semicolon_before_brace_or_paren: true,
            remove_redundant_commas: true,
            close_tables_before_type: true,
            append_missing_closers: true,
        }
    }
}

impl RuleSet {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn none() -> Self {
        RuleSet {
            type_arrow_rewrite: false,
            insert_semicolon_before_brace_or_paren: false,
            remove_redundant_commas: false,
            close_tables_before_type: false,
            append_missing_closers: false,
        }
    }

    /// Names of the rules this set enables, in pipeline order.
    pub fn enabled_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.type_arrow_rewrite {
            names.push("type-arrow-rewrite");
        }
        if self.insert_semicolon_before_brace_or_paren {
            names.push("insert-semicolon-before-brace-or-paren");
        }
        if self.remove_redundant_commas {
            names.push("remove-redundant-commas");
        }
        if self.close_tables_before_type {
            names.push("close-table-before-type");
        }
        if self.append_missing_closers {
            names.push("append-missing-closers");
        }
        names
    }
}

/// The result of running [`AutoFixer::apply`]: the rewritten source plus
/// the names of the rules that ran, in the order they ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixResult {
    pub fixed: String,
    pub applied_rules: Vec<&'static str>,
}

/// Deterministic, idempotent textual auto-fixer.
///
/// Runs a fixed pipeline of five rules over the raw source text: no
/// parsing, no AST. Each rule is a narrow, independently testable rewrite;
/// running the full pipeline twice on already-fixed source is a no-op,
/// which is what makes it safe to apply without re-validating between
/// rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoFixer {
    rules: RuleSet,
}

impl AutoFixer {
    pub fn new(rules: RuleSet) -> Self {
        AutoFixer { rules }
    }

    pub fn apply(&self, source: &str) -> FixResult {
        let mut text = source.to_string();
        let mut applied_rules = Vec::new();

        if self.rules.type_arrow_rewrite {
            text = rewrite_type_arrow(&text);
            applied_rules.push("type-arrow-rewrite");
        }
        if self.rules.insert_semicolon_before_brace_or_paren {
            text = insert_semicolon_before_brace_or_paren(&text);
            applied_rules.push("insert-semicolon-before-brace-or-paren");
        }
        if self.rules.remove_redundant_commas {
            text = remove_redundant_commas(&text);
            applied_rules.push("remove-redundant-commas");
        }
        if self.rules.close_tables_before_type {
            text = close_tables_before_type(&text);
            applied_rules.push("close-table-before-type");
        }
        if self.rules.append_missing_closers {
            text = append_missing_closers(&text);
            applied_rules.push("append-missing-closers");
        }

        FixResult { fixed: text, applied_rules }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ruleset_runs_all_five_rules_in_order() {
        let result = AutoFixer::new(RuleSet::all()).apply("local t = {1, 2");
        assert_eq!(
            result.applied_rules,
            vec![
                "type-arrow-rewrite",
                "insert-semicolon-before-brace-or-paren",
                "remove-redundant-commas",
                "close-table-before-type",
                "append-missing-closers",
            ]
        );
        assert_eq!(result.fixed, "local t = {1, 2\n}");
    }

    #[test]
    fn disabling_a_rule_skips_it_and_its_name() {
        let mut rules = RuleSet::all();
        rules.append_missing_closers = false;
        let result = AutoFixer::new(rules).apply("local t = {1, 2");
        assert!(!result.applied_rules.contains(&"append-missing-closers"));
        assert_eq!(result.fixed, "local t = {1, 2");
    }

    #[test]
    fn enabled_names_matches_applied_rules_for_a_full_ruleset() {
        assert_eq!(
            RuleSet::all().enabled_names(),
            AutoFixer::new(RuleSet::all()).apply("").applied_rules
        );
    }

    #[test]
    fn fixing_is_idempotent() {
        let fixer = AutoFixer::new(RuleSet::all());
        let source = "local t = {1, 2,,\nlocal u = {3";
        let once = fixer.apply(source).fixed;
        let twice = fixer.apply(&once).fixed;
        assert_eq!(once, twice);
    }

    #[test]
    fn fixing_a_clean_script_changes_nothing() {
        let fixer = AutoFixer::new(RuleSet::all());
        let source = "local function greet(name: string): string\n  return \"hi \" .. name\nend\n";
        assert_eq!(fixer.apply(source).fixed, source);
    }

    #[test]
    fn none_ruleset_is_a_no_op() {
        let fixer = AutoFixer::new(RuleSet::none());
        let result = fixer.apply("local t = {1, 2");
        assert!(result.applied_rules.is_empty());
        assert_eq!(result.fixed, "local t = {1, 2");
    }

    /// A small corpus of near-miss snippets covering each rule, used by the
    /// idempotence property test below.
    fn near_miss_corpus() -> Vec<&'static str> {
        vec![
            "local t = {1, 2",
            "type F = (a: number) = number\n",
            "local a = (1)\n(f)()\n",
            "local t = { a = 1,, b = 2 }\n",
            "f(1, 2,)\n",
            "local Config = {\ntype Other = number\n",
            "f({1, [2\n",
            "local t = {\n  a = 1\n",
            "local x = 1\n",
            "",
        ]
    }

    proptest::proptest! {
        #[test]
        fn fixing_is_idempotent_over_near_miss_corpus(idx in 0usize..10) {
            let source = near_miss_corpus()[idx];
            let fixer = AutoFixer::new(RuleSet::all());
            let once = fixer.apply(source).fixed;
            let twice = fixer.apply(&once).fixed;
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn never_panics_on_arbitrary_utf8(s in ".{0,200}") {
            let fixer = AutoFixer::new(RuleSet::all());
            let _ = fixer.apply(&s);
        }
    }
}
