//! Ordered regex substitutions that turn `<script setup>` + `onMounted` blocks
//! into plain client-side scripts guarded by a browser check.
//!
//! The rules match text, not structure. An opener and the closing brace added
//! by the closing-bracket rule are paired only by position in the file.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// Opening of the guarded `DOMContentLoaded` block that replaces `onMounted(() => {`.
pub const GUARD_OPEN: &str = "<script>\nif (typeof window !== 'undefined') {\n  window.addEventListener('DOMContentLoaded', () => {";

/// Closing of the guarded block, emitted in place of `})\n</script>`.
pub const GUARD_CLOSE: &str = "  })\n}\n</script>";

/// A single named substitution.
pub struct Rule {
    pub name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }

    /// Replace every non-overlapping match. Borrows the input when nothing matches.
    pub fn apply<'a>(&self, content: &'a str) -> Cow<'a, str> {
        self.pattern.replace_all(content, NoExpand(self.replacement))
    }

    pub fn is_match(&self, content: &str) -> bool {
        self.pattern.is_match(content)
    }
}

static RULES: LazyLock<[Rule; 3]> = LazyLock::new(|| {
    [
        // Leftover `<script>onMounted(() => {` from a half-finished conversion.
        Rule::new(
            "residual-initializer",
            r"<script>onMounted\(\(\) => \{",
            GUARD_OPEN,
        ),
        // `<script setup>` importing `onMounted` from `vue`, then opening its callback.
        Rule::new(
            "full-form",
            r#"<script setup>\s*import\s*\{\s*onMounted\s*\}\s*from\s*['"]vue['"]\s*\n\s*onMounted\(\(\)\s*=>\s*\{"#,
            GUARD_OPEN,
        ),
        // `})` right before `</script>`; closes the guard opened above.
        Rule::new("closing-bracket", r"\}\)\s*\n</script>", GUARD_CLOSE),
    ]
});

/// Rules in application order.
pub fn rules() -> &'static [Rule] {
    RULES.as_slice()
}

/// Apply every rule in order, each to the previous rule's output.
///
/// Returns the input unchanged (byte for byte) when no rule matches.
pub fn transform(content: &str) -> String {
    let mut current = content.to_string();
    for rule in rules() {
        current = rule.apply(&current).into_owned();
    }
    current
}

/// Names of the rules that fire, in order, against `content`.
pub fn matching_rules(content: &str) -> Vec<&'static str> {
    let mut current = content.to_string();
    let mut names = Vec::new();
    for rule in rules() {
        if rule.is_match(&current) {
            names.push(rule.name);
            current = rule.apply(&current).into_owned();
        }
    }
    names
}
