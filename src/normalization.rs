use regex::Regex;
use serde::Serialize;
use std::fmt::Display;
use std::sync::OnceLock;

#[derive(Debug)]
enum Matcher {
    Pattern(Regex),
    Literal(&'static str),
}

#[derive(Debug)]
struct CleaningStep {
    name: &'static str,
    matcher: Matcher,
    replace: &'static str,
}

impl CleaningStep {
    fn pattern(name: &'static str, pattern: &str, replace: &'static str) -> Self {
        Self {
            name,
            // Constant patterns; a failure here is a programming error.
            matcher: Matcher::Pattern(Regex::new(pattern).unwrap()),
            replace,
        }
    }

    fn literal(name: &'static str, needle: &'static str, replace: &'static str) -> Self {
        Self {
            name,
            matcher: Matcher::Literal(needle),
            replace,
        }
    }

    fn apply(&self, input: &str) -> String {
        match &self.matcher {
            Matcher::Pattern(re) => re.replace_all(input, self.replace).into_owned(),
            Matcher::Literal(needle) => input.replace(needle, self.replace),
        }
    }
}

static STEPS: OnceLock<Vec<CleaningStep>> = OnceLock::new();

// A word character is a letter, a number of any kind, or `_`. The regex
// crate's `\w` also admits combining marks, joiners and connector
// punctuation, and `\s` leaves out the information separators U+001C..U+001F,
// so both classes are spelled out.
const NON_WORD: &str = r"[^\p{L}\p{N}_]";
const SPACE: &str = r"[\s\x1C-\x1F]";

// Order matters. Several steps overlap (`space_before_symbol` eats most of what
// `symbol_before_comma` would match, and nothing `strip_wildcard_literal` looks
// for survives `non_word_to_space`), but output must stay byte-compatible with
// existing consumers, so every step runs.
fn get_steps() -> &'static [CleaningStep] {
    STEPS.get_or_init(|| {
        vec![
            CleaningStep::pattern("space_before_symbol", &format!("{SPACE}{NON_WORD}"), " "),
            CleaningStep::pattern("symbol_before_comma", &format!("{NON_WORD},{SPACE}"), " "),
            CleaningStep::pattern("non_word_to_space", NON_WORD, " "),
            CleaningStep::pattern("strip_digits", r"\d+", ""),
            CleaningStep::pattern("collapse_whitespace", &format!("{SPACE}+"), " "),
            CleaningStep::pattern("strip_symbols", r"[!@#$_]", ""),
            CleaningStep::literal("strip_co", "co", ""),
            CleaningStep::literal("strip_https", "https", ""),
            CleaningStep::literal("strip_comma", ",", ""),
            CleaningStep::literal("strip_wildcard_literal", r"[\w*", ""),
        ]
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct CleanTrace {
    pub raw: String,
    pub cleaned: String,
    pub applied_steps: Vec<String>,
}

/// Cleans one cell value. Anything `Display` is accepted and rendered to a
/// string first, so numbers and missing cells go through the same chain.
pub fn clean(value: impl Display) -> String {
    let mut current = value.to_string().to_lowercase();
    for step in get_steps() {
        current = step.apply(&current);
    }
    current
}

/// Same as [`clean`], also reporting which steps changed the text.
pub fn clean_with_trace(value: impl Display) -> (String, CleanTrace) {
    let raw = value.to_string();
    let mut current = raw.to_lowercase();
    let mut applied_steps = Vec::new();

    if current != raw {
        applied_steps.push("lowercase".to_string());
    }

    for step in get_steps() {
        let next = step.apply(&current);
        if next != current {
            current = next;
            applied_steps.push(step.name.to_string());
        }
    }

    (
        current.clone(),
        CleanTrace {
            raw,
            cleaned: current,
            applied_steps,
        },
    )
}
