//! Clean-code heuristic checks
//!
//! Each check is a pure function of a file's text, independent of the
//! others, registered in [`default_checks`] with a fixed point weight. The
//! quality auditor only iterates the list, so new checks can be added
//! without touching the aggregation logic.
//!
//! These are textual heuristics, not parsing. False positives are acceptable
//! and expected; an AST-based rewrite would change scores and is out of
//! scope.

use regex::Regex;
use std::sync::LazyLock;

/// One registered heuristic check.
pub struct QualityCheck {
    pub name: &'static str,
    /// Points a passing file earns for this check.
    pub weight: u32,
    /// Issue text recorded when the check fails; the auditor appends the
    /// file name.
    pub issue: &'static str,
    pub run: fn(&str) -> bool,
}

/// Per-file maximum across all checks.
pub fn max_points_per_file() -> u32 {
    default_checks().iter().map(|c| c.weight).sum()
}

/// The built-in check battery. Weights reflect relative importance:
/// function quality over naming, naming over hygiene signals.
pub fn default_checks() -> &'static [QualityCheck] {
    &DEFAULT_CHECKS
}

static DEFAULT_CHECKS: [QualityCheck; 6] = [
    QualityCheck {
        name: "meaningful_names",
        weight: 20,
        issue: "Non-descriptive identifiers",
        run: meaningful_names,
    },
    QualityCheck {
        name: "function_size",
        weight: 25,
        issue: "Oversized or over-parameterized functions",
        run: function_size,
    },
    QualityCheck {
        name: "comment_quality",
        weight: 15,
        issue: "Inadequate comments",
        run: comment_quality,
    },
    QualityCheck {
        name: "formatting",
        weight: 15,
        issue: "Inconsistent formatting",
        run: formatting,
    },
    QualityCheck {
        name: "error_handling",
        weight: 15,
        issue: "Weak error handling",
        run: error_handling,
    },
    QualityCheck {
        name: "class_cohesion",
        weight: 10,
        issue: "Low class cohesion",
        run: class_cohesion,
    },
];

// Policy constants, not derived values.
const MAX_FUNCTION_BODY_LINES: usize = 20;
const MAX_FUNCTION_PARAMS: usize = 3;
const COMMENT_RATIO_MIN: f64 = 0.05;
const COMMENT_RATIO_MAX: f64 = 0.25;
const MAX_LINE_LENGTH: usize = 120;
const LONG_LINE_TOLERANCE: f64 = 0.1;
const MAX_BARE_NONE_RETURNS: usize = 3;
const MAX_METHODS_PER_CLASS: usize = 15;
const PREFIX_FRAGMENTATION_MIN_METHODS: usize = 10;
const MAX_METHOD_PREFIX_GROUPS: usize = 8;

static DEF_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"def\s+([A-Za-z_][A-Za-z0-9_]*)").expect("valid regex"));
static CLASS_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"class\s+([A-Za-z_][A-Za-z0-9_]*)").expect("valid regex"));
static DEF_SIGNATURE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"def\s+\w+\(([^)]*)\)").expect("valid regex"));

const VAGUE_TOKENS: &[&str] = &["temp", "data", "info", "mgr", "obj"];

/// Function and class identifiers avoid vague tokens and minimum-length
/// violations. Files with no functions or classes pass vacuously.
fn meaningful_names(text: &str) -> bool {
    let functions: Vec<&str> = DEF_NAME
        .captures_iter(text)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();
    let descriptive = functions
        .iter()
        .filter(|name| {
            let lower = name.to_lowercase();
            name.len() > 3 && !VAGUE_TOKENS.iter().any(|bad| lower.contains(bad))
        })
        .count();
    let functions_ok =
        functions.is_empty() || descriptive as f64 / functions.len() as f64 > 0.7;

    let classes: Vec<&str> = CLASS_NAME
        .captures_iter(text)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect();
    let good_classes = classes
        .iter()
        .filter(|name| {
            name.chars().next().is_some_and(|c| c.is_uppercase())
                && !name.to_lowercase().ends_with("manager")
        })
        .count();
    let classes_ok = classes.is_empty() || good_classes as f64 / classes.len() as f64 > 0.8;

    functions_ok && classes_ok
}

/// No function body longer than the line ceiling, no signature with more
/// than the parameter ceiling. The ceiling applies even to one-line bodies.
fn function_size(text: &str) -> bool {
    if max_function_body_lines(text) > MAX_FUNCTION_BODY_LINES {
        return false;
    }

    for capture in DEF_SIGNATURE.captures_iter(text) {
        let args = capture.get(1).map(|m| m.as_str().trim()).unwrap_or("");
        if args.is_empty() {
            continue;
        }
        let params = args.split(',').count();
        if params > MAX_FUNCTION_PARAMS {
            return false;
        }
    }
    true
}

/// Longest function body, measured as non-blank non-comment lines indented
/// deeper than the `def`. Indentation-based, so nested defs close the outer
/// count early; good enough for a heuristic.
fn max_function_body_lines(text: &str) -> usize {
    let mut max = 0;
    let mut current: Option<(usize, usize)> = None; // (def indent, body lines)

    for line in text.lines() {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        let is_def = trimmed.starts_with("def ") || trimmed.starts_with("async def ");

        if let Some((def_indent, count)) = current {
            if !trimmed.is_empty() && indent <= def_indent {
                max = max.max(count);
                current = None;
            }
        }

        if is_def {
            if let Some((_, count)) = current {
                max = max.max(count);
            }
            current = Some((indent, 0));
        } else if let Some((_, count)) = current.as_mut() {
            if !trimmed.is_empty() && !trimmed.starts_with('#') {
                *count += 1;
            }
        }
    }

    if let Some((_, count)) = current {
        max = max.max(count);
    }
    max
}

/// Comment-to-code ratio within the accepted band, and no commented-out
/// code (comment lines carrying executable-looking tokens).
fn comment_quality(text: &str) -> bool {
    let mut code_lines = 0usize;
    let mut comment_lines = 0usize;
    let mut commented_code = 0usize;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('#') {
            comment_lines += 1;
            if ["def ", "class ", "import ", "if ", "for "]
                .iter()
                .any(|token| trimmed.contains(token))
            {
                commented_code += 1;
            }
        } else if !trimmed.starts_with("\"\"\"") && !trimmed.starts_with("'''") {
            code_lines += 1;
        }
    }

    if code_lines == 0 {
        return true;
    }

    let ratio = comment_lines as f64 / code_lines as f64;
    (COMMENT_RATIO_MIN..=COMMENT_RATIO_MAX).contains(&ratio) && commented_code == 0
}

/// Few over-long lines and a consistent indentation unit (four spaces or a
/// tab, never odd space counts).
fn formatting(text: &str) -> bool {
    let lines: Vec<&str> = text.lines().collect();
    if lines.is_empty() {
        return true;
    }

    let long_lines = lines
        .iter()
        .filter(|line| line.chars().count() > MAX_LINE_LENGTH)
        .count();
    if long_lines as f64 >= lines.len() as f64 * LONG_LINE_TOLERANCE {
        return false;
    }

    lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| line.starts_with(' ') || line.starts_with('\t'))
        .all(|line| line.starts_with("    ") || line.starts_with('\t'))
}

/// Exceptions present where the file keeps bailing out with bare `None`
/// returns. Few bare returns is also fine on its own.
fn error_handling(text: &str) -> bool {
    let has_exceptions = text.contains("try:") && text.contains("except");
    let bare_none_returns = text.matches("return None").count();
    bare_none_returns < MAX_BARE_NONE_RETURNS || has_exceptions
}

/// No class with too many methods, and method-name prefixes not fragmented
/// into too many unrelated groups (a cheap single-responsibility proxy).
/// Files with no classes pass vacuously.
fn class_cohesion(text: &str) -> bool {
    for methods in class_method_names(text) {
        if methods.len() > MAX_METHODS_PER_CLASS {
            return false;
        }
        if methods.len() >= PREFIX_FRAGMENTATION_MIN_METHODS {
            let prefixes: std::collections::HashSet<&str> = methods
                .iter()
                .filter_map(|name| {
                    let prefix = name.split('_').find(|s| !s.is_empty())?;
                    (prefix.len() > 2 && name.contains('_')).then_some(prefix)
                })
                .collect();
            if prefixes.len() > MAX_METHOD_PREFIX_GROUPS {
                return false;
            }
        }
    }
    true
}

/// Method names grouped per class block, tracked by indentation.
fn class_method_names(text: &str) -> Vec<Vec<String>> {
    let mut classes: Vec<Vec<String>> = Vec::new();
    let mut stack: Vec<(usize, Vec<String>)> = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let indent = line.len() - trimmed.len();

        while stack.last().is_some_and(|(class_indent, _)| indent <= *class_indent) {
            if let Some((_, methods)) = stack.pop() {
                classes.push(methods);
            }
        }

        if trimmed.starts_with("class ") {
            stack.push((indent, Vec::new()));
        } else if let Some(rest) = trimmed
            .strip_prefix("def ")
            .or_else(|| trimmed.strip_prefix("async def "))
        {
            if let Some((_, methods)) = stack.last_mut() {
                let name: String = rest
                    .chars()
                    .take_while(|c| c.is_alphanumeric() || *c == '_')
                    .collect();
                methods.push(name);
            }
        }
    }

    while let Some((_, methods)) = stack.pop() {
        classes.push(methods);
    }
    classes
}
