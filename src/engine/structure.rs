//! Structure auditor
//!
//! Checks presence of canonical directories and files: a universal set every
//! project should have, plus the profile's type-specific required
//! directories. Presence adds points, absence adds an issue; the score never
//! goes below zero or above 100.

use crate::config::ProjectTypeProfile;
use crate::models::{AuditFinding, FindingCategory};
use std::path::Path;

/// Universal structure items in check order. Alternatives within one item
/// (e.g. `src` or `app`) count once. Point values sum to exactly 100 so a
/// project with every universal item scores 100 before type-specific items.
const UNIVERSAL_ITEMS: &[(&[&str], u32, &str)] = &[
    (&["src", "app"], 25, "Missing src/ or app/ directory"),
    (&["tests"], 20, "Missing tests/ directory"),
    (&["docs"], 10, "Missing docs/ directory"),
    (&["README.md"], 15, "Missing README.md"),
    (
        &["requirements.txt", "pyproject.toml", "setup.py"],
        15,
        "Missing dependency manifest (requirements.txt or pyproject.toml)",
    ),
    (&[".gitignore"], 15, "Missing .gitignore"),
];

/// Points awarded per present type-specific directory.
const REQUIRED_STRUCTURE_POINTS: u32 = 5;

/// Audit the project layout against universal and type-specific conventions.
///
/// Issues are appended in a fixed order (universal items first, then the
/// profile's required structure in declaration order) so report fixtures
/// stay reproducible.
pub fn audit_structure(root: &Path, profile: &ProjectTypeProfile) -> AuditFinding {
    let mut score = 0u32;
    let mut issues = Vec::new();

    for (alternatives, points, issue) in UNIVERSAL_ITEMS {
        if alternatives.iter().any(|item| root.join(item).exists()) {
            score += points;
        } else {
            issues.push(issue.to_string());
        }
    }

    for dir in &profile.required_structure {
        if root.join(dir).exists() {
            score += REQUIRED_STRUCTURE_POINTS;
        } else {
            issues.push(format!(
                "Missing {}-specific directory: {}/",
                profile.name, dir
            ));
        }
    }

    AuditFinding::new(FindingCategory::Structure, score, issues, Vec::new())
}
