//! Architecture and design pattern detection
//!
//! Two parallel passes. Architecture patterns are recognized from directory
//! and file naming alone (cheap, no content read); design patterns from
//! keyword presence in a capped sample of source files. Each detected
//! pattern adds a fixed point value; each pattern is checked exactly once,
//! so the detected-name lists need no dedup.

use crate::engine::matcher::{self, read_file, source_files, Indicator, CONTENT_SAMPLE_CAP};
use crate::models::{AuditFinding, FindingCategory};
use std::path::Path;
use tracing::info;

struct DesignRule {
    name: &'static str,
    points: u32,
    /// Case-insensitive content keywords; first match wins.
    keywords: &'static [&'static str],
}

/// Architecture rules as (name, points, path/filename indicators).
/// Built at call time because `Indicator` owns its strings.
fn architecture_rules() -> Vec<(&'static str, u32, Vec<Indicator>)> {
    vec![
        (
            "MVC",
            25,
            vec![
                Indicator::path("models"),
                Indicator::path("views"),
                Indicator::path("controllers"),
                Indicator::wildcard("*controller*"),
            ],
        ),
        (
            "Hexagonal",
            30,
            vec![
                Indicator::path("ports"),
                Indicator::path("adapters"),
                Indicator::path("domain"),
                Indicator::path("infrastructure"),
            ],
        ),
        (
            "Clean Architecture",
            35,
            vec![
                Indicator::path("entities"),
                Indicator::path("use_cases"),
                Indicator::path("interfaces"),
                Indicator::path("frameworks"),
            ],
        ),
        (
            "Repository",
            20,
            vec![
                Indicator::path("repositories"),
                Indicator::wildcard("*repository*"),
            ],
        ),
        (
            "Service Layer",
            15,
            vec![
                Indicator::path("services"),
                Indicator::path("service_layer"),
                Indicator::wildcard("*service*"),
            ],
        ),
        (
            "Dependency Injection",
            20,
            vec![
                Indicator::path("di"),
                Indicator::path("dependencies"),
                Indicator::wildcard("*inject*"),
                Indicator::wildcard("*container*"),
            ],
        ),
        (
            "REST API Layering",
            15,
            vec![
                Indicator::path("routes"),
                Indicator::path("api"),
                Indicator::path("endpoints"),
                Indicator::wildcard("*route*"),
            ],
        ),
    ]
}

const DESIGN_RULES: &[DesignRule] = &[
    DesignRule {
        name: "Singleton",
        points: 10,
        keywords: &["__new__", "_instance"],
    },
    DesignRule {
        name: "Factory",
        points: 15,
        keywords: &["factory", "create("],
    },
    DesignRule {
        name: "Observer",
        points: 15,
        keywords: &["notify(", "subscribe(", "observer"],
    },
    DesignRule {
        name: "Strategy",
        points: 15,
        keywords: &["strategy"],
    },
    DesignRule {
        name: "Adapter",
        points: 10,
        keywords: &["adapter"],
    },
    DesignRule {
        name: "Decorator",
        points: 15,
        keywords: &["@", "decorator"],
    },
];

/// Run both pattern passes against the project root.
pub fn detect_patterns(root: &Path) -> (AuditFinding, AuditFinding) {
    let architecture = detect_architecture(root);
    let design = detect_design(root);
    info!(
        "patterns: architecture {} ({}), design {} ({})",
        architecture.score,
        architecture.detected.join(", "),
        design.score,
        design.detected.join(", ")
    );
    (architecture, design)
}

fn detect_architecture(root: &Path) -> AuditFinding {
    let mut detected = Vec::new();
    let mut score = 0u32;

    for (name, points, indicators) in architecture_rules() {
        if indicators
            .iter()
            .any(|indicator| matcher::matches(root, indicator))
        {
            detected.push(name.to_string());
            score += points;
        }
    }

    AuditFinding::new(FindingCategory::Architecture, score, Vec::new(), detected)
}

fn detect_design(root: &Path) -> AuditFinding {
    // Read the sample once; every rule searches the same contents. This is
    // the read-once cache the data-model allows: truth values are identical
    // to re-reading per rule.
    let contents: Vec<String> = source_files(root, Some(CONTENT_SAMPLE_CAP))
        .iter()
        .filter_map(|path| read_file(path))
        .map(|content| content.to_lowercase())
        .collect();

    let mut detected = Vec::new();
    let mut score = 0u32;

    for rule in DESIGN_RULES {
        let found = rule.keywords.iter().any(|keyword| {
            let keyword = keyword.to_lowercase();
            contents.iter().any(|content| content.contains(&keyword))
        });
        if found {
            detected.push(rule.name.to_string());
            score += rule.points;
        }
    }

    AuditFinding::new(
        FindingCategory::DesignPatterns,
        score,
        Vec::new(),
        detected,
    )
}
