//! Recommendation generator
//!
//! Compares the findings against configured thresholds and the profile's
//! expectations and emits prioritized advice. The output list is purely
//! additive and ordered by rule (structure, clean code, missing patterns,
//! pattern adoption, type-specific), not by severity; consumers rely on
//! that ordering.

use crate::config::ProjectTypeProfile;
use crate::engine::matcher::{self, Indicator};
use crate::models::{AuditFinding, Priority, Recommendation};
use std::path::Path;

const STRUCTURE_THRESHOLD: u32 = 70;
const CLEAN_CODE_THRESHOLD: u32 = 60;
const DESIGN_PATTERNS_THRESHOLD: u32 = 30;

/// Pattern-specific advice for rule 3; unknown patterns get a generic line.
fn pattern_advice(pattern: &str) -> String {
    match pattern.to_lowercase().as_str() {
        "mvc" => "Implement MVC to separate model, view, and controller responsibilities"
            .to_string(),
        "hexagonal" => {
            "Consider Hexagonal architecture to isolate business logic behind ports and adapters"
                .to_string()
        }
        "clean architecture" => {
            "Apply Clean Architecture layering with dependencies pointing inward".to_string()
        }
        "repository" => {
            "Implement the Repository pattern to abstract data access behind a uniform interface"
                .to_string()
        }
        "service layer" => {
            "Add a Service Layer to encapsulate business logic in dedicated services".to_string()
        }
        "dependency injection" => {
            "Introduce Dependency Injection to invert control over collaborators".to_string()
        }
        other => format!("Implement the {other} pattern"),
    }
}

/// Derive the advice list from the findings, the profile, and the tree.
pub fn generate_recommendations(
    root: &Path,
    structure: &AuditFinding,
    clean_code: &AuditFinding,
    architecture: &AuditFinding,
    design_patterns: &AuditFinding,
    profile: &ProjectTypeProfile,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    // 1. Structural shortfall.
    if structure.score < STRUCTURE_THRESHOLD {
        recommendations.push(Recommendation {
            category: "Structure".to_string(),
            priority: Priority::High,
            description: "Improve project organization following conventional layout (src, tests, docs)".to_string(),
        });
    }

    // 2. Clean-code shortfall.
    if clean_code.score < CLEAN_CODE_THRESHOLD {
        recommendations.push(Recommendation {
            category: "Clean Code".to_string(),
            priority: Priority::Critical,
            description: "Apply clean code fundamentals: small functions, meaningful names, consistent formatting".to_string(),
        });
    }

    // 3. Recommended architecture patterns not detected, in profile order.
    let detected: Vec<String> = architecture
        .detected
        .iter()
        .map(|p| p.to_lowercase())
        .collect();
    for pattern in &profile.recommended_patterns {
        if !detected.contains(&pattern.to_lowercase()) {
            recommendations.push(Recommendation {
                category: "Architecture Pattern".to_string(),
                priority: Priority::Medium,
                description: pattern_advice(pattern),
            });
        }
    }

    // 4. Little design-pattern adoption overall.
    if design_patterns.score < DESIGN_PATTERNS_THRESHOLD {
        recommendations.push(Recommendation {
            category: "Design Patterns".to_string(),
            priority: Priority::Medium,
            description: "Adopt design patterns to improve maintainability; Factory or Repository are good starting points".to_string(),
        });
    }

    // 5. Type-specific expectations.
    type_specific(root, profile, &mut recommendations);

    recommendations
}

/// Extra checks keyed on the project type's conventions.
fn type_specific(
    root: &Path,
    profile: &ProjectTypeProfile,
    recommendations: &mut Vec<Recommendation>,
) {
    for dir in &profile.required_structure {
        if !root.join(dir).exists() {
            recommendations.push(Recommendation {
                category: format!("Structure ({})", profile.name),
                priority: Priority::High,
                description: format!(
                    "Create {}/ directory according to {} conventions",
                    dir, profile.name
                ),
            });
        }
    }

    match profile.name.as_str() {
        "web_app" => {
            if !root.join("static").exists() {
                recommendations.push(Recommendation {
                    category: "Web Structure".to_string(),
                    priority: Priority::Low,
                    description: "Organize CSS/JS assets in a static/ directory".to_string(),
                });
            }
            if !root.join("templates").exists() {
                recommendations.push(Recommendation {
                    category: "Web Structure".to_string(),
                    priority: Priority::Low,
                    description: "Organize HTML templates in a templates/ directory".to_string(),
                });
            }
        }
        "api_rest" => {
            if !matcher::matches(root, &Indicator::wildcard("*route*"))
                && !matcher::matches(root, &Indicator::wildcard("*endpoint*"))
            {
                recommendations.push(Recommendation {
                    category: "API Structure".to_string(),
                    priority: Priority::Medium,
                    description: "Separate endpoints into dedicated route modules".to_string(),
                });
            }
            if !matcher::matches(root, &Indicator::wildcard("*model*"))
                && !matcher::matches(root, &Indicator::wildcard("*schema*"))
            {
                recommendations.push(Recommendation {
                    category: "API Structure".to_string(),
                    priority: Priority::Medium,
                    description: "Create model/schema modules for request and response validation".to_string(),
                });
            }
        }
        "rag_app" => {
            if !root.join("requirements.txt").exists() && !root.join("pyproject.toml").exists() {
                recommendations.push(Recommendation {
                    category: "RAG Dependencies".to_string(),
                    priority: Priority::High,
                    description: "Declare retrieval dependencies in a requirements manifest".to_string(),
                });
            }
            if !matcher::matches(root, &Indicator::wildcard("*embedding*")) {
                recommendations.push(Recommendation {
                    category: "RAG Architecture".to_string(),
                    priority: Priority::Medium,
                    description: "Separate embedding logic into a dedicated module".to_string(),
                });
            }
            if !matcher::matches(root, &Indicator::wildcard("*vector*"))
                && !matcher::matches(root, &Indicator::wildcard("*chroma*"))
            {
                recommendations.push(Recommendation {
                    category: "RAG Architecture".to_string(),
                    priority: Priority::Medium,
                    description: "Create an abstraction over the vector store".to_string(),
                });
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{builtin_profiles, find_profile, ScoreWeights, GENERIC_PROFILE};
    use crate::models::FindingCategory;

    fn finding(category: FindingCategory, score: u32, detected: Vec<&str>) -> AuditFinding {
        AuditFinding::new(
            category,
            score,
            vec![],
            detected.into_iter().map(String::from).collect(),
        )
    }

    fn generic() -> ProjectTypeProfile {
        find_profile(&builtin_profiles(), GENERIC_PROFILE)
            .unwrap()
            .clone()
    }

    #[test]
    fn test_healthy_project_gets_no_recommendations() {
        let dir = tempfile::tempdir().unwrap();
        let recs = generate_recommendations(
            dir.path(),
            &finding(FindingCategory::Structure, 90, vec![]),
            &finding(FindingCategory::CleanCode, 85, vec![]),
            &finding(FindingCategory::Architecture, 50, vec![]),
            &finding(FindingCategory::DesignPatterns, 40, vec![]),
            &generic(),
        );
        assert!(recs.is_empty());
    }

    #[test]
    fn test_low_scores_trigger_threshold_rules_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let recs = generate_recommendations(
            dir.path(),
            &finding(FindingCategory::Structure, 40, vec![]),
            &finding(FindingCategory::CleanCode, 30, vec![]),
            &finding(FindingCategory::Architecture, 0, vec![]),
            &finding(FindingCategory::DesignPatterns, 10, vec![]),
            &generic(),
        );
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].category, "Structure");
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[1].category, "Clean Code");
        assert_eq!(recs[1].priority, Priority::Critical);
        assert_eq!(recs[2].category, "Design Patterns");
        assert_eq!(recs[2].priority, Priority::Medium);
    }

    #[test]
    fn test_missing_recommended_patterns_one_each_in_profile_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut profile = generic();
        profile.name = "web_app".to_string();
        profile.recommended_patterns = vec!["MVC".to_string(), "Repository".to_string()];

        let recs = generate_recommendations(
            dir.path(),
            &finding(FindingCategory::Structure, 90, vec![]),
            &finding(FindingCategory::CleanCode, 90, vec![]),
            &finding(FindingCategory::Architecture, 50, vec!["Service Layer"]),
            &finding(FindingCategory::DesignPatterns, 50, vec![]),
            &profile,
        );

        let pattern_recs: Vec<_> = recs
            .iter()
            .filter(|r| r.category == "Architecture Pattern")
            .collect();
        assert_eq!(pattern_recs.len(), 2);
        assert!(pattern_recs.iter().all(|r| r.priority == Priority::Medium));
        assert!(pattern_recs[0].description.contains("MVC"));
        assert!(pattern_recs[1].description.contains("Repository"));
    }

    #[test]
    fn test_detected_pattern_matching_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let mut profile = generic();
        profile.recommended_patterns = vec!["repository".to_string()];

        let recs = generate_recommendations(
            dir.path(),
            &finding(FindingCategory::Structure, 90, vec![]),
            &finding(FindingCategory::CleanCode, 90, vec![]),
            &finding(FindingCategory::Architecture, 50, vec!["Repository"]),
            &finding(FindingCategory::DesignPatterns, 50, vec![]),
            &profile,
        );
        assert!(recs.iter().all(|r| r.category != "Architecture Pattern"));
    }

    #[test]
    fn test_missing_required_structure_yields_type_specific_advice() {
        let dir = tempfile::tempdir().unwrap();
        let profiles = builtin_profiles();
        let api = find_profile(&profiles, "api_rest").unwrap();

        let recs = generate_recommendations(
            dir.path(),
            &finding(FindingCategory::Structure, 90, vec![]),
            &finding(FindingCategory::CleanCode, 90, vec![]),
            &finding(
                FindingCategory::Architecture,
                100,
                vec!["Repository", "Service Layer", "Dependency Injection"],
            ),
            &finding(FindingCategory::DesignPatterns, 50, vec![]),
            api,
        );

        // Four missing required dirs, then the two api_rest module checks.
        let structure_recs: Vec<_> = recs
            .iter()
            .filter(|r| r.category == "Structure (api_rest)")
            .collect();
        assert_eq!(structure_recs.len(), 4);
        assert_eq!(structure_recs[0].description, "Create src/ directory according to api_rest conventions");
        assert_eq!(
            recs.iter().filter(|r| r.category == "API Structure").count(),
            2
        );
    }

    #[test]
    fn test_recommendations_never_retracted() {
        // Additive by construction: generating twice yields the same list.
        let dir = tempfile::tempdir().unwrap();
        let profile = generic();
        let args = (
            finding(FindingCategory::Structure, 40, vec![]),
            finding(FindingCategory::CleanCode, 30, vec![]),
            finding(FindingCategory::Architecture, 0, vec![]),
            finding(FindingCategory::DesignPatterns, 0, vec![]),
        );
        let first =
            generate_recommendations(dir.path(), &args.0, &args.1, &args.2, &args.3, &profile);
        let second =
            generate_recommendations(dir.path(), &args.0, &args.1, &args.2, &args.3, &profile);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unused_weights_field_is_irrelevant_here() {
        // Recommendations depend on scores and profile expectations only.
        let mut profile = generic();
        profile.weights = ScoreWeights {
            structure: 1.0,
            clean_code: 0.0,
            architecture: 0.0,
            design_patterns: 0.0,
        };
        let dir = tempfile::tempdir().unwrap();
        let recs = generate_recommendations(
            dir.path(),
            &finding(FindingCategory::Structure, 90, vec![]),
            &finding(FindingCategory::CleanCode, 90, vec![]),
            &finding(FindingCategory::Architecture, 50, vec![]),
            &finding(FindingCategory::DesignPatterns, 50, vec![]),
            &profile,
        );
        assert!(recs.is_empty());
    }
}
