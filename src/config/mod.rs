//! Project-type profile configuration
//!
//! A profile bundles everything the engine needs to know about one kind of
//! project: how to recognize it, how to weight the four subsystem scores,
//! which architecture patterns it should be using, and which directories its
//! conventions require. The built-in table covers the project types the
//! auditor ships with; a TOML file can replace it.
//!
//! # Profile file format
//!
//! ```toml
//! # archlens-profiles.toml
//!
//! [profiles.web_app]
//! detection = ["app.py", "templates/", "static/", "flask"]
//! recommended_patterns = ["MVC", "Repository"]
//! required_structure = ["templates", "static", "tests"]
//! weights = { structure = 0.3, clean_code = 0.3, architecture = 0.25, design_patterns = 0.15 }
//! ```
//!
//! Indicator strings are parsed with [`Indicator::parse`]: `*` means
//! wildcard, path-looking strings are exact paths, anything else is a
//! content keyword.

use crate::engine::matcher::Indicator;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// Name of the fallback profile used when classification finds nothing.
pub const GENERIC_PROFILE: &str = "generic";

/// Weights applied to the four subsystem scores.
///
/// Values typically sum to 1.0 so the weighted score stays in 0..=100.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScoreWeights {
    #[serde(default = "default_structure_weight")]
    pub structure: f64,
    #[serde(default = "default_clean_code_weight")]
    pub clean_code: f64,
    #[serde(default = "default_architecture_weight")]
    pub architecture: f64,
    #[serde(default = "default_design_patterns_weight")]
    pub design_patterns: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            structure: default_structure_weight(),
            clean_code: default_clean_code_weight(),
            architecture: default_architecture_weight(),
            design_patterns: default_design_patterns_weight(),
        }
    }
}

// Canonical default vector. The legacy tool drifted between several
// variants; this one weights source quality highest.
fn default_structure_weight() -> f64 {
    0.25
}
fn default_clean_code_weight() -> f64 {
    0.35
}
fn default_architecture_weight() -> f64 {
    0.25
}
fn default_design_patterns_weight() -> f64 {
    0.15
}

impl ScoreWeights {
    /// Whether the weights sum to 1.0 (with tolerance).
    pub fn is_normalized(&self) -> bool {
        let sum = self.structure + self.clean_code + self.architecture + self.design_patterns;
        (sum - 1.0).abs() < 0.001
    }
}

/// Per-project-type configuration bundle.
///
/// Created once at startup and never mutated during an audit.
#[derive(Debug, Clone)]
pub struct ProjectTypeProfile {
    pub name: String,
    /// Indicators the classifier scores to recognize this type.
    pub detection: Vec<Indicator>,
    pub weights: ScoreWeights,
    /// Architecture patterns this type of project is expected to use.
    pub recommended_patterns: Vec<String>,
    /// Directories this type's conventions require, checked by the
    /// structure auditor and the recommendation generator.
    pub required_structure: Vec<String>,
}

impl ProjectTypeProfile {
    /// The fallback profile: no detection indicators, default weights.
    pub fn generic() -> Self {
        Self {
            name: GENERIC_PROFILE.to_string(),
            detection: Vec::new(),
            weights: ScoreWeights::default(),
            recommended_patterns: Vec::new(),
            required_structure: Vec::new(),
        }
    }
}

/// Look up a profile by name.
pub fn find_profile<'a>(
    profiles: &'a [ProjectTypeProfile],
    name: &str,
) -> Option<&'a ProjectTypeProfile> {
    profiles.iter().find(|p| p.name == name)
}

/// The built-in profile table.
///
/// Declaration order matters: the classifier breaks ties in favor of the
/// earliest profile, and the generic fallback always comes last.
pub fn builtin_profiles() -> Vec<ProjectTypeProfile> {
    vec![
        ProjectTypeProfile {
            name: "web_app".to_string(),
            detection: vec![
                Indicator::path("app.py"),
                Indicator::path("templates"),
                Indicator::path("static"),
                Indicator::wildcard("*view*"),
                Indicator::keyword("flask"),
                Indicator::keyword("django"),
            ],
            weights: ScoreWeights {
                structure: 0.3,
                clean_code: 0.3,
                architecture: 0.25,
                design_patterns: 0.15,
            },
            recommended_patterns: vec![
                "MVC".to_string(),
                "Repository".to_string(),
                "Service Layer".to_string(),
            ],
            required_structure: vec![
                "templates".to_string(),
                "static".to_string(),
                "tests".to_string(),
                "config".to_string(),
            ],
        },
        ProjectTypeProfile {
            name: "api_rest".to_string(),
            detection: vec![
                Indicator::path("routes"),
                Indicator::path("api"),
                Indicator::wildcard("*endpoint*"),
                Indicator::keyword("fastapi"),
                Indicator::keyword("apirouter"),
            ],
            weights: ScoreWeights {
                structure: 0.25,
                clean_code: 0.35,
                architecture: 0.3,
                design_patterns: 0.1,
            },
            recommended_patterns: vec![
                "Repository".to_string(),
                "Service Layer".to_string(),
                "Dependency Injection".to_string(),
            ],
            required_structure: vec![
                "src".to_string(),
                "tests".to_string(),
                "docs".to_string(),
                "config".to_string(),
            ],
        },
        ProjectTypeProfile {
            name: "microservice".to_string(),
            detection: vec![
                Indicator::path("Dockerfile"),
                Indicator::path("docker-compose.yml"),
                Indicator::path("kubernetes"),
                Indicator::path("helm"),
                Indicator::keyword("grpc"),
            ],
            weights: ScoreWeights {
                structure: 0.2,
                clean_code: 0.3,
                architecture: 0.4,
                design_patterns: 0.1,
            },
            recommended_patterns: vec![
                "Hexagonal".to_string(),
                "Repository".to_string(),
                "Service Layer".to_string(),
            ],
            required_structure: vec![
                "src".to_string(),
                "tests".to_string(),
                "docker".to_string(),
                "k8s".to_string(),
                "docs".to_string(),
            ],
        },
        ProjectTypeProfile {
            name: "data_science".to_string(),
            detection: vec![
                Indicator::path("notebooks"),
                Indicator::path("data"),
                Indicator::path("models"),
                Indicator::wildcard("*.ipynb"),
                Indicator::keyword("pandas"),
            ],
            weights: ScoreWeights {
                structure: 0.2,
                clean_code: 0.4,
                architecture: 0.25,
                design_patterns: 0.15,
            },
            recommended_patterns: vec!["Repository".to_string(), "Strategy".to_string()],
            required_structure: vec![
                "notebooks".to_string(),
                "data".to_string(),
                "src".to_string(),
                "tests".to_string(),
            ],
        },
        ProjectTypeProfile {
            name: "library".to_string(),
            detection: vec![
                Indicator::path("setup.py"),
                Indicator::path("pyproject.toml"),
                Indicator::wildcard("*__init__*"),
                Indicator::path("src"),
            ],
            weights: ScoreWeights {
                structure: 0.25,
                clean_code: 0.35,
                architecture: 0.25,
                design_patterns: 0.15,
            },
            recommended_patterns: vec!["Factory".to_string(), "Adapter".to_string()],
            required_structure: vec![
                "src".to_string(),
                "tests".to_string(),
                "docs".to_string(),
            ],
        },
        ProjectTypeProfile {
            name: "rag_app".to_string(),
            detection: vec![
                Indicator::keyword("langchain"),
                Indicator::keyword("chroma"),
                Indicator::keyword("embedding"),
                Indicator::keyword("vector"),
                Indicator::path("documents"),
            ],
            weights: ScoreWeights {
                structure: 0.2,
                clean_code: 0.4,
                architecture: 0.3,
                design_patterns: 0.1,
            },
            recommended_patterns: vec![
                "Factory".to_string(),
                "Repository".to_string(),
                "Service Layer".to_string(),
            ],
            required_structure: vec![
                "src".to_string(),
                "tests".to_string(),
                "docs".to_string(),
                "config".to_string(),
                "data".to_string(),
            ],
        },
        ProjectTypeProfile::generic(),
    ]
}

/// Raw TOML shape of one profile entry.
#[derive(Debug, Deserialize)]
struct RawProfile {
    #[serde(default)]
    detection: Vec<String>,
    #[serde(default)]
    weights: Option<ScoreWeights>,
    #[serde(default)]
    recommended_patterns: Vec<String>,
    #[serde(default)]
    required_structure: Vec<String>,
}

/// Load the profile table, falling back to the built-ins.
///
/// A missing or unreadable file is not an error: the audit proceeds with the
/// built-in table (ConfigurationMissing policy). Individual malformed
/// profile entries are skipped so one bad table does not discard the rest
/// (MalformedProfile policy).
pub fn load_profiles(path: Option<&Path>) -> Vec<ProjectTypeProfile> {
    let Some(path) = path else {
        return builtin_profiles();
    };

    let Ok(raw) = std::fs::read_to_string(path) else {
        warn!(
            "profile file {} not readable, using built-in profiles",
            path.display()
        );
        return builtin_profiles();
    };

    match parse_profiles(&raw) {
        Ok(profiles) if !profiles.is_empty() => {
            debug!(
                "loaded {} profiles from {}",
                profiles.len(),
                path.display()
            );
            profiles
        }
        Ok(_) => {
            warn!(
                "profile file {} defines no usable profiles, using built-ins",
                path.display()
            );
            builtin_profiles()
        }
        Err(err) => {
            warn!(
                "profile file {} is not valid TOML ({}), using built-ins",
                path.display(),
                err
            );
            builtin_profiles()
        }
    }
}

/// Parse a profile table from TOML text.
///
/// Declaration order of `[profiles.*]` tables is preserved; a `generic`
/// fallback is appended if the file does not define one.
pub fn parse_profiles(raw: &str) -> Result<Vec<ProjectTypeProfile>, toml::de::Error> {
    let value: toml::Value = raw.parse()?;
    let mut profiles = Vec::new();

    if let Some(toml::Value::Table(table)) = value.get("profiles") {
        for (name, entry) in table {
            match entry.clone().try_into::<RawProfile>() {
                Ok(raw_profile) => profiles.push(ProjectTypeProfile {
                    name: name.clone(),
                    detection: raw_profile
                        .detection
                        .iter()
                        .map(|s| Indicator::parse(s))
                        .collect(),
                    weights: raw_profile.weights.unwrap_or_default(),
                    recommended_patterns: raw_profile.recommended_patterns,
                    required_structure: raw_profile
                        .required_structure
                        .iter()
                        .map(|s| s.trim_end_matches('/').to_string())
                        .collect(),
                }),
                Err(err) => {
                    warn!("skipping malformed profile '{}': {}", name, err);
                }
            }
        }
    }

    if !profiles.is_empty() && find_profile(&profiles, GENERIC_PROFILE).is_none() {
        profiles.push(ProjectTypeProfile::generic());
    }

    Ok(profiles)
}
