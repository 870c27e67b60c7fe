//! Core data models for archlens
//!
//! These models are used throughout the codebase for representing
//! findings, recommendations, and the final audit result.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an audit outright.
///
/// Almost everything in the engine degrades gracefully (unreadable files are
/// skipped, malformed profiles are dropped); the one hard failure is an
/// invalid project root, which is checked before any subsystem runs.
#[derive(Debug, Error)]
pub enum AuditError {
    #[error("project path does not exist or is not a directory: {0}")]
    InvalidProjectPath(PathBuf),
}

/// Priority levels for recommendations
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
            Priority::Critical => write!(f, "critical"),
        }
    }
}

/// The four auditing subsystems, used to tag findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    Structure,
    CleanCode,
    Architecture,
    DesignPatterns,
}

impl std::fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FindingCategory::Structure => write!(f, "structure"),
            FindingCategory::CleanCode => write!(f, "clean_code"),
            FindingCategory::Architecture => write!(f, "architecture"),
            FindingCategory::DesignPatterns => write!(f, "design_patterns"),
        }
    }
}

/// The scored, explainable output of one auditing subsystem.
///
/// Findings are value objects: each auditor builds one and returns it; the
/// aggregator and recommendation generator only read them. Rebuild, don't
/// patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditFinding {
    pub category: FindingCategory,
    /// Always in 0..=100; the constructor caps it.
    pub score: u32,
    /// Human-readable issue strings in a fixed, deterministic order.
    pub issues: Vec<String>,
    /// Names of detected items (patterns), verbatim, in check order.
    pub detected: Vec<String>,
}

impl AuditFinding {
    pub fn new(
        category: FindingCategory,
        score: u32,
        issues: Vec<String>,
        detected: Vec<String>,
    ) -> Self {
        Self {
            category,
            score: score.min(100),
            issues,
            detected,
        }
    }
}

/// A single piece of advice derived from the audit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    pub category: String,
    pub priority: Priority,
    pub description: String,
}

/// `structure` section of the JSON report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureSection {
    pub score: u32,
    pub issues: Vec<String>,
}

/// `clean_code` section of the JSON report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanCodeSection {
    pub score: u32,
    pub issues: Vec<String>,
    pub files_analyzed: usize,
}

/// `architecture_patterns` section of the JSON report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchitectureSection {
    pub score: u32,
    pub patterns_detected: Vec<String>,
}

/// `design_patterns` section of the JSON report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignPatternsSection {
    pub score: u32,
    pub patterns_found: Vec<String>,
}

/// Aggregate result of one audit run.
///
/// Owned exclusively by that run; serialized wholesale to the reporting
/// boundary. The field names below are the JSON contract consumed by
/// external report renderers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditResult {
    pub project: String,
    /// ISO-8601 (RFC 3339) timestamp of the run.
    pub timestamp: String,
    pub project_type: String,
    pub structure: StructureSection,
    pub clean_code: CleanCodeSection,
    pub architecture_patterns: ArchitectureSection,
    pub design_patterns: DesignPatternsSection,
    pub recommendations: Vec<Recommendation>,
    pub weighted_score: f64,
}
