//! Weighted score aggregation
//!
//! Combines the four subsystem scores through the profile's weight vector.
//! With weights summing to 1.0 and inputs capped at 100 the result stays in
//! 0..=100 by construction; tests assert that invariant rather than the
//! code re-capping it.

use crate::config::ScoreWeights;
use crate::models::AuditFinding;

/// Weighted sum of the four findings, rounded to one decimal.
pub fn aggregate(
    structure: &AuditFinding,
    clean_code: &AuditFinding,
    architecture: &AuditFinding,
    design_patterns: &AuditFinding,
    weights: &ScoreWeights,
) -> f64 {
    let weighted = structure.score as f64 * weights.structure
        + clean_code.score as f64 * weights.clean_code
        + architecture.score as f64 * weights.architecture
        + design_patterns.score as f64 * weights.design_patterns;
    (weighted * 10.0).round() / 10.0
}
