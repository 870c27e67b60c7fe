//! Source quality auditor
//!
//! Samples a bounded set of source files and runs the clean-code check
//! battery over each one. Per-file points are summed and normalized by how
//! many files were actually read, so an unreadable file never drags the
//! score down.

use crate::engine::checks::{default_checks, max_points_per_file};
use crate::engine::matcher::{read_file, source_files};
use crate::models::{AuditFinding, FindingCategory};
use std::path::Path;
use tracing::{debug, info};

/// Maximum source files sampled per audit. Bounds runtime on huge trees.
pub const SOURCE_SAMPLE_CAP: usize = 15;

/// Issues reported at most, keeping the report focused on the worst cases.
const MAX_REPORTED_ISSUES: usize = 10;

/// Clean-code finding plus how many files actually went into it.
#[derive(Debug, Clone)]
pub struct QualityAudit {
    pub finding: AuditFinding,
    pub files_analyzed: usize,
}

/// Audit source quality over a deterministic sample of files.
///
/// Files are taken in lexicographic path order up to [`SOURCE_SAMPLE_CAP`].
/// Fails soft: no source files (or none readable) yields score 0 with a
/// single issue rather than an error.
pub fn audit_source_quality(root: &Path) -> QualityAudit {
    let sample = source_files(root, Some(SOURCE_SAMPLE_CAP));
    if sample.is_empty() {
        return QualityAudit {
            finding: AuditFinding::new(
                FindingCategory::CleanCode,
                0,
                vec!["No Python source files found".to_string()],
                Vec::new(),
            ),
            files_analyzed: 0,
        };
    }

    let mut total_points = 0u32;
    let mut files_analyzed = 0usize;
    let mut issues = Vec::new();

    for path in &sample {
        // Unreadable files are skipped and excluded from the denominator.
        let Some(content) = read_file(path) else {
            continue;
        };
        files_analyzed += 1;

        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<unnamed>");

        for check in default_checks() {
            if (check.run)(&content) {
                total_points += check.weight;
            } else {
                debug!("{} failed {} check", file_name, check.name);
                issues.push(format!("{} in {}", check.issue, file_name));
            }
        }
    }

    if files_analyzed == 0 {
        return QualityAudit {
            finding: AuditFinding::new(
                FindingCategory::CleanCode,
                0,
                vec!["No readable Python source files found".to_string()],
                Vec::new(),
            ),
            files_analyzed: 0,
        };
    }

    let max_possible = files_analyzed as u32 * max_points_per_file();
    let score = (total_points * 100) / max_possible;
    issues.truncate(MAX_REPORTED_ISSUES);

    info!(
        "clean code: {}/100 across {} files ({} issues)",
        score,
        files_analyzed,
        issues.len()
    );

    QualityAudit {
        finding: AuditFinding::new(FindingCategory::CleanCode, score, issues, Vec::new()),
        files_analyzed,
    }
}
