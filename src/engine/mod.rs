//! Audit engine
//!
//! Orchestrates the subsystems over a project root: classify the project,
//! audit structure and source quality, detect patterns, aggregate the
//! weighted score, and derive recommendations. Everything downstream of the
//! root-path check degrades gracefully instead of erroring.

pub mod checks;
pub mod classifier;
pub mod matcher;
pub mod patterns;
pub mod quality;
pub mod recommend;
pub mod scoring;
pub mod structure;

use crate::config::{find_profile, ProjectTypeProfile, GENERIC_PROFILE};
use crate::models::{
    ArchitectureSection, AuditError, AuditResult, CleanCodeSection, DesignPatternsSection,
    StructureSection,
};
use std::path::Path;
use tracing::{info, warn};

/// Run a full audit of the project at `root`.
///
/// `type_override` skips classification when the caller already knows the
/// project type; an unknown name falls back to the generic profile with a
/// warning rather than failing the run.
pub fn run_audit(
    root: &Path,
    profiles: &[ProjectTypeProfile],
    type_override: Option<&str>,
) -> Result<AuditResult, AuditError> {
    if !root.is_dir() {
        return Err(AuditError::InvalidProjectPath(root.to_path_buf()));
    }

    let type_name = match type_override {
        Some(name) if find_profile(profiles, name).is_some() => name,
        Some(name) => {
            warn!("unknown project type '{}', treating as generic", name);
            GENERIC_PROFILE
        }
        None => classifier::classify(root, profiles),
    };
    let generic = ProjectTypeProfile::generic();
    let profile = find_profile(profiles, type_name).unwrap_or(&generic);
    info!("auditing {} as {}", root.display(), profile.name);

    let structure = structure::audit_structure(root, profile);
    let quality = quality::audit_source_quality(root);
    let (architecture, design) = patterns::detect_patterns(root);

    let weighted_score = scoring::aggregate(
        &structure,
        &quality.finding,
        &architecture,
        &design,
        &profile.weights,
    );

    let recommendations = recommend::generate_recommendations(
        root,
        &structure,
        &quality.finding,
        &architecture,
        &design,
        profile,
    );

    let project = root
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(".")
        .to_string();

    Ok(AuditResult {
        project,
        timestamp: chrono::Utc::now().to_rfc3339(),
        project_type: profile.name.clone(),
        structure: StructureSection {
            score: structure.score,
            issues: structure.issues,
        },
        clean_code: CleanCodeSection {
            score: quality.finding.score,
            issues: quality.finding.issues,
            files_analyzed: quality.files_analyzed,
        },
        architecture_patterns: ArchitectureSection {
            score: architecture.score,
            patterns_detected: architecture.detected,
        },
        design_patterns: DesignPatternsSection {
            score: design.score,
            patterns_found: design.detected,
        },
        recommendations,
        weighted_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::builtin_profiles;
    use std::fs;

    #[test]
    fn test_invalid_root_is_an_error() {
        let profiles = builtin_profiles();
        let err = run_audit(Path::new("/nonexistent/project"), &profiles, None);
        assert!(matches!(err, Err(AuditError::InvalidProjectPath(_))));
    }

    #[test]
    fn test_file_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("main.py");
        fs::write(&file, "x = 1\n").unwrap();
        let profiles = builtin_profiles();
        assert!(matches!(
            run_audit(&file, &profiles, None),
            Err(AuditError::InvalidProjectPath(_))
        ));
    }

    #[test]
    fn test_empty_dir_audits_as_generic() {
        let dir = tempfile::tempdir().unwrap();
        let profiles = builtin_profiles();
        let result = run_audit(dir.path(), &profiles, None).unwrap();
        assert_eq!(result.project_type, GENERIC_PROFILE);
        assert_eq!(result.structure.score, 0);
        assert_eq!(result.clean_code.score, 0);
        assert_eq!(result.clean_code.files_analyzed, 0);
    }

    #[test]
    fn test_unknown_override_falls_back_to_generic() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.py"), "import flask\n").unwrap();
        let profiles = builtin_profiles();
        let result = run_audit(dir.path(), &profiles, Some("kernel_module")).unwrap();
        assert_eq!(result.project_type, GENERIC_PROFILE);
    }

    #[test]
    fn test_known_override_skips_classification() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.py"), "import flask\n").unwrap();
        let profiles = builtin_profiles();
        let result = run_audit(dir.path(), &profiles, Some("library")).unwrap();
        assert_eq!(result.project_type, "library");
    }

    #[test]
    fn test_weighted_score_in_bounds() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::create_dir_all(dir.path().join("tests")).unwrap();
        fs::write(dir.path().join("README.md"), "# demo\n").unwrap();
        fs::write(dir.path().join("src/main.py"), "def run():\n    return 0\n").unwrap();
        let profiles = builtin_profiles();
        let result = run_audit(dir.path(), &profiles, None).unwrap();
        assert!((0.0..=100.0).contains(&result.weighted_score));
    }
}
