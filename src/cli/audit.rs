//! `audit` command handler

use crate::config::load_profiles;
use crate::engine::run_audit;
use crate::reporters;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

#[allow(clippy::too_many_arguments)]
pub fn run(
    path: &Path,
    project_type: Option<&str>,
    format: &str,
    output: Option<&Path>,
    profiles_path: Option<&Path>,
    min_score: f64,
) -> Result<()> {
    let profiles = load_profiles(profiles_path);
    let result = run_audit(path, &profiles, project_type)?;

    let rendered = reporters::report(&result, format)?;
    println!("{}", rendered);

    // --output always gets the JSON contract, whatever the terminal format.
    if let Some(output) = output {
        let json = reporters::report(&result, "json")?;
        std::fs::write(output, json)
            .with_context(|| format!("failed to write report to {}", output.display()))?;
        info!("report written to {}", output.display());
    }

    if result.weighted_score < min_score {
        eprintln!(
            "Failing: weighted score {:.1} is below --min-score={}",
            result.weighted_score, min_score
        );
        std::process::exit(1);
    }
    Ok(())
}
