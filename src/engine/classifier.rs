//! Project type classification
//!
//! Scores every profile's detection indicators against the project tree and
//! picks the best match. This is a greedy single-pass heuristic with no
//! backtracking and no statistical guarantees; a known limitation, kept
//! deliberately simple.

use crate::config::{ProjectTypeProfile, GENERIC_PROFILE};
use crate::engine::matcher::{self, Indicator};
use std::path::Path;
use tracing::debug;

// Indicator weights reflect matcher confidence: an exact path is a stronger
// signal than a loose filename match, which beats a keyword buried in
// content.
const EXACT_PATH_POINTS: f64 = 2.0;
const WILDCARD_POINTS: f64 = 1.0;
const CONTENT_KEYWORD_POINTS: f64 = 0.5;

/// Pick the profile whose detection indicators best match the tree.
///
/// Ties break in declaration order (first wins) to keep the result
/// deterministic. Returns [`GENERIC_PROFILE`] when no profile scores above
/// zero or the table is empty.
pub fn classify<'a>(root: &Path, profiles: &'a [ProjectTypeProfile]) -> &'a str {
    let mut best: Option<(&str, f64)> = None;

    for profile in profiles {
        let score: f64 = profile
            .detection
            .iter()
            .filter(|indicator| matcher::matches(root, indicator))
            .map(indicator_points)
            .sum();

        debug!("profile '{}' scored {:.1}", profile.name, score);

        // Strictly greater: the earliest profile wins ties.
        if score > best.map_or(0.0, |(_, s)| s) {
            best = Some((&profile.name, score));
        }
    }

    match best {
        Some((name, score)) if score > 0.0 => name,
        _ => GENERIC_PROFILE,
    }
}

fn indicator_points(indicator: &Indicator) -> f64 {
    match indicator {
        Indicator::ExactPath(_) => EXACT_PATH_POINTS,
        Indicator::WildcardPattern(_) => WILDCARD_POINTS,
        Indicator::ContentKeyword(_) => CONTENT_KEYWORD_POINTS,
    }
}
