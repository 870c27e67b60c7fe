//! Text (terminal) reporter with colors and formatting

use crate::models::{AuditResult, Priority};
use anyhow::Result;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Priority colors
fn priority_color(priority: &Priority) -> &'static str {
    match priority {
        Priority::Critical => "\x1b[31m", // Red
        Priority::High => "\x1b[91m",     // Light red
        Priority::Medium => "\x1b[33m",   // Yellow
        Priority::Low => "\x1b[34m",      // Blue
    }
}

/// Priority tag
fn priority_tag(priority: &Priority) -> &'static str {
    match priority {
        Priority::Critical => "[C]",
        Priority::High => "[H]",
        Priority::Medium => "[M]",
        Priority::Low => "[L]",
    }
}

fn format_score(score: f64) -> String {
    let color = if score >= 80.0 {
        "\x1b[32m"
    } else if score >= 60.0 {
        "\x1b[33m"
    } else {
        "\x1b[31m"
    };
    format!("{color}{:.0}{RESET}", score)
}

/// Render result as formatted terminal output
pub fn render(result: &AuditResult) -> Result<String> {
    let mut out = String::new();

    // Header
    out.push_str(&format!("\n{BOLD}Archlens Audit{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Project: {BOLD}{}{RESET}  Type: {}  Score: {BOLD}{:.1}/100{RESET}\n\n",
        result.project, result.project_type, result.weighted_score
    ));

    // Category scores (compact)
    out.push_str(&format!("{BOLD}SCORES{RESET}\n"));
    out.push_str(&format!(
        "  Structure: {}  Clean code: {}  Architecture: {}  Design patterns: {}\n",
        format_score(result.structure.score as f64),
        format_score(result.clean_code.score as f64),
        format_score(result.architecture_patterns.score as f64),
        format_score(result.design_patterns.score as f64),
    ));
    out.push_str(&format!(
        "  {DIM}{} source files analyzed{RESET}\n\n",
        result.clean_code.files_analyzed
    ));

    // Detected patterns
    if !result.architecture_patterns.patterns_detected.is_empty()
        || !result.design_patterns.patterns_found.is_empty()
    {
        out.push_str(&format!("{BOLD}PATTERNS{RESET}\n"));
        if !result.architecture_patterns.patterns_detected.is_empty() {
            out.push_str(&format!(
                "  Architecture: {}\n",
                result.architecture_patterns.patterns_detected.join(", ")
            ));
        }
        if !result.design_patterns.patterns_found.is_empty() {
            out.push_str(&format!(
                "  Design: {}\n",
                result.design_patterns.patterns_found.join(", ")
            ));
        }
        out.push('\n');
    }

    // Issues from the structure and clean-code passes
    let issue_count = result.structure.issues.len() + result.clean_code.issues.len();
    if issue_count > 0 {
        out.push_str(&format!("{BOLD}ISSUES{RESET} ({issue_count} total)\n"));
        for issue in &result.structure.issues {
            out.push_str(&format!("  {DIM}structure{RESET}   {issue}\n"));
        }
        for issue in &result.clean_code.issues {
            out.push_str(&format!("  {DIM}clean code{RESET}  {issue}\n"));
        }
        out.push('\n');
    }

    // Recommendations
    if !result.recommendations.is_empty() {
        out.push_str(&format!(
            "{BOLD}RECOMMENDATIONS{RESET} ({} total)\n",
            result.recommendations.len()
        ));
        for rec in &result.recommendations {
            let color = priority_color(&rec.priority);
            out.push_str(&format!(
                "  {color}{}{RESET}  {:<24}  {}\n",
                priority_tag(&rec.priority),
                rec.category,
                rec.description
            ));
        }
        out.push('\n');
    } else {
        out.push_str(&format!("{DIM}No recommendations. Nice.{RESET}\n"));
    }

    Ok(out)
}
