//! JSON reporter
//!
//! Outputs the full AuditResult as pretty-printed JSON. The field layout is
//! the stable contract consumed by CI pipelines and external renderers.

use crate::models::AuditResult;
use anyhow::Result;

/// Render result as JSON
pub fn render(result: &AuditResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render result as compact JSON (single line)
#[allow(dead_code)] // Public API helper
pub fn render_compact(result: &AuditResult) -> Result<String> {
    Ok(serde_json::to_string(result)?)
}
