//! Archlens - Heuristic architecture and code-quality auditor
//!
//! Classifies a project against a configurable profile table, then scores it
//! on four axes (structure, clean code, architecture patterns, design
//! patterns) and derives prioritized recommendations. The [`engine::run_audit`]
//! entry point returns an [`models::AuditResult`] that serializes to the
//! stable JSON report contract.

pub mod cli;
pub mod config;
pub mod engine;
pub mod models;
pub mod reporters;
