//! # Claude Agent Usage
//!
//! Token usage analysis for Claude Code session transcripts, broken down by
//! the main session and each spawned subagent.
//!
//! ## Overview
//!
//! This library scans a session transcript (JSONL) in a single streaming pass,
//! accumulating per-agent token counters, and renders a fixed-width report:
//! - One row for the coordinating session and one row per subagent
//! - A totals block covering all four tracked token kinds
//! - Estimated dollar cost at configurable per-million-token rates
//!
//! Malformed transcript lines are skipped silently; the report is always
//! produced from everything that parsed.

/// Command-line argument parsing and configuration
pub mod cli;

/// Report construction for the usage-breakdown table
pub mod display;

/// Data models for transcript records and usage counters
pub mod models;

/// Cost estimation at per-million-token rates
pub mod pricing;

/// Transcript scanning and per-agent accumulation
pub mod usage;

/// Formatting helpers for tokens, currency, and rates
pub mod utils;
