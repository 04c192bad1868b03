//! # Usage Module
//!
//! Single-pass scanner over Claude Code session transcripts, accumulating
//! token usage for the main session and every spawned subagent.
//!
//! ## Key Functions
//!
//! - `scan_file`: Opens a transcript and streams it through the scanner
//! - `scan_transcript`: Accumulates usage from any line-oriented reader
//! - `derive_description`: Builds a subagent's display label from its prompt

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::models::record::{Record, parse_record};
use crate::models::{SubagentUsage, UsageCounters};

/// Longest description kept for a subagent row.
pub const DESCRIPTION_MAX_CHARS: usize = 60;

/// Everything one scan produces: the coordinator's counters, the per-subagent
/// table keyed by agent id, and line statistics for debug output.
#[derive(Debug, Default)]
pub struct SessionBreakdown {
    pub main: UsageCounters,
    pub subagents: BTreeMap<String, SubagentUsage>,
    pub lines_read: u64,
    pub lines_skipped: u64,
}

/// Open `path` and scan it. Failing to open the transcript is fatal; failures
/// on individual lines are not.
pub fn scan_file(path: &Path) -> Result<SessionBreakdown> {
    let file =
        File::open(path).with_context(|| format!("open transcript {}", path.display()))?;
    Ok(scan_transcript(BufReader::new(file)))
}

/// Scan a transcript line by line. Lines that fail to read or parse are
/// skipped and counted; the scan itself never aborts.
pub fn scan_transcript<R: BufRead>(reader: R) -> SessionBreakdown {
    let mut breakdown = SessionBreakdown::default();

    for line in reader.lines() {
        breakdown.lines_read += 1;
        let line = match line {
            Ok(l) => l,
            Err(_) => {
                breakdown.lines_skipped += 1;
                continue;
            }
        };
        let t = line.trim();
        if t.is_empty() {
            continue;
        }

        let record = match parse_record(t) {
            Some(r) => r,
            None => {
                breakdown.lines_skipped += 1;
                continue;
            }
        };

        match record {
            Record::Assistant { usage } => breakdown.main.add_usage(&usage),
            Record::SubagentResult {
                agent_id,
                usage,
                prompt,
            } => {
                let entry = breakdown.subagents.entry(agent_id.clone()).or_default();
                if entry.description.is_none() {
                    entry.description = Some(derive_description(prompt.as_deref(), &agent_id));
                }
                entry.tokens.add_usage(&usage);
            }
            Record::Other => {}
        }
    }

    breakdown
}

/// First line of the spawn prompt, without the "You are " lead-in, capped at
/// [`DESCRIPTION_MAX_CHARS`]. Falls back to `agent-<id>` when no prompt was
/// recorded.
pub fn derive_description(prompt: Option<&str>, agent_id: &str) -> String {
    let fallback;
    let first_line = match prompt {
        Some(p) if !p.is_empty() => p.split('\n').next().unwrap_or(p),
        _ => {
            fallback = format!("agent-{agent_id}");
            fallback.as_str()
        }
    };
    let first_line = first_line.strip_prefix("You are ").unwrap_or(first_line);
    first_line.chars().take(DESCRIPTION_MAX_CHARS).collect()
}
