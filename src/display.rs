//! # Display Module
//!
//! Builds the usage-breakdown report: a fixed-width table of per-agent rows
//! plus a totals block. Construction is pure; the binary performs the single
//! stdout write.

use crate::models::UsageCounters;
use crate::pricing::{Rates, estimate_cost};
use crate::usage::SessionBreakdown;
use crate::utils::{format_currency, format_rate, format_tokens};

const RULE_WIDTH: usize = 100;

pub const MAIN_AGENT_ID: &str = "main";
pub const MAIN_AGENT_DESCRIPTION: &str = "Main session (coordinator)";

/// One table row, main session or subagent.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub agent: String,
    pub description: String,
    pub messages: u64,
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cache_read_tokens: u64,
    pub cost: f64,
}

/// Main session first, then subagents in ascending agent-id order.
pub fn report_rows(breakdown: &SessionBreakdown, rates: &Rates) -> Vec<ReportRow> {
    let mut rows = Vec::with_capacity(1 + breakdown.subagents.len());
    rows.push(ReportRow {
        agent: MAIN_AGENT_ID.to_string(),
        description: MAIN_AGENT_DESCRIPTION.to_string(),
        messages: breakdown.main.message_count,
        input_tokens: breakdown.main.input_tokens,
        output_tokens: breakdown.main.output_tokens,
        cache_read_tokens: breakdown.main.cache_read_tokens,
        cost: estimate_cost(&breakdown.main, rates),
    });
    // BTreeMap iteration already yields agent ids in ascending order
    for (agent_id, usage) in &breakdown.subagents {
        rows.push(ReportRow {
            agent: agent_id.clone(),
            description: usage
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| format!("agent-{agent_id}")),
            messages: usage.tokens.message_count,
            input_tokens: usage.tokens.input_tokens,
            output_tokens: usage.tokens.output_tokens,
            cache_read_tokens: usage.tokens.cache_read_tokens,
            cost: estimate_cost(&usage.tokens, rates),
        });
    }
    rows
}

/// Sum of the main session and every subagent.
pub fn combined_totals(breakdown: &SessionBreakdown) -> UsageCounters {
    let mut totals = breakdown.main;
    for usage in breakdown.subagents.values() {
        totals.merge(&usage.tokens);
    }
    totals
}

fn table_row(row: &ReportRow) -> String {
    format!(
        "{:<15} {:<35} {:>5} {:>10} {:>10} {:>10} ${:>7}\n",
        row.agent,
        row.description,
        row.messages,
        format_tokens(row.input_tokens),
        format_tokens(row.output_tokens),
        format_tokens(row.cache_read_tokens),
        format_currency(row.cost),
    )
}

/// Render the full report. The per-row Cache column shows cache reads only;
/// cache creation appears in the totals block.
pub fn render_report(breakdown: &SessionBreakdown, rates: &Rates) -> String {
    let double_rule = "=".repeat(RULE_WIDTH);
    let rule = "-".repeat(RULE_WIDTH);

    let mut out = String::new();
    out.push_str(&format!(
        "{double_rule}\nTOKEN USAGE ANALYSIS\n{double_rule}\n\n"
    ));
    out.push_str(&format!("Usage Breakdown:\n{rule}\n"));
    out.push_str(&format!(
        "{:<15} {:<35} {:>5} {:>10} {:>10} {:>10} {:>8}\n",
        "Agent", "Description", "Msgs", "Input", "Output", "Cache", "Cost"
    ));
    out.push_str(&format!("{rule}\n"));

    for row in report_rows(breakdown, rates) {
        out.push_str(&table_row(&row));
    }

    out.push_str(&format!("{rule}\n\n"));

    let totals = combined_totals(breakdown);
    let total_cost = estimate_cost(&totals, rates);

    out.push_str("TOTALS:\n");
    out.push_str(&format!(
        "  Total messages:         {}\n",
        format_tokens(totals.message_count)
    ));
    out.push_str(&format!(
        "  Input tokens:           {}\n",
        format_tokens(totals.input_tokens)
    ));
    out.push_str(&format!(
        "  Output tokens:          {}\n",
        format_tokens(totals.output_tokens)
    ));
    out.push_str(&format!(
        "  Cache creation tokens:  {}\n",
        format_tokens(totals.cache_creation_tokens)
    ));
    out.push_str(&format!(
        "  Cache read tokens:      {}\n\n",
        format_tokens(totals.cache_read_tokens)
    ));
    out.push_str(&format!(
        "  Total input (incl cache): {}\n",
        format_tokens(totals.combined_input())
    ));
    out.push_str(&format!(
        "  Total tokens:             {}\n\n",
        format_tokens(totals.total_tokens())
    ));
    out.push_str(&format!(
        "  Estimated cost: ${}\n",
        format_currency(total_cost)
    ));
    out.push_str(&format!(
        "  (at ${}/${} per M tokens for input/output)\n\n",
        format_rate(rates.input_per_mtok),
        format_rate(rates.output_per_mtok)
    ));
    out.push_str(&format!("{double_rule}\n"));

    out
}
