use crate::models::record::TokenUsage;

/// Running token totals for one agent. Counters only ever grow during a scan.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UsageCounters {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub cache_creation_tokens: u64,
    pub cache_read_tokens: u64,
    pub message_count: u64,
}

impl UsageCounters {
    /// Record one message and fold its usage into the totals.
    pub fn add_usage(&mut self, usage: &TokenUsage) {
        self.message_count += 1;
        self.input_tokens += usage.input_tokens.unwrap_or(0);
        self.output_tokens += usage.output_tokens.unwrap_or(0);
        self.cache_creation_tokens += usage.cache_creation_input_tokens.unwrap_or(0);
        self.cache_read_tokens += usage.cache_read_input_tokens.unwrap_or(0);
    }

    pub fn merge(&mut self, other: &UsageCounters) {
        self.message_count += other.message_count;
        self.input_tokens += other.input_tokens;
        self.output_tokens += other.output_tokens;
        self.cache_creation_tokens += other.cache_creation_tokens;
        self.cache_read_tokens += other.cache_read_tokens;
    }

    /// Input-side tokens as billed: fresh input plus both cache kinds.
    pub fn combined_input(&self) -> u64 {
        self.input_tokens + self.cache_creation_tokens + self.cache_read_tokens
    }

    pub fn total_tokens(&self) -> u64 {
        self.combined_input() + self.output_tokens
    }
}

/// Per-subagent totals plus the description captured from its first tool
/// result; later records never overwrite the description.
#[derive(Clone, Debug, Default)]
pub struct SubagentUsage {
    pub tokens: UsageCounters,
    pub description: Option<String>,
}
