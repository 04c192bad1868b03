pub mod counters;
pub mod record;

pub use counters::{SubagentUsage, UsageCounters};
pub use record::{Record, TokenUsage};
