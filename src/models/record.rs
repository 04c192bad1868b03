use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize, Debug, Default)]
pub struct TokenUsage {
    pub input_tokens: Option<u64>,
    pub output_tokens: Option<u64>,
    pub cache_creation_input_tokens: Option<u64>,
    pub cache_read_input_tokens: Option<u64>,
}

/// One transcript line, reduced to the shapes the scanner cares about.
#[derive(Debug)]
pub enum Record {
    /// Assistant turn in the main session; `message.usage` may be absent.
    Assistant { usage: TokenUsage },
    /// Tool result reporting a subagent's usage back to the coordinator.
    SubagentResult {
        agent_id: String,
        usage: TokenUsage,
        prompt: Option<String>,
    },
    /// Any other shape; contributes nothing.
    Other,
}

/// Parse one transcript line. `None` means the line is not valid JSON and the
/// caller skips it; lines that parse but match no shape become [`Record::Other`].
pub fn parse_record(line: &str) -> Option<Record> {
    let value: Value = serde_json::from_str(line).ok()?;
    Some(Record::from_value(&value))
}

impl Record {
    fn from_value(value: &Value) -> Record {
        match value.get("type").and_then(Value::as_str) {
            Some("assistant") if value.get("message").is_some() => Record::Assistant {
                usage: usage_field(value.get("message")),
            },
            Some("user") => {
                let Some(result) = value.get("toolUseResult") else {
                    return Record::Other;
                };
                let Some(agent_id) = result.get("agentId").and_then(Value::as_str) else {
                    return Record::Other;
                };
                if result.get("usage").is_none() {
                    return Record::Other;
                }
                Record::SubagentResult {
                    agent_id: agent_id.to_string(),
                    usage: usage_field(Some(result)),
                    prompt: result
                        .get("prompt")
                        .and_then(Value::as_str)
                        .map(str::to_string),
                }
            }
            _ => Record::Other,
        }
    }
}

// Missing or malformed usage objects count the message with zero tokens.
fn usage_field(parent: Option<&Value>) -> TokenUsage {
    parent
        .and_then(|p| p.get("usage"))
        .cloned()
        .and_then(|u| serde_json::from_value(u).ok())
        .unwrap_or_default()
}
