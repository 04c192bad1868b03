use std::path::PathBuf;

use crate::pricing::{DEFAULT_INPUT_RATE, DEFAULT_OUTPUT_RATE, Rates};

#[derive(clap::Parser, Debug)]
#[command(about = "Per-agent token usage and cost report for a Claude Code session transcript")]
pub struct Args {
    /// Path to the session transcript (.jsonl)
    #[arg(value_name = "TRANSCRIPT")]
    pub transcript: PathBuf,

    /// Dollars per 1M input/cache tokens
    #[arg(long, env = "CLAUDE_PRICE_INPUT", default_value_t = DEFAULT_INPUT_RATE)]
    pub input_rate: f64,

    /// Dollars per 1M output tokens
    #[arg(long, env = "CLAUDE_PRICE_OUTPUT", default_value_t = DEFAULT_OUTPUT_RATE)]
    pub output_rate: f64,

    /// Debug mode: show scan statistics on stderr
    #[arg(long, env = "CLAUDE_DEBUG")]
    pub debug: bool,
}

impl Args {
    pub fn try_parse() -> Result<Self, clap::Error> {
        <Args as clap::Parser>::try_parse()
    }

    pub fn rates(&self) -> Rates {
        Rates {
            input_per_mtok: self.input_rate,
            output_per_mtok: self.output_rate,
        }
    }
}
