//! # Pricing Module
//!
//! Estimated dollar cost for accumulated token counters.
//!
//! Cache-creation and cache-read tokens are billed at the input rate,
//! matching the provider's combined-input billing model. The two rates are
//! the only adjustable part of the formula.

use crate::models::UsageCounters;

/// Default dollars per 1M input/cache tokens.
pub const DEFAULT_INPUT_RATE: f64 = 3.0;

/// Default dollars per 1M output tokens.
pub const DEFAULT_OUTPUT_RATE: f64 = 15.0;

/// Dollars per one million tokens.
#[derive(Clone, Copy, Debug)]
pub struct Rates {
    pub input_per_mtok: f64,
    pub output_per_mtok: f64,
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            input_per_mtok: DEFAULT_INPUT_RATE,
            output_per_mtok: DEFAULT_OUTPUT_RATE,
        }
    }
}

pub fn estimate_cost(counters: &UsageCounters, rates: &Rates) -> f64 {
    let input = counters.combined_input() as f64;
    let output = counters.output_tokens as f64;
    (input * rates.input_per_mtok + output * rates.output_per_mtok) / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counters(input: u64, output: u64, cache_creation: u64, cache_read: u64) -> UsageCounters {
        UsageCounters {
            input_tokens: input,
            output_tokens: output,
            cache_creation_tokens: cache_creation,
            cache_read_tokens: cache_read,
            message_count: 0,
        }
    }

    #[test]
    fn test_default_rates_exactness() {
        // 1M input + 1M output at $3/$15 per M
        let cost = estimate_cost(&counters(1_000_000, 1_000_000, 0, 0), &Rates::default());
        assert!((cost - 18.0).abs() < 1e-9);
    }

    #[test]
    fn test_cache_billed_at_input_rate() {
        let cost = estimate_cost(&counters(0, 0, 1_000_000, 1_000_000), &Rates::default());
        assert!((cost - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_usage_is_free() {
        let cost = estimate_cost(&UsageCounters::default(), &Rates::default());
        assert_eq!(cost, 0.0);
    }

    #[test]
    fn test_custom_rates() {
        let rates = Rates {
            input_per_mtok: 15.0,
            output_per_mtok: 75.0,
        };
        let cost = estimate_cost(&counters(2_000_000, 1_000_000, 0, 0), &rates);
        assert!((cost - 105.0).abs() < 1e-9);
    }
}
