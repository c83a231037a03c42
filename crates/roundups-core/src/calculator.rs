//! Round-up computation for a single purchase under a policy.

use roundups_domain::{CalculationResult, RoundUpMethod, RoundUpPolicy};

/// Rounds a currency value to 2 decimal places, half away from zero.
/// The single rounding authority for the engine.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Case-insensitive membership test for category exclusions. Only the query
/// is normalized; the list is expected to be stored lower-cased (see
/// [`RoundUpPolicy::apply`]). Entries carrying uppercase letters will not
/// match.
pub fn is_category_excluded(category: &str, excluded: &[String]) -> bool {
    let query = category.to_lowercase();
    excluded.iter().any(|entry| entry == &query)
}

pub struct RoundUpCalculator;

impl RoundUpCalculator {
    /// Applies `policy` to a purchase amount. Total: every input produces a
    /// result; malformed policies degrade to a zero round-up.
    pub fn calculate(amount: f64, policy: &RoundUpPolicy) -> CalculationResult {
        if !policy.is_enabled || amount <= 0.0 {
            return CalculationResult::unchanged(amount, policy.default_destination);
        }

        let mut round_up = match policy.method {
            RoundUpMethod::NearestDollar => amount.ceil() - amount,
            RoundUpMethod::CustomAmount => policy.custom_amount.unwrap_or(0.0),
        };

        // Below the minimum the round-up is suppressed entirely, not floored.
        // Values exactly on either bound pass through unchanged.
        if round_up < policy.minimum_round_up {
            round_up = 0.0;
        } else if round_up > policy.maximum_round_up {
            round_up = policy.maximum_round_up;
        }

        let round_up = round_currency(round_up);
        CalculationResult {
            original_amount: amount,
            round_up_amount: round_up,
            new_total: round_currency(amount + round_up),
            destination: policy.default_destination,
        }
    }

    /// Like [`RoundUpCalculator::calculate`], for a categorized purchase:
    /// excluded categories produce a zero round-up.
    pub fn calculate_for_category(
        amount: f64,
        category: &str,
        policy: &RoundUpPolicy,
    ) -> CalculationResult {
        if is_category_excluded(category, &policy.excluded_categories) {
            return CalculationResult::unchanged(amount, policy.default_destination);
        }
        Self::calculate(amount, policy)
    }
}
