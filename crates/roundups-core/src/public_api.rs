//! Stable, public-facing helpers that wrap the engine services.
//!
//! This module exposes a simplified API that frontends (FFI, app shells)
//! can rely on without depending on the entire service surface area.

use chrono::{DateTime, Utc};

use roundups_domain::{
    CalculationResult, PeriodStatistics, PolicyPatch, RoundUpPolicy, RoundUpSummary, Transaction,
    ValidationReport,
};

use crate::calculator::RoundUpCalculator;
use crate::error::CoreError;
use crate::mock::MockDataGenerator;
use crate::statistics::StatisticsService;
use crate::validator::PolicyValidator;

/// Computes the round-up for one purchase amount under `policy`.
pub fn api_calculate_round_up(amount: f64, policy: &RoundUpPolicy) -> CalculationResult {
    RoundUpCalculator::calculate(amount, policy)
}

/// Validates a settings edit without applying it.
pub fn api_validate_patch(patch: &PolicyPatch) -> ValidationReport {
    PolicyValidator::validate(patch)
}

/// Validates `patch` and returns the policy it would produce; invalid
/// patches are rejected whole.
pub fn api_apply_patch(
    policy: &RoundUpPolicy,
    patch: PolicyPatch,
) -> Result<RoundUpPolicy, CoreError> {
    let report = PolicyValidator::validate(&patch);
    if !report.is_valid {
        return Err(CoreError::Validation(report.errors.join("; ")));
    }
    Ok(policy.clone().with_patch(patch))
}

/// Buckets `transactions` into the three reporting windows relative to
/// `as_of`.
pub fn api_period_statistics(
    transactions: &[Transaction],
    as_of: DateTime<Utc>,
) -> PeriodStatistics {
    StatisticsService::aggregate(transactions, as_of)
}

/// The lifetime roll-up rendered on the feature home screen.
pub fn api_round_up_summary(transactions: &[Transaction], as_of: DateTime<Utc>) -> RoundUpSummary {
    StatisticsService::summarize(transactions, as_of)
}

/// Deterministic purchase history for demos and previews.
pub fn api_generate_mock_history(
    seed: u64,
    count: usize,
    policy: &RoundUpPolicy,
    now: DateTime<Utc>,
) -> Vec<Transaction> {
    MockDataGenerator::new(seed).transactions(count, policy, now)
}
