//! Explicit state transitions for the round-up feature.
//!
//! The consuming UI holds one [`RoundUpState`] value and dispatches
//! [`RoundUpAction`]s through [`reduce`]; every transition returns a fresh
//! snapshot, so consumers only ever see read-only state.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use roundups_domain::{
    PeriodStatistics, PolicyPatch, RoundUpDestination, RoundUpPolicy, Transaction,
};

use crate::calculator::RoundUpCalculator;
use crate::statistics::StatisticsService;
use crate::validator::PolicyValidator;

/// Snapshot of everything the feature's screens render.
#[derive(Debug, Clone, Default)]
pub struct RoundUpState {
    pub policy: RoundUpPolicy,
    pub transactions: Vec<Transaction>,
    pub statistics: PeriodStatistics,
}

impl RoundUpState {
    pub fn new(policy: RoundUpPolicy) -> Self {
        Self {
            policy,
            transactions: Vec::new(),
            statistics: PeriodStatistics::default(),
        }
    }

    pub fn with_transactions(
        policy: RoundUpPolicy,
        transactions: Vec<Transaction>,
        as_of: DateTime<Utc>,
    ) -> Self {
        let statistics = StatisticsService::aggregate(&transactions, as_of);
        Self {
            policy,
            transactions,
            statistics,
        }
    }
}

/// Closed set of transitions the UI can request.
#[derive(Debug, Clone)]
pub enum RoundUpAction {
    ReplacePolicy(RoundUpPolicy),
    /// Validated first; an invalid patch leaves the state unchanged.
    ApplyPatch(PolicyPatch),
    SetEnabled(bool),
    SetDestination(RoundUpDestination),
    /// Computes the round-up for the incoming purchase under the current
    /// policy and appends the transaction.
    RecordTransaction {
        amount: f64,
        merchant_name: String,
        category: String,
        date: DateTime<Utc>,
    },
    /// Redirects one recorded transaction's round-up.
    SetTransactionDestination {
        id: Uuid,
        destination: RoundUpDestination,
    },
    ReplaceTransactions(Vec<Transaction>),
    /// Recomputes statistics against `as_of`.
    Refresh,
}

/// Applies `action` to `state`, returning the next state. Statistics are
/// refreshed on every transition that can change them.
pub fn reduce(state: &RoundUpState, action: RoundUpAction, as_of: DateTime<Utc>) -> RoundUpState {
    let mut next = state.clone();

    match action {
        RoundUpAction::ReplacePolicy(policy) => {
            next.policy = policy;
        }
        RoundUpAction::ApplyPatch(patch) => {
            let report = PolicyValidator::validate(&patch);
            if !report.is_valid {
                tracing::warn!(errors = ?report.errors, "rejected invalid policy patch");
                return next;
            }
            next.policy.apply(patch);
        }
        RoundUpAction::SetEnabled(enabled) => {
            next.policy.is_enabled = enabled;
        }
        RoundUpAction::SetDestination(destination) => {
            next.policy.default_destination = destination;
        }
        RoundUpAction::RecordTransaction {
            amount,
            merchant_name,
            category,
            date,
        } => {
            let result =
                RoundUpCalculator::calculate_for_category(amount, &category, &next.policy);
            let transaction = Transaction::new(amount, merchant_name, category, date)
                .with_round_up(result.round_up_amount, result.destination);
            tracing::debug!(
                amount,
                round_up = result.round_up_amount,
                "recorded transaction"
            );
            next.transactions.push(transaction);
            next.statistics = StatisticsService::aggregate(&next.transactions, as_of);
        }
        RoundUpAction::SetTransactionDestination { id, destination } => {
            match next.transactions.iter_mut().find(|txn| txn.id == id) {
                Some(txn) => txn.destination = destination,
                None => {
                    tracing::warn!(%id, "ignored destination change for unknown transaction");
                    return next;
                }
            }
            next.statistics = StatisticsService::aggregate(&next.transactions, as_of);
        }
        RoundUpAction::ReplaceTransactions(transactions) => {
            next.transactions = transactions;
            next.statistics = StatisticsService::aggregate(&next.transactions, as_of);
        }
        RoundUpAction::Refresh => {
            next.statistics = StatisticsService::aggregate(&next.transactions, as_of);
        }
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use roundups_domain::RoundUpMethod;

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 10, 0, 0).unwrap()
    }

    fn record(amount: f64, category: &str) -> RoundUpAction {
        RoundUpAction::RecordTransaction {
            amount,
            merchant_name: "Corner Cafe".into(),
            category: category.into(),
            date: as_of(),
        }
    }

    #[test]
    fn recording_a_transaction_computes_its_round_up() {
        let state = RoundUpState::new(RoundUpPolicy::default());
        let next = reduce(&state, record(19.40, "Dining"), as_of());

        assert_eq!(next.transactions.len(), 1);
        assert_eq!(next.transactions[0].round_up_amount, 0.60);
        assert_eq!(next.statistics.current_month.round_ups, 0.60);
        assert!(state.transactions.is_empty(), "input state is untouched");
    }

    #[test]
    fn excluded_categories_record_with_zero_round_up() {
        let policy = RoundUpPolicy {
            excluded_categories: vec!["dining".into()],
            ..RoundUpPolicy::default()
        };
        let state = RoundUpState::new(policy);
        let next = reduce(&state, record(19.40, "Dining"), as_of());

        assert_eq!(next.transactions[0].round_up_amount, 0.0);
        assert_eq!(next.statistics.current_month.round_ups, 0.0);
        assert_eq!(next.statistics.current_month.transaction_count, 1);
    }

    #[test]
    fn invalid_patch_leaves_the_state_unchanged() {
        let state = RoundUpState::new(RoundUpPolicy::default());
        let next = reduce(
            &state,
            RoundUpAction::ApplyPatch(PolicyPatch {
                minimum_round_up: Some(5.0),
                maximum_round_up: Some(1.0),
                ..PolicyPatch::default()
            }),
            as_of(),
        );

        assert_eq!(next.policy, state.policy);
    }

    #[test]
    fn valid_patch_is_applied() {
        let state = RoundUpState::new(RoundUpPolicy::default());
        let next = reduce(
            &state,
            RoundUpAction::ApplyPatch(PolicyPatch {
                method: Some(RoundUpMethod::CustomAmount),
                custom_amount: Some(2.0),
                ..PolicyPatch::default()
            }),
            as_of(),
        );

        assert_eq!(next.policy.method, RoundUpMethod::CustomAmount);
        assert_eq!(next.policy.custom_amount, Some(2.0));
    }

    #[test]
    fn redirecting_a_transaction_moves_its_totals() {
        let state = RoundUpState::new(RoundUpPolicy::default());
        let next = reduce(&state, record(19.40, "Dining"), as_of());
        let id = next.transactions[0].id;

        let redirected = reduce(
            &next,
            RoundUpAction::SetTransactionDestination {
                id,
                destination: RoundUpDestination::Charity,
            },
            as_of(),
        );

        assert_eq!(redirected.statistics.current_month.invested, 0.0);
        assert_eq!(redirected.statistics.current_month.donated, 0.60);
    }

    #[test]
    fn unknown_transaction_id_is_ignored() {
        let state = RoundUpState::new(RoundUpPolicy::default());
        let next = reduce(&state, record(19.40, "Dining"), as_of());

        let unchanged = reduce(
            &next,
            RoundUpAction::SetTransactionDestination {
                id: Uuid::new_v4(),
                destination: RoundUpDestination::Charity,
            },
            as_of(),
        );

        assert_eq!(
            unchanged.transactions[0].destination,
            RoundUpDestination::Investment
        );
    }

    #[test]
    fn toggling_the_master_switch_stops_new_round_ups() {
        let state = RoundUpState::new(RoundUpPolicy::default());
        let disabled = reduce(&state, RoundUpAction::SetEnabled(false), as_of());
        let next = reduce(&disabled, record(19.40, "Dining"), as_of());

        assert_eq!(next.transactions[0].round_up_amount, 0.0);
    }
}
