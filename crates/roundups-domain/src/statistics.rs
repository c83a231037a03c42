//! Value objects produced by the round-up engine: per-call calculation
//! results and per-window reporting totals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::transaction::RoundUpDestination;

/// Outcome of applying a policy to a single purchase amount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub original_amount: f64,
    pub round_up_amount: f64,
    pub new_total: f64,
    pub destination: RoundUpDestination,
}

impl CalculationResult {
    /// A result that leaves the purchase untouched.
    pub fn unchanged(amount: f64, destination: RoundUpDestination) -> Self {
        Self {
            original_amount: amount,
            round_up_amount: 0.0,
            new_total: amount,
            destination,
        }
    }

    pub fn has_round_up(&self) -> bool {
        self.round_up_amount > 0.0
    }
}

/// Totals for one reporting window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotals {
    pub round_ups: f64,
    pub invested: f64,
    pub donated: f64,
    pub transaction_count: usize,
}

impl PeriodTotals {
    /// Builds totals from the destination split, so `round_ups` is exactly
    /// `invested + donated`.
    pub fn from_parts(invested: f64, donated: f64, transaction_count: usize) -> Self {
        Self {
            round_ups: invested + donated,
            invested,
            donated,
            transaction_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }
}

/// The three fixed reporting buckets rendered by the feature's stats screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStatistics {
    pub current_month: PeriodTotals,
    pub last_month: PeriodTotals,
    pub year_to_date: PeriodTotals,
}

/// Lifetime roll-up persisted by callers and rendered on the feature home
/// screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoundUpSummary {
    pub total_round_ups: f64,
    pub total_invested: f64,
    pub total_donated: f64,
    pub transaction_count: usize,
    pub updated_at: DateTime<Utc>,
}

impl RoundUpSummary {
    pub fn from_totals(totals: PeriodTotals, updated_at: DateTime<Utc>) -> Self {
        Self {
            total_round_ups: totals.round_ups,
            total_invested: totals.invested,
            total_donated: totals.donated,
            transaction_count: totals.transaction_count,
            updated_at,
        }
    }
}
