//! Domain models for purchase transactions and round-up destinations.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Displayable, Identifiable};

/// A settled card purchase as reported by the banking ledger, carrying the
/// round-up computed for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    pub round_up_amount: f64,
    pub merchant_name: String,
    pub category: String,
    pub date: DateTime<Utc>,
    pub is_round_up_enabled: bool,
    #[serde(rename = "roundUpDestination")]
    pub destination: RoundUpDestination,
}

impl Transaction {
    pub fn new(
        amount: f64,
        merchant_name: impl Into<String>,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            round_up_amount: 0.0,
            merchant_name: merchant_name.into(),
            category: category.into(),
            date,
            is_round_up_enabled: true,
            destination: RoundUpDestination::Investment,
        }
    }

    pub fn with_round_up(mut self, amount: f64, destination: RoundUpDestination) -> Self {
        self.set_round_up(amount, destination);
        self
    }

    pub fn set_round_up(&mut self, amount: f64, destination: RoundUpDestination) {
        self.round_up_amount = amount.max(0.0);
        self.destination = destination;
    }

    /// Removes the transaction from round-up totals without dropping the
    /// stored amount.
    pub fn disable_round_up(&mut self) {
        self.is_round_up_enabled = false;
    }

    pub fn total_charged(&self) -> f64 {
        self.amount + self.round_up_amount
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} [{}]", self.merchant_name, self.destination)
    }
}

/// Target allocation of a round-up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundUpDestination {
    #[default]
    Investment,
    Charity,
}

impl fmt::Display for RoundUpDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RoundUpDestination::Investment => "investment",
            RoundUpDestination::Charity => "charity",
        };
        f.write_str(label)
    }
}
