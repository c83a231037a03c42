//! Deterministic fixture data for demos and tests.
//!
//! All randomness flows through an explicitly seeded generator; the engine
//! never reads ambient randomness or the ambient clock. Identical seed,
//! reference time, and policy produce identical output.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use roundups_domain::{RoundUpPolicy, Transaction};

use crate::calculator::RoundUpCalculator;

const MERCHANTS: &[(&str, &str)] = &[
    ("Corner Cafe", "Dining"),
    ("Metro Transit", "Transport"),
    ("Fresh Mart", "Groceries"),
    ("Page & Co Books", "Shopping"),
    ("Pump Street Fuel", "Fuel"),
    ("Cinema Plaza", "Entertainment"),
    ("Green Bowl", "Dining"),
    ("City Pharmacy", "Health"),
];

const HISTORY_DAYS: i64 = 90;

/// Seeded generator for purchase histories.
pub struct MockDataGenerator {
    rng: StdRng,
}

impl MockDataGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates `count` purchases over the ~90 days before `now`, with
    /// round-ups computed through the calculator under `policy`.
    pub fn transactions(
        &mut self,
        count: usize,
        policy: &RoundUpPolicy,
        now: DateTime<Utc>,
    ) -> Vec<Transaction> {
        (0..count).map(|_| self.transaction(policy, now)).collect()
    }

    pub fn transaction(&mut self, policy: &RoundUpPolicy, now: DateTime<Utc>) -> Transaction {
        let (merchant, category) = MERCHANTS[self.rng.random_range(0..MERCHANTS.len())];
        let cents: u32 = self.rng.random_range(100..=12_000);
        let amount = f64::from(cents) / 100.0;
        let offset_minutes = self.rng.random_range(0..HISTORY_DAYS * 24 * 60);
        let date = now - Duration::minutes(offset_minutes);

        let result = RoundUpCalculator::calculate_for_category(amount, category, policy);
        Transaction::new(amount, merchant, category, date)
            .with_round_up(result.round_up_amount, result.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn identical_seeds_produce_identical_histories() {
        let policy = RoundUpPolicy::default();
        let first = MockDataGenerator::new(42).transactions(20, &policy, now());
        let second = MockDataGenerator::new(42).transactions(20, &policy, now());

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.amount, b.amount);
            assert_eq!(a.round_up_amount, b.round_up_amount);
            assert_eq!(a.merchant_name, b.merchant_name);
            assert_eq!(a.date, b.date);
        }
    }

    #[test]
    fn generated_dates_stay_within_the_history_window() {
        let policy = RoundUpPolicy::default();
        let history = MockDataGenerator::new(7).transactions(50, &policy, now());

        let floor = now() - Duration::days(HISTORY_DAYS);
        for txn in &history {
            assert!(txn.date <= now());
            assert!(txn.date >= floor);
        }
    }

    #[test]
    fn round_ups_follow_the_supplied_policy() {
        let policy = RoundUpPolicy::default();
        let history = MockDataGenerator::new(3).transactions(50, &policy, now());

        for txn in &history {
            let expected =
                RoundUpCalculator::calculate_for_category(txn.amount, &txn.category, &policy);
            assert_eq!(txn.round_up_amount, expected.round_up_amount);
        }
    }
}
