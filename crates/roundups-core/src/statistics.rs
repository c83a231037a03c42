//! Per-window filtering and totals over transaction sets.

use chrono::{DateTime, Utc};

use roundups_domain::{
    PeriodStatistics, PeriodTotals, RoundUpDestination, RoundUpSummary, Transaction,
};

use crate::periods::{ReportingPeriod, ReportingWindow};

pub struct StatisticsService;

impl StatisticsService {
    /// Buckets `transactions` into the three reporting windows relative to
    /// `as_of`. Only transactions with round-ups enabled participate, even
    /// when they carry a non-zero stored round-up. Windows overlap by
    /// design; input order is irrelevant.
    pub fn aggregate(transactions: &[Transaction], as_of: DateTime<Utc>) -> PeriodStatistics {
        PeriodStatistics {
            current_month: Self::totals_in(
                transactions,
                ReportingPeriod::CurrentMonth.window(as_of),
            ),
            last_month: Self::totals_in(transactions, ReportingPeriod::LastMonth.window(as_of)),
            year_to_date: Self::totals_in(
                transactions,
                ReportingPeriod::YearToDate.window(as_of),
            ),
        }
    }

    /// The lifetime roll-up for the feature home screen, built from the
    /// year-to-date bucket.
    pub fn summarize(transactions: &[Transaction], as_of: DateTime<Utc>) -> RoundUpSummary {
        let statistics = Self::aggregate(transactions, as_of);
        RoundUpSummary::from_totals(statistics.year_to_date, as_of)
    }

    fn totals_in(transactions: &[Transaction], window: ReportingWindow) -> PeriodTotals {
        let mut invested = 0.0;
        let mut donated = 0.0;
        let mut count = 0usize;

        for txn in transactions {
            if !txn.is_round_up_enabled || !window.contains(txn.date) {
                continue;
            }
            match txn.destination {
                RoundUpDestination::Investment => invested += txn.round_up_amount,
                RoundUpDestination::Charity => donated += txn.round_up_amount,
            }
            count += 1;
        }

        PeriodTotals::from_parts(invested, donated, count)
    }
}
