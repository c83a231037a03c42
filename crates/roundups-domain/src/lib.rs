//! roundups-domain
//!
//! Pure domain models for the round-up engine (transactions, policies,
//! calculation results, period statistics). No I/O, no services. Only data
//! types and core enums.

pub mod common;
pub mod policy;
pub mod statistics;
pub mod transaction;

pub use common::*;
pub use policy::*;
pub use statistics::*;
pub use transaction::*;
