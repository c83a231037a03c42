//! roundups-core
//!
//! The round-up engine: calculation, policy validation, reporting windows,
//! statistics aggregation, and the state reducer. Depends on
//! roundups-domain. No UI, no terminal I/O, no direct storage interactions.

pub mod calculator;
pub mod error;
pub mod mock;
pub mod periods;
pub mod public_api;
pub mod statistics;
pub mod store;
pub mod validator;

pub use calculator::*;
pub use error::CoreError;
pub use mock::*;
pub use periods::*;
pub use public_api::*;
pub use statistics::*;
pub use store::*;
pub use validator::*;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("roundups=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("round-up engine tracing initialized");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
