#![doc(test(attr(deny(warnings))))]

//! Finance Core offers the ledger, analytics, and goal-tracking primitives
//! that power a single-user personal-finance dashboard.
//!
//! All state lives in a [`session::SessionContext`]; nothing is persisted.
//! Derived computations (summaries, forecasts, insights) are pure reads over
//! the current snapshot and can be recomputed on every render.

pub mod errors;
pub mod ledger;
pub mod services;
pub mod session;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Finance Core tracing initialized.");
    });
}
