#![doc(test(attr(deny(warnings))))]

//! Caixa Core provides the projection, recurrence, and fiscal-diagnosis
//! primitives that power a small-business cash dashboard: expanding entries
//! into installment and recurring series, deriving monthly cash metrics,
//! forecasting liquidity, and normalizing government tax-guide payloads.

pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod fiscal;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Caixa Core tracing initialized.");
    });
}
