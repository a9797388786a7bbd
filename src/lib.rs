#![doc(test(attr(deny(warnings))))]

//! Pay-later settlement ledger: a generic entity store with per-kind
//! mutability policy, fixed-point money arithmetic, credit-limit invariant
//! enforcement, and multi-record transfer orchestration behind a small REPL.

pub mod cli;
pub mod core;
pub mod domain;
pub mod email;
pub mod errors;
pub mod money;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Pay-later ledger tracing initialized.");
    });
}
