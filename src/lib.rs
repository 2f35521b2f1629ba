#![doc(test(attr(deny(warnings))))]

//! Recurring Core offers the due-date computation, occurrence enumeration, and
//! due-today processing primitives behind a family-budget recurring-payment
//! scheduler.

pub mod errors;
pub mod payments;
pub mod ports;
pub mod processing;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Recurring Core tracing initialized.");
    });
}
