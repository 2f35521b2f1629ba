//! Contracts between the scheduling core and the surrounding application.
//!
//! The CRUD, persistence, and delivery layers live behind these traits; the
//! engine only reads definitions and reports materializations and reminders.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::EngineResult;
use crate::payments::RecurringPayment;

/// Supplies the recurring-payment definitions that are active as of a date,
/// already filtered to live `[start_date, end_date]` windows upstream.
pub trait PaymentSource: Send + Sync {
    fn active_definitions(&self, as_of: NaiveDate) -> EngineResult<Vec<RecurringPayment>>;
}

/// Persists a concrete transaction for a payment due on `date`, returning the
/// id of the stored record. Transactionality is this layer's responsibility.
pub trait TransactionSink: Send + Sync {
    fn materialize(&self, payment: &RecurringPayment, date: NaiveDate) -> EngineResult<Uuid>;
}

/// Delivers a reminder for a payment that was just materialized.
pub trait NotificationSink: Send + Sync {
    fn remind(&self, payment: &RecurringPayment) -> EngineResult<()>;
}

// Shared handles forward to the underlying implementation, so callers can keep
// a reference to a sink they hand to the processor.
impl<T: PaymentSource + ?Sized> PaymentSource for std::sync::Arc<T> {
    fn active_definitions(&self, as_of: NaiveDate) -> EngineResult<Vec<RecurringPayment>> {
        (**self).active_definitions(as_of)
    }
}

impl<T: TransactionSink + ?Sized> TransactionSink for std::sync::Arc<T> {
    fn materialize(&self, payment: &RecurringPayment, date: NaiveDate) -> EngineResult<Uuid> {
        (**self).materialize(payment, date)
    }
}

impl<T: NotificationSink + ?Sized> NotificationSink for std::sync::Arc<T> {
    fn remind(&self, payment: &RecurringPayment) -> EngineResult<()> {
        (**self).remind(payment)
    }
}
