use std::collections::HashSet;
use std::sync::Mutex;

use chrono::NaiveDate;
use uuid::Uuid;

use recurring_core::errors::{EngineError, EngineResult};
use recurring_core::payments::RecurringPayment;
use recurring_core::ports::{NotificationSink, PaymentSource, TransactionSink};

/// Serves a fixed list of definitions, optionally failing the whole pull.
pub struct FixedPaymentSource {
    definitions: Vec<RecurringPayment>,
    pub fail: bool,
}

impl FixedPaymentSource {
    pub fn new(definitions: Vec<RecurringPayment>) -> Self {
        Self {
            definitions,
            fail: false,
        }
    }
}

impl PaymentSource for FixedPaymentSource {
    fn active_definitions(&self, _as_of: NaiveDate) -> EngineResult<Vec<RecurringPayment>> {
        if self.fail {
            return Err(EngineError::Source("source unavailable".into()));
        }
        Ok(self.definitions.clone())
    }
}

/// Records materializations in memory; payments listed in `reject` fail.
#[derive(Default)]
pub struct RecordingTransactionSink {
    pub materialized: Mutex<Vec<(Uuid, NaiveDate)>>,
    pub reject: HashSet<Uuid>,
}

impl RecordingTransactionSink {
    pub fn rejecting(ids: impl IntoIterator<Item = Uuid>) -> Self {
        Self {
            materialized: Mutex::new(Vec::new()),
            reject: ids.into_iter().collect(),
        }
    }
}

impl TransactionSink for RecordingTransactionSink {
    fn materialize(&self, payment: &RecurringPayment, date: NaiveDate) -> EngineResult<Uuid> {
        if self.reject.contains(&payment.id) {
            return Err(EngineError::Materialize("storage rejected write".into()));
        }
        self.materialized
            .lock()
            .expect("lock materialized log")
            .push((payment.id, date));
        Ok(Uuid::new_v4())
    }
}

/// Records reminders in memory; payments listed in `reject` fail.
#[derive(Default)]
pub struct RecordingNotificationSink {
    pub reminded: Mutex<Vec<Uuid>>,
    pub reject: HashSet<Uuid>,
}

impl NotificationSink for RecordingNotificationSink {
    fn remind(&self, payment: &RecurringPayment) -> EngineResult<()> {
        if self.reject.contains(&payment.id) {
            return Err(EngineError::Notification("delivery failed".into()));
        }
        self.reminded
            .lock()
            .expect("lock reminder log")
            .push(payment.id);
        Ok(())
    }
}
