//! Day-of processing: materializes transactions and reminders for every
//! payment due on a given date.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::errors::EngineResult;
use crate::payments::{is_due_on, RecurringPayment};
use crate::ports::{NotificationSink, PaymentSource, TransactionSink};

/// A sink failure recorded while processing one definition.
#[derive(Debug, Clone)]
pub struct ProcessFailure {
    pub payment_id: Uuid,
    pub message: String,
}

/// Outcome totals for one processing run.
#[derive(Debug, Clone, Default)]
pub struct ProcessReport {
    pub evaluated: usize,
    pub due: usize,
    pub materialized: usize,
    pub failures: Vec<ProcessFailure>,
}

/// Runs the due-today pass over a payment source, pushing results to the
/// transaction and notification sinks.
///
/// Definitions are processed independently: a sink failure for one payment is
/// recorded and logged, and the remaining payments are still evaluated. A
/// reminder failure after a successful materialization does not undo the
/// materialization.
pub struct DuePaymentProcessor {
    source: Box<dyn PaymentSource>,
    transactions: Box<dyn TransactionSink>,
    notifications: Box<dyn NotificationSink>,
}

impl DuePaymentProcessor {
    pub fn new(
        source: Box<dyn PaymentSource>,
        transactions: Box<dyn TransactionSink>,
        notifications: Box<dyn NotificationSink>,
    ) -> Self {
        Self {
            source,
            transactions,
            notifications,
        }
    }

    /// Evaluates every active definition against `today` and materializes the
    /// due ones. Only a source failure is fatal; `ProcessReport::materialized`
    /// counts the successfully persisted payments.
    pub fn run(&self, today: NaiveDate) -> EngineResult<ProcessReport> {
        let definitions = self.source.active_definitions(today)?;
        let mut report = ProcessReport {
            evaluated: definitions.len(),
            ..ProcessReport::default()
        };

        for payment in &definitions {
            if !is_due_on(payment, today) {
                continue;
            }
            report.due += 1;
            match self.transactions.materialize(payment, today) {
                Ok(transaction_id) => {
                    report.materialized += 1;
                    tracing::info!(
                        payment_id = %payment.id,
                        %transaction_id,
                        frequency = payment.frequency.label(),
                        date = %today,
                        "materialized recurring payment"
                    );
                    if let Err(err) = self.notifications.remind(payment) {
                        tracing::warn!(
                            payment_id = %payment.id,
                            error = %err,
                            "reminder delivery failed"
                        );
                        report.failures.push(ProcessFailure {
                            payment_id: payment.id,
                            message: err.to_string(),
                        });
                    }
                }
                Err(err) => {
                    tracing::warn!(
                        payment_id = %payment.id,
                        frequency = payment.frequency.label(),
                        error = %err,
                        "failed to materialize recurring payment"
                    );
                    report.failures.push(ProcessFailure {
                        payment_id: payment.id,
                        message: err.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            evaluated = report.evaluated,
            due = report.due,
            materialized = report.materialized,
            failures = report.failures.len(),
            date = %today,
            "due-payment processing complete"
        );
        Ok(report)
    }
}
