//! Due-ness checks and occurrence enumeration for recurring payments.
//!
//! Everything here is a pure function of its inputs: no stored state, no side
//! effects, safe to call concurrently across definitions.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::definition::RecurringPayment;
use super::frequency::Frequency;

/// Enumeration bounds, both ends inclusive. Distinct from the payment's own
/// `[start_date, end_date]` window; enumeration honors both.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Decides whether `payment` produces an occurrence exactly on `date`.
///
/// Month-based frequencies match on `day_of_month` directly rather than on
/// offsets from `start_date`, so a payment due on the 31st never fires in a
/// shorter month, and a mid-month start can fire in its own start month when
/// `day_of_month` lands later in it. "Not due" is `false`, never an error.
pub fn is_due_on(payment: &RecurringPayment, date: NaiveDate) -> bool {
    if !payment.window_contains(date) {
        return false;
    }
    match payment.frequency {
        Frequency::Daily => true,
        Frequency::Weekly => date.weekday() == payment.start_date.weekday(),
        Frequency::BiWeekly => {
            if date.weekday() != payment.start_date.weekday() {
                return false;
            }
            // Even whole-week distance from the start, kept as the original
            // tolerance-based modulo comparison.
            let weeks = (date - payment.start_date).num_days() as f64 / 7.0;
            (weeks % 2.0).abs() < 0.1
        }
        Frequency::Monthly => date.day() == payment.day_of_month,
        Frequency::Quarterly => {
            matches!(date.month(), 1 | 4 | 7 | 10) && date.day() == payment.day_of_month
        }
        Frequency::Yearly => {
            date.month() == payment.start_date.month() && date.day() == payment.day_of_month
        }
    }
}

/// Enumerates the ascending occurrence dates of `payment` inside `window`,
/// additionally bounded by the payment's own start and end dates.
///
/// A monotonically advancing cursor walk from `start_date`; each step strictly
/// increases the date, so the loop is bounded by the window length. A step
/// that fails to advance terminates the walk with whatever was collected.
pub fn occurrences_in_window(payment: &RecurringPayment, window: DateWindow) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut cursor = payment.start_date;
    while cursor <= window.end && payment.end_date.map_or(true, |end| cursor <= end) {
        if window.contains(cursor) {
            dates.push(cursor);
        }
        let next = payment.frequency.step(cursor, payment.day_of_month);
        if next <= cursor {
            break;
        }
        cursor = next;
    }
    dates
}

/// Returns the first scheduled date strictly after `date` that still falls
/// inside the payment's window, or `None` when the schedule is exhausted.
pub fn next_occurrence_after(payment: &RecurringPayment, date: NaiveDate) -> Option<NaiveDate> {
    let mut cursor = payment.start_date;
    loop {
        if let Some(end) = payment.end_date {
            if cursor > end {
                return None;
            }
        }
        if cursor > date {
            return Some(cursor);
        }
        let next = payment.frequency.step(cursor, payment.day_of_month);
        if next <= cursor {
            return None;
        }
        cursor = next;
    }
}
