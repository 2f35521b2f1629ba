//! Recurring-payment domain models and the scheduling engine.

pub mod definition;
pub mod frequency;
pub mod schedule;

pub use definition::RecurringPayment;
pub use frequency::Frequency;
pub use schedule::{is_due_on, next_occurrence_after, occurrences_in_window, DateWindow};
