use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::frequency::Frequency;

/// A recurring-payment definition. Read-only input to the scheduling engine;
/// creation, validation, and updates belong to the surrounding CRUD layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringPayment {
    pub id: Uuid,
    pub amount: f64,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub frequency: Frequency,
    #[serde(default = "RecurringPayment::default_day_of_month")]
    pub day_of_month: u32,
    pub category_id: Uuid,
    pub budget_id: Uuid,
}

impl RecurringPayment {
    pub fn new(
        amount: f64,
        start_date: NaiveDate,
        frequency: Frequency,
        day_of_month: u32,
        category_id: Uuid,
        budget_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            start_date,
            end_date: None,
            frequency,
            day_of_month,
            category_id,
            budget_id,
        }
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// True when `date` lies inside the payment's own `[start_date, end_date]`
    /// window (end inclusive). An inverted window contains nothing.
    pub fn window_contains(&self, date: NaiveDate) -> bool {
        if date < self.start_date {
            return false;
        }
        match self.end_date {
            Some(end) => date <= end,
            None => true,
        }
    }

    fn default_day_of_month() -> u32 {
        1
    }
}
