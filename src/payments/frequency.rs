use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Cadence of a recurring payment. `day_of_month` on the owning definition is
/// only meaningful for the month-based variants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Frequency {
    Daily,
    Weekly,
    BiWeekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl Frequency {
    pub fn is_month_based(&self) -> bool {
        matches!(
            self,
            Frequency::Monthly | Frequency::Quarterly | Frequency::Yearly
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Daily => "Daily",
            Frequency::Weekly => "Weekly",
            Frequency::BiWeekly => "Bi-weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Yearly => "Yearly",
        }
    }

    /// Advances the enumeration cursor by one period. Month-based steps clamp
    /// to the landing month's length and then snap forward to `day_of_month`
    /// when the clamped day fell short of it and the target day exists in the
    /// landing month, so a day-15 schedule stepping out of a short month lands
    /// back on the 15th rather than drifting.
    pub fn step(&self, from: NaiveDate, day_of_month: u32) -> NaiveDate {
        let next = match self {
            Frequency::Daily => from + Duration::days(1),
            Frequency::Weekly => from + Duration::weeks(1),
            Frequency::BiWeekly => from + Duration::weeks(2),
            Frequency::Monthly => shift_month(from, 1),
            Frequency::Quarterly => shift_month(from, 3),
            Frequency::Yearly => shift_year(from, 1),
        };
        if self.is_month_based() {
            snap_to_day(next, day_of_month)
        } else {
            next
        }
    }
}

fn snap_to_day(date: NaiveDate, day_of_month: u32) -> NaiveDate {
    if date.day() < day_of_month && day_of_month <= days_in_month(date.year(), date.month()) {
        date.with_day(day_of_month).unwrap_or(date)
    } else {
        date
    }
}

fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

fn shift_year(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day).unwrap_or(date)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    (first_next - Duration::days(1)).day()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_and_week_steps_are_linear() {
        let start = date(2024, 1, 1);
        assert_eq!(Frequency::Daily.step(start, 1), date(2024, 1, 2));
        assert_eq!(Frequency::Weekly.step(start, 1), date(2024, 1, 8));
        assert_eq!(Frequency::BiWeekly.step(start, 1), date(2024, 1, 15));
    }

    #[test]
    fn monthly_step_clamps_into_short_months() {
        // Jan 31 -> Feb 29 (leap) -> Mar 31 via snap-forward.
        let jan = date(2024, 1, 31);
        let feb = Frequency::Monthly.step(jan, 31);
        assert_eq!(feb, date(2024, 2, 29));
        assert_eq!(Frequency::Monthly.step(feb, 31), date(2024, 3, 31));
    }

    #[test]
    fn snap_forward_only_when_target_day_exists() {
        // Stepping out of Feb with target day 30: April has 30 days, snap.
        let feb = date(2023, 2, 28);
        assert_eq!(Frequency::Monthly.step(feb, 30), date(2023, 3, 30));
        // Target day 31 stepping into April stays clamped at the 30th.
        let mar = date(2023, 3, 31);
        assert_eq!(Frequency::Monthly.step(mar, 31), date(2023, 4, 30));
    }

    #[test]
    fn quarterly_and_yearly_steps() {
        let start = date(2024, 1, 15);
        assert_eq!(Frequency::Quarterly.step(start, 15), date(2024, 4, 15));
        assert_eq!(Frequency::Yearly.step(start, 15), date(2025, 1, 15));
        // Leap day stepping a year lands on Feb 28.
        assert_eq!(Frequency::Yearly.step(date(2024, 2, 29), 29), date(2025, 2, 28));
    }

    #[test]
    fn month_based_variants_are_flagged() {
        assert!(Frequency::Monthly.is_month_based());
        assert!(Frequency::Quarterly.is_month_based());
        assert!(Frequency::Yearly.is_month_based());
        assert!(!Frequency::Daily.is_month_based());
        assert!(!Frequency::Weekly.is_month_based());
        assert!(!Frequency::BiWeekly.is_month_based());
    }

    #[test]
    fn labels_name_each_cadence() {
        assert_eq!(Frequency::Daily.label(), "Daily");
        assert_eq!(Frequency::Weekly.label(), "Weekly");
        assert_eq!(Frequency::BiWeekly.label(), "Bi-weekly");
        assert_eq!(Frequency::Monthly.label(), "Monthly");
        assert_eq!(Frequency::Quarterly.label(), "Quarterly");
        assert_eq!(Frequency::Yearly.label(), "Yearly");
    }

    #[test]
    fn days_in_month_handles_february() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
    }
}
