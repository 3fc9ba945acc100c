//! Resolution of named periods ("last-7-days", "this-week", ...) into concrete ranges.
//!
//! Days are local calendar days. A range starts at 00:00 of its first day and ends
//! at the last nanosecond of its last day, both bounds inclusive.

use chrono::{Datelike, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use contracts::shared::period::{Period, PeriodSelection, PeriodToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodResolver {
    week_start: Weekday,
}

impl Default for PeriodResolver {
    fn default() -> Self {
        Self::new(Weekday::Mon)
    }
}

impl PeriodResolver {
    pub fn new(week_start: Weekday) -> Self {
        Self { week_start }
    }

    /// Resolve a token relative to `now`
    pub fn resolve(&self, token: PeriodToken, now: NaiveDateTime) -> Period {
        let today = now.date();
        let until_today = |start: NaiveDate| Period::new(start_of_day(start), end_of_day(today));

        match token {
            PeriodToken::Today => until_today(today),
            PeriodToken::Yesterday => {
                let day = today - Duration::days(1);
                Period::new(start_of_day(day), end_of_day(day))
            }
            PeriodToken::ThisWeek => until_today(self.start_of_week(today)),
            PeriodToken::LastWeek => {
                let this_week = self.start_of_week(today);
                Period::new(
                    start_of_day(this_week - Duration::days(7)),
                    end_of_day(this_week - Duration::days(1)),
                )
            }
            PeriodToken::Last7Days => until_today(today - Duration::days(6)),
            PeriodToken::Last28Days => until_today(today - Duration::days(27)),
            PeriodToken::Last30Days => until_today(today - Duration::days(29)),
            PeriodToken::Last90Days => until_today(today - Duration::days(89)),
            PeriodToken::Last12Months => {
                until_today(shift_months(today, -12) + Duration::days(1))
            }
            PeriodToken::ThisMonth => until_today(start_of_month(today)),
            PeriodToken::LastMonth => {
                let this_month = start_of_month(today);
                Period::new(
                    start_of_day(shift_months(this_month, -1)),
                    end_of_day(this_month - Duration::days(1)),
                )
            }
            PeriodToken::ThisQuarter => until_today(start_of_quarter(today)),
            PeriodToken::LastQuarter => {
                let this_quarter = start_of_quarter(today);
                Period::new(
                    start_of_day(shift_months(this_quarter, -3)),
                    end_of_day(this_quarter - Duration::days(1)),
                )
            }
            PeriodToken::ThisYear => until_today(start_of_year(today)),
            PeriodToken::LastYear => {
                let this_year = start_of_year(today);
                Period::new(
                    start_of_day(shift_months(this_year, -12)),
                    end_of_day(this_year - Duration::days(1)),
                )
            }
        }
    }

    /// Resolve a token relative to the local clock
    pub fn resolve_now(&self, token: PeriodToken) -> Period {
        self.resolve(token, Local::now().naive_local())
    }

    /// Resolve a raw token code. Unknown codes yield `None`, i.e. no date constraint.
    pub fn resolve_code(&self, code: &str, now: NaiveDateTime) -> Option<Period> {
        match code.parse::<PeriodToken>() {
            Ok(token) => Some(self.resolve(token, now)),
            Err(e) => {
                tracing::debug!("{}, date filter skipped", e);
                None
            }
        }
    }

    /// Custom ranges pass through untouched
    pub fn resolve_selection(
        &self,
        selection: &PeriodSelection,
        now: NaiveDateTime,
    ) -> Option<Period> {
        match selection {
            PeriodSelection::All => None,
            PeriodSelection::Preset { token } => Some(self.resolve(*token, now)),
            PeriodSelection::Custom { start, end } => Some(Period::new(*start, *end)),
        }
    }

    fn start_of_week(&self, date: NaiveDate) -> NaiveDate {
        let current = date.weekday().num_days_from_monday();
        let first = self.week_start.num_days_from_monday();
        let back = (7 + current - first) % 7;
        date - Duration::days(i64::from(back))
    }
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::days(1) - Duration::nanoseconds(1)
}

fn start_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

fn start_of_quarter(date: NaiveDate) -> NaiveDate {
    let month_in_quarter = (date.month0() % 3) as i32;
    shift_months(start_of_month(date), -month_in_quarter)
}

fn start_of_year(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.ordinal0()))
}

/// Shift by whole months, clamping the day to the target month's length
fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}
