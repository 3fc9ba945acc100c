//! Опорная точка времени для демонстрационных данных.
//!
//! Даты в моках задаются относительно момента первого обращения, чтобы
//! фильтры "последние N дней" всегда что-то показывали.

use chrono::{Duration, Local, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;

static ANCHOR: Lazy<NaiveDateTime> = Lazy::new(|| Local::now().naive_local());

pub fn anchor() -> NaiveDateTime {
    *ANCHOR
}

/// `days` days before the anchor at the given wall-clock time
pub fn days_ago(days: i64, hour: u32, minute: u32) -> NaiveDateTime {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN);
    (anchor().date() - Duration::days(days)).and_time(time)
}
