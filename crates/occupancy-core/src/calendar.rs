//! Wall-clock time → (day-of-week, 30-minute interval) buckets.
//!
//! Days count from Sunday = 0. Intervals are `hour * 2 + minute / 30`,
//! so a day has 48 of them. Everything here is pure except the two
//! `current_*` helpers, which read the system local time.

use chrono::{Datelike, Local, Timelike};

use crate::constants::INTERVAL_MINUTES;

/// Interval index (0–47) of a wall-clock time.
pub fn time_interval_of<T: Timelike>(time: &T) -> u8 {
    (time.hour() * 2 + time.minute() / INTERVAL_MINUTES) as u8
}

/// Day-of-week index (Sunday = 0 .. Saturday = 6) of a date.
pub fn day_of_week_of<D: Datelike>(date: &D) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Interval index for the current local time.
pub fn current_time_interval() -> u8 {
    time_interval_of(&Local::now())
}

/// Day-of-week index for the current local date.
pub fn current_day_of_week() -> u8 {
    day_of_week_of(&Local::now())
}

/// Start of an interval as `(hour, minute)`.
///
/// Not clamped: interval 48 yields `(24, 0)`.
pub fn interval_start(interval: u8) -> (u32, u32) {
    let interval = u32::from(interval);
    (interval / 2, (interval % 2) * INTERVAL_MINUTES)
}

/// Human-readable half-open label, e.g. `"12:00-12:30"`.
///
/// The upper bound's hour wraps at 24, so interval 47 is `"23:30-00:00"`.
pub fn time_slot_label(interval: u8) -> String {
    let (start_hour, start_minute) = interval_start(interval);
    let (end_hour, end_minute) = interval_start(interval.saturating_add(1));
    format!(
        "{:02}:{:02}-{:02}:{:02}",
        start_hour,
        start_minute,
        end_hour % 24,
        end_minute
    )
}
