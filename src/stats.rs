use chrono::{Datelike, NaiveTime, Timelike};

use crate::models::presence::UserDays;

/// Abbreviated weekday names, Monday first, matching the bucket indexing
/// used throughout this module.
pub const DAY_ABBR: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Mean arrival and leave second-of-day for one weekday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartEnd {
    pub start: i64,
    pub end: i64,
}

/// Seconds elapsed since midnight for a wall-clock time.
pub fn seconds_since_midnight(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 3600 + i64::from(t.minute()) * 60 + i64::from(t.second())
}

/// Signed interval in seconds between two times of day. Negative when `end`
/// precedes `start`; callers are expected to pass them in order.
pub fn interval(start: NaiveTime, end: NaiveTime) -> i64 {
    seconds_since_midnight(end) - seconds_since_midnight(start)
}

/// Arithmetic mean. Zero for an empty slice.
pub fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<i64>() as f64 / values.len() as f64
}

/// Groups one user's presence durations by weekday.
///
/// Buckets are indexed Monday=0 through Sunday=6; weekdays without any
/// recorded date stay as empty lists.
pub fn group_by_weekday(days: &UserDays) -> [Vec<i64>; 7] {
    let mut buckets: [Vec<i64>; 7] = Default::default();
    for (date, presence) in days {
        let weekday = date.weekday().num_days_from_monday() as usize;
        buckets[weekday].push(interval(presence.entry, presence.leave));
    }
    buckets
}

/// Groups one user's mean arrival and leave hour by weekday.
///
/// Averages truncate toward zero; a weekday without records keeps
/// `{start: 0, end: 0}` rather than dividing by zero.
pub fn group_by_weekday_start_end(days: &UserDays) -> [StartEnd; 7] {
    let mut sums = [StartEnd::default(); 7];
    let mut counts = [0i64; 7];
    for (date, presence) in days {
        let weekday = date.weekday().num_days_from_monday() as usize;
        sums[weekday].start += seconds_since_midnight(presence.entry);
        sums[weekday].end += seconds_since_midnight(presence.leave);
        counts[weekday] += 1;
    }
    for (sum, count) in sums.iter_mut().zip(counts) {
        if count > 0 {
            sum.start /= count;
            sum.end /= count;
        }
    }
    sums
}
