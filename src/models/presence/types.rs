use chrono::{NaiveDate, NaiveTime};
use std::collections::HashMap;

/// Entry and leave times recorded for one user on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayPresence {
    pub entry: NaiveTime,
    pub leave: NaiveTime,
}

/// One fully parsed row of the presence CSV. Parsing is all-or-nothing: a
/// row either yields a complete record or inserts nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenceRecord {
    pub user_id: i64,
    pub date: NaiveDate,
    pub entry: NaiveTime,
    pub leave: NaiveTime,
}

/// All recorded dates for a single user.
pub type UserDays = HashMap<NaiveDate, DayPresence>;

/// Per-user, per-date presence map built fresh from the CSV on every query.
pub type PresenceLog = HashMap<i64, UserDays>;
