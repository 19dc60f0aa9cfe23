use serde::Serialize;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::{directory, presence};
use crate::stats::{self, DAY_ABBR};

/// Dropdown entry for the user picker on the chart pages.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UserInfo {
    pub user_id: i64,
    pub name: String,
    pub avatar: String,
}

/// Rows of the total-presence table. The header row carries the column
/// labels the chart consumes; both variants serialize as plain JSON arrays.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TotalRow {
    Header(&'static str, &'static str),
    Day(&'static str, i64),
}

/// Users present in both the presence log and the intranet feed, sorted by
/// id. Users the feed does not know are left out of the dropdown.
pub fn list_users(config: &AppConfig) -> Result<Vec<UserInfo>, AppError> {
    let data = presence::load(&config.data_csv)?;
    let directory = directory::load(&config.data_xml)?;

    let mut users: Vec<UserInfo> = data
        .keys()
        .filter_map(|user_id| {
            directory.get(&user_id.to_string()).map(|entry| UserInfo {
                user_id: *user_id,
                name: entry.name.clone(),
                avatar: entry.avatar_url.clone(),
            })
        })
        .collect();
    users.sort_by_key(|user| user.user_id);
    Ok(users)
}

/// Mean presence time per weekday for one user, Monday first. Unknown users
/// get an empty list, not an error.
pub fn mean_duration_by_weekday(
    config: &AppConfig,
    user_id: Option<i64>,
) -> Result<Vec<(&'static str, f64)>, AppError> {
    let data = presence::load(&config.data_csv)?;
    let Some(days) = user_id.and_then(|id| data.get(&id)) else {
        log::debug!("user {user_id:?} not found");
        return Ok(Vec::new());
    };

    let weekdays = stats::group_by_weekday(days);
    Ok(DAY_ABBR
        .iter()
        .zip(&weekdays)
        .map(|(label, durations)| (*label, stats::mean(durations)))
        .collect())
}

/// Total presence time per weekday for one user, preceded by a header row.
pub fn total_duration_by_weekday(
    config: &AppConfig,
    user_id: Option<i64>,
) -> Result<Vec<TotalRow>, AppError> {
    let data = presence::load(&config.data_csv)?;
    let Some(days) = user_id.and_then(|id| data.get(&id)) else {
        log::debug!("user {user_id:?} not found");
        return Ok(Vec::new());
    };

    let weekdays = stats::group_by_weekday(days);
    let mut rows = vec![TotalRow::Header("Weekday", "Presence (s)")];
    rows.extend(
        DAY_ABBR
            .iter()
            .zip(&weekdays)
            .map(|(label, durations)| TotalRow::Day(*label, durations.iter().sum())),
    );
    Ok(rows)
}

/// Mean arrival and leave second-of-day per weekday for one user.
pub fn mean_start_end_by_weekday(
    config: &AppConfig,
    user_id: Option<i64>,
) -> Result<Vec<(&'static str, i64, i64)>, AppError> {
    let data = presence::load(&config.data_csv)?;
    let Some(days) = user_id.and_then(|id| data.get(&id)) else {
        log::debug!("user {user_id:?} not found");
        return Ok(Vec::new());
    };

    let weekdays = stats::group_by_weekday_start_end(days);
    Ok(DAY_ABBR
        .iter()
        .zip(&weekdays)
        .map(|(label, mean)| (*label, mean.start, mean.end))
        .collect())
}
