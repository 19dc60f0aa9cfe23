use actix_web::{HttpResponse, web};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::report;

/// GET /api/v1/users - users known to both the presence log and the feed.
pub async fn users(config: web::Data<AppConfig>) -> Result<HttpResponse, AppError> {
    let users = report::list_users(&config)?;
    Ok(HttpResponse::Ok().json(users))
}

/// GET /api/v1/mean_time_weekday/{user_id} - mean presence time per weekday.
pub async fn mean_time_weekday(
    config: web::Data<AppConfig>,
    path: Option<web::Path<i64>>,
) -> Result<HttpResponse, AppError> {
    let rows = report::mean_duration_by_weekday(&config, path.map(|p| p.into_inner()))?;
    Ok(HttpResponse::Ok().json(rows))
}

/// GET /api/v1/presence_weekday/{user_id} - total presence time per weekday.
pub async fn presence_weekday(
    config: web::Data<AppConfig>,
    path: Option<web::Path<i64>>,
) -> Result<HttpResponse, AppError> {
    let rows = report::total_duration_by_weekday(&config, path.map(|p| p.into_inner()))?;
    Ok(HttpResponse::Ok().json(rows))
}

/// GET /api/v1/presence_start_end/{user_id} - mean arrival/leave per weekday.
pub async fn presence_start_end(
    config: web::Data<AppConfig>,
    path: Option<web::Path<i64>>,
) -> Result<HttpResponse, AppError> {
    let rows = report::mean_start_end_by_weekday(&config, path.map(|p| p.into_inner()))?;
    Ok(HttpResponse::Ok().json(rows))
}

/// Configure API v1 routes. The id-less variants answer with an empty list,
/// same as an unknown user.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::get().to(users))
        .route("/mean_time_weekday", web::get().to(mean_time_weekday))
        .route("/mean_time_weekday/{user_id}", web::get().to(mean_time_weekday))
        .route("/presence_weekday", web::get().to(presence_weekday))
        .route("/presence_weekday/{user_id}", web::get().to(presence_weekday))
        .route("/presence_start_end", web::get().to(presence_start_end))
        .route("/presence_start_end/{user_id}", web::get().to(presence_start_end));
}
