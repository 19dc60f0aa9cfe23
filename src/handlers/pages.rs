use actix_web::HttpResponse;

use crate::errors::{AppError, render};
use crate::templates_structs::{
    PresenceMeanTimeTemplate, PresenceStartEndTemplate, PresenceWeekdayTemplate,
};

/// GET / - redirect to the total presence view.
pub async fn index() -> HttpResponse {
    HttpResponse::Found()
        .insert_header(("Location", "/presence_weekday.html"))
        .finish()
}

/// GET /presence_weekday.html
pub async fn presence_weekday() -> Result<HttpResponse, AppError> {
    render(PresenceWeekdayTemplate { active: "weekday" })
}

/// GET /presence_mean_time.html
pub async fn presence_mean_time() -> Result<HttpResponse, AppError> {
    render(PresenceMeanTimeTemplate { active: "mean_time" })
}

/// GET /presence_start_end.html
pub async fn presence_start_end() -> Result<HttpResponse, AppError> {
    render(PresenceStartEndTemplate { active: "start_end" })
}
