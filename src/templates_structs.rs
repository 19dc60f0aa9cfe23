// Template contexts for the Askama chart pages. `active` drives which menu
// item base.html marks as selected.

use askama::Template;

#[derive(Template)]
#[template(path = "presence_weekday.html")]
pub struct PresenceWeekdayTemplate {
    pub active: &'static str,
}

#[derive(Template)]
#[template(path = "presence_mean_time.html")]
pub struct PresenceMeanTimeTemplate {
    pub active: &'static str,
}

#[derive(Template)]
#[template(path = "presence_start_end.html")]
pub struct PresenceStartEndTemplate {
    pub active: &'static str,
}
