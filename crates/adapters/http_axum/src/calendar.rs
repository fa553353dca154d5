//! The calendar page — SSR of the month/year button grid.

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};

use camcal_domain::page::CalendarPage;

use crate::error::PageError;
use crate::state::AppState;

/// Calendar page template.
#[derive(Template)]
#[template(path = "calendar.html")]
pub struct CalendarTemplate {
    page: CalendarPage,
}

impl IntoResponse for CalendarTemplate {
    fn into_response(self) -> Response {
        Html(self.to_string()).into_response()
    }
}

/// `GET /` — the month/year button grid.
pub async fn index(State(state): State<AppState>) -> Result<CalendarTemplate, PageError> {
    let page = CalendarPage::build(&state.calendar)?;
    Ok(CalendarTemplate { page })
}
