//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use camcal_domain::error::CalendarError;

/// Maps [`CalendarError`] to an HTTP response.
///
/// The calendar is validated at startup, so a domain error surfacing on the
/// request path means the configuration check was bypassed — a server
/// fault, never a client one.
pub struct PageError(CalendarError);

impl From<CalendarError> for PageError {
    fn from(err: CalendarError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let CalendarError::Validation(err) = &self.0;
        tracing::error!(error = %err, "calendar configuration error");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}
