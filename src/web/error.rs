use crate::error::ContactError;
use crate::web::views;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

pub type PageResult<T> = Result<T, PageError>;

/// A failed request rendered as an HTML error page.
#[derive(Debug)]
pub struct PageError {
    status: StatusCode,
    detail: String,
}

impl PageError {
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ContactError> for PageError {
    fn from(error: ContactError) -> Self {
        match error {
            ContactError::NotFound(id) => Self::not_found(format!("contact not found: {id}")),
            ContactError::Validation(failure) => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                detail: failure.to_string(),
            },
            ContactError::Store(e) => Self::internal(e.to_string()),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::debug!("Responding {} ({})", self.status, self.detail);

        let page = match self.status {
            StatusCode::NOT_FOUND => views::not_found_page(),
            _ => views::server_error_page(),
        };
        (self.status, Html(page)).into_response()
    }
}
