//! Domain error mapping to HTML problem pages
//!
//! Problems keep the RFC-9457 fields (type, title, status, detail) and are
//! rendered as an HTML page rather than JSON.

use super::views;
use crate::contract::OwnerError;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Problem details for a failed page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// A URI reference that identifies the problem type
    pub type_uri: String,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// The HTTP status code
    pub status: u16,

    /// A human-readable explanation specific to this occurrence
    pub detail: Option<String>,
}

impl Problem {
    /// Create a new problem
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            type_uri: format!("https://httpstatuses.io/{}", status.as_u16()),
            title: title.into(),
            status: status.as_u16(),
            detail: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Html(views::problem(&self).into_string())).into_response()
    }
}

/// Map domain errors to problem pages
pub fn map_domain_error(error: OwnerError) -> Problem {
    match error {
        OwnerError::NotFound { resource, id } => {
            Problem::new(StatusCode::NOT_FOUND, format!("{} Not Found", capitalize(&resource)))
                .with_detail(format!("{} with id '{}' was not found", resource, id))
        }

        OwnerError::Internal => Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            .with_detail("An unexpected error occurred"),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
