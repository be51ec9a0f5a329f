use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// No authenticated identity where one is required.
    Unauthenticated,
    /// Meeting lookup miss.
    NotFound,
    /// The access resolver said no.
    AccessDenied,
    /// CSRF token missing or wrong.
    Csrf,
    Session(String),
    Template(askama::Error),
    /// An awaited call to the call service or identity provider failed.
    External(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthenticated => write!(f, "Not signed in"),
            AppError::NotFound => write!(f, "Not found"),
            AppError::AccessDenied => write!(f, "Access denied"),
            AppError::Csrf => write!(f, "Invalid or missing CSRF token"),
            AppError::Session(e) => write!(f, "Session error: {e}"),
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::External(e) => write!(f, "External service error: {e}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Unauthenticated => HttpResponse::Unauthorized().body("Not signed in"),
            AppError::NotFound => HttpResponse::NotFound().body("Not Found"),
            AppError::AccessDenied => HttpResponse::Forbidden().body("Access denied"),
            AppError::Csrf => HttpResponse::Forbidden().body("Invalid or missing CSRF token"),
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::External(e.to_string())
    }
}

/// Render an askama template into a 200 HTML response.
pub fn render<T: Template>(tmpl: T) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
