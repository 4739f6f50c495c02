//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy. The `AppError` enum is the
//! top-level error type used during startup and by HTTP handlers; the proposal flow has
//! its own narrower errors (`ProposalError`, `LockError`, `TransportError`) because only
//! a small set of failures may ever reach a caller of the coordinator.

pub mod check;
pub mod config;
pub mod lock;
pub mod proposal;
pub mod transport;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::server::{error::config::ConfigError, model::api::ErrorDto};

/// Top-level application error type.
///
/// Aggregates the errors that can occur while bootstrapping the process or serving
/// HTTP requests. Most variants use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Failed to bind or serve the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

/// Boxes the error to keep `AppError` small, as serenity::Error is very large.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

/// Converts application errors into HTTP responses.
///
/// Every variant maps to 500 Internal Server Error. The full error is logged and a
/// generic message is returned to avoid leaking implementation details.
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        InternalServerError(self).into_response()
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
