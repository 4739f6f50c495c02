use axum::{extract::State, Json};
use sea_orm::DatabaseConnection;

use crate::server::{error::AppError, model::api::HealthDto, state::AppState};

/// Health probe.
///
/// Reports healthy once the database answers a ping.
///
/// # Returns
/// - `200 OK` - `{"status": "ok"}`
/// - `500 Internal Server Error` - The database is unreachable
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthDto>, AppError> {
    ping(&state.db).await?;

    Ok(Json(HealthDto {
        status: "ok".to_string(),
    }))
}

async fn ping(db: &DatabaseConnection) -> Result<(), AppError> {
    db.ping().await?;

    Ok(())
}
