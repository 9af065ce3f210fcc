use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;
use crate::ws::table::GetStatus;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    app_version: String,
    game_in_progress: bool,
    connections: usize,
    time: String,
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let app_version = env!("CARGO_PKG_VERSION").to_string();

    let now = OffsetDateTime::now_utc();
    let time = now
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let status = app_state
        .table
        .send(GetStatus)
        .await
        .map_err(|e| AppError::internal(ErrorCode::Internal, format!("Game table unavailable: {e}")))?;

    let response = HealthResponse {
        status: "ok".to_string(),
        app_version,
        game_in_progress: status.game_in_progress,
        connections: status.connections,
        time,
    };

    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
