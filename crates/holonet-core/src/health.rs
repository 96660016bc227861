use axum::http::StatusCode;
use sea_orm::DatabaseConnection;

/// Handler for `GET /healthz` — liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe against the database pool.
///
/// Services wrap this in their own `GET /readyz` handler so it can pull the
/// connection out of their state.
pub async fn probe(db: &DatabaseConnection) -> StatusCode {
    match db.ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "database ping failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
