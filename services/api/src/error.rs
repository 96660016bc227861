use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;

/// API error variants. Every failure leaves the service as `{"message": ...}`
/// with the status from [`ApiError::status`].
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Lookup by id found nothing. Reported as 400 for compatibility with
    /// existing clients.
    #[error("No coincidence")]
    NoCoincidence,
    #[error("data is empty")]
    EmptyBody,
    #[error("malformed JSON body")]
    MalformedBody,
    #[error("No existe el planeta")]
    PlanetNotFound,
    #[error("No existe el personaje")]
    PeopleNotFound,
    #[error("No existe el usuario")]
    UserNotFound,
    #[error("No existe el favorito")]
    FavoriteNotFound,
    /// A write failed and its transaction was rolled back.
    #[error("{0}")]
    Commit(#[source] DbErr),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoCoincidence => "NO_COINCIDENCE",
            Self::EmptyBody => "EMPTY_BODY",
            Self::MalformedBody => "MALFORMED_BODY",
            Self::PlanetNotFound => "PLANET_NOT_FOUND",
            Self::PeopleNotFound => "PEOPLE_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::FavoriteNotFound => "FAVORITE_NOT_FOUND",
            Self::Commit(_) => "COMMIT",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NoCoincidence
            | Self::EmptyBody
            | Self::MalformedBody
            | Self::PlanetNotFound
            | Self::PeopleNotFound
            | Self::UserNotFound => StatusCode::BAD_REQUEST,
            Self::FavoriteNotFound => StatusCode::NOT_FOUND,
            Self::Commit(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // 4xx are expected client errors; TraceLayer already records them.
        let body = match &self {
            Self::Commit(e) => {
                tracing::error!(error = %e, kind = self.kind(), "write rolled back");
                // Raw driver text goes back to the caller as-is.
                serde_json::json!({ "message": [e.to_string()] })
            }
            Self::Internal(e) => {
                tracing::error!(error = %e, kind = self.kind(), "internal error");
                serde_json::json!({ "message": self.to_string() })
            }
            _ => serde_json::json!({ "message": self.to_string() }),
        };
        (status, axum::Json(body)).into_response()
    }
}
