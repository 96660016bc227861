use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, header::CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// JSON object body extractor for create endpoints.
///
/// A missing body, a non-JSON content type, `null` or `{}` is rejected with
/// [`ApiError::EmptyBody`] before the handler runs. Fields `T` does not
/// declare are ignored.
pub struct JsonObject<T>(pub T);

impl<S, T> FromRequest<S> for JsonObject<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    // Reading the body needs no state; buffering with `&()` keeps the
    // returned future 'static.
    fn from_request(
        req: Request,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, &());
        async move {
            if !is_json {
                return Err(ApiError::EmptyBody);
            }
            let bytes = bytes.await.map_err(|_| ApiError::MalformedBody)?;
            parse_object(&bytes).map(JsonObject)
        }
    }
}

/// `application/json` or any `+json` media type, parameters ignored.
pub fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Parse a request body that must be a non-empty JSON object.
pub fn parse_object<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::EmptyBody);
    }
    let value: Value = serde_json::from_slice(bytes).map_err(|_| ApiError::MalformedBody)?;
    match value {
        Value::Null => Err(ApiError::EmptyBody),
        Value::Object(ref map) if map.is_empty() => Err(ApiError::EmptyBody),
        Value::Object(_) => serde_json::from_value(value).map_err(|_| ApiError::MalformedBody),
        _ => Err(ApiError::MalformedBody),
    }
}
