use axum::{
    Json,
    extract::FromRequestParts,
    response::{IntoResponse, Response},
};
use http::{StatusCode, request::Parts};
use serde_json::json;

/// The raw bearer token from the `Authorization` header. Verification
/// happens against the token service in the handler; this extractor
/// only rejects requests that carry no usable token at all.
pub struct BearerToken(pub String);

pub enum BearerTokenRejection {
    NoToken,
    CantParseToken(String),
}

impl IntoResponse for BearerTokenRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            match self {
                BearerTokenRejection::NoToken => Json(json!({
                    "message": "No token provided",
                })),
                BearerTokenRejection::CantParseToken(e) => Json(json!({
                    "message": format!("Can't parse bearer token: {}", e),
                })),
            },
        )
            .into_response()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for BearerToken {
    type Rejection = BearerTokenRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        _: &S,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(http::header::AUTHORIZATION)
            .ok_or(BearerTokenRejection::NoToken)?;

        let header = header.to_str().map_err(|e| {
            BearerTokenRejection::CantParseToken(e.to_string())
        })?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(|| {
                BearerTokenRejection::CantParseToken(
                    "expected 'Bearer <token>'".to_string(),
                )
            })?
            .trim();

        if token.is_empty() {
            return Err(BearerTokenRejection::NoToken);
        }

        Ok(BearerToken(token.to_string()))
    }
}
