use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct Yaml<T>(pub T);

impl<T: Serialize> IntoResponse for Yaml<T> {
    fn into_response(self) -> axum::response::Response {
        let yaml = serde_norway::to_string(&self.0);

        match yaml {
            Ok(d) => (
                http::StatusCode::OK,
                [(http::header::CONTENT_TYPE, "application/yaml")],
                d,
            )
                .into_response(),
            Err(e) => (
                http::StatusCode::INTERNAL_SERVER_ERROR,
                e.to_string(),
            )
                .into_response(),
        }
    }
}
