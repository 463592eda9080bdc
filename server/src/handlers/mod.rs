use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::utils::response::success;

pub mod participation;
pub mod schemes;

pub use participation::{participation_form, submit_participation};
pub use schemes::{create_scheme, scheme_form};

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "scheme-server",
    };

    success(payload, "Health check successful").into_response()
}
