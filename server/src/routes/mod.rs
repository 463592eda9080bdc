use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::create_security_headers_layer;
use crate::handlers::{
    create_scheme, health_check, participation_form, scheme_form, submit_participation,
};
use crate::state::AppContext;

pub fn create_routes(ctx: AppContext) -> Router {
    let static_files = ServeDir::new(&ctx.config.static_dir);

    Router::new()
        .route("/", get(scheme_form).post(create_scheme))
        .route("/form", get(participation_form).post(submit_participation))
        .route("/health", get(health_check))
        .nest_service("/static", static_files)
        .layer(DefaultBodyLimit::max(ctx.config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer(ctx.config.production))
        .with_state(ctx)
}
