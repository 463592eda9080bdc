use askama::Template;
use axum::{extract::State, response::Html, Form};
use tracing::info;

use crate::models::NewScheme;
use crate::services::link_encoder::{image_path, participation_url};
use crate::services::LinkEncodeError;
use crate::state::AppContext;
use crate::utils::error::AppError;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate;

#[derive(Template)]
#[template(path = "display_qr.html")]
pub struct DisplayQrTemplate {
    pub scheme_name: String,
    pub img_path: String,
    pub img_src: String,
    pub participation_url: String,
}

pub async fn scheme_form() -> Result<Html<String>, AppError> {
    Ok(Html(HomeTemplate.render()?))
}

pub async fn create_scheme(
    State(ctx): State<AppContext>,
    Form(form): Form<NewScheme>,
) -> Result<Html<String>, AppError> {
    let scheme_name = form.scheme_name.clone();
    let scheme_id = ctx.schemes.create(form).await?;
    info!(%scheme_id, %scheme_name, "Created scheme");

    let url = participation_url(&ctx.config.base_url, scheme_id);
    let path = image_path(&ctx.config.static_dir, &scheme_name, scheme_id);

    let encoder = ctx.encoder;
    let (task_url, task_path) = (url.clone(), path.clone());
    tokio::task::spawn_blocking(move || -> Result<(), LinkEncodeError> {
        let image = encoder.encode(&task_url)?;
        encoder.save(&image, &task_path)
    })
    .await
    .map_err(|e| AppError::InternalServerError(format!("QR code task failed: {e}")))??;

    info!(%scheme_id, path = %path.display(), "Saved scheme QR code");

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let template = DisplayQrTemplate {
        scheme_name,
        img_path: path.display().to_string(),
        img_src: format!("/static/{file_name}"),
        participation_url: url,
    };
    Ok(Html(template.render()?))
}
