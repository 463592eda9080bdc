use std::collections::HashMap;

use askama::Template;
use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, Multipart, Query, State},
    http::StatusCode,
    response::{Html, Response},
};
use tracing::info;
use uuid::Uuid;

use crate::models::{NewParticipant, Scheme};
use crate::state::AppContext;
use crate::utils::error::AppError;
use crate::utils::response::plain_text;

const IMAGE_FIELD: &str = "image_upload";

/// `scheme_id` query parameter. Absent reads as empty; when repeated the
/// first value wins.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SchemeQuery {
    pub scheme_id: String,
}

impl From<Vec<(String, String)>> for SchemeQuery {
    fn from(params: Vec<(String, String)>) -> Self {
        let scheme_id = params
            .into_iter()
            .find(|(key, _)| key == "scheme_id")
            .map(|(_, value)| value)
            .unwrap_or_default();
        Self { scheme_id }
    }
}

#[derive(Template)]
#[template(path = "form.html")]
pub struct ParticipationTemplate {
    pub scheme_id: String,
    pub scheme_name: String,
}

pub fn parse_scheme_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::InvalidSchemeIdFormat)
}

async fn load_scheme(ctx: &AppContext, raw_id: &str) -> Result<Scheme, AppError> {
    let scheme_id = parse_scheme_id(raw_id)?;
    Ok(ctx.schemes.get(scheme_id).await?)
}

pub async fn participation_form(
    State(ctx): State<AppContext>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let query = SchemeQuery::from(params);
    let scheme = load_scheme(&ctx, &query.scheme_id).await?;

    let template = ParticipationTemplate {
        scheme_id: scheme.id.to_string(),
        scheme_name: scheme.scheme_name,
    };
    Ok(Html(template.render()?))
}

pub async fn submit_participation(
    State(ctx): State<AppContext>,
    Query(params): Query<Vec<(String, String)>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, AppError> {
    // The scheme is resolved before the body is looked at.
    let query = SchemeQuery::from(params);
    let scheme = load_scheme(&ctx, &query.scheme_id).await?;
    let submission = Submission::read(multipart?).await?;

    let image_upload = match submission.image {
        Some(file) => ctx.uploads.accept(&file.filename, file.contents).await?,
        None => None,
    };

    let participant_id = ctx
        .participants
        .create(NewParticipant {
            scheme_id: scheme.id,
            scheme_name: scheme.scheme_name,
            name: submission.name,
            email: submission.email,
            mobile: submission.mobile,
            vehicle_number: submission.vehicle_number,
            image_upload,
        })
        .await?;
    info!(%participant_id, scheme_id = %scheme.id, "Recorded participant");

    Ok(plain_text(StatusCode::OK, "Details submitted successfully!"))
}

struct UploadedFile {
    filename: String,
    contents: Bytes,
}

struct Submission {
    name: String,
    email: String,
    mobile: String,
    vehicle_number: String,
    image: Option<UploadedFile>,
}

impl Submission {
    /// Collects the multipart body. For repeated fields the first value wins.
    async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut fields: HashMap<String, String> = HashMap::new();
        let mut image = None;

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            if name == IMAGE_FIELD {
                if image.is_none() {
                    let filename = field.file_name().unwrap_or_default().to_owned();
                    let contents = field.bytes().await?;
                    image = Some(UploadedFile { filename, contents });
                }
                continue;
            }

            if !fields.contains_key(&name) {
                let value = field.text().await?;
                fields.insert(name, value);
            }
        }

        let mut take =
            |key: &'static str| fields.remove(key).ok_or(AppError::MissingField(key));

        Ok(Self {
            name: take("name")?,
            email: take("email")?,
            mobile: take("mobile")?,
            vehicle_number: take("vehicle_number")?,
            image,
        })
    }
}
