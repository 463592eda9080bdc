#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use scheme_server::models::NewScheme;
use scheme_server::store::SchemeStore;
use scheme_server::{create_routes, AppContext, Config, MemoryStore};
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

pub const BASE_URL: &str = "http://qr.test:3001";
const BOUNDARY: &str = "scheme-test-boundary";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub static_dir: PathBuf,
    pub upload_dir: PathBuf,
    // Keeps the directory alive for the duration of the test.
    _dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let static_dir = dir.path().join("static");
        let upload_dir = static_dir.join("uploads");

        let config = Config {
            database_url: None,
            base_url: BASE_URL.to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            static_dir: static_dir.clone(),
            upload_dir: upload_dir.clone(),
            max_upload_bytes: 1024 * 1024,
            production: false,
        };

        let store = Arc::new(MemoryStore::new());
        let ctx = AppContext::new(store.clone(), config);
        ctx.ensure_dirs().await.expect("create dirs");

        Self {
            router: create_routes(ctx),
            store,
            static_dir,
            upload_dir,
            _dir: dir,
        }
    }

    pub fn root(&self) -> &Path {
        self._dir.path()
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> Response<Body> {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn post_multipart(&self, uri: &str, body: Vec<u8>) -> Response<Body> {
        let request = Request::post(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    pub async fn seed_scheme(&self, name: &str) -> Uuid {
        self.store
            .create(NewScheme {
                scheme_name: name.to_string(),
                scheme_description: "desc".to_string(),
                start_date: "2024-06-01".to_string(),
                end_date: "2024-08-31".to_string(),
            })
            .await
            .expect("seed scheme")
    }
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub struct Attachment<'a> {
    pub filename: &'a str,
    pub contents: &'a [u8],
}

pub fn multipart_body(fields: &[(&str, &str)], attachment: Option<Attachment<'_>>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some(file) = attachment {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image_upload\"; filename=\"{}\"\r\nContent-Type: image/png\r\n\r\n",
                file.filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(file.contents);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn participant_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Asha Rao"),
        ("email", "asha@example.com"),
        ("mobile", "9876543210"),
        ("vehicle_number", "KA01AB1234"),
    ]
}

/// Decodes the single QR code in a PNG file.
pub fn decode_qr(path: &Path) -> String {
    let image = image::open(path).expect("open QR image").to_luma8();
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        image.width() as usize,
        image.height() as usize,
        |x, y| image.get_pixel(x as u32, y as u32).0[0],
    );
    let grids = prepared.detect_grids();
    assert_eq!(grids.len(), 1, "expected one QR code in {}", path.display());
    grids[0].decode().expect("decode QR").1
}
