use std::io;
use std::sync::Arc;

use crate::config::Config;
use crate::services::{LinkEncoder, UploadHandler};
use crate::store::{ParticipantStore, SchemeStore};

/// Everything a request handler needs, built once at startup and handed to
/// the router as state.
#[derive(Clone)]
pub struct AppContext {
    pub schemes: Arc<dyn SchemeStore>,
    pub participants: Arc<dyn ParticipantStore>,
    pub encoder: LinkEncoder,
    pub uploads: UploadHandler,
    pub config: Arc<Config>,
}

impl AppContext {
    /// Builds a context where one backend serves both stores.
    pub fn new<S>(store: Arc<S>, config: Config) -> Self
    where
        S: SchemeStore + ParticipantStore + 'static,
    {
        Self {
            schemes: store.clone(),
            participants: store,
            encoder: LinkEncoder::default(),
            uploads: UploadHandler::new(config.upload_dir.clone()),
            config: Arc::new(config),
        }
    }

    /// Creates the static and upload directories if they are missing.
    pub async fn ensure_dirs(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.config.static_dir).await?;
        self.uploads.ensure_dir().await
    }
}
