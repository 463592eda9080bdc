use std::io;
use std::path::{Path, PathBuf};

use axum::body::Bytes;
use tracing::{debug, warn};

/// Reduces a client-supplied filename to a safe, flat name.
///
/// Non-ASCII characters are dropped, path separators become word breaks,
/// whitespace runs are joined with `_`, anything outside `[A-Za-z0-9_.-]` is
/// removed and leading or trailing `.`/`_` are stripped. The result may be
/// empty.
pub fn secure_filename(filename: &str) -> String {
    let flattened: String = filename
        .chars()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = flattened.split_whitespace().collect::<Vec<_>>().join("_");

    joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect::<String>()
        .trim_matches(|c: char| c == '.' || c == '_')
        .to_string()
}

/// Writes participant attachments into a single flat directory.
#[derive(Debug, Clone)]
pub struct UploadHandler {
    dir: PathBuf,
}

impl UploadHandler {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn ensure_dir(&self) -> io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Stores an attachment and returns the name it was stored under.
    ///
    /// Returns `None` without touching the disk when no file was attached.
    /// An existing file with the same sanitized name is overwritten.
    pub async fn accept(
        &self,
        declared_filename: &str,
        contents: Bytes,
    ) -> io::Result<Option<String>> {
        if declared_filename.is_empty() {
            return Ok(None);
        }

        let filename = secure_filename(declared_filename);
        if filename.is_empty() {
            warn!(
                declared = %declared_filename,
                "Upload filename has no usable characters, ignoring attachment"
            );
            return Ok(None);
        }

        let path = self.dir.join(&filename);
        tokio::fs::write(&path, &contents).await?;
        debug!(path = %path.display(), bytes = contents.len(), "Stored upload");

        Ok(Some(filename))
    }
}
