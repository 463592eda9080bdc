//! Renders participation links as QR code images.

use std::path::{Path, PathBuf};

use image::{GrayImage, ImageFormat, Luma};
use qrcode::types::QrError;
use qrcode::{EcLevel, QrCode};
use thiserror::Error;
use uuid::Uuid;

use super::uploads::secure_filename;

const DEFAULT_MODULE_PIXELS: u32 = 8;

#[derive(Debug, Error)]
pub enum LinkEncodeError {
    #[error("QR encoding failed: {0}")]
    Encode(#[from] QrError),

    #[error("failed to write QR image: {0}")]
    Write(#[from] image::ImageError),
}

/// Encodes URLs into grayscale QR images. Output is deterministic for a
/// given URL and encoder configuration.
#[derive(Debug, Clone, Copy)]
pub struct LinkEncoder {
    module_pixels: u32,
    ec_level: EcLevel,
}

impl Default for LinkEncoder {
    fn default() -> Self {
        Self {
            module_pixels: DEFAULT_MODULE_PIXELS,
            ec_level: EcLevel::M,
        }
    }
}

impl LinkEncoder {
    pub fn new(module_pixels: u32, ec_level: EcLevel) -> Self {
        Self {
            module_pixels: module_pixels.max(1),
            ec_level,
        }
    }

    pub fn encode(&self, url: &str) -> Result<GrayImage, LinkEncodeError> {
        let code = QrCode::with_error_correction_level(url.as_bytes(), self.ec_level)?;
        let image = code
            .render::<Luma<u8>>()
            .quiet_zone(true)
            .module_dimensions(self.module_pixels, self.module_pixels)
            .build();
        Ok(image)
    }

    /// Writes `image` as PNG, replacing any file already at `path`.
    pub fn save(&self, image: &GrayImage, path: &Path) -> Result<(), LinkEncodeError> {
        image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

/// Link embedded in a scheme's QR code.
pub fn participation_url(base_url: &str, scheme_id: Uuid) -> String {
    format!("{}/form?scheme_id={}", base_url.trim_end_matches('/'), scheme_id)
}

/// Location of a scheme's QR image: `{static_dir}/{scheme_name}.png`.
///
/// Schemes sharing a display name share this path, so a later scheme
/// replaces an earlier one's image. Names that sanitize to nothing fall back
/// to the identifier.
pub fn image_path(static_dir: &Path, scheme_name: &str, scheme_id: Uuid) -> PathBuf {
    let stem = match secure_filename(scheme_name) {
        name if name.is_empty() => scheme_id.to_string(),
        name => name,
    };
    static_dir.join(format!("{stem}.png"))
}
