pub mod link_encoder;
pub mod uploads;

pub use link_encoder::{LinkEncodeError, LinkEncoder};
pub use uploads::{secure_filename, UploadHandler};
