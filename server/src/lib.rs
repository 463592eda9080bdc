//! Scheme registration server.
//!
//! Organizers create a scheme and get back a QR code linking to its
//! participation form; participants submit their details (and optionally a
//! photo) through that form.

pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;

pub use config::Config;
pub use routes::create_routes;
pub use state::AppContext;
pub use store::{MemoryStore, PgStore};
