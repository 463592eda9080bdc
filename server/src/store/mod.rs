//! Persistence for schemes and participants.
//!
//! Both stores are object-safe traits so the router can hold them as
//! `Arc<dyn ...>` without knowing which backend is in use.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{NewParticipant, NewScheme, Scheme};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("database error")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait SchemeStore: Send + Sync {
    /// Persists a new scheme and returns the identifier assigned to it.
    async fn create(&self, scheme: NewScheme) -> Result<Uuid, StoreError>;

    /// Fetches a scheme, failing with [`StoreError::NotFound`] when no record matches.
    async fn get(&self, id: Uuid) -> Result<Scheme, StoreError>;
}

#[async_trait]
pub trait ParticipantStore: Send + Sync {
    /// Persists a submission unconditionally. Identical submissions produce
    /// separate records.
    async fn create(&self, participant: NewParticipant) -> Result<Uuid, StoreError>;
}
