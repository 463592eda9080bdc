use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ParticipantStore, SchemeStore, StoreError};
use crate::models::{NewParticipant, NewScheme, Participant, Scheme};

/// In-process store used by the test suite and when no `DATABASE_URL` is
/// configured. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    schemes: RwLock<HashMap<Uuid, Scheme>>,
    participants: RwLock<Vec<Participant>>,
    scheme_lookups: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of [`SchemeStore::get`] calls served so far.
    pub fn scheme_lookups(&self) -> u64 {
        self.scheme_lookups.load(Ordering::Relaxed)
    }

    pub async fn schemes(&self) -> Vec<Scheme> {
        let mut schemes: Vec<Scheme> = self.schemes.read().await.values().cloned().collect();
        schemes.sort_by_key(|s| s.created_at);
        schemes
    }

    /// Participants in submission order.
    pub async fn participants(&self) -> Vec<Participant> {
        self.participants.read().await.clone()
    }
}

#[async_trait]
impl SchemeStore for MemoryStore {
    async fn create(&self, scheme: NewScheme) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        let record = Scheme {
            id,
            scheme_name: scheme.scheme_name,
            scheme_description: scheme.scheme_description,
            start_date: scheme.start_date,
            end_date: scheme.end_date,
            created_at: Utc::now(),
        };
        self.schemes.write().await.insert(id, record);
        Ok(id)
    }

    async fn get(&self, id: Uuid) -> Result<Scheme, StoreError> {
        self.scheme_lookups.fetch_add(1, Ordering::Relaxed);
        self.schemes
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl ParticipantStore for MemoryStore {
    async fn create(&self, participant: NewParticipant) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        self.participants.write().await.push(Participant {
            id,
            scheme_id: participant.scheme_id,
            scheme_name: participant.scheme_name,
            name: participant.name,
            email: participant.email,
            mobile: participant.mobile,
            vehicle_number: participant.vehicle_number,
            image_upload: participant.image_upload,
            created_at: Utc::now(),
        });
        Ok(id)
    }
}
