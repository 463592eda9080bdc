use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{ParticipantStore, SchemeStore, StoreError};
use crate::models::{NewParticipant, NewScheme, Scheme};

pub const SQL_INSERT_SCHEME: &str = r#"
INSERT INTO schemes (scheme_name, scheme_description, start_date, end_date)
VALUES ($1, $2, $3, $4)
RETURNING id
"#;

pub const SQL_LOAD_SCHEME: &str = r#"
SELECT id, scheme_name, scheme_description, start_date, end_date, created_at
FROM schemes
WHERE id = $1
"#;

pub const SQL_INSERT_PARTICIPANT: &str = r#"
INSERT INTO participants (scheme_id, scheme_name, name, email, mobile, vehicle_number, image_upload)
VALUES ($1, $2, $3, $4, $5, $6, $7)
RETURNING id
"#;

/// PostgreSQL-backed store. Identifiers come from the column default
/// `gen_random_uuid()`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchemeStore for PgStore {
    async fn create(&self, scheme: NewScheme) -> Result<Uuid, StoreError> {
        let id = sqlx::query_scalar::<_, Uuid>(SQL_INSERT_SCHEME)
            .bind(scheme.scheme_name)
            .bind(scheme.scheme_description)
            .bind(scheme.start_date)
            .bind(scheme.end_date)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn get(&self, id: Uuid) -> Result<Scheme, StoreError> {
        sqlx::query_as::<_, Scheme>(SQL_LOAD_SCHEME)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound)
    }
}

#[async_trait]
impl ParticipantStore for PgStore {
    async fn create(&self, participant: NewParticipant) -> Result<Uuid, StoreError> {
        let id = sqlx::query_scalar::<_, Uuid>(SQL_INSERT_PARTICIPANT)
            .bind(participant.scheme_id)
            .bind(participant.scheme_name)
            .bind(participant.name)
            .bind(participant.email)
            .bind(participant.mobile)
            .bind(participant.vehicle_number)
            .bind(participant.image_upload)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }
}
