use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Participant {
    pub id: Uuid,
    pub scheme_id: Uuid,
    /// Copied from the scheme at submission time.
    pub scheme_name: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub vehicle_number: String,
    pub image_upload: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewParticipant {
    pub scheme_id: Uuid,
    pub scheme_name: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub vehicle_number: String,
    pub image_upload: Option<String>,
}
