use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Scheme {
    pub id: Uuid,
    pub scheme_name: String,
    pub scheme_description: String,
    pub start_date: String,
    pub end_date: String,
    pub created_at: DateTime<Utc>,
}

/// Fields submitted by the organizer on the scheme creation form.
///
/// Dates are kept as the submitted text; empty values are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewScheme {
    pub scheme_name: String,
    pub scheme_description: String,
    pub start_date: String,
    pub end_date: String,
}
