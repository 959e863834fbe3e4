use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Guest entity - a person booking seats at the cinema.
///
/// Guests are created either directly through the guest resource or as a
/// side effect of the composite reservation flow. The latter never
/// de-duplicates by mobile number, so several rows for the same person are
/// a normal state of the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    pub id: Uuid,
    pub name: String,
    pub mobile: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Guest {
    /// Create a new guest with generated ID and timestamps.
    pub fn new(name: String, mobile: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            mobile,
            created_at: now,
            updated_at: now,
        }
    }
}
