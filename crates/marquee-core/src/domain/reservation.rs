use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reservation entity - links one guest to one movie showing.
///
/// Both references are required and cascade on delete: removing a guest or
/// a movie removes every reservation pointing at it. Duplicate bookings for
/// the same guest/movie pair are allowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub guest_id: Uuid,
    pub movie_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Create a new reservation for a guest and a movie showing.
    pub fn new(guest_id: Uuid, movie_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            guest_id,
            movie_id,
            created_at: now,
            updated_at: now,
        }
    }
}
