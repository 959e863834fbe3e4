//! Data Transfer Objects - request/response types for the API.
//!
//! The wire representation keeps the original API's field names: the movie
//! title travels as `movie`, even though the domain entity calls it `title`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Guests

/// Request to create a guest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGuestRequest {
    pub name: String,
    pub mobile: String,
}

/// Request to update a guest. Absent fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateGuestRequest {
    pub name: Option<String>,
    pub mobile: Option<String>,
}

/// A guest as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestResponse {
    pub id: Uuid,
    pub name: String,
    pub mobile: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Movies

/// Request to create a movie showing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMovieRequest {
    pub hall: String,
    pub movie: String,
}

/// Request to update a movie showing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMovieRequest {
    pub hall: Option<String>,
    pub movie: Option<String>,
}

/// A movie showing as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieResponse {
    pub id: Uuid,
    pub hall: String,
    pub movie: String,
    pub created_at: DateTime<Utc>,
}

/// Query parameters accepted by the movie list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieListQuery {
    pub search: Option<String>,
}

/// Body of the `findmovie` lookup: exact match on both fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMovieRequest {
    pub hall: String,
    pub movie: String,
}

// ---------------------------------------------------------------------------
// Reservations

/// Request to create a reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    pub guest_id: Uuid,
    pub movie_id: Uuid,
}

/// Request to update a reservation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateReservationRequest {
    pub guest_id: Option<Uuid>,
    pub movie_id: Option<Uuid>,
}

/// A reservation as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub id: Uuid,
    pub guest_id: Uuid,
    pub movie_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Body of the composite reservation operation: identifies a showing by
/// hall and title and books a brand-new guest into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReservationRequest {
    pub hall: String,
    pub movie: String,
    pub name: String,
    pub mobile: String,
}

// ---------------------------------------------------------------------------
// Posts

/// Request to create a post. The author is the authenticated caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
}

/// Request to update a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// A post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Auth

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub email: String,
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response containing a user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Response containing authentication tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}
