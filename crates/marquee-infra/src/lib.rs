//! # Marquee Infrastructure
//!
//! Concrete implementations of the ports defined in `marquee-core`.
//! This crate contains the database repositories and auth services.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL database support via SeaORM; without
//!   it only the in-memory store is available.

pub mod auth;
pub mod database;

// Re-exports - In-Memory
pub use database::{
    DatabaseConnections, InMemoryDatabase, InMemoryGuestRepository, InMemoryMovieRepository,
    InMemoryPostRepository, InMemoryReservationRepository, InMemoryUserRepository,
};

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

// Re-exports - Postgres
#[cfg(feature = "postgres")]
pub use database::{
    PostgresGuestRepository, PostgresMovieRepository, PostgresPostRepository,
    PostgresReservationRepository, PostgresUserRepository,
};
