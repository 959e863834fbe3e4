//! Database connection management and repository implementations.

mod connections;

pub mod memory;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::{DatabaseConfig, DatabaseConnections};
pub use memory::{
    InMemoryDatabase, InMemoryGuestRepository, InMemoryMovieRepository, InMemoryPostRepository,
    InMemoryReservationRepository, InMemoryUserRepository,
};

#[cfg(feature = "postgres")]
pub use postgres_repo::{
    PostgresGuestRepository, PostgresMovieRepository, PostgresPostRepository,
    PostgresReservationRepository, PostgresUserRepository,
};
