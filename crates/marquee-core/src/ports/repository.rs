use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Guest, Movie, Post, Reservation, User};
use crate::error::RepoError;

/// Generic repository trait defining the canonical CRUD operations.
///
/// Every resource exposes the same five operations; entity-specific query
/// methods live on the per-entity traits below.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// List all entities in store order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Overwrite an existing entity. Fails with `RepoError::NotFound` if the
    /// ID is not present.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with `RepoError::NotFound` if the
    /// ID is not present.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Guest repository.
#[async_trait]
pub trait GuestRepository: BaseRepository<Guest, Uuid> {}

/// Movie repository with lookup methods for the cinema flows.
#[async_trait]
pub trait MovieRepository: BaseRepository<Movie, Uuid> {
    /// Substring search on the title, for the filtered movie list.
    async fn search(&self, term: &str) -> Result<Vec<Movie>, RepoError>;

    /// Exact match on hall and title, for `findmovie` and the composite
    /// reservation flow. Returns every matching row.
    async fn find_by_hall_and_title(
        &self,
        hall: &str,
        title: &str,
    ) -> Result<Vec<Movie>, RepoError>;
}

/// Reservation repository.
#[async_trait]
pub trait ReservationRepository: BaseRepository<Reservation, Uuid> {}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}
