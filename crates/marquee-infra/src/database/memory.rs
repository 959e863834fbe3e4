//! In-memory store - used as fallback when no database is configured.
//!
//! One shared `InMemoryDatabase` holds every table behind async RwLocks so
//! the cascade rules of the relational schema can be mirrored across
//! entities. Data is lost on process restart.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use marquee_core::domain::{Guest, Movie, Post, Reservation, User};
use marquee_core::error::RepoError;
use marquee_core::ports::{
    BaseRepository, GuestRepository, MovieRepository, PostRepository, ReservationRepository,
    UserRepository,
};

/// All in-memory tables, shared by the per-resource repository handles.
#[derive(Default)]
pub struct InMemoryDatabase {
    guests: RwLock<HashMap<Uuid, Guest>>,
    movies: RwLock<HashMap<Uuid, Movie>>,
    reservations: RwLock<HashMap<Uuid, Reservation>>,
    posts: RwLock<HashMap<Uuid, Post>>,
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryDatabase {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

macro_rules! in_memory_repository {
    ($repo:ident, $entity:ty, $table:ident) => {
        pub struct $repo {
            pub(crate) db: Arc<InMemoryDatabase>,
        }

        impl $repo {
            pub fn new(db: Arc<InMemoryDatabase>) -> Self {
                Self { db }
            }
        }

        #[async_trait]
        impl BaseRepository<$entity, Uuid> for $repo {
            async fn find_all(&self) -> Result<Vec<$entity>, RepoError> {
                let table = self.db.$table.read().await;
                Ok(table.values().cloned().collect())
            }

            async fn find_by_id(&self, id: Uuid) -> Result<Option<$entity>, RepoError> {
                let table = self.db.$table.read().await;
                Ok(table.get(&id).cloned())
            }

            // The reference check runs while the table write lock is held:
            // a concurrent cascade cannot slip in between the check and the
            // write and strand a row pointing at a deleted parent.
            async fn insert(&self, entity: $entity) -> Result<$entity, RepoError> {
                let mut table = self.db.$table.write().await;
                self.check_references(&entity).await?;
                table.insert(entity.id, entity.clone());
                Ok(entity)
            }

            async fn update(&self, entity: $entity) -> Result<$entity, RepoError> {
                let mut table = self.db.$table.write().await;
                self.check_references(&entity).await?;
                if !table.contains_key(&entity.id) {
                    return Err(RepoError::NotFound);
                }
                table.insert(entity.id, entity.clone());
                Ok(entity)
            }

            async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
                {
                    let mut table = self.db.$table.write().await;
                    if table.remove(&id).is_none() {
                        return Err(RepoError::NotFound);
                    }
                }
                self.cascade(id).await;
                Ok(())
            }
        }
    };
}

in_memory_repository!(InMemoryGuestRepository, Guest, guests);
in_memory_repository!(InMemoryMovieRepository, Movie, movies);
in_memory_repository!(InMemoryReservationRepository, Reservation, reservations);
in_memory_repository!(InMemoryPostRepository, Post, posts);
in_memory_repository!(InMemoryUserRepository, User, users);

impl InMemoryGuestRepository {
    async fn check_references(&self, _guest: &Guest) -> Result<(), RepoError> {
        Ok(())
    }

    /// Removing a guest removes its reservations, like the FK cascade.
    async fn cascade(&self, guest_id: Uuid) {
        let mut reservations = self.db.reservations.write().await;
        reservations.retain(|_, r| r.guest_id != guest_id);
    }
}

impl InMemoryMovieRepository {
    async fn check_references(&self, _movie: &Movie) -> Result<(), RepoError> {
        Ok(())
    }

    /// Removing a movie removes its reservations, like the FK cascade.
    async fn cascade(&self, movie_id: Uuid) {
        let mut reservations = self.db.reservations.write().await;
        reservations.retain(|_, r| r.movie_id != movie_id);
    }
}

impl InMemoryReservationRepository {
    /// Reject writes whose guest or movie does not exist, like the store's
    /// foreign key constraints.
    async fn check_references(&self, reservation: &Reservation) -> Result<(), RepoError> {
        let guests = self.db.guests.read().await;
        if !guests.contains_key(&reservation.guest_id) {
            return Err(RepoError::Constraint(
                "referenced guest does not exist".to_string(),
            ));
        }
        let movies = self.db.movies.read().await;
        if !movies.contains_key(&reservation.movie_id) {
            return Err(RepoError::Constraint(
                "referenced movie does not exist".to_string(),
            ));
        }
        Ok(())
    }

    async fn cascade(&self, _id: Uuid) {}
}

impl InMemoryPostRepository {
    async fn check_references(&self, post: &Post) -> Result<(), RepoError> {
        let users = self.db.users.read().await;
        if !users.contains_key(&post.author_id) {
            return Err(RepoError::Constraint(
                "referenced user does not exist".to_string(),
            ));
        }
        Ok(())
    }

    async fn cascade(&self, _id: Uuid) {}
}

impl InMemoryUserRepository {
    async fn check_references(&self, _user: &User) -> Result<(), RepoError> {
        Ok(())
    }

    /// Removing a user removes their posts, like the FK cascade.
    async fn cascade(&self, user_id: Uuid) {
        let mut posts = self.db.posts.write().await;
        posts.retain(|_, p| p.author_id != user_id);
    }
}

#[async_trait]
impl GuestRepository for InMemoryGuestRepository {}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn search(&self, term: &str) -> Result<Vec<Movie>, RepoError> {
        // Matches the ILIKE semantics of the relational store.
        let term = term.to_lowercase();
        let movies = self.db.movies.read().await;
        Ok(movies
            .values()
            .filter(|m| m.title.to_lowercase().contains(&term))
            .cloned()
            .collect())
    }

    async fn find_by_hall_and_title(
        &self,
        hall: &str,
        title: &str,
    ) -> Result<Vec<Movie>, RepoError> {
        let movies = self.db.movies.read().await;
        Ok(movies
            .values()
            .filter(|m| m.hall == hall && m.title == title)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {}

#[async_trait]
impl PostRepository for InMemoryPostRepository {}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let users = self.db.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_find_guest() {
        let db = InMemoryDatabase::new();
        let repo = InMemoryGuestRepository::new(db);

        let guest = Guest::new("Omar".to_string(), "12345".to_string());
        let saved = repo.insert(guest.clone()).await.unwrap();
        assert_eq!(saved.id, guest.id);

        let found = repo.find_by_id(guest.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Omar");
        assert_eq!(found.mobile, "12345");
    }

    #[tokio::test]
    async fn test_update_missing_guest_is_not_found() {
        let db = InMemoryDatabase::new();
        let repo = InMemoryGuestRepository::new(db);

        let guest = Guest::new("Nobody".to_string(), "000".to_string());
        let result = repo.update(guest).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_guest_cascades_to_reservations() {
        let db = InMemoryDatabase::new();
        let guests = InMemoryGuestRepository::new(db.clone());
        let movies = InMemoryMovieRepository::new(db.clone());
        let reservations = InMemoryReservationRepository::new(db);

        let guest = guests
            .insert(Guest::new("Sara".to_string(), "999".to_string()))
            .await
            .unwrap();
        let movie = movies
            .insert(Movie::new("A1".to_string(), "Dune".to_string()))
            .await
            .unwrap();

        reservations
            .insert(Reservation::new(guest.id, movie.id))
            .await
            .unwrap();
        reservations
            .insert(Reservation::new(guest.id, movie.id))
            .await
            .unwrap();
        assert_eq!(reservations.find_all().await.unwrap().len(), 2);

        guests.delete(guest.id).await.unwrap();
        assert!(reservations.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_movie_cascades_to_reservations() {
        let db = InMemoryDatabase::new();
        let guests = InMemoryGuestRepository::new(db.clone());
        let movies = InMemoryMovieRepository::new(db.clone());
        let reservations = InMemoryReservationRepository::new(db);

        let guest = guests
            .insert(Guest::new("Sara".to_string(), "999".to_string()))
            .await
            .unwrap();
        let movie = movies
            .insert(Movie::new("A1".to_string(), "Dune".to_string()))
            .await
            .unwrap();
        reservations
            .insert(Reservation::new(guest.id, movie.id))
            .await
            .unwrap();

        movies.delete(movie.id).await.unwrap();
        assert!(reservations.find_all().await.unwrap().is_empty());
        // The guest survives the cascade.
        assert!(guests.find_by_id(guest.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_reservation_requires_existing_guest_and_movie() {
        let db = InMemoryDatabase::new();
        let reservations = InMemoryReservationRepository::new(db);

        let result = reservations
            .insert(Reservation::new(Uuid::new_v4(), Uuid::new_v4()))
            .await;
        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_find_by_hall_and_title_exact_match() {
        let db = InMemoryDatabase::new();
        let movies = InMemoryMovieRepository::new(db);

        movies
            .insert(Movie::new("A1".to_string(), "Dune".to_string()))
            .await
            .unwrap();
        movies
            .insert(Movie::new("A2".to_string(), "Dune".to_string()))
            .await
            .unwrap();

        let found = movies.find_by_hall_and_title("A1", "Dune").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].hall, "A1");

        let missing = movies.find_by_hall_and_title("B9", "Dune").await.unwrap();
        assert!(missing.is_empty());
    }

    #[tokio::test]
    async fn test_search_matches_title_substring() {
        let db = InMemoryDatabase::new();
        let movies = InMemoryMovieRepository::new(db);

        movies
            .insert(Movie::new("A1".to_string(), "Dune Part Two".to_string()))
            .await
            .unwrap();
        movies
            .insert(Movie::new("A2".to_string(), "Oppenheimer".to_string()))
            .await
            .unwrap();

        let found = movies.search("Dune").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Dune Part Two");
    }

    #[tokio::test]
    async fn test_search_ignores_case() {
        let db = InMemoryDatabase::new();
        let movies = InMemoryMovieRepository::new(db);

        movies
            .insert(Movie::new("A1".to_string(), "Dune Part Two".to_string()))
            .await
            .unwrap();

        let found = movies.search("dune").await.unwrap();
        assert_eq!(found.len(), 1);

        let found = movies.search("PART").await.unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_guest_delete_never_strands_reservation() {
        // Racing a reservation insert against the guest's delete must end
        // with either the insert rejected or the reservation cascaded away.
        for _ in 0..200 {
            let db = InMemoryDatabase::new();
            let guests = InMemoryGuestRepository::new(db.clone());
            let movies = InMemoryMovieRepository::new(db.clone());
            let reservations = InMemoryReservationRepository::new(db);

            let guest = guests
                .insert(Guest::new("Sara".to_string(), "999".to_string()))
                .await
                .unwrap();
            let movie = movies
                .insert(Movie::new("A1".to_string(), "Dune".to_string()))
                .await
                .unwrap();

            let (deleted, inserted) = tokio::join!(
                guests.delete(guest.id),
                reservations.insert(Reservation::new(guest.id, movie.id)),
            );
            deleted.unwrap();
            // The insert may lose the race and get a constraint rejection.
            let _ = inserted;

            let remaining_guests = guests.find_all().await.unwrap();
            for reservation in reservations.find_all().await.unwrap() {
                assert!(
                    remaining_guests
                        .iter()
                        .any(|g| g.id == reservation.guest_id),
                    "reservation references a deleted guest"
                );
            }
        }
    }
}
