//! Application state - shared across all handlers.

use std::sync::Arc;

use marquee_core::ports::{
    GuestRepository, MovieRepository, PostRepository, ReservationRepository, UserRepository,
};
use marquee_infra::database::{DatabaseConfig, DatabaseConnections, InMemoryDatabase};
use marquee_infra::database::{
    InMemoryGuestRepository, InMemoryMovieRepository, InMemoryPostRepository,
    InMemoryReservationRepository, InMemoryUserRepository,
};

#[cfg(feature = "postgres")]
use marquee_infra::database::{
    PostgresGuestRepository, PostgresMovieRepository, PostgresPostRepository,
    PostgresReservationRepository, PostgresUserRepository,
};

/// Shared application state: one repository handle per resource.
#[derive(Clone)]
pub struct AppState {
    pub guests: Arc<dyn GuestRepository>,
    pub movies: Arc<dyn MovieRepository>,
    pub reservations: Arc<dyn ReservationRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub users: Arc<dyn UserRepository>,
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => {
                        let conn = Arc::new(connections);
                        let state = Self {
                            guests: Arc::new(PostgresGuestRepository::new(conn.main.clone())),
                            movies: Arc::new(PostgresMovieRepository::new(conn.main.clone())),
                            reservations: Arc::new(PostgresReservationRepository::new(
                                conn.main.clone(),
                            )),
                            posts: Arc::new(PostgresPostRepository::new(conn.main.clone())),
                            users: Arc::new(PostgresUserRepository::new(conn.main.clone())),
                            db: Some(conn),
                        };
                        tracing::info!("Application state initialized (postgres)");
                        return state;
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repositories");
        }

        Self::in_memory()
    }

    /// State backed entirely by the in-memory store. Also used by the
    /// endpoint tests.
    pub fn in_memory() -> Self {
        let db = InMemoryDatabase::new();
        Self {
            guests: Arc::new(InMemoryGuestRepository::new(db.clone())),
            movies: Arc::new(InMemoryMovieRepository::new(db.clone())),
            reservations: Arc::new(InMemoryReservationRepository::new(db.clone())),
            posts: Arc::new(InMemoryPostRepository::new(db.clone())),
            users: Arc::new(InMemoryUserRepository::new(db)),
            db: None,
        }
    }
}
