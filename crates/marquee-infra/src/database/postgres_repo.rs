//! PostgreSQL repository implementations, one per resource.

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use marquee_core::domain::{Movie, User};
use marquee_core::error::RepoError;
use marquee_core::ports::{
    GuestRepository, MovieRepository, PostRepository, ReservationRepository, UserRepository,
};

use super::entity::guest::Entity as GuestEntity;
use super::entity::movie::{self, Entity as MovieEntity};
use super::entity::post::Entity as PostEntity;
use super::entity::reservation::Entity as ReservationEntity;
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL guest repository.
pub type PostgresGuestRepository = PostgresBaseRepository<GuestEntity>;

/// PostgreSQL movie repository.
pub type PostgresMovieRepository = PostgresBaseRepository<MovieEntity>;

/// PostgreSQL reservation repository.
pub type PostgresReservationRepository = PostgresBaseRepository<ReservationEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

#[async_trait]
impl GuestRepository for PostgresGuestRepository {}

#[async_trait]
impl MovieRepository for PostgresMovieRepository {
    // Case-insensitive substring match on the title.
    async fn search(&self, term: &str) -> Result<Vec<Movie>, RepoError> {
        let result = MovieEntity::find()
            .filter(Expr::col(movie::Column::Title).ilike(format!("%{}%", term)))
            .all(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_hall_and_title(
        &self,
        hall: &str,
        title: &str,
    ) -> Result<Vec<Movie>, RepoError> {
        let result = MovieEntity::find()
            .filter(movie::Column::Hall.eq(hall))
            .filter(movie::Column::Title.eq(title))
            .all(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ReservationRepository for PostgresReservationRepository {}

#[async_trait]
impl PostRepository for PostgresPostRepository {}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask email for logging to avoid PII in logs
        let masked = if let Some(at_pos) = email.find('@') {
            let (local, domain) = email.split_at(at_pos);
            let masked_local = if local.len() > 1 {
                format!("{}***", &local[..1])
            } else {
                "***".to_string()
            };
            format!("{}{}", masked_local, domain)
        } else {
            "***".to_string()
        };
        tracing::debug!(user_email = %masked, "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.db.as_ref())
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}
