//! Movie resource handlers, plus the `findmovie` lookup.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use uuid::Uuid;

use marquee_core::domain::Movie;
use marquee_shared::dto::{
    CreateMovieRequest, FindMovieRequest, MovieListQuery, MovieResponse, UpdateMovieRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const HALL_MAX: usize = 15;
const TITLE_MAX: usize = 50;

fn validate(hall: &str, title: &str) -> Result<(), AppError> {
    let mut errors = Vec::new();
    if hall.is_empty() {
        errors.push("hall: must not be empty".to_string());
    } else if hall.len() > HALL_MAX {
        errors.push(format!("hall: must be at most {} characters", HALL_MAX));
    }
    if title.is_empty() {
        errors.push("movie: must not be empty".to_string());
    } else if title.len() > TITLE_MAX {
        errors.push(format!("movie: must be at most {} characters", TITLE_MAX));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

fn to_response(movie: Movie) -> MovieResponse {
    MovieResponse {
        id: movie.id,
        hall: movie.hall,
        movie: movie.title,
        created_at: movie.created_at,
    }
}

/// GET /api/movies
///
/// Accepts an optional `?search=` substring filter on the title.
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<MovieListQuery>,
) -> AppResult<HttpResponse> {
    let movies = match &query.search {
        Some(term) => state.movies.search(term).await?,
        None => state.movies.find_all().await?,
    };
    let body: Vec<MovieResponse> = movies.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/movies
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateMovieRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    validate(&req.hall, &req.movie)?;

    let movie = state.movies.insert(Movie::new(req.hall, req.movie)).await?;

    Ok(HttpResponse::Created().json(to_response(movie)))
}

/// GET /api/movies/{id}
pub async fn retrieve(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let movie = state
        .movies
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("movie {}", id)))?;

    Ok(HttpResponse::Ok().json(to_response(movie)))
}

/// PUT /api/movies/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateMovieRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let mut movie = state
        .movies
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("movie {}", id)))?;

    if let Some(hall) = req.hall {
        movie.hall = hall;
    }
    if let Some(title) = req.movie {
        movie.title = title;
    }
    validate(&movie.hall, &movie.title)?;
    movie.updated_at = Utc::now();

    let updated = state.movies.update(movie).await?;

    Ok(HttpResponse::Accepted().json(to_response(updated)))
}

/// DELETE /api/movies/{id}
///
/// Cascades to the movie's reservations at the store level.
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.movies.delete(id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// GET /api/findmovie
///
/// Exact match on hall and title, carried in the request body. Returns the
/// matching showings, possibly empty.
pub async fn find_movie(
    state: web::Data<AppState>,
    body: web::Json<FindMovieRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let movies = state
        .movies
        .find_by_hall_and_title(&req.hall, &req.movie)
        .await?;
    let body: Vec<MovieResponse> = movies.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}
