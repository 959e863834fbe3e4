//! Reservation resource handlers, plus the composite booking flow.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use uuid::Uuid;

use marquee_core::domain::{Guest, Reservation};
use marquee_shared::dto::{
    CreateReservationRequest, NewReservationRequest, ReservationResponse,
    UpdateReservationRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(reservation: Reservation) -> ReservationResponse {
    ReservationResponse {
        id: reservation.id,
        guest_id: reservation.guest_id,
        movie_id: reservation.movie_id,
        created_at: reservation.created_at,
    }
}

/// GET /api/reservations
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let reservations = state.reservations.find_all().await?;
    let body: Vec<ReservationResponse> = reservations.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/reservations
///
/// Referential integrity is the store's job: a write naming an unknown
/// guest or movie is rejected there and surfaced as a bad request.
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateReservationRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let reservation = state
        .reservations
        .insert(Reservation::new(req.guest_id, req.movie_id))
        .await?;

    Ok(HttpResponse::Created().json(to_response(reservation)))
}

/// GET /api/reservations/{id}
pub async fn retrieve(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let reservation = state
        .reservations
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("reservation {}", id)))?;

    Ok(HttpResponse::Ok().json(to_response(reservation)))
}

/// PUT /api/reservations/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateReservationRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let mut reservation = state
        .reservations
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("reservation {}", id)))?;

    if let Some(guest_id) = req.guest_id {
        reservation.guest_id = guest_id;
    }
    if let Some(movie_id) = req.movie_id {
        reservation.movie_id = movie_id;
    }
    reservation.updated_at = Utc::now();

    let updated = state.reservations.update(reservation).await?;

    Ok(HttpResponse::Accepted().json(to_response(updated)))
}

/// DELETE /api/reservations/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.reservations.delete(id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/new_reservation
///
/// Composite booking: looks up the showing by exact hall/title, creates a
/// brand-new guest (never de-duplicated by mobile), then a reservation
/// linking the two. The two inserts are not wrapped in a transaction, so a
/// failure on the second write leaves the guest row behind. Zero or
/// multiple matching showings is a fault, not a client error.
pub async fn new_reservation(
    state: web::Data<AppState>,
    body: web::Json<NewReservationRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let mut matches = state
        .movies
        .find_by_hall_and_title(&req.hall, &req.movie)
        .await?;
    if matches.len() != 1 {
        return Err(AppError::Internal(format!(
            "expected exactly one movie for hall '{}' and title '{}', found {}",
            req.hall,
            req.movie,
            matches.len()
        )));
    }
    let movie = matches.remove(0);

    let guest = state.guests.insert(Guest::new(req.name, req.mobile)).await?;

    state
        .reservations
        .insert(Reservation::new(guest.id, movie.id))
        .await?;

    tracing::info!(guest_id = %guest.id, movie_id = %movie.id, "Reservation booked");

    Ok(HttpResponse::Created().finish())
}
