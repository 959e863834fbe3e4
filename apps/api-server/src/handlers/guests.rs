//! Guest resource handlers.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use uuid::Uuid;

use marquee_core::domain::Guest;
use marquee_shared::dto::{CreateGuestRequest, GuestResponse, UpdateGuestRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const NAME_MAX: usize = 30;
const MOBILE_MAX: usize = 15;

fn validate(name: &str, mobile: &str) -> Result<(), AppError> {
    let mut errors = Vec::new();
    if name.is_empty() {
        errors.push("name: must not be empty".to_string());
    } else if name.len() > NAME_MAX {
        errors.push(format!("name: must be at most {} characters", NAME_MAX));
    }
    if mobile.is_empty() {
        errors.push("mobile: must not be empty".to_string());
    } else if mobile.len() > MOBILE_MAX {
        errors.push(format!("mobile: must be at most {} characters", MOBILE_MAX));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

fn to_response(guest: Guest) -> GuestResponse {
    GuestResponse {
        id: guest.id,
        name: guest.name,
        mobile: guest.mobile,
        created_at: guest.created_at,
    }
}

/// GET /api/guests
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let guests = state.guests.find_all().await?;
    let body: Vec<GuestResponse> = guests.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/guests
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreateGuestRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    validate(&req.name, &req.mobile)?;

    let guest = state.guests.insert(Guest::new(req.name, req.mobile)).await?;

    Ok(HttpResponse::Created().json(to_response(guest)))
}

/// GET /api/guests/{id}
pub async fn retrieve(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let guest = state
        .guests
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("guest {}", id)))?;

    Ok(HttpResponse::Ok().json(to_response(guest)))
}

/// PUT /api/guests/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateGuestRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let mut guest = state
        .guests
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("guest {}", id)))?;

    if let Some(name) = req.name {
        guest.name = name;
    }
    if let Some(mobile) = req.mobile {
        guest.mobile = mobile;
    }
    validate(&guest.name, &guest.mobile)?;
    guest.updated_at = Utc::now();

    let updated = state.guests.update(guest).await?;

    Ok(HttpResponse::Accepted().json(to_response(updated)))
}

/// DELETE /api/guests/{id}
///
/// Cascades to the guest's reservations at the store level.
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.guests.delete(id).await?;

    Ok(HttpResponse::NoContent().finish())
}
