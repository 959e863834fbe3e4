//! Post resource handlers.
//!
//! Reads are open; creating requires authentication; updating and deleting
//! are restricted to the post's author.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use uuid::Uuid;

use marquee_core::domain::Post;
use marquee_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const TITLE_MAX: usize = 30;
const BODY_MAX: usize = 500;

fn validate(title: &str, body: &str) -> Result<(), AppError> {
    let mut errors = Vec::new();
    if title.is_empty() {
        errors.push("title: must not be empty".to_string());
    } else if title.len() > TITLE_MAX {
        errors.push(format!("title: must be at most {} characters", TITLE_MAX));
    }
    if body.is_empty() {
        errors.push("body: must not be empty".to_string());
    } else if body.len() > BODY_MAX {
        errors.push(format!("body: must be at most {} characters", BODY_MAX));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        author_id: post.author_id,
        title: post.title,
        body: post.body,
        created_at: post.created_at,
        updated_at: post.updated_at,
    }
}

/// GET /api/posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/posts - the caller becomes the author.
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    validate(&req.title, &req.body)?;

    let post = state
        .posts
        .insert(Post::new(identity.user_id, req.title, req.body))
        .await?;

    Ok(HttpResponse::Created().json(to_response(post)))
}

/// GET /api/posts/{id}
pub async fn retrieve(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {}", id)))?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// PUT /api/posts/{id} - author only.
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let mut post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {}", id)))?;

    if !post.is_author(identity.user_id) {
        return Err(AppError::Forbidden);
    }

    if let Some(title) = req.title {
        post.title = title;
    }
    if let Some(body) = req.body {
        post.body = body;
    }
    validate(&post.title, &post.body)?;
    post.updated_at = Utc::now();

    let updated = state.posts.update(post).await?;

    Ok(HttpResponse::Accepted().json(to_response(updated)))
}

/// DELETE /api/posts/{id} - author only.
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {}", id)))?;

    if !post.is_author(identity.user_id) {
        return Err(AppError::Forbidden);
    }

    state.posts.delete(id).await?;

    Ok(HttpResponse::NoContent().finish())
}
