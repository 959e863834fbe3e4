//! Endpoint scenario tests, run against the in-memory store.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use uuid::Uuid;

use marquee_core::ports::{PasswordService, TokenService};
use marquee_infra::auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
use marquee_shared::dto::{
    AuthResponse, GuestResponse, MovieResponse, PostResponse, ReservationResponse, UserResponse,
};

use crate::state::AppState;

fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-key".to_string(),
        expiration_hours: 1,
        issuer: "test-issuer".to_string(),
    }
}

macro_rules! test_app {
    () => {{
        let state = AppState::in_memory();
        let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(test_jwt_config()));
        let password_service: Arc<dyn PasswordService> = Arc::new(Argon2PasswordService::new());
        test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(token_service))
                .app_data(web::Data::new(password_service))
                .configure(super::configure_routes),
        )
        .await
    }};
}

#[actix_web::test]
async fn test_health_check() {
    let app = test_app!();

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request())
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    // Test state carries no database handle, so the in-memory store reports.
    assert_eq!(body["store"], "memory");
}

#[actix_web::test]
async fn test_guest_create_retrieve_round_trip() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/guests")
            .set_json(serde_json::json!({"name": "Omar", "mobile": "12345"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: GuestResponse = test::read_body_json(resp).await;
    assert_eq!(created.name, "Omar");
    assert_eq!(created.mobile, "12345");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/guests/{}", created.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: GuestResponse = test::read_body_json(resp).await;
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Omar");
    assert_eq!(fetched.mobile, "12345");
}

#[actix_web::test]
async fn test_guest_validation_failure_is_bad_request() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/guests")
            .set_json(serde_json::json!({"name": "", "mobile": "12345"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // Over-long mobile is rejected as well.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/guests")
            .set_json(serde_json::json!({"name": "Omar", "mobile": "0123456789012345"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_unknown_guest_id_is_not_found() {
    let app = test_app!();
    let id = Uuid::new_v4();

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/guests/{}", id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/guests/{}", id))
            .set_json(serde_json::json!({"name": "X"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/guests/{}", id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_guest_update_is_idempotent() {
    let app = test_app!();

    let created: GuestResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/guests")
            .set_json(serde_json::json!({"name": "Omar", "mobile": "12345"}))
            .to_request(),
    )
    .await;

    let payload = serde_json::json!({"name": "Omar K", "mobile": "54321"});

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/guests/{}", created.id))
            .set_json(payload.clone())
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::ACCEPTED);
    let first: GuestResponse = test::read_body_json(resp).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/guests/{}", created.id))
            .set_json(payload)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::ACCEPTED);
    let second: GuestResponse = test::read_body_json(resp).await;

    assert_eq!(first.name, second.name);
    assert_eq!(first.mobile, second.mobile);
    assert_eq!(second.name, "Omar K");
    assert_eq!(second.mobile, "54321");
}

#[actix_web::test]
async fn test_deleting_guest_cascades_to_reservations() {
    let app = test_app!();

    let guest: GuestResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/guests")
            .set_json(serde_json::json!({"name": "Sara", "mobile": "999"}))
            .to_request(),
    )
    .await;
    let movie: MovieResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/movies")
            .set_json(serde_json::json!({"hall": "A1", "movie": "Dune"}))
            .to_request(),
    )
    .await;

    for _ in 0..2 {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/reservations")
                .set_json(serde_json::json!({"guest_id": guest.id, "movie_id": movie.id}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/guests/{}", guest.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let reservations: Vec<ReservationResponse> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/reservations")
            .to_request(),
    )
    .await;
    assert!(reservations.is_empty());
}

#[actix_web::test]
async fn test_reservation_with_unknown_references_is_rejected() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/reservations")
            .set_json(serde_json::json!({
                "guest_id": Uuid::new_v4(),
                "movie_id": Uuid::new_v4()
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_findmovie_matches_hall_and_title_exactly() {
    let app = test_app!();

    for (hall, movie) in [("A1", "Dune"), ("A2", "Dune"), ("A1", "Oppenheimer")] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/movies")
                .set_json(serde_json::json!({"hall": hall, "movie": movie}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/findmovie")
            .set_json(serde_json::json!({"hall": "A1", "movie": "Dune"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let found: Vec<MovieResponse> = test::read_body_json(resp).await;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].hall, "A1");
    assert_eq!(found[0].movie, "Dune");

    let empty: Vec<MovieResponse> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/findmovie")
            .set_json(serde_json::json!({"hall": "Z9", "movie": "Dune"}))
            .to_request(),
    )
    .await;
    assert!(empty.is_empty());
}

#[actix_web::test]
async fn test_movie_list_search_filter() {
    let app = test_app!();

    for (hall, movie) in [("A1", "Dune Part Two"), ("A2", "Oppenheimer")] {
        test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/movies")
                .set_json(serde_json::json!({"hall": hall, "movie": movie}))
                .to_request(),
        )
        .await;
    }

    let filtered: Vec<MovieResponse> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/movies?search=Dune")
            .to_request(),
    )
    .await;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].movie, "Dune Part Two");

    // Filtering ignores case.
    let filtered: Vec<MovieResponse> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/movies?search=dune")
            .to_request(),
    )
    .await;
    assert_eq!(filtered.len(), 1);

    let all: Vec<MovieResponse> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/movies").to_request(),
    )
    .await;
    assert_eq!(all.len(), 2);
}

#[actix_web::test]
async fn test_new_reservation_creates_duplicate_guests() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/movies")
            .set_json(serde_json::json!({"hall": "A1", "movie": "Dune"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let booking = serde_json::json!({
        "hall": "A1", "movie": "Dune", "name": "Sara", "mobile": "999"
    });

    for _ in 0..2 {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/new_reservation")
                .set_json(booking.clone())
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // No de-duplication: each booking created its own guest row.
    let guests: Vec<GuestResponse> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/guests").to_request(),
    )
    .await;
    assert_eq!(guests.len(), 2);
    assert!(guests.iter().all(|g| g.name == "Sara"));
    assert_ne!(guests[0].id, guests[1].id);

    let reservations: Vec<ReservationResponse> = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/reservations")
            .to_request(),
    )
    .await;
    assert_eq!(reservations.len(), 2);
}

#[actix_web::test]
async fn test_new_reservation_without_matching_movie_faults() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/new_reservation")
            .set_json(serde_json::json!({
                "hall": "A1", "movie": "Dune", "name": "Sara", "mobile": "999"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn test_register_login_me_flow() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({"email": "omar@example.com", "password": "secret-password"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let registered: AuthResponse = test::read_body_json(resp).await;
    assert!(!registered.access_token.is_empty());

    // Duplicate registration is rejected.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({"email": "omar@example.com", "password": "secret-password"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({"email": "omar@example.com", "password": "secret-password"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let logged_in: AuthResponse = test::read_body_json(resp).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header((
                "Authorization",
                format!("Bearer {}", logged_in.access_token),
            ))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let me: UserResponse = test::read_body_json(resp).await;
    assert_eq!(me.email, "omar@example.com");

    // Wrong password is unauthorized.
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({"email": "omar@example.com", "password": "wrong-password"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_post_mutation_restricted_to_author() {
    let app = test_app!();

    let author: AuthResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({"email": "author@example.com", "password": "secret-password"}))
            .to_request(),
    )
    .await;
    let other: AuthResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({"email": "other@example.com", "password": "secret-password"}))
            .to_request(),
    )
    .await;

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("Authorization", format!("Bearer {}", author.access_token)))
            .set_json(serde_json::json!({"title": "Hello", "body": "First post"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let post: PostResponse = test::read_body_json(resp).await;

    // Anyone may read.
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/posts/{}", post.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    // A different caller may not mutate.
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/posts/{}", post.id))
            .insert_header(("Authorization", format!("Bearer {}", other.access_token)))
            .set_json(serde_json::json!({"title": "Hijacked"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/posts/{}", post.id))
            .insert_header(("Authorization", format!("Bearer {}", other.access_token)))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // The author may.
    let resp = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/api/posts/{}", post.id))
            .insert_header(("Authorization", format!("Bearer {}", author.access_token)))
            .set_json(serde_json::json!({"title": "Edited"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::ACCEPTED);
    let edited: PostResponse = test::read_body_json(resp).await;
    assert_eq!(edited.title, "Edited");
    assert_eq!(edited.body, "First post");

    let resp = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/api/posts/{}", post.id))
            .insert_header(("Authorization", format!("Bearer {}", author.access_token)))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/posts/{}", post.id))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_post_create_requires_authentication() {
    let app = test_app!();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/posts")
            .set_json(serde_json::json!({"title": "Hello", "body": "First post"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
