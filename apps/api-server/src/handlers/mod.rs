//! HTTP handlers and route configuration.

mod demo;
mod health;
mod users;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Demo surface at the root, like the original app
        .route("/", web::get().to(demo::landing))
        .route("/test", web::get().to(demo::test_posts))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/users")
                        .route("/{id}", web::get().to(users::get_user))
                        .route("/{id}/posts", web::get().to(users::get_user_posts))
                        .route("/{id}/posts", web::post().to(users::create_user_post)),
                ),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use relata_shared::dto::{PostResponse, UserResponse};

    macro_rules! seeded_app {
        () => {{
            let state = AppState::in_memory().await;
            (
                state.clone(),
                test::init_service(
                    App::new()
                        .app_data(web::Data::new(state))
                        .configure(configure_routes),
                )
                .await,
            )
        }};
    }

    #[actix_web::test]
    async fn test_landing_page_renders() {
        let (_state, app) = seeded_app!();

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_health_reports_the_active_backend() {
        let (_state, app) = seeded_app!();

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["backend"], "in-memory");
    }

    #[actix_web::test]
    async fn test_smoke_route_returns_the_two_seeded_posts() {
        let (_state, app) = seeded_app!();

        let req = test::TestRequest::get().uri("/test").to_request();
        let posts: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;

        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(posts[0].title, "Storing Relations as JSON");
        assert_eq!(posts[1].title, "Resolving an Id List");
    }

    #[actix_web::test]
    async fn test_get_user_hides_the_password() {
        let (_state, app) = seeded_app!();

        let req = test::TestRequest::get().uri("/api/users/1").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["email"], "demo@example.com");
        assert_eq!(body["post_ids"], serde_json::json!([1, 2]));
        assert!(body.get("password").is_none());
        assert!(body.get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn test_get_missing_user_is_404() {
        let (_state, app) = seeded_app!();

        let req = test::TestRequest::get().uri("/api/users/99").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_user_posts_resolves_the_stored_id_list() {
        let (_state, app) = seeded_app!();

        let req = test::TestRequest::get().uri("/api/users/1/posts").to_request();
        let posts: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[1].id, 2);
    }

    #[actix_web::test]
    async fn test_user_posts_skips_dangling_ids() {
        let (state, app) = seeded_app!();

        // Point the list at one live post and one id that never existed.
        state.users.set_post_ids(1, &[99, 2]).await.unwrap();

        let req = test::TestRequest::get().uri("/api/users/1/posts").to_request();
        let posts: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 2);
    }

    #[actix_web::test]
    async fn test_create_post_appends_to_the_id_list() {
        let (_state, app) = seeded_app!();

        let req = test::TestRequest::post()
            .uri("/api/users/1/posts")
            .set_json(serde_json::json!({
                "title": "Appended",
                "content": "Created through the write path"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::get().uri("/api/users/1").to_request();
        let user: UserResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(user.post_ids, vec![1, 2, 3]);

        let req = test::TestRequest::get().uri("/api/users/1/posts").to_request();
        let posts: Vec<PostResponse> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[2].title, "Appended");
    }

    #[actix_web::test]
    async fn test_create_post_with_empty_title_is_rejected() {
        let (_state, app) = seeded_app!();

        let req = test::TestRequest::post()
            .uri("/api/users/1/posts")
            .set_json(serde_json::json!({ "title": "", "content": "body" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_create_post_for_missing_user_is_404() {
        let (_state, app) = seeded_app!();

        let req = test::TestRequest::post()
            .uri("/api/users/42/posts")
            .set_json(serde_json::json!({ "title": "T", "content": "c" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
