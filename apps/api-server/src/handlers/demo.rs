//! The demo surface: static landing page plus the literal smoke-test route.

use actix_web::{HttpResponse, http::header::ContentType, web};

use relata_shared::dto::PostResponse;

use crate::error::AppResult;
use crate::state::AppState;

const LANDING_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Relata</title>
</head>
<body>
    <h1>Relata</h1>
    <p>JSON-column relations demo. A user stores an array of post ids in a
    JSON column; the API resolves that array into the posts that exist.</p>
    <ul>
        <li><a href="/test">/test</a> &mdash; posts with ids 1 and 2</li>
        <li><a href="/api/users/1">/api/users/1</a> &mdash; the demo user</li>
        <li><a href="/api/users/1/posts">/api/users/1/posts</a> &mdash; the user's resolved posts</li>
    </ul>
</body>
</html>
"#;

/// GET / - static landing page.
pub async fn landing() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(LANDING_HTML)
}

/// The id set queried by the smoke-test route; matches the seeded posts.
const SMOKE_TEST_IDS: [i64; 2] = [1, 2];

/// GET /test - returns the posts with ids 1 and 2 as a JSON array.
///
/// A literal smoke test over the seeded data, not a general API.
pub async fn test_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_by_ids(&SMOKE_TEST_IDS).await?;
    let body: Vec<PostResponse> = posts.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(body))
}
