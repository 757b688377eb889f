//! User endpoints: fetch, resolve the stored post ids, and the write path
//! that appends a new post's id to the list.

use actix_web::{HttpResponse, web};

use relata_core::domain::{NewPost, User};
use relata_core::relation::resolve_related;
use relata_shared::dto::{CreatePostRequest, PostResponse, UserResponse};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

async fn fetch_user(state: &AppState, id: i64) -> AppResult<User> {
    state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", id)))
}

/// GET /api/users/{id}
pub async fn get_user(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let user = fetch_user(&state, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// GET /api/users/{id}/posts
///
/// Resolves the user's stored id list. Dangling ids simply shrink the
/// result; they are not an error.
pub async fn get_user_posts(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let user = fetch_user(&state, path.into_inner()).await?;

    let posts = resolve_related(&user.post_ids, state.posts.as_ref()).await?;
    let body: Vec<PostResponse> = posts.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/users/{id}/posts
///
/// Creates the post, then appends its store-assigned id to the user's
/// `post_ids` in a single-row update. Post creation and the list update are
/// deliberately not transactional: the two records have no enforced
/// consistency between them.
pub async fn create_user_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let user = fetch_user(&state, path.into_inner()).await?;

    let req = body.into_inner();
    let post = state.posts.insert(NewPost::new(req.title, req.content)?).await?;

    let mut post_ids = user.post_ids;
    post_ids.push(post.id);
    state.users.set_post_ids(user.id, &post_ids).await?;

    tracing::debug!(user_id = user.id, post_id = post.id, "Attached post to user");

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}
