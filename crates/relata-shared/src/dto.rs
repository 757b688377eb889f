//! Data Transfer Objects - request/response types for the API.
//!
//! Output types are dedicated views over the domain entities: what is not a
//! field here cannot be serialized, which is how secret fields such as the
//! password hash stay out of responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use relata_core::domain::{Post, User};

/// Request to create a post attached to a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

/// A user's public information. Deliberately has no password field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub post_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            post_ids: user.post_ids,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// A post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
