use async_trait::async_trait;

use crate::domain::{NewPost, NewUser, Post, User};
use crate::error::RepoError;

/// Post store - the query capability the relation resolver consumes.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a post; the store assigns the integer identifier.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Fetch a single post by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// Fetch all posts whose id is a member of `ids`.
    ///
    /// Ids with no matching row are simply absent from the result; the
    /// result order is unspecified (callers needing a stable order re-sort).
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Post>, RepoError>;
}

/// User store.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user; the store assigns the integer identifier.
    async fn insert(&self, user: NewUser) -> Result<User, RepoError>;

    /// Fetch a single user by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepoError>;

    /// Fetch a user by their unique email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Replace a user's `post_ids` list in one single-row update.
    ///
    /// Errs with [`RepoError::NotFound`] when no user has that id. No
    /// multi-record transaction is involved; the list and the posts it
    /// references are independent records.
    async fn set_post_ids(&self, id: i64, post_ids: &[i64]) -> Result<(), RepoError>;
}
