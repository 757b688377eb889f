//! In-memory store implementations - used as the fallback when no database
//! is configured, and as the test double for resolver and handler tests.
//!
//! Data is lost on process restart. Ids are assigned from a process-local
//! counter, mirroring the store-assigned integer identifiers of the real
//! backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use relata_core::domain::{NewPost, NewUser, Post, User};
use relata_core::error::RepoError;
use relata_core::ports::{PostStore, UserStore};

/// In-memory post store using a HashMap with an async RwLock.
pub struct InMemoryPostStore {
    posts: RwLock<HashMap<i64, Post>>,
    next_id: AtomicI64,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let post = Post {
            id,
            title: post.title,
            content: post.content,
            created_at: now,
            updated_at: now,
        };

        self.posts.write().await.insert(id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(ids.iter().filter_map(|id| posts.get(id).cloned()).collect())
    }
}

/// In-memory user store.
pub struct InMemoryUserStore {
    users: RwLock<HashMap<i64, User>>,
    next_id: AtomicI64,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: NewUser) -> Result<User, RepoError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now();
        let user = User {
            id,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            post_ids: user.post_ids,
            created_at: now,
            updated_at: now,
        };

        users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepoError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn set_post_ids(&self, id: i64, post_ids: &[i64]) -> Result<(), RepoError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or(RepoError::NotFound)?;

        user.post_ids = post_ids.to_vec();
        user.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_user(email: &str) -> NewUser {
        NewUser::new("Demo User", email, "hash", vec![]).unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let store = InMemoryPostStore::new();
        let first = store
            .insert(NewPost::new("A", "a").unwrap())
            .await
            .unwrap();
        let second = store
            .insert(NewPost::new("B", "b").unwrap())
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_find_by_ids_skips_missing() {
        let store = InMemoryPostStore::new();
        let post = store
            .insert(NewPost::new("A", "a").unwrap())
            .await
            .unwrap();

        let found = store.find_by_ids(&[post.id, 99]).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, post.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_rejected() {
        let store = InMemoryUserStore::new();
        store.insert(demo_user("demo@example.com")).await.unwrap();

        let err = store
            .insert(demo_user("demo@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
    }

    #[tokio::test]
    async fn test_set_post_ids_updates_the_list() {
        let store = InMemoryUserStore::new();
        let user = store.insert(demo_user("demo@example.com")).await.unwrap();

        store.set_post_ids(user.id, &[4, 5]).await.unwrap();

        let reloaded = store.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(reloaded.post_ids, vec![4, 5]);
    }

    #[tokio::test]
    async fn test_set_post_ids_on_missing_user_errs() {
        let store = InMemoryUserStore::new();
        let err = store.set_post_ids(42, &[1]).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }
}
