//! Demo seed data: two posts plus a user whose JSON id list references both.

use thiserror::Error;

use relata_core::DomainError;
use relata_core::domain::{NewPost, NewUser, User};
use relata_core::error::RepoError;
use relata_core::ports::{PasswordError, PasswordHasher, PostStore, UserStore};

pub const DEMO_USER_NAME: &str = "Demo User";
pub const DEMO_USER_EMAIL: &str = "demo@example.com";
pub const DEMO_USER_PASSWORD: &str = "password";

/// Seeding errors.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] RepoError),
    #[error(transparent)]
    Password(#[from] PasswordError),
}

/// Create the demo dataset: two posts and a user whose `post_ids` holds the
/// ids the store assigned to them.
///
/// Re-running against an already seeded store is a no-op returning the
/// existing demo user.
pub async fn seed_demo(
    users: &dyn UserStore,
    posts: &dyn PostStore,
    hasher: &dyn PasswordHasher,
) -> Result<User, SeedError> {
    if let Some(existing) = users.find_by_email(DEMO_USER_EMAIL).await? {
        tracing::info!(user_id = existing.id, "Demo user already seeded, skipping");
        return Ok(existing);
    }

    let first = posts
        .insert(NewPost::new(
            "Storing Relations as JSON",
            "A user keeps the ids of its posts in a JSON array column.",
        )?)
        .await?;

    let second = posts
        .insert(NewPost::new(
            "Resolving an Id List",
            "The stored array is resolved back into rows; dangling ids are skipped.",
        )?)
        .await?;

    let password_hash = hasher.hash(DEMO_USER_PASSWORD)?;
    let user = users
        .insert(NewUser::new(
            DEMO_USER_NAME,
            DEMO_USER_EMAIL,
            password_hash,
            vec![first.id, second.id],
        )?)
        .await?;

    tracing::info!(
        user_id = user.id,
        post_ids = ?user.post_ids,
        "Seeded demo user and posts"
    );

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Argon2Hasher;
    use crate::database::{InMemoryPostStore, InMemoryUserStore};
    use relata_core::relation::resolve_related;

    #[tokio::test]
    async fn test_seed_creates_user_referencing_both_posts() {
        let users = InMemoryUserStore::new();
        let posts = InMemoryPostStore::new();
        let hasher = Argon2Hasher::new();

        let user = seed_demo(&users, &posts, &hasher).await.unwrap();

        assert_eq!(user.post_ids.len(), 2);

        let resolved = resolve_related(&user.post_ids, &posts).await.unwrap();
        let titles: Vec<&str> = resolved.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Storing Relations as JSON", "Resolving an Id List"]
        );
    }

    #[tokio::test]
    async fn test_seed_hashes_the_password() {
        let users = InMemoryUserStore::new();
        let posts = InMemoryPostStore::new();
        let hasher = Argon2Hasher::new();

        let user = seed_demo(&users, &posts, &hasher).await.unwrap();

        assert_ne!(user.password_hash, DEMO_USER_PASSWORD);
        assert!(hasher.verify(DEMO_USER_PASSWORD, &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let users = InMemoryUserStore::new();
        let posts = InMemoryPostStore::new();
        let hasher = Argon2Hasher::new();

        let first = seed_demo(&users, &posts, &hasher).await.unwrap();
        let second = seed_demo(&users, &posts, &hasher).await.unwrap();

        assert_eq!(first.id, second.id);
        // No extra posts on the second run.
        let resolved = resolve_related(&second.post_ids, &posts).await.unwrap();
        assert_eq!(resolved.len(), 2);
    }
}
