//! PostgreSQL store implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

use relata_core::domain::{NewPost, NewUser, Post, User};
use relata_core::error::RepoError;
use relata_core::ports::{PostStore, UserStore};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity, PostIds};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL user store.
pub type PostgresUserStore = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post store.
pub type PostgresPostStore = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(post)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(post_id = model.id, "Inserted post");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        self.fetch_by_id(id).await
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<Post>, RepoError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = PostEntity::find()
            .filter(post::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn insert(&self, user: NewUser) -> Result<User, RepoError> {
        let model = user::ActiveModel::from(user)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(user_id = model.id, "Inserted user");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepoError> {
        self.fetch_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn set_post_ids(&self, id: i64, post_ids: &[i64]) -> Result<(), RepoError> {
        // Single-row update keyed by the primary key; only the list and the
        // updated_at column change.
        let update = user::ActiveModel {
            id: Set(id),
            post_ids: Set(PostIds(post_ids.to_vec())),
            updated_at: Set(chrono::Utc::now().into()),
            ..Default::default()
        };

        update.update(&self.db).await.map_err(map_db_err)?;

        tracing::debug!(user_id = id, count = post_ids.len(), "Updated post id list");
        Ok(())
    }
}
