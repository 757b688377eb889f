//! User entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{FromJsonQueryResult, Set};
use serde::{Deserialize, Serialize};

/// The `post_ids` JSON column, decoded strictly as an array of integers.
///
/// Going through this newtype means a malformed stored value (not an array,
/// or non-integer elements) surfaces as an explicit decode error when the
/// row is read, never as a silent empty list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct PostIds(pub Vec<i64>);

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub post_ids: PostIds,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to domain User.
impl From<Model> for relata_core::domain::User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
            post_ids: model.post_ids.0,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Build the ActiveModel for inserting a validated [`NewUser`]. The id stays
/// unset so the store assigns it.
///
/// [`NewUser`]: relata_core::domain::NewUser
impl From<relata_core::domain::NewUser> for ActiveModel {
    fn from(user: relata_core::domain::NewUser) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: sea_orm::ActiveValue::NotSet,
            name: Set(user.name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            post_ids: Set(PostIds(user.post_ids)),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_ids_decodes_integer_array() {
        let ids: PostIds = serde_json::from_value(serde_json::json!([1, 2, 3])).unwrap();
        assert_eq!(ids.0, vec![1, 2, 3]);
    }

    #[test]
    fn test_post_ids_rejects_non_array() {
        let result: Result<PostIds, _> = serde_json::from_value(serde_json::json!("1,2"));
        assert!(result.is_err());
    }

    #[test]
    fn test_post_ids_rejects_non_integer_elements() {
        let result: Result<PostIds, _> = serde_json::from_value(serde_json::json!([1, "two"]));
        assert!(result.is_err());
    }
}
