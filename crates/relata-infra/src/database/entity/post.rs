//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

// No relations: users reference posts only through their JSON id lists, and
// a post carries no back-reference.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to domain Post.
impl From<Model> for relata_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Build the ActiveModel for inserting a validated [`NewPost`]. The id stays
/// unset so the store assigns it.
///
/// [`NewPost`]: relata_core::domain::NewPost
impl From<relata_core::domain::NewPost> for ActiveModel {
    fn from(post: relata_core::domain::NewPost) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: sea_orm::ActiveValue::NotSet,
            title: Set(post.title),
            content: Set(post.content),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}
