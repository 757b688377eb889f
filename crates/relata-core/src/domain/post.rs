use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Post entity. The store assigns `id` on creation; it is unique and
/// immutable from then on. A post may be referenced by zero or more users'
/// `post_ids` lists and carries no back-reference to any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a post.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::Validation(
                "Title must not be empty".to_string(),
            ));
        }

        Ok(Self {
            title,
            content: content.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_rejects_empty_title() {
        let err = NewPost::new("", "body").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
