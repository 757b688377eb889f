use chrono::{DateTime, Utc};

use crate::error::DomainError;

/// User entity - owns a JSON-backed list of related post ids.
///
/// `post_ids` is always an array (possibly empty) of candidate post
/// identifiers. The store enforces no referential integrity over it, so
/// entries may dangle once a post is deleted; readers tolerate that.
///
/// Deliberately not `Serialize`: the password hash must never reach a
/// response body. `relata-shared` defines the output type.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub post_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a user. The store assigns the id and
/// timestamps on insert.
///
/// Construction goes through [`NewUser::new`] so only the declared field
/// set is accepted and invalid values are rejected before they can be
/// written.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub post_ids: Vec<i64>,
}

impl NewUser {
    /// Validate and build the input for a user insert.
    ///
    /// `password_hash` is expected to already be a one-way hash; raw
    /// passwords never enter the domain layer.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        post_ids: Vec<i64>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let email = email.into();

        if name.trim().is_empty() {
            return Err(DomainError::Validation("Name must not be empty".to_string()));
        }
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::Validation("Invalid email address".to_string()));
        }

        Ok(Self {
            name,
            email,
            password_hash: password_hash.into(),
            post_ids,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_accepts_valid_input() {
        let user = NewUser::new("Demo User", "demo@example.com", "$argon2$...", vec![1, 2]).unwrap();
        assert_eq!(user.email, "demo@example.com");
        assert_eq!(user.post_ids, vec![1, 2]);
    }

    #[test]
    fn test_new_user_rejects_empty_name() {
        let err = NewUser::new("  ", "demo@example.com", "hash", vec![]).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_new_user_rejects_invalid_email() {
        let err = NewUser::new("Demo User", "not-an-email", "hash", vec![]).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
