//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Password;

/// User domain entity.
///
/// Serializes to `id` and `email` only; the password hash and the active
/// flag never leave the service.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: Password,
    #[serde(skip_serializing)]
    pub is_active: bool,
}

impl User {
    pub fn new(id: i32, email: String, password: Password) -> Self {
        Self {
            id,
            email,
            password,
            is_active: true,
        }
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUser {
    /// User email address
    #[schema(example = "luke@rebellion.org")]
    pub email: String,
    /// Plain text password, hashed before storage
    #[schema(example = "use-the-force")]
    pub password: String,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i32,
    /// User email address
    #[schema(example = "luke@rebellion.org")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            7,
            "leia@alderaan.gov".to_string(),
            Password::from_hash("$argon2id$v=19$stub".to_string()),
        )
    }

    #[test]
    fn test_serialized_user_has_no_password() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 7, "email": "leia@alderaan.gov" }));
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_user_response_has_no_password() {
        let json = serde_json::to_value(UserResponse::from(sample_user())).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["email".to_string(), "id".to_string()]);
    }

    #[test]
    fn test_new_user_is_active() {
        assert!(sample_user().is_active);
    }
}
