use serde::{Deserialize, Serialize};

use crate::users::repo_types::{Role, User};

/// Request body for creating a user. Deliberately carries no role field:
/// every account starts as a plain user.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub full_name: String,
    pub password: String,
    pub email: String,
}

/// Request body for updating a user's display name.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub full_name: String,
}

/// Query parameters for the login lookup.
#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub email: String,
}

/// Public projection of a user; the password hash never appears here.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub is_active: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            role: user.role,
            is_active: user.is_active,
        }
    }
}

/// Credential projection for login flows handled by other services;
/// includes the stored hash on purpose.
#[derive(Debug, Serialize)]
pub struct LoginUserResponse {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

impl From<User> for LoginUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_serialization() {
        let response = UserResponse {
            id: 7,
            full_name: "Test User".into(),
            email: "test@example.com".into(),
            role: Role::User,
            is_active: true,
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("test@example.com"));
        assert!(json.contains(r#""role":"user""#));
        assert!(!json.contains("password"));
    }

    #[test]
    fn create_request_ignores_unknown_fields() {
        let req: CreateUserRequest = serde_json::from_str(
            r#"{"full_name":"X","password":"p","email":"x@example.com","role":"admin"}"#,
        )
        .unwrap();
        assert_eq!(req.email, "x@example.com");
    }
}
