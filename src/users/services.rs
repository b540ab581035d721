use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, warn};

use crate::error::ApiError;
use crate::notify::{EmailMessage, Notifier};
use crate::users::dto::{CreateUserRequest, LoginUserResponse, UpdateUserRequest, UserResponse};
use crate::users::password::hash_password;
use crate::users::repo::UserStore;
use crate::users::repo_types::{NewUser, Role};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Stateless handler for the five identity operations. Owns no data; talks
/// to the injected store and notifier.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    notifier: Arc<dyn Notifier>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Hashes the password, persists the record with the default role, and
    /// publishes a welcome email. The publish is best effort: the account
    /// exists whether or not the email makes it out.
    pub async fn create(&self, mut req: CreateUserRequest) -> Result<UserResponse, ApiError> {
        req.email = req.email.trim().to_lowercase();

        if !is_valid_email(&req.email) {
            warn!(email = %req.email, "invalid email");
            return Err(ApiError::Invalid("invalid email".into()));
        }
        if req.password.is_empty() {
            warn!("empty password");
            return Err(ApiError::Invalid("password must not be empty".into()));
        }

        let password_hash = hash_password(&req.password).map_err(ApiError::Internal)?;

        let user = self
            .store
            .insert(NewUser {
                full_name: req.full_name,
                email: req.email,
                password_hash,
                role: Role::User,
                is_active: true,
            })
            .await?;

        info!(user_id = user.id, email = %user.email, "user created");

        if let Err(e) = self
            .notifier
            .publish(&EmailMessage::welcome(&user.email))
            .await
        {
            warn!(error = %e, email = %user.email, "failed to publish welcome email");
        }

        Ok(user.into())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<UserResponse, ApiError> {
        let user = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound("user not found"))?;
        Ok(user.into())
    }

    pub async fn get_for_login(&self, email: &str) -> Result<LoginUserResponse, ApiError> {
        let email = email.trim().to_lowercase();
        let user = self
            .store
            .find_by_email(&email)
            .await?
            .ok_or(ApiError::NotFound("user not found"))?;
        Ok(user.into())
    }

    /// Read-modify-write: only `full_name` changes, the rest of the record
    /// is written back as read.
    pub async fn update(&self, id: i64, req: UpdateUserRequest) -> Result<UserResponse, ApiError> {
        let mut user = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(ApiError::NotFound("user not found"))?;

        user.full_name = req.full_name;
        self.store.save(&user).await?;

        info!(user_id = user.id, "user updated");
        Ok(user.into())
    }

    /// Single delete-by-key statement; removing an id that is already gone
    /// is a no-op, not an error.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.store.delete(id).await?;
        info!(user_id = id, "user deleted");
        Ok(())
    }
}
