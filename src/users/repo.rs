use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use crate::users::repo_types::{NewUser, Role, User};

/// Failure modes of the persistence boundary. Uniqueness violations get
/// their own variant so the service can surface them as a conflict instead
/// of a generic failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("email already registered")]
    DuplicateEmail,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Persistence boundary for the users table. One logical statement per
/// call; no locks held across calls.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, new: NewUser) -> Result<User, StoreError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    /// Writes the full record back; pairs with a preceding read for
    /// partial updates.
    async fn save(&self, user: &User) -> Result<(), StoreError>;
    /// Delete by key. Removing an id that is already gone succeeds.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}

pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    full_name: String,
    email: String,
    password_hash: String,
    role: String,
    is_active: bool,
}

impl TryFrom<UserRow> for User {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, StoreError> {
        let role = row.role.parse::<Role>().map_err(anyhow::Error::msg)?;
        Ok(User {
            id: row.id,
            full_name: row.full_name,
            email: row.email,
            password_hash: row.password_hash,
            role,
            is_active: row.is_active,
        })
    }
}

fn classify_insert_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.constraint() == Some("users_email_key") {
            return StoreError::DuplicateEmail;
        }
    }
    StoreError::Other(err.into())
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, new: NewUser) -> Result<User, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (full_name, email, password_hash, role, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, full_name, email, password_hash, role, is_active
            "#,
        )
        .bind(&new.full_name)
        .bind(&new.email)
        .bind(&new.password_hash)
        .bind(new.role.as_str())
        .bind(new.is_active)
        .fetch_one(&self.db)
        .await
        .map_err(classify_insert_error)?;
        row.try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, full_name, email, password_hash, role, is_active
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| StoreError::Other(e.into()))?;
        row.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, full_name, email, password_hash, role, is_active
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| StoreError::Other(e.into()))?;
        row.map(User::try_from).transpose()
    }

    async fn save(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            UPDATE users
            SET full_name = $2, email = $3, password_hash = $4, role = $5, is_active = $6
            WHERE id = $1
            "#,
        )
        .bind(user.id)
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.as_str())
        .bind(user.is_active)
        .execute(&self.db)
        .await
        .map_err(|e| StoreError::Other(e.into()))?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(|e| StoreError::Other(e.into()))?;
        Ok(())
    }
}

/// In-memory store for tests and local runs without Postgres; mirrors the
/// uniqueness behavior of the production implementation.
#[derive(Default)]
pub struct MemUserStore {
    inner: Mutex<MemInner>,
}

#[derive(Default)]
struct MemInner {
    users: HashMap<i64, User>,
    next_id: i64,
}

#[async_trait]
impl UserStore for MemUserStore {
    async fn insert(&self, new: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.users.values().any(|u| u.email == new.email) {
            return Err(StoreError::DuplicateEmail);
        }
        inner.next_id += 1;
        let user = User {
            id: inner.next_id,
            full_name: new.full_name,
            email: new.email,
            password_hash: new.password_hash,
            role: new.role,
            is_active: new.is_active,
        };
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.inner.lock().unwrap().users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn save(&self, user: &User) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(slot) = inner.users.get_mut(&user.id) {
            *slot = user.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        self.inner.lock().unwrap().users.remove(&id);
        Ok(())
    }
}
