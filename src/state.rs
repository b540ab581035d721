use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::notify::{HttpNotifier, Notifier};
use crate::users::repo::PgUserStore;
use crate::users::services::UserService;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    pub users: UserService,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let db = sqlx::postgres::PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.database_url)
            .await?;

        let notifier = Arc::new(HttpNotifier::new(&config.notifier)?) as Arc<dyn Notifier>;
        let users = UserService::new(Arc::new(PgUserStore::new(db.clone())), notifier);

        Ok(Self { db, config, users })
    }

    /// Assembly hook for tests: swap in any store or notifier behind the
    /// service.
    pub fn from_parts(db: PgPool, config: Arc<AppConfig>, users: UserService) -> Self {
        Self { db, config, users }
    }
}
