use std::sync::Arc;

use notebook_config::{
    CorsConfig, DatabaseConfig, JwtConfig, PasswordConfig, ServerConfig, StorageBackend,
};
use notebook_db::{PgPool, init_db_pool, run_migrations};

use crate::repository::{
    InMemoryNoteRepository, InMemoryUserRepository, NoteRepository, PgNoteRepository,
    PgUserRepository, UserRepository,
};

/// Shared application state, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub notes: Arc<dyn NoteRepository>,
    pub jwt_config: JwtConfig,
    pub password_config: PasswordConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn postgres(pool: PgPool, jwt_config: JwtConfig, password_config: PasswordConfig) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            notes: Arc::new(PgNoteRepository::new(pool)),
            jwt_config,
            password_config,
            cors_config: CorsConfig::default(),
        }
    }

    pub fn in_memory(jwt_config: JwtConfig, password_config: PasswordConfig) -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            notes: Arc::new(InMemoryNoteRepository::new()),
            jwt_config,
            password_config,
            cors_config: CorsConfig::default(),
        }
    }

    pub fn with_cors(mut self, cors_config: CorsConfig) -> Self {
        self.cors_config = cors_config;
        self
    }
}

/// Builds the state for the configured storage backend. For Postgres this
/// connects the pool and applies pending migrations.
pub async fn init_app_state(server_config: &ServerConfig) -> anyhow::Result<AppState> {
    let jwt_config = JwtConfig::from_env();
    let password_config = PasswordConfig::from_env();

    let state = match server_config.storage {
        StorageBackend::Postgres => {
            let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
            run_migrations(&pool).await?;
            AppState::postgres(pool, jwt_config, password_config)
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage, data will not survive a restart");
            AppState::in_memory(jwt_config, password_config)
        }
    };

    Ok(state.with_cors(CorsConfig::from_env()))
}
