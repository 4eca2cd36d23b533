//! Builders wiring the configured storage backend into HTTP state.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::info;

use exercise_tracker::inbound::http::state::HttpState;
use exercise_tracker::outbound::memory::InMemoryUserRepository;
use exercise_tracker::outbound::persistence::{
    DbPool, DieselUserRepository, PoolConfig, run_migrations,
};

use super::config::Storage;

/// Build handler state for `storage`, applying migrations first when the
/// store is PostgreSQL.
///
/// # Errors
/// Returns [`std::io::Error`] when migrations fail or the pool cannot be
/// built.
pub async fn build_http_state(storage: &Storage) -> std::io::Result<HttpState> {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    match storage {
        Storage::Postgres {
            database_url,
            pool_max_size,
        } => {
            run_migrations(database_url)
                .await
                .map_err(|e| std::io::Error::other(format!("database migration failed: {e}")))?;
            let pool = DbPool::new(
                PoolConfig::new(database_url.as_str()).with_max_size(*pool_max_size),
            )
            .await
            .map_err(|e| std::io::Error::other(format!("database pool setup failed: {e}")))?;
            info!(pool_max_size, "using PostgreSQL user store");
            Ok(HttpState::from_repository(
                Arc::new(DieselUserRepository::new(pool)),
                clock,
            ))
        }
        Storage::InMemory => Ok(HttpState::from_repository(
            Arc::new(InMemoryUserRepository::default()),
            clock,
        )),
    }
}
