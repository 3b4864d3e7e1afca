use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

pub type DbPool = MySqlPool;

/// Builds a lazily-connected MySQL pool. No connection is attempted until a
/// check acquires one, so an unreachable database delays nothing at startup
/// and surfaces as a per-request check failure instead.
///
/// # Errors
/// Returns an error if the connection URL cannot be parsed.
pub fn init_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    MySqlPoolOptions::new().max_connections(2).connect_lazy(database_url)
}
