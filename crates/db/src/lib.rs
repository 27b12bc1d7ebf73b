pub mod models;
pub mod repositories;
pub mod schema;

pub mod mock;

use std::time::Duration;

use eyre::{Result, WrapErr};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

const MAX_CONNECTIONS: u32 = 5;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .wrap_err("Failed to connect to PostgreSQL")?;

    tracing::info!("Connected to PostgreSQL (max {} connections)", MAX_CONNECTIONS);
    Ok(pool)
}
