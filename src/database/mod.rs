#![cfg(feature = "database")]
//! PostgreSQL connectivity and schema bootstrap.
//!
//! - [`db()`] — connects and spawns the connection driver
//! - [`Schema`] — table metadata and DDL, built at compile time
//! - [`migrate()`] — idempotent table and index creation at startup
use crate::Member;
use crate::Task;
use std::sync::Arc;
use tokio_postgres::Client;

/// Table metadata for PostgreSQL.
///
/// Pure description, no I/O. DDL is assembled with
/// [`const_format::concatcp!`] so every statement is `&'static str`.
pub trait Schema {
    /// Table name in the database.
    fn table() -> &'static str;
    /// `CREATE TABLE IF NOT EXISTS` statement.
    fn creates() -> &'static str;
    /// `CREATE INDEX IF NOT EXISTS` statements.
    fn indices() -> &'static str;
}

/// Establishes a database connection.
///
/// The connection future is spawned onto the current tokio runtime;
/// the returned `Arc<Client>` is shared across workers.
pub async fn db(url: &str) -> Result<Arc<Client>, PgErr> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let (client, connection) = tokio_postgres::connect(url, tls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await?;
    Ok(Arc::new(client))
}

/// Creates every table the service needs, in dependency order.
pub async fn migrate(client: &Client) -> Result<(), PgErr> {
    create::<Member>(client).await?;
    create::<Task>(client).await?;
    Ok(())
}

async fn create<T: Schema>(client: &Client) -> Result<(), PgErr> {
    log::info!("creating table ({})", T::table());
    client.batch_execute(T::creates()).await?;
    client.batch_execute(T::indices()).await?;
    Ok(())
}

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Table for registered user accounts.
#[rustfmt::skip]
pub const USERS: &str = "users";
/// Table for per-user tasks.
#[rustfmt::skip]
pub const TASKS: &str = "tasks";
