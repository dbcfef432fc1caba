//! Task management HTTP server.
//!
//! Connects to PostgreSQL when `DB_URL` is set, otherwise serves from
//! memory. See `--help` for every option.

use clap::Parser;
use taskboard::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    kys();
    let config = Config::parse();
    config.validate()?;
    match config.database.as_deref() {
        #[cfg(feature = "database")]
        Some(url) => {
            let client = database::db(url).await?;
            database::migrate(&client).await?;
            Server::run(&config, client).await?;
        }
        #[cfg(not(feature = "database"))]
        Some(_) => anyhow::bail!("built without database support"),
        None => {
            log::warn!("DB_URL not set; state will not survive a restart");
            Server::run(&config, Memory::default()).await?;
        }
    }
    Ok(())
}
