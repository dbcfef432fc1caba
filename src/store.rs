use crate::*;

/// Everything the HTTP layer needs from persistence.
#[allow(async_fn_in_trait)]
pub trait Store: AuthRepository + TaskRepository {
    /// Cheap liveness check for `/health`.
    async fn ping(&self) -> Result<(), Error>;
}

#[cfg(feature = "database")]
impl Store for std::sync::Arc<tokio_postgres::Client> {
    async fn ping(&self) -> Result<(), Error> {
        self.execute("SELECT 1", &[]).await?;
        Ok(())
    }
}
