use super::*;
use crate::Error;
use crate::ID;

/// Credential store operations needed by the auth handlers.
#[allow(async_fn_in_trait)]
pub trait AuthRepository {
    async fn exists(&self, email: &str) -> Result<bool, Error>;
    /// Fails with [`Error::Conflict`] if the email is already taken.
    async fn create(&self, member: &Member, hashword: &str) -> Result<(), Error>;
    /// Exact-match lookup; returns the member with its stored hash.
    async fn lookup(&self, email: &str) -> Result<Option<(Member, String)>, Error>;
    async fn fetch(&self, id: ID<Member>) -> Result<Option<Member>, Error>;
    async fn rename(&self, id: ID<Member>, name: &str) -> Result<Option<Member>, Error>;
}

#[cfg(feature = "database")]
mod postgres {
    use super::*;
    use crate::Unique;
    use crate::database::*;
    use std::sync::Arc;
    use tokio_postgres::Client;
    use tokio_postgres::Row;

    fn member(row: &Row) -> Member {
        Member::new(
            ID::from(row.get::<_, uuid::Uuid>(0)),
            row.get::<_, String>(1),
            row.get::<_, String>(2),
        )
    }

    impl AuthRepository for Arc<Client> {
        async fn exists(&self, email: &str) -> Result<bool, Error> {
            Ok(self
                .query_opt(
                    const_format::concatcp!("SELECT 1 FROM ", USERS, " WHERE email = $1"),
                    &[&email],
                )
                .await?
                .is_some())
        }

        async fn create(&self, member: &Member, hashword: &str) -> Result<(), Error> {
            self.execute(
                const_format::concatcp!(
                    "INSERT INTO ",
                    USERS,
                    " (id, email, name, hashword) VALUES ($1, $2, $3, $4)"
                ),
                &[
                    &member.id().uuid(),
                    &member.email(),
                    &member.name(),
                    &hashword,
                ],
            )
            .await?;
            Ok(())
        }

        async fn lookup(&self, email: &str) -> Result<Option<(Member, String)>, Error> {
            Ok(self
                .query_opt(
                    const_format::concatcp!(
                        "SELECT id, email, name, hashword FROM ",
                        USERS,
                        " WHERE email = $1"
                    ),
                    &[&email],
                )
                .await?
                .map(|row| (member(&row), row.get::<_, String>(3))))
        }

        async fn fetch(&self, id: ID<Member>) -> Result<Option<Member>, Error> {
            Ok(self
                .query_opt(
                    const_format::concatcp!("SELECT id, email, name FROM ", USERS, " WHERE id = $1"),
                    &[&id.uuid()],
                )
                .await?
                .as_ref()
                .map(member))
        }

        async fn rename(&self, id: ID<Member>, name: &str) -> Result<Option<Member>, Error> {
            Ok(self
                .query_opt(
                    const_format::concatcp!(
                        "UPDATE ",
                        USERS,
                        " SET name = $2 WHERE id = $1 RETURNING id, email, name"
                    ),
                    &[&id.uuid(), &name],
                )
                .await?
                .as_ref()
                .map(member))
        }
    }
}
