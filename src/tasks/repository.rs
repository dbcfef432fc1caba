use super::*;
use crate::Error;
use crate::ID;
use crate::Member;

/// Task store operations. Every call is scoped to an owner, so a task
/// that belongs to someone else is indistinguishable from a missing one.
#[allow(async_fn_in_trait)]
pub trait TaskRepository {
    /// All tasks of `owner`, newest first.
    async fn tasks(&self, owner: ID<Member>) -> Result<Vec<Task>, Error>;
    async fn insert(&self, task: &Task) -> Result<(), Error>;
    async fn update(
        &self,
        owner: ID<Member>,
        id: ID<Task>,
        patch: &TaskPatch,
    ) -> Result<Option<Task>, Error>;
    /// Returns whether a task was removed.
    async fn delete(&self, owner: ID<Member>, id: ID<Task>) -> Result<bool, Error>;
}

#[cfg(feature = "database")]
mod postgres {
    use super::*;
    use crate::Unique;
    use crate::database::*;
    use std::sync::Arc;
    use tokio_postgres::Client;
    use tokio_postgres::Row;

    const COLUMNS: &str = "id, owner_id, title, description, status, created_at";

    fn task(row: &Row) -> Result<Task, Error> {
        let status = TaskStatus::try_from(row.get::<_, &str>(4)).map_err(Error::internal)?;
        Ok(Task::new(
            ID::from(row.get::<_, uuid::Uuid>(0)),
            ID::from(row.get::<_, uuid::Uuid>(1)),
            row.get::<_, String>(2),
            row.get::<_, String>(3),
            status,
            row.get::<_, std::time::SystemTime>(5),
        ))
    }

    impl TaskRepository for Arc<Client> {
        async fn tasks(&self, owner: ID<Member>) -> Result<Vec<Task>, Error> {
            self.query(
                const_format::concatcp!(
                    "SELECT ",
                    COLUMNS,
                    " FROM ",
                    TASKS,
                    " WHERE owner_id = $1 ORDER BY created_at DESC, id DESC"
                ),
                &[&owner.uuid()],
            )
            .await?
            .iter()
            .map(task)
            .collect()
        }

        async fn insert(&self, task: &Task) -> Result<(), Error> {
            self.execute(
                const_format::concatcp!(
                    "INSERT INTO ",
                    TASKS,
                    " (",
                    COLUMNS,
                    ") VALUES ($1, $2, $3, $4, $5, $6)"
                ),
                &[
                    &task.id().uuid(),
                    &task.owner().uuid(),
                    &task.title(),
                    &task.description(),
                    &task.status().as_str(),
                    &task.created(),
                ],
            )
            .await?;
            Ok(())
        }

        async fn update(
            &self,
            owner: ID<Member>,
            id: ID<Task>,
            patch: &TaskPatch,
        ) -> Result<Option<Task>, Error> {
            self.query_opt(
                const_format::concatcp!(
                    "UPDATE ",
                    TASKS,
                    " SET title       = COALESCE($3, title),
                          description = COALESCE($4, description),
                          status      = COALESCE($5, status)
                      WHERE id = $1 AND owner_id = $2
                      RETURNING ",
                    COLUMNS
                ),
                &[
                    &id.uuid(),
                    &owner.uuid(),
                    &patch.title,
                    &patch.description,
                    &patch.status.map(|s| s.as_str()),
                ],
            )
            .await?
            .as_ref()
            .map(task)
            .transpose()
        }

        async fn delete(&self, owner: ID<Member>, id: ID<Task>) -> Result<bool, Error> {
            Ok(self
                .execute(
                    const_format::concatcp!(
                        "DELETE FROM ",
                        TASKS,
                        " WHERE id = $1 AND owner_id = $2"
                    ),
                    &[&id.uuid(), &owner.uuid()],
                )
                .await?
                > 0)
        }
    }
}
