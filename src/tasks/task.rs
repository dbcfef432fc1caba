use super::*;
use crate::Error;
use crate::ID;
use crate::Member;
use crate::Unique;
use std::time::SystemTime;

/// A unit of work owned by exactly one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: ID<Self>,
    owner: ID<Member>,
    title: String,
    description: String,
    status: TaskStatus,
    created: SystemTime,
}

impl Task {
    pub fn new(
        id: ID<Self>,
        owner: ID<Member>,
        title: String,
        description: String,
        status: TaskStatus,
        created: SystemTime,
    ) -> Self {
        Self {
            id,
            owner,
            title,
            description,
            status,
            created,
        }
    }
    /// Builds a fresh task for `owner` from a create request.
    pub fn create(owner: ID<Member>, req: CreateTask) -> Result<Self, Error> {
        let title = title(req.title)?;
        Ok(Self::new(
            ID::default(),
            owner,
            title,
            req.description,
            req.status,
            SystemTime::now(),
        ))
    }
    pub fn owner(&self) -> ID<Member> {
        self.owner
    }
    pub fn title(&self) -> &str {
        &self.title
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn status(&self) -> TaskStatus {
        self.status
    }
    pub fn created(&self) -> SystemTime {
        self.created
    }
    /// Overwrites only the fields present in `patch`.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(ref title) = patch.title {
            self.title = title.clone();
        }
        if let Some(ref description) = patch.description {
            self.description = description.clone();
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

impl Unique for Task {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

/// Titles are trimmed and must not end up empty.
pub fn title(raw: String) -> Result<String, Error> {
    match raw.trim() {
        "" => Err(Error::validation("Title is required")),
        trimmed => Ok(trimmed.to_string()),
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use crate::database::*;

    impl Schema for Task {
        fn table() -> &'static str {
            TASKS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                TASKS,
                " (
                    id          UUID PRIMARY KEY,
                    owner_id    UUID NOT NULL REFERENCES ",
                USERS,
                "(id) ON DELETE CASCADE,
                    title       TEXT NOT NULL,
                    description TEXT NOT NULL DEFAULT '',
                    status      VARCHAR(16) NOT NULL DEFAULT 'pending',
                    created_at  TIMESTAMPTZ NOT NULL
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_tasks_owner ON ",
                TASKS,
                " (owner_id, created_at DESC);"
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str) -> CreateTask {
        CreateTask {
            title: title.to_string(),
            description: String::new(),
            status: TaskStatus::default(),
        }
    }

    #[test]
    fn blank_title_is_invalid() {
        assert!(matches!(
            Task::create(ID::default(), request("   ")),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn create_defaults_to_pending() {
        let task = Task::create(ID::default(), request("  write docs ")).unwrap();
        assert!(task.title() == "write docs");
        assert!(task.status() == TaskStatus::Pending);
    }

    #[test]
    fn patch_touches_only_present_fields() {
        let mut task = Task::create(ID::default(), request("write docs")).unwrap();
        task.apply(&TaskPatch {
            title: None,
            description: None,
            status: Some(TaskStatus::Completed),
        });
        assert!(task.title() == "write docs");
        assert!(task.description() == "");
        assert!(task.status() == TaskStatus::Completed);
    }
}
