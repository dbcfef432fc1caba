use crate::*;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Account {
    members: HashMap<ID<Member>, (Member, String)>,
    emails: HashMap<String, ID<Member>>,
}

/// Process-local store for tests and database-less runs.
///
/// Same contract as the PostgreSQL store, including exact-match email
/// uniqueness, which is checked and claimed under a single write lock.
#[derive(Default)]
pub struct Memory {
    accounts: RwLock<Account>,
    tasks: RwLock<HashMap<ID<Task>, Task>>,
}

impl AuthRepository for Memory {
    async fn exists(&self, email: &str) -> Result<bool, Error> {
        Ok(self.accounts.read().await.emails.contains_key(email))
    }

    async fn create(&self, member: &Member, hashword: &str) -> Result<(), Error> {
        let mut accounts = self.accounts.write().await;
        if accounts.emails.contains_key(member.email()) {
            return Err(Error::Conflict);
        }
        accounts
            .emails
            .insert(member.email().to_string(), member.id());
        accounts
            .members
            .insert(member.id(), (member.clone(), hashword.to_string()));
        Ok(())
    }

    async fn lookup(&self, email: &str) -> Result<Option<(Member, String)>, Error> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .emails
            .get(email)
            .and_then(|id| accounts.members.get(id))
            .cloned())
    }

    async fn fetch(&self, id: ID<Member>) -> Result<Option<Member>, Error> {
        Ok(self
            .accounts
            .read()
            .await
            .members
            .get(&id)
            .map(|(member, _)| member.clone()))
    }

    async fn rename(&self, id: ID<Member>, name: &str) -> Result<Option<Member>, Error> {
        Ok(self
            .accounts
            .write()
            .await
            .members
            .get_mut(&id)
            .map(|(member, _)| {
                member.rename(name.to_string());
                member.clone()
            }))
    }
}

impl TaskRepository for Memory {
    async fn tasks(&self, owner: ID<Member>) -> Result<Vec<Task>, Error> {
        let mut tasks = self
            .tasks
            .read()
            .await
            .values()
            .filter(|t| t.owner() == owner)
            .cloned()
            .collect::<Vec<_>>();
        tasks.sort_by(|a, b| b.created().cmp(&a.created()).then(b.id().cmp(&a.id())));
        Ok(tasks)
    }

    async fn insert(&self, task: &Task) -> Result<(), Error> {
        self.tasks.write().await.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(
        &self,
        owner: ID<Member>,
        id: ID<Task>,
        patch: &TaskPatch,
    ) -> Result<Option<Task>, Error> {
        Ok(self
            .tasks
            .write()
            .await
            .get_mut(&id)
            .filter(|t| t.owner() == owner)
            .map(|t| {
                t.apply(patch);
                t.clone()
            }))
    }

    async fn delete(&self, owner: ID<Member>, id: ID<Task>) -> Result<bool, Error> {
        let mut tasks = self.tasks.write().await;
        match tasks.get(&id) {
            Some(t) if t.owner() == owner => Ok(tasks.remove(&id).is_some()),
            _ => Ok(false),
        }
    }
}

impl Store for Memory {
    async fn ping(&self) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(email: &str) -> Member {
        Member::new(ID::default(), email.to_string(), "A".to_string())
    }

    #[tokio::test]
    async fn email_is_unique() {
        let store = Memory::default();
        store.create(&member("a@b.com"), "h").await.unwrap();
        assert!(matches!(
            store.create(&member("a@b.com"), "h").await,
            Err(Error::Conflict)
        ));
    }

    #[tokio::test]
    async fn email_match_is_exact() {
        let store = Memory::default();
        store.create(&member("a@b.com"), "h").await.unwrap();
        assert!(store.lookup("A@b.com").await.unwrap().is_none());
        assert!(store.create(&member("A@b.com"), "h").await.is_ok());
    }

    #[tokio::test]
    async fn tasks_are_scoped_to_owner() {
        let store = Memory::default();
        let alice = ID::<Member>::default();
        let mallory = ID::<Member>::default();
        let task = Task::create(
            alice,
            CreateTask {
                title: "mine".to_string(),
                description: String::new(),
                status: TaskStatus::Pending,
            },
        )
        .unwrap();
        store.insert(&task).await.unwrap();
        let patch = TaskPatch {
            title: Some("theirs".to_string()),
            ..TaskPatch::default()
        };
        assert!(store.tasks(mallory).await.unwrap().is_empty());
        assert!(store.update(mallory, task.id(), &patch).await.unwrap().is_none());
        assert!(!store.delete(mallory, task.id()).await.unwrap());
        assert!(store.tasks(alice).await.unwrap() == vec![task.clone()]);
        assert!(store.delete(alice, task.id()).await.unwrap());
        assert!(!store.delete(alice, task.id()).await.unwrap());
    }
}
