use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnAnswerQuery, DependOnDeleteHistoryQuery, DependOnQuestionQuery, DependOnUserQuery,
};
use kernel::interface::update::{
    DependOnAnswerModifier, DependOnDeleteHistoryModifier, DependOnQuestionModifier,
    DependOnUserModifier,
};
use kernel::prelude::entity::{Answer, DeleteHistory, Question, User};
use kernel::KernelError;

pub use self::{answer::*, delete_history::*, question::*, user::*};

mod answer;
mod delete_history;
mod question;
mod user;

#[derive(Debug, Clone, Default)]
struct MemoryStore {
    users: Vec<User>,
    questions: Vec<Question>,
    answers: Vec<Answer>,
    delete_histories: Vec<DeleteHistory>,
}

/// Process-local database.
///
/// A transaction owns the whole store until it ends, so transactions run strictly one after
/// another. Writes go to a private copy that only [`Transaction::commit`] publishes.
#[derive(Clone, Default)]
pub struct MemoryDatabase {
    store: Arc<Mutex<MemoryStore>>,
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

pub struct MemoryConnection {
    guard: OwnedMutexGuard<MemoryStore>,
    working: MemoryStore,
}

#[async_trait::async_trait]
impl DatabaseConnection for MemoryDatabase {
    type Transaction = MemoryConnection;
    async fn transact(&self) -> error_stack::Result<MemoryConnection, KernelError> {
        let guard = Arc::clone(&self.store).lock_owned().await;
        let working = MemoryStore::clone(&guard);
        tracing::debug!("memory transaction started");
        Ok(MemoryConnection { guard, working })
    }
}

#[async_trait::async_trait]
impl Transaction for MemoryConnection {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        let Self { mut guard, working } = self;
        *guard = working;
        tracing::debug!("memory transaction committed");
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        tracing::debug!("memory transaction rolled back");
        Ok(())
    }
}

impl DependOnUserQuery for MemoryDatabase {
    type UserQuery = MemoryUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &MemoryUserRepository
    }
}

impl DependOnUserModifier for MemoryDatabase {
    type UserModifier = MemoryUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &MemoryUserRepository
    }
}

impl DependOnQuestionQuery for MemoryDatabase {
    type QuestionQuery = MemoryQuestionRepository;
    fn question_query(&self) -> &Self::QuestionQuery {
        &MemoryQuestionRepository
    }
}

impl DependOnQuestionModifier for MemoryDatabase {
    type QuestionModifier = MemoryQuestionRepository;
    fn question_modifier(&self) -> &Self::QuestionModifier {
        &MemoryQuestionRepository
    }
}

impl DependOnAnswerQuery for MemoryDatabase {
    type AnswerQuery = MemoryAnswerRepository;
    fn answer_query(&self) -> &Self::AnswerQuery {
        &MemoryAnswerRepository
    }
}

impl DependOnAnswerModifier for MemoryDatabase {
    type AnswerModifier = MemoryAnswerRepository;
    fn answer_modifier(&self) -> &Self::AnswerModifier {
        &MemoryAnswerRepository
    }
}

impl DependOnDeleteHistoryQuery for MemoryDatabase {
    type DeleteHistoryQuery = MemoryDeleteHistoryRepository;
    fn delete_history_query(&self) -> &Self::DeleteHistoryQuery {
        &MemoryDeleteHistoryRepository
    }
}

impl DependOnDeleteHistoryModifier for MemoryDatabase {
    type DeleteHistoryModifier = MemoryDeleteHistoryRepository;
    fn delete_history_modifier(&self) -> &Self::DeleteHistoryModifier {
        &MemoryDeleteHistoryRepository
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use uuid::Uuid;

    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::UserQuery;
    use kernel::interface::update::UserModifier;
    use kernel::prelude::entity::{User, UserEmail, UserId, UserLogin, UserName, UserPassword};
    use kernel::KernelError;

    use crate::database::memory::{MemoryDatabase, MemoryUserRepository};

    fn user() -> User {
        let id = Uuid::new_v4();
        User::new(
            UserId::new(id),
            UserLogin::new(format!("bestsilver-{id}")),
            UserPassword::new("password"),
            UserName::new("name"),
            UserEmail::new("bestsilver@ggg.net"),
        )
    }

    #[tokio::test]
    async fn commit_publishes_writes() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let user = user();

        let mut con = db.transact().await?;
        MemoryUserRepository.create(&mut con, &user).await?;
        con.commit().await?;

        let mut con = db.transact().await?;
        let found = MemoryUserRepository.find_by_id(&mut con, user.id()).await?;
        assert_eq!(found, Some(user));
        Ok(())
    }

    #[tokio::test]
    async fn uncommitted_writes_are_discarded() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let dropped = user();
        let rolled_back = user();

        let mut con = db.transact().await?;
        MemoryUserRepository.create(&mut con, &dropped).await?;
        drop(con);

        let mut con = db.transact().await?;
        MemoryUserRepository.create(&mut con, &rolled_back).await?;
        con.roll_back().await?;

        let mut con = db.transact().await?;
        assert!(MemoryUserRepository
            .find_by_id(&mut con, dropped.id())
            .await?
            .is_none());
        assert!(MemoryUserRepository
            .find_by_id(&mut con, rolled_back.id())
            .await?
            .is_none());
        Ok(())
    }

    #[tokio::test]
    async fn transactions_are_serialized() -> error_stack::Result<(), KernelError> {
        let db = MemoryDatabase::new();
        let first = db.transact().await?;

        let waiting = tokio::time::timeout(Duration::from_millis(50), db.transact()).await;
        assert!(waiting.is_err());

        drop(first);
        let second = tokio::time::timeout(Duration::from_millis(50), db.transact()).await;
        assert!(second.is_ok());
        Ok(())
    }
}
