use std::ops::{Deref, DerefMut};

use error_stack::{Report, ResultExt};
use sqlx::{Error, PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnAnswerQuery, DependOnDeleteHistoryQuery, DependOnQuestionQuery, DependOnUserQuery,
};
use kernel::interface::update::{
    DependOnAnswerModifier, DependOnDeleteHistoryModifier, DependOnQuestionModifier,
    DependOnUserModifier,
};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{answer::*, delete_history::*, question::*, user::*};

mod answer;
mod delete_history;
mod question;
mod user;

static POSTGRES_URL: &str = "POSTGRES_URL";

#[derive(Clone)]
pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let pool = Pool::connect(&url).await.convert_error()?;
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> error_stack::Result<(), KernelError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| "Failed to apply migrations")
    }
}

/// An open database transaction. Rolled back by sqlx when dropped uncommitted.
pub struct PostgresConnection(sqlx::Transaction<'static, Postgres>);

impl Deref for PostgresConnection {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for PostgresDatabase {
    type Transaction = PostgresConnection;
    async fn transact(&self) -> error_stack::Result<PostgresConnection, KernelError> {
        let con = self.pool.begin().await.convert_error()?;
        tracing::debug!("postgres transaction started");
        Ok(PostgresConnection(con))
    }
}

#[async_trait::async_trait]
impl Transaction for PostgresConnection {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()?;
        tracing::debug!("postgres transaction committed");
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()?;
        tracing::debug!("postgres transaction rolled back");
        Ok(())
    }
}

impl DependOnUserQuery for PostgresDatabase {
    type UserQuery = PostgresUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &PostgresUserRepository
    }
}

impl DependOnUserModifier for PostgresDatabase {
    type UserModifier = PostgresUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &PostgresUserRepository
    }
}

impl DependOnQuestionQuery for PostgresDatabase {
    type QuestionQuery = PostgresQuestionRepository;
    fn question_query(&self) -> &Self::QuestionQuery {
        &PostgresQuestionRepository
    }
}

impl DependOnQuestionModifier for PostgresDatabase {
    type QuestionModifier = PostgresQuestionRepository;
    fn question_modifier(&self) -> &Self::QuestionModifier {
        &PostgresQuestionRepository
    }
}

impl DependOnAnswerQuery for PostgresDatabase {
    type AnswerQuery = PostgresAnswerRepository;
    fn answer_query(&self) -> &Self::AnswerQuery {
        &PostgresAnswerRepository
    }
}

impl DependOnAnswerModifier for PostgresDatabase {
    type AnswerModifier = PostgresAnswerRepository;
    fn answer_modifier(&self) -> &Self::AnswerModifier {
        &PostgresAnswerRepository
    }
}

impl DependOnDeleteHistoryQuery for PostgresDatabase {
    type DeleteHistoryQuery = PostgresDeleteHistoryRepository;
    fn delete_history_query(&self) -> &Self::DeleteHistoryQuery {
        &PostgresDeleteHistoryRepository
    }
}

impl DependOnDeleteHistoryModifier for PostgresDatabase {
    type DeleteHistoryModifier = PostgresDeleteHistoryRepository;
    fn delete_history_modifier(&self) -> &Self::DeleteHistoryModifier {
        &PostgresDeleteHistoryRepository
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let context = match &error {
                Error::PoolTimedOut => KernelError::Timeout,
                // serialization_failure, deadlock_detected
                Error::Database(e) if matches!(e.code().as_deref(), Some("40001" | "40P01")) => {
                    KernelError::Concurrency
                }
                // unique_violation
                Error::Database(e) if e.code().as_deref() == Some("23505") => {
                    KernelError::Validation
                }
                _ => KernelError::Internal,
            };
            Report::from(error).change_context(context)
        })
    }
}
