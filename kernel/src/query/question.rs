use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Question, QuestionId};
use crate::KernelError;

/// Questions are returned without answers; those come from [`crate::query::AnswerQuery`].
#[async_trait::async_trait]
pub trait QuestionQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &QuestionId,
    ) -> error_stack::Result<Option<Question>, KernelError>;

    async fn find_by_id_and_deleted_false(
        &self,
        con: &mut Self::Transaction,
        id: &QuestionId,
    ) -> error_stack::Result<Option<Question>, KernelError>;

    async fn find_by_deleted_false(
        &self,
        con: &mut Self::Transaction,
    ) -> error_stack::Result<Vec<Question>, KernelError>;

    /// Like [`QuestionQuery::find_by_id`], but holds the question exclusively until the
    /// transaction ends.
    async fn find_by_id_for_update(
        &self,
        con: &mut Self::Transaction,
        id: &QuestionId,
    ) -> error_stack::Result<Option<Question>, KernelError>;
}

pub trait DependOnQuestionQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type QuestionQuery: QuestionQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn question_query(&self) -> &Self::QuestionQuery;
}
