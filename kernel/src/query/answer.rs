use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Answer, QuestionId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait AnswerQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    /// Every answer of the question in creation order, deleted ones included.
    async fn find_by_question_id(
        &self,
        con: &mut Self::Transaction,
        question_id: &QuestionId,
    ) -> error_stack::Result<Vec<Answer>, KernelError>;

    async fn find_by_question_id_and_deleted_false(
        &self,
        con: &mut Self::Transaction,
        question_id: &QuestionId,
    ) -> error_stack::Result<Vec<Answer>, KernelError>;
}

pub trait DependOnAnswerQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type AnswerQuery: AnswerQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn answer_query(&self) -> &Self::AnswerQuery;
}
