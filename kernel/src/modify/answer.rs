use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::Answer;
use crate::KernelError;

#[async_trait::async_trait]
pub trait AnswerModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        answer: &Answer,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        answer: &Answer,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnAnswerModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type AnswerModifier: AnswerModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn answer_modifier(&self) -> &Self::AnswerModifier;
}
