use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::Question;
use crate::KernelError;

/// Writes the question row only; answers go through [`crate::modify::AnswerModifier`].
#[async_trait::async_trait]
pub trait QuestionModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        question: &Question,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        question: &Question,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnQuestionModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type QuestionModifier: QuestionModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn question_modifier(&self) -> &Self::QuestionModifier;
}
