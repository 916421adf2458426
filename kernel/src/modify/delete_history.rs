use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::DeleteHistory;
use crate::KernelError;

#[async_trait::async_trait]
pub trait DeleteHistoryModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        history: &DeleteHistory,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnDeleteHistoryModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type DeleteHistoryModifier: DeleteHistoryModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn delete_history_modifier(&self) -> &Self::DeleteHistoryModifier;
}
