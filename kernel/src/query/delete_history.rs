use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{DeleteHistory, UserId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait DeleteHistoryQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_deleted_by(
        &self,
        con: &mut Self::Transaction,
        deleted_by: &UserId,
    ) -> error_stack::Result<Vec<DeleteHistory>, KernelError>;
}

pub trait DependOnDeleteHistoryQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type DeleteHistoryQuery: DeleteHistoryQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn delete_history_query(&self) -> &Self::DeleteHistoryQuery;
}
