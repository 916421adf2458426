use kernel::interface::query::DeleteHistoryQuery;
use kernel::interface::update::DeleteHistoryModifier;
use kernel::prelude::entity::{DeleteHistory, UserId};
use kernel::KernelError;

use crate::database::memory::MemoryConnection;

pub struct MemoryDeleteHistoryRepository;

#[async_trait::async_trait]
impl DeleteHistoryQuery for MemoryDeleteHistoryRepository {
    type Transaction = MemoryConnection;
    async fn find_by_deleted_by(
        &self,
        con: &mut MemoryConnection,
        deleted_by: &UserId,
    ) -> error_stack::Result<Vec<DeleteHistory>, KernelError> {
        Ok(con
            .working
            .delete_histories
            .iter()
            .filter(|history| history.deleted_by() == deleted_by)
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl DeleteHistoryModifier for MemoryDeleteHistoryRepository {
    type Transaction = MemoryConnection;
    async fn create(
        &self,
        con: &mut MemoryConnection,
        history: &DeleteHistory,
    ) -> error_stack::Result<(), KernelError> {
        con.working.delete_histories.push(history.clone());
        Ok(())
    }
}
