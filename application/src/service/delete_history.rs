use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DeleteHistoryQuery, DependOnDeleteHistoryQuery};
use kernel::prelude::entity::UserId;
use kernel::KernelError;

use crate::transfer::{DeleteHistoryDto, GetDeleteHistoryDto};

#[async_trait::async_trait]
pub trait GetDeleteHistoryService: 'static + Sync + Send + DependOnDeleteHistoryQuery {
    async fn get_delete_histories(
        &self,
        dto: GetDeleteHistoryDto,
    ) -> error_stack::Result<Vec<DeleteHistoryDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let histories = self
            .delete_history_query()
            .find_by_deleted_by(&mut connection, &UserId::new(dto.deleted_by))
            .await?;
        connection.commit().await?;

        Ok(histories.into_iter().map(DeleteHistoryDto::from).collect())
    }
}

impl<T> GetDeleteHistoryService for T where T: DependOnDeleteHistoryQuery {}
