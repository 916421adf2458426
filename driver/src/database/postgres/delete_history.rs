use error_stack::Report;
use sqlx::types::time::OffsetDateTime;
use sqlx::types::Uuid;
use sqlx::PgConnection;

use kernel::interface::query::DeleteHistoryQuery;
use kernel::interface::update::DeleteHistoryModifier;
use kernel::prelude::entity::{
    AnswerId, CreatedAt, DeleteHistory, DeleteHistoryId, DeletedContent, QuestionId, UserId,
};
use kernel::KernelError;

use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

static QUESTION_CONTENT: &str = "question";
static ANSWER_CONTENT: &str = "answer";

pub struct PostgresDeleteHistoryRepository;

#[async_trait::async_trait]
impl DeleteHistoryQuery for PostgresDeleteHistoryRepository {
    type Transaction = PostgresConnection;
    async fn find_by_deleted_by(
        &self,
        con: &mut PostgresConnection,
        deleted_by: &UserId,
    ) -> error_stack::Result<Vec<DeleteHistory>, KernelError> {
        PgDeleteHistoryInternal::find_by_deleted_by(con, deleted_by).await
    }
}

#[async_trait::async_trait]
impl DeleteHistoryModifier for PostgresDeleteHistoryRepository {
    type Transaction = PostgresConnection;
    async fn create(
        &self,
        con: &mut PostgresConnection,
        history: &DeleteHistory,
    ) -> error_stack::Result<(), KernelError> {
        PgDeleteHistoryInternal::create(con, history).await
    }
}

#[derive(sqlx::FromRow)]
struct DeleteHistoryRow {
    id: Uuid,
    content_type: String,
    content_id: Uuid,
    deleted_by: Uuid,
    created_at: OffsetDateTime,
}

impl TryFrom<DeleteHistoryRow> for DeleteHistory {
    type Error = Report<KernelError>;

    fn try_from(row: DeleteHistoryRow) -> Result<Self, Self::Error> {
        let content = match row.content_type.as_str() {
            t if t == QUESTION_CONTENT => DeletedContent::Question(QuestionId::new(row.content_id)),
            t if t == ANSWER_CONTENT => DeletedContent::Answer(AnswerId::new(row.content_id)),
            other => {
                return Err(Report::new(KernelError::Internal)
                    .attach_printable(format!("Unknown content type `{other}`")))
            }
        };
        Ok(DeleteHistory::new(
            DeleteHistoryId::new(row.id),
            content,
            UserId::new(row.deleted_by),
            CreatedAt::new(row.created_at),
        ))
    }
}

pub(in crate::database) struct PgDeleteHistoryInternal;

impl PgDeleteHistoryInternal {
    async fn find_by_deleted_by(
        con: &mut PgConnection,
        deleted_by: &UserId,
    ) -> error_stack::Result<Vec<DeleteHistory>, KernelError> {
        let rows = sqlx::query_as::<_, DeleteHistoryRow>(
            // language=postgresql
            r#"
            SELECT id, content_type, content_id, deleted_by, created_at
            FROM delete_histories
            WHERE deleted_by = $1
            ORDER BY seq
            "#,
        )
        .bind(deleted_by.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(DeleteHistory::try_from).collect()
    }

    async fn create(
        con: &mut PgConnection,
        history: &DeleteHistory,
    ) -> error_stack::Result<(), KernelError> {
        let (content_type, content_id) = match history.content() {
            DeletedContent::Question(id) => (QUESTION_CONTENT, id.as_ref()),
            DeletedContent::Answer(id) => (ANSWER_CONTENT, id.as_ref()),
        };
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO delete_histories (id, content_type, content_id, deleted_by, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(history.id().as_ref())
        .bind(content_type)
        .bind(content_id)
        .bind(history.deleted_by().as_ref())
        .bind(history.created_at().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
