use error_stack::Report;
use sqlx::types::time::OffsetDateTime;
use sqlx::types::Uuid;
use sqlx::PgConnection;

use kernel::interface::query::QuestionQuery;
use kernel::interface::update::QuestionModifier;
use kernel::prelude::entity::{
    CreatedAt, IsDeleted, Question, QuestionContents, QuestionId, QuestionTitle, UserId,
};
use kernel::KernelError;

use crate::database::ensure_affected;
use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresQuestionRepository;

#[async_trait::async_trait]
impl QuestionQuery for PostgresQuestionRepository {
    type Transaction = PostgresConnection;
    async fn find_by_id(
        &self,
        con: &mut PostgresConnection,
        id: &QuestionId,
    ) -> error_stack::Result<Option<Question>, KernelError> {
        PgQuestionInternal::find_by_id(con, id).await
    }

    async fn find_by_id_and_deleted_false(
        &self,
        con: &mut PostgresConnection,
        id: &QuestionId,
    ) -> error_stack::Result<Option<Question>, KernelError> {
        PgQuestionInternal::find_by_id_and_deleted_false(con, id).await
    }

    async fn find_by_deleted_false(
        &self,
        con: &mut PostgresConnection,
    ) -> error_stack::Result<Vec<Question>, KernelError> {
        PgQuestionInternal::find_by_deleted_false(con).await
    }

    async fn find_by_id_for_update(
        &self,
        con: &mut PostgresConnection,
        id: &QuestionId,
    ) -> error_stack::Result<Option<Question>, KernelError> {
        PgQuestionInternal::find_by_id_for_update(con, id).await
    }
}

#[async_trait::async_trait]
impl QuestionModifier for PostgresQuestionRepository {
    type Transaction = PostgresConnection;
    async fn create(
        &self,
        con: &mut PostgresConnection,
        question: &Question,
    ) -> error_stack::Result<(), KernelError> {
        PgQuestionInternal::create(con, question).await
    }

    async fn update(
        &self,
        con: &mut PostgresConnection,
        question: &Question,
    ) -> error_stack::Result<(), KernelError> {
        PgQuestionInternal::update(con, question).await
    }
}

#[derive(sqlx::FromRow)]
struct QuestionRow {
    id: Uuid,
    title: String,
    contents: String,
    writer_id: Uuid,
    deleted: bool,
    created_at: OffsetDateTime,
}

impl TryFrom<QuestionRow> for Question {
    type Error = Report<KernelError>;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        Ok(Question::restore(
            QuestionId::new(row.id),
            QuestionTitle::new(row.title)?,
            QuestionContents::new(row.contents),
            UserId::new(row.writer_id),
            IsDeleted::new(row.deleted),
            CreatedAt::new(row.created_at),
        ))
    }
}

fn writer_of(question: &Question) -> error_stack::Result<&UserId, KernelError> {
    question.writer().as_ref().ok_or_else(|| {
        Report::new(KernelError::Validation).attach_printable(format!(
            "question {} has no writer",
            question.id().as_ref()
        ))
    })
}

pub(in crate::database) struct PgQuestionInternal;

impl PgQuestionInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &QuestionId,
    ) -> error_stack::Result<Option<Question>, KernelError> {
        let row = sqlx::query_as::<_, QuestionRow>(
            // language=postgresql
            r#"
            SELECT id, title, contents, writer_id, deleted, created_at
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Question::try_from).transpose()
    }

    async fn find_by_id_and_deleted_false(
        con: &mut PgConnection,
        id: &QuestionId,
    ) -> error_stack::Result<Option<Question>, KernelError> {
        let row = sqlx::query_as::<_, QuestionRow>(
            // language=postgresql
            r#"
            SELECT id, title, contents, writer_id, deleted, created_at
            FROM questions
            WHERE id = $1 AND deleted = FALSE
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Question::try_from).transpose()
    }

    async fn find_by_deleted_false(
        con: &mut PgConnection,
    ) -> error_stack::Result<Vec<Question>, KernelError> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            // language=postgresql
            r#"
            SELECT id, title, contents, writer_id, deleted, created_at
            FROM questions
            WHERE deleted = FALSE
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(Question::try_from).collect()
    }

    async fn find_by_id_for_update(
        con: &mut PgConnection,
        id: &QuestionId,
    ) -> error_stack::Result<Option<Question>, KernelError> {
        let row = sqlx::query_as::<_, QuestionRow>(
            // language=postgresql
            r#"
            SELECT id, title, contents, writer_id, deleted, created_at
            FROM questions
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(Question::try_from).transpose()
    }

    async fn create(
        con: &mut PgConnection,
        question: &Question,
    ) -> error_stack::Result<(), KernelError> {
        let writer = writer_of(question)?;
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO questions (id, title, contents, writer_id, deleted, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(question.id().as_ref())
        .bind(question.title().as_ref())
        .bind(question.contents().as_ref())
        .bind(writer.as_ref())
        .bind(question.is_deleted())
        .bind(question.created_at().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(
        con: &mut PgConnection,
        question: &Question,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        let result = sqlx::query(
            r#"
            UPDATE questions
            SET title = $2, contents = $3, deleted = $4
            WHERE id = $1
            "#,
        )
        .bind(question.id().as_ref())
        .bind(question.title().as_ref())
        .bind(question.contents().as_ref())
        .bind(question.is_deleted())
        .execute(con)
        .await
        .convert_error()?;
        ensure_affected(result.rows_affected(), "question")
    }
}
