use sqlx::types::time::OffsetDateTime;
use sqlx::types::Uuid;
use sqlx::PgConnection;

use kernel::interface::query::AnswerQuery;
use kernel::interface::update::AnswerModifier;
use kernel::prelude::entity::{
    Answer, AnswerContents, AnswerId, CreatedAt, IsDeleted, QuestionId, UserId,
};
use kernel::KernelError;

use crate::database::ensure_affected;
use crate::database::postgres::PostgresConnection;
use crate::error::ConvertError;

pub struct PostgresAnswerRepository;

#[async_trait::async_trait]
impl AnswerQuery for PostgresAnswerRepository {
    type Transaction = PostgresConnection;
    async fn find_by_question_id(
        &self,
        con: &mut PostgresConnection,
        question_id: &QuestionId,
    ) -> error_stack::Result<Vec<Answer>, KernelError> {
        PgAnswerInternal::find_by_question_id(con, question_id).await
    }

    async fn find_by_question_id_and_deleted_false(
        &self,
        con: &mut PostgresConnection,
        question_id: &QuestionId,
    ) -> error_stack::Result<Vec<Answer>, KernelError> {
        PgAnswerInternal::find_by_question_id_and_deleted_false(con, question_id).await
    }
}

#[async_trait::async_trait]
impl AnswerModifier for PostgresAnswerRepository {
    type Transaction = PostgresConnection;
    async fn create(
        &self,
        con: &mut PostgresConnection,
        answer: &Answer,
    ) -> error_stack::Result<(), KernelError> {
        PgAnswerInternal::create(con, answer).await
    }

    async fn update(
        &self,
        con: &mut PostgresConnection,
        answer: &Answer,
    ) -> error_stack::Result<(), KernelError> {
        PgAnswerInternal::update(con, answer).await
    }
}

#[derive(sqlx::FromRow)]
struct AnswerRow {
    id: Uuid,
    writer_id: Uuid,
    question_id: Uuid,
    contents: String,
    deleted: bool,
    created_at: OffsetDateTime,
}

impl From<AnswerRow> for Answer {
    fn from(row: AnswerRow) -> Self {
        Answer::restore(
            AnswerId::new(row.id),
            UserId::new(row.writer_id),
            QuestionId::new(row.question_id),
            AnswerContents::new(row.contents),
            IsDeleted::new(row.deleted),
            CreatedAt::new(row.created_at),
        )
    }
}

pub(in crate::database) struct PgAnswerInternal;

impl PgAnswerInternal {
    async fn find_by_question_id(
        con: &mut PgConnection,
        question_id: &QuestionId,
    ) -> error_stack::Result<Vec<Answer>, KernelError> {
        let rows = sqlx::query_as::<_, AnswerRow>(
            // language=postgresql
            r#"
            SELECT id, writer_id, question_id, contents, deleted, created_at
            FROM answers
            WHERE question_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(question_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Answer::from).collect())
    }

    async fn find_by_question_id_and_deleted_false(
        con: &mut PgConnection,
        question_id: &QuestionId,
    ) -> error_stack::Result<Vec<Answer>, KernelError> {
        let rows = sqlx::query_as::<_, AnswerRow>(
            // language=postgresql
            r#"
            SELECT id, writer_id, question_id, contents, deleted, created_at
            FROM answers
            WHERE question_id = $1 AND deleted = FALSE
            ORDER BY created_at, id
            "#,
        )
        .bind(question_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Answer::from).collect())
    }

    async fn create(con: &mut PgConnection, answer: &Answer) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO answers (id, writer_id, question_id, contents, deleted, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(answer.id().as_ref())
        .bind(answer.writer().as_ref())
        .bind(answer.question().as_ref())
        .bind(answer.contents().as_ref())
        .bind(answer.is_deleted())
        .bind(answer.created_at().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, answer: &Answer) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        let result = sqlx::query(
            r#"
            UPDATE answers
            SET contents = $2, deleted = $3
            WHERE id = $1
            "#,
        )
        .bind(answer.id().as_ref())
        .bind(answer.contents().as_ref())
        .bind(answer.is_deleted())
        .execute(con)
        .await
        .convert_error()?;
        ensure_affected(result.rows_affected(), "answer")
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::AnswerQuery;
    use kernel::interface::update::{AnswerModifier, QuestionModifier, UserModifier};
    use kernel::prelude::entity::{
        Answer, AnswerContents, AnswerId, Question, QuestionContents, QuestionId, QuestionTitle,
        User, UserEmail, UserId, UserLogin, UserName, UserPassword,
    };
    use kernel::KernelError;

    use crate::database::postgres::{
        PostgresAnswerRepository, PostgresDatabase, PostgresQuestionRepository,
        PostgresUserRepository,
    };

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn cascade_hides_answers() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        db.migrate().await?;
        let mut con = db.transact().await?;

        let id = Uuid::new_v4();
        let writer = User::new(
            UserId::new(id),
            UserLogin::new(format!("bestsilver-{id}")),
            UserPassword::new("password"),
            UserName::new("name"),
            UserEmail::new("bestsilver@ggg.net"),
        );
        PostgresUserRepository.create(&mut con, &writer).await?;

        let mut question = Question::new(
            QuestionId::new(Uuid::new_v4()),
            QuestionTitle::new("title1")?,
            QuestionContents::new("contents1"),
        )
        .write_by(&writer);
        PostgresQuestionRepository
            .create(&mut con, &question)
            .await?;

        let answer = Answer::new(
            AnswerId::new(Uuid::new_v4()),
            &writer,
            &question,
            AnswerContents::new("Answers Contents2"),
        );
        PostgresAnswerRepository.create(&mut con, &answer).await?;
        question.add_answer(answer.clone());

        let live = PostgresAnswerRepository
            .find_by_question_id_and_deleted_false(&mut con, question.id())
            .await?;
        assert_eq!(live.len(), 1);

        question.delete(&writer)?;
        PostgresQuestionRepository
            .update(&mut con, &question)
            .await?;
        for answer in question.answers() {
            PostgresAnswerRepository.update(&mut con, answer).await?;
        }

        let live = PostgresAnswerRepository
            .find_by_question_id_and_deleted_false(&mut con, question.id())
            .await?;
        assert!(live.is_empty());

        let all = PostgresAnswerRepository
            .find_by_question_id(&mut con, question.id())
            .await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id(), answer.id());
        assert!(all[0].is_deleted());
        assert!(all[0].is_owner(&writer));

        Ok(())
    }
}
