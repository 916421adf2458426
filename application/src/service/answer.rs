use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnQuestionQuery, DependOnUserQuery, QuestionQuery, UserQuery};
use kernel::interface::update::{AnswerModifier, DependOnAnswerModifier};
use kernel::prelude::entity::{Answer, AnswerContents, AnswerId, QuestionId, UserId};
use kernel::{KernelError, Required};

use crate::service::not_found;
use crate::transfer::CreateAnswerDto;

#[async_trait::async_trait]
pub trait CreateAnswerService:
    'static + Sync + Send + DependOnUserQuery + DependOnQuestionQuery + DependOnAnswerModifier
{
    /// Adds an answer to a live question. The question row stays locked until commit so a
    /// concurrent delete cannot miss the new answer.
    async fn create_answer(&self, dto: CreateAnswerDto) -> error_stack::Result<Uuid, KernelError> {
        let contents = AnswerContents::new(dto.contents.required("contents")?);

        let mut connection = self.database_connection().transact().await?;
        let writer = self
            .user_query()
            .find_by_id(&mut connection, &UserId::new(dto.writer))
            .await?
            .ok_or_else(|| not_found("user", &dto.writer))?;
        let question = self
            .question_query()
            .find_by_id_for_update(&mut connection, &QuestionId::new(dto.question))
            .await?
            .filter(|question| !question.is_deleted())
            .ok_or_else(|| not_found("question", &dto.question))?;

        let uuid = Uuid::new_v4();
        let answer = Answer::new(AnswerId::new(uuid), &writer, &question, contents);
        self.answer_modifier().create(&mut connection, &answer).await?;
        connection.commit().await?;

        tracing::info!(answer = %uuid, question = %dto.question, "answer created");
        Ok(uuid)
    }
}

impl<T> CreateAnswerService for T where
    T: DependOnUserQuery + DependOnQuestionQuery + DependOnAnswerModifier
{
}
