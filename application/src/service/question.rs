use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    AnswerQuery, DependOnAnswerQuery, DependOnQuestionQuery, DependOnUserQuery, QuestionQuery,
    UserQuery,
};
use kernel::interface::update::{
    AnswerModifier, DeleteHistoryModifier, DependOnAnswerModifier, DependOnDeleteHistoryModifier,
    DependOnQuestionModifier, QuestionModifier,
};
use kernel::prelude::entity::{
    DeleteHistory, Question, QuestionContents, QuestionId, QuestionTitle, UserId,
};
use kernel::{KernelError, Required};

use crate::service::not_found;
use crate::transfer::{CreateQuestionDto, DeleteQuestionDto, GetQuestionDto, QuestionDto};

#[async_trait::async_trait]
pub trait GetQuestionService:
    'static + Sync + Send + DependOnQuestionQuery + DependOnAnswerQuery
{
    /// Returns the question with its live answers attached, or `None` when it is missing or deleted.
    async fn get_question(
        &self,
        dto: GetQuestionDto,
    ) -> error_stack::Result<Option<QuestionDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let id = QuestionId::new(dto.id);
        let Some(mut question) = self
            .question_query()
            .find_by_id_and_deleted_false(&mut connection, &id)
            .await?
        else {
            return Ok(None);
        };
        let answers = self
            .answer_query()
            .find_by_question_id_and_deleted_false(&mut connection, &id)
            .await?;
        answers
            .into_iter()
            .for_each(|answer| question.add_answer(answer));
        connection.commit().await?;

        Ok(Some(QuestionDto::from(question)))
    }

    async fn get_all_questions(&self) -> error_stack::Result<Vec<QuestionDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let questions = self
            .question_query()
            .find_by_deleted_false(&mut connection)
            .await?;
        connection.commit().await?;

        Ok(questions.into_iter().map(QuestionDto::from).collect())
    }
}

impl<T> GetQuestionService for T where T: DependOnQuestionQuery + DependOnAnswerQuery {}

#[async_trait::async_trait]
pub trait CreateQuestionService:
    'static + Sync + Send + DependOnUserQuery + DependOnQuestionModifier
{
    async fn create_question(
        &self,
        dto: CreateQuestionDto,
    ) -> error_stack::Result<Uuid, KernelError> {
        let title = QuestionTitle::new(dto.title.required("title")?)?;
        let contents = QuestionContents::new(dto.contents.required("contents")?);

        let mut connection = self.database_connection().transact().await?;
        let writer = self
            .user_query()
            .find_by_id(&mut connection, &UserId::new(dto.writer))
            .await?
            .ok_or_else(|| not_found("user", &dto.writer))?;

        let uuid = Uuid::new_v4();
        let question = Question::new(QuestionId::new(uuid), title, contents).write_by(&writer);
        self.question_modifier()
            .create(&mut connection, &question)
            .await?;
        connection.commit().await?;

        tracing::info!(question = %uuid, writer = %dto.writer, "question created");
        Ok(uuid)
    }
}

impl<T> CreateQuestionService for T where T: DependOnUserQuery + DependOnQuestionModifier {}

#[async_trait::async_trait]
pub trait DeleteQuestionService:
    'static
    + Sync
    + Send
    + DependOnUserQuery
    + DependOnQuestionQuery
    + DependOnAnswerQuery
    + DependOnQuestionModifier
    + DependOnAnswerModifier
    + DependOnDeleteHistoryModifier
{
    /// Soft-deletes the question and its live answers on behalf of `dto.requester`.
    ///
    /// Every transitioned entity gets a [`DeleteHistory`]. Either all of it is committed or none.
    async fn delete_question(&self, dto: DeleteQuestionDto) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let requester = self
            .user_query()
            .find_by_id(&mut connection, &UserId::new(dto.requester))
            .await?
            .ok_or_else(|| not_found("user", &dto.requester))?;

        let id = QuestionId::new(dto.id);
        let mut question = self
            .question_query()
            .find_by_id_for_update(&mut connection, &id)
            .await?
            .filter(|question| !question.is_deleted())
            .ok_or_else(|| not_found("question", &dto.id))?;
        let answers = self
            .answer_query()
            .find_by_question_id(&mut connection, &id)
            .await?;
        answers
            .into_iter()
            .for_each(|answer| question.add_answer(answer));

        let cascaded = question
            .answers()
            .iter()
            .filter(|answer| !answer.is_deleted())
            .map(|answer| answer.id().clone())
            .collect::<Vec<_>>();

        if let Err(report) = question.delete(&requester) {
            connection.roll_back().await?;
            tracing::warn!(question = %dto.id, requester = %dto.requester, "delete rejected: {report:?}");
            return Err(report);
        }

        self.question_modifier()
            .update(&mut connection, &question)
            .await?;
        self.delete_history_modifier()
            .create(&mut connection, &DeleteHistory::of_question(&question, &requester))
            .await?;
        for answer in question
            .answers()
            .iter()
            .filter(|answer| cascaded.contains(answer.id()))
        {
            self.answer_modifier().update(&mut connection, answer).await?;
            self.delete_history_modifier()
                .create(&mut connection, &DeleteHistory::of_answer(answer, &requester))
                .await?;
        }
        connection.commit().await?;

        tracing::info!(
            question = %dto.id,
            requester = %dto.requester,
            answers = cascaded.len(),
            "question deleted"
        );
        Ok(())
    }
}

impl<T> DeleteQuestionService for T where
    T: DependOnUserQuery
        + DependOnQuestionQuery
        + DependOnAnswerQuery
        + DependOnQuestionModifier
        + DependOnAnswerModifier
        + DependOnDeleteHistoryModifier
{
}
