use error_stack::Report;

use kernel::interface::query::QuestionQuery;
use kernel::interface::update::QuestionModifier;
use kernel::prelude::entity::{DestructQuestion, Question, QuestionId};
use kernel::KernelError;

use crate::database::memory::MemoryConnection;

pub struct MemoryQuestionRepository;

/// Drops the loaded answers; they are stored as separate rows.
fn detach(question: &Question) -> error_stack::Result<Question, KernelError> {
    let DestructQuestion {
        id,
        title,
        contents,
        writer,
        deleted,
        created_at,
        ..
    } = question.clone().into_destruct();
    let writer = writer.ok_or_else(|| {
        Report::new(KernelError::Validation)
            .attach_printable(format!("question {} has no writer", id.as_ref()))
    })?;
    Ok(Question::restore(
        id, title, contents, writer, deleted, created_at,
    ))
}

#[async_trait::async_trait]
impl QuestionQuery for MemoryQuestionRepository {
    type Transaction = MemoryConnection;
    async fn find_by_id(
        &self,
        con: &mut MemoryConnection,
        id: &QuestionId,
    ) -> error_stack::Result<Option<Question>, KernelError> {
        let found = con.working.questions.iter().find(|question| question.id() == id);
        Ok(found.cloned())
    }

    async fn find_by_id_and_deleted_false(
        &self,
        con: &mut MemoryConnection,
        id: &QuestionId,
    ) -> error_stack::Result<Option<Question>, KernelError> {
        let found = con
            .working
            .questions
            .iter()
            .find(|question| question.id() == id && !question.is_deleted());
        Ok(found.cloned())
    }

    async fn find_by_deleted_false(
        &self,
        con: &mut MemoryConnection,
    ) -> error_stack::Result<Vec<Question>, KernelError> {
        Ok(con
            .working
            .questions
            .iter()
            .filter(|question| !question.is_deleted())
            .cloned()
            .collect())
    }

    async fn find_by_id_for_update(
        &self,
        con: &mut MemoryConnection,
        id: &QuestionId,
    ) -> error_stack::Result<Option<Question>, KernelError> {
        // the connection already holds the whole store
        self.find_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl QuestionModifier for MemoryQuestionRepository {
    type Transaction = MemoryConnection;
    async fn create(
        &self,
        con: &mut MemoryConnection,
        question: &Question,
    ) -> error_stack::Result<(), KernelError> {
        let question = detach(question)?;
        let questions = &mut con.working.questions;
        if questions.iter().any(|stored| stored.id() == question.id()) {
            return Err(Report::new(KernelError::Internal).attach_printable(format!(
                "question {} already exists",
                question.id().as_ref()
            )));
        }
        questions.push(question);
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MemoryConnection,
        question: &Question,
    ) -> error_stack::Result<(), KernelError> {
        let question = detach(question)?;
        let Some(stored) = con
            .working
            .questions
            .iter_mut()
            .find(|stored| stored.id() == question.id())
        else {
            return Err(Report::new(KernelError::NotFound).attach_printable(format!(
                "question {} does not exist",
                question.id().as_ref()
            )));
        };
        *stored = question;
        Ok(())
    }
}
