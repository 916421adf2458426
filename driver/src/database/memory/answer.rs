use error_stack::Report;

use kernel::interface::query::AnswerQuery;
use kernel::interface::update::AnswerModifier;
use kernel::prelude::entity::{Answer, QuestionId};
use kernel::KernelError;

use crate::database::memory::MemoryConnection;

pub struct MemoryAnswerRepository;

#[async_trait::async_trait]
impl AnswerQuery for MemoryAnswerRepository {
    type Transaction = MemoryConnection;
    async fn find_by_question_id(
        &self,
        con: &mut MemoryConnection,
        question_id: &QuestionId,
    ) -> error_stack::Result<Vec<Answer>, KernelError> {
        Ok(con
            .working
            .answers
            .iter()
            .filter(|answer| answer.question() == question_id)
            .cloned()
            .collect())
    }

    async fn find_by_question_id_and_deleted_false(
        &self,
        con: &mut MemoryConnection,
        question_id: &QuestionId,
    ) -> error_stack::Result<Vec<Answer>, KernelError> {
        Ok(con
            .working
            .answers
            .iter()
            .filter(|answer| answer.question() == question_id && !answer.is_deleted())
            .cloned()
            .collect())
    }
}

#[async_trait::async_trait]
impl AnswerModifier for MemoryAnswerRepository {
    type Transaction = MemoryConnection;
    async fn create(
        &self,
        con: &mut MemoryConnection,
        answer: &Answer,
    ) -> error_stack::Result<(), KernelError> {
        let store = &mut con.working;
        if !store
            .questions
            .iter()
            .any(|question| question.id() == answer.question())
        {
            return Err(Report::new(KernelError::Internal).attach_printable(format!(
                "question {} does not exist",
                answer.question().as_ref()
            )));
        }
        if store.answers.iter().any(|stored| stored.id() == answer.id()) {
            return Err(Report::new(KernelError::Internal).attach_printable(format!(
                "answer {} already exists",
                answer.id().as_ref()
            )));
        }
        store.answers.push(answer.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MemoryConnection,
        answer: &Answer,
    ) -> error_stack::Result<(), KernelError> {
        let Some(stored) = con
            .working
            .answers
            .iter_mut()
            .find(|stored| stored.id() == answer.id())
        else {
            return Err(Report::new(KernelError::NotFound)
                .attach_printable(format!("answer {} does not exist", answer.id().as_ref())));
        };
        *stored = answer.clone();
        Ok(())
    }
}
