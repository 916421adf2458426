mod contents;
mod id;

pub use self::{contents::*, id::*};
use crate::entity::common::{CreatedAt, IsDeleted};
use crate::entity::{Question, QuestionId, User, UserId};
use crate::KernelError;
use destructure::Destructure;
use error_stack::Report;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Answer {
    id: AnswerId,
    writer: UserId,
    question: QuestionId,
    contents: AnswerContents,
    deleted: IsDeleted<Answer>,
    created_at: CreatedAt<Answer>,
}

impl Answer {
    pub fn new(id: AnswerId, writer: &User, question: &Question, contents: AnswerContents) -> Self {
        Self {
            id,
            writer: writer.id().clone(),
            question: question.id().clone(),
            contents,
            deleted: IsDeleted::active(),
            created_at: CreatedAt::now(),
        }
    }

    /// Rebuilds a persisted answer.
    pub fn restore(
        id: AnswerId,
        writer: UserId,
        question: QuestionId,
        contents: AnswerContents,
        deleted: IsDeleted<Answer>,
        created_at: CreatedAt<Answer>,
    ) -> Self {
        Self {
            id,
            writer,
            question,
            contents,
            deleted,
            created_at,
        }
    }

    pub fn is_owner(&self, user: &User) -> bool {
        &self.writer == user.id()
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted.is_deleted()
    }

    pub fn delete(&mut self, requester: &User) -> error_stack::Result<(), KernelError> {
        self.ensure_owner(requester)?;
        self.mark_deleted();
        Ok(())
    }

    pub(crate) fn ensure_owner(&self, requester: &User) -> error_stack::Result<(), KernelError> {
        if !self.is_owner(requester) {
            return Err(Report::new(KernelError::CannotDelete).attach_printable(format!(
                "answer {} was written by another user",
                self.id.as_ref()
            )));
        }
        Ok(())
    }

    pub(crate) fn mark_deleted(&mut self) {
        self.deleted.mark();
    }

    pub(crate) fn attach_to(&mut self, question: &QuestionId) {
        self.question = question.clone();
    }
}
