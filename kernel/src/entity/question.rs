mod contents;
mod id;
mod title;

pub use self::{contents::*, id::*, title::*};
use crate::entity::common::{CreatedAt, IsDeleted};
use crate::entity::{Answer, User, UserId};
use crate::KernelError;
use destructure::Destructure;
use error_stack::{Report, ResultExt};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Question {
    id: QuestionId,
    title: QuestionTitle,
    contents: QuestionContents,
    writer: Option<UserId>,
    answers: Vec<Answer>,
    deleted: IsDeleted<Question>,
    created_at: CreatedAt<Question>,
}

impl Question {
    /// Creates an unauthored question; bind it with [`Question::write_by`].
    pub fn new(id: QuestionId, title: QuestionTitle, contents: QuestionContents) -> Self {
        Self {
            id,
            title,
            contents,
            writer: None,
            answers: Vec::new(),
            deleted: IsDeleted::active(),
            created_at: CreatedAt::now(),
        }
    }

    /// Rebuilds a persisted question without its answers.
    pub fn restore(
        id: QuestionId,
        title: QuestionTitle,
        contents: QuestionContents,
        writer: UserId,
        deleted: IsDeleted<Question>,
        created_at: CreatedAt<Question>,
    ) -> Self {
        Self {
            id,
            title,
            contents,
            writer: Some(writer),
            answers: Vec::new(),
            deleted,
            created_at,
        }
    }

    pub fn write_by(mut self, writer: &User) -> Self {
        self.writer = Some(writer.id().clone());
        self
    }

    pub fn is_owner(&self, user: &User) -> bool {
        self.writer.as_ref() == Some(user.id())
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted.is_deleted()
    }

    pub fn add_answer(&mut self, mut answer: Answer) {
        answer.attach_to(&self.id);
        self.answers.push(answer);
    }

    /// Checks that `requester` may delete this question together with its live answers.
    ///
    /// Answers that are already deleted are not checked.
    pub fn validate_delete(&self, requester: &User) -> error_stack::Result<(), KernelError> {
        if !self.is_owner(requester) {
            return Err(Report::new(KernelError::CannotDelete).attach_printable(format!(
                "question {} was written by another user",
                self.id.as_ref()
            )));
        }
        self.answers
            .iter()
            .filter(|answer| !answer.is_deleted())
            .try_for_each(|answer| answer.ensure_owner(requester))
            .attach_printable_lazy(|| {
                format!(
                    "question {} has answers from other users",
                    self.id.as_ref()
                )
            })
    }

    /// Soft-deletes this question and every live answer, or nothing at all.
    pub fn delete(&mut self, requester: &User) -> error_stack::Result<(), KernelError> {
        self.validate_delete(requester)?;
        self.deleted.mark();
        self.answers
            .iter_mut()
            .filter(|answer| !answer.is_deleted())
            .for_each(Answer::mark_deleted);
        Ok(())
    }
}
