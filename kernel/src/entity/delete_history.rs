mod content;
mod id;

pub use self::{content::*, id::*};
use crate::entity::common::CreatedAt;
use crate::entity::{Answer, Question, User, UserId};
use destructure::Destructure;
use uuid::Uuid;
use vodca::References;

/// Audit record written for every question or answer that becomes deleted.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct DeleteHistory {
    id: DeleteHistoryId,
    content: DeletedContent,
    deleted_by: UserId,
    created_at: CreatedAt<DeleteHistory>,
}

impl DeleteHistory {
    pub fn new(
        id: DeleteHistoryId,
        content: DeletedContent,
        deleted_by: UserId,
        created_at: CreatedAt<DeleteHistory>,
    ) -> Self {
        Self {
            id,
            content,
            deleted_by,
            created_at,
        }
    }

    pub fn of_question(question: &Question, deleted_by: &User) -> Self {
        Self::record(DeletedContent::Question(question.id().clone()), deleted_by)
    }

    pub fn of_answer(answer: &Answer, deleted_by: &User) -> Self {
        Self::record(DeletedContent::Answer(answer.id().clone()), deleted_by)
    }

    fn record(content: DeletedContent, deleted_by: &User) -> Self {
        Self::new(
            DeleteHistoryId::new(Uuid::new_v4()),
            content,
            deleted_by.id().clone(),
            CreatedAt::now(),
        )
    }
}
