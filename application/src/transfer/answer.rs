use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{Answer, DestructAnswer};

#[derive(Debug, Clone)]
pub struct AnswerDto {
    pub id: Uuid,
    pub writer: Uuid,
    pub question: Uuid,
    pub contents: String,
    pub deleted: bool,
    pub created_at: OffsetDateTime,
}

impl From<Answer> for AnswerDto {
    fn from(value: Answer) -> Self {
        let DestructAnswer {
            id,
            writer,
            question,
            contents,
            deleted,
            created_at,
        } = value.into_destruct();
        Self {
            id: id.into(),
            writer: writer.into(),
            question: question.into(),
            contents: contents.into(),
            deleted: deleted.into(),
            created_at: created_at.into(),
        }
    }
}

pub struct CreateAnswerDto {
    pub question: Uuid,
    pub writer: Uuid,
    pub contents: Option<String>,
}
