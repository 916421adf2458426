use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{DestructQuestion, Question};

use crate::transfer::AnswerDto;

#[derive(Debug, Clone)]
pub struct QuestionDto {
    pub id: Uuid,
    pub title: String,
    pub contents: String,
    pub writer: Option<Uuid>,
    pub deleted: bool,
    pub answers: Vec<AnswerDto>,
    pub created_at: OffsetDateTime,
}

impl From<Question> for QuestionDto {
    fn from(value: Question) -> Self {
        let DestructQuestion {
            id,
            title,
            contents,
            writer,
            answers,
            deleted,
            created_at,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            contents: contents.into(),
            writer: writer.map(Uuid::from),
            deleted: deleted.into(),
            answers: answers.into_iter().map(AnswerDto::from).collect(),
            created_at: created_at.into(),
        }
    }
}

pub struct GetQuestionDto {
    pub id: Uuid,
}

pub struct CreateQuestionDto {
    pub writer: Uuid,
    pub title: Option<String>,
    pub contents: Option<String>,
}

pub struct DeleteQuestionDto {
    pub id: Uuid,
    pub requester: Uuid,
}
