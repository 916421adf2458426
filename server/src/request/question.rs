use crate::controller::Intake;
use application::transfer::{
    CreateAnswerDto, CreateQuestionDto, DeleteQuestionDto, GetQuestionDto,
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    writer: Uuid,
    title: Option<String>,
    contents: Option<String>,
}

#[derive(Debug)]
pub struct GetQuestionRequest {
    id: Uuid,
}

impl GetQuestionRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

/// Query string of `DELETE /questions/:id`.
#[derive(Debug, Deserialize)]
pub struct DeleteQuestionRequest {
    requester: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CreateAnswerRequest {
    writer: Uuid,
    contents: Option<String>,
}

pub struct QuestionTransformer;

impl Intake<CreateQuestionRequest> for QuestionTransformer {
    type To = CreateQuestionDto;
    fn emit(&self, input: CreateQuestionRequest) -> Self::To {
        CreateQuestionDto {
            writer: input.writer,
            title: input.title,
            contents: input.contents,
        }
    }
}

impl Intake<GetQuestionRequest> for QuestionTransformer {
    type To = GetQuestionDto;
    fn emit(&self, input: GetQuestionRequest) -> Self::To {
        GetQuestionDto { id: input.id }
    }
}

impl Intake<(Uuid, DeleteQuestionRequest)> for QuestionTransformer {
    type To = DeleteQuestionDto;
    fn emit(&self, (id, req): (Uuid, DeleteQuestionRequest)) -> Self::To {
        DeleteQuestionDto {
            id,
            requester: req.requester,
        }
    }
}

impl Intake<(Uuid, CreateAnswerRequest)> for QuestionTransformer {
    type To = CreateAnswerDto;
    fn emit(&self, (question, req): (Uuid, CreateAnswerRequest)) -> Self::To {
        CreateAnswerDto {
            question,
            writer: req.writer,
            contents: req.contents,
        }
    }
}
