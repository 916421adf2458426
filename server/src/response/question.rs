use crate::controller::Exhaust;
use crate::response::CreatedResponse;
use application::transfer::{AnswerDto, QuestionDto};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    id: Uuid,
    writer: Uuid,
    contents: String,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
}

impl From<AnswerDto> for AnswerResponse {
    fn from(value: AnswerDto) -> Self {
        Self {
            id: value.id,
            writer: value.writer,
            contents: value.contents,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    id: Uuid,
    title: String,
    contents: String,
    writer: Option<Uuid>,
    answers: Vec<AnswerResponse>,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
}

impl From<QuestionDto> for QuestionResponse {
    fn from(value: QuestionDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            contents: value.contents,
            writer: value.writer,
            answers: value
                .answers
                .into_iter()
                .map(AnswerResponse::from)
                .collect(),
            created_at: value.created_at,
        }
    }
}

impl IntoResponse for QuestionResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

pub struct QuestionPresenter;

impl Exhaust<Uuid> for QuestionPresenter {
    type To = CreatedResponse;
    fn emit(&self, input: Uuid) -> Self::To {
        CreatedResponse::new(input)
    }
}

impl Exhaust<Option<QuestionDto>> for QuestionPresenter {
    type To = Option<QuestionResponse>;
    fn emit(&self, input: Option<QuestionDto>) -> Self::To {
        input.map(QuestionResponse::from)
    }
}

impl Exhaust<Vec<QuestionDto>> for QuestionPresenter {
    type To = axum::Json<Vec<QuestionResponse>>;
    fn emit(&self, input: Vec<QuestionDto>) -> Self::To {
        axum::Json::from(
            input
                .into_iter()
                .map(QuestionResponse::from)
                .collect::<Vec<_>>(),
        )
    }
}

impl Exhaust<()> for QuestionPresenter {
    type To = StatusCode;
    fn emit(&self, _: ()) -> Self::To {
        StatusCode::NO_CONTENT
    }
}

#[cfg(test)]
mod test {
    use axum::http::StatusCode;
    use time::OffsetDateTime;
    use uuid::Uuid;

    use application::transfer::{AnswerDto, QuestionDto};

    use crate::controller::Exhaust;
    use crate::response::QuestionPresenter;

    #[test]
    fn question_serializes_with_answers() {
        let id = Uuid::new_v4();
        let writer = Uuid::new_v4();
        let dto = QuestionDto {
            id,
            title: "title1".to_string(),
            contents: "contents1".to_string(),
            writer: Some(writer),
            deleted: false,
            answers: vec![AnswerDto {
                id: Uuid::new_v4(),
                writer,
                question: id,
                contents: "Answers Contents1".to_string(),
                deleted: false,
                created_at: OffsetDateTime::UNIX_EPOCH,
            }],
            created_at: OffsetDateTime::UNIX_EPOCH,
        };

        let response = QuestionPresenter.emit(Some(dto)).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["title"], "title1");
        assert_eq!(json["writer"], writer.to_string());
        assert_eq!(json["answers"][0]["contents"], "Answers Contents1");
        assert_eq!(json["created_at"], "1970-01-01T00:00:00Z");
    }

    #[test]
    fn delete_has_no_content() {
        assert_eq!(QuestionPresenter.emit(()), StatusCode::NO_CONTENT);
    }
}
