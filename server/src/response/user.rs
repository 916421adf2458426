use crate::controller::Exhaust;
use crate::response::CreatedResponse;
use application::transfer::{ContentType, DeleteHistoryDto, UserDto};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    id: Uuid,
    login: String,
    name: String,
    email: String,
}

impl IntoResponse for UserResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteHistoryResponse {
    id: Uuid,
    content_type: &'static str,
    content_id: Uuid,
    deleted_by: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
}

impl From<DeleteHistoryDto> for DeleteHistoryResponse {
    fn from(value: DeleteHistoryDto) -> Self {
        let content_type = match value.content_type {
            ContentType::Question => "question",
            ContentType::Answer => "answer",
        };
        Self {
            id: value.id,
            content_type,
            content_id: value.content_id,
            deleted_by: value.deleted_by,
            created_at: value.created_at,
        }
    }
}

pub struct UserPresenter;

impl Exhaust<Uuid> for UserPresenter {
    type To = CreatedResponse;
    fn emit(&self, input: Uuid) -> Self::To {
        CreatedResponse::new(input)
    }
}

impl Exhaust<Option<UserDto>> for UserPresenter {
    type To = Option<UserResponse>;
    fn emit(&self, input: Option<UserDto>) -> Self::To {
        input.map(|user| UserResponse {
            id: user.id,
            login: user.login,
            name: user.name,
            email: user.email,
        })
    }
}

impl Exhaust<Vec<DeleteHistoryDto>> for UserPresenter {
    type To = axum::Json<Vec<DeleteHistoryResponse>>;
    fn emit(&self, input: Vec<DeleteHistoryDto>) -> Self::To {
        let result = input
            .into_iter()
            .map(DeleteHistoryResponse::from)
            .collect::<Vec<_>>();
        axum::Json::from(result)
    }
}
