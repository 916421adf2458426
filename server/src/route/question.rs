use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{
    CreateAnswerRequest, CreateQuestionRequest, DeleteQuestionRequest, GetQuestionRequest,
    QuestionTransformer,
};
use crate::response::{QuestionPresenter, QuestionResponse};
use application::service::{
    CreateAnswerService, CreateQuestionService, DeleteQuestionService, GetQuestionService,
};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

pub trait QuestionRouter {
    fn route_question(self) -> Self;
}

impl QuestionRouter for Router<AppModule> {
    fn route_question(self) -> Self {
        self.route(
            "/questions",
            get(|State(handler): State<AppModule>| async move {
                Controller::new((), QuestionPresenter)
                    .bypass(|| async move { handler.pgpool().get_all_questions().await })
                    .await
                    .map_err(ErrorStatus::from)
            })
            .post(
                |State(handler): State<AppModule>, Json(req): Json<CreateQuestionRequest>| async move {
                    Controller::new(QuestionTransformer, QuestionPresenter)
                        .intake(req)
                        .handle(|dto| async move { handler.pgpool().create_question(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/questions/:id",
            get(
                |State(handler): State<AppModule>, Path(id): Path<Uuid>| async move {
                    Controller::new(QuestionTransformer, QuestionPresenter)
                        .intake(GetQuestionRequest::new(id))
                        .handle(|dto| async move { handler.pgpool().get_question(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .map(|res| {
                            res.map(QuestionResponse::into_response)
                                .unwrap_or_else(|| StatusCode::NOT_FOUND.into_response())
                        })
                },
            )
            .delete(
                |State(handler): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Query(req): Query<DeleteQuestionRequest>| async move {
                    Controller::new(QuestionTransformer, QuestionPresenter)
                        .intake((id, req))
                        .handle(|dto| async move { handler.pgpool().delete_question(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/questions/:id/answers",
            post(
                |State(handler): State<AppModule>,
                 Path(id): Path<Uuid>,
                 Json(req): Json<CreateAnswerRequest>| async move {
                    Controller::new(QuestionTransformer, QuestionPresenter)
                        .intake((id, req))
                        .handle(|dto| async move { handler.pgpool().create_answer(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
