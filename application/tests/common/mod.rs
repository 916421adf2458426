use uuid::Uuid;

use application::service::{CreateAnswerService, CreateQuestionService, CreateUserService};
use application::transfer::{CreateAnswerDto, CreateQuestionDto, CreateUserDto};
use driver::database::MemoryDatabase;
use kernel::KernelError;

pub async fn user(db: &MemoryDatabase, login: &str) -> error_stack::Result<Uuid, KernelError> {
    db.create_user(CreateUserDto {
        login: Some(login.to_string()),
        password: Some("password".to_string()),
        name: Some("name".to_string()),
        email: Some(format!("{login}@ggg.net")),
    })
    .await
}

pub async fn question(
    db: &MemoryDatabase,
    writer: Uuid,
    title: &str,
) -> error_stack::Result<Uuid, KernelError> {
    db.create_question(CreateQuestionDto {
        writer,
        title: Some(title.to_string()),
        contents: Some("contents1".to_string()),
    })
    .await
}

pub async fn answer(
    db: &MemoryDatabase,
    question: Uuid,
    writer: Uuid,
) -> error_stack::Result<Uuid, KernelError> {
    db.create_answer(CreateAnswerDto {
        question,
        writer,
        contents: Some("Answers Contents1".to_string()),
    })
    .await
}
