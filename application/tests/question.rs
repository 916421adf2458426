mod common;

use rand::distributions::{Alphanumeric, DistString};
use uuid::Uuid;

use application::service::{
    CreateAnswerService, CreateQuestionService, CreateUserService, DeleteQuestionService,
    GetDeleteHistoryService, GetQuestionService, GetUserService,
};
use application::transfer::{
    ContentType, CreateAnswerDto, CreateQuestionDto, CreateUserDto, DeleteQuestionDto,
    GetDeleteHistoryDto, GetQuestionDto, GetUserDto,
};
use driver::database::MemoryDatabase;
use kernel::KernelError;

#[tokio::test]
async fn created_question_is_owned_by_writer() -> error_stack::Result<(), KernelError> {
    let db = MemoryDatabase::new();
    let javajigi = common::user(&db, "javajigi").await?;

    let id = common::question(&db, javajigi, "title1").await?;
    let found = db.get_question(GetQuestionDto { id }).await?.unwrap();

    assert_eq!(found.title, "title1");
    assert_eq!(found.contents, "contents1");
    assert_eq!(found.writer, Some(javajigi));
    assert!(!found.deleted);
    assert!(found.answers.is_empty());
    Ok(())
}

#[tokio::test]
async fn missing_fields_are_rejected() -> error_stack::Result<(), KernelError> {
    let db = MemoryDatabase::new();
    let javajigi = common::user(&db, "javajigi").await?;

    let without_title = db
        .create_question(CreateQuestionDto {
            writer: javajigi,
            title: None,
            contents: Some("contents1".to_string()),
        })
        .await
        .unwrap_err();
    assert_eq!(without_title.current_context(), &KernelError::Validation);

    let without_contents = db
        .create_question(CreateQuestionDto {
            writer: javajigi,
            title: Some("title1".to_string()),
            contents: None,
        })
        .await
        .unwrap_err();
    assert_eq!(without_contents.current_context(), &KernelError::Validation);

    let without_login = db
        .create_user(CreateUserDto {
            login: None,
            password: Some("password".to_string()),
            name: None,
            email: None,
        })
        .await
        .unwrap_err();
    assert_eq!(without_login.current_context(), &KernelError::Validation);

    assert!(db.get_all_questions().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn too_long_title_is_rejected() -> error_stack::Result<(), KernelError> {
    let db = MemoryDatabase::new();
    let javajigi = common::user(&db, "javajigi").await?;

    let report = db
        .create_question(CreateQuestionDto {
            writer: javajigi,
            title: Some(Alphanumeric.sample_string(&mut rand::thread_rng(), 200)),
            contents: Some("contents1".to_string()),
        })
        .await
        .unwrap_err();

    assert_eq!(report.current_context(), &KernelError::Validation);
    assert!(db.get_all_questions().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn unknown_writer_is_not_found() -> error_stack::Result<(), KernelError> {
    let db = MemoryDatabase::new();

    let report = common::question(&db, Uuid::new_v4(), "title1")
        .await
        .unwrap_err();

    assert_eq!(report.current_context(), &KernelError::NotFound);
    Ok(())
}

#[tokio::test]
async fn created_user_is_readable() -> error_stack::Result<(), KernelError> {
    let db = MemoryDatabase::new();
    let id = db
        .create_user(CreateUserDto {
            login: Some("sanjigi".to_string()),
            password: Some("password".to_string()),
            name: None,
            email: None,
        })
        .await?;

    let found = db.get_user(GetUserDto { id }).await?.unwrap();
    assert_eq!(found.login, "sanjigi");
    assert_eq!(found.name, "");
    assert!(db
        .get_user(GetUserDto { id: Uuid::new_v4() })
        .await?
        .is_none());
    Ok(())
}

#[tokio::test]
async fn taken_login_is_rejected() -> error_stack::Result<(), KernelError> {
    let db = MemoryDatabase::new();
    let first = common::user(&db, "bestsilver").await?;

    let report = common::user(&db, "bestsilver").await.unwrap_err();

    assert_eq!(report.current_context(), &KernelError::Validation);
    assert!(db.get_user(GetUserDto { id: first }).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn live_questions_are_listed() -> error_stack::Result<(), KernelError> {
    let db = MemoryDatabase::new();
    let javajigi = common::user(&db, "javajigi").await?;
    let first = common::question(&db, javajigi, "title1").await?;
    let second = common::question(&db, javajigi, "title3").await?;
    let deleted = common::question(&db, javajigi, "title2").await?;
    db.delete_question(DeleteQuestionDto {
        id: deleted,
        requester: javajigi,
    })
    .await?;

    let all = db.get_all_questions().await?;
    let ids = all.iter().map(|question| question.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![first, second]);

    assert!(db
        .get_question(GetQuestionDto { id: deleted })
        .await?
        .is_none());
    Ok(())
}

#[tokio::test]
async fn stranger_cannot_delete() -> error_stack::Result<(), KernelError> {
    let db = MemoryDatabase::new();
    let javajigi = common::user(&db, "javajigi").await?;
    let sanjigi = common::user(&db, "sanjigi").await?;
    let id = common::question(&db, javajigi, "title1").await?;

    let report = db
        .delete_question(DeleteQuestionDto {
            id,
            requester: sanjigi,
        })
        .await
        .unwrap_err();

    assert_eq!(report.current_context(), &KernelError::CannotDelete);
    assert!(db.get_question(GetQuestionDto { id }).await?.is_some());
    assert!(db
        .get_delete_histories(GetDeleteHistoryDto {
            deleted_by: sanjigi
        })
        .await?
        .is_empty());
    Ok(())
}

#[tokio::test]
async fn foreign_answer_blocks_delete() -> error_stack::Result<(), KernelError> {
    let db = MemoryDatabase::new();
    let javajigi = common::user(&db, "javajigi").await?;
    let sanjigi = common::user(&db, "sanjigi").await?;
    let id = common::question(&db, javajigi, "title1").await?;
    common::answer(&db, id, javajigi).await?;
    common::answer(&db, id, sanjigi).await?;

    let report = db
        .delete_question(DeleteQuestionDto {
            id,
            requester: javajigi,
        })
        .await
        .unwrap_err();

    assert_eq!(report.current_context(), &KernelError::CannotDelete);
    let found = db.get_question(GetQuestionDto { id }).await?.unwrap();
    assert_eq!(found.answers.len(), 2);
    assert!(found.answers.iter().all(|answer| !answer.deleted));
    assert!(db
        .get_delete_histories(GetDeleteHistoryDto {
            deleted_by: javajigi
        })
        .await?
        .is_empty());
    Ok(())
}

#[tokio::test]
async fn delete_cascades_to_own_answers() -> error_stack::Result<(), KernelError> {
    let db = MemoryDatabase::new();
    let javajigi = common::user(&db, "javajigi").await?;
    let id = common::question(&db, javajigi, "title1").await?;
    let first = common::answer(&db, id, javajigi).await?;
    let second = common::answer(&db, id, javajigi).await?;

    db.delete_question(DeleteQuestionDto {
        id,
        requester: javajigi,
    })
    .await?;

    assert!(db.get_question(GetQuestionDto { id }).await?.is_none());

    let histories = db
        .get_delete_histories(GetDeleteHistoryDto {
            deleted_by: javajigi,
        })
        .await?;
    let recorded = histories
        .iter()
        .map(|history| (history.content_type, history.content_id))
        .collect::<Vec<_>>();
    assert_eq!(
        recorded,
        vec![
            (ContentType::Question, id),
            (ContentType::Answer, first),
            (ContentType::Answer, second),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn deleted_question_rejects_answers_and_deletes() -> error_stack::Result<(), KernelError> {
    let db = MemoryDatabase::new();
    let javajigi = common::user(&db, "javajigi").await?;
    let id = common::question(&db, javajigi, "title1").await?;
    db.delete_question(DeleteQuestionDto {
        id,
        requester: javajigi,
    })
    .await?;

    let answer = db
        .create_answer(CreateAnswerDto {
            question: id,
            writer: javajigi,
            contents: Some("Answers Contents1".to_string()),
        })
        .await
        .unwrap_err();
    assert_eq!(answer.current_context(), &KernelError::NotFound);

    let again = db
        .delete_question(DeleteQuestionDto {
            id,
            requester: javajigi,
        })
        .await
        .unwrap_err();
    assert_eq!(again.current_context(), &KernelError::NotFound);

    let histories = db
        .get_delete_histories(GetDeleteHistoryDto {
            deleted_by: javajigi,
        })
        .await?;
    assert_eq!(histories.len(), 1);
    Ok(())
}

#[tokio::test]
async fn answer_without_contents_is_rejected() -> error_stack::Result<(), KernelError> {
    let db = MemoryDatabase::new();
    let javajigi = common::user(&db, "javajigi").await?;
    let id = common::question(&db, javajigi, "title1").await?;

    let report = db
        .create_answer(CreateAnswerDto {
            question: id,
            writer: javajigi,
            contents: None,
        })
        .await
        .unwrap_err();

    assert_eq!(report.current_context(), &KernelError::Validation);
    Ok(())
}
