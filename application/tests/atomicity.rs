mod common;

use error_stack::Report;

use application::service::{
    DeleteQuestionService, GetDeleteHistoryService, GetQuestionService,
};
use application::transfer::{DeleteQuestionDto, GetDeleteHistoryDto, GetQuestionDto};
use driver::database::{
    MemoryAnswerRepository, MemoryConnection, MemoryDatabase, MemoryDeleteHistoryRepository,
    MemoryQuestionRepository, MemoryUserRepository,
};
use kernel::interface::database::DatabaseConnection;
use kernel::interface::query::{
    DependOnAnswerQuery, DependOnQuestionQuery, DependOnUserQuery,
};
use kernel::interface::update::{
    AnswerModifier, DependOnAnswerModifier, DependOnDeleteHistoryModifier,
    DependOnQuestionModifier,
};
use kernel::prelude::entity::Answer;
use kernel::KernelError;

/// Shares the store of a [`MemoryDatabase`] but fails every answer update.
struct FaultyDatabase(MemoryDatabase);

struct FailingAnswerModifier;

#[async_trait::async_trait]
impl AnswerModifier for FailingAnswerModifier {
    type Transaction = MemoryConnection;
    async fn create(
        &self,
        con: &mut MemoryConnection,
        answer: &Answer,
    ) -> error_stack::Result<(), KernelError> {
        MemoryAnswerRepository.create(con, answer).await
    }

    async fn update(
        &self,
        _con: &mut MemoryConnection,
        answer: &Answer,
    ) -> error_stack::Result<(), KernelError> {
        Err(Report::new(KernelError::Internal)
            .attach_printable(format!("injected failure on answer {}", answer.id().as_ref())))
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for FaultyDatabase {
    type Transaction = MemoryConnection;
    async fn transact(&self) -> error_stack::Result<MemoryConnection, KernelError> {
        self.0.transact().await
    }
}

impl DependOnUserQuery for FaultyDatabase {
    type UserQuery = MemoryUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        self.0.user_query()
    }
}

impl DependOnQuestionQuery for FaultyDatabase {
    type QuestionQuery = MemoryQuestionRepository;
    fn question_query(&self) -> &Self::QuestionQuery {
        self.0.question_query()
    }
}

impl DependOnAnswerQuery for FaultyDatabase {
    type AnswerQuery = MemoryAnswerRepository;
    fn answer_query(&self) -> &Self::AnswerQuery {
        self.0.answer_query()
    }
}

impl DependOnQuestionModifier for FaultyDatabase {
    type QuestionModifier = MemoryQuestionRepository;
    fn question_modifier(&self) -> &Self::QuestionModifier {
        self.0.question_modifier()
    }
}

impl DependOnAnswerModifier for FaultyDatabase {
    type AnswerModifier = FailingAnswerModifier;
    fn answer_modifier(&self) -> &Self::AnswerModifier {
        &FailingAnswerModifier
    }
}

impl DependOnDeleteHistoryModifier for FaultyDatabase {
    type DeleteHistoryModifier = MemoryDeleteHistoryRepository;
    fn delete_history_modifier(&self) -> &Self::DeleteHistoryModifier {
        self.0.delete_history_modifier()
    }
}

#[tokio::test]
async fn failed_cascade_leaves_nothing_behind() -> error_stack::Result<(), KernelError> {
    let db = MemoryDatabase::new();
    let javajigi = common::user(&db, "javajigi").await?;
    let id = common::question(&db, javajigi, "title1").await?;
    common::answer(&db, id, javajigi).await?;

    let faulty = FaultyDatabase(db.clone());
    let report = faulty
        .delete_question(DeleteQuestionDto {
            id,
            requester: javajigi,
        })
        .await
        .unwrap_err();
    assert_eq!(report.current_context(), &KernelError::Internal);

    let found = db.get_question(GetQuestionDto { id }).await?.unwrap();
    assert!(!found.deleted);
    assert_eq!(found.answers.len(), 1);
    assert!(db
        .get_delete_histories(GetDeleteHistoryDto {
            deleted_by: javajigi
        })
        .await?
        .is_empty());
    Ok(())
}

#[tokio::test]
async fn question_without_answers_never_touches_answer_store() -> error_stack::Result<(), KernelError>
{
    let db = MemoryDatabase::new();
    let javajigi = common::user(&db, "javajigi").await?;
    let id = common::question(&db, javajigi, "title1").await?;

    FaultyDatabase(db.clone())
        .delete_question(DeleteQuestionDto {
            id,
            requester: javajigi,
        })
        .await?;

    assert!(db.get_question(GetQuestionDto { id }).await?.is_none());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_deletes_apply_once() -> error_stack::Result<(), KernelError> {
    let db = MemoryDatabase::new();
    let javajigi = common::user(&db, "javajigi").await?;
    let id = common::question(&db, javajigi, "title1").await?;
    common::answer(&db, id, javajigi).await?;
    common::answer(&db, id, javajigi).await?;

    let tasks = (0..2)
        .map(|_| {
            let db = db.clone();
            tokio::spawn(async move {
                db.delete_question(DeleteQuestionDto {
                    id,
                    requester: javajigi,
                })
                .await
            })
        })
        .collect::<Vec<_>>();

    let mut succeeded = 0;
    for task in tasks {
        match task.await {
            Ok(Ok(())) => succeeded += 1,
            Ok(Err(report)) => assert_eq!(report.current_context(), &KernelError::NotFound),
            Err(join) => panic!("delete task panicked: {join}"),
        }
    }
    assert_eq!(succeeded, 1);

    let histories = db
        .get_delete_histories(GetDeleteHistoryDto {
            deleted_by: javajigi,
        })
        .await?;
    assert_eq!(histories.len(), 3);
    Ok(())
}
