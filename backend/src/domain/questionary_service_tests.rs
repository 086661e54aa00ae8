//! Tests for the questionary service.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{MockQuestionRepository, QuestionRepositoryError};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 1, 9, 30, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn service(repo: MockQuestionRepository) -> QuestionaryServiceImpl<MockQuestionRepository> {
    QuestionaryServiceImpl::new(
        Arc::new(repo),
        Arc::new(FixtureClock {
            utc_now: fixture_timestamp(),
        }),
    )
}

#[fixture]
fn answered() -> QuestionInfo {
    QuestionInfo {
        question: Question {
            id: "q-1".into(),
            statement: "is it great?".into(),
            user_id: "3".into(),
            created_on: fixture_timestamp(),
        },
        answer: Some(Answer {
            id: "a-1".into(),
            answer: "yes".into(),
            question_id: "q-1".into(),
            user_id: "33".into(),
            created_on: fixture_timestamp(),
        }),
    }
}

#[tokio::test]
async fn create_assigns_id_and_timestamp() {
    let mut repo = MockQuestionRepository::new();
    repo.expect_create().times(1).returning(Ok);

    let created = service(repo)
        .create(NewQuestion {
            statement: "is it great?".into(),
            user_id: "3".into(),
        })
        .await
        .expect("create succeeds");

    assert!(Uuid::parse_str(&created.id).is_ok());
    assert_eq!(created.statement, "is it great?");
    assert_eq!(created.user_id, "3");
    assert_eq!(created.created_on, fixture_timestamp());
}

#[tokio::test]
async fn create_generates_distinct_ids() {
    let mut repo = MockQuestionRepository::new();
    repo.expect_create().times(2).returning(Ok);
    let service = service(repo);
    let request = NewQuestion {
        statement: "twice?".into(),
        user_id: "1".into(),
    };

    let first = service.create(request.clone()).await.expect("first");
    let second = service.create(request).await.expect("second");

    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn create_maps_conflict() {
    let mut repo = MockQuestionRepository::new();
    repo.expect_create()
        .times(1)
        .returning(|question| Err(QuestionRepositoryError::conflict(question.id)));

    let error = service(repo)
        .create(NewQuestion {
            statement: "dup".into(),
            user_id: "1".into(),
        })
        .await
        .expect_err("conflict");

    assert_eq!(error.code(), ErrorCode::Conflict);
    assert_eq!(error.message(), QUESTION_ALREADY_EXISTS);
}

#[tokio::test]
async fn add_answer_stamps_answer_and_delegates() {
    let mut repo = MockQuestionRepository::new();
    repo.expect_add_answer()
        .withf(|answer| {
            answer.question_id == "q-1"
                && answer.user_id == "33"
                && !answer.id.is_empty()
                && answer.created_on == fixture_timestamp()
        })
        .times(1)
        .returning(|answer| {
            Ok(QuestionInfo {
                question: Question {
                    id: answer.question_id.clone(),
                    ..Question::default()
                },
                answer: Some(answer),
            })
        });

    let info = service(repo)
        .add_answer(NewAnswer {
            answer: "yes".into(),
            question_id: "q-1".into(),
            user_id: "33".into(),
        })
        .await
        .expect("answer added");

    assert!(info.is_answered());
}

#[tokio::test]
async fn add_answer_maps_already_answered_to_conflict() {
    let mut repo = MockQuestionRepository::new();
    repo.expect_add_answer()
        .times(1)
        .returning(|answer| Err(QuestionRepositoryError::already_answered(answer.question_id)));

    let error = service(repo)
        .add_answer(NewAnswer {
            answer: "again".into(),
            question_id: "q-1".into(),
            user_id: "33".into(),
        })
        .await
        .expect_err("already answered");

    assert_eq!(error.code(), ErrorCode::Conflict);
    assert_eq!(error.message(), QUESTION_ALREADY_ANSWERED);
}

#[rstest]
#[tokio::test]
async fn update_rejects_path_mismatch_before_storage(answered: QuestionInfo) {
    let mut repo = MockQuestionRepository::new();
    repo.expect_update().times(0);

    let error = service(repo)
        .update(answered, "q-2")
        .await
        .expect_err("mismatch");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), PATH_ID_MISMATCH);
}

#[rstest]
#[tokio::test]
async fn update_requires_answer_id(mut answered: QuestionInfo) {
    if let Some(answer) = answered.answer.as_mut() {
        answer.id.clear();
    }
    let mut repo = MockQuestionRepository::new();
    repo.expect_update().times(0);

    let error = service(repo)
        .update(answered, "q-1")
        .await
        .expect_err("answer id required");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), ANSWER_ID_REQUIRED);
}

#[rstest]
#[tokio::test]
async fn update_delegates_when_consistent(answered: QuestionInfo) {
    let expected = answered.clone();
    let mut repo = MockQuestionRepository::new();
    repo.expect_update().times(1).returning(Ok);

    let updated = service(repo)
        .update(answered, "q-1")
        .await
        .expect("update succeeds");

    assert_eq!(updated, expected);
}

#[rstest]
#[case(QuestionRepositoryError::not_found("q"), ErrorCode::NotFound, QUESTION_NOT_FOUND)]
#[case(QuestionRepositoryError::no_answer_to_update("q"), ErrorCode::NotFound, NO_ANSWER_TO_UPDATE)]
#[case(QuestionRepositoryError::no_modification("q"), ErrorCode::InvalidRequest, NO_MODIFICATIONS)]
#[case(QuestionRepositoryError::query("deadlock"), ErrorCode::InternalError, INTERNAL_SERVER_ERROR)]
#[tokio::test]
async fn update_maps_repository_errors(
    answered: QuestionInfo,
    #[case] failure: QuestionRepositoryError,
    #[case] code: ErrorCode,
    #[case] message: &str,
) {
    let mut repo = MockQuestionRepository::new();
    repo.expect_update()
        .times(1)
        .return_once(move |_| Err(failure));

    let error = service(repo)
        .update(answered, "q-1")
        .await
        .expect_err("repository failure");

    assert_eq!(error.code(), code);
    assert_eq!(error.message(), message);
}

#[tokio::test]
async fn internal_errors_keep_cause_out_of_message() {
    let mut repo = MockQuestionRepository::new();
    repo.expect_find_all()
        .times(1)
        .return_once(|| Err(QuestionRepositoryError::connection("pool timed out")));

    let error = service(repo).find_all().await.expect_err("internal");

    assert_eq!(error.message(), INTERNAL_SERVER_ERROR);
    assert_eq!(error.cause(), Some("pool timed out"));
}

#[tokio::test]
async fn find_by_user_passes_through_empty_results() {
    let mut repo = MockQuestionRepository::new();
    repo.expect_find_by_user()
        .withf(|user_id| user_id == "nobody")
        .times(1)
        .return_once(|_| Ok(Vec::new()));

    let found = service(repo)
        .find_by_user("nobody")
        .await
        .expect("empty is fine");

    assert!(found.is_empty());
}

#[tokio::test]
async fn delete_maps_not_found() {
    let mut repo = MockQuestionRepository::new();
    repo.expect_delete()
        .times(1)
        .return_once(|id| Err(QuestionRepositoryError::not_found(id)));

    let error = service(repo).delete("ghost").await.expect_err("missing");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), QUESTION_NOT_FOUND);
}
