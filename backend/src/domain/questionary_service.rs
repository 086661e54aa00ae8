//! Question and answer domain service.
//!
//! Assigns identifiers and creation timestamps, enforces the cross-field
//! rules for updates, and translates repository failures into domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::SubsecRound;
use mockable::Clock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::messages::{
    ANSWER_ID_REQUIRED, INTERNAL_SERVER_ERROR, NO_ANSWER_TO_UPDATE, NO_MODIFICATIONS,
    PATH_ID_MISMATCH, QUESTION_ALREADY_ANSWERED, QUESTION_ALREADY_EXISTS, QUESTION_NOT_FOUND,
};
use crate::domain::ports::{QuestionRepository, QuestionRepositoryError, QuestionaryService};
use crate::domain::{Answer, Error, NewAnswer, NewQuestion, Question, QuestionInfo};

fn map_repository_error(error: QuestionRepositoryError) -> Error {
    match error {
        QuestionRepositoryError::NotFound { .. } => Error::not_found(QUESTION_NOT_FOUND),
        QuestionRepositoryError::Conflict { .. } => Error::conflict(QUESTION_ALREADY_EXISTS),
        QuestionRepositoryError::AlreadyAnswered { .. } => {
            Error::conflict(QUESTION_ALREADY_ANSWERED)
        }
        QuestionRepositoryError::NoAnswerToUpdate { .. } => Error::not_found(NO_ANSWER_TO_UPDATE),
        QuestionRepositoryError::NoModification { .. } => {
            Error::invalid_request(NO_MODIFICATIONS)
        }
        QuestionRepositoryError::Connection { message }
        | QuestionRepositoryError::Query { message } => {
            Error::internal(INTERNAL_SERVER_ERROR).with_cause(message)
        }
    }
}

/// Service implementing [`QuestionaryService`] over any repository.
#[derive(Clone)]
pub struct QuestionaryServiceImpl<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> QuestionaryServiceImpl<R> {
    /// Create a service backed by `repository`, stamping times from `clock`.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    fn next_id() -> String {
        Uuid::new_v4().to_string()
    }

    // Wire formats carry whole seconds.
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.utc().trunc_subsecs(0)
    }
}

#[async_trait]
impl<R> QuestionaryService for QuestionaryServiceImpl<R>
where
    R: QuestionRepository,
{
    async fn find_all(&self) -> Result<Vec<QuestionInfo>, Error> {
        self.repository
            .find_all()
            .await
            .map_err(map_repository_error)
    }

    async fn find_by_id(&self, question_id: &str) -> Result<QuestionInfo, Error> {
        self.repository
            .find_by_id(question_id)
            .await
            .map_err(map_repository_error)
    }

    async fn find_by_user(&self, user_id: &str) -> Result<Vec<QuestionInfo>, Error> {
        self.repository
            .find_by_user(user_id)
            .await
            .map_err(map_repository_error)
    }

    async fn create(&self, request: NewQuestion) -> Result<Question, Error> {
        let question = Question {
            id: Self::next_id(),
            statement: request.statement,
            user_id: request.user_id,
            created_on: self.now(),
        };
        let created = self
            .repository
            .create(question)
            .await
            .map_err(map_repository_error)?;
        info!(question_id = %created.id, user_id = %created.user_id, "question created");
        Ok(created)
    }

    async fn add_answer(&self, request: NewAnswer) -> Result<QuestionInfo, Error> {
        let answer = Answer {
            id: Self::next_id(),
            answer: request.answer,
            question_id: request.question_id,
            user_id: request.user_id,
            created_on: self.now(),
        };
        let answered = self
            .repository
            .add_answer(answer)
            .await
            .map_err(map_repository_error)?;
        info!(question_id = %answered.question.id, "answer added");
        Ok(answered)
    }

    async fn update(&self, info: QuestionInfo, path_id: &str) -> Result<QuestionInfo, Error> {
        if info.question.id != path_id {
            warn!(
                path_id,
                question_id = %info.question.id,
                "update rejected: path id does not match body"
            );
            return Err(Error::invalid_request(PATH_ID_MISMATCH));
        }
        if info.answer().is_none() {
            warn!(question_id = %info.question.id, "update rejected: answer id missing");
            return Err(Error::invalid_request(ANSWER_ID_REQUIRED));
        }
        self.repository
            .update(info)
            .await
            .map_err(map_repository_error)
    }

    async fn delete(&self, question_id: &str) -> Result<String, Error> {
        self.repository
            .delete(question_id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "questionary_service_tests.rs"]
mod tests;
