//! Port for question document storage.
//!
//! Adapters own not-found and conflict detection and apply the shared
//! [`QuestionInfo::apply_update`](crate::domain::QuestionInfo::apply_update)
//! merge rule for updates.

use async_trait::async_trait;

use crate::domain::{Answer, Question, QuestionInfo, UpdateRejection};

use super::define_port_error;

define_port_error! {
    /// Errors raised by question repository adapters.
    pub enum QuestionRepositoryError {
        /// No record matches the question id.
        NotFound { question_id: String } =>
            "question {question_id} not found",
        /// A record with the question id already exists.
        Conflict { question_id: String } =>
            "question {question_id} already exists",
        /// The question already carries an answer.
        AlreadyAnswered { question_id: String } =>
            "question {question_id} already has an answer",
        /// The stored question has no answer for an update to target.
        NoAnswerToUpdate { question_id: String } =>
            "question {question_id} has no answer to update",
        /// The update would leave the record unchanged.
        NoModification { question_id: String } =>
            "question {question_id} has no modifications",
        /// Repository connection could not be established.
        Connection { message: String } =>
            "question repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "question repository query failed: {message}",
    }
}

impl QuestionRepositoryError {
    /// Translate a merge rejection for the given question.
    pub fn from_rejection(question_id: &str, rejection: UpdateRejection) -> Self {
        match rejection {
            UpdateRejection::NoAnswerToUpdate => Self::no_answer_to_update(question_id),
            UpdateRejection::NoModification => Self::no_modification(question_id),
        }
    }
}

/// Storage contract shared by the in-memory and PostgreSQL adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Every stored record; empty when nothing is stored.
    async fn find_all(&self) -> Result<Vec<QuestionInfo>, QuestionRepositoryError>;

    /// Exact match on the question id.
    async fn find_by_id(&self, question_id: &str)
    -> Result<QuestionInfo, QuestionRepositoryError>;

    /// Records whose question belongs to `user_id`; empty is not an error.
    async fn find_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<QuestionInfo>, QuestionRepositoryError>;

    /// Insert a new, unanswered record.
    async fn create(&self, question: Question) -> Result<Question, QuestionRepositoryError>;

    /// Merge `info` into the stored record with the same question id.
    async fn update(&self, info: QuestionInfo) -> Result<QuestionInfo, QuestionRepositoryError>;

    /// Remove the record and return a confirmation message.
    async fn delete(&self, question_id: &str) -> Result<String, QuestionRepositoryError>;

    /// Attach the first answer to the question named by `answer.question_id`.
    async fn add_answer(&self, answer: Answer) -> Result<QuestionInfo, QuestionRepositoryError>;
}
