//! Driving port for the question and answer use cases.
//!
//! Both the HTTP and the gRPC adapters depend on this trait only, so they
//! share one set of business rules and one error taxonomy.

use async_trait::async_trait;

use crate::domain::{Error, NewAnswer, NewQuestion, Question, QuestionInfo};

/// Use-case contract consumed by the inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionaryService: Send + Sync {
    /// List every question.
    async fn find_all(&self) -> Result<Vec<QuestionInfo>, Error>;

    /// Fetch one question by id.
    async fn find_by_id(&self, question_id: &str) -> Result<QuestionInfo, Error>;

    /// List the questions asked by `user_id`.
    async fn find_by_user(&self, user_id: &str) -> Result<Vec<QuestionInfo>, Error>;

    /// Create a question with a generated id and timestamp.
    async fn create(&self, request: NewQuestion) -> Result<Question, Error>;

    /// Answer a question with a generated id and timestamp.
    async fn add_answer(&self, request: NewAnswer) -> Result<QuestionInfo, Error>;

    /// Update the statement and/or answer text of the question at `path_id`.
    async fn update(&self, info: QuestionInfo, path_id: &str) -> Result<QuestionInfo, Error>;

    /// Delete a question, returning the confirmation message.
    async fn delete(&self, question_id: &str) -> Result<String, Error>;
}
