//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of utoipa. These wrappers mirror their serialised
//! shape and are registered with [`crate::doc::ApiDoc`].

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Question`].
#[derive(ToSchema)]
#[schema(as = Question)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct QuestionSchema {
    #[schema(example = "5f1a0d8e-2c4b-4f9e-9d61-0a7f3c2b1e44")]
    id: String,
    #[schema(example = "is it great?")]
    statement: String,
    #[schema(example = "3")]
    user_id: String,
    /// Creation time in Unix seconds.
    #[schema(example = 1_700_000_000)]
    created_on: i64,
}

/// OpenAPI schema for [`crate::domain::Answer`].
#[derive(ToSchema)]
#[schema(as = Answer)]
#[schema(rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct AnswerSchema {
    id: String,
    #[schema(example = "yes")]
    answer: String,
    question_id: String,
    #[schema(example = "33")]
    user_id: String,
    /// Creation time in Unix seconds.
    created_on: i64,
}

/// OpenAPI schema for [`crate::domain::QuestionInfo`].
#[derive(ToSchema)]
#[schema(as = QuestionInfo)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct QuestionInfoSchema {
    question: QuestionSchema,
    /// Null until the question is answered.
    answer: Option<AnswerSchema>,
}

/// OpenAPI schema for [`crate::inbound::http::error::MessageEnvelope`].
#[derive(ToSchema)]
#[schema(as = MessageEnvelope)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct MessageEnvelopeSchema {
    #[schema(example = "No Question Found")]
    message: String,
    #[schema(example = "Not Found")]
    status: String,
    #[schema(example = 404)]
    code: u16,
}
