//! Question HTTP handlers.
//!
//! ```text
//! GET    /question
//! GET    /question/{id}
//! GET    /question/user/{userId}
//! POST   /question
//! POST   /question/answer
//! PUT    /question/{id}
//! DELETE /question/{id}
//! ```

use actix_web::http::StatusCode;
use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NewAnswer, NewQuestion, Question, QuestionInfo};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::MessageEnvelope;
use crate::inbound::http::schemas::{MessageEnvelopeSchema, QuestionInfoSchema, QuestionSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::validation::{FieldName, require_present, require_update_fields};

/// Body of `POST /question`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateQuestionRequest {
    #[schema(example = "is it great?")]
    pub statement: String,
    #[schema(example = "3")]
    pub user_id: String,
}

/// Body of `POST /question/answer`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct AddAnswerRequest {
    #[schema(example = "yes")]
    pub answer: String,
    #[schema(example = "33")]
    pub user_id: String,
    pub question_id: String,
}

/// Body of `PUT /question/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuestionRequest {
    #[schema(value_type = QuestionInfoSchema)]
    pub question_info: QuestionInfo,
}

impl CreateQuestionRequest {
    fn into_domain(self) -> ApiResult<NewQuestion> {
        Ok(NewQuestion {
            statement: require_present(self.statement, FieldName::new("statement"))?,
            user_id: require_present(self.user_id, FieldName::new("userId"))?,
        })
    }
}

impl UpdateQuestionRequest {
    fn into_domain(self) -> ApiResult<QuestionInfo> {
        require_update_fields(self.question_info)
    }
}

impl AddAnswerRequest {
    fn into_domain(self) -> ApiResult<NewAnswer> {
        Ok(NewAnswer {
            answer: require_present(self.answer, FieldName::new("answer"))?,
            question_id: require_present(self.question_id, FieldName::new("questionId"))?,
            user_id: require_present(self.user_id, FieldName::new("userId"))?,
        })
    }
}

/// List every question.
#[utoipa::path(
    get,
    path = "/question",
    responses(
        (status = 200, description = "All questions", body = [QuestionInfoSchema]),
        (status = 500, description = "Internal server error", body = MessageEnvelopeSchema)
    ),
    tags = ["questions"],
    operation_id = "findAllQuestions"
)]
#[get("/question")]
pub async fn find_all(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<QuestionInfo>>> {
    Ok(web::Json(state.questions.find_all().await?))
}

/// Fetch one question.
#[utoipa::path(
    get,
    path = "/question/{id}",
    params(("id" = String, Path, description = "Question id")),
    responses(
        (status = 200, description = "The question", body = QuestionInfoSchema),
        (status = 404, description = "No such question", body = MessageEnvelopeSchema)
    ),
    tags = ["questions"],
    operation_id = "findQuestionById"
)]
#[get("/question/{id}")]
pub async fn find_by_id(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<QuestionInfo>> {
    let id = require_present(path.into_inner(), FieldName::new("id"))?;
    Ok(web::Json(state.questions.find_by_id(&id).await?))
}

/// List the questions asked by one user.
#[utoipa::path(
    get,
    path = "/question/user/{userId}",
    params(("userId" = String, Path, description = "Owner of the questions")),
    responses(
        (status = 200, description = "The user's questions", body = [QuestionInfoSchema]),
        (status = 500, description = "Internal server error", body = MessageEnvelopeSchema)
    ),
    tags = ["questions"],
    operation_id = "findQuestionsByUser"
)]
#[get("/question/user/{user_id}")]
pub async fn find_by_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<QuestionInfo>>> {
    let user_id = require_present(path.into_inner(), FieldName::new("userId"))?;
    Ok(web::Json(state.questions.find_by_user(&user_id).await?))
}

/// Create a question.
#[utoipa::path(
    post,
    path = "/question",
    request_body = CreateQuestionRequest,
    responses(
        (status = 200, description = "The created question", body = QuestionSchema),
        (status = 400, description = "Missing field", body = MessageEnvelopeSchema),
        (status = 409, description = "Question already exists", body = MessageEnvelopeSchema)
    ),
    tags = ["questions"],
    operation_id = "createQuestion"
)]
#[post("/question")]
pub async fn create(
    state: web::Data<HttpState>,
    payload: web::Json<CreateQuestionRequest>,
) -> ApiResult<web::Json<Question>> {
    let request = payload.into_inner().into_domain()?;
    Ok(web::Json(state.questions.create(request).await?))
}

/// Answer a question.
#[utoipa::path(
    post,
    path = "/question/answer",
    request_body = AddAnswerRequest,
    responses(
        (status = 200, description = "The answered question", body = QuestionInfoSchema),
        (status = 400, description = "Missing field", body = MessageEnvelopeSchema),
        (status = 404, description = "No such question", body = MessageEnvelopeSchema),
        (status = 409, description = "Question already answered", body = MessageEnvelopeSchema)
    ),
    tags = ["questions"],
    operation_id = "addAnswer"
)]
#[post("/question/answer")]
pub async fn add_answer(
    state: web::Data<HttpState>,
    payload: web::Json<AddAnswerRequest>,
) -> ApiResult<web::Json<QuestionInfo>> {
    let request = payload.into_inner().into_domain()?;
    Ok(web::Json(state.questions.add_answer(request).await?))
}

/// Update a question's statement and/or answer text.
#[utoipa::path(
    put,
    path = "/question/{id}",
    params(("id" = String, Path, description = "Question id; must match the body")),
    request_body = UpdateQuestionRequest,
    responses(
        (status = 200, description = "The updated question", body = QuestionInfoSchema),
        (status = 400, description = "Missing field, inconsistent or unchanged body", body = MessageEnvelopeSchema),
        (status = 404, description = "No such question or no answer", body = MessageEnvelopeSchema)
    ),
    tags = ["questions"],
    operation_id = "updateQuestion"
)]
#[put("/question/{id}")]
pub async fn update(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateQuestionRequest>,
) -> ApiResult<web::Json<QuestionInfo>> {
    let id = require_present(path.into_inner(), FieldName::new("id"))?;
    let info = payload.into_inner().into_domain()?;
    Ok(web::Json(state.questions.update(info, &id).await?))
}

/// Delete a question.
#[utoipa::path(
    delete,
    path = "/question/{id}",
    params(("id" = String, Path, description = "Question id")),
    responses(
        (status = 200, description = "Deleted", body = MessageEnvelopeSchema),
        (status = 404, description = "No such question", body = MessageEnvelopeSchema)
    ),
    tags = ["questions"],
    operation_id = "deleteQuestion"
)]
#[delete("/question/{id}")]
pub async fn delete_question(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageEnvelope>> {
    let id = require_present(path.into_inner(), FieldName::new("id"))?;
    let message = state.questions.delete(&id).await?;
    Ok(web::Json(MessageEnvelope::new(StatusCode::OK, message)))
}

/// Register every question route on an actix service config.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(find_all)
        .service(find_by_user)
        .service(find_by_id)
        .service(add_answer)
        .service(create)
        .service(update)
        .service(delete_question);
}

#[cfg(test)]
#[path = "questions_tests.rs"]
mod tests;
