//! tonic implementation of `questionary.QuestionaryService`.

use std::future::Future;
use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::{Instrument, debug, info_span};

use super::convert::to_questions;
use super::proto;
use super::proto::questionary_service_server::QuestionaryService as QuestionaryRpc;
use crate::domain::ports::QuestionaryService;
use crate::domain::{NewAnswer, NewQuestion, QuestionInfo, TraceId};
use crate::inbound::validation::{FieldName, require_present, require_update_fields};

const DELETE_STATUS: &str = "OK";
const DELETE_CODE: i64 = 200;

/// gRPC front end over the driving port.
#[derive(Clone)]
pub struct GrpcQuestionaryService {
    service: Arc<dyn QuestionaryService>,
}

impl GrpcQuestionaryService {
    pub fn new(service: Arc<dyn QuestionaryService>) -> Self {
        Self { service }
    }
}

/// Run one RPC with a fresh [`TraceId`] in scope and a span naming it.
#[expect(clippy::result_large_err, reason = "tonic handlers return Status by value")]
async fn traced<T, F>(rpc: &'static str, fut: F) -> Result<Response<T>, Status>
where
    F: Future<Output = Result<Response<T>, Status>>,
{
    let trace_id = TraceId::generate();
    let span = info_span!("grpc_request", trace_id = %trace_id, rpc);
    TraceId::scope(trace_id, fut).instrument(span).await
}

#[expect(clippy::result_large_err, reason = "tonic handlers return Status by value")]
fn required(value: String, field: &'static str) -> Result<String, Status> {
    require_present(value, FieldName::new(field)).map_err(Status::from)
}

#[tonic::async_trait]
impl QuestionaryRpc for GrpcQuestionaryService {
    async fn find_all(&self, _request: Request<()>) -> Result<Response<proto::Questions>, Status> {
        traced("FindAll", async {
            let infos = self.service.find_all().await?;
            Ok(Response::new(to_questions(infos)))
        })
        .await
    }

    async fn find_by_id(
        &self,
        request: Request<String>,
    ) -> Result<Response<proto::QuestionInfo>, Status> {
        traced("FindByID", async {
            let id = required(request.into_inner(), "id")?;
            let info = self.service.find_by_id(&id).await?;
            Ok(Response::new(info.into()))
        })
        .await
    }

    async fn find_by_user(
        &self,
        request: Request<String>,
    ) -> Result<Response<proto::Questions>, Status> {
        traced("FindByUser", async {
            let user_id = required(request.into_inner(), "userId")?;
            let infos = self.service.find_by_user(&user_id).await?;
            Ok(Response::new(to_questions(infos)))
        })
        .await
    }

    async fn create(
        &self,
        request: Request<proto::Question>,
    ) -> Result<Response<proto::Question>, Status> {
        traced("Create", async {
            let question = request.into_inner();
            let request = NewQuestion {
                statement: required(question.statement, "statement")?,
                user_id: required(question.user_id, "userId")?,
            };
            let created = self.service.create(request).await?;
            Ok(Response::new(created.into()))
        })
        .await
    }

    async fn add_answer(
        &self,
        request: Request<proto::Answer>,
    ) -> Result<Response<proto::QuestionInfo>, Status> {
        traced("AddAnswer", async {
            let answer = request.into_inner();
            let request = NewAnswer {
                answer: required(answer.answer, "answer")?,
                question_id: required(answer.question_id, "questionId")?,
                user_id: required(answer.user_id, "userId")?,
            };
            let info = self.service.add_answer(request).await?;
            Ok(Response::new(info.into()))
        })
        .await
    }

    async fn update(
        &self,
        request: Request<proto::QuestionUpdate>,
    ) -> Result<Response<proto::QuestionInfo>, Status> {
        traced("Update", async {
            let update = request.into_inner();
            let question_id = required(update.question_id, "questionId")?;
            let Some(info) = update.question_info else {
                debug!(%question_id, "update without question info");
                return Err(Status::failed_precondition(
                    "missing required field: questionInfo",
                ));
            };
            let info = require_update_fields(QuestionInfo::from(info))?;
            let updated = self.service.update(info, &question_id).await?;
            Ok(Response::new(updated.into()))
        })
        .await
    }

    async fn delete(
        &self,
        request: Request<String>,
    ) -> Result<Response<proto::GenericMessage>, Status> {
        traced("Delete", async {
            let id = required(request.into_inner(), "id")?;
            let message = self.service.delete(&id).await?;
            Ok(Response::new(proto::GenericMessage {
                message,
                status: DELETE_STATUS.to_owned(),
                code: DELETE_CODE,
            }))
        })
        .await
    }
}
