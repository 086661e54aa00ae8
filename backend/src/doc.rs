//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the question endpoints, the health probes and the
//! schema wrappers from [`crate::inbound::http::schemas`], which describe the
//! domain types without coupling them to utoipa.
//!
//! The generated document backs Swagger UI (debug builds) and is exported by
//! the `openapi-dump` binary for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::questions::{
    AddAnswerRequest, CreateQuestionRequest, UpdateQuestionRequest,
};
use crate::inbound::http::schemas::{
    AnswerSchema, MessageEnvelopeSchema, QuestionInfoSchema, QuestionSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Questionary API",
        description = "Questions with at most one answer each, over HTTP and gRPC."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::questions::find_all,
        crate::inbound::http::questions::find_by_id,
        crate::inbound::http::questions::find_by_user,
        crate::inbound::http::questions::create,
        crate::inbound::http::questions::add_answer,
        crate::inbound::http::questions::update,
        crate::inbound::http::questions::delete_question,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        QuestionSchema,
        AnswerSchema,
        QuestionInfoSchema,
        MessageEnvelopeSchema,
        CreateQuestionRequest,
        AddAnswerRequest,
        UpdateQuestionRequest
    )),
    tags(
        (name = "questions", description = "Questions and their answers"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying registered paths and schema field structure.

    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    use super::*;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn every_question_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/question",
            "/question/{id}",
            "/question/user/{userId}",
            "/question/answer",
            "/health/ready",
            "/health/live",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn question_info_schema_has_question_and_answer() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let info = schemas.get("QuestionInfo").expect("QuestionInfo schema");

        assert_object_schema_has_field(info, "question");
        assert_object_schema_has_field(info, "answer");
    }

    #[test]
    fn envelope_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let envelope = schemas.get("MessageEnvelope").expect("envelope schema");

        assert_object_schema_has_field(envelope, "status");
    }
}
