//! Tests for HTTP error mapping.

use actix_web::body::to_bytes;
use actix_web::test::TestRequest;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::messages::{QUESTION_ALREADY_EXISTS, QUESTION_NOT_FOUND};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn internal_error() -> Error {
    Error::internal("pool exhausted")
        .with_cause("timed out after 10s")
        .with_trace_id(TRACE_ID)
}

async fn envelope_of(response: HttpResponse) -> MessageEnvelope {
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("envelope deserialises")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found(QUESTION_NOT_FOUND), StatusCode::NOT_FOUND)]
#[case(Error::conflict(QUESTION_ALREADY_EXISTS), StatusCode::CONFLICT)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[rstest]
#[actix_web::test]
async fn not_found_renders_envelope() {
    let response = ResponseError::error_response(&Error::not_found(QUESTION_NOT_FOUND));

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        envelope_of(response).await,
        MessageEnvelope {
            message: QUESTION_NOT_FOUND.to_owned(),
            status: "Not Found".to_owned(),
            code: 404,
        }
    );
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(internal_error: Error) {
    let response = ResponseError::error_response(&internal_error);

    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace id header")
        .to_str()
        .expect("ascii header")
        .to_owned();
    assert_eq!(header, TRACE_ID);

    let envelope = envelope_of(response).await;
    assert_eq!(envelope.message, INTERNAL_SERVER_ERROR);
    assert_eq!(envelope.code, 500);
}

#[rstest]
fn error_without_trace_id_omits_header() {
    let response = ResponseError::error_response(&Error::invalid_request("bad"));
    assert!(response.headers().get(TRACE_ID_HEADER).is_none());
}

#[rstest]
#[actix_web::test]
async fn json_errors_become_invalid_request() {
    let req = TestRequest::default().to_http_request();
    let err = json_error_handler(JsonPayloadError::ContentType, &req);

    let response = err.error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let envelope = envelope_of(response).await;
    assert!(envelope.message.starts_with("invalid request body"));
}
