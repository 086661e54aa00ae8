//! Mapping from domain errors to `tonic::Status`.

use tonic::metadata::MetadataValue;
use tonic::{Code, Status};
use tracing::error;

use crate::domain::messages::INTERNAL_SERVER_ERROR;
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

fn code_for(code: ErrorCode) -> Code {
    match code {
        ErrorCode::NotFound => Code::NotFound,
        ErrorCode::Conflict => Code::AlreadyExists,
        ErrorCode::InvalidRequest => Code::FailedPrecondition,
        ErrorCode::InternalError => Code::Internal,
    }
}

/// Client-safe status for a domain error, tagged with its trace id.
impl From<Error> for Status {
    fn from(error: Error) -> Self {
        let code = code_for(error.code());
        let mut status = if code == Code::Internal {
            error!(
                message = error.message(),
                cause = error.cause().unwrap_or_default(),
                trace_id = error.trace_id().unwrap_or_default(),
                "rpc failed"
            );
            Self::new(code, INTERNAL_SERVER_ERROR)
        } else {
            Self::new(code, error.message())
        };
        if let Some(value) = error
            .trace_id()
            .and_then(|id| MetadataValue::try_from(id).ok())
        {
            status.metadata_mut().insert(TRACE_ID_HEADER, value);
        }
        status
    }
}
