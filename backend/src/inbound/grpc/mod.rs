//! gRPC inbound adapter.
//!
//! Serves the `questionary.QuestionaryService` protobuf service with tonic,
//! delegating every RPC to the same driving port the HTTP adapter uses.

mod convert;
mod service;
mod status;

pub mod proto {
    //! Messages, server and client generated from `proto/questionary.proto`.
    #![allow(
        clippy::all,
        clippy::pedantic,
        clippy::nursery,
        clippy::allow_attributes,
        clippy::allow_attributes_without_reason,
        clippy::str_to_string,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::indexing_slicing,
        clippy::missing_panics_doc,
        reason = "generated by tonic-build"
    )]
    tonic::include_proto!("questionary");
}

pub use proto::questionary_service_client::QuestionaryServiceClient;
pub use proto::questionary_service_server::QuestionaryServiceServer;
pub use service::GrpcQuestionaryService;
