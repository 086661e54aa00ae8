//! Inbound adapters translating HTTP and gRPC requests into calls on the
//! driving port. Framework types stay at this edge.

pub mod grpc;
pub mod http;
mod validation;
