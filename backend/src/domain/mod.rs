//! Domain primitives, ports and the questionary service.
//!
//! Purpose: keep the business rules for questions and answers free of any
//! transport or storage framework. Adapters reach the domain only through
//! the traits in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failure classification.
//! - Question, Answer, QuestionInfo — stored records and their serde contract.
//! - NewQuestion, NewAnswer — creation inputs without id or timestamp.
//! - QuestionaryServiceImpl — the single implementation of the use cases.
//! - TraceId — request-scoped correlation id.

pub mod error;
pub mod messages;
pub mod ports;
pub mod question;
pub mod questionary_service;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::question::{Answer, NewAnswer, NewQuestion, Question, QuestionInfo, UpdateRejection};
pub use self::questionary_service::QuestionaryServiceImpl;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
