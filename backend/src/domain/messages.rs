//! Stable client-facing messages.
//!
//! Tests and clients compare against these strings, so they must not change.

pub const QUESTION_NOT_FOUND: &str = "No Question Found";
pub const QUESTION_ALREADY_EXISTS: &str = "Question Already Exists";
pub const QUESTION_ALREADY_ANSWERED: &str = "Question Already Has An Answer";
pub const NO_ANSWER_TO_UPDATE: &str = "Question Has No Answer To Update";
pub const NO_MODIFICATIONS: &str = "The Question/Answer Has No Modifications";
pub const PATH_ID_MISMATCH: &str = "Path ID Does Not Match Question ID";
pub const ANSWER_ID_REQUIRED: &str = "Answer ID Is Required";
pub const QUESTION_DELETED: &str = "Question Deleted Successfully";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";
