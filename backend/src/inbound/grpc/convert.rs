//! Conversions between protobuf messages and domain records.
//!
//! Timestamps travel as Unix seconds. Out-of-range values decode to the
//! epoch rather than failing the call, matching how a zero value decodes.

use chrono::{DateTime, Utc};

use super::proto;
use crate::domain::{Answer, Question, QuestionInfo};

fn to_datetime(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

impl From<Question> for proto::Question {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            statement: question.statement,
            user_id: question.user_id,
            created_on: question.created_on.timestamp(),
        }
    }
}

impl From<proto::Question> for Question {
    fn from(question: proto::Question) -> Self {
        Self {
            id: question.id,
            statement: question.statement,
            user_id: question.user_id,
            created_on: to_datetime(question.created_on),
        }
    }
}

impl From<Answer> for proto::Answer {
    fn from(answer: Answer) -> Self {
        Self {
            id: answer.id,
            answer: answer.answer,
            question_id: answer.question_id,
            user_id: answer.user_id,
            created_on: answer.created_on.timestamp(),
        }
    }
}

impl From<proto::Answer> for Answer {
    fn from(answer: proto::Answer) -> Self {
        Self {
            id: answer.id,
            answer: answer.answer,
            question_id: answer.question_id,
            user_id: answer.user_id,
            created_on: to_datetime(answer.created_on),
        }
    }
}

impl From<QuestionInfo> for proto::QuestionInfo {
    fn from(info: QuestionInfo) -> Self {
        Self {
            question: Some(info.question.into()),
            answer: info.answer.map(Into::into),
        }
    }
}

impl From<proto::QuestionInfo> for QuestionInfo {
    fn from(info: proto::QuestionInfo) -> Self {
        Self {
            question: info.question.map(Into::into).unwrap_or_default(),
            answer: info.answer.map(Into::into),
        }
    }
}

pub(super) fn to_questions(infos: Vec<QuestionInfo>) -> proto::Questions {
    proto::Questions {
        questions: infos.into_iter().map(Into::into).collect(),
    }
}
