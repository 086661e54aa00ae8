//! Question and answer records.
//!
//! A [`QuestionInfo`] is the unit of storage: one question with at most one
//! embedded answer. The serialised form is shared by the HTTP API and the
//! persisted document, so field names are camelCase and `createdOn` is
//! encoded as Unix seconds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A question asked by a user.
///
/// Missing fields deserialise to their defaults so that partially populated
/// update bodies decode. The transports reject blank required fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Question {
    pub id: String,
    pub statement: String,
    pub user_id: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_on: DateTime<Utc>,
}

/// The answer attached to a question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Answer {
    pub id: String,
    pub answer: String,
    pub question_id: String,
    pub user_id: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_on: DateTime<Utc>,
}

/// A question together with its answer, if any.
///
/// # Examples
/// ```
/// use questionary::domain::{Question, QuestionInfo};
///
/// let info = QuestionInfo::unanswered(Question {
///     id: "q-1".into(),
///     statement: "is it great?".into(),
///     user_id: "3".into(),
///     ..Question::default()
/// });
/// assert!(!info.is_answered());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionInfo {
    pub question: Question,
    #[serde(default)]
    pub answer: Option<Answer>,
}

/// Input for creating a question. The service assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub statement: String,
    pub user_id: String,
}

/// Input for answering a question. The service assigns id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnswer {
    pub answer: String,
    pub question_id: String,
    pub user_id: String,
}

/// Reasons a stored record refuses an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateRejection {
    /// The stored question has no answer yet.
    NoAnswerToUpdate,
    /// Neither the statement nor the answer text would change.
    NoModification,
}

impl QuestionInfo {
    /// Wrap a freshly created question with no answer.
    pub fn unanswered(question: Question) -> Self {
        Self {
            question,
            answer: None,
        }
    }

    /// The answer, ignoring placeholders with an empty id.
    pub fn answer(&self) -> Option<&Answer> {
        self.answer.as_ref().filter(|answer| !answer.id.is_empty())
    }

    /// True once an answer with a non-empty id is attached.
    pub fn is_answered(&self) -> bool {
        self.answer().is_some()
    }

    /// Merge `incoming` into this stored record.
    ///
    /// The statement is replaced when it differs. The answer text is replaced
    /// only when the incoming answer id matches the stored one and the text
    /// differs. Identifiers, owners and timestamps never change.
    ///
    /// # Examples
    /// ```
    /// use questionary::domain::{Answer, Question, QuestionInfo, UpdateRejection};
    ///
    /// let stored = QuestionInfo {
    ///     question: Question { id: "1".into(), statement: "old".into(), ..Question::default() },
    ///     answer: Some(Answer { id: "a".into(), answer: "yes".into(), ..Answer::default() }),
    /// };
    /// let mut incoming = stored.clone();
    /// incoming.question.statement = "new".into();
    ///
    /// let merged = stored.apply_update(&incoming).expect("statement changed");
    /// assert_eq!(merged.question.statement, "new");
    /// assert_eq!(stored.apply_update(&stored), Err(UpdateRejection::NoModification));
    /// ```
    pub fn apply_update(&self, incoming: &QuestionInfo) -> Result<QuestionInfo, UpdateRejection> {
        let Some(stored_answer) = self.answer() else {
            return Err(UpdateRejection::NoAnswerToUpdate);
        };

        let mut merged = self.clone();
        let mut modified = false;

        if incoming.question.statement != self.question.statement {
            merged.question.statement = incoming.question.statement.clone();
            modified = true;
        }

        if let Some(incoming_answer) = incoming.answer.as_ref() {
            if incoming_answer.id == stored_answer.id && incoming_answer.answer != stored_answer.answer
            {
                if let Some(answer) = merged.answer.as_mut() {
                    answer.answer = incoming_answer.answer.clone();
                    modified = true;
                }
            }
        }

        if modified {
            Ok(merged)
        } else {
            Err(UpdateRejection::NoModification)
        }
    }
}
