//! Structural validation shared by the HTTP and gRPC adapters.

use crate::domain::{Answer, Error, Question, QuestionInfo};

/// Newtype for wire field names used in validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    Error::invalid_request(format!("missing required field: {}", field.as_str()))
}

/// Reject blank values, returning the value otherwise.
pub(crate) fn require_present(value: String, field: FieldName) -> Result<String, Error> {
    if value.trim().is_empty() {
        Err(missing_field_error(field))
    } else {
        Ok(value)
    }
}

/// Check the fields an update body must carry.
///
/// The question id and statement are always required. The answer text is
/// required once the body names an answer id; a body without one is left for
/// the service to reject.
pub(crate) fn require_update_fields(info: QuestionInfo) -> Result<QuestionInfo, Error> {
    let QuestionInfo { question, answer } = info;
    let question = Question {
        id: require_present(question.id, FieldName::new("question.id"))?,
        statement: require_present(question.statement, FieldName::new("question.statement"))?,
        ..question
    };
    let answer = match answer {
        Some(answer) if !answer.id.is_empty() => Some(Answer {
            answer: require_present(answer.answer, FieldName::new("answer.answer"))?,
            ..answer
        }),
        other => other,
    };
    Ok(QuestionInfo { question, answer })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_values_are_missing(#[case] value: &str) {
        let err = require_present(value.to_owned(), FieldName::new("userId"))
            .expect_err("blank is missing");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), "missing required field: userId");
    }

    fn update_body(statement: &str, answer_text: &str) -> QuestionInfo {
        QuestionInfo {
            question: Question {
                id: "1".into(),
                statement: statement.into(),
                ..Question::default()
            },
            answer: Some(Answer {
                id: "a-1".into(),
                answer: answer_text.into(),
                ..Answer::default()
            }),
        }
    }

    #[rstest]
    #[case("", "yes", "missing required field: question.statement")]
    #[case("  ", "yes", "missing required field: question.statement")]
    #[case("Where is the sun?", "", "missing required field: answer.answer")]
    fn update_body_needs_statement_and_answer_text(
        #[case] statement: &str,
        #[case] answer_text: &str,
        #[case] expected: &str,
    ) {
        let err = require_update_fields(update_body(statement, answer_text))
            .expect_err("blank field rejected");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        assert_eq!(err.message(), expected);
    }

    #[rstest]
    fn update_body_needs_question_id() {
        let mut body = update_body("Where is the sun?", "yes");
        body.question.id.clear();
        let err = require_update_fields(body).expect_err("blank id rejected");
        assert_eq!(err.message(), "missing required field: question.id");
    }

    #[rstest]
    fn update_body_without_answer_id_is_passed_on() {
        let mut body = update_body("Where is the sun?", "");
        if let Some(answer) = body.answer.as_mut() {
            answer.id.clear();
        }
        let checked = require_update_fields(body.clone()).expect("left for the service");
        assert_eq!(checked, body);
    }

    #[rstest]
    fn complete_update_body_is_unchanged() {
        let body = update_body("Where is the sun?", "yes");
        assert_eq!(require_update_fields(body.clone()).expect("valid"), body);
    }

    #[rstest]
    fn present_values_pass_through_untrimmed() {
        let value = require_present(" yes ".to_owned(), FieldName::new("answer"))
            .expect("present");
        assert_eq!(value, " yes ");
    }
}
