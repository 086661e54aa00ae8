//! In-memory question repository.
//!
//! Records live in an instance-owned `RwLock<Vec<_>>`, so each repository
//! (and each test) has its own isolated store. Insertion order is preserved.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::RwLock;
use tracing::warn;

use crate::domain::messages::QUESTION_DELETED;
use crate::domain::ports::{QuestionRepository, QuestionRepositoryError};
use crate::domain::{Answer, Question, QuestionInfo};

/// `QuestionRepository` backed by process memory.
#[derive(Debug, Default)]
pub struct InMemoryQuestionRepository {
    records: RwLock<Vec<QuestionInfo>>,
}

impl InMemoryQuestionRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with the given records.
    pub fn with_records(records: Vec<QuestionInfo>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Create a repository holding three example questions, two of which
    /// are answered. Handy for local runs without a database.
    pub fn with_example_data() -> Self {
        Self::with_records(example_records())
    }
}

fn seeded_at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).single().unwrap_or_default()
}

fn example_records() -> Vec<QuestionInfo> {
    let question = |id: &str, statement: &str, user_id: &str, at: i64| Question {
        id: id.to_owned(),
        statement: statement.to_owned(),
        user_id: user_id.to_owned(),
        created_on: seeded_at(at),
    };
    let answer = |id: &str, text: &str, question_id: &str, user_id: &str, at: i64| Answer {
        id: id.to_owned(),
        answer: text.to_owned(),
        question_id: question_id.to_owned(),
        user_id: user_id.to_owned(),
        created_on: seeded_at(at),
    };

    vec![
        QuestionInfo {
            question: question("1", "Where is the moon?", "100", 1_600_000_000),
            answer: Some(answer("1", "In the sky", "1", "200", 1_600_000_600)),
        },
        QuestionInfo::unanswered(question("2", "How tall is Everest?", "100", 1_600_001_200)),
        QuestionInfo {
            question: question("3", "Is water wet?", "300", 1_600_002_400),
            answer: Some(answer("2", "It depends who you ask", "3", "100", 1_600_003_000)),
        },
    ]
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_all(&self) -> Result<Vec<QuestionInfo>, QuestionRepositoryError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_id(
        &self,
        question_id: &str,
    ) -> Result<QuestionInfo, QuestionRepositoryError> {
        let records = self.records.read().await;
        records
            .iter()
            .find(|info| info.question.id == question_id)
            .cloned()
            .ok_or_else(|| {
                warn!(question_id, "question not found");
                QuestionRepositoryError::not_found(question_id)
            })
    }

    async fn find_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<QuestionInfo>, QuestionRepositoryError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|info| info.question.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn create(&self, question: Question) -> Result<Question, QuestionRepositoryError> {
        let mut records = self.records.write().await;
        if records.iter().any(|info| info.question.id == question.id) {
            warn!(question_id = %question.id, "question already exists");
            return Err(QuestionRepositoryError::conflict(question.id));
        }
        records.push(QuestionInfo::unanswered(question.clone()));
        Ok(question)
    }

    async fn update(&self, info: QuestionInfo) -> Result<QuestionInfo, QuestionRepositoryError> {
        let mut records = self.records.write().await;
        let Some(stored) = records
            .iter_mut()
            .find(|stored| stored.question.id == info.question.id)
        else {
            warn!(question_id = %info.question.id, "no question found to update");
            return Err(QuestionRepositoryError::not_found(info.question.id));
        };

        let merged = stored.apply_update(&info).map_err(|rejection| {
            warn!(question_id = %info.question.id, ?rejection, "update rejected");
            QuestionRepositoryError::from_rejection(&info.question.id, rejection)
        })?;
        stored.clone_from(&merged);
        Ok(merged)
    }

    async fn delete(&self, question_id: &str) -> Result<String, QuestionRepositoryError> {
        let mut records = self.records.write().await;
        let Some(position) = records
            .iter()
            .position(|info| info.question.id == question_id)
        else {
            warn!(question_id, "no question found to delete");
            return Err(QuestionRepositoryError::not_found(question_id));
        };
        records.remove(position);
        Ok(QUESTION_DELETED.to_owned())
    }

    async fn add_answer(&self, answer: Answer) -> Result<QuestionInfo, QuestionRepositoryError> {
        let mut records = self.records.write().await;
        let Some(stored) = records
            .iter_mut()
            .find(|stored| stored.question.id == answer.question_id)
        else {
            warn!(question_id = %answer.question_id, "no question found to answer");
            return Err(QuestionRepositoryError::not_found(answer.question_id));
        };
        if stored.is_answered() {
            warn!(question_id = %answer.question_id, "question already has an answer");
            return Err(QuestionRepositoryError::already_answered(answer.question_id));
        }
        stored.answer = Some(answer);
        Ok(stored.clone())
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn repo() -> InMemoryQuestionRepository {
        InMemoryQuestionRepository::with_example_data()
    }

    fn answer_for(question_id: &str) -> Answer {
        Answer {
            id: "new-answer".into(),
            answer: "42".into(),
            question_id: question_id.into(),
            user_id: "9".into(),
            created_on: seeded_at(1_700_000_000),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn example_data_has_three_questions_two_answered(repo: InMemoryQuestionRepository) {
        let all = repo.find_all().await.expect("list");
        let ids: Vec<_> = all.iter().map(|info| info.question.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(all.iter().filter(|info| info.is_answered()).count(), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let repo = InMemoryQuestionRepository::new();
        assert!(repo.find_all().await.expect("list").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn create_rejects_duplicate_id(repo: InMemoryQuestionRepository) {
        let duplicate = Question {
            id: "2".into(),
            ..Question::default()
        };
        let err = repo.create(duplicate).await.expect_err("conflict");
        assert_eq!(err, QuestionRepositoryError::conflict("2"));
    }

    #[rstest]
    #[tokio::test]
    async fn add_answer_fills_unanswered_question(repo: InMemoryQuestionRepository) {
        let info = repo.add_answer(answer_for("2")).await.expect("answered");
        assert!(info.is_answered());

        let stored = repo.find_by_id("2").await.expect("stored");
        assert_eq!(stored.answer, Some(answer_for("2")));
    }

    #[rstest]
    #[tokio::test]
    async fn add_answer_rejects_second_answer(repo: InMemoryQuestionRepository) {
        let err = repo.add_answer(answer_for("1")).await.expect_err("conflict");
        assert_eq!(err, QuestionRepositoryError::already_answered("1"));
    }

    #[rstest]
    #[tokio::test]
    async fn update_requires_existing_answer(repo: InMemoryQuestionRepository) {
        let mut incoming = repo.find_by_id("2").await.expect("stored");
        incoming.question.statement = "How tall is K2?".into();
        let err = repo.update(incoming).await.expect_err("unanswered");
        assert_eq!(err, QuestionRepositoryError::no_answer_to_update("2"));
    }

    #[rstest]
    #[tokio::test]
    async fn update_persists_merged_record(repo: InMemoryQuestionRepository) {
        let mut incoming = repo.find_by_id("1").await.expect("stored");
        incoming.question.statement = "Where is the sun?".into();

        let updated = repo.update(incoming).await.expect("updated");
        let stored = repo.find_by_id("1").await.expect("stored");

        assert_eq!(updated, stored);
        assert_eq!(stored.question.statement, "Where is the sun?");
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_record(repo: InMemoryQuestionRepository) {
        let message = repo.delete("3").await.expect("deleted");
        assert_eq!(message, QUESTION_DELETED);
        assert_eq!(
            repo.find_by_id("3").await.expect_err("gone"),
            QuestionRepositoryError::not_found("3")
        );
        assert_eq!(
            repo.delete("3").await.expect_err("already gone"),
            QuestionRepositoryError::not_found("3")
        );
    }
}
