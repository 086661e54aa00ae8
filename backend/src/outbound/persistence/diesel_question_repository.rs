//! PostgreSQL-backed `QuestionRepository` using Diesel.
//!
//! Each question is one row whose `document` column holds the serialised
//! [`QuestionInfo`]. `question_id` and `user_id` are duplicated into plain
//! columns for equality lookups.
//!
//! `update` and `add_answer` read the document, merge in memory and write it
//! back without row locking. Two concurrent writers to the same question can
//! therefore lose one of the writes.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::messages::QUESTION_DELETED;
use crate::domain::ports::{QuestionRepository, QuestionRepositoryError};
use crate::domain::{Answer, Question, QuestionInfo};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error, map_query_error};
use super::models::{NewQuestionInfoRow, QuestionDocumentRow, QuestionDocumentUpdate};
use super::pool::DbPool;
use super::schema::question_infos;

/// Diesel-backed implementation of the question repository port.
#[derive(Clone)]
pub struct DieselQuestionRepository {
    pool: DbPool,
}

impl DieselQuestionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn load_one(&self, question_id: &str) -> Result<QuestionInfo, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = question_infos::table
            .filter(question_infos::question_id.eq(question_id))
            .select(QuestionDocumentRow::as_select())
            .first::<QuestionDocumentRow>(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, question_id))?;

        match row {
            Some(row) => decode_document(row),
            None => {
                warn!(question_id, "question not found");
                Err(QuestionRepositoryError::not_found(question_id))
            }
        }
    }

    async fn load_many(
        &self,
        user_id: Option<&str>,
    ) -> Result<Vec<QuestionInfo>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = question_infos::table
            .order((question_infos::created_at.asc(), question_infos::question_id.asc()))
            .select(QuestionDocumentRow::as_select())
            .into_boxed::<diesel::pg::Pg>();
        if let Some(user_id) = user_id {
            query = query.filter(question_infos::user_id.eq(user_id));
        }

        let rows: Vec<QuestionDocumentRow> = query
            .load(&mut conn)
            .await
            .map_err(map_query_error)?;

        rows.into_iter().map(decode_document).collect()
    }

    async fn replace_document(
        &self,
        info: &QuestionInfo,
    ) -> Result<(), QuestionRepositoryError> {
        let question_id = info.question.id.as_str();
        let document = encode_document(info)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::update(
            question_infos::table.filter(question_infos::question_id.eq(question_id)),
        )
        .set(&QuestionDocumentUpdate {
            document: &document,
        })
        .execute(&mut conn)
        .await
        .map_err(|err| map_diesel_error(err, question_id))?;

        if affected == 0 {
            warn!(question_id, "question vanished before write");
            return Err(QuestionRepositoryError::not_found(question_id));
        }
        Ok(())
    }
}

fn encode_document(info: &QuestionInfo) -> Result<serde_json::Value, QuestionRepositoryError> {
    serde_json::to_value(info).map_err(|err| {
        QuestionRepositoryError::query(format!(
            "serialise question {}: {err}",
            info.question.id
        ))
    })
}

fn decode_document(row: QuestionDocumentRow) -> Result<QuestionInfo, QuestionRepositoryError> {
    serde_json::from_value(row.document).map_err(|err| {
        warn!(question_id = %row.question_id, error = %err, "stored document does not decode");
        QuestionRepositoryError::query(format!("decode question {}: {err}", row.question_id))
    })
}

#[async_trait]
impl QuestionRepository for DieselQuestionRepository {
    async fn find_all(&self) -> Result<Vec<QuestionInfo>, QuestionRepositoryError> {
        self.load_many(None).await
    }

    async fn find_by_id(
        &self,
        question_id: &str,
    ) -> Result<QuestionInfo, QuestionRepositoryError> {
        self.load_one(question_id).await
    }

    async fn find_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<QuestionInfo>, QuestionRepositoryError> {
        self.load_many(Some(user_id)).await
    }

    async fn create(&self, question: Question) -> Result<Question, QuestionRepositoryError> {
        let info = QuestionInfo::unanswered(question);
        let document = encode_document(&info)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::insert_into(question_infos::table)
            .values(&NewQuestionInfoRow {
                question_id: &info.question.id,
                user_id: &info.question.user_id,
                document: &document,
            })
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, &info.question.id))?;

        Ok(info.question)
    }

    async fn update(&self, info: QuestionInfo) -> Result<QuestionInfo, QuestionRepositoryError> {
        let stored = self.load_one(&info.question.id).await?;
        let merged = stored.apply_update(&info).map_err(|rejection| {
            warn!(question_id = %info.question.id, ?rejection, "update rejected");
            QuestionRepositoryError::from_rejection(&info.question.id, rejection)
        })?;
        self.replace_document(&merged).await?;
        Ok(merged)
    }

    async fn delete(&self, question_id: &str) -> Result<String, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(
            question_infos::table.filter(question_infos::question_id.eq(question_id)),
        )
        .execute(&mut conn)
        .await
        .map_err(|err| map_diesel_error(err, question_id))?;

        if affected == 0 {
            warn!(question_id, "no question found to delete");
            return Err(QuestionRepositoryError::not_found(question_id));
        }
        Ok(QUESTION_DELETED.to_owned())
    }

    async fn add_answer(&self, answer: Answer) -> Result<QuestionInfo, QuestionRepositoryError> {
        let mut stored = self.load_one(&answer.question_id).await?;
        if stored.is_answered() {
            warn!(question_id = %answer.question_id, "question already has an answer");
            return Err(QuestionRepositoryError::already_answered(answer.question_id));
        }
        stored.answer = Some(answer);
        self.replace_document(&stored).await?;
        Ok(stored)
    }
}
