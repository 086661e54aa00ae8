//! Internal Diesel row models for the question document table.

use diesel::prelude::*;

use super::schema::question_infos;

/// The stored document and its key. `user_id` and `created_at` are only
/// filtered and sorted on, so reads leave them out.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = question_infos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct QuestionDocumentRow {
    pub question_id: String,
    pub document: serde_json::Value,
}

/// Insertable row for a newly created question.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = question_infos)]
pub(crate) struct NewQuestionInfoRow<'a> {
    pub question_id: &'a str,
    pub user_id: &'a str,
    pub document: &'a serde_json::Value,
}

/// Changeset replacing the stored document.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = question_infos)]
pub(crate) struct QuestionDocumentUpdate<'a> {
    pub document: &'a serde_json::Value,
}
