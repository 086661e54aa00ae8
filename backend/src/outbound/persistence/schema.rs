//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// One row per question, holding the whole record as a JSON document.
    ///
    /// `question_id` and `user_id` are copied out of the document so the two
    /// equality lookups stay indexed.
    question_infos (question_id) {
        /// Primary key: the question id.
        question_id -> Text,
        /// Owner of the question.
        user_id -> Text,
        /// Serialised `QuestionInfo`.
        document -> Jsonb,
        /// Insertion time, used for stable list ordering.
        created_at -> Timestamptz,
    }
}
