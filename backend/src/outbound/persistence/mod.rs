//! PostgreSQL persistence adapter using Diesel.
//!
//! The adapter stores each `QuestionInfo` as a JSONB document and only
//! translates between rows and domain types. Rows (`models`) and the table
//! definition (`schema`) stay private to this module.
//!
//! ```ignore
//! use questionary::outbound::persistence::{DbPool, DieselQuestionRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/questionary")).await?;
//! let repo = DieselQuestionRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_question_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_question_repository::DieselQuestionRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
