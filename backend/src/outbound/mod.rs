//! Outbound adapters implementing the question repository port.
//!
//! - **memory**: process-local store, used for tests and database-less runs
//! - **persistence**: PostgreSQL store via Diesel
//!
//! Adapters translate between domain records and storage representations
//! and detect not-found and conflict conditions. They hold no other rules.

pub mod memory;
pub mod persistence;
