//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the driving
//! port, so they can be tested against a mock or an in-memory service.

use std::sync::Arc;

use crate::domain::ports::QuestionaryService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub questions: Arc<dyn QuestionaryService>,
}

impl HttpState {
    pub fn new(questions: Arc<dyn QuestionaryService>) -> Self {
        Self { questions }
    }
}
