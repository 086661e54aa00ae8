//! Builders for the driving port shared by both transports.

use std::sync::Arc;

use mockable::DefaultClock;
use tracing::info;

use questionary::domain::QuestionaryServiceImpl;
use questionary::domain::ports::QuestionaryService;
use questionary::outbound::memory::InMemoryQuestionRepository;
use questionary::outbound::persistence::DieselQuestionRepository;

use super::ServerConfig;

/// Build the question service over PostgreSQL when a pool is configured,
/// otherwise over the in-memory store.
pub(super) fn build_questionary_service(config: &ServerConfig) -> Arc<dyn QuestionaryService> {
    let clock = Arc::new(DefaultClock);
    match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL question store");
            Arc::new(QuestionaryServiceImpl::new(
                Arc::new(DieselQuestionRepository::new(pool.clone())),
                clock,
            ))
        }
        None => {
            let repository = if config.seed_example_data {
                InMemoryQuestionRepository::with_example_data()
            } else {
                InMemoryQuestionRepository::new()
            };
            info!(
                seeded = config.seed_example_data,
                "using in-memory question store"
            );
            Arc::new(QuestionaryServiceImpl::new(Arc::new(repository), clock))
        }
    }
}
