//! Server configuration object and helpers.

use std::net::SocketAddr;

use questionary::outbound::persistence::DbPool;

/// Builder-style configuration for starting the HTTP and gRPC listeners.
pub struct ServerConfig {
    pub(crate) http_addr: SocketAddr,
    pub(crate) grpc_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) seed_example_data: bool,
}

impl ServerConfig {
    #[must_use]
    pub fn new(http_addr: SocketAddr, grpc_addr: SocketAddr) -> Self {
        Self {
            http_addr,
            grpc_addr,
            db_pool: None,
            seed_example_data: false,
        }
    }

    /// Attach a database connection pool.
    ///
    /// When provided, questions are stored in PostgreSQL; otherwise the
    /// in-memory adapter is used.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Seed the in-memory store with the example questions. Ignored when a
    /// database pool is attached.
    #[must_use]
    pub fn with_example_data(mut self, enabled: bool) -> Self {
        self.seed_example_data = enabled;
        self
    }
}
