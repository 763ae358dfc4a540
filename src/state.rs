use std::sync::Arc;

use crate::database::{ClientRepository, ConnectionProbe, PgStore, UserRepository};

/// Shared handler state; cheap to clone
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub clients: Arc<dyn ClientRepository>,
    pub conn: Arc<dyn ConnectionProbe>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        clients: Arc<dyn ClientRepository>,
        conn: Arc<dyn ConnectionProbe>,
    ) -> Self {
        Self { users, clients, conn }
    }

    /// All three components served from one Postgres pool
    pub fn from_pg(store: PgStore) -> Self {
        let store = Arc::new(store);
        Self::new(store.clone(), store.clone(), store)
    }
}
