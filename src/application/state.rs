// src/application/state.rs

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::events::{register_audit_handlers, EventBus};
use crate::repositories::CatalogRepositories;
use crate::services::CatalogService;

/// Application state shared by every command.
/// All fields are Arc-wrapped for thread-safe sharing.
pub struct AppState {
    pub pool: Arc<ConnectionPool>,
    pub event_bus: Arc<EventBus>,
    pub catalog: Arc<CatalogService>,
}

impl AppState {
    /// Wire repositories, services and event handlers on an initialized pool
    pub fn bootstrap(pool: Arc<ConnectionPool>) -> Self {
        // 1. INFRASTRUCTURE
        let event_bus = Arc::new(EventBus::new());

        // 2. REPOSITORIES
        let repos = CatalogRepositories::sqlite(&pool);

        // 3. SERVICES
        let catalog = Arc::new(CatalogService::new(repos, Arc::clone(&event_bus)));

        // 4. EVENT HANDLER REGISTRATION
        register_audit_handlers(&event_bus);

        Self {
            pool,
            event_bus,
            catalog,
        }
    }
}
