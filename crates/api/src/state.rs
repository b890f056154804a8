use std::sync::Arc;

use holonet_catalog::CatalogClient;
use holonet_db::DbPool;

use crate::config::ServerConfig;

/// Handles every request needs, injected through `State<AppState>`.
///
/// Cloned per request; the pool is already reference-counted and the
/// rest sits behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Arc<ServerConfig>,
    /// Source for `/people-population`.
    pub catalog: Arc<CatalogClient>,
}
