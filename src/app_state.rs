use std::sync::Arc;

use kube::Client;

use crate::config::Config;
use crate::core::persistence::store::MetricStore;

/// Shared handles passed into every request handler. The store is an
/// explicit handle (no process-wide singleton) so tests can inject the
/// in-memory implementation.
#[derive(Clone)]
pub struct AppState {
    pub kube: Client,
    pub store: Arc<dyn MetricStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(kube: Client, store: Arc<dyn MetricStore>, config: Config) -> Self {
        Self {
            kube,
            store,
            config,
        }
    }
}
