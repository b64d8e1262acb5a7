//! Shared state injected into every handler

use crate::resolver::traits::StreamResolver;
use std::sync::Arc;

/// Handler state: the resolver collaborator behind the façade
///
/// Constructed once at startup and cloned per request; tests substitute
/// a fake resolver here.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<dyn StreamResolver>,
}

impl AppState {
    pub fn new(resolver: Arc<dyn StreamResolver>) -> Self {
        Self { resolver }
    }
}
