//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, CodeService, ResolverService};
use crate::domain::repositories::CodeRegistry;

/// Application-wide state shared across all request handlers.
///
/// Handlers are stateless; everything they need arrives through this
/// struct. The registry handle is kept alongside the services for the
/// health endpoint's store probe.
#[derive(Clone)]
pub struct AppState {
    pub code_service: Arc<CodeService>,
    pub resolver_service: Arc<ResolverService>,
    pub auth_service: Arc<AuthService>,
    pub registry: Arc<dyn CodeRegistry>,
}

impl AppState {
    /// Wires services over a registry and the configured admin token.
    pub fn new(registry: Arc<dyn CodeRegistry>, admin_token: String) -> Self {
        Self {
            code_service: Arc::new(CodeService::new(registry.clone())),
            resolver_service: Arc::new(ResolverService::new(registry.clone())),
            auth_service: Arc::new(AuthService::new(admin_token)),
            registry,
        }
    }
}
