use std::sync::Arc;

use crate::application::services::RequestRouter;

/// Shared state injected into the gateway handler.
#[derive(Clone)]
pub struct AppState {
    pub request_router: Arc<RequestRouter>,
}

impl AppState {
    pub fn new(request_router: Arc<RequestRouter>) -> Self {
        Self { request_router }
    }
}
