use std::sync::Arc;

use crate::application::services::LinkService;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Host used for shortlinks when the request carries no `Host` header.
    pub public_host: String,
}
