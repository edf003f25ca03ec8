use std::sync::Arc;

use crate::contact::ContactService;
use crate::models::Resume;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Résumé snapshot every CV request renders from.
    pub resume: Arc<Resume>,
    pub contact: Arc<ContactService>,
}
