//! Application state for the admin server.

use std::sync::Arc;

use crate::agencies::AgencyCache;

/// Shared application state.
pub struct AppState<S, P> {
    /// Where the sign configuration is kept
    pub store: Arc<S>,

    /// Agency list for the agency picker
    pub agencies: Arc<AgencyCache<P>>,
}

impl<S, P> AppState<S, P> {
    pub fn new(store: S, agencies: AgencyCache<P>) -> Self {
        Self {
            store: Arc::new(store),
            agencies: Arc::new(agencies),
        }
    }
}

impl<S, P> Clone for AppState<S, P> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            agencies: self.agencies.clone(),
        }
    }
}
