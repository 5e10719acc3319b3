//! Application state for the web layer.

use std::sync::Arc;

use crate::lookup::PokemonLookupService;

/// Shared application state.
///
/// Generic over the record store and upstream provider so the binary can
/// pick a store backend at startup.
pub struct AppState<S, P> {
    /// Lookup service shared by all requests
    pub lookup: Arc<PokemonLookupService<S, P>>,
}

impl<S, P> AppState<S, P> {
    /// Create a new app state.
    pub fn new(lookup: PokemonLookupService<S, P>) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }
}

// Manual impl: cloning only bumps the Arc, so `S` and `P` need not be Clone.
impl<S, P> Clone for AppState<S, P> {
    fn clone(&self) -> Self {
        Self {
            lookup: Arc::clone(&self.lookup),
        }
    }
}
