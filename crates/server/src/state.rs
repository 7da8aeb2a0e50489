//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ServerConfig;
use crate::services::{
    HttpIdentityProvider, HttpTextExtractor, IdentityProvider, TextExtractor,
};

/// Application state shared across all handlers.
///
/// Cheap to clone; all fields live behind one `Arc`. The pool and the
/// collaborator clients are constructed once at bootstrap and injected here,
/// so no handler ever reaches for global state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    pool: PgPool,
    identity: Arc<dyn IdentityProvider>,
    extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    /// Build the state with the production HTTP collaborators.
    #[must_use]
    pub fn new(config: ServerConfig, pool: PgPool) -> Self {
        let identity = Arc::new(HttpIdentityProvider::new(
            config.identity.base_url.clone(),
            config.identity.api_key.clone(),
        ));
        let extractor = Arc::new(HttpTextExtractor::new(config.extractor_url.clone()));
        Self::with_collaborators(config, pool, identity, extractor)
    }

    /// Build the state with explicit collaborators (used by tests to inject
    /// stubs).
    #[must_use]
    pub fn with_collaborators(
        config: ServerConfig,
        pool: PgPool,
        identity: Arc<dyn IdentityProvider>,
        extractor: Arc<dyn TextExtractor>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                identity,
                extractor,
            }),
        }
    }

    /// Server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Identity provider collaborator.
    #[must_use]
    pub fn identity(&self) -> &dyn IdentityProvider {
        self.inner.identity.as_ref()
    }

    /// Document text extraction collaborator.
    #[must_use]
    pub fn extractor(&self) -> &dyn TextExtractor {
        self.inner.extractor.as_ref()
    }
}
