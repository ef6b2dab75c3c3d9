use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::Catalogs;
use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only after start-up.
    pub catalogs: Arc<Catalogs>,
    /// Anthropic client, or the unconfigured stand-in when no key is set.
    pub llm: Arc<dyn TextGenerator>,
}

impl AppState {
    /// Per-request RNG for mock data. Pinned by `MOCK_DATA_SEED` when set.
    pub fn rng(&self) -> StdRng {
        match self.config.mock_data_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
