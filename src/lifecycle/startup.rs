//! Startup orchestration.
//!
//! Builds the shared contact store from configuration and seeds it before any
//! listener accepts traffic.

use std::sync::Arc;

use crate::config::SeedConfig;
use crate::contacts::{seed, ContactRepository, InMemoryContactRepository};

/// Create the process-wide repository and populate it with demo contacts.
pub fn build_repository(config: &SeedConfig) -> Arc<dyn ContactRepository> {
    let repo = InMemoryContactRepository::new();
    seed::seed(&repo, config.count, config.rng_seed);
    Arc::new(repo)
}
