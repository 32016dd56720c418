//! Shared handler state.

use crate::ServerConfig;
use std::sync::Arc;
use storybook_interface::StoryDriver;

/// Immutable state shared by every request.
#[derive(Clone)]
pub struct AppState {
    driver: Arc<dyn StoryDriver>,
    model: String,
    reject_empty_entries: bool,
}

impl AppState {
    /// Build state from a provider handle and the server configuration.
    pub fn new(driver: Arc<dyn StoryDriver>, config: &ServerConfig) -> Self {
        Self {
            driver,
            model: config.model().clone(),
            reject_empty_entries: *config.reject_empty_entries(),
        }
    }

    /// The generation provider.
    pub fn driver(&self) -> &dyn StoryDriver {
        self.driver.as_ref()
    }

    /// Model identifier sent with every prompt.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether an empty `entries` array is rejected.
    pub fn reject_empty_entries(&self) -> bool {
        self.reject_empty_entries
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.model)
            .field("reject_empty_entries", &self.reject_empty_entries)
            .finish()
    }
}
