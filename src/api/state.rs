//! Application state for the pay calculation API.

use std::sync::Arc;

use crate::config::PayConfig;

/// Shared application state.
///
/// Holds the pay configuration every request is calculated under.
#[derive(Clone)]
pub struct AppState {
    config: Arc<PayConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: PayConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the pay configuration.
    pub fn config(&self) -> &PayConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state.
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_config() {
        let state = AppState::new(PayConfig::standard());
        let clone = state.clone();
        assert!(std::ptr::eq(state.config(), clone.config()));
        assert_eq!(clone.config().rules.task_hour_quota, 30);
    }
}
