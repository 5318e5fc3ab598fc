//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the one `Console` for this process, so every browser tab shares the
//! same notification stack, busy flag and last trace id.

use std::sync::Arc;

use crate::config::ConsoleConfig;
use crate::console::Console;
use crate::error::ConsoleError;

#[derive(Clone, Debug)]
pub struct AppState {
    pub console: Arc<Console>,
}

impl AppState {
    #[must_use]
    pub fn new(console: Console) -> Self {
        Self { console: Arc::new(console) }
    }

    /// # Errors
    ///
    /// Returns an error if the console cannot be built from `config`.
    pub fn from_config(config: &ConsoleConfig) -> Result<Self, ConsoleError> {
        Ok(Self::new(Console::new(config)?))
    }
}
