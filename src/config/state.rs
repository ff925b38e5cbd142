// Runtime state module
// Holds the validated configuration shared across connection tasks

use super::Config;

/// Process-wide application state.
///
/// The configuration is resolved and validated once at startup and never
/// mutated afterwards, so connection tasks share it read-only behind an
/// `Arc` with no further coordination.
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub const fn new(config: Config) -> Self {
        Self { config }
    }
}
