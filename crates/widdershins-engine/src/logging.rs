//! Logger bootstrap.
//!
//! Everything in the workspace logs through the `log` facade; this is the
//! one place a backend (env_logger) is chosen.

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger.
///
/// Idempotent, so `main` and tests can both call it. `RUST_LOG` selects
/// filters as usual; without it the engine logs at info.
pub fn init() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        log::debug!("logging initialized");
    });
}
