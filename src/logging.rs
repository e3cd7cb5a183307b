//! Logger initialization.
use env_logger::Env;

/// Install `env_logger`, filtered by `RUST_LOG` with an `info` default.
///
/// Does nothing if a logger is already installed.
pub fn init_logging() {
    let env = Env::default().default_filter_or("info");
    if env_logger::Builder::from_env(env).try_init().is_ok() {
        log::debug!("logging initialized");
    }
}
