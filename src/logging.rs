use env_logger::{Builder, Target};
use log::LevelFilter;
use std::env;

/// Sets up `env_logger` for the binaries.
///
/// `RUST_LOG` takes precedence when present; otherwise everything is logged at
/// `level`, with the HTTP stack held at `warn`. Output goes to stderr so that
/// stdout only carries the command's results.
pub fn init_logging(level: LevelFilter) {
    let mut builder = if env::var(env_logger::DEFAULT_FILTER_ENV).is_ok() {
        Builder::from_default_env()
    } else {
        let mut builder = Builder::new();
        builder
            .filter_level(level)
            .filter_module("reqwest", LevelFilter::Warn)
            .filter_module("hyper", LevelFilter::Warn)
            .filter_module("rustls", LevelFilter::Warn);
        builder
    };

    // A second initialisation (e.g. from tests) keeps the first logger.
    let _ = builder
        .format_timestamp(None)
        .target(Target::Stderr)
        .try_init();
}
