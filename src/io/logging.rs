//! Logger installation for the command-line binary
//!
//! The library only talks to the `log` facade; the binary decides where the
//! records go. `RUST_LOG` always wins over the verbosity flags.

use log::LevelFilter;

/// Log level selected by the number of `-v` flags
///
/// Quiet runs only report warnings and errors.
pub const fn level_for_verbosity(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Warn;
    }
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install `env_logger` as the global logger
///
/// Calling it again after a logger is installed has no effect.
pub fn init_logging(level: LevelFilter) {
    let env = env_logger::Env::default().default_filter_or(level.as_str());
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
