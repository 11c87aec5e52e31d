// logsweep/src/logger.rs
//! Logging setup for the `logsweep` binary.
//!
//! All crates log through the `log` facade; this installs `env_logger` once.
//! `RUST_LOG` is honored unless a command-line flag overrides the level for the
//! logsweep crates.

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Initializes the global logger. Later calls are ignored.
///
/// * `None` - use `RUST_LOG`, defaulting to `warn`.
/// * `Some(LevelFilter::Off)` - silence everything.
/// * `Some(level)` - force `level` for the `logsweep` and `logsweep_core` targets.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));

    match level_override {
        Some(LevelFilter::Off) => {
            builder.filter_level(LevelFilter::Off);
        }
        Some(level) => {
            builder
                .filter_module("logsweep", level)
                .filter_module("logsweep_core", level);
        }
        None => {}
    }

    builder.format(|buf, record| {
        writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
    });

    let _ = builder.try_init();
}

/// Maps the global CLI flags to a level override. `quiet` wins over `debug`.
pub fn level_from_flags(quiet: bool, debug: bool, disable_debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if disable_debug {
        Some(LevelFilter::Info)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_overrides_debug() {
        assert_eq!(level_from_flags(true, true, false), Some(LevelFilter::Off));
        assert_eq!(level_from_flags(false, true, true), Some(LevelFilter::Info));
        assert_eq!(level_from_flags(false, true, false), Some(LevelFilter::Debug));
        assert_eq!(level_from_flags(false, false, false), None);
    }
}
