// maskedit/src/logger.rs
//! Logger setup for the `maskedit` binary and its tests.
//!
//! Log lines go to stderr without timestamps, e.g. `[INFO maskedit] ...`.
//! `RUST_LOG` is honoured unless an explicit level is passed in.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initializes the global logger. Safe to call more than once; later calls are ignored.
///
/// # Arguments
///
/// * `level` - Overrides `RUST_LOG` for every target when set.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).target(Target::Stderr);
    let _ = builder.try_init();
}
