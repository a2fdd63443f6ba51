//! Shared helpers for the chart binaries.
//!
//! - **`cli`**: command-line argument groups common to every binary, chiefly the
//!   output directory and an optional resolution override.
//!
//! - **`logging`**: one-time `env_logger` initialisation with an `info` default
//!   that `RUST_LOG` can override.
//!

pub mod cli;
pub mod logging;
