//! Error type for the simulation library.
//!
//! The per-frame step never fails; these errors come from building a
//! scenario (config loading, body validation, population seeding).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid body #{index}: {reason}")]
    InvalidBody { index: usize, reason: &'static str },

    #[error("invalid arena: {0}")]
    InvalidArena(&'static str),

    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    #[error("placed {placed} of {requested} particles before running out of attempts")]
    SeedingExhausted { placed: usize, requested: usize },

    #[error("failed to read scenario {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario")]
    Parse(#[from] serde_yaml::Error),
}
