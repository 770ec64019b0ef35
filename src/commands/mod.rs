//! CLI command implementations.
//!
//! Each submodule handles one command: its configuration, validation,
//! and execution logic.
//!
//! Available commands:
//! - **score**: Score VM resources and aggregate an assessment result
//! - **init**: Initialize a new riskmap configuration file

pub mod init;
pub mod score;

pub use init::init_config;
pub use score::{handle_score, ScoreConfig};
