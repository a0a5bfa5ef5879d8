// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`command`] defines the opaque command-line value handed to the
//!   supervisor.
//! - [`supervisor`] spawns it with `tokio::process::Command` and relays
//!   its output.

pub mod command;
pub mod supervisor;

pub use command::NodeCommand;
pub use supervisor::Supervisor;
