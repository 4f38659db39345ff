//! Userbase service shell.
//!
//! Wires the pure core to real I/O: storage backends, the HTTP-shaped
//! request handler and the axum router that serves it.

pub mod app;
#[cfg(feature = "dynamodb")]
pub mod config;
pub mod handlers;
pub mod state;
pub mod storage;
