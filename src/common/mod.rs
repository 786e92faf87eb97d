//! Common types and utilities shared across cachesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Design constants
//! - Error types
//! - The [`Key`] identifier

pub mod config;
pub mod error;
mod key;

pub use error::{Error, Result};
pub use key::{keys, Key};
