//! End-to-end simulation runs.
//!
//! # Components
//! - [`SimulationConfig`] - Validated run parameters
//! - [`run`] / [`run_config`] - One algorithm over a generated workload
//! - [`run_workload`] - One algorithm over a fixed key trace
//! - [`compare`] - Every algorithm over the same generated workload
//! - [`SimulationResult`] - Final snapshot, statistics and history

mod runner;

pub use runner::{compare, run, run_config, run_workload, SimulationConfig, SimulationResult};
