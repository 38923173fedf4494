//! Terminal front-end for seekbench.
//!
//! A thin adapter over `seekbench-core`: it turns command-line arguments and
//! interactive input into validated values, calls the core synchronously and
//! prints reports and charts from `seekbench-report`. Invalid input is
//! reported as a message; it never reaches the benchmark code.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod args;
pub mod commands;
pub mod logging;
pub mod session;

pub use args::{Cli, Command};
