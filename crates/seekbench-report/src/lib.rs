//! Presentation of seekbench results in a terminal.
//!
//! Everything here consumes values produced by `seekbench-core` and turns
//! them into text; nothing calls back into the benchmark code.
//!
//! - [`text`]: single-run and sweep reports
//! - [`preview`]: abbreviated rendering of large datasets
//! - [`chart`]: ASCII line and bar charts
//!
//! Each renderer is a small borrowing struct that implements
//! [`Display`](std::fmt::Display), with a free function returning `String`
//! for the common case.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod chart;
pub mod preview;
pub mod text;

pub use chart::{bar_chart, history_chart, line_chart, BarChart, ChartSize, HistoryChart, LineChart};
pub use preview::{dataset_preview, DatasetPreview};
pub use text::{single_report, sweep_report, SingleReport, SweepReport};
