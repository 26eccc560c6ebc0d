//! Run-trace export

pub mod exporter;

pub use exporter::{TraceExporter, TraceFiles};
