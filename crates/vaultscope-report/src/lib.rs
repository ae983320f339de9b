#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Vaultscope Report Emission
//!
//! Turns audit rows into their external forms: the CSV report on the
//! machine-readable side, and a short human summary for stderr.

pub mod error;
pub mod sink;
pub mod summary;

pub use error::{Error, Result};
pub use sink::{CsvSink, REPORT_HEADER, ReportSink, write_report};
pub use summary::render_summary;
