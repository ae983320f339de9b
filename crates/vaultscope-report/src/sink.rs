//! Report emission: the sink trait and its CSV implementation.

use std::io::Write;

use vaultscope_core::AccessRow;

use crate::error::Result;

/// Column headers of the access report, in emission order.
pub const REPORT_HEADER: [&str; 5] = [
    "User Name",
    "User Email",
    "Vault Name",
    "Permissions",
    "Access Via",
];

/// A destination report rows can be written to.
///
/// The seam exists so the CLI can swap destinations (file, stdout, a
/// buffer in tests) without the emission logic noticing.
pub trait ReportSink {
    /// Writes the whole report: the header first, then one record per
    /// row, in the order given.
    fn write_rows(&mut self, rows: &[AccessRow]) -> Result<()>;
}

/// A [`ReportSink`] that emits CSV.
///
/// Cells carry the row's display forms: permissions joined with
/// `", "`, provenance labels joined with `"; "`. Quoting is left to
/// the `csv` crate.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    /// Wraps a writer; nothing is emitted until [`ReportSink::write_rows`].
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }
}

impl<W: Write> ReportSink for CsvSink<W> {
    fn write_rows(&mut self, rows: &[AccessRow]) -> Result<()> {
        self.writer.write_record(REPORT_HEADER)?;
        for row in rows {
            let permissions = row.permissions_display();
            let access_via = row.access_via_display();
            self.writer.write_record([
                row.user_name.as_str(),
                row.user_email.as_str(),
                row.vault_name.as_str(),
                permissions.as_str(),
                access_via.as_str(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes the rows as CSV to any writer.
pub fn write_report<W: Write>(writer: W, rows: &[AccessRow]) -> Result<()> {
    CsvSink::new(writer).write_rows(rows)
}
