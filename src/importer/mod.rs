//! # Importer Module
//!
//! Orchestrates multi-file conversion runs: each file is assembled and
//! rendered to completion before the next begins, in the order supplied.
//! Rendered standalone workbooks accumulate in an explicit ordered
//! collection owned by the importer and are written out in a final
//! bulk-persist step that treats a cancelled destination choice as a benign
//! no-op.
use crate::error::{CsvBookError, ResultMessage};
use crate::table::assembler::{assemble, reassemble, AssembleOptions};
use crate::workbook::{xlsx, ExportFile, SinkError, WorkbookSink};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Failure policy for a multi-file run.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum ErrorPolicy {
    /// Record the failure and continue with the next file
    #[default]
    Continue,
    /// Stop the run at the first failure
    Halt,
}

/// Options controlling a conversion run.
#[derive(Clone, Debug, Default)]
pub struct ImportOptions {
    /// Assembly options shared by every file in the run
    pub assemble: AssembleOptions,
    /// Failure policy across files
    pub error_policy: ErrorPolicy,
}

/// Outcome of one multi-file run.
///
/// Completion is reported only after every selected file has been attempted
/// (unless the halt policy stopped the loop early).
#[derive(Debug, Default)]
pub struct RunReport {
    /// Sheet names of converted files, in input order
    pub converted: Vec<String>,
    /// Files skipped as empty, a soft no-op
    pub skipped: Vec<String>,
    /// Per-file failures, prefixed with the file name
    pub failures: Vec<(String, CsvBookError)>,
}

impl RunReport {
    /// True when every attempted file converted or was a soft no-op.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Outcome of the final persistence step.
#[derive(Debug, PartialEq)]
pub enum PersistOutcome {
    /// Every pending file was written; carries the file count
    Saved(usize),
    /// The destination choice was cancelled; pending files kept for retry
    Cancelled,
}

/// Drives conversion of a batch of delimited text files into workbook
/// output through one configured sink.
///
/// Owns the ordered collection of rendered files awaiting the final
/// bulk-persist step; the collection is cleared at the start of each run so
/// results from different runs never mix.
pub struct Importer {
    options: ImportOptions,
    sink: WorkbookSink,
    pending: Vec<ExportFile>,
}

impl Importer {
    pub fn new(options: ImportOptions, sink: WorkbookSink) -> Self {
        Self {
            options,
            sink,
            pending: Vec::new(),
        }
    }

    /// Files rendered so far and not yet persisted.
    pub fn pending(&self) -> &[ExportFile] {
        &self.pending
    }

    /// The configured sink, e.g. to inspect the live session.
    pub fn sink(&self) -> &WorkbookSink {
        &self.sink
    }

    /// Mutable sink access, e.g. to apply edits to the live session.
    pub fn sink_mut(&mut self) -> &mut WorkbookSink {
        &mut self.sink
    }

    /// Converts `(file name, bytes)` pairs in input order.
    ///
    /// Each file is processed to completion before the next begins. A
    /// failure is isolated to its file and never corrupts units already
    /// rendered; the error policy decides whether the loop continues.
    pub fn run<I>(&mut self, files: I) -> RunReport
    where
        I: IntoIterator<Item = (String, Vec<u8>)>,
    {
        self.pending.clear();
        let mut report = RunReport::default();
        for (file_name, bytes) in files {
            match self.convert(&file_name, &bytes).with_prefix(&file_name) {
                Ok(Some(sheet_name)) => {
                    debug!(file = %file_name, sheet = %sheet_name, "converted");
                    report.converted.push(sheet_name);
                }
                Ok(None) => {
                    debug!(file = %file_name, "empty input, skipped");
                    report.skipped.push(file_name);
                }
                Err(error) => {
                    warn!(file = %file_name, %error, "conversion failed");
                    report.failures.push((file_name, error));
                    if self.options.error_policy == ErrorPolicy::Halt {
                        break;
                    }
                }
            }
        }
        info!(
            converted = report.converted.len(),
            skipped = report.skipped.len(),
            failed = report.failures.len(),
            "import run finished"
        );
        report
    }

    /// Expands glob patterns, reads the matched files from disk and runs
    /// them in order. The file name handed to assembly is the path's final
    /// component.
    pub fn run_paths(&mut self, patterns: &[&str]) -> Result<RunReport, CsvBookError> {
        let mut files = Vec::new();
        for pattern in patterns {
            for path in glob::glob(pattern)? {
                let path = path?;
                let name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.to_string_lossy().into_owned());
                let bytes = fs::read(&path)
                    .with_context(|| format!("Read '{}' failed", path.display()))?;
                files.push((name, bytes));
            }
        }
        Ok(self.run(files))
    }

    /// Converts one file: assemble, then render through the sink.
    fn convert(&mut self, file_name: &str, bytes: &[u8]) -> Result<Option<String>, CsvBookError> {
        let unit = match assemble(file_name, bytes, &self.options.assemble)? {
            Some(unit) => unit,
            None => return Ok(None),
        };
        let sheet_name = unit.sheet_name.clone();
        if let Some(file) = self.sink.render(&unit)? {
            self.pending.push(file);
        }
        Ok(Some(sheet_name))
    }

    /// Re-exports a session sheet after user edits.
    ///
    /// Reads the edited grid back from the live session, reapplies the
    /// shaping step with the carried format map and renders a fresh
    /// standalone workbook into the pending collection. An emptied sheet is
    /// a soft no-op.
    pub fn export_session_sheet(&mut self, sheet_name: &str) -> Result<(), CsvBookError> {
        let session = self.sink.session().ok_or(SinkError::NoSession)?;
        let (grid, numeric_columns) = session.read_back(sheet_name)?;
        let Some(unit) = reassemble(sheet_name, sheet_name, grid, numeric_columns) else {
            debug!(sheet = %sheet_name, "session sheet empty, nothing to export");
            return Ok(());
        };
        self.pending.push(xlsx::encode_unit(&unit)?);
        Ok(())
    }

    /// Writes every pending file under the chosen destination directory.
    ///
    /// `None` models a cancelled destination dialog: a benign no-op that
    /// keeps the pending files intact for retry, reported distinctly from a
    /// failed write. Successful persistence drains the collection.
    pub fn persist(&mut self, destination: Option<&Path>) -> Result<PersistOutcome, CsvBookError> {
        let Some(directory) = destination else {
            info!(pending = self.pending.len(), "destination choice cancelled");
            return Ok(PersistOutcome::Cancelled);
        };
        for file in &self.pending {
            fs::write(directory.join(&file.file_name), &file.bytes)
                .map_err(CsvBookError::from)
                .with_prefix(&file.file_name)?;
        }
        let count = self.pending.len();
        self.pending.clear();
        info!(count, directory = %directory.display(), "persisted workbook files");
        Ok(PersistOutcome::Saved(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::cell::Cell;
    use crate::workbook::session::SessionWorkbook;

    fn file_importer() -> Importer {
        Importer::new(ImportOptions::default(), WorkbookSink::File)
    }

    fn session_importer() -> Importer {
        Importer::new(
            ImportOptions::default(),
            WorkbookSink::Session(SessionWorkbook::new()),
        )
    }

    fn batch() -> Vec<(String, Vec<u8>)> {
        vec![
            ("demo.csv".to_owned(), b"A,B\n1,2\n".to_vec()),
            ("empty.csv".to_owned(), b"\n\n".to_vec()),
            ("bad.csv".to_owned(), vec![0xFF, 0xFF]),
            ("other.csv".to_owned(), b"C\nx\n".to_vec()),
        ]
    }

    #[test]
    fn run_reports_each_file_outcome() {
        let mut importer = file_importer();
        let report = importer.run(batch());

        assert_eq!(report.converted, vec!["demo", "other"]);
        assert_eq!(report.skipped, vec!["empty.csv"]);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].1.to_string().starts_with("bad.csv: "));
        assert!(!report.is_clean());
        // Failures never corrupt previously rendered files
        assert_eq!(importer.pending().len(), 2);
    }

    #[test]
    fn halt_policy_stops_at_first_failure() {
        let mut importer = Importer::new(
            ImportOptions {
                error_policy: ErrorPolicy::Halt,
                ..Default::default()
            },
            WorkbookSink::File,
        );
        let report = importer.run(batch());

        assert_eq!(report.converted, vec!["demo"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(importer.pending().len(), 1);
    }

    #[test]
    fn rerun_clears_previous_pending_files() {
        let mut importer = file_importer();
        importer.run(vec![("demo.csv".to_owned(), b"A\n1\n".to_vec())]);
        assert_eq!(importer.pending().len(), 1);

        importer.run(vec![("other.csv".to_owned(), b"B\n2\n".to_vec())]);
        assert_eq!(importer.pending().len(), 1);
        assert_eq!(importer.pending()[0].file_name, "other.xlsx");
    }

    #[test]
    fn session_run_accumulates_sheets_not_files() {
        let mut importer = session_importer();
        let report = importer.run(vec![
            ("demo.csv".to_owned(), b"A\n1\n".to_vec()),
            ("other.csv".to_owned(), b"B\n2\n".to_vec()),
        ]);

        assert!(report.is_clean());
        assert!(importer.pending().is_empty());
        let session = importer.sink().session().unwrap();
        assert_eq!(session.sheet_names(), vec!["demo", "other"]);
    }

    #[test]
    fn duplicate_sheet_names_fail_per_file() {
        let mut importer = session_importer();
        let report = importer.run(vec![
            ("demo.csv".to_owned(), b"A\n1\n".to_vec()),
            ("demo.txt".to_owned(), b"B\n2\n".to_vec()),
        ]);

        assert_eq!(report.converted, vec!["demo"]);
        assert_eq!(report.failures.len(), 1);
    }

    #[test]
    fn edited_session_sheet_exports_with_carried_formats() {
        let mut importer = session_importer();
        importer.run(vec![(
            "demo.csv".to_owned(),
            b"Nome,Importo\nMario,\"1,50\"\n".to_vec(),
        )]);

        let session = importer.sink_mut().session_mut().unwrap();
        session
            .update_cell("demo", 1, 1, Cell::Number(2.75))
            .unwrap();

        importer.export_session_sheet("demo").unwrap();
        assert_eq!(importer.pending().len(), 1);
        assert_eq!(importer.pending()[0].file_name, "demo.xlsx");
    }

    #[test]
    fn export_requires_a_session_sink() {
        let mut importer = file_importer();
        let error = importer.export_session_sheet("demo").unwrap_err();
        assert_eq!(error.to_string(), "No live session sink configured");
    }

    #[test]
    fn cancelled_persistence_keeps_pending_files() {
        let mut importer = file_importer();
        importer.run(vec![("demo.csv".to_owned(), b"A\n1\n".to_vec())]);

        assert_eq!(importer.persist(None).unwrap(), PersistOutcome::Cancelled);
        assert_eq!(importer.pending().len(), 1);
    }

    #[test]
    fn persistence_writes_and_drains_pending_files() {
        let directory = tempfile::tempdir().unwrap();
        let mut importer = file_importer();
        importer.run(vec![
            ("demo.csv".to_owned(), b"A\n1\n".to_vec()),
            ("other.csv".to_owned(), b"B\n2\n".to_vec()),
        ]);

        let outcome = importer.persist(Some(directory.path())).unwrap();
        assert_eq!(outcome, PersistOutcome::Saved(2));
        assert!(importer.pending().is_empty());
        assert!(directory.path().join("demo.xlsx").exists());
        assert!(directory.path().join("other.xlsx").exists());
    }

    #[test]
    fn run_paths_expands_patterns_in_order() {
        let directory = tempfile::tempdir().unwrap();
        fs::write(directory.path().join("a.csv"), b"A\n1\n").unwrap();
        fs::write(directory.path().join("b.csv"), b"B\n2\n").unwrap();

        let mut importer = file_importer();
        let pattern = directory.path().join("*.csv");
        let report = importer
            .run_paths(&[pattern.to_str().unwrap()])
            .unwrap();

        assert_eq!(report.converted, vec!["a", "b"]);
        assert_eq!(importer.pending().len(), 2);
    }
}
