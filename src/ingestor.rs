//! Ingestor: drives a whole extraction run.
//!
//! [`run`] validates the input root before any output file is touched, then
//! opens the router, walks the discovered log directories and feeds every
//! file through the pipeline. Per-file failures are logged, recorded in the
//! [`RunReport`] and skipped.

use std::path::Path;

use xivlog_core::config::Config;
use xivlog_core::export::Router;
use xivlog_core::{Lexicon, Pipeline, Result};
use xivlog_feeds::{read_blob, LogDiscovery};

use crate::report::RunReport;

/// What one source file contributed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    pub tokens: usize,
    pub records: usize,
    pub substituted: usize,
}

/// Feeds source files through a pipeline into a router.
pub struct Ingestor<'a> {
    pipeline: Pipeline<'a>,
    router: Router,
}

impl<'a> Ingestor<'a> {
    pub fn new(pipeline: Pipeline<'a>, router: Router) -> Self {
        Self { pipeline, router }
    }

    /// Read, extract and route one file. Records are written in source order.
    ///
    /// A write error stops the file; lines already written stay in their
    /// streams and are counted by the router.
    pub fn ingest_file(&mut self, path: &Path) -> Result<FileStats> {
        let blob = read_blob(path)?;
        let extraction = self.pipeline.extract(&blob);
        for record in &extraction.records {
            self.router.write(record)?;
        }
        Ok(FileStats {
            tokens: extraction.token_count,
            records: extraction.records.len(),
            substituted: extraction.substituted,
        })
    }

    /// Ingest every file, reporting failures instead of returning them.
    pub fn ingest_all<'p, I>(&mut self, paths: I, report: &mut RunReport)
    where
        I: IntoIterator<Item = &'p Path>,
    {
        for path in paths {
            match self.ingest_file(path) {
                Ok(stats) => {
                    tracing::debug!(
                        path = %path.display(),
                        records = stats.records,
                        substituted = stats.substituted,
                        "file processed"
                    );
                    report.record_file(&stats);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "skipping file");
                    report.record_failure(path, &err);
                }
            }
        }
    }

    /// Flush every output and hand back the router's per-stream totals.
    pub fn finish(self, report: &mut RunReport) -> Result<()> {
        let streams = self.router.finish()?;
        report.finish(streams);
        Ok(())
    }
}

/// Run one extraction with `config`.
///
/// Fails before producing any output when the input root is unset or
/// missing, or when the output files cannot be set up.
pub fn run(config: &Config) -> Result<RunReport> {
    let input = config.input_root()?;
    let lexicon = Lexicon::from_config(&config.lexicon);
    let pipeline = Pipeline::new(&lexicon);
    let router = Router::open(
        &config.paths.output,
        &config.output.tracked,
        &config.output.catch_all,
    )?;

    tracing::info!(
        input = %input.display(),
        output = %config.paths.output.display(),
        tracked = ?config.output.tracked,
        "starting extraction"
    );

    let mut report = RunReport::new(input, &config.paths.output);
    let mut ingestor = Ingestor::new(pipeline, router);

    for dir in LogDiscovery::new(input, &config.discovery).scan() {
        tracing::info!(character = %dir.character, files = dir.files.len(), "scanning");
        report.directories_scanned += 1;
        ingestor.ingest_all(dir.files.iter().map(|p| p.as_path()), &mut report);
    }

    ingestor.finish(&mut report)?;
    tracing::info!(
        records = report.records,
        files = report.files_processed,
        failed = report.files_failed,
        "extraction complete"
    );
    Ok(report)
}
