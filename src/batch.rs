use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use crate::convert::output_path;
use crate::out::{Out, blank, error, info, warning};

/// A conversion which did not succeed.
#[derive(Debug)]
pub struct Failure {
    /// The file which was being converted.
    pub input: PathBuf,
    /// Why the conversion failed.
    pub reason: String,
}

/// The outcome of a batch.
#[derive(Debug, Default)]
pub struct Summary {
    /// Number of files successfully converted.
    pub converted: usize,
    /// Number of files which would have been converted in a dry run.
    pub pending: usize,
    /// Number of files skipped because their output already exists.
    pub skipped: usize,
    /// Conversions which failed.
    pub failed: Vec<Failure>,
    /// Errors raised while walking the tree.
    pub walk_errors: Vec<String>,
    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl Summary {
    /// Total number of files a conversion was attempted for.
    #[inline]
    pub fn attempted(&self) -> usize {
        self.converted + self.failed.len()
    }

    pub(crate) fn report(&self, o: &mut Out<'_>) -> Result<()> {
        if self.dry_run {
            info!(o, "Would convert {} file(s)", self.pending);
        } else {
            info!(o, "Converted {} of {} file(s)", self.converted, self.attempted());
        }

        if self.skipped > 0 {
            info!(o, "Skipped {} file(s) with existing output", self.skipped);
        }

        for failure in &self.failed {
            error!(o, "{}: {}", failure.input.display(), failure.reason);
        }

        if !self.walk_errors.is_empty() {
            warning!(o, "{} error(s) while searching for files", self.walk_errors.len());
        }

        Ok(())
    }

    /// Decide whether the batch as a whole succeeded.
    ///
    /// Walk errors always fail. Conversion failures fail unless
    /// `ignore_failures` is set.
    pub fn finish(&self, ignore_failures: bool) -> Result<()> {
        if !self.walk_errors.is_empty() {
            bail!(
                "{} error(s) while searching for files",
                self.walk_errors.len()
            );
        }

        if !self.failed.is_empty() && !ignore_failures {
            bail!(
                "{} of {} conversion(s) failed",
                self.failed.len(),
                self.attempted()
            );
        }

        Ok(())
    }
}

/// How a batch treats each file.
pub(crate) struct Options<'a> {
    /// Suffix of input files.
    pub(crate) from: &'a str,
    /// Suffix given to outputs.
    pub(crate) to: &'a str,
    /// Leave files alone whose output already exists.
    pub(crate) skip_existing: bool,
    /// Report what would be converted without converting.
    pub(crate) dry_run: bool,
}

/// Convert every file produced by `files`, one at a time.
///
/// A failed conversion or walk error is reported and recorded, after which
/// the batch moves on to the next file.
pub(crate) fn run<I, E, C>(
    o: &mut Out<'_>,
    files: I,
    options: &Options<'_>,
    mut convert: C,
) -> Result<Summary>
where
    I: IntoIterator<Item = Result<PathBuf, E>>,
    E: std::fmt::Display,
    C: FnMut(&Path, &Path) -> Result<()>,
{
    let mut summary = Summary {
        dry_run: options.dry_run,
        ..Summary::default()
    };

    for file in files {
        let input = match file {
            Ok(input) => input,
            Err(e) => {
                warning!(o, "{e}");
                summary.walk_errors.push(e.to_string());
                continue;
            }
        };

        let output = output_path(&input, options.from, options.to);

        if options.skip_existing && output.exists() {
            info!(o, "Skipping {}", input.display());
            blank!(o.indent(1), "{} already exists", output.display());
            summary.skipped += 1;
            continue;
        }

        info!(o, "Converting {}", input.display());
        blank!(o.indent(1), "-> {}", output.display());

        if options.dry_run {
            summary.pending += 1;
            continue;
        }

        o.flush()?;

        match convert(&input, &output) {
            Ok(()) => {
                summary.converted += 1;
            }
            Err(e) => {
                let reason = format!("{e:#}");
                error!(o.indent(1), "{reason}");
                summary.failed.push(Failure { input, reason });
            }
        }
    }

    Ok(summary)
}
