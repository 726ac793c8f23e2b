use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{Context, Result, ensure};

/// Compute where the converted form of `input` is written.
///
/// The output lives next to the input with the trailing `from` suffix
/// replaced by `to`, so `dir/sub/example.owl` becomes `dir/sub/example.owx`.
/// Names which don't carry `from` get their extension replaced instead.
pub fn output_path(input: &Path, from: &str, to: &str) -> PathBuf {
    if let Some(name) = input.file_name().and_then(|name| name.to_str())
        && let Some(stem) = name.strip_suffix(from)
    {
        return input.with_file_name(format!("{stem}{to}"));
    }

    input.with_extension(to.trim_start_matches('.'))
}

/// An external converter invoked as
/// `<program> convert --input <input> --output <output>`.
pub struct Converter {
    program: OsString,
}

impl Converter {
    /// Construct a converter which runs the given program.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The program being run.
    #[inline]
    pub fn program(&self) -> &Path {
        Path::new(&self.program)
    }

    /// Build the command converting `input` into `output`.
    ///
    /// Standard input is closed, output and errors go straight to the
    /// terminal.
    pub fn command(&self, input: &Path, output: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("convert")
            .arg("--input")
            .arg(input)
            .arg("--output")
            .arg(output)
            .stdin(Stdio::null());
        command
    }

    /// Run the converter and wait for it to finish.
    pub fn convert(&self, input: &Path, output: &Path) -> Result<()> {
        let status = self
            .command(input, output)
            .status()
            .with_context(|| format!("{}: failed to run", self.program().display()))?;

        ensure!(
            status.success(),
            "{} exited with {status}",
            self.program().display()
        );

        Ok(())
    }
}
