//! Command-line entry point.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use termcolor::{ColorChoice, StandardStream};

use crate::convert::Converter;
use crate::out::Out;
use crate::{INPUT_SUFFIX, OUTPUT_SUFFIX, batch, walk};

/// The converter used unless `--converter` says otherwise.
pub const DEFAULT_CONVERTER: &str = "robot";

/// When to use colors.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Color {
    /// Use colors if standard output is a terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl Color {
    fn choice(self) -> ColorChoice {
        match self {
            Color::Auto if std::io::stdout().is_terminal() => ColorChoice::Auto,
            Color::Auto | Color::Never => ColorChoice::Never,
            Color::Always => ColorChoice::Always,
        }
    }
}

#[derive(Debug, Args)]
pub struct Owlvert {
    /// Directory to search for .owl files.
    #[arg(value_name = "ROOT", default_value = ".")]
    root: PathBuf,
    /// The converter to run, invoked as `<converter> convert --input <path>
    /// --output <path>`.
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_CONVERTER)]
    converter: PathBuf,
    /// Only print which files would be converted.
    #[arg(long)]
    dry_run: bool,
    /// Leave files alone whose converted output already exists.
    #[arg(long)]
    skip_existing: bool,
    /// Exit successfully even if some conversions failed.
    #[arg(long)]
    ignore_failures: bool,
    /// Colorize output.
    #[arg(long, value_enum, default_value_t)]
    color: Color,
}

/// Entry point for owlvert.
pub fn entry(opts: &Owlvert) -> Result<()> {
    let mut stdout = StandardStream::stdout(opts.color.choice());
    let mut o = Out::new(&mut stdout);

    let files = walk::find(&opts.root, INPUT_SUFFIX)?;
    let converter = Converter::new(&opts.converter);

    let options = batch::Options {
        from: INPUT_SUFFIX,
        to: OUTPUT_SUFFIX,
        skip_existing: opts.skip_existing,
        dry_run: opts.dry_run,
    };

    let summary = batch::run(&mut o, files, &options, |input, output| {
        converter.convert(input, output)
    })?;

    summary.report(&mut o)?;
    summary.finish(opts.ignore_failures)
}
