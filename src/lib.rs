//! Batch conversion of `.owl` ontologies into `.owx`.
//!
//! owlvert walks a directory tree, picks out every regular file whose name
//! ends in `.owl` and hands each one to an external converter:
//!
//! ```text
//! <converter> convert --input dir/example.owl --output dir/example.owx
//! ```
//!
//! Files are converted one at a time. A failing conversion does not stop the
//! batch, but it is reported at the end and turns into a failing exit status
//! unless `--ignore-failures` is passed.

mod batch;
pub mod cli;
mod convert;
mod out;
mod walk;

pub use self::batch::{Failure, Summary};
pub use self::convert::{Converter, output_path};
pub use self::walk::{Files, find, matches_suffix};

/// The suffix of files picked up for conversion.
pub const INPUT_SUFFIX: &str = ".owl";

/// The suffix given to converted files.
pub const OUTPUT_SUFFIX: &str = ".owx";
