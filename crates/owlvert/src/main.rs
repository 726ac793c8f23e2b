//! Batch conversion of `.owl` ontologies.
//!
//! See the [`owlvert`] library for more information.
//!
//! [`owlvert`]: https://crates.io/crates/owlvert

use anyhow::Result;
use clap::Parser;

const VERSION: &str = match option_env!("OWLVERT_VERSION") {
    Some(v) => v,
    None => env!("CARGO_PKG_VERSION"),
};

/// Convert every .owl ontology under a directory into .owx.
#[derive(Parser)]
#[command(author, version, about, max_term_width = 80, version = VERSION)]
struct Opts {
    #[command(flatten)]
    inner: owlvert::cli::Owlvert,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    owlvert::cli::entry(&opts.inner)
}
