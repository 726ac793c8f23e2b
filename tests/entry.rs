//! End-to-end runs of `owlvert::cli::entry` against a fake converter.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tempfile::TempDir;

#[derive(Parser)]
struct Opts {
    #[command(flatten)]
    inner: owlvert::cli::Owlvert,
}

/// Write a converter which logs its arguments, copies the input to the output
/// and fails for inputs with `bad` in their name.
fn fake_converter(dir: &Path, log: &Path) -> Result<PathBuf> {
    let path = dir.join("fake-converter");

    let script = format!(
        "#!/bin/sh\n\
         printf '%s\\n' \"$*\" >> '{log}'\n\
         case \"$3\" in *bad*) exit 3;; esac\n\
         cp \"$3\" \"$5\"\n",
        log = log.display()
    );

    fs::write(&path, script)?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    Ok(path)
}

fn touch(root: &Path, path: &str) -> Result<()> {
    let path = root.join(path);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let contents = path.display().to_string();
    fs::write(path, contents)?;
    Ok(())
}

fn parse(args: &[&str]) -> Opts {
    Opts::parse_from(std::iter::once("owlvert").chain(args.iter().copied()))
}

fn log_lines(log: &Path) -> Result<Vec<String>> {
    if !log.exists() {
        return Ok(Vec::new());
    }

    Ok(fs::read_to_string(log)?.lines().map(str::to_owned).collect())
}

#[test]
fn converts_every_matching_file() -> Result<()> {
    let tools = TempDir::new()?;
    let log = tools.path().join("calls.log");
    let converter = fake_converter(tools.path(), &log)?;

    let tree = TempDir::new()?;
    touch(tree.path(), "a.owl")?;
    touch(tree.path(), "dir/sub/example.owl")?;
    touch(tree.path(), "dir/readme.md")?;

    let root = tree.path().to_string_lossy().into_owned();
    let converter = converter.to_string_lossy().into_owned();
    let opts = parse(&["--color", "never", "--converter", &converter, &root]);

    owlvert::cli::entry(&opts.inner)?;

    let calls = log_lines(&log)?;
    assert_eq!(calls.len(), 2, "{calls:?}");

    let input = tree.path().join("dir/sub/example.owl");
    let output = tree.path().join("dir/sub/example.owx");
    let expected = format!(
        "convert --input {} --output {}",
        input.display(),
        output.display()
    );
    assert!(calls.contains(&expected), "{calls:?}");

    assert!(tree.path().join("a.owx").is_file());
    assert!(output.is_file());
    Ok(())
}

#[test]
fn failures_are_aggregated() -> Result<()> {
    let tools = TempDir::new()?;
    let log = tools.path().join("calls.log");
    let converter = fake_converter(tools.path(), &log)?;

    let tree = TempDir::new()?;
    touch(tree.path(), "1-first.owl")?;
    touch(tree.path(), "2-bad.owl")?;
    touch(tree.path(), "3-last.owl")?;

    let root = tree.path().to_string_lossy().into_owned();
    let converter = converter.to_string_lossy().into_owned();

    let opts = parse(&["--color", "never", "--converter", &converter, &root]);
    let error = owlvert::cli::entry(&opts.inner).unwrap_err();
    assert_eq!(error.to_string(), "1 of 3 conversion(s) failed");

    assert_eq!(log_lines(&log)?.len(), 3);
    assert!(tree.path().join("1-first.owx").is_file());
    assert!(!tree.path().join("2-bad.owx").exists());
    assert!(tree.path().join("3-last.owx").is_file());

    let opts = parse(&[
        "--color",
        "never",
        "--ignore-failures",
        "--converter",
        &converter,
        &root,
    ]);
    owlvert::cli::entry(&opts.inner)?;
    assert_eq!(log_lines(&log)?.len(), 6);
    Ok(())
}

#[test]
fn dry_run_spawns_nothing() -> Result<()> {
    let tools = TempDir::new()?;
    let log = tools.path().join("calls.log");
    let converter = fake_converter(tools.path(), &log)?;

    let tree = TempDir::new()?;
    touch(tree.path(), "a.owl")?;

    let root = tree.path().to_string_lossy().into_owned();
    let converter = converter.to_string_lossy().into_owned();
    let opts = parse(&["--dry-run", "--converter", &converter, &root]);

    owlvert::cli::entry(&opts.inner)?;

    assert!(log_lines(&log)?.is_empty());
    assert!(!tree.path().join("a.owx").exists());
    Ok(())
}

#[test]
fn empty_tree_succeeds() -> Result<()> {
    let tree = TempDir::new()?;
    touch(tree.path(), "notes.txt")?;

    let root = tree.path().to_string_lossy().into_owned();
    let opts = parse(&["--converter", "/nonexistent/converter", &root]);

    owlvert::cli::entry(&opts.inner)?;
    Ok(())
}

#[test]
fn missing_root_fails() -> Result<()> {
    let tree = TempDir::new()?;
    let root = tree.path().join("missing").to_string_lossy().into_owned();
    let opts = parse(&[&root]);

    let error = owlvert::cli::entry(&opts.inner).unwrap_err();
    assert!(error.to_string().contains("cannot read root"), "{error:#}");
    Ok(())
}

#[test]
fn skip_existing_leaves_outputs_alone() -> Result<()> {
    let tools = TempDir::new()?;
    let log = tools.path().join("calls.log");
    let converter = fake_converter(tools.path(), &log)?;

    let tree = TempDir::new()?;
    touch(tree.path(), "done.owl")?;
    fs::write(tree.path().join("done.owx"), "previous")?;
    touch(tree.path(), "fresh.owl")?;

    let root = tree.path().to_string_lossy().into_owned();
    let converter = converter.to_string_lossy().into_owned();
    let opts = parse(&["--skip-existing", "--converter", &converter, &root]);

    owlvert::cli::entry(&opts.inner)?;

    let calls = log_lines(&log)?;
    assert_eq!(calls.len(), 1, "{calls:?}");
    assert!(calls[0].contains("fresh.owl"), "{calls:?}");
    assert_eq!(fs::read_to_string(tree.path().join("done.owx"))?, "previous");
    assert!(tree.path().join("fresh.owx").is_file());
    Ok(())
}
