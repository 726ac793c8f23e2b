use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ignore::{Walk, WalkBuilder};

/// Find all regular files under `root` whose name ends with `suffix`.
///
/// The walk behaves like a plain recursive `find`: hidden entries are
/// visited, ignore files are not consulted and symlinks are not followed.
/// Siblings are visited in file name order.
///
/// Fails right away if `root` can't be read. Errors encountered once the walk
/// is under way are yielded by the returned iterator.
pub fn find<'a>(root: &Path, suffix: &'a str) -> Result<Files<'a>> {
    fs::metadata(root).with_context(|| format!("{}: cannot read root", root.display()))?;

    let walk = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    Ok(Files { walk, suffix })
}

/// Test if a file name ends with the given suffix.
///
/// The comparison is byte-wise and case-sensitive.
#[inline]
pub fn matches_suffix(name: &OsStr, suffix: &str) -> bool {
    name.as_encoded_bytes().ends_with(suffix.as_bytes())
}

/// Iterator over matching files, constructed through [`find`].
pub struct Files<'a> {
    walk: Walk,
    suffix: &'a str,
}

impl Iterator for Files<'_> {
    type Item = Result<PathBuf, ignore::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walk.next()? {
                Ok(entry) => entry,
                Err(error) => return Some(Err(error)),
            };

            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            if !matches_suffix(entry.file_name(), self.suffix) {
                continue;
            }

            return Some(Ok(entry.into_path()));
        }
    }
}
