//! Output file naming
//!
//! Reports are written as `<entity>_RibbonButtons.<ext>`. When that file
//! exists, `_1`, `_2`, ... is appended to the stem until a free name is found.
//! Files are created with `create_new`, so an existing report is never
//! truncated even if it appears while candidates are being tried.

use crate::error::{Error, Result};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Stem shared by all report files
pub const REPORT_STEM: &str = "RibbonButtons";

/// Upper bound on numbered candidates tried before giving up
const MAX_SUFFIX: u32 = 10_000;

/// Candidate report paths under `dir`, unsuffixed first
fn candidate_paths<'a>(
    dir: &'a Path,
    entity: &'a str,
    extension: &'a str,
) -> impl Iterator<Item = PathBuf> + 'a {
    let base = std::iter::once(dir.join(format!("{}_{}.{}", entity, REPORT_STEM, extension)));
    let numbered = (1..=MAX_SUFFIX)
        .map(move |n| dir.join(format!("{}_{}_{}.{}", entity, REPORT_STEM, n, extension)));
    base.chain(numbered)
}

/// Create the first report file under `dir` whose name is not taken yet
///
/// Returns the chosen path together with the newly created, empty file.
pub fn create_report_file(dir: &Path, entity: &str, extension: &str) -> Result<(PathBuf, File)> {
    for candidate in candidate_paths(dir, entity, extension) {
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(file) => return Ok((candidate, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(e.into()),
        }
    }

    let base = dir.join(format!("{}_{}.{}", entity, REPORT_STEM, extension));
    Err(Error::OutputExhausted(base.display().to_string()))
}

/// Title shown at the top of a report for `entity`
pub fn report_title(entity: &str) -> String {
    format!("{} Ribbon Buttons", entity)
}
