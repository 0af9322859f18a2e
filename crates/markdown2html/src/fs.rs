use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::ConvertResult;

/// Writes `content` to `path` in one go.
///
/// The document is written to a sibling temporary file which then replaces
/// `path`. If anything fails, `path` is left as it was.
pub fn write_atomic(path: &Path, content: &str) -> ConvertResult<()> {
    let tmp_path = unique_tmp_path(path);
    if let Err(err) = write_synced(&tmp_path, content) {
        remove_tmp(&tmp_path);
        return Err(err.into());
    }

    if let Err(err) = fs::rename(&tmp_path, path) {
        remove_tmp(&tmp_path);
        return Err(err.into());
    }

    log::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

fn write_synced(path: &Path, content: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}

fn remove_tmp(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => log::warn!("unable to remove {}: {err}", path.display()),
    }
}

fn unique_tmp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));

    let mut counter = 0u32;
    loop {
        let mut candidate_name = file_name.clone();
        if counter == 0 {
            candidate_name.push(".tmp");
        } else {
            candidate_name.push(format!(".tmp{counter}"));
        }

        let candidate = path.with_file_name(candidate_name);
        if !candidate.exists() {
            return candidate;
        }

        counter += 1;
    }
}
