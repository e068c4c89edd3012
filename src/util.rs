use crate::error::{AppResult, InfraError};
use crate::hardening::{ALLOW_SYMLINKS, MAX_FILE_BYTES, MAX_FILES_PER_IMPORT, MAX_TOTAL_BYTES};
use std::fs;
use std::path::{Path, PathBuf};

/// Attaches the failing operation and path to an I/O error.
pub fn io_at(op: &'static str, path: &Path) -> impl FnOnce(std::io::Error) -> InfraError {
    let path = path.to_path_buf();
    move |source| InfraError::Read { op, path, source }
}

fn rejected(path: &Path, reason: impl Into<String>) -> InfraError {
    InfraError::ContentPath {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// Resolves the directory to load from: `base` itself, or a single-name
/// subdirectory of it that must not escape `base`.
pub fn resolve_content_dir(base: &Path, subdir: Option<&str>) -> AppResult<PathBuf> {
    let base_can = base.canonicalize().map_err(io_at("canonicalizing", base))?;
    if !base_can.is_dir() {
        return Err(rejected(&base_can, "not a directory").into());
    }

    let Some(subdir) = subdir else {
        return Ok(base_can);
    };

    if subdir.is_empty() || subdir == "." || subdir == ".." {
        return Err(rejected(base, format!("invalid subdir '{subdir}'")).into());
    }
    if subdir.contains('/') || subdir.contains('\\') {
        return Err(rejected(base, "subdir must be a single name").into());
    }

    let joined = base_can.join(subdir);

    // Avoid following symlinks for the subdir itself when ALLOW_SYMLINKS = false
    if !ALLOW_SYMLINKS && fs::symlink_metadata(&joined).map_err(io_at("stat", &joined))?.file_type().is_symlink() {
        return Err(rejected(&joined, "subdir is a symlink").into());
    }

    let target_can = joined.canonicalize().map_err(io_at("canonicalizing", &joined))?;
    if !target_can.starts_with(&base_can) {
        return Err(rejected(&joined, "path escapes content base").into());
    }
    if !target_can.is_dir() {
        return Err(rejected(&target_can, "not a directory").into());
    }

    Ok(target_can)
}

pub fn list_yaml_files_guarded(dir: &Path) -> AppResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut total = 0usize;

    for e in fs::read_dir(dir).map_err(io_at("read_dir", dir))? {
        let p = e.map_err(io_at("read_dir", dir))?.path();
        if !ALLOW_SYMLINKS && fs::symlink_metadata(&p).map_err(io_at("stat", &p))?.file_type().is_symlink() {
            continue;
        }
        if !p.is_file() {
            continue;
        }
        let name = p.file_name().and_then(|s| s.to_str()).unwrap_or("");
        if !(name.ends_with(".yml") || name.ends_with(".yaml")) {
            continue;
        }

        let len = usize::try_from(fs::metadata(&p).map_err(io_at("stat", &p))?.len()).unwrap_or(usize::MAX);
        if len > MAX_FILE_BYTES {
            return Err(rejected(&p, format!("file too large ({len} bytes)")).into());
        }
        total = total.saturating_add(len);
        if total > MAX_TOTAL_BYTES {
            return Err(rejected(dir, "content exceeds total size limit").into());
        }

        files.push(p);
        if files.len() > MAX_FILES_PER_IMPORT {
            return Err(rejected(dir, format!("too many files (> {MAX_FILES_PER_IMPORT})")).into());
        }
    }
    files.sort();
    Ok(files)
}
