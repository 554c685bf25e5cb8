//! Header file writing.
//!
//! Every requested header is rendered before any file is touched, so a
//! palette that cannot produce one target writes no target at all. Each
//! file is replaced through a temp file plus rename and is never left
//! half written. An I/O failure on a later file does not roll back the
//! files already replaced.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;

use palgen_core::{Palette, Target, emit};

/// A header that was written, or left alone because it was current.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub path: PathBuf,
    pub changed: bool,
}

/// Render `targets` from `palette` and write them into `dir`.
pub fn write_headers(
    dir: &Path,
    palette: &Palette,
    targets: &[Target],
) -> anyhow::Result<Vec<Written>> {
    let mut rendered = Vec::with_capacity(targets.len());
    for &target in targets {
        let text = emit(palette, target)
            .with_context(|| format!("cannot emit {} header", target.consumer()))?;
        rendered.push((target, text));
    }

    fs::create_dir_all(dir).with_context(|| format!("failed to create dir {}", dir.display()))?;

    let mut written = Vec::with_capacity(rendered.len());
    for (target, text) in rendered {
        let path = dir.join(target.file_name());
        // Leave current files alone so their mtime does not trigger rebuilds.
        let changed = !fs::read_to_string(&path).is_ok_and(|old| old == text);
        if changed {
            write_atomic(&path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
        } else {
            debug!("output: {} unchanged", path.display());
        }
        written.push(Written { path, changed });
    }
    Ok(written)
}

/// Write `contents` to `path` via a sibling temp file and a rename.
pub fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    let tmp = tmp_path(path);
    let result = fs::write(&tmp, contents).and_then(|()| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests;
