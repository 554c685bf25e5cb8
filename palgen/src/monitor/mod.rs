//! Palette file change monitor for `generate --watch`.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use log::{debug, info};
use notify::event::{AccessKind, AccessMode};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// pywal writes several cache files in quick succession.
const DEBOUNCE: Duration = Duration::from_millis(200);

type EventRx = mpsc::Receiver<notify::Result<Event>>;

/// Watches the directory holding the palette file. pywal replaces its
/// cache files rather than editing them, so the file itself cannot be
/// watched.
pub struct PaletteMonitor {
    palette_file: PathBuf,
    events: EventRx,
    _watcher: RecommendedWatcher,
}

impl PaletteMonitor {
    pub fn new(path: &Path) -> anyhow::Result<Self> {
        // Event paths are absolute.
        let palette_file = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        let parent = palette_file
            .parent()
            .filter(|dir| dir.is_dir())
            .with_context(|| format!("no directory to watch for {}", path.display()))?
            .to_path_buf();

        let (tx, events) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx).context("failed to create watcher")?;
        watcher
            .watch(&parent, RecursiveMode::NonRecursive)
            .with_context(|| format!("failed to watch {}", parent.display()))?;
        info!("monitor: watching {}", parent.display());

        Ok(Self {
            palette_file,
            events,
            _watcher: watcher,
        })
    }

    /// Block until the palette file has been written. Returns `false` once
    /// the watcher has stopped delivering events.
    pub fn wait_for_change(&self) -> bool {
        next_change(&self.palette_file, &self.events, DEBOUNCE)
    }
}

/// Wait for an event that writes `palette_file`, then swallow the rest of
/// the burst until `debounce` passes without events.
fn next_change(palette_file: &Path, events: &EventRx, debounce: Duration) -> bool {
    loop {
        let Ok(event) = events.recv() else {
            return false;
        };
        if writes_file(&event, palette_file) {
            break;
        }
    }
    while events.recv_timeout(debounce).is_ok() {}
    debug!("monitor: {} changed", palette_file.display());
    true
}

/// Does `event` create or modify `palette_file`? Reads and removals don't
/// count; regeneration itself reads the file.
fn writes_file(event: &notify::Result<Event>, palette_file: &Path) -> bool {
    let Ok(event) = event else {
        return false;
    };
    let is_write = matches!(
        event.kind,
        EventKind::Any
            | EventKind::Create(_)
            | EventKind::Modify(_)
            | EventKind::Access(AccessKind::Close(AccessMode::Write))
    );
    is_write && event.paths.iter().any(|p| p == palette_file)
}

#[cfg(test)]
mod tests;
