//! Tests for palette change detection.

use notify::event::{CreateKind, DataChange, ModifyKind, RemoveKind};

use super::*;

const PALETTE: &str = "/home/user/.cache/wal/colors.json";

fn event(kind: EventKind, path: &str) -> notify::Result<Event> {
    Ok(Event::new(kind).add_path(PathBuf::from(path)))
}

fn modified(path: &str) -> notify::Result<Event> {
    event(EventKind::Modify(ModifyKind::Data(DataChange::Content)), path)
}

#[test]
fn write_to_palette_counts() {
    let file = Path::new(PALETTE);
    assert!(writes_file(&modified(PALETTE), file));
    assert!(writes_file(&event(EventKind::Create(CreateKind::File), PALETTE), file));
    assert!(writes_file(
        &event(EventKind::Access(AccessKind::Close(AccessMode::Write)), PALETTE),
        file
    ));
}

#[test]
fn other_files_in_cache_dir_are_ignored() {
    let file = Path::new(PALETTE);
    assert!(!writes_file(&modified("/home/user/.cache/wal/colors-wal-st.h"), file));
    assert!(!writes_file(&modified("/home/user/.cache/wal/colors.json.tmp"), file));
}

#[test]
fn reads_and_removals_are_ignored() {
    let file = Path::new(PALETTE);
    assert!(!writes_file(&event(EventKind::Access(AccessKind::Read), PALETTE), file));
    assert!(!writes_file(
        &event(EventKind::Access(AccessKind::Close(AccessMode::Read)), PALETTE),
        file
    ));
    assert!(!writes_file(&event(EventKind::Remove(RemoveKind::File), PALETTE), file));
    assert!(!writes_file(&Err(notify::Error::generic("boom")), file));
}

#[test]
fn burst_of_writes_signals_once() {
    let (tx, rx) = mpsc::channel();
    tx.send(modified("/home/user/.cache/wal/colors-wal-dwm.h")).expect("send");
    for _ in 0..3 {
        tx.send(modified(PALETTE)).expect("send");
    }

    assert!(next_change(Path::new(PALETTE), &rx, Duration::from_millis(10)));
    assert!(rx.try_recv().is_err(), "burst should be drained");
    drop(tx);
    assert!(!next_change(Path::new(PALETTE), &rx, Duration::from_millis(10)));
}

#[test]
fn closed_channel_without_palette_write_stops() {
    let (tx, rx) = mpsc::channel();
    tx.send(modified("/home/user/.cache/wal/sequences")).expect("send");
    drop(tx);
    assert!(!next_change(Path::new(PALETTE), &rx, Duration::from_millis(10)));
}

#[test]
fn missing_directory_is_an_error() {
    let missing = std::env::temp_dir()
        .join(format!("palgen-no-such-dir-{}", std::process::id()))
        .join("colors.json");
    assert!(PaletteMonitor::new(&missing).is_err());
}
