//! Tests for header writing.

use std::fs;

use palgen_core::{AnsiColor, SchemeRole};

use super::*;

const BASE: [&str; 16] = [
    "#0c1412", "#273c43", "#4f3c45", "#12515a", "#35494b", "#4b504c", "#686056", "#c1a99f",
    "#87766f", "#273c43", "#4f3c45", "#12515a", "#35494b", "#4b504c", "#686056", "#c1a99f",
];

fn palette_with(count: usize) -> Palette {
    let mut builder = Palette::builder();
    for (slot, hex) in AnsiColor::ALL.into_iter().zip(BASE).take(count) {
        builder = builder.color_hex(slot, hex).expect("valid color");
    }
    builder.wal_window_scheme().build()
}

/// Fresh scratch directory per test.
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("palgen-{name}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn writes_both_headers() {
    let dir = scratch("both");
    let written = write_headers(&dir, &palette_with(16), &Target::ALL).expect("write");
    assert_eq!(written.len(), 2);
    assert!(written.iter().all(|w| w.changed));

    let dwm = fs::read_to_string(dir.join("colors-wal-dwm.h")).expect("dwm header");
    let st = fs::read_to_string(dir.join("colors-wal-st.h")).expect("st header");
    assert!(dwm.contains("[SchemeSel]"));
    assert!(st.contains(" unsigned int defaultfg = 257;"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn incomplete_palette_writes_nothing() {
    let dir = scratch("incomplete");
    assert!(write_headers(&dir, &palette_with(15), &Target::ALL).is_err());
    assert!(!dir.join("colors-wal-dwm.h").exists());
    assert!(!dir.join("colors-wal-st.h").exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn one_bad_target_blocks_the_other() {
    // Terminal table is fine, the scheme table is missing two roles.
    let mut builder = Palette::builder();
    for (slot, hex) in AnsiColor::ALL.into_iter().zip(BASE) {
        builder = builder.color_hex(slot, hex).expect("valid color");
    }
    let palette = builder
        .role(SchemeRole::Normal, SchemeRole::Normal.wal_default())
        .build();

    let dir = scratch("partial");
    assert!(write_headers(&dir, &palette, &Target::ALL).is_err());
    assert!(!dir.join("colors-wal-st.h").exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unchanged_headers_are_not_rewritten() {
    let dir = scratch("unchanged");
    let palette = palette_with(16);
    write_headers(&dir, &palette, &[Target::TerminalPalette]).expect("first write");
    let again = write_headers(&dir, &palette, &[Target::TerminalPalette]).expect("second write");
    assert_eq!(again.len(), 1);
    assert!(!again[0].changed);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn atomic_write_leaves_no_temp_file() {
    let dir = scratch("atomic");
    fs::create_dir_all(&dir).expect("create dir");
    let path = dir.join("colors-wal-st.h");
    write_atomic(&path, "first").expect("write");
    write_atomic(&path, "second").expect("overwrite");
    assert_eq!(fs::read_to_string(&path).expect("read"), "second");
    assert!(!tmp_path(&path).exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn temp_path_is_a_sibling() {
    let tmp = tmp_path(Path::new("/cache/wal/colors-wal-st.h"));
    assert_eq!(tmp, PathBuf::from("/cache/wal/colors-wal-st.h.tmp"));
}

#[test]
fn failed_write_leaves_no_partial_file() {
    let dir = scratch("failed-write");
    // A directory where the st header belongs makes its rename fail.
    let st = dir.join("colors-wal-st.h");
    fs::create_dir_all(&st).expect("create blocking dir");

    let err = write_headers(&dir, &palette_with(16), &[Target::TerminalPalette]).unwrap_err();
    assert!(format!("{err:#}").contains("failed to write"), "{err:#}");
    assert!(st.is_dir());
    assert!(!tmp_path(&st).exists());
    let _ = fs::remove_dir_all(&dir);
}
