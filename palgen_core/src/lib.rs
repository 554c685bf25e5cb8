//! Palette validation and color header emission.
//!
//! Turns a pywal-style palette (16 ANSI colors plus background, foreground
//! and cursor) into the two C header fragments consumed by `dwm` and `st`
//! at their own compile time. The crate is a pure in-memory transform: it
//! never touches the filesystem.

#![deny(unsafe_code)]

pub mod color;
pub mod emit;
pub mod error;
pub mod palette;
pub mod parse;
pub mod source;

#[cfg(test)]
mod fixtures;

pub use color::{CaseMode, ColorRef, Rgb, format_hex, parse_hex_color};
pub use emit::{SchemeTable, Target, TerminalTable, emit};
pub use error::{PaletteError, Result};
pub use palette::{
    AnsiColor, Palette, PaletteBuilder, RoleColors, SchemeRole, SpecialColor, TerminalDefaults,
};
