//! Palette sources: pywal's `colors.json` and a TOML palette document.

use std::collections::BTreeMap;

use log::debug;
use serde::Deserialize;

use crate::color::{CaseMode, ColorRef, parse_hex_color_with};
use crate::error::{PaletteError, Result};
use crate::palette::{
    AnsiColor, NUM_BASE, Palette, PaletteBuilder, RoleColors, SchemeRole, SpecialColor,
    TerminalDefaults,
};

/// pywal's `colors.json`. Unknown keys (`wallpaper`, `alpha`) are ignored.
#[derive(Debug, Deserialize)]
struct WalColors {
    special: WalSpecial,
    colors: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct WalSpecial {
    background: String,
    foreground: String,
    cursor: String,
}

/// Load pywal's `colors.json`.
///
/// Background, foreground and cursor become direct colors; the window
/// scheme is pywal's default. Missing `colorN` keys leave gaps that
/// emission reports as `IncompletePalette`.
pub fn from_wal_json(text: &str, mode: CaseMode) -> Result<Palette> {
    let wal: WalColors =
        serde_json::from_str(text).map_err(|e| PaletteError::Source(format!("json: {e}")))?;

    let mut builder = Palette::builder();
    for slot in AnsiColor::ALL {
        let key = format!("color{}", slot.index());
        match wal.colors.get(&key) {
            Some(hex) => builder = builder.color(slot, parse_hex_color_with(hex, mode)?),
            None => debug!("source: colors.json has no {key}"),
        }
    }

    let specials = [
        (SpecialColor::Background, &wal.special.background),
        (SpecialColor::Foreground, &wal.special.foreground),
        (SpecialColor::Cursor, &wal.special.cursor),
    ];
    for (which, hex) in specials {
        builder = builder.special(which, parse_hex_color_with(hex, mode)?);
    }

    Ok(builder.wal_window_scheme().build())
}

/// TOML palette document.
///
/// ```toml
/// colors = ["#0c1412", "#273c43", ...]   # exactly 16
/// background = "color0"                  # colorN or #rrggbb
/// foreground = "#c1a99f"
///
/// [window.normal]
/// fg = "color15"
/// bg = "color0"
/// border = "color8"
///
/// [defaults]
/// fg = 257
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlPalette {
    #[serde(default)]
    colors: Vec<String>,
    background: Option<String>,
    foreground: Option<String>,
    cursor: Option<String>,
    window: Option<BTreeMap<String, TomlRole>>,
    #[serde(default)]
    defaults: TerminalDefaults,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlRole {
    fg: String,
    bg: String,
    border: String,
}

/// Load a TOML palette.
///
/// Without a `[window]` table the pywal scheme is used. With one, it must
/// define every role itself; emission reports any role left out.
pub fn from_toml(text: &str, mode: CaseMode) -> Result<Palette> {
    let doc: TomlPalette =
        toml::from_str(text).map_err(|e| PaletteError::Source(format!("toml: {e}")))?;

    if doc.colors.len() > NUM_BASE {
        return Err(PaletteError::Source(format!(
            "{} base colors given, expected {NUM_BASE}",
            doc.colors.len()
        )));
    }

    let mut builder = Palette::builder();
    for (slot, hex) in AnsiColor::ALL.into_iter().zip(&doc.colors) {
        builder = builder.color(slot, parse_hex_color_with(hex, mode)?);
    }

    let specials = [
        (SpecialColor::Background, &doc.background),
        (SpecialColor::Foreground, &doc.foreground),
        (SpecialColor::Cursor, &doc.cursor),
    ];
    for (which, value) in specials {
        if let Some(value) = value {
            builder = builder.special(which, ColorRef::parse(value, mode)?);
        }
    }

    builder = match &doc.window {
        Some(roles) => apply_roles(builder, roles, mode)?,
        None => builder.wal_window_scheme(),
    };

    Ok(builder.defaults(doc.defaults).build())
}

fn apply_roles(
    mut builder: PaletteBuilder,
    roles: &BTreeMap<String, TomlRole>,
    mode: CaseMode,
) -> Result<PaletteBuilder> {
    for (name, role) in roles {
        let which = SchemeRole::from_name(name).ok_or_else(|| {
            PaletteError::Source(format!(
                "unknown window role {name:?} (expected normal, selected or urgent)"
            ))
        })?;
        builder = builder.role(which, role_colors(role, mode)?);
    }
    Ok(builder)
}

fn role_colors(role: &TomlRole, mode: CaseMode) -> Result<RoleColors> {
    Ok(RoleColors {
        fg: ColorRef::parse(&role.fg, mode)?,
        bg: ColorRef::parse(&role.bg, mode)?,
        border: ColorRef::parse(&role.border, mode)?,
    })
}
