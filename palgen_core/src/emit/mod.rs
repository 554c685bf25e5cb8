//! Header emission.
//!
//! Emission is two steps. `TerminalTable::from_palette` and
//! `SchemeTable::from_palette` validate and resolve a palette into fully
//! concrete tables; `render()` turns a table into header text. Nothing is
//! rendered until validation has passed, so a failed emission never yields
//! partial output.
//!
//! The text layout matches pywal's `colors-wal-st.h` and
//! `colors-wal-dwm.h` templates byte for byte, lowercase hex aside.

use std::collections::BTreeMap;

use log::debug;

use crate::color::{Rgb, format_hex};
use crate::error::{PaletteError, Result};
use crate::palette::{
    AnsiColor, NUM_BASE, Palette, RoleColors, SchemeRole, SpecialColor, TerminalDefaults,
};

/// Which header to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Target {
    /// `dwm`'s `colors[][3]` scheme table.
    WindowManagerScheme,
    /// `st`'s `colorname[]` table plus default indices.
    TerminalPalette,
}

impl Target {
    pub const ALL: [Self; 2] = [Self::WindowManagerScheme, Self::TerminalPalette];

    /// File name pywal uses for this header.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::WindowManagerScheme => "colors-wal-dwm.h",
            Self::TerminalPalette => "colors-wal-st.h",
        }
    }

    /// Program that includes the header.
    pub fn consumer(self) -> &'static str {
        match self {
            Self::WindowManagerScheme => "dwm",
            Self::TerminalPalette => "st",
        }
    }
}

/// Validate `palette` and render the header for `target`.
pub fn emit(palette: &Palette, target: Target) -> Result<String> {
    let text = match target {
        Target::WindowManagerScheme => SchemeTable::from_palette(palette)?.render(),
        Target::TerminalPalette => TerminalTable::from_palette(palette)?.render(),
    };
    debug!(
        "emit: {} header, {} bytes",
        target.consumer(),
        text.len()
    );
    Ok(text)
}

/// Fully resolved `st` color table: 16 base entries, the three special
/// entries at 256..=258, and the default index scalars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalTable {
    base: [Rgb; NUM_BASE],
    specials: [Rgb; 3],
    defaults: TerminalDefaults,
}

impl TerminalTable {
    pub fn from_palette(palette: &Palette) -> Result<Self> {
        let base = palette.base_colors()?;

        let mut specials = [Rgb { r: 0, g: 0, b: 0 }; 3];
        for which in SpecialColor::ALL {
            specials[which as usize] =
                palette
                    .resolve(palette.special(which))
                    .map_err(|e| match e {
                        PaletteError::IncompletePalette { reason } => {
                            PaletteError::incomplete(format!("{}: {reason}", which.name()))
                        }
                        other => other,
                    })?;
        }

        let table = Self {
            base,
            specials,
            defaults: palette.defaults(),
        };
        for (name, index) in table.defaults.scalars() {
            if table.entry(index).is_none() {
                return Err(PaletteError::incomplete(format!(
                    "{name} = {index} does not name a populated slot"
                )));
            }
        }
        Ok(table)
    }

    pub fn color(&self, slot: AnsiColor) -> Rgb {
        self.base[slot.index()]
    }

    pub fn special(&self, which: SpecialColor) -> Rgb {
        self.specials[which as usize]
    }

    pub fn defaults(&self) -> TerminalDefaults {
        self.defaults
    }

    /// Look up a raw `colorname[]` index.
    pub fn entry(&self, index: usize) -> Option<Rgb> {
        match AnsiColor::from_index(index) {
            Some(slot) => Some(self.color(slot)),
            None => SpecialColor::from_index(index).map(|which| self.special(which)),
        }
    }

    /// All 19 populated entries as `(index, color)`, in table order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, Rgb)> + '_ {
        let base = AnsiColor::ALL
            .into_iter()
            .map(|slot| (slot.index(), self.color(slot)));
        let specials = SpecialColor::ALL
            .into_iter()
            .map(|which| (which.index(), self.special(which)));
        base.chain(specials)
    }

    pub fn render(&self) -> String {
        let mut lines = vec![
            "const char *colorname[] = {".to_owned(),
            String::new(),
            "  /* 8 normal colors */".to_owned(),
        ];
        for slot in AnsiColor::ALL {
            if slot == AnsiColor::BrightBlack {
                lines.push(String::new());
                lines.push("  /* 8 bright colors */".to_owned());
            }
            lines.push(base_line(slot, self.color(slot)));
        }

        lines.push(String::new());
        lines.push("  /* special colors */".to_owned());
        for which in SpecialColor::ALL {
            let gap = if which == SpecialColor::Cursor { "     " } else { " " };
            lines.push(format!(
                "  [{}] = \"{}\",{gap}/* {} */",
                which.index(),
                format_hex(self.special(which)),
                which.name()
            ));
        }
        lines.push("};".to_owned());

        lines.push(String::new());
        lines.push("/* Default colors (colorname index)".to_owned());
        lines.push(" * foreground, background, cursor */".to_owned());
        for (name, index) in self.defaults.scalars() {
            lines.push(format!(" unsigned int {name:<10}= {index};"));
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

fn base_line(slot: AnsiColor, rgb: Rgb) -> String {
    let index = slot.index();
    let hex = format_hex(rgb);
    let comment = format!("/* {:<8}*/", slot.hue());
    // Single-digit bright entries are padded to line up with [10]..[15].
    if slot.is_bright() && index < 10 {
        format!("  [{index}]  = \"{hex}\",  {comment}")
    } else {
        format!("  [{index}] = \"{hex}\", {comment}")
    }
}

/// Fully resolved `dwm` scheme table: every role present, every column a
/// concrete color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemeTable {
    rows: [RoleColors<Rgb>; 3],
}

impl SchemeTable {
    /// Build from resolved rows. Every role must be present.
    pub fn new(rows: &BTreeMap<SchemeRole, RoleColors<Rgb>>) -> Result<Self> {
        let found = SchemeRole::ALL.map(|role| rows.get(&role).copied());
        if let [Some(normal), Some(selected), Some(urgent)] = found {
            return Ok(Self {
                rows: [normal, selected, urgent],
            });
        }

        let missing: Vec<&str> = SchemeRole::ALL
            .into_iter()
            .zip(found)
            .filter(|(_, row)| row.is_none())
            .map(|(role, _)| role.name())
            .collect();
        Err(PaletteError::incomplete(format!(
            "window scheme missing role(s): {}",
            missing.join(", ")
        )))
    }

    pub fn from_palette(palette: &Palette) -> Result<Self> {
        palette.base_colors()?;

        let mut rows = BTreeMap::new();
        for role in SchemeRole::ALL {
            if let Some(colors) = palette.role(role) {
                rows.insert(role, colors.try_map(|c| palette.resolve(c))?);
            }
        }
        Self::new(&rows)
    }

    pub fn row(&self, role: SchemeRole) -> RoleColors<Rgb> {
        self.rows[role as usize]
    }

    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        for role in SchemeRole::ALL {
            for (column, rgb) in self.row(role).columns() {
                lines.push(format!(
                    "static const char {}_{column}[] = \"{}\";",
                    role.prefix(),
                    format_hex(rgb)
                ));
            }
            lines.push(String::new());
        }

        lines.push("static const char *colors[][3]      = {".to_owned());
        lines.push(
            "    /*               fg           bg         border                         */"
                .to_owned(),
        );
        for role in SchemeRole::ALL {
            lines.push(table_row(role));
        }
        lines.push("};".to_owned());

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

fn table_row(role: SchemeRole) -> String {
    let (sep, tail) = match role {
        SchemeRole::Normal => (" = ", " // unfocused wins"),
        SchemeRole::Selected => ("  = ", "  // the focused win"),
        SchemeRole::Urgent => (" =  ", ""),
    };
    let prefix = role.prefix();
    format!(
        "    [{}]{sep}{{ {:<13}{:<11}{prefix}_border }},{tail}",
        role.symbol(),
        format!("{prefix}_fg,"),
        format!("{prefix}_bg,"),
    )
}
