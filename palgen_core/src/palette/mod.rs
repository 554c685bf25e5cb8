//! The palette entity: 16 base colors, the three special terminal colors,
//! the window-manager scheme and the terminal default indices.
//!
//! Every table here is keyed by a closed enumeration rather than by
//! position, so a slot can only be addressed by naming it.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::color::{ColorRef, Rgb};
use crate::error::{PaletteError, Result};

/// Number of base colors (8 normal + 8 bright).
pub const NUM_BASE: usize = 16;

/// The 16 base ANSI slots, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColor {
    pub const ALL: [Self; NUM_BASE] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::BrightBlack,
        Self::BrightRed,
        Self::BrightGreen,
        Self::BrightYellow,
        Self::BrightBlue,
        Self::BrightMagenta,
        Self::BrightCyan,
        Self::BrightWhite,
    ];

    /// Table index, 0 through 15.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn is_bright(self) -> bool {
        self.index() >= 8
    }

    /// Hue name without the bright prefix, as used in header comments.
    pub fn hue(self) -> &'static str {
        match self {
            Self::Black | Self::BrightBlack => "black",
            Self::Red | Self::BrightRed => "red",
            Self::Green | Self::BrightGreen => "green",
            Self::Yellow | Self::BrightYellow => "yellow",
            Self::Blue | Self::BrightBlue => "blue",
            Self::Magenta | Self::BrightMagenta => "magenta",
            Self::Cyan | Self::BrightCyan => "cyan",
            Self::White | Self::BrightWhite => "white",
        }
    }
}

/// Terminal slots beyond the base 16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpecialColor {
    Background,
    Foreground,
    Cursor,
}

impl SpecialColor {
    pub const ALL: [Self; 3] = [Self::Background, Self::Foreground, Self::Cursor];

    /// Fixed offset in the terminal color table.
    pub fn index(self) -> usize {
        match self {
            Self::Background => 256,
            Self::Foreground => 257,
            Self::Cursor => 258,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.index() == index)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Cursor => "cursor",
        }
    }
}

/// Window-manager UI states. The symbols are what `dwm`'s build expects;
/// renaming or reordering them breaks the downstream compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SchemeRole {
    Normal,
    Selected,
    Urgent,
}

impl SchemeRole {
    pub const ALL: [Self; 3] = [Self::Normal, Self::Selected, Self::Urgent];

    /// Config-facing name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Selected => "selected",
            Self::Urgent => "urgent",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }

    /// Prefix of the per-column declarations (`norm_fg`, `sel_bg`, ...).
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Normal => "norm",
            Self::Selected => "sel",
            Self::Urgent => "urg",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.prefix() == prefix)
    }

    /// Row index symbol in the `colors[][3]` table.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Normal => "SchemeNorm",
            Self::Selected => "SchemeSel",
            Self::Urgent => "SchemeUrg",
        }
    }

    /// pywal's default mapping of roles onto base slots.
    pub fn wal_default(self) -> RoleColors {
        let (fg, bg, border) = match self {
            Self::Normal => (AnsiColor::BrightWhite, AnsiColor::Black, AnsiColor::BrightBlack),
            Self::Selected => (AnsiColor::BrightWhite, AnsiColor::Green, AnsiColor::BrightWhite),
            Self::Urgent => (AnsiColor::BrightWhite, AnsiColor::Red, AnsiColor::Red),
        };
        RoleColors {
            fg: fg.into(),
            bg: bg.into(),
            border: border.into(),
        }
    }
}

/// Foreground, background and border of one scheme role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleColors<C = ColorRef> {
    pub fg: C,
    pub bg: C,
    pub border: C,
}

impl<C: Copy> RoleColors<C> {
    /// Column names paired with their values, in table order.
    pub fn columns(self) -> [(&'static str, C); 3] {
        [("fg", self.fg), ("bg", self.bg), ("border", self.border)]
    }

    pub fn try_map<D>(self, mut f: impl FnMut(C) -> Result<D>) -> Result<RoleColors<D>> {
        Ok(RoleColors {
            fg: f(self.fg)?,
            bg: f(self.bg)?,
            border: f(self.border)?,
        })
    }
}

/// Which terminal table index `st` uses for each default color.
///
/// Deserializes from a table of indices; missing keys keep the pywal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerminalDefaults {
    pub bg: usize,
    pub fg: usize,
    pub cs: usize,
    pub rcs: usize,
}

impl Default for TerminalDefaults {
    fn default() -> Self {
        Self {
            bg: 0,
            fg: SpecialColor::Foreground.index(),
            cs: SpecialColor::Cursor.index(),
            rcs: SpecialColor::Cursor.index(),
        }
    }
}

impl TerminalDefaults {
    /// Scalar names paired with their values, in header order.
    pub fn scalars(self) -> [(&'static str, usize); 4] {
        [
            ("defaultbg", self.bg),
            ("defaultfg", self.fg),
            ("defaultcs", self.cs),
            ("defaultrcs", self.rcs),
        ]
    }
}

/// One generation run's palette. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<AnsiColor, Rgb>,
    background: ColorRef,
    foreground: ColorRef,
    cursor: ColorRef,
    window_scheme: BTreeMap<SchemeRole, RoleColors>,
    defaults: TerminalDefaults,
}

impl Palette {
    pub fn builder() -> PaletteBuilder {
        PaletteBuilder::new()
    }

    pub fn color(&self, slot: AnsiColor) -> Option<Rgb> {
        self.colors.get(&slot).copied()
    }

    /// Number of populated base slots.
    pub fn base_len(&self) -> usize {
        self.colors.len()
    }

    pub fn special(&self, which: SpecialColor) -> ColorRef {
        match which {
            SpecialColor::Background => self.background,
            SpecialColor::Foreground => self.foreground,
            SpecialColor::Cursor => self.cursor,
        }
    }

    pub fn role(&self, role: SchemeRole) -> Option<RoleColors> {
        self.window_scheme.get(&role).copied()
    }

    pub fn defaults(&self) -> TerminalDefaults {
        self.defaults
    }

    /// Resolve a reference against the base colors.
    pub fn resolve(&self, color: ColorRef) -> Result<Rgb> {
        match color {
            ColorRef::Rgb(rgb) => Ok(rgb),
            ColorRef::Slot(slot) => self.color(slot).ok_or_else(|| {
                PaletteError::incomplete(format!(
                    "color{} is referenced but not populated",
                    slot.index()
                ))
            }),
        }
    }

    /// All 16 base colors, or `IncompletePalette` naming the gaps.
    pub fn base_colors(&self) -> Result<[Rgb; NUM_BASE]> {
        let missing: Vec<String> = AnsiColor::ALL
            .into_iter()
            .filter(|slot| !self.colors.contains_key(slot))
            .map(|slot| format!("color{}", slot.index()))
            .collect();
        if !missing.is_empty() {
            return Err(PaletteError::incomplete(format!(
                "{} of {NUM_BASE} base colors supplied, missing {}",
                self.colors.len(),
                missing.join(", ")
            )));
        }

        let mut out = [Rgb { r: 0, g: 0, b: 0 }; NUM_BASE];
        for (slot, rgb) in &self.colors {
            out[slot.index()] = *rgb;
        }
        Ok(out)
    }

    /// Start a builder seeded with this palette, for applying overrides.
    pub fn to_builder(&self) -> PaletteBuilder {
        PaletteBuilder {
            colors: self.colors.clone(),
            background: Some(self.background),
            foreground: Some(self.foreground),
            cursor: Some(self.cursor),
            window_scheme: self.window_scheme.clone(),
            defaults: self.defaults,
        }
    }
}

/// Collects palette parts. Building never fails; emission validates.
#[derive(Debug, Clone, Default)]
pub struct PaletteBuilder {
    colors: BTreeMap<AnsiColor, Rgb>,
    background: Option<ColorRef>,
    foreground: Option<ColorRef>,
    cursor: Option<ColorRef>,
    window_scheme: BTreeMap<SchemeRole, RoleColors>,
    defaults: TerminalDefaults,
}

impl PaletteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, slot: AnsiColor, rgb: Rgb) -> Self {
        self.colors.insert(slot, rgb);
        self
    }

    /// Set a base color from a strict `#rrggbb` string.
    pub fn color_hex(self, slot: AnsiColor, hex: &str) -> Result<Self> {
        Ok(self.color(slot, crate::color::parse_hex_color(hex)?))
    }

    /// Fill base slots in order starting at color0. Values past the
    /// sixteenth are ignored.
    pub fn base_colors(mut self, colors: impl IntoIterator<Item = Rgb>) -> Self {
        for (slot, rgb) in AnsiColor::ALL.into_iter().zip(colors) {
            self.colors.insert(slot, rgb);
        }
        self
    }

    pub fn special(mut self, which: SpecialColor, color: impl Into<ColorRef>) -> Self {
        let color = Some(color.into());
        match which {
            SpecialColor::Background => self.background = color,
            SpecialColor::Foreground => self.foreground = color,
            SpecialColor::Cursor => self.cursor = color,
        }
        self
    }

    pub fn role(mut self, role: SchemeRole, colors: RoleColors) -> Self {
        self.window_scheme.insert(role, colors);
        self
    }

    /// Fill every role not yet set with pywal's default.
    pub fn wal_window_scheme(mut self) -> Self {
        for role in SchemeRole::ALL {
            self.window_scheme
                .entry(role)
                .or_insert_with(|| role.wal_default());
        }
        self
    }

    pub fn defaults(mut self, defaults: TerminalDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Unset specials follow pywal: background is color0, foreground and
    /// cursor are color15.
    pub fn build(self) -> Palette {
        Palette {
            colors: self.colors,
            background: self
                .background
                .unwrap_or(ColorRef::Slot(AnsiColor::Black)),
            foreground: self
                .foreground
                .unwrap_or(ColorRef::Slot(AnsiColor::BrightWhite)),
            cursor: self.cursor.unwrap_or(ColorRef::Slot(AnsiColor::BrightWhite)),
            window_scheme: self.window_scheme,
            defaults: self.defaults,
        }
    }
}
