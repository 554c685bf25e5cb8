//! Configuration structures and loading logic.

mod io;

use io::cache_dir;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use palgen_core::{
    CaseMode, ColorRef, Palette, PaletteError, RoleColors, SchemeRole, SpecialColor, Target,
    TerminalDefaults,
};

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub colors: ColorConfig,
    pub window: WindowConfig,
    pub terminal: TerminalConfig,
}

/// Where the palette comes from and how strictly it is read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Palette file. Defaults to pywal's `colors.json` in the cache dir.
    pub path: Option<PathBuf>,
    pub format: InputFormat,
    /// Lowercase hex digits before validating. Older pywal caches contain
    /// uppercase digits, which strict validation rejects.
    pub normalize_case: bool,
}

impl InputConfig {
    pub fn effective_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| cache_dir().join("colors.json"))
    }

    pub fn case_mode(&self) -> CaseMode {
        if self.normalize_case {
            CaseMode::Normalize
        } else {
            CaseMode::Strict
        }
    }
}

/// Palette file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    /// `.toml` files are TOML palettes, anything else is pywal JSON.
    #[default]
    Auto,
    Json,
    Toml,
}

impl InputFormat {
    /// Resolve `Auto` from the file extension.
    pub fn resolve(self, path: &Path) -> Self {
        match self {
            Self::Auto => {
                let is_toml = path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
                if is_toml { Self::Toml } else { Self::Json }
            }
            explicit => explicit,
        }
    }
}

/// Output directory and which headers to write.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Defaults to the pywal cache dir.
    pub dir: Option<PathBuf>,
    pub dwm: bool,
    pub st: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: None,
            dwm: true,
            st: true,
        }
    }
}

impl OutputConfig {
    pub fn effective_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(cache_dir)
    }

    pub fn targets(&self) -> Vec<Target> {
        let mut targets = Vec::new();
        if self.dwm {
            targets.push(Target::WindowManagerScheme);
        }
        if self.st {
            targets.push(Target::TerminalPalette);
        }
        targets
    }
}

/// Special color overrides. Values are `colorN` or `#rrggbb`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub background: Option<String>,
    pub foreground: Option<String>,
    pub cursor: Option<String>,
}

/// Window-manager role overrides. Unset roles keep the source's scheme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub normal: Option<RoleConfig>,
    pub selected: Option<RoleConfig>,
    pub urgent: Option<RoleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleConfig {
    pub fg: String,
    pub bg: String,
    pub border: String,
}

impl RoleConfig {
    fn to_role_colors(&self, mode: CaseMode) -> Result<RoleColors, PaletteError> {
        Ok(RoleColors {
            fg: ColorRef::parse(&self.fg, mode)?,
            bg: ColorRef::parse(&self.bg, mode)?,
            border: ColorRef::parse(&self.border, mode)?,
        })
    }
}

/// Overrides for `st`'s default index scalars.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub default_bg: Option<usize>,
    pub default_fg: Option<usize>,
    pub default_cs: Option<usize>,
    pub default_rcs: Option<usize>,
}

impl TerminalConfig {
    fn apply(&self, base: TerminalDefaults) -> TerminalDefaults {
        TerminalDefaults {
            bg: self.default_bg.unwrap_or(base.bg),
            fg: self.default_fg.unwrap_or(base.fg),
            cs: self.default_cs.unwrap_or(base.cs),
            rcs: self.default_rcs.unwrap_or(base.rcs),
        }
    }
}

impl Config {
    /// Apply config overrides on top of a loaded palette.
    pub fn apply_overrides(&self, palette: &Palette) -> Result<Palette, PaletteError> {
        let mode = self.input.case_mode();
        let mut builder = palette.to_builder();

        let specials = [
            (SpecialColor::Background, &self.colors.background),
            (SpecialColor::Foreground, &self.colors.foreground),
            (SpecialColor::Cursor, &self.colors.cursor),
        ];
        for (which, value) in specials {
            if let Some(value) = value {
                builder = builder.special(which, ColorRef::parse(value, mode)?);
            }
        }

        let roles = [
            (SchemeRole::Normal, &self.window.normal),
            (SchemeRole::Selected, &self.window.selected),
            (SchemeRole::Urgent, &self.window.urgent),
        ];
        for (role, colors) in roles {
            if let Some(colors) = colors {
                builder = builder.role(role, colors.to_role_colors(mode)?);
            }
        }

        Ok(builder
            .defaults(self.terminal.apply(palette.defaults()))
            .build())
    }
}
