//! Read emitted headers back into tables.
//!
//! The parsers are line-format tolerant (any whitespace, C comments are
//! skipped) but value strict: every color goes through the same hex
//! validation as any other input, and every entry the table needs must be
//! present.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::color::{CaseMode, Rgb, parse_hex_color_with};
use crate::emit::{SchemeTable, TerminalTable};
use crate::error::{PaletteError, Result};
use crate::palette::{AnsiColor, Palette, RoleColors, SchemeRole, SpecialColor, TerminalDefaults};

/// `/* ... */` (possibly multi-line) and `// ...` comments.
static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)/\*.*?\*/|//[^\n]*").expect("comment regex is valid")
});

/// `[N] = "#rrggbb"` entries of `colorname[]`.
static TERMINAL_ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^\s*\[(\d+)\]\s*=\s*"([^"]*)""#).expect("entry regex is valid")
});

/// `unsigned int defaultXX = N;` scalars.
static TERMINAL_SCALAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bunsigned\s+int\s+(defaultbg|defaultfg|defaultcs|defaultrcs)\s*=\s*(\d+)\s*;")
        .expect("scalar regex is valid")
});

/// `static const char role_column[] = "#rrggbb";` declarations.
static SCHEME_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\bstatic\s+const\s+char\s+(norm|sel|urg)_(fg|bg|border)\s*\[\s*\]\s*=\s*"([^"]*)"\s*;"#,
    )
    .expect("scheme regex is valid")
});

/// Blank out comments so commented-out entries are never read.
fn strip_comments(text: &str) -> Cow<'_, str> {
    COMMENT_RE.replace_all(text, " ")
}

fn parse_index(digits: &str) -> Result<usize> {
    digits
        .parse()
        .map_err(|e| PaletteError::Source(format!("bad index {digits:?}: {e}")))
}

/// Does `text` look like an `st` `colorname[]` header?
pub fn is_terminal_header(text: &str) -> bool {
    text.contains("colorname[]")
}

/// Does `text` look like a `dwm` scheme header?
pub fn is_scheme_header(text: &str) -> bool {
    text.contains("colors[][3]")
}

/// Parse an `st` color header.
pub fn terminal_table(text: &str, mode: CaseMode) -> Result<TerminalTable> {
    let text = strip_comments(text);
    let mut entries = BTreeMap::new();
    for caps in TERMINAL_ENTRY_RE.captures_iter(&text) {
        let index = parse_index(&caps[1])?;
        let rgb = parse_hex_color_with(&caps[2], mode)?;
        if entries.insert(index, rgb).is_some() {
            debug!("parse: [{index}] defined more than once, last one wins");
        }
    }

    let mut scalars = BTreeMap::new();
    for caps in TERMINAL_SCALAR_RE.captures_iter(&text) {
        scalars.insert(caps[1].to_owned(), parse_index(&caps[2])?);
    }
    let scalar = |name: &str| {
        scalars
            .get(name)
            .copied()
            .ok_or_else(|| PaletteError::incomplete(format!("missing {name}")))
    };
    let defaults = TerminalDefaults {
        bg: scalar("defaultbg")?,
        fg: scalar("defaultfg")?,
        cs: scalar("defaultcs")?,
        rcs: scalar("defaultrcs")?,
    };

    let mut builder = Palette::builder().defaults(defaults);
    for slot in AnsiColor::ALL {
        if let Some(&rgb) = entries.get(&slot.index()) {
            builder = builder.color(slot, rgb);
        }
    }
    for which in SpecialColor::ALL {
        let rgb = entries.get(&which.index()).copied().ok_or_else(|| {
            PaletteError::incomplete(format!("missing [{}] {}", which.index(), which.name()))
        })?;
        builder = builder.special(which, rgb);
    }

    TerminalTable::from_palette(&builder.build())
}

/// Parse a `dwm` scheme header.
pub fn scheme_table(text: &str, mode: CaseMode) -> Result<SchemeTable> {
    const COLUMNS: [&str; 3] = ["fg", "bg", "border"];

    let text = strip_comments(text);
    let mut columns: BTreeMap<(SchemeRole, &'static str), Rgb> = BTreeMap::new();
    for caps in SCHEME_DECL_RE.captures_iter(&text) {
        let (Some(role), Some(column)) = (
            SchemeRole::from_prefix(&caps[1]),
            COLUMNS.into_iter().find(|c| *c == &caps[2]),
        ) else {
            continue;
        };
        columns.insert((role, column), parse_hex_color_with(&caps[3], mode)?);
    }

    let mut rows = BTreeMap::new();
    for role in SchemeRole::ALL {
        let column = |name: &'static str| {
            columns.get(&(role, name)).copied().ok_or_else(|| {
                PaletteError::incomplete(format!("missing {}_{name}", role.prefix()))
            })
        };
        rows.insert(
            role,
            RoleColors {
                fg: column("fg")?,
                bg: column("bg")?,
                border: column("border")?,
            },
        );
    }
    SchemeTable::new(&rows)
}

impl From<&TerminalTable> for Palette {
    /// Rebuild a palette from a terminal table. Specials become direct
    /// colors and the window scheme is pywal's default.
    fn from(table: &TerminalTable) -> Self {
        let mut builder = Self::builder()
            .base_colors(AnsiColor::ALL.map(|slot| table.color(slot)))
            .defaults(table.defaults());
        for which in SpecialColor::ALL {
            builder = builder.special(which, table.special(which));
        }
        builder.wal_window_scheme().build()
    }
}
