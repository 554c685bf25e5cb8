//! Shared test data: a real pywal cache, lowercased.

use crate::color::{Rgb, parse_hex_color};
use crate::palette::{AnsiColor, Palette, PaletteBuilder, SpecialColor};

pub(crate) const WAL_BASE: [&str; 16] = [
    "#0c1412", "#273c43", "#4f3c45", "#12515a", "#35494b", "#4b504c", "#686056", "#c1a99f",
    "#87766f", "#273c43", "#4f3c45", "#12515a", "#35494b", "#4b504c", "#686056", "#c1a99f",
];

pub(crate) fn rgb(hex: &str) -> Rgb {
    parse_hex_color(hex).expect("fixture color")
}

/// Builder with all 16 base colors and the direct special colors, but no
/// window scheme.
pub(crate) fn wal_builder() -> PaletteBuilder {
    Palette::builder()
        .base_colors(WAL_BASE.iter().map(|h| rgb(h)))
        .special(SpecialColor::Background, rgb("#0c1412"))
        .special(SpecialColor::Foreground, rgb("#c1a99f"))
        .special(SpecialColor::Cursor, rgb("#c1a99f"))
}

pub(crate) fn wal_palette() -> Palette {
    wal_builder().wal_window_scheme().build()
}

/// `wal_builder` minus color15.
pub(crate) fn fifteen_color_palette() -> Palette {
    let mut builder = Palette::builder();
    for (slot, hex) in AnsiColor::ALL.into_iter().zip(WAL_BASE).take(15) {
        builder = builder.color(slot, rgb(hex));
    }
    builder.wal_window_scheme().build()
}

pub(crate) const ST_HEADER: &str = r##"const char *colorname[] = {

  /* 8 normal colors */
  [0] = "#0c1412", /* black   */
  [1] = "#273c43", /* red     */
  [2] = "#4f3c45", /* green   */
  [3] = "#12515a", /* yellow  */
  [4] = "#35494b", /* blue    */
  [5] = "#4b504c", /* magenta */
  [6] = "#686056", /* cyan    */
  [7] = "#c1a99f", /* white   */

  /* 8 bright colors */
  [8]  = "#87766f",  /* black   */
  [9]  = "#273c43",  /* red     */
  [10] = "#4f3c45", /* green   */
  [11] = "#12515a", /* yellow  */
  [12] = "#35494b", /* blue    */
  [13] = "#4b504c", /* magenta */
  [14] = "#686056", /* cyan    */
  [15] = "#c1a99f", /* white   */

  /* special colors */
  [256] = "#0c1412", /* background */
  [257] = "#c1a99f", /* foreground */
  [258] = "#c1a99f",     /* cursor */
};

/* Default colors (colorname index)
 * foreground, background, cursor */
 unsigned int defaultbg = 0;
 unsigned int defaultfg = 257;
 unsigned int defaultcs = 258;
 unsigned int defaultrcs= 258;
"##;

pub(crate) const DWM_HEADER: &str = r##"static const char norm_fg[] = "#c1a99f";
static const char norm_bg[] = "#0c1412";
static const char norm_border[] = "#87766f";

static const char sel_fg[] = "#c1a99f";
static const char sel_bg[] = "#4f3c45";
static const char sel_border[] = "#c1a99f";

static const char urg_fg[] = "#c1a99f";
static const char urg_bg[] = "#273c43";
static const char urg_border[] = "#273c43";

static const char *colors[][3]      = {
    /*               fg           bg         border                         */
    [SchemeNorm] = { norm_fg,     norm_bg,   norm_border }, // unfocused wins
    [SchemeSel]  = { sel_fg,      sel_bg,    sel_border },  // the focused win
    [SchemeUrg] =  { urg_fg,      urg_bg,    urg_border },
};
"##;
