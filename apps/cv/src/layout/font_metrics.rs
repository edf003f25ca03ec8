//! Static font-metric tables for the PDF standard fonts used by the CV templates.
//!
//! Widths come from the Adobe AFM files for the standard 14 fonts, in 1/1000 em.
//! Because the generated PDFs reference these fonts without embedding them, every
//! conforming viewer lays the glyphs out with exactly these advances, so the
//! measurements here match what is drawn.
//!
//! Tables cover ASCII 0x20..=0x7E (95 printable characters), index = `(c as usize) - 32`.
//! A short list of WinAnsi extras (bullets, dashes, quotes) is measured individually;
//! anything else falls back to `fallback_width`.

use serde::Serialize;

/// Millimetres per PostScript point.
pub const PT_TO_MM: f32 = 25.4 / 72.0;

// ────────────────────────────────────────────────────────────────────────────
// Font enum
// ────────────────────────────────────────────────────────────────────────────

/// The standard Type1 faces the templates draw with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    Courier,
    CourierBold,
}

impl StandardFont {
    pub const ALL: [StandardFont; 5] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::HelveticaOblique,
        StandardFont::Courier,
        StandardFont::CourierBold,
    ];

    /// PostScript name written into the font dictionary.
    pub fn base_font(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
        }
    }

    /// Resource name used in page content streams.
    pub fn resource_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "F1",
            StandardFont::HelveticaBold => "F2",
            StandardFont::HelveticaOblique => "F3",
            StandardFont::Courier => "F4",
            StandardFont::CourierBold => "F5",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for one standard font.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    pub font: StandardFont,
    widths: [u16; 95],
    specials: &'static [(char, u16)],
    /// Width for characters outside the table and the specials list.
    pub fallback_width: u16,
}

impl FontMetricTable {
    /// Advance width of one character in 1/1000 em.
    pub fn char_width(&self, c: char) -> u16 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            return self.widths[code - 32];
        }
        self.specials
            .iter()
            .find(|(sc, _)| *sc == c)
            .map(|(_, w)| *w)
            .unwrap_or(self.fallback_width)
    }

    /// Rendered width of a string in em units.
    pub fn measure_em(&self, s: &str) -> f32 {
        s.chars().map(|c| self.char_width(c) as u32).sum::<u32>() as f32 / 1000.0
    }

    /// Rendered width of a string in millimetres at `size_pt`.
    pub fn measure_mm(&self, s: &str, size_pt: f32) -> f32 {
        self.measure_em(s) * size_pt * PT_TO_MM
    }
}

/// Rendered width of `text` in millimetres, set in `font` at `size_pt`.
pub fn measure_mm(font: StandardFont, size_pt: f32, text: &str) -> f32 {
    get_metrics(font).measure_mm(text, size_pt)
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_SPECIALS: &[(char, u16)] = &[
    ('•', 350),
    ('–', 556),
    ('—', 1000),
    ('·', 278),
    ('‘', 222),
    ('’', 222),
    ('“', 333),
    ('”', 333),
    ('…', 1000),
    ('€', 556),
    ('™', 1000),
    ('\u{a0}', 278),
];

static HELVETICA_BOLD_SPECIALS: &[(char, u16)] = &[
    ('•', 350),
    ('–', 556),
    ('—', 1000),
    ('·', 278),
    ('‘', 278),
    ('’', 278),
    ('“', 500),
    ('”', 500),
    ('…', 1000),
    ('€', 556),
    ('™', 1000),
    ('\u{a0}', 278),
];

/// Helvetica (also used for Helvetica-Oblique, which shares its advances).
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0    1    2    3    4    5    6    7    8    9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    278, 278, 584, 584, 584, 556, 1015,
    // A    B    C    D    E    F    G    H    I    J    K    L    M
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    278, 278, 278, 469, 556, 333,
    // a    b    c    d    e    f    g    h    i    j    k    l    m
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    // n    o    p    q    r    s    t    u    v    w    x    y    z
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // {    |    }    ~
    334, 260, 334, 584,
];

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    font: StandardFont::Helvetica,
    widths: HELVETICA_WIDTHS,
    specials: HELVETICA_SPECIALS,
    fallback_width: 556,
};

static HELVETICA_OBLIQUE_TABLE: FontMetricTable = FontMetricTable {
    font: StandardFont::HelveticaOblique,
    widths: HELVETICA_WIDTHS,
    specials: HELVETICA_SPECIALS,
    fallback_width: 556,
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    font: StandardFont::HelveticaBold,
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        333, 333, 584, 584, 584, 611, 975,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 584, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        // {    |    }    ~
        389, 280, 389, 584,
    ],
    specials: HELVETICA_BOLD_SPECIALS,
    fallback_width: 611,
};

static MONOSPACE_SPECIALS: &[(char, u16)] = &[];

/// Courier: every glyph advances 600 units.
static COURIER_TABLE: FontMetricTable = FontMetricTable {
    font: StandardFont::Courier,
    widths: [600; 95],
    specials: MONOSPACE_SPECIALS,
    fallback_width: 600,
};

static COURIER_BOLD_TABLE: FontMetricTable = FontMetricTable {
    font: StandardFont::CourierBold,
    widths: [600; 95],
    specials: MONOSPACE_SPECIALS,
    fallback_width: 600,
};

/// Returns the static metric table for a font.
pub fn get_metrics(font: StandardFont) -> &'static FontMetricTable {
    match font {
        StandardFont::Helvetica => &HELVETICA_TABLE,
        StandardFont::HelveticaBold => &HELVETICA_BOLD_TABLE,
        StandardFont::HelveticaOblique => &HELVETICA_OBLIQUE_TABLE,
        StandardFont::Courier => &COURIER_TABLE,
        StandardFont::CourierBold => &COURIER_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// WinAnsi encoding
// ────────────────────────────────────────────────────────────────────────────

/// Maps a character to its WinAnsiEncoding byte, if the encoding has it.
pub fn win_ansi_byte(c: char) -> Option<u8> {
    let code = c as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        _ => match c {
            '€' => Some(0x80),
            '…' => Some(0x85),
            '‘' => Some(0x91),
            '’' => Some(0x92),
            '“' => Some(0x93),
            '”' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '™' => Some(0x99),
            _ => None,
        },
    }
}

/// Encodes a string for a WinAnsi simple font. Unmappable characters become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| win_ansi_byte(c).unwrap_or(b'?'))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_empty_returns_zero() {
        assert_eq!(measure_mm(StandardFont::Helvetica, 10.0, ""), 0.0);
    }

    #[test]
    fn test_measure_em_ascii_characters() {
        // "Rust" = R(722) + u(556) + s(500) + t(278) = 2056
        let width = get_metrics(StandardFont::Helvetica).measure_em("Rust");
        assert!((width - 2.056).abs() < 1e-4, "got {width}");
    }

    #[test]
    fn test_measure_mm_scales_with_size() {
        // One em of Courier "MMMMM" (5 × 0.6 = 3.0 em) at 12pt = 36pt = 12.7mm
        let width = measure_mm(StandardFont::Courier, 12.0, "MMMMM");
        assert!((width - 12.7).abs() < 1e-3, "got {width}");
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let text = "Jetpack Compose";
        assert!(
            measure_mm(StandardFont::HelveticaBold, 8.0, text)
                > measure_mm(StandardFont::Helvetica, 8.0, text)
        );
    }

    #[test]
    fn test_oblique_shares_regular_advances() {
        let text = "Self-Employed";
        assert_eq!(
            measure_mm(StandardFont::HelveticaOblique, 7.5, text),
            measure_mm(StandardFont::Helvetica, 7.5, text)
        );
    }

    #[test]
    fn test_courier_is_monospaced() {
        assert_eq!(
            measure_mm(StandardFont::Courier, 6.0, "iiii"),
            measure_mm(StandardFont::Courier, 6.0, "WWWW")
        );
    }

    #[test]
    fn test_special_characters_use_afm_widths() {
        let metrics = get_metrics(StandardFont::Helvetica);
        assert_eq!(metrics.char_width('•'), 350);
        assert_eq!(metrics.char_width('—'), 1000);
        assert_eq!(metrics.char_width('·'), 278);
    }

    #[test]
    fn test_unknown_character_falls_back() {
        let metrics = get_metrics(StandardFont::Helvetica);
        assert_eq!(metrics.char_width('☃'), metrics.fallback_width);
    }

    #[test]
    fn test_win_ansi_encoding() {
        assert_eq!(encode_win_ansi("A·B"), vec![b'A', 0xB7, b'B']);
        assert_eq!(encode_win_ansi("• – —"), vec![0x95, b' ', 0x96, b' ', 0x97]);
        assert_eq!(encode_win_ansi("é"), vec![0xE9]);
        assert_eq!(encode_win_ansi("☃"), vec![b'?']);
    }

    #[test]
    fn test_resource_names_are_unique() {
        let mut names: Vec<&str> = StandardFont::ALL.iter().map(|f| f.resource_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), StandardFont::ALL.len());
    }
}
