//! Static glyph-width tables for the two standard PDF fonts the renderer draws with.
//!
//! Widths are the Adobe AFM advance widths in 1/1000 em for the standard-14
//! Helvetica faces, so measurements match what a PDF viewer actually draws.
//! Tables are indexed by WinAnsi byte: printable ASCII 0x20..=0x7E and the
//! upper half 0x80..=0xFF. A character is measured as the glyph
//! `encoding::win_ansi_byte` will emit for it, so unmappable text is measured
//! as `?`.

use crate::layout::encoding::win_ansi_byte;

// ────────────────────────────────────────────────────────────────────────────
// Font face enum
// ────────────────────────────────────────────────────────────────────────────

/// The standard-14 faces used for generated documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    /// Body text and subtitle.
    Helvetica,
    /// Document title.
    HelveticaBold,
}

impl FontFace {
    /// PostScript name written into the PDF font dictionary.
    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::Helvetica => "Helvetica",
            FontFace::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Key under which the font is registered in a page's resource dictionary.
    pub fn resource_name(self) -> &'static str {
        match self {
            FontFace::Helvetica => "F1",
            FontFace::HelveticaBold => "F2",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Static character-width table for a font face.
///
/// `ascii[i]` = advance width of byte `(i + 0x20)`, `upper[i]` = advance width
/// of byte `(i + 0x80)`, both in 1/1000 em. Slots WinAnsi leaves undefined
/// (0x81, 0x8D, 0x8F, 0x90, 0x9D) are never emitted and hold 0.
pub struct FontMetricTable {
    pub face: FontFace,
    ascii: [u16; 95],
    upper: [u16; 128],
}

impl FontMetricTable {
    /// Width in 1/1000 em of the glyph drawn for `c`.
    pub fn char_units(&self, c: char) -> u16 {
        self.byte_units(win_ansi_byte(c))
    }

    fn byte_units(&self, byte: u8) -> u16 {
        match byte {
            0x20..=0x7E => self.ascii[(byte - 0x20) as usize],
            0x80..=0xFF => self.upper[(byte - 0x80) as usize],
            _ => self.ascii[(b'?' - 0x20) as usize],
        }
    }

    /// Measures the rendered width of a string in points at `size_pt`.
    pub fn measure_str(&self, s: &str, size_pt: f32) -> f32 {
        let units: u32 = s.chars().map(|c| self.char_units(c) as u32).sum();
        units as f32 * size_pt / 1000.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    face: FontFace::Helvetica,
    #[rustfmt::skip]
    ascii: [
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
    ],
    #[rustfmt::skip]
    upper: [
        // €    -    ‚    ƒ    „    …     †    ‡    ˆ    ‰     Š    ‹    Œ     -    Ž    -
        556,   0, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000,   0, 611,   0,
        // -    '    '    "    "    •    –    —     ˜    ™     š    ›    œ    -    ž    Ÿ
          0, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944,   0, 500, 667,
        // nbsp ¡    ¢    £    ¤    ¥    ¦    §    ¨    ©    ª    «    ¬    shy  ®    ¯
        278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
        // °    ±    ²    ³    ´    µ    ¶    ·    ¸    ¹    º    »    ¼    ½    ¾    ¿
        400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
        // À    Á    Â    Ã    Ä    Å    Æ     Ç    È    É    Ê    Ë    Ì    Í    Î    Ï
        667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
        // Ð    Ñ    Ò    Ó    Ô    Õ    Ö    ×    Ø    Ù    Ú    Û    Ü    Ý    Þ    ß
        722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
        // à    á    â    ã    ä    å    æ    ç    è    é    ê    ë    ì    í    î    ï
        556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
        // ð    ñ    ò    ó    ô    õ    ö    ÷    ø    ù    ú    û    ü    ý    þ    ÿ
        556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
    ],
};

static HELVETICA_BOLD_TABLE: FontMetricTable = FontMetricTable {
    face: FontFace::HelveticaBold,
    #[rustfmt::skip]
    ascii: [
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
    #[rustfmt::skip]
    upper: [
        // €    -    ‚    ƒ    „    …     †    ‡    ˆ    ‰     Š    ‹    Œ     -    Ž    -
        556,   0, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000,   0, 611,   0,
        // -    '    '    "    "    •    –    —     ˜    ™     š    ›    œ    -    ž    Ÿ
          0, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944,   0, 500, 667,
        // nbsp ¡    ¢    £    ¤    ¥    ¦    §    ¨    ©    ª    «    ¬    shy  ®    ¯
        278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
        // °    ±    ²    ³    ´    µ    ¶    ·    ¸    ¹    º    »    ¼    ½    ¾    ¿
        400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
        // À    Á    Â    Ã    Ä    Å    Æ     Ç    È    É    Ê    Ë    Ì    Í    Î    Ï
        722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
        // Ð    Ñ    Ò    Ó    Ô    Õ    Ö    ×    Ø    Ù    Ú    Û    Ü    Ý    Þ    ß
        722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
        // à    á    â    ã    ä    å    æ    ç    è    é    ê    ë    ì    í    î    ï
        556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
        // ð    ñ    ò    ó    ô    õ    ö    ÷    ø    ù    ú    û    ü    ý    þ    ÿ
        611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
    ],
};

/// Returns the static metric table for a given face.
pub fn get_metrics(face: FontFace) -> &'static FontMetricTable {
    match face {
        FontFace::Helvetica => &HELVETICA_TABLE,
        FontFace::HelveticaBold => &HELVETICA_BOLD_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_str_empty_returns_zero() {
        let metrics = get_metrics(FontFace::Helvetica);
        assert_eq!(metrics.measure_str("", 11.0), 0.0);
    }

    #[test]
    fn test_measure_str_single_space() {
        let metrics = get_metrics(FontFace::Helvetica);
        let width = metrics.measure_str(" ", 10.0);
        assert!((width - 2.78).abs() < 1e-4, "space width should be 2.78pt, got {width}");
    }

    #[test]
    fn test_measure_str_ascii_characters() {
        let metrics = get_metrics(FontFace::Helvetica);
        // "Rust" = R(722) + u(556) + s(500) + t(278) = 2056 units → 22.616pt at 11pt
        let width = metrics.measure_str("Rust", 11.0);
        assert!((width - 22.616).abs() < 1e-3, "Rust width should be ~22.616, got {width}");
    }

    #[test]
    fn test_typographic_glyphs_use_their_own_widths() {
        let metrics = get_metrics(FontFace::Helvetica);
        assert_eq!(metrics.char_units('\u{2014}'), 1000); // em dash
        assert_eq!(metrics.char_units('\u{2026}'), 1000); // ellipsis
        assert_eq!(metrics.char_units('\u{2122}'), 1000); // trademark
        assert_eq!(metrics.char_units('\u{2022}'), 350); // bullet
        assert_eq!(metrics.char_units('\u{2019}'), 222);
        assert_eq!(metrics.char_units('é'), 556);
        assert_eq!(metrics.char_units('Æ'), 1000);

        let bold = get_metrics(FontFace::HelveticaBold);
        assert_eq!(bold.char_units('\u{201C}'), 500);
        assert_eq!(bold.char_units('ü'), 611);
    }

    #[test]
    fn test_unmappable_characters_measure_as_question_mark() {
        let metrics = get_metrics(FontFace::Helvetica);
        let question = metrics.char_units('?');
        assert_eq!(metrics.char_units('日'), question);
        assert_eq!(metrics.char_units('\u{1F680}'), question);
        assert_eq!(metrics.char_units('\u{0007}'), question);
    }

    #[test]
    fn test_every_emitted_byte_has_a_width() {
        for face in [FontFace::Helvetica, FontFace::HelveticaBold] {
            let metrics = get_metrics(face);
            for code in (0x20u32..=0x7E).chain(0xA0..=0xFF) {
                let c = char::from_u32(code).unwrap();
                assert!(metrics.char_units(c) > 0, "{face:?} has no width for {c:?}");
            }
            for c in "€‚ƒ„…†‡ˆ‰Š‹ŒŽ\u{2018}\u{2019}\u{201C}\u{201D}•–—˜™š›œžŸ".chars() {
                assert!(metrics.char_units(c) > 0, "{face:?} has no width for {c:?}");
            }
        }
    }

    #[test]
    fn test_measure_scales_linearly_with_size() {
        let metrics = get_metrics(FontFace::Helvetica);
        let small = metrics.measure_str("Interview", 10.0);
        let large = metrics.measure_str("Interview", 20.0);
        assert!((large - 2.0 * small).abs() < 1e-3);
    }

    #[test]
    fn test_bold_is_wider_than_regular() {
        let text = "Interview Preparation Guide";
        let regular = get_metrics(FontFace::Helvetica).measure_str(text, 16.0);
        let bold = get_metrics(FontFace::HelveticaBold).measure_str(text, 16.0);
        assert!(bold > regular, "bold {bold} should exceed regular {regular}");
    }

    #[test]
    fn test_narrow_glyphs_narrower_than_wide_glyphs() {
        let metrics = get_metrics(FontFace::Helvetica);
        assert!(metrics.measure_str("iiiiiiiiii", 11.0) < metrics.measure_str("WWWWWWWWWW", 11.0));
    }

    #[test]
    fn test_faces_have_distinct_resource_names() {
        assert_ne!(
            FontFace::Helvetica.resource_name(),
            FontFace::HelveticaBold.resource_name()
        );
        assert_eq!(FontFace::HelveticaBold.base_font(), "Helvetica-Bold");
    }
}
