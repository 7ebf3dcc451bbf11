//! Text measurement for the layout engine.
//!
//! The engine never inspects glyph outlines. All it needs is the advance
//! width of a string in a given font and size, which is what
//! [`FontMetrics`] provides. [`StandardFontMetrics`] answers from the
//! published AFM tables of the PDF standard fonts, so a PDF that references
//! those fonts without embedding them lays out identically in any viewer.

use preflight_style::{StandardFont, WIN_ANSI_REPLACEMENT, win_ansi_code};

/// A source of text advance widths.
pub trait FontMetrics {
    /// Width of `text` set in `font` at `size` points, in points.
    fn text_width(&self, text: &str, font: StandardFont, size: f32) -> f32;
}

impl<T: FontMetrics + ?Sized> FontMetrics for &T {
    fn text_width(&self, text: &str, font: StandardFont, size: f32) -> f32 {
        (**self).text_width(text, font, size)
    }
}

/// Advance widths in 1/1000 em, indexed by WinAnsi code.
/// `widths[i]` is the width of code `(i + 32)`, `high[i]` of code
/// `(i + 128)`; zero marks codes WinAnsi leaves undefined.
struct WidthTable {
    widths: [u16; 95],
    high: [u16; 128],
    /// Used for control and undefined codes.
    fallback: u16,
}

impl WidthTable {
    fn code_width(&self, code: u8) -> u16 {
        match code {
            32..=126 => self.widths[code as usize - 32],
            128..=255 => match self.high[code as usize - 128] {
                0 => self.fallback,
                w => w,
            },
            _ => self.fallback,
        }
    }

    /// Characters without a WinAnsi code are drawn as `?`, so they measure as one.
    fn char_width(&self, c: char) -> u16 {
        self.code_width(win_ansi_code(c).unwrap_or(WIN_ANSI_REPLACEMENT))
    }
}

static HELVETICA: WidthTable = WidthTable {
    #[rustfmt::skip]
    widths: [
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
    high: [
        // Euro      sbase florin dbase ellip dagg ddagg circ permil Scaron lsaquo OE         Zcaron
        556, 0,   222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0,   611, 0,
        //   lsquo rsquo ldquo rdquo bullet endash emdash tilde TM scaron rsaquo oe    zcaron Ydier
        0,   222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 0,   500, 667,
        // nbsp ¡   ¢    £    ¤    ¥    ¦    §    ¨    ©    ª    «    ¬    shy  ®    ¯
        278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
        // °    ±    ²    ³    ´    µ    ¶    ·    ¸    ¹    º    »    ¼    ½    ¾    ¿
        400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
        // À    Á    Â    Ã    Ä    Å    Æ    Ç    È    É    Ê    Ë    Ì    Í    Î    Ï
        667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
        // Ð    Ñ    Ò    Ó    Ô    Õ    Ö    ×    Ø    Ù    Ú    Û    Ü    Ý    Þ    ß
        722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
        // à    á    â    ã    ä    å    æ    ç    è    é    ê    ë    ì    í    î    ï
        556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
        // ð    ñ    ò    ó    ô    õ    ö    ÷    ø    ù    ú    û    ü    ý    þ    ÿ
        556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
    ],
    fallback: 556,
};

static HELVETICA_BOLD: WidthTable = WidthTable {
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
    #[rustfmt::skip]
    high: [
        // Euro      sbase florin dbase ellip dagg ddagg circ permil Scaron lsaquo OE         Zcaron
        556, 0,   278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 0,   611, 0,
        //   lsquo rsquo ldquo rdquo bullet endash emdash tilde TM scaron rsaquo oe    zcaron Ydier
        0,   278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 0,   500, 667,
        // nbsp ¡   ¢    £    ¤    ¥    ¦    §    ¨    ©    ª    «    ¬    shy  ®    ¯
        278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
        // °    ±    ²    ³    ´    µ    ¶    ·    ¸    ¹    º    »    ¼    ½    ¾    ¿
        400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
        // À    Á    Â    Ã    Ä    Å    Æ    Ç    È    É    Ê    Ë    Ì    Í    Î    Ï
        722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
        // Ð    Ñ    Ò    Ó    Ô    Õ    Ö    ×    Ø    Ù    Ú    Û    Ü    Ý    Þ    ß
        722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
        // à    á    â    ã    ä    å    æ    ç    è    é    ê    ë    ì    í    î    ï
        556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
        // ð    ñ    ò    ó    ô    õ    ö    ÷    ø    ù    ú    û    ü    ý    þ    ÿ
        611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
    ],
    fallback: 611,
};

static COURIER: WidthTable = WidthTable {
    widths: [600; 95],
    high: [600; 128],
    fallback: 600,
};

/// Metrics for the PDF standard fonts. Oblique faces share the widths of
/// their upright counterparts.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFontMetrics;

impl StandardFontMetrics {
    pub fn new() -> Self {
        Self
    }

    fn table(font: StandardFont) -> &'static WidthTable {
        match font {
            StandardFont::Helvetica | StandardFont::HelveticaOblique => &HELVETICA,
            StandardFont::HelveticaBold | StandardFont::HelveticaBoldOblique => &HELVETICA_BOLD,
            StandardFont::Courier
            | StandardFont::CourierBold
            | StandardFont::CourierOblique
            | StandardFont::CourierBoldOblique => &COURIER,
        }
    }
}

impl FontMetrics for StandardFontMetrics {
    fn text_width(&self, text: &str, font: StandardFont, size: f32) -> f32 {
        let table = Self::table(font);
        let units: u32 = text.chars().map(|c| table.char_width(c) as u32).sum();
        units as f32 * size / 1000.0
    }
}
