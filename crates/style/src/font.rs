use encoding_rs::WINDOWS_1252;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Byte drawn in place of characters the standard fonts cannot show.
pub const WIN_ANSI_REPLACEMENT: u8 = b'?';

/// The WinAnsi (cp1252) code of `c`, the encoding every standard font is
/// referenced with. `None` when the character has no code.
pub fn win_ansi_code(c: char) -> Option<u8> {
    if c.is_ascii() {
        return Some(c as u8);
    }
    let mut buf = [0u8; 4];
    let (bytes, _, unmappable) = WINDOWS_1252.encode(c.encode_utf8(&mut buf));
    match bytes.as_ref() {
        [code] if !unmappable => Some(*code),
        _ => None,
    }
}

/// Encodes text for a WinAnsi font, unmappable characters become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| win_ansi_code(c).unwrap_or(WIN_ANSI_REPLACEMENT))
        .collect()
}

/// The base-14 PDF fonts this engine can measure and reference without
/// embedding font programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
}

impl StandardFont {
    pub const ALL: [StandardFont; 8] = [
        StandardFont::Helvetica,
        StandardFont::HelveticaBold,
        StandardFont::HelveticaOblique,
        StandardFont::HelveticaBoldOblique,
        StandardFont::Courier,
        StandardFont::CourierBold,
        StandardFont::CourierOblique,
        StandardFont::CourierBoldOblique,
    ];

    /// The PostScript name used as `BaseFont` in the PDF font dictionary.
    pub fn postscript_name(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::HelveticaOblique => "Helvetica-Oblique",
            StandardFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
            StandardFont::CourierOblique => "Courier-Oblique",
            StandardFont::CourierBoldOblique => "Courier-BoldOblique",
        }
    }

    /// Looks a font up by PostScript name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.postscript_name().eq_ignore_ascii_case(name))
    }

    pub fn is_bold(&self) -> bool {
        matches!(
            self,
            StandardFont::HelveticaBold
                | StandardFont::HelveticaBoldOblique
                | StandardFont::CourierBold
                | StandardFont::CourierBoldOblique
        )
    }

    pub fn is_monospace(&self) -> bool {
        matches!(
            self,
            StandardFont::Courier
                | StandardFont::CourierBold
                | StandardFont::CourierOblique
                | StandardFont::CourierBoldOblique
        )
    }
}

impl fmt::Display for StandardFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.postscript_name())
    }
}

impl Serialize for StandardFont {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.postscript_name())
    }
}

impl<'de> Deserialize<'de> for StandardFont {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        StandardFont::from_name(&name)
            .ok_or_else(|| de::Error::custom(format!("unsupported font '{}'", name)))
    }
}
