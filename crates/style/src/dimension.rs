//! Page sizes and margins.
use preflight_types::Size;
use serde::{ser::SerializeMap, Serialize, Serializer};
use std::fmt;

#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    /// The same margins with left and right exchanged, used for the even
    /// pages of a duplex imposition.
    pub fn mirrored(&self) -> Self {
        Self {
            left: self.right,
            right: self.left,
            ..*self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    A4,
    #[default]
    A5,
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    pub const NAMED: [PageSize; 4] = [PageSize::A4, PageSize::A5, PageSize::Letter, PageSize::Legal];

    pub fn dimensions_pt(&self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::A5 => (419.53, 595.28),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Legal => (612.0, 1008.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }

    pub fn size(&self) -> Size {
        let (width, height) = self.dimensions_pt();
        Size::new(width, height)
    }

    pub fn name(&self) -> Option<&'static str> {
        match self {
            PageSize::A4 => Some("A4"),
            PageSize::A5 => Some("A5"),
            PageSize::Letter => Some("Letter"),
            PageSize::Legal => Some("Legal"),
            PageSize::Custom { .. } => None,
        }
    }

    /// Looks up a named page size, ignoring case.
    pub fn from_name(s: &str) -> Option<Self> {
        Self::NAMED
            .into_iter()
            .find(|p| p.name().is_some_and(|n| n.eq_ignore_ascii_case(s.trim())))
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::Custom { width, height } => write!(f, "{}x{}", width, height),
            named => f.write_str(named.name().unwrap_or_default()),
        }
    }
}

impl Serialize for PageSize {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageSize::Custom { width, height } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("width", width)?;
                map.serialize_entry("height", height)?;
                map.end()
            }
            named => serializer.serialize_str(named.name().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_a5() {
        assert_eq!(PageSize::default().dimensions_pt(), (419.53, 595.28));
    }

    #[test]
    fn test_named_lookup() {
        assert_eq!(PageSize::from_name("letter"), Some(PageSize::Letter));
        assert_eq!(PageSize::from_name(" a4 "), Some(PageSize::A4));
        assert_eq!(PageSize::from_name("B5"), None);
    }

    #[test]
    fn test_display_round_trips_names() {
        for size in PageSize::NAMED {
            assert_eq!(PageSize::from_name(&size.to_string()), Some(size));
        }
        let custom = PageSize::Custom { width: 300.0, height: 400.0 };
        assert_eq!(custom.to_string(), "300x400");
    }

    #[test]
    fn test_mirrored_margins() {
        let m = Margins { top: 40.0, right: 50.0, bottom: 40.0, left: 80.0 };
        let mirrored = m.mirrored();
        assert_eq!(mirrored.left, 50.0);
        assert_eq!(mirrored.right, 80.0);
        assert_eq!(mirrored.top, 40.0);
    }
}
