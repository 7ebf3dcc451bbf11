use serde::{Deserialize, Serialize};

/// An opaque RGB colour. Checklists only ever paint greys and black.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl Color {
    pub fn black() -> Self {
        Self::gray(0)
    }

    /// A neutral grey where `0` is black and `255` is white.
    pub fn gray(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    /// Channels normalised to `0.0..=1.0`, as PDF colour operators expect.
    pub fn to_unit_rgb(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}
