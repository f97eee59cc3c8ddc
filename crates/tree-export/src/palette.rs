use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Column background colors, cycled by column index
pub const PALETTE: [&str; 10] = [
    "#fef08a", // warm yellow
    "#93c5fd", // sky blue
    "#86efac", // mint green
    "#fda4af", // rose pink
    "#c4b5fd", // soft violet
    "#fca5a5", // coral red
    "#5eead4", // teal
    "#f9a8d4", // magenta pink
    "#a5f3fc", // light cyan
    "#fcd34d", // amber
];

/// Background of the header row
pub const HEADER_BACKGROUND: &str = "#333333";

/// Background used when no palette color is available
pub const FALLBACK_BACKGROUND: &str = "#FFFFFF";

/// Full scale of [`Rgb::weighted_luma`]
const LUMA_SCALE: u32 = 255_000;

/// Weighted luma above which dark text is used: 0.6 of full scale
const LIGHT_THRESHOLD: u32 = LUMA_SCALE / 5 * 3;

/// Text color chosen for legibility on a background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TextColor {
    #[display(fmt = "black")]
    Black,

    #[display(fmt = "white")]
    White,
}

impl TextColor {
    /// The color itself
    pub fn rgb(self) -> Rgb {
        match self {
            TextColor::Black => Rgb { r: 0, g: 0, b: 0 },
            TextColor::White => Rgb {
                r: 255,
                g: 255,
                b: 255,
            },
        }
    }
}

/// An RGB color parsed from `#RRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#RRGGBB` (the `#` is optional); anything else yields `None`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Packed `0xRRGGBB`
    pub fn to_u32(self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Perceived brightness as `299 r + 587 g + 114 b`, in `0..=255_000`
    ///
    /// Integer weights keep threshold comparisons exact.
    pub fn weighted_luma(self) -> u32 {
        299 * u32::from(self.r) + 587 * u32::from(self.g) + 114 * u32::from(self.b)
    }

    /// Perceived brightness in `0.0..=1.0`
    pub fn luma(self) -> f64 {
        f64::from(self.weighted_luma()) / f64::from(LUMA_SCALE)
    }
}

/// Pick black or white text for the given background color
///
/// An empty or unparseable color is treated as a white background.
pub fn contrast_color(hex: &str) -> TextColor {
    let background = Rgb::from_hex(hex).unwrap_or(Rgb {
        r: 255,
        g: 255,
        b: 255,
    });

    if background.weighted_luma() > LIGHT_THRESHOLD {
        TextColor::Black
    } else {
        TextColor::White
    }
}

/// Background color for a column
pub fn column_color<'a>(palette: &[&'a str], column: usize) -> &'a str {
    if palette.is_empty() {
        FALLBACK_BACKGROUND
    } else {
        palette[column % palette.len()]
    }
}
