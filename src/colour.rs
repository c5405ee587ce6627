use crate::LabelError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A colour, expressed in RGB or grey
#[derive(Copy, Clone, PartialEq, Debug, Deserialize)]
#[serde(try_from = "String")]
pub enum Colour {
    /// RGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// Grey colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::new_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// The colour as 8-bit red, green and blue channels
    pub fn to_bytes(&self) -> [u8; 3] {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        match *self {
            Colour::RGB { r, g, b } => [channel(r), channel(g), channel(b)],
            Colour::Grey { g } => [channel(g); 3],
        }
    }
}

/// Formats as an SVG paint, i.e. `#rrggbb`
impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_bytes();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

/// Parses `#rrggbb` or `#rgb`
impl FromStr for Colour {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LabelError::InvalidColour(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() {
            return Err(invalid());
        }
        let digits: Vec<u8> = match hex.len() {
            6 => (0..3)
                .map(|i| u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16))
                .collect::<Result<_, _>>()
                .map_err(|_| invalid())?,
            3 => (0..3)
                .map(|i| u8::from_str_radix(&hex[i..i + 1], 16).map(|d| d * 17))
                .collect::<Result<_, _>>()
                .map_err(|_| invalid())?,
            _ => return Err(invalid()),
        };
        Ok(Colour::new_rgb_bytes(digits[0], digits[1], digits[2]))
    }
}

impl TryFrom<String> for Colour {
    type Error = LabelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
}
