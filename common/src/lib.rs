#[macro_use]
extern crate tracing;

pub mod draw;
pub mod error;
pub mod glyph;
pub mod png;

pub use self::error::{Error, Result};
pub use self::glyph::Glyph;

/// 8-bit RGB color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a color written as six hex digits, e.g. `c9a84c` or `#c9a84c`
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(hex.to_owned()));
        }

        let channel = |idx: usize| {
            u8::from_str_radix(&digits[idx..idx + 2], 16)
                .map_err(|_| Error::InvalidColor(hex.to_owned()))
        };

        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl TryFrom<(i64, i64, i64)> for Color {
    type Error = Error;

    fn try_from((r, g, b): (i64, i64, i64)) -> Result<Self> {
        let channel = |value: i64| u8::try_from(value).map_err(|_| Error::InvalidChannelValue(value));
        Ok(Self::rgb(channel(r)?, channel(g)?, channel(b)?))
    }
}

impl From<Color> for (u8, u8, u8) {
    fn from(color: Color) -> Self {
        (color.r, color.g, color.b)
    }
}

/// Owned pixel grid, mutated in place by the functions in [`draw`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    // layout: Y(X(pixel))
    pub data: Vec<Vec<Color>>,
}

impl Frame {
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Self::from_rows(width, height, |_y| fill)
    }

    /// Build a frame where every pixel of row `y` has the color `row_color(y)`
    pub fn from_rows(width: u32, height: u32, mut row_color: impl FnMut(u32) -> Color) -> Self {
        let data = (0..height)
            .map(|y| vec![row_color(y); width as usize])
            .collect();

        Self { data }
    }

    pub fn width(&self) -> u32 {
        self.data.first().map_or(0, |row| row.len() as u32)
    }

    pub fn height(&self) -> u32 {
        self.data.len() as u32
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        self.data.get(y as usize)?.get(x as usize).copied()
    }

    /// Encode the frame as a PNG file
    pub fn encode(&self) -> Result<Vec<u8>> {
        png::encode(self.width(), self.height(), &self.data)
    }
}
