//! Hand-drawn block font
//!
//! Glyphs are rectangular grids of lit (`1`) and unlit (`0`) cells. Most of
//! them are 5 columns by 7 rows, `I` and the space are only 3 columns wide.

use crate::{Error, Result};

#[derive(Debug, PartialEq, Eq)]
pub struct Glyph {
    rows: &'static [&'static [u8]],
}

impl Glyph {
    pub const fn new(rows: &'static [&'static [u8]]) -> Self {
        Self { rows }
    }

    /// Column count of the first row
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &'static [&'static [u8]] {
        self.rows
    }

    /// Iterate over the `(column, row)` positions of all lit cells, row by row
    pub fn lit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row_idx, row)| {
            row.iter()
                .enumerate()
                .filter(|(_col_idx, cell)| **cell != 0)
                .map(move |(col_idx, _cell)| (col_idx, row_idx))
        })
    }
}

#[rustfmt::skip]
mod table {
    use super::Glyph;

    pub static ONE: Glyph = Glyph::new(&[
        &[0,0,1,0,0],
        &[0,1,1,0,0],
        &[0,0,1,0,0],
        &[0,0,1,0,0],
        &[0,0,1,0,0],
        &[0,0,1,0,0],
        &[0,1,1,1,0],
    ]);

    pub static THREE: Glyph = Glyph::new(&[
        &[1,1,1,1,0],
        &[0,0,0,1,1],
        &[0,0,0,1,1],
        &[0,1,1,1,0],
        &[0,0,0,1,1],
        &[0,0,0,1,1],
        &[1,1,1,1,0],
    ]);

    pub static A: Glyph = Glyph::new(&[
        &[0,0,1,0,0],
        &[0,1,0,1,0],
        &[1,0,0,0,1],
        &[1,1,1,1,1],
        &[1,0,0,0,1],
        &[1,0,0,0,1],
        &[1,0,0,0,1],
    ]);

    pub static B: Glyph = Glyph::new(&[
        &[1,1,1,1,0],
        &[1,0,0,0,1],
        &[1,0,0,0,1],
        &[1,1,1,1,0],
        &[1,0,0,0,1],
        &[1,0,0,0,1],
        &[1,1,1,1,0],
    ]);

    pub static C: Glyph = Glyph::new(&[
        &[0,1,1,1,0],
        &[1,0,0,0,1],
        &[1,0,0,0,0],
        &[1,0,0,0,0],
        &[1,0,0,0,0],
        &[1,0,0,0,1],
        &[0,1,1,1,0],
    ]);

    pub static D: Glyph = Glyph::new(&[
        &[1,1,1,1,0],
        &[1,0,0,0,1],
        &[1,0,0,0,1],
        &[1,0,0,0,1],
        &[1,0,0,0,1],
        &[1,0,0,0,1],
        &[1,1,1,1,0],
    ]);

    pub static E: Glyph = Glyph::new(&[
        &[1,1,1,1,1],
        &[1,0,0,0,0],
        &[1,0,0,0,0],
        &[1,1,1,1,0],
        &[1,0,0,0,0],
        &[1,0,0,0,0],
        &[1,1,1,1,1],
    ]);

    pub static G: Glyph = Glyph::new(&[
        &[0,1,1,1,0],
        &[1,0,0,0,0],
        &[1,0,0,0,0],
        &[1,0,1,1,1],
        &[1,0,0,0,1],
        &[1,0,0,0,1],
        &[0,1,1,1,0],
    ]);

    pub static H: Glyph = Glyph::new(&[
        &[1,0,0,0,1],
        &[1,0,0,0,1],
        &[1,0,0,0,1],
        &[1,1,1,1,1],
        &[1,0,0,0,1],
        &[1,0,0,0,1],
        &[1,0,0,0,1],
    ]);

    pub static SMALL_H: Glyph = Glyph::new(&[
        &[1,0,0,0,0],
        &[1,0,0,0,0],
        &[1,0,0,0,0],
        &[1,1,1,1,0],
        &[1,0,0,0,1],
        &[1,0,0,0,1],
        &[1,0,0,0,1],
    ]);

    pub static I: Glyph = Glyph::new(&[
        &[1,1,1],
        &[0,1,0],
        &[0,1,0],
        &[0,1,0],
        &[0,1,0],
        &[0,1,0],
        &[1,1,1],
    ]);

    pub static L: Glyph = Glyph::new(&[
        &[1,0,0,0,0],
        &[1,0,0,0,0],
        &[1,0,0,0,0],
        &[1,0,0,0,0],
        &[1,0,0,0,0],
        &[1,0,0,0,0],
        &[1,1,1,1,1],
    ]);

    pub static N: Glyph = Glyph::new(&[
        &[1,0,0,0,1],
        &[1,1,0,0,1],
        &[1,0,1,0,1],
        &[1,0,0,1,1],
        &[1,0,0,0,1],
        &[1,0,0,0,1],
        &[1,0,0,0,1],
    ]);

    pub static R: Glyph = Glyph::new(&[
        &[1,1,1,1,0],
        &[1,0,0,0,1],
        &[1,0,0,0,1],
        &[1,1,1,1,0],
        &[1,0,1,0,0],
        &[1,0,0,1,0],
        &[1,0,0,0,1],
    ]);

    pub static S: Glyph = Glyph::new(&[
        &[0,1,1,1,0],
        &[1,0,0,0,1],
        &[1,0,0,0,0],
        &[0,1,1,1,0],
        &[0,0,0,0,1],
        &[1,0,0,0,1],
        &[0,1,1,1,0],
    ]);

    pub static T: Glyph = Glyph::new(&[
        &[1,1,1,1,1],
        &[0,0,1,0,0],
        &[0,0,1,0,0],
        &[0,0,1,0,0],
        &[0,0,1,0,0],
        &[0,0,1,0,0],
        &[0,0,1,0,0],
    ]);

    pub static U: Glyph = Glyph::new(&[
        &[1,0,0,0,1],
        &[1,0,0,0,1],
        &[1,0,0,0,1],
        &[1,0,0,0,1],
        &[1,0,0,0,1],
        &[1,0,0,0,1],
        &[0,1,1,1,0],
    ]);

    // narrow gap between words
    pub static SPACE: Glyph = Glyph::new(&[
        &[0,0,0],
        &[0,0,0],
        &[0,0,0],
        &[0,0,0],
        &[0,0,0],
        &[0,0,0],
        &[0,0,0],
    ]);
}

/// Look up the glyph for a single character
pub fn lookup(ch: char) -> Option<&'static Glyph> {
    let glyph = match ch {
        '1' => &table::ONE,
        '3' => &table::THREE,
        'A' => &table::A,
        'B' => &table::B,
        'C' => &table::C,
        'D' => &table::D,
        'E' => &table::E,
        'G' => &table::G,
        'H' => &table::H,
        'h' => &table::SMALL_H,
        'I' => &table::I,
        'L' => &table::L,
        'N' => &table::N,
        'R' => &table::R,
        'S' => &table::S,
        'T' => &table::T,
        'U' => &table::U,
        ' ' => &table::SPACE,
        _ => return None,
    };

    Some(glyph)
}

/// Map every character of `text` to its glyph
pub fn glyphs(text: &str) -> Result<Vec<&'static Glyph>> {
    text.chars()
        .map(|ch| -> Result<&'static Glyph> {
            let glyph = lookup(ch).ok_or(Error::UnknownGlyph(ch))?;
            debug!(?ch, width = glyph.width(), height = glyph.height(), "resolved glyph");
            Ok(glyph)
        })
        .collect()
}
