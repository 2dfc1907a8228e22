//! Drawing primitives operating on a [`Frame`]
//!
//! Coordinates are signed so shapes may hang off the canvas, anything outside
//! of the frame is clipped.

use crate::{Color, Frame, Glyph};
use std::ops::Range;

fn clip(start: i32, len: i32, bound: u32) -> Range<usize> {
    let start = i64::from(start);
    let end = (start + i64::from(len)).min(i64::from(bound));
    let start = start.clamp(0, i64::from(bound));

    if end <= start {
        return 0..0;
    }

    start as usize..end as usize
}

/// Fill `[x, x + w) × [y, y + h)` with `color`
pub fn fill_rect(frame: &mut Frame, x: i32, y: i32, w: i32, h: i32, color: Color) {
    let x_range = clip(x, w, frame.width());
    let y_range = clip(y, h, frame.height());
    if x_range.is_empty() {
        return;
    }

    for y_lane in &mut frame.data[y_range] {
        y_lane[x_range.clone()].fill(color);
    }
}

/// Outline the inside of `[x, x + w) × [y, y + h)` with edges `thickness` pixels wide
pub fn draw_border(
    frame: &mut Frame,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    color: Color,
    thickness: i32,
) {
    fill_rect(frame, x, y, w, thickness, color);
    fill_rect(frame, x, y + h - thickness, w, thickness, color);
    fill_rect(frame, x, y, thickness, h, color);
    fill_rect(frame, x + w - thickness, y, thickness, h, color);
}

/// Render `glyphs` left to right starting at `(x, y)`
///
/// Every lit cell becomes a square of `scale - 1` pixels, which leaves a one
/// pixel seam between neighbouring cells. After each glyph the cursor moves by
/// the glyph's width plus one cell. Returns the cursor position after the last glyph.
pub fn draw_block_text(
    frame: &mut Frame,
    x: i32,
    y: i32,
    glyphs: &[&Glyph],
    color: Color,
    scale: i32,
) -> i32 {
    let mut cursor = x;

    for glyph in glyphs {
        for (col_idx, row_idx) in glyph.lit_cells() {
            fill_rect(
                frame,
                cursor + col_idx as i32 * scale,
                y + row_idx as i32 * scale,
                scale - 1,
                scale - 1,
                color,
            );
        }

        cursor += (glyph.width() as i32 + 1) * scale;
    }

    cursor
}

#[cfg(test)]
mod tests {
    use super::{clip, draw_block_text, draw_border, fill_rect};
    use crate::{Color, Frame, glyph};

    const INK: Color = Color::rgb(255, 255, 255);

    fn lit(frame: &Frame) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for (y, y_lane) in frame.data.iter().enumerate() {
            for (x, pixel) in y_lane.iter().enumerate() {
                if *pixel != Color::BLACK {
                    cells.push((x, y));
                }
            }
        }
        cells
    }

    #[test]
    fn clip_ranges() {
        assert_eq!(clip(2, 3, 10), 2..5);
        assert_eq!(clip(8, 5, 10), 8..10);
        assert_eq!(clip(-3, 5, 10), 0..2);
        assert_eq!(clip(-3, 2, 10), 0..0);
        assert_eq!(clip(12, 2, 10), 0..0);
        assert_eq!(clip(2, 0, 10), 0..0);
        assert_eq!(clip(2, -4, 10), 0..0);
        assert_eq!(clip(i32::MAX, i32::MAX, 10), 0..0);
    }

    #[test]
    fn fill_rect_clips_to_frame() {
        let mut frame = Frame::new(10, 10, Color::BLACK);
        fill_rect(&mut frame, 8, 8, 5, 5, INK);

        assert_eq!(lit(&frame), [(8, 8), (9, 8), (8, 9), (9, 9)]);
    }

    #[test]
    fn fill_rect_off_canvas_is_noop() {
        let mut frame = Frame::new(10, 10, Color::BLACK);
        fill_rect(&mut frame, -20, 3, 5, 5, INK);
        fill_rect(&mut frame, 3, 11, 5, 5, INK);
        fill_rect(&mut frame, 3, 3, 0, 5, INK);

        assert!(lit(&frame).is_empty());

        fill_rect(&mut frame, -2, -2, 3, 3, INK);
        assert_eq!(lit(&frame), [(0, 0)]);
    }

    #[test]
    fn border_stays_inside_bounding_box() {
        let mut frame = Frame::new(8, 8, Color::BLACK);
        draw_border(&mut frame, 1, 1, 6, 5, INK, 2);

        for y in 0..8 {
            for x in 0..8 {
                let inside = (1..7).contains(&x) && (1..6).contains(&y);
                let interior = (3..5).contains(&x) && (3..4).contains(&y);
                let expected = if inside && !interior { INK } else { Color::BLACK };
                assert_eq!(frame.get(x, y), Some(expected), "({x}, {y})");
            }
        }
    }

    #[test]
    fn block_text_places_cells_and_advances() {
        let mut frame = Frame::new(400, 100, Color::BLACK);
        let text = glyph::glyphs("13").unwrap();
        let end = draw_block_text(&mut frame, 200, 10, &text, INK, 10);

        // '1' starts with two empty columns
        assert_eq!(frame.get(219, 10), Some(Color::BLACK));
        assert_eq!(frame.get(220, 10), Some(INK));
        assert_eq!(frame.get(228, 18), Some(INK));
        // seam between cells
        assert_eq!(frame.get(229, 10), Some(Color::BLACK));
        assert_eq!(frame.get(220, 19), Some(Color::BLACK));

        // '3' starts at x + (5 + 1) * 10 with a lit top-left cell
        assert_eq!(frame.get(259, 10), Some(Color::BLACK));
        assert_eq!(frame.get(260, 10), Some(INK));

        assert_eq!(end, 320);
    }

    #[test]
    fn block_text_advances_by_glyph_width() {
        let mut frame = Frame::new(200, 20, Color::BLACK);
        let text = glyph::glyphs("I E").unwrap();

        let end = draw_block_text(&mut frame, 0, 0, &text, INK, 2);
        assert_eq!(end, (3 + 1 + 3 + 1 + 5 + 1) * 2);
        // 'E' top-left cell
        assert_eq!(frame.get(16, 0), Some(INK));
    }

    #[test]
    fn block_text_at_scale_one_draws_nothing() {
        let mut frame = Frame::new(20, 10, Color::BLACK);
        let text = glyph::glyphs("E").unwrap();
        draw_block_text(&mut frame, 0, 0, &text, INK, 1);

        assert!(lit(&frame).is_empty());
    }
}
