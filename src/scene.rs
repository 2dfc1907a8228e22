use ogpgen_common::{
    Color, Frame, Result,
    draw::{draw_block_text, draw_border, fill_rect},
    glyph,
};

pub const WIDTH: u32 = 1200;
pub const HEIGHT: u32 = 630;

const W: i32 = WIDTH as i32;
const H: i32 = HEIGHT as i32;
const MID_Y: i32 = H / 2;

const BACKGROUND_TOP: &str = "1a1a2e";
const BACKGROUND_BOTTOM: &str = "16213e";
const GOLD: &str = "c9a84c";
const LIGHT_GOLD: &str = "e8c97a";
const WHITE: &str = "e0e0e0";

pub struct Palette {
    pub background_top: Color,
    pub background_bottom: Color,
    pub gold: Color,
    pub light_gold: Color,
    pub white: Color,
}

impl Palette {
    pub fn load() -> Result<Self> {
        Ok(Self {
            background_top: Color::from_hex(BACKGROUND_TOP)?,
            background_bottom: Color::from_hex(BACKGROUND_BOTTOM)?,
            gold: Color::from_hex(GOLD)?,
            light_gold: Color::from_hex(LIGHT_GOLD)?,
            white: Color::from_hex(WHITE)?,
        })
    }

    fn ink(&self, ink: Ink) -> Color {
        match ink {
            Ink::Gold => self.gold,
            Ink::LightGold => self.light_gold,
            Ink::White => self.white,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Ink {
    Gold,
    LightGold,
    White,
}

#[derive(Debug)]
struct TextBlock {
    text: &'static str,
    x: i32,
    y: i32,
    ink: Ink,
    scale: i32,
}

// drawn in order, later blocks paint over earlier ones
const LAYOUT: [TextBlock; 5] = [
    TextBlock { text: "13", x: 200, y: MID_Y - 140, ink: Ink::LightGold, scale: 10 },
    TextBlock { text: "TH", x: 360, y: MID_Y - 110, ink: Ink::Gold, scale: 6 },
    TextBlock { text: "AGE", x: 320, y: MID_Y - 140, ink: Ink::LightGold, scale: 10 },
    TextBlock { text: "CHARACTER", x: 120, y: MID_Y + 20, ink: Ink::White, scale: 6 },
    TextBlock { text: "BUILDER", x: 260, y: MID_Y + 80, ink: Ink::Gold, scale: 6 },
];

/// Linear blend between `top` and `bottom` for row `y`, truncated per channel
fn gradient(top: Color, bottom: Color, y: u32, height: u32) -> Color {
    let t = f64::from(y) / f64::from(height);
    let blend = |top: u8, bottom: u8| (f64::from(top) * (1.0 - t) + f64::from(bottom) * t) as u8;

    Color::rgb(
        blend(top.r, bottom.r),
        blend(top.g, bottom.g),
        blend(top.b, bottom.b),
    )
}

pub fn compose(palette: &Palette) -> Result<Frame> {
    let mut frame = Frame::from_rows(WIDTH, HEIGHT, |y| {
        gradient(palette.background_top, palette.background_bottom, y, HEIGHT)
    });

    draw_border(&mut frame, 20, 20, W - 40, H - 40, palette.gold, 2);
    draw_border(&mut frame, 24, 24, W - 48, H - 48, palette.gold, 1);

    // dividers
    fill_rect(&mut frame, 80, MID_Y - 10, W - 160, 1, palette.gold);
    fill_rect(&mut frame, 80, MID_Y + 60, W - 160, 1, palette.gold);

    for idx in 0..5 {
        let y = MID_Y - 80 + idx * 30;
        fill_rect(&mut frame, 50, y, 12, 18, palette.gold);
        fill_rect(&mut frame, W - 62, y, 12, 18, palette.gold);
    }

    for block in &LAYOUT {
        let glyphs = glyph::glyphs(block.text)?;
        let end = draw_block_text(
            &mut frame,
            block.x,
            block.y,
            &glyphs,
            palette.ink(block.ink),
            block.scale,
        );
        debug!(text = block.text, x = block.x, y = block.y, end, "drew text block");
    }

    Ok(frame)
}
