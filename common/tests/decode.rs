use image::{ColorType, ImageDecoder, codecs::png::PngDecoder};
use ogpgen_common::{Color, Frame, draw, glyph};
use std::io::Cursor;

// xorshift, keeps the test pixels reproducible
fn noise(width: u32, height: u32, mut state: u32) -> Frame {
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };

    let data = (0..height)
        .map(|_y| {
            (0..width)
                .map(|_x| {
                    let [r, g, b, _] = next().to_le_bytes();
                    Color::rgb(r, g, b)
                })
                .collect()
        })
        .collect();

    Frame { data }
}

fn decode(png: &[u8]) -> image::RgbImage {
    image::load_from_memory_with_format(png, image::ImageFormat::Png)
        .unwrap()
        .into_rgb8()
}

fn assert_same_pixels(frame: &Frame, decoded: &image::RgbImage) {
    assert_eq!(decoded.dimensions(), (frame.width(), frame.height()));
    for (y, y_lane) in frame.data.iter().enumerate() {
        for (x, pixel) in y_lane.iter().enumerate() {
            assert_eq!(
                decoded.get_pixel(x as u32, y as u32).0,
                pixel.to_array(),
                "pixel ({x}, {y})"
            );
        }
    }
}

#[test]
fn header_of_black_canvas() {
    let png = Frame::new(1200, 630, Color::BLACK).encode().unwrap();
    let decoder = PngDecoder::new(Cursor::new(&png)).unwrap();

    assert_eq!(decoder.dimensions(), (1200, 630));
    assert_eq!(decoder.color_type(), ColorType::Rgb8);
}

#[test]
fn random_pixels_survive_roundtrip() {
    for (width, height, seed) in [(1, 1, 7), (17, 5, 0x1234_5678), (301, 129, 0xDEAD_BEEF)] {
        let frame = noise(width, height, seed);
        let png = frame.encode().unwrap();

        assert_same_pixels(&frame, &decode(&png));
    }
}

#[test]
fn drawn_frame_survives_roundtrip() {
    let mut frame = Frame::new(240, 90, Color::rgb(26, 26, 46));
    let gold = Color::from_hex("c9a84c").unwrap();
    draw::draw_border(&mut frame, 4, 4, 232, 82, gold, 2);
    draw::draw_block_text(&mut frame, 10, 10, &glyph::glyphs("BUILD").unwrap(), gold, 6);
    draw::fill_rect(&mut frame, 230, 80, 40, 40, Color::rgb(255, 0, 255));

    let png = frame.encode().unwrap();
    assert_same_pixels(&frame, &decode(&png));
}

#[test]
fn identical_frames_encode_identically() {
    let first = noise(64, 64, 42).encode().unwrap();
    let second = noise(64, 64, 42).encode().unwrap();

    assert_eq!(first, second);
    assert_ne!(first, noise(64, 64, 43).encode().unwrap());
}
