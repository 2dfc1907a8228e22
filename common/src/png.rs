//! Minimal truecolor PNG encoder
//!
//! Writes a signature, one `IHDR`, a single `IDAT` holding every scanline
//! (filter type 0) compressed with zlib at level 9, and an empty `IEND`.

use crate::{Color, Error, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const SIGNATURE: [u8; 8] = *b"\x89PNG\r\n\x1a\n";

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGB: u8 = 2;
const FILTER_NONE: u8 = 0;
const COMPRESSION_LEVEL: u8 = 9;

// PNG dimensions and chunk lengths are 31-bit
const MAX_DIMENSION: u32 = i32::MAX as u32;

// chunk length + tag + crc
const CHUNK_OVERHEAD: usize = 12;

const CRC_TABLE: [u32; 256] = {
    let mut table = [0; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 == 1 { 0xEDB8_8320 ^ (c >> 1) } else { c >> 1 };
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
};

/// CRC-32 as used by zlib and the PNG chunk trailer
pub fn crc32<'a>(bytes: impl IntoIterator<Item = &'a u8>) -> u32 {
    let crc = bytes.into_iter().fold(0xFFFF_FFFF_u32, |crc, &byte| {
        CRC_TABLE[((crc ^ u32::from(byte)) & 0xFF) as usize] ^ (crc >> 8)
    });

    crc ^ 0xFFFF_FFFF
}

fn write_chunk(out: &mut Vec<u8>, tag: &[u8; 4], data: &[u8]) {
    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc32(tag.iter().chain(data)).to_be_bytes());
}

fn header(width: u32, height: u32) -> [u8; 13] {
    let mut ihdr = [0; 13];
    ihdr[0..4].copy_from_slice(&width.to_be_bytes());
    ihdr[4..8].copy_from_slice(&height.to_be_bytes());
    ihdr[8] = BIT_DEPTH;
    ihdr[9] = COLOR_TYPE_RGB;
    // compression, filter and interlace method stay 0
    ihdr
}

fn validate(width: u32, height: u32, pixels: &[Vec<Color>]) -> Result<()> {
    let invalid = |reason: String| Error::InvalidDimensions {
        width,
        height,
        reason,
    };

    if width == 0 || height == 0 {
        return Err(invalid("image must be at least 1x1".into()));
    }

    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(invalid(format!("dimensions must not exceed {MAX_DIMENSION}")));
    }

    if pixels.len() != height as usize {
        return Err(invalid(format!("pixel grid has {} rows", pixels.len())));
    }

    if let Some((y, row)) = pixels
        .iter()
        .enumerate()
        .find(|(_y, row)| row.len() != width as usize)
    {
        return Err(invalid(format!("row {y} has {} pixels", row.len())));
    }

    Ok(())
}

fn scanlines(width: u32, pixels: &[Vec<Color>]) -> Vec<u8> {
    let stride = 1 + width as usize * 3;
    let mut raw = Vec::with_capacity(stride * pixels.len());

    for row in pixels {
        raw.push(FILTER_NONE);
        for pixel in row {
            raw.extend_from_slice(&pixel.to_array());
        }
    }

    raw
}

/// Encode a row-major pixel grid into PNG bytes
///
/// `pixels` must contain exactly `height` rows of exactly `width` pixels each.
/// The output only depends on the input.
pub fn encode(width: u32, height: u32, pixels: &[Vec<Color>]) -> Result<Vec<u8>> {
    validate(width, height, pixels)?;

    let raw = scanlines(width, pixels);
    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&raw, COMPRESSION_LEVEL);
    if compressed.len() > MAX_DIMENSION as usize {
        return Err(Error::InvalidDimensions {
            width,
            height,
            reason: "compressed image data doesn't fit into a single IDAT chunk".into(),
        });
    }

    debug!(
        width,
        height,
        raw = raw.len(),
        compressed = compressed.len(),
        "compressed image data"
    );

    let mut png =
        Vec::with_capacity(SIGNATURE.len() + 3 * CHUNK_OVERHEAD + 13 + compressed.len());
    png.extend_from_slice(&SIGNATURE);
    write_chunk(&mut png, b"IHDR", &header(width, height));
    write_chunk(&mut png, b"IDAT", &compressed);
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().unwrap_or_default().to_os_string();
    file_name.push(".tmp");
    path.with_file_name(file_name)
}

/// Write `bytes` to `path`, replacing any existing file
///
/// The data lands in a sibling staging file first and is renamed into place,
/// so `path` either holds the complete output or is left untouched.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let failure = |source| Error::FileWriteFailure {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(failure)?;
    }

    let staging = staging_path(path);
    if let Err(error) = fs::write(&staging, bytes) {
        let _ = fs::remove_file(&staging);
        return Err(failure(error));
    }

    fs::rename(&staging, path).map_err(|error| {
        let _ = fs::remove_file(&staging);
        failure(error)
    })?;

    debug!(path = %path.display(), len = bytes.len(), "wrote file");

    Ok(())
}
