use std::{io, path::PathBuf};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// The pixel grid doesn't match the declared image size, or the size can't be stored in a PNG header
    #[error("invalid dimensions for {width}x{height} image: {reason}")]
    InvalidDimensions {
        width: u32,
        height: u32,
        reason: String,
    },

    #[error("channel value {0} is outside of 0..=255")]
    InvalidChannelValue(i64),

    #[error("invalid hex color {0:?}, expected six hex digits")]
    InvalidColor(String),

    #[error("no glyph for character {0:?}")]
    UnknownGlyph(char),

    #[error("failed to write {}", path.display())]
    FileWriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
