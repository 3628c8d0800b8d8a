//! Engine error type.
//!
//! Every failure the engine can report is either a programmer error
//! (precondition violations such as an unknown animation handle or an
//! out-of-range tile coordinate) or a startup failure while loading assets
//! and configuration. None of them are retried: callers propagate with `?`
//! and `main` logs and exits.

use thiserror::Error;

/// Main error type for engine operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// An animation handle that was never registered on the sprite sheet.
    #[error("unknown animation {id} for sprite sheet '{sheet}'")]
    UnknownAnimation { id: usize, sheet: String },

    /// A tile coordinate outside the `width × width` grid.
    #[error("tile ({col}, {row}) is outside a {width}x{width} map")]
    OutOfRange { col: u32, row: u32, width: u32 },

    /// Rejected animation registration (no frames, bad fps, frame off the sheet).
    #[error("invalid animation: {0}")]
    InvalidAnimation(String),

    /// Tile atlas entry for the empty kind or a frame off the tileset.
    #[error("invalid tile frame: {0}")]
    InvalidTileFrame(String),

    /// Sprite sheet slicing that would produce zero-sized frames.
    #[error("invalid frame size: {0}")]
    InvalidFrameSize(String),

    /// Texture, font or render texture could not be loaded.
    #[error("asset error: {0}")]
    Asset(String),

    /// Configuration file could not be read or written.
    #[error("config error: {0}")]
    Config(String),
}

impl EngineError {
    /// Create an asset error from a string.
    pub fn asset<S: Into<String>>(msg: S) -> Self {
        Self::Asset(msg.into())
    }

    /// Create a configuration error from a string.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error is a caller precondition violation rather than an
    /// environmental failure.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            Self::UnknownAnimation { .. }
                | Self::OutOfRange { .. }
                | Self::InvalidAnimation(_)
                | Self::InvalidTileFrame(_)
                | Self::InvalidFrameSize(_)
        )
    }
}

/// Result alias used across the engine.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = EngineError::OutOfRange {
            col: 4,
            row: 0,
            width: 4,
        };
        assert_eq!(err.to_string(), "tile (4, 0) is outside a 4x4 map");
    }

    #[test]
    fn test_precondition_classification() {
        assert!(
            EngineError::UnknownAnimation {
                id: 3,
                sheet: "ant".into()
            }
            .is_precondition_violation()
        );
        assert!(!EngineError::asset("missing").is_precondition_violation());
        assert!(!EngineError::config("bad").is_precondition_violation());
    }
}
