use core::fmt;

/// Validation and query errors surfaced at the engine boundary.
///
/// The engine never panics on malformed caller input; dimension mismatches
/// and out-of-range queries are reported explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Buffer length does not match `width * height`.
    SizeMismatch { expected: usize, actual: usize },
    /// `width * height` does not fit in `usize`.
    DimensionsTooLarge { width: usize, height: usize },
    /// Width or height is zero.
    ZeroDimension,
    /// A pyramid needs at least one level.
    InvalidLevelCount,
    /// Queried level index is past the configured depth.
    LevelOutOfRange { level: usize, levels: usize },
    /// Queried pixel coordinate is outside the image extents.
    CoordOutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "buffer size mismatch: expected {expected}, got {actual}")
            }
            Self::DimensionsTooLarge { width, height } => {
                write!(f, "image dimensions {width}x{height} overflow")
            }
            Self::ZeroDimension => write!(f, "image dimensions must be positive"),
            Self::InvalidLevelCount => write!(f, "pyramid requires at least one level"),
            Self::LevelOutOfRange { level, levels } => {
                write!(f, "level {level} out of range (pyramid has {levels})")
            }
            Self::CoordOutOfRange {
                x,
                y,
                width,
                height,
            } => {
                write!(f, "pixel ({x}, {y}) out of range for {width}x{height} image")
            }
        }
    }
}

impl std::error::Error for Error {}
