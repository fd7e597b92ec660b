//! Non-subsampled grayscale blur pyramid.
//!
//! Level 0 is a copy of the input. Each next level is the previous one
//! convolved with a fixed separable-in-effect 5×5 kernel using mirror
//! (reflect) boundary handling. All levels keep the source resolution; only
//! the effective blur radius grows with the level index.

pub mod conv;
mod options;

pub use self::conv::{SeparableFilter, StaticSeparableFilter, BLUR_5TAP};
pub use self::options::{PyramidOptions, DEFAULT_LEVELS};

use self::conv::convolve_into;
use crate::error::Error;
use crate::image::ImageF32;
use log::debug;

/// Immutable stack of equally sized blur levels.
#[derive(Clone, Debug)]
pub struct Pyramid {
    levels: Vec<ImageF32>,
}

impl Pyramid {
    /// Build a pyramid from an owned f32 image using the provided options.
    ///
    /// A 1×1 input skips convolution entirely: every level is a copy of the
    /// single source sample.
    pub fn build(image: ImageF32, options: PyramidOptions) -> Result<Self, Error> {
        if options.levels == 0 {
            return Err(Error::InvalidLevelCount);
        }
        if image.w == 0 || image.h == 0 {
            return Err(Error::ZeroDimension);
        }

        let (w, h) = (image.w, image.h);
        let mut levels = Vec::with_capacity(options.levels);
        levels.push(image);

        for _lvl in 1..options.levels {
            let prev = levels.last().expect("previous level available");
            let next = if w * h <= 1 {
                levels[0].clone()
            } else {
                let mut out = ImageF32::new(w, h);
                convolve_into(prev, &mut out, options.filter);
                out
            };
            levels.push(next);
        }

        debug!(
            "Pyramid::build done: {}x{} levels={}",
            w,
            h,
            levels.len()
        );
        Ok(Self { levels })
    }

    /// Build from a borrowed row-major buffer of `width * height` samples.
    pub fn build_from_slice(
        buffer: &[f32],
        width: usize,
        height: usize,
        options: PyramidOptions,
    ) -> Result<Self, Error> {
        let image = ImageF32::from_vec(width, height, buffer.to_vec())?;
        Self::build(image, options)
    }

    /// Image width in pixels, shared by every level.
    pub fn width(&self) -> usize {
        self.levels[0].w
    }

    /// Image height in pixels, shared by every level.
    pub fn height(&self) -> usize {
        self.levels[0].h
    }

    /// Number of levels, equal to the requested depth.
    pub fn levels(&self) -> usize {
        self.levels.len()
    }

    /// Borrow a whole level buffer.
    pub fn level(&self, level: usize) -> Option<&ImageF32> {
        self.levels.get(level)
    }

    /// Stored sample at column `x`, row `y` of the given level.
    pub fn value_at(&self, x: usize, y: usize, level: usize) -> Result<f32, Error> {
        let img = self.levels.get(level).ok_or(Error::LevelOutOfRange {
            level,
            levels: self.levels.len(),
        })?;
        if x >= img.w || y >= img.h {
            return Err(Error::CoordOutOfRange {
                x,
                y,
                width: img.w,
                height: img.h,
            });
        }
        Ok(img.get(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::{Pyramid, PyramidOptions};
    use crate::error::Error;
    use crate::image::ImageF32;

    #[test]
    fn rejects_zero_levels() {
        let img = ImageF32::new(4, 4);
        let err = Pyramid::build(img, PyramidOptions::new(0)).unwrap_err();
        assert_eq!(err, Error::InvalidLevelCount);
    }

    #[test]
    fn rejects_zero_dimensions() {
        let img = ImageF32::new(0, 4);
        let err = Pyramid::build(img, PyramidOptions::new(2)).unwrap_err();
        assert_eq!(err, Error::ZeroDimension);
    }

    #[test]
    fn build_from_slice_rejects_length_mismatch() {
        let err = Pyramid::build_from_slice(&[0.0; 10], 4, 4, PyramidOptions::new(2)).unwrap_err();
        assert_eq!(
            err,
            Error::SizeMismatch {
                expected: 16,
                actual: 10
            }
        );
    }

    #[test]
    fn value_at_checks_level_and_coords() {
        let img = ImageF32::new(3, 2);
        let pyr = Pyramid::build(img, PyramidOptions::new(2)).expect("valid build");

        assert_eq!(
            pyr.value_at(0, 0, 2),
            Err(Error::LevelOutOfRange { level: 2, levels: 2 })
        );
        assert_eq!(
            pyr.value_at(3, 0, 0),
            Err(Error::CoordOutOfRange {
                x: 3,
                y: 0,
                width: 3,
                height: 2
            })
        );
        assert_eq!(pyr.value_at(2, 1, 1).map(|v| v.is_finite()), Ok(true));
    }
}
