#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod image;
pub mod pyramid;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::Error;
pub use crate::image::ImageF32;
pub use crate::pyramid::{Pyramid, PyramidOptions};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use lpyramid::prelude::*;
///
/// let (w, h) = (32usize, 24usize);
/// let img = ImageF32::from_vec(w, h, vec![0.25f32; w * h]).unwrap();
///
/// let pyr = Pyramid::build(img, PyramidOptions::new(4)).unwrap();
/// assert_eq!(pyr.levels(), 4);
/// assert!((pyr.value_at(5, 5, 3).unwrap() - 0.25).abs() < 1e-6);
/// ```
pub mod prelude {
    pub use crate::image::ImageF32;
    pub use crate::{Error, Pyramid, PyramidOptions};
}
