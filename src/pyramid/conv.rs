//! 5×5 blur convolution with mirror boundary handling.
//!
//! The 2-D weight at offset `(i, j)` is the outer product
//! `taps[i + r] * taps[j + r]` of the 1-D kernel with itself. The 25 taps are
//! accumulated per pixel in a fixed order (column offset outer, row offset
//! inner), so repeated runs produce bit-identical output even though rows are
//! processed in parallel.

use crate::image::ImageF32;
use rayon::prelude::*;

/// Trait implemented by separable 1D filters used for the blur stage.
pub trait SeparableFilter {
    /// Return the 1D taps (in left-to-right order). The kernel is assumed to
    /// be symmetric around its centre and normalised to sum to 1.
    fn taps(&self) -> &[f32];
}

/// Simple wrapper around a static filter kernel.
#[derive(Clone, Copy, Debug)]
pub struct StaticSeparableFilter {
    taps: &'static [f32],
}

impl Default for StaticSeparableFilter {
    fn default() -> Self {
        BLUR_5TAP
    }
}

impl StaticSeparableFilter {
    pub const fn new(taps: &'static [f32]) -> Self {
        Self { taps }
    }
}

impl SeparableFilter for StaticSeparableFilter {
    #[inline]
    fn taps(&self) -> &[f32] {
        self.taps
    }
}

/// Normalised 5-tap blur filter `[0.05, 0.25, 0.4, 0.25, 0.05]`.
pub const BLUR_5TAP: StaticSeparableFilter =
    StaticSeparableFilter::new(&[0.05, 0.25, 0.4, 0.25, 0.05]);

/// Convolve `src` with the filter, writing into `dst` of identical size.
///
/// Borders mirror: index `-1` maps to `1` (reflection around the edge pixel)
/// and index `width` maps to `width - 1`, `width + 1` to `width - 2` (the
/// high side repeats the edge sample once). Rows of `dst` are filled in
/// parallel; each output pixel reads only `src` and owns its output slot.
pub fn convolve_into(src: &ImageF32, dst: &mut ImageF32, filter: StaticSeparableFilter) {
    assert_eq!(src.w, dst.w, "convolution requires matching widths");
    assert_eq!(src.h, dst.h, "convolution requires matching heights");
    assert!(src.w * src.h > 1, "convolution needs more than one sample");

    let taps = filter.taps();
    assert!(taps.len() % 2 == 1, "filter must have an odd tap count");
    let radius = (taps.len() / 2) as isize;
    let (w, h) = (src.w, src.h);

    dst.data
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, dst_row)| {
            for (x, dst_px) in dst_row.iter_mut().enumerate() {
                let mut acc = 0.0f32;
                for i in -radius..=radius {
                    let wx = taps[(i + radius) as usize];
                    let nx = reflect_index(x as isize + i, w);
                    for j in -radius..=radius {
                        let wy = taps[(j + radius) as usize];
                        let ny = reflect_index(y as isize + j, h);
                        acc += wx * wy * src.data[ny * w + nx];
                    }
                }
                *dst_px = acc;
            }
        });
}

/// Convenience wrapper allocating the output buffer.
pub fn convolve(src: &ImageF32, filter: StaticSeparableFilter) -> ImageF32 {
    let mut out = ImageF32::new(src.w, src.h);
    convolve_into(src, &mut out, filter);
    out
}

/// Fold an out-of-range index back into `0..upper`: `-idx` below zero,
/// `2*upper - idx - 1` at or above `upper`. For any image at least two pixels
/// wide a single reflection suffices for the 5-tap kernel; the loop also
/// keeps 1-wide strips in range.
fn reflect_index(mut idx: isize, upper: usize) -> usize {
    let upper = upper as isize;
    loop {
        if idx < 0 {
            idx = -idx;
        } else if idx >= upper {
            idx = 2 * upper - idx - 1;
        } else {
            return idx as usize;
        }
    }
}
