/// Generates a ramp where sample (x, y) = x + 10*y.
pub fn ramp_f32(width: usize, height: usize) -> Vec<f32> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = vec![0.0f32; width * height];
    for y in 0..height {
        for x in 0..width {
            img[y * width + x] = x as f32 + 10.0 * y as f32;
        }
    }
    img
}

/// Generates a zero image with a single unit impulse at the centre.
pub fn impulse_f32(width: usize, height: usize) -> Vec<f32> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = vec![0.0f32; width * height];
    img[(height / 2) * width + width / 2] = 1.0;
    img
}

/// Deterministic pseudo-random image in [0, 1), seeded by a fixed LCG.
pub fn noise_f32(width: usize, height: usize) -> Vec<f32> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut state = 0x2545f491u32;
    let mut img = Vec::with_capacity(width * height);
    for _ in 0..width * height {
        state = state.wrapping_mul(1664525).wrapping_add(1013904223);
        img.push((state >> 8) as f32 / (1u32 << 24) as f32);
    }
    img
}
