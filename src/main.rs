use lpyramid::config::{self, USAGE};
use lpyramid::image::{ImageF32, ImageViewMut};
use lpyramid::{Pyramid, PyramidOptions};
use std::env;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-help") {
        print!("{USAGE}");
        return Ok(());
    }
    let config = config::parse_cli(args)?;

    // Demo stub: builds a synthetic gradient image and reports level stats
    let (w, h) = (640usize, 480usize);
    let mut img = ImageF32::new(w, h);
    for y in 0..h {
        let row = img.row_mut(y);
        for (x, px) in row.iter_mut().enumerate() {
            *px = (x + y) as f32 / (w + h - 2) as f32;
        }
    }

    let options = PyramidOptions::new(config.max_levels);
    let pyramid = Pyramid::build(img, options).map_err(|e| e.to_string())?;

    println!(
        "pyramid: {}x{} levels={}",
        pyramid.width(),
        pyramid.height(),
        pyramid.levels()
    );
    if config.verbose {
        for lvl in 0..pyramid.levels() {
            let level = pyramid.level(lvl).expect("level within depth");
            let (min, max, sum) = level.data.iter().fold(
                (f32::INFINITY, f32::NEG_INFINITY, 0.0f64),
                |(min, max, sum), &v| (min.min(v), max.max(v), sum + v as f64),
            );
            let mean = sum / level.data.len() as f64;
            let center = pyramid
                .value_at(w / 2, h / 2, lvl)
                .map_err(|e| e.to_string())?;
            println!("  level {lvl}: min={min:.6} max={max:.6} mean={mean:.6} center={center:.6}");
        }
    }

    Ok(())
}
