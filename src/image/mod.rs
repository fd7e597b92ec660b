pub mod f32;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::traits::{ImageView, ImageViewMut};
