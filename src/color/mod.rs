pub mod hex;
pub mod model;
pub mod palette;

#[cfg(feature = "color_double_precision")]
pub type ColorFloat = f64;
#[cfg(not(feature = "color_double_precision"))]
pub type ColorFloat = f32;
