pub mod colors;
pub mod raster;
pub mod tbsim_png;
