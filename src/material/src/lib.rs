pub mod palette;
pub mod raster;
