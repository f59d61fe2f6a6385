pub mod glow;
pub mod raster;
pub mod svg;
