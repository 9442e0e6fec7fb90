//! Raster input for greenband
//!
//! Decodes uploaded single-band raster files into numeric grids.

pub mod band_reader;

pub use band_reader::read_band;
