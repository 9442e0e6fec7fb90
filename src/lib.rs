//! greenband - vegetation-health analysis from satellite imagery
//!
//! greenband computes the Normalized Difference Vegetation Index (NDVI)
//! from co-registered Red (B04) and Near-Infrared (B08) band rasters,
//! classifies the result into vegetation-health bands, and renders a
//! false-color visualization. An axum HTTP API exposes the pipeline for
//! file uploads.
//!
//! # Examples
//!
//! ## Computing NDVI from in-memory grids
//!
//! ```
//! use greenband::{BandGrid, Dimensions, compute_ndvi, classify};
//!
//! let dims = Dimensions::new(2, 1);
//! let red = BandGrid::new(dims, vec![0.1, 0.3])?;
//! let nir = BandGrid::new(dims, vec![0.5, 0.3])?;
//!
//! let ndvi = compute_ndvi(&red, &nir)?;
//! let stats = classify(&ndvi)?;
//!
//! assert_eq!(stats.total_valid_pixels, 2);
//! assert_eq!(stats.healthy_vegetation_percent, 50.0);
//! # Ok::<(), greenband::Error>(())
//! ```
//!
//! ## Decoding uploaded band files
//!
//! ```no_run
//! use greenband::{read_band, compute_ndvi};
//!
//! let red_bytes = std::fs::read("B04.tif")?;
//! let nir_bytes = std::fs::read("B08.tif")?;
//!
//! let red = read_band(&red_bytes, "B04.tif")?;
//! let nir = read_band(&nir_bytes, "B08.tif")?;
//! let ndvi = compute_ndvi(&red, &nir)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod api;
pub mod error;
pub mod io;
pub mod ndvi;
pub mod render;
pub mod stats;
pub mod types;

pub use error::{Error, Result};
pub use io::read_band;
pub use ndvi::compute_ndvi;
pub use render::render_ndvi_png;
pub use stats::{classify, HealthClass, NdviStatistics};
pub use types::{BandGrid, Dimensions};
