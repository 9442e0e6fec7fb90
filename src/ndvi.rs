//! Normalized Difference Vegetation Index transform.
//!
//! NDVI = (NIR - RED) / (NIR + RED), computed per pixel over two
//! co-registered single-band grids. Healthy vegetation reflects NIR
//! strongly and absorbs red, so values near +1 indicate dense canopy.

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::types::BandGrid;

/// Denominators at or below this magnitude count as "no signal".
/// Catches float noise around zero, not just exact zero.
const DENOMINATOR_EPSILON: f32 = 1e-6;

/// Computes the NDVI grid from red and near-infrared bands.
///
/// Both grids must share identical dimensions; a mismatch fails with
/// [`Error::ShapeMismatch`] carrying both shapes.
///
/// Pixels where both bands are (near) zero produce NDVI = 0.0 rather
/// than NaN. Dark pixels read as "no signal"; downstream classification
/// relies on receiving a finite value here, so this policy is part of
/// the contract. All other finite inputs produce values clamped to
/// [-1.0, 1.0].
pub fn compute_ndvi(red: &BandGrid, nir: &BandGrid) -> Result<BandGrid> {
    if red.dimensions() != nir.dimensions() {
        return Err(Error::ShapeMismatch {
            red: red.dimensions(),
            nir: nir.dimensions(),
        });
    }

    let red_data = red.data();
    let nir_data = nir.data();
    let mut result = vec![0.0f32; red_data.len()];

    // Element-wise, so the parallel split cannot change results.
    result.par_iter_mut().enumerate().for_each(|(i, out)| {
        let r = red_data[i];
        let n = nir_data[i];
        let den = n + r;

        *out = if den.abs() > DENOMINATOR_EPSILON {
            // Clamp absorbs residual float overshoot past the
            // theoretical range; NaN from non-finite inputs passes
            // through and is masked by the classifier.
            ((n - r) / den).clamp(-1.0, 1.0)
        } else {
            0.0
        };
    });

    BandGrid::new(red.dimensions(), result)
}
