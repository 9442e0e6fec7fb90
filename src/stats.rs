//! Vegetation-health classification and summary statistics.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::types::BandGrid;

/// Vegetation-health band for a single NDVI value.
///
/// Bands are ordered and non-overlapping; every finite value belongs to
/// exactly one. Boundaries belong to the lower band (0.2 is bare land,
/// not stressed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthClass {
    /// NDVI <= 0.2: soil, water, urban surfaces
    BareLand,
    /// 0.2 < NDVI <= 0.4: sparse or stressed vegetation
    Stressed,
    /// 0.4 < NDVI <= 0.6: moderate canopy
    Moderate,
    /// NDVI > 0.6: dense healthy vegetation
    Healthy,
}

impl HealthClass {
    /// Classifies a single NDVI value.
    ///
    /// The boundary convention (upper edge inclusive) is a fixed
    /// contract; keep it in this one place.
    pub fn of(value: f32) -> Self {
        if value > 0.6 {
            HealthClass::Healthy
        } else if value > 0.4 {
            HealthClass::Moderate
        } else if value > 0.2 {
            HealthClass::Stressed
        } else {
            HealthClass::BareLand
        }
    }

    /// Returns the name of this class
    pub fn name(&self) -> &'static str {
        match self {
            HealthClass::BareLand => "bare_land",
            HealthClass::Stressed => "stressed",
            HealthClass::Moderate => "moderate",
            HealthClass::Healthy => "healthy",
        }
    }
}

/// Summary statistics over the finite pixels of an NDVI grid.
///
/// Percentages are rounded to 2 decimals, NDVI values to 3; rounding
/// happens once here, at the reporting boundary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NdviStatistics {
    pub healthy_vegetation_percent: f64,
    pub moderate_vegetation_percent: f64,
    pub stressed_vegetation_percent: f64,
    pub bare_land_percent: f64,
    pub mean_ndvi: f64,
    pub std_ndvi: f64,
    pub min_ndvi: f64,
    pub max_ndvi: f64,
    pub total_valid_pixels: u64,
}

/// Classifies an NDVI grid into health bands and aggregates statistics.
///
/// Non-finite values (NaN, ±Inf from upstream no-data sentinels) are
/// masked out first. Fails with [`Error::NoValidPixels`] when nothing
/// finite remains; an all-masked scene has nothing meaningful to report
/// and silently returning zeros would be misleading.
pub fn classify(ndvi: &BandGrid) -> Result<NdviStatistics> {
    let mut healthy = 0u64;
    let mut moderate = 0u64;
    let mut stressed = 0u64;
    let mut bare = 0u64;
    let mut sum = 0.0f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;

    for &v in ndvi.data() {
        if !v.is_finite() {
            continue;
        }
        match HealthClass::of(v) {
            HealthClass::Healthy => healthy += 1,
            HealthClass::Moderate => moderate += 1,
            HealthClass::Stressed => stressed += 1,
            HealthClass::BareLand => bare += 1,
        }
        let v = v as f64;
        sum += v;
        min = min.min(v);
        max = max.max(v);
    }

    let total = healthy + moderate + stressed + bare;
    if total == 0 {
        return Err(Error::NoValidPixels);
    }

    let mean = sum / total as f64;

    // Second pass for the population standard deviation; intermediates
    // stay in full precision, only the report is rounded.
    let mut sq_sum = 0.0f64;
    for &v in ndvi.data() {
        if v.is_finite() {
            let d = v as f64 - mean;
            sq_sum += d * d;
        }
    }
    let std = (sq_sum / total as f64).sqrt();

    let percent = |count: u64| round2(100.0 * count as f64 / total as f64);

    Ok(NdviStatistics {
        healthy_vegetation_percent: percent(healthy),
        moderate_vegetation_percent: percent(moderate),
        stressed_vegetation_percent: percent(stressed),
        bare_land_percent: percent(bare),
        mean_ndvi: round3(mean),
        std_ndvi: round3(std),
        min_ndvi: round3(min),
        max_ndvi: round3(max),
        total_valid_pixels: total,
    })
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dimensions;

    fn grid(values: Vec<f32>) -> BandGrid {
        BandGrid::new(Dimensions::new(values.len(), 1), values).unwrap()
    }

    #[test]
    fn test_boundary_values_belong_to_lower_band() {
        assert_eq!(HealthClass::of(0.2), HealthClass::BareLand);
        assert_eq!(HealthClass::of(0.4), HealthClass::Stressed);
        assert_eq!(HealthClass::of(0.6), HealthClass::Moderate);
        assert_eq!(HealthClass::of(0.2000001), HealthClass::Stressed);
        assert_eq!(HealthClass::of(0.6000001), HealthClass::Healthy);
        assert_eq!(HealthClass::of(-1.0), HealthClass::BareLand);
        assert_eq!(HealthClass::of(1.0), HealthClass::Healthy);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(HealthClass::BareLand.name(), "bare_land");
        assert_eq!(HealthClass::Healthy.name(), "healthy");
    }

    #[test]
    fn test_one_pixel_per_class() {
        let stats = classify(&grid(vec![0.1, 0.3, 0.5, 0.7])).unwrap();
        assert_eq!(stats.total_valid_pixels, 4);
        assert_eq!(stats.bare_land_percent, 25.0);
        assert_eq!(stats.stressed_vegetation_percent, 25.0);
        assert_eq!(stats.moderate_vegetation_percent, 25.0);
        assert_eq!(stats.healthy_vegetation_percent, 25.0);
        assert_eq!(stats.min_ndvi, 0.1);
        assert_eq!(stats.max_ndvi, 0.7);
        assert_eq!(stats.mean_ndvi, 0.4);
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let stats = classify(&grid(vec![0.05, 0.15, 0.25, 0.45, 0.65, 0.85, 0.95])).unwrap();
        let sum = stats.healthy_vegetation_percent
            + stats.moderate_vegetation_percent
            + stats.stressed_vegetation_percent
            + stats.bare_land_percent;
        assert!((sum - 100.0).abs() <= 0.01, "sum was {}", sum);
    }

    #[test]
    fn test_non_finite_values_are_masked() {
        let stats = classify(&grid(vec![f32::NAN, 0.5, f32::INFINITY, f32::NEG_INFINITY])).unwrap();
        assert_eq!(stats.total_valid_pixels, 1);
        assert_eq!(stats.moderate_vegetation_percent, 100.0);
        assert_eq!(stats.mean_ndvi, 0.5);
        assert_eq!(stats.std_ndvi, 0.0);
    }

    #[test]
    fn test_all_non_finite_fails() {
        let err = classify(&grid(vec![f32::NAN, f32::NAN])).unwrap_err();
        assert!(matches!(err, Error::NoValidPixels));
    }

    #[test]
    fn test_all_dark_scene_is_bare_land() {
        // 0.0 is finite, so an all-dark grid classifies cleanly.
        let stats = classify(&grid(vec![0.0; 8])).unwrap();
        assert_eq!(stats.total_valid_pixels, 8);
        assert_eq!(stats.bare_land_percent, 100.0);
        assert_eq!(stats.mean_ndvi, 0.0);
    }

    #[test]
    fn test_population_std() {
        // values -0.5 and 0.5: mean 0, population std 0.5
        let stats = classify(&grid(vec![-0.5, 0.5])).unwrap();
        assert_eq!(stats.mean_ndvi, 0.0);
        assert_eq!(stats.std_ndvi, 0.5);
    }

    #[test]
    fn test_rounding_at_report_boundary() {
        // 1/3 of pixels healthy -> 33.33 after rounding
        let stats = classify(&grid(vec![0.7, 0.1, 0.1])).unwrap();
        assert_eq!(stats.healthy_vegetation_percent, 33.33);
        assert_eq!(stats.bare_land_percent, 66.67);
    }

    #[test]
    fn test_idempotent() {
        let g = grid(vec![0.1, 0.35, 0.55, 0.75, f32::NAN]);
        assert_eq!(classify(&g).unwrap(), classify(&g).unwrap());
    }

    #[test]
    fn test_serializes_all_fields() {
        let stats = classify(&grid(vec![0.7])).unwrap();
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["healthy_vegetation_percent"], 100.0);
        assert_eq!(json["total_valid_pixels"], 1);
        assert!(json.get("std_ndvi").is_some());
    }
}
