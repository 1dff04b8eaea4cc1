use serde::{Deserialize, Serialize};

use crate::models::MeasurementProfile;

/// Fallback waist scale when the waist measurement is unknown.
/// A straight-sided default torso looks wrong; a slight taper does not.
pub const DEFAULT_WAIST_SCALE: f64 = 0.85;

/// Average human measurements used as the denominator for every
/// scale-factor computation. Constants by default; changed only
/// through an explicit config override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceBaseline {
    pub height_cm: f64,
    pub chest_cm: f64,
    pub waist_cm: f64,
    pub hips_cm: f64,
}

impl Default for ReferenceBaseline {
    fn default() -> Self {
        Self {
            height_cm: 170.0,
            chest_cm: 90.0,
            waist_cm: 75.0,
            hips_cm: 95.0,
        }
    }
}

/// The four scalars that fully parameterize a body mesh.
///
/// Derived, never stored. A missing or non-positive measurement takes
/// the component fallback instead of dividing by the baseline, so the
/// geometry never degenerates or divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactors {
    pub height: f64,
    pub chest: f64,
    pub waist: f64,
    pub hips: f64,
}

impl ScaleFactors {
    /// Derive scale factors from a profile against a baseline.
    pub fn derive(profile: &MeasurementProfile, baseline: &ReferenceBaseline) -> Self {
        Self {
            height: ratio_or(profile.height, baseline.height_cm, 1.0),
            chest: ratio_or(profile.chest, baseline.chest_cm, 1.0),
            waist: ratio_or(profile.waist, baseline.waist_cm, DEFAULT_WAIST_SCALE),
            hips: ratio_or(profile.hips, baseline.hips_cm, 1.0),
        }
    }

    /// Neutral scales; used for garment silhouettes, which are fixed
    /// templates rather than measurement-driven.
    pub fn unit() -> Self {
        Self {
            height: 1.0,
            chest: 1.0,
            waist: 1.0,
            hips: 1.0,
        }
    }
}

#[inline]
fn ratio_or(value: Option<f64>, baseline: f64, fallback: f64) -> f64 {
    match value {
        Some(v) if v > 0.0 && v.is_finite() => v / baseline,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn profile(height: f64, chest: f64, waist: f64, hips: f64) -> MeasurementProfile {
        MeasurementProfile {
            height: Some(height),
            chest: Some(chest),
            waist: Some(waist),
            hips: Some(hips),
            ..Default::default()
        }
    }

    #[test]
    fn test_baseline_profile_scales_to_one() {
        let scales = ScaleFactors::derive(
            &profile(170.0, 90.0, 75.0, 95.0),
            &ReferenceBaseline::default(),
        );
        assert_relative_eq!(scales.height, 1.0);
        assert_relative_eq!(scales.chest, 1.0);
        assert_relative_eq!(scales.waist, 1.0);
        assert_relative_eq!(scales.hips, 1.0);
    }

    #[test]
    fn test_missing_measurements_use_fallbacks() {
        let scales = ScaleFactors::derive(
            &MeasurementProfile::default(),
            &ReferenceBaseline::default(),
        );
        assert_relative_eq!(scales.height, 1.0);
        assert_relative_eq!(scales.chest, 1.0);
        assert_relative_eq!(scales.waist, DEFAULT_WAIST_SCALE);
        assert_relative_eq!(scales.hips, 1.0);
    }

    #[test]
    fn test_zero_and_negative_hit_fallback_not_divide() {
        let scales = ScaleFactors::derive(
            &profile(0.0, -5.0, 0.0, -1.0),
            &ReferenceBaseline::default(),
        );
        assert_relative_eq!(scales.height, 1.0);
        assert_relative_eq!(scales.chest, 1.0);
        assert_relative_eq!(scales.waist, DEFAULT_WAIST_SCALE);
        assert_relative_eq!(scales.hips, 1.0);
    }

    #[test]
    fn test_scales_are_monotonic_and_independent() {
        let baseline = ReferenceBaseline::default();
        let small = ScaleFactors::derive(&profile(170.0, 90.0, 75.0, 95.0), &baseline);
        let bigger_chest = ScaleFactors::derive(&profile(170.0, 100.0, 75.0, 95.0), &baseline);

        assert!(bigger_chest.chest > small.chest);
        assert_relative_eq!(bigger_chest.height, small.height);
        assert_relative_eq!(bigger_chest.waist, small.waist);
        assert_relative_eq!(bigger_chest.hips, small.hips);
    }

    #[test]
    fn test_non_finite_measurement_falls_back() {
        let scales = ScaleFactors::derive(
            &profile(f64::NAN, f64::INFINITY, 75.0, 95.0),
            &ReferenceBaseline::default(),
        );
        assert_relative_eq!(scales.height, 1.0);
        assert_relative_eq!(scales.chest, 1.0);
        assert_relative_eq!(scales.waist, 1.0);
    }
}
