use crate::models::{
    Dimension, DimensionFit, FitClassification, FitStatus, GarmentMeasurements,
    MeasurementComparison, MeasurementProfile,
};

/// Below this absolute diff (cm) a dimension counts as a perfect fit.
pub const SNUG_THRESHOLD_CM: f64 = 2.0;
/// Beyond this diff (cm) a dimension is outright loose (or too tight).
pub const ROOMY_THRESHOLD_CM: f64 = 5.0;

/// Score band edges shared with the external predictor's display
/// contract. Local approximation only; the server's own scoring is
/// authoritative.
pub const PERFECT_SCORE: f64 = 90.0;
pub const GOOD_SCORE: f64 = 75.0;
pub const LOOSE_SCORE: f64 = 50.0;

/// Classify a single signed diff (`user - garment`, centimeters).
///
/// Bounds are inclusive exactly as stated: `2.0` is already slightly
/// loose, `5.0` still is; `-2.0` is slightly tight, `-5.0` still is.
/// A non-finite diff maps to `Indeterminate` rather than a plausible
/// wrong label.
pub fn classify_fit(diff: f64) -> FitClassification {
    if !diff.is_finite() {
        return FitClassification::Indeterminate;
    }
    if diff.abs() < SNUG_THRESHOLD_CM {
        FitClassification::Perfect
    } else if diff >= SNUG_THRESHOLD_CM && diff <= ROOMY_THRESHOLD_CM {
        FitClassification::SlightlyLoose
    } else if diff > ROOMY_THRESHOLD_CM {
        FitClassification::Loose
    } else if diff >= -ROOMY_THRESHOLD_CM {
        FitClassification::SlightlyTight
    } else {
        FitClassification::TooTight
    }
}

/// Aggregate status plus its display summary for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBand {
    pub status: FitStatus,
    pub summary: &'static str,
}

/// Band a fit score. Half-open bands: 90 is perfect, 89.9 is good,
/// 50 is loose, 49.9 is tight. One classification rule for both
/// server-computed scores and local estimates.
pub fn describe_score(score: f64) -> ScoreBand {
    if score >= PERFECT_SCORE {
        ScoreBand {
            status: FitStatus::Perfect,
            summary: "Excellent fit! This outfit matches your measurements perfectly.",
        }
    } else if score >= GOOD_SCORE {
        ScoreBand {
            status: FitStatus::Good,
            summary: "Good fit! This outfit should work well for you with minor adjustments.",
        }
    } else if score >= LOOSE_SCORE {
        ScoreBand {
            status: FitStatus::Loose,
            summary: "Acceptable fit, but you may want to consider alterations.",
        }
    } else {
        ScoreBand {
            status: FitStatus::Tight,
            summary: "This outfit may not be the best fit. Consider trying a different size.",
        }
    }
}

/// Compare a user profile against garment measurements.
///
/// Diffs are signed `user - garment` and computed fresh per call. A
/// dimension where either side is missing stays `None`; absent
/// measurements are never treated as zero.
pub fn compare_measurements(
    user: &MeasurementProfile,
    garment: &GarmentMeasurements,
) -> MeasurementComparison {
    MeasurementComparison {
        chest: dimension_fit(Dimension::Chest, user.chest, garment.chest),
        waist: dimension_fit(Dimension::Waist, user.waist, garment.waist),
        hips: dimension_fit(Dimension::Hips, user.hips, garment.hips),
    }
}

fn dimension_fit(
    dimension: Dimension,
    user: Option<f64>,
    garment: Option<f64>,
) -> Option<DimensionFit> {
    let (user, garment) = (user?, garment?);
    let diff = user - garment;
    Some(DimensionFit {
        dimension,
        diff,
        classification: classify_fit(diff),
    })
}

/// Local estimate of the server's rule-based fit score.
///
/// Starts at 100 and deducts twice the overshoot for every dimension
/// whose absolute diff exceeds the roomy threshold, clamped to
/// [0, 100]. Returns the score and the per-dimension notes that go
/// with it.
pub fn estimate_fit_score(comparison: &MeasurementComparison) -> (f64, Vec<String>) {
    let mut score = 100.0;
    let mut notes = Vec::new();

    for fit in comparison.dimensions() {
        if !fit.diff.is_finite() {
            notes.push(format!(
                "{} measurement could not be compared",
                fit.dimension.label()
            ));
            continue;
        }
        if fit.diff.abs() > ROOMY_THRESHOLD_CM {
            score -= fit.diff.abs() * 2.0;
            let direction = if fit.diff > 0.0 { "loose" } else { "tight" };
            notes.push(format!(
                "{} fit may be {}",
                fit.dimension.label(),
                direction
            ));
        }
    }

    if notes.is_empty() {
        notes.push("Great fit! This outfit matches your measurements well.".to_string());
    }

    (score.clamp(0.0, 100.0), notes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BodyShape, Gender};

    fn user(chest: f64, waist: f64, hips: f64) -> MeasurementProfile {
        MeasurementProfile {
            height: Some(170.0),
            chest: Some(chest),
            waist: Some(waist),
            hips: Some(hips),
            shoulder: None,
            body_shape: BodyShape::Unknown,
            gender: Gender::Other,
            skin_tone: None,
        }
    }

    fn garment(chest: f64, waist: f64, hips: f64) -> GarmentMeasurements {
        GarmentMeasurements {
            chest: Some(chest),
            waist: Some(waist),
            hips: Some(hips),
        }
    }

    #[test]
    fn test_classify_boundary_values() {
        assert_eq!(classify_fit(1.99), FitClassification::Perfect);
        assert_eq!(classify_fit(-1.99), FitClassification::Perfect);
        assert_eq!(classify_fit(2.0), FitClassification::SlightlyLoose);
        assert_eq!(classify_fit(5.0), FitClassification::SlightlyLoose);
        assert_eq!(classify_fit(5.01), FitClassification::Loose);
        assert_eq!(classify_fit(-2.0), FitClassification::SlightlyTight);
        assert_eq!(classify_fit(-5.0), FitClassification::SlightlyTight);
        assert_eq!(classify_fit(-5.01), FitClassification::TooTight);
        assert_eq!(classify_fit(0.0), FitClassification::Perfect);
    }

    #[test]
    fn test_classify_non_finite_is_indeterminate() {
        assert_eq!(classify_fit(f64::NAN), FitClassification::Indeterminate);
        assert_eq!(classify_fit(f64::INFINITY), FitClassification::Indeterminate);
        assert_eq!(
            classify_fit(f64::NEG_INFINITY),
            FitClassification::Indeterminate
        );
    }

    #[test]
    fn test_score_band_edges_are_half_open() {
        assert_eq!(describe_score(90.0).status, FitStatus::Perfect);
        assert_eq!(describe_score(89.9).status, FitStatus::Good);
        assert_eq!(describe_score(75.0).status, FitStatus::Good);
        assert_eq!(describe_score(74.9).status, FitStatus::Loose);
        assert_eq!(describe_score(50.0).status, FitStatus::Loose);
        assert_eq!(describe_score(49.9).status, FitStatus::Tight);
        assert_eq!(describe_score(0.0).status, FitStatus::Tight);
        assert_eq!(describe_score(100.0).status, FitStatus::Perfect);
    }

    #[test]
    fn test_compare_signed_direction() {
        let comparison = compare_measurements(&user(96.0, 70.0, 90.0), &garment(90.0, 72.0, 96.0));

        let chest = comparison.chest.unwrap();
        assert_eq!(chest.diff, 6.0);
        assert_eq!(chest.classification, FitClassification::Loose);

        let waist = comparison.waist.unwrap();
        assert_eq!(waist.diff, -2.0);
        assert_eq!(waist.classification, FitClassification::SlightlyTight);

        let hips = comparison.hips.unwrap();
        assert_eq!(hips.diff, -6.0);
        assert_eq!(hips.classification, FitClassification::TooTight);
    }

    #[test]
    fn test_missing_side_leaves_dimension_unknown() {
        let mut profile = user(96.0, 70.0, 90.0);
        profile.waist = None;
        let mut garment = garment(90.0, 72.0, 96.0);
        garment.hips = None;

        let comparison = compare_measurements(&profile, &garment);
        assert!(comparison.chest.is_some());
        assert!(comparison.waist.is_none());
        assert!(comparison.hips.is_none());
    }

    #[test]
    fn test_estimate_perfect_score_for_close_fit() {
        let comparison = compare_measurements(&user(91.0, 76.0, 94.0), &garment(90.0, 75.0, 95.0));
        let (score, notes) = estimate_fit_score(&comparison);
        assert_eq!(score, 100.0);
        assert_eq!(notes.len(), 1);
        assert!(notes[0].starts_with("Great fit"));
    }

    #[test]
    fn test_estimate_deducts_twice_the_overshoot() {
        // Chest diff +8 -> -16 points; others within threshold.
        let comparison = compare_measurements(&user(98.0, 75.0, 95.0), &garment(90.0, 75.0, 95.0));
        let (score, notes) = estimate_fit_score(&comparison);
        assert_eq!(score, 84.0);
        assert_eq!(notes, vec!["Chest fit may be loose".to_string()]);
    }

    #[test]
    fn test_estimate_clamps_to_zero() {
        let comparison = compare_measurements(&user(140.0, 130.0, 150.0), &garment(90.0, 75.0, 95.0));
        let (score, _) = estimate_fit_score(&comparison);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_estimate_notes_tight_direction() {
        let comparison = compare_measurements(&user(80.0, 75.0, 95.0), &garment(90.0, 75.0, 95.0));
        let (_, notes) = estimate_fit_score(&comparison);
        assert_eq!(notes, vec!["Chest fit may be tight".to_string()]);
    }
}
