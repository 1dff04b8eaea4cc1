use tracing::debug;

use crate::core::advisor::{recommend_accessories, recommend_styling};
use crate::core::fit::{compare_measurements, describe_score, estimate_fit_score};
use crate::core::mesh::{generate_mesh, MeshEntity};
use crate::core::scale::ReferenceBaseline;
use crate::models::{
    Accessory, EvaluateFitRequest, EvaluateFitResponse, FitReport, MeasurementProfile,
    MeshSegment, Occasion, OutfitRecord,
};

/// Main evaluation orchestrator.
///
/// Holds the configured reference baseline and runs the full local
/// pipeline for one user/outfit pairing:
/// 1. Per-dimension measurement comparison
/// 2. Local fit score estimate and banding
/// 3. Accessory and styling advice
/// 4. Optional body and garment mesh generation
///
/// Every step is a pure function; the evaluator exists so callers
/// configure the baseline once instead of threading it everywhere.
#[derive(Debug, Clone)]
pub struct FitEvaluator {
    baseline: ReferenceBaseline,
}

impl FitEvaluator {
    pub fn new(baseline: ReferenceBaseline) -> Self {
        Self { baseline }
    }

    pub fn with_default_baseline() -> Self {
        Self {
            baseline: ReferenceBaseline::default(),
        }
    }

    pub fn baseline(&self) -> &ReferenceBaseline {
        &self.baseline
    }

    /// Compare a user against an outfit and band the local estimate.
    pub fn evaluate(&self, user: &MeasurementProfile, outfit: &OutfitRecord) -> FitReport {
        let comparison = compare_measurements(user, &outfit.measurements);
        let (fit_score, recommendations) = estimate_fit_score(&comparison);
        let band = describe_score(fit_score);

        debug!(
            score = fit_score,
            status = ?band.status,
            category = outfit.category.as_str(),
            "evaluated outfit fit"
        );

        FitReport {
            fit_score,
            fit_status: band.status,
            summary: band.summary.to_string(),
            comparison,
            recommendations,
        }
    }

    /// Accessory picks for an outfit's occasion and category.
    pub fn accessories(&self, outfit: &OutfitRecord) -> Vec<Accessory> {
        recommend_accessories(Occasion::parse(&outfit.occasion), outfit.category)
    }

    /// Styling tips for a user/outfit pairing.
    pub fn styling_tips(&self, user: &MeasurementProfile, outfit: &OutfitRecord) -> Vec<String> {
        recommend_styling(
            user.body_shape,
            Occasion::parse(&outfit.occasion),
            outfit.category,
            &outfit.color,
        )
    }

    /// Body mesh for the user's measurements.
    pub fn body_mesh(&self, user: &MeasurementProfile) -> Vec<MeshSegment> {
        generate_mesh(user, MeshEntity::Body, &self.baseline)
    }

    /// Silhouette mesh for the outfit's category.
    pub fn outfit_mesh(&self, outfit: &OutfitRecord) -> Vec<MeshSegment> {
        generate_mesh(
            &MeasurementProfile::default(),
            MeshEntity::Garment(outfit.category),
            &self.baseline,
        )
    }

    /// Run the whole pipeline for one request.
    pub fn respond(&self, request: &EvaluateFitRequest) -> EvaluateFitResponse {
        let fit = self.evaluate(&request.user, &request.outfit);
        let accessories = self.accessories(&request.outfit);
        let styling_tips = self.styling_tips(&request.user, &request.outfit);

        let (body_mesh, outfit_mesh) = if request.include_mesh {
            (
                Some(self.body_mesh(&request.user)),
                Some(self.outfit_mesh(&request.outfit)),
            )
        } else {
            (None, None)
        };

        EvaluateFitResponse {
            fit,
            accessories,
            styling_tips,
            body_mesh,
            outfit_mesh,
        }
    }
}

impl Default for FitEvaluator {
    fn default() -> Self {
        Self::with_default_baseline()
    }
}
