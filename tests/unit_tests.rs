// Unit tests for FitMate core

use fitmate_core::core::fit::{classify_fit, describe_score};
use fitmate_core::core::mesh::{generate_mesh, MeshEntity};
use fitmate_core::core::scale::{ReferenceBaseline, ScaleFactors, DEFAULT_WAIST_SCALE};
use fitmate_core::models::{
    FitClassification, FitStatus, GarmentCategory, Gender, MeasurementProfile, Occasion,
};
use fitmate_core::{recommend_accessories, recommend_styling};

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
fn test_classify_fit_boundaries_exact() {
    assert_eq!(classify_fit(1.99), FitClassification::Perfect);
    assert_eq!(classify_fit(2.0), FitClassification::SlightlyLoose);
    assert_eq!(classify_fit(5.0), FitClassification::SlightlyLoose);
    assert_eq!(classify_fit(5.01), FitClassification::Loose);
    assert_eq!(classify_fit(-2.0), FitClassification::SlightlyTight);
    assert_eq!(classify_fit(-5.0), FitClassification::SlightlyTight);
    assert_eq!(classify_fit(-5.01), FitClassification::TooTight);
}

#[test]
fn test_classify_fit_nan_is_not_perfect() {
    assert_eq!(classify_fit(f64::NAN), FitClassification::Indeterminate);
}

#[test]
fn test_describe_score_band_edges() {
    assert_eq!(describe_score(90.0).status, FitStatus::Perfect);
    assert_eq!(describe_score(89.9).status, FitStatus::Good);
    assert_eq!(describe_score(50.0).status, FitStatus::Loose);
    assert_eq!(describe_score(49.9).status, FitStatus::Tight);
}

#[test]
fn test_describe_score_summaries() {
    assert!(describe_score(95.0).summary.starts_with("Excellent fit"));
    assert!(describe_score(60.0).summary.contains("alterations"));
    assert!(describe_score(20.0).summary.contains("different size"));
}

#[test]
fn test_body_mesh_segment_count_and_order() {
    let segments = generate_mesh(
        &profile(170.0, 90.0, 75.0, 95.0),
        MeshEntity::Body,
        &ReferenceBaseline::default(),
    );

    assert_eq!(segments.len(), 16);
    // Fixed identity and order regardless of measurements.
    assert_eq!(segments[0].id, "head");
    assert_eq!(segments[1].id, "neck");
    let tall = generate_mesh(
        &profile(190.0, 110.0, 95.0, 115.0),
        MeshEntity::Body,
        &ReferenceBaseline::default(),
    );
    let ids: Vec<&str> = segments.iter().map(|s| s.id.as_str()).collect();
    let tall_ids: Vec<&str> = tall.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, tall_ids);
}

#[test]
fn test_body_mesh_mirroring() {
    let segments = generate_mesh(
        &profile(165.0, 98.0, 64.0, 102.0),
        MeshEntity::Body,
        &ReferenceBaseline::default(),
    );

    for left in segments.iter().filter(|s| s.id.starts_with("left_")) {
        let right_id = left.id.replacen("left_", "right_", 1);
        let right = segments.iter().find(|s| s.id == right_id).unwrap();
        assert_eq!(right.position[0], -left.position[0]);
        assert_eq!(right.rotation[2], -left.rotation[2]);
        assert_eq!(right.dimensions, left.dimensions);
    }
}

#[test]
fn test_scale_factors_fallbacks_and_monotonicity() {
    let baseline = ReferenceBaseline::default();
    let empty = ScaleFactors::derive(&MeasurementProfile::default(), &baseline);
    assert_eq!(empty.waist, DEFAULT_WAIST_SCALE);
    assert_eq!(empty.chest, 1.0);
    assert_eq!(empty.hips, 1.0);

    let a = ScaleFactors::derive(&profile(170.0, 90.0, 75.0, 95.0), &baseline);
    let b = ScaleFactors::derive(&profile(170.0, 90.0, 80.0, 95.0), &baseline);
    assert!(b.waist > a.waist);
    assert_eq!(b.chest, a.chest);
    assert_eq!(b.hips, a.hips);
    assert_eq!(b.height, a.height);
}

#[test]
fn test_garment_mesh_total_over_categories() {
    let baseline = ReferenceBaseline::default();
    let user = MeasurementProfile::default();

    for raw in ["top", "bottom", "dress", "outerwear", "full_body", "hat", ""] {
        let category = GarmentCategory::parse(raw);
        let segments = generate_mesh(&user, MeshEntity::Garment(category), &baseline);
        assert!(!segments.is_empty(), "category {:?} produced no mesh", raw);
    }
}

#[test]
fn test_accessories_formal_dress_contract() {
    let recs = recommend_accessories(Occasion::Formal, GarmentCategory::Dress);
    assert_eq!(recs.len(), 4);
    assert_eq!(recs[3].name, "Belt");
}

#[test]
fn test_accessories_unknown_occasion_equals_casual() {
    let unknown = recommend_accessories(Occasion::parse("unknown_value"), GarmentCategory::Top);
    let casual = recommend_accessories(Occasion::Casual, GarmentCategory::Top);
    assert_eq!(unknown, casual);
}

#[test]
fn test_styling_never_empty() {
    // Even fully-unknown tags yield the generic body tips plus the
    // color base section.
    let tips = recommend_styling(
        fitmate_core::models::BodyShape::Unknown,
        Occasion::Other,
        GarmentCategory::Other,
        "",
    );
    assert_eq!(tips.len(), 6);
}

#[test]
fn test_mesh_gender_fallback_color() {
    let male = MeasurementProfile {
        gender: Gender::Male,
        ..Default::default()
    };
    let segments = generate_mesh(&male, MeshEntity::Body, &ReferenceBaseline::default());
    assert!(segments.iter().all(|s| s.color == "#6B9BD1"));
}
