//! FitMate Core - deterministic fit assessment for the FitMate wardrobe client
//!
//! This library holds the client-side algorithmic core: a proportional
//! mesh generator that turns body measurements into a primitive-based
//! humanoid (or garment silhouette), and a fit & styling advisor that
//! classifies measurement diffs and produces accessory and styling
//! recommendations. Everything here is a pure, total function; the
//! surrounding app handles transport, persistence and rendering.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{
    classify_fit, describe_score, detect_body_shape, generate_mesh, recommend_accessories,
    recommend_styling, FitEvaluator, MeshEntity, ReferenceBaseline, ScaleFactors,
};
pub use crate::models::{
    Accessory, EvaluateFitRequest, EvaluateFitResponse, FitClassification, FitReport, FitStatus,
    GarmentCategory, MeasurementProfile, MeshSegment, Occasion, OutfitRecord,
};
