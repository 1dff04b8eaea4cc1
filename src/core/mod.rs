// Core algorithm exports
pub mod advisor;
pub mod evaluator;
pub mod fit;
pub mod mesh;
pub mod scale;
pub mod shape;

pub use advisor::{occasion_note, recommend_accessories, recommend_styling};
pub use evaluator::FitEvaluator;
pub use fit::{classify_fit, compare_measurements, describe_score, estimate_fit_score, ScoreBand};
pub use mesh::{generate_mesh, MeshEntity};
pub use scale::{ReferenceBaseline, ScaleFactors, DEFAULT_WAIST_SCALE};
pub use shape::{body_shape_guide, detect_body_shape, BodyShapeGuide};
