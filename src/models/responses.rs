use serde::{Deserialize, Serialize};

use crate::models::domain::{Accessory, FitReport, MeshSegment};

/// Response for a fit evaluation: the local fit report plus the
/// advice and mesh payloads the presentation layer renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateFitResponse {
    pub fit: FitReport,
    pub accessories: Vec<Accessory>,
    #[serde(rename = "stylingTips")]
    pub styling_tips: Vec<String>,
    #[serde(rename = "bodyMesh", default, skip_serializing_if = "Option::is_none")]
    pub body_mesh: Option<Vec<MeshSegment>>,
    #[serde(rename = "outfitMesh", default, skip_serializing_if = "Option::is_none")]
    pub outfit_mesh: Option<Vec<MeshSegment>>,
}
