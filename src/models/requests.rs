use serde::{Deserialize, Serialize};

use crate::models::domain::{MeasurementProfile, OutfitRecord};

/// Request to evaluate how an outfit fits a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateFitRequest {
    pub user: MeasurementProfile,
    pub outfit: OutfitRecord,
    /// Include the generated body and garment meshes in the response.
    #[serde(rename = "includeMesh", default = "default_include_mesh")]
    pub include_mesh: bool,
}

fn default_include_mesh() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_mesh_defaults_on() {
        let request: EvaluateFitRequest =
            serde_json::from_str(r#"{"user": {}, "outfit": {}}"#).unwrap();
        assert!(request.include_mesh);
    }
}
