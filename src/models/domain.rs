use serde::{Deserialize, Serialize};

/// A user's body measurement profile.
///
/// All linear measurements are centimeters. A missing measurement is
/// `None`, never zero: downstream scale derivation falls back to the
/// reference baseline instead of collapsing the geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementProfile {
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub chest: Option<f64>,
    #[serde(default)]
    pub waist: Option<f64>,
    #[serde(default)]
    pub hips: Option<f64>,
    #[serde(default)]
    pub shoulder: Option<f64>,
    #[serde(rename = "bodyShape", default)]
    pub body_shape: BodyShape,
    #[serde(default)]
    pub gender: Gender,
    /// Cosmetic only; feeds the mesh color lookup, never scoring.
    #[serde(rename = "skinTone", default)]
    pub skin_tone: Option<String>,
}

/// Garment measurements attached to an outfit record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GarmentMeasurements {
    #[serde(default)]
    pub chest: Option<f64>,
    #[serde(default)]
    pub waist: Option<f64>,
    #[serde(default)]
    pub hips: Option<f64>,
}

/// Outfit metadata as delivered by the external CRUD layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutfitRecord {
    #[serde(default)]
    pub category: GarmentCategory,
    /// Raw occasion tag; parsed through [`Occasion::parse`] so
    /// unrecognized values take the casual branch of every rule.
    #[serde(default)]
    pub occasion: String,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub measurements: GarmentMeasurements,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BodyShape {
    Hourglass,
    Triangle,
    InvertedTriangle,
    Rectangle,
    Oval,
    #[default]
    Unknown,
}

impl BodyShape {
    /// Parse a raw tag; anything unrecognized is `Unknown`.
    pub fn parse(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "hourglass" => Self::Hourglass,
            "triangle" => Self::Triangle,
            "inverted_triangle" => Self::InvertedTriangle,
            "rectangle" => Self::Rectangle,
            "oval" => Self::Oval,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourglass => "hourglass",
            Self::Triangle => "triangle",
            Self::InvertedTriangle => "inverted_triangle",
            Self::Rectangle => "rectangle",
            Self::Oval => "oval",
            Self::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    /// Parse a raw tag; anything unrecognized is `Other`.
    pub fn parse(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Other,
        }
    }
}

/// Garment category; selects the silhouette template and the
/// category-specific advice tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GarmentCategory {
    Top,
    Bottom,
    Dress,
    Outerwear,
    FullBody,
    #[default]
    Other,
}

impl GarmentCategory {
    /// Parse a raw tag; unrecognized strings fall through to `Other`.
    pub fn parse(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            "dress" => Self::Dress,
            "outerwear" => Self::Outerwear,
            "full_body" => Self::FullBody,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Dress => "dress",
            Self::Outerwear => "outerwear",
            Self::FullBody => "full_body",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Formal,
    Party,
    Work,
    Sport,
    #[default]
    Casual,
    Other,
}

impl Occasion {
    /// Parse a raw tag. Unrecognized values resolve to `Casual` so
    /// every downstream rule takes its casual branch. The literal
    /// `"other"` stays distinct: the belt rule treats it as a
    /// dressed-up occasion.
    pub fn parse(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "formal" => Self::Formal,
            "party" => Self::Party,
            "work" => Self::Work,
            "sport" => Self::Sport,
            "other" => Self::Other,
            _ => Self::Casual,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Party => "party",
            Self::Work => "work",
            Self::Sport => "sport",
            Self::Casual => "casual",
            Self::Other => "other",
        }
    }
}

// Tag enums deserialize through their `parse` fallbacks so an unknown
// string is a defined value, never a deserialization error.
macro_rules! deserialize_via_parse {
    ($($ty:ty),+) => {
        $(impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let tag = String::deserialize(deserializer)?;
                Ok(Self::parse(&tag))
            }
        })+
    };
}

deserialize_via_parse!(BodyShape, Gender, GarmentCategory, Occasion);

/// Per-dimension fit label derived from a signed centimeter diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitClassification {
    Perfect,
    SlightlyLoose,
    Loose,
    SlightlyTight,
    TooTight,
    /// Non-finite diff; never silently resolved to `Perfect`.
    Indeterminate,
}

/// Aggregate fit status derived from the 0-100 score band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitStatus {
    Perfect,
    Good,
    Loose,
    Tight,
}

/// Measurement dimension tracked by the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Chest,
    Waist,
    Hips,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Waist => "waist",
            Self::Hips => "hips",
        }
    }

    /// Display label for recommendation text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Chest => "Chest",
            Self::Waist => "Waist",
            Self::Hips => "Hips",
        }
    }
}

/// Signed diff and its classification for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionFit {
    pub dimension: Dimension,
    /// `user - garment`, centimeters.
    pub diff: f64,
    pub classification: FitClassification,
}

/// Fresh per-dimension comparison of a user profile against a garment.
///
/// Computed on every evaluation, never cached. A dimension is `None`
/// when either side lacks the measurement; absent values are never
/// treated as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementComparison {
    pub chest: Option<DimensionFit>,
    pub waist: Option<DimensionFit>,
    pub hips: Option<DimensionFit>,
}

impl MeasurementComparison {
    /// Iterate the dimensions that were actually comparable.
    pub fn dimensions(&self) -> impl Iterator<Item = &DimensionFit> {
        [self.chest.as_ref(), self.waist.as_ref(), self.hips.as_ref()]
            .into_iter()
            .flatten()
    }
}

/// Complete local fit assessment for one user/outfit pairing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitReport {
    #[serde(rename = "fitScore")]
    pub fit_score: f64,
    #[serde(rename = "fitStatus")]
    pub fit_status: FitStatus,
    pub summary: String,
    pub comparison: MeasurementComparison,
    pub recommendations: Vec<String>,
}

/// Primitive used by a mesh segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Sphere,
    Cylinder,
    Box,
}

/// One renderable primitive of a generated mesh.
///
/// `dimensions` depends on the shape: `[radius]` for spheres,
/// `[radius_top, radius_bottom, height]` for cylinders and
/// `[width, height, depth]` for boxes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshSegment {
    pub id: String,
    pub shape: ShapeKind,
    pub position: [f64; 3],
    pub rotation: [f64; 3],
    pub dimensions: Vec<f64>,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessoryKind {
    Footwear,
    Jewelry,
    Bag,
    Other,
}

/// A single accessory recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accessory {
    pub kind: AccessoryKind,
    pub name: String,
    pub description: String,
}
