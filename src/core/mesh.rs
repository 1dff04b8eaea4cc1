use std::f64::consts::PI;

use crate::core::scale::{ReferenceBaseline, ScaleFactors};
use crate::models::{GarmentCategory, Gender, MeasurementProfile, MeshSegment, ShapeKind};

/// Skin tone palette; explicit tag wins over any gender default.
const SKIN_TONE_COLORS: &[(&str, &str)] = &[
    ("fair", "#FFE4C4"),
    ("light", "#F5D5B8"),
    ("medium", "#D9A974"),
    ("tan", "#C68642"),
    ("brown", "#8D5524"),
    ("dark", "#5C3317"),
];

const MALE_BODY_COLOR: &str = "#6B9BD1";
const FEMALE_BODY_COLOR: &str = "#E8A0BF";
const DEFAULT_BODY_COLOR: &str = "#A8C4D6";

const DEFAULT_OUTFIT_COLOR: &str = "#FDCB6E";
const MARKER_COLOR: &str = "#333333";

/// What the mesh represents: the user's body or a garment silhouette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshEntity {
    Body,
    Garment(GarmentCategory),
}

/// Which scale factor a templated value is multiplied by.
#[derive(Debug, Clone, Copy)]
enum ScaleAxis {
    Fixed,
    Chest,
    Waist,
    Hips,
}

/// A base value plus the scale axis it stretches along.
#[derive(Debug, Clone, Copy)]
struct Scaled {
    base: f64,
    axis: ScaleAxis,
}

impl Scaled {
    fn resolve(&self, scales: &ScaleFactors) -> f64 {
        let factor = match self.axis {
            ScaleAxis::Fixed => 1.0,
            ScaleAxis::Chest => scales.chest,
            ScaleAxis::Waist => scales.waist,
            ScaleAxis::Hips => scales.hips,
        };
        self.base * factor
    }
}

const fn fixed(base: f64) -> Scaled {
    Scaled { base, axis: ScaleAxis::Fixed }
}

const fn by_chest(base: f64) -> Scaled {
    Scaled { base, axis: ScaleAxis::Chest }
}

const fn by_waist(base: f64) -> Scaled {
    Scaled { base, axis: ScaleAxis::Waist }
}

const fn by_hips(base: f64) -> Scaled {
    Scaled { base, axis: ScaleAxis::Hips }
}

#[derive(Debug, Clone, Copy)]
enum ShapeSpec {
    Sphere {
        radius: Scaled,
    },
    /// Upright cylinder; top and bottom radii may stretch along
    /// different axes so adjacent torso bands stay connected.
    Cylinder {
        radius_top: Scaled,
        radius_bottom: Scaled,
        length: Scaled,
    },
    Cuboid {
        width: f64,
        height: f64,
        depth: f64,
    },
}

/// One row of a mesh template. Vertical offsets are always multiplied
/// by the height scale; horizontal offsets stretch along the declared
/// axis so limbs track torso width. A mirrored row emits a left
/// segment and its exact `x -> -x` twin.
#[derive(Debug, Clone, Copy)]
struct SegmentSpec {
    id: &'static str,
    x: Scaled,
    y: f64,
    z: f64,
    z_rotation: f64,
    shape: ShapeSpec,
    mirrored: bool,
}

const fn axial(id: &'static str, y: f64, shape: ShapeSpec) -> SegmentSpec {
    SegmentSpec {
        id,
        x: fixed(0.0),
        y,
        z: 0.0,
        z_rotation: 0.0,
        shape,
        mirrored: false,
    }
}

/// Body template: 6 axial rows plus 5 mirrored rows, yielding the
/// fixed 16-segment sequence. Chest bands scale by chest, the waist
/// band tapers waist-to-chest and the hip band hips-to-waist so the
/// torso stays continuous; arms hang off chest width, legs off hip
/// width.
const BODY_TEMPLATE: &[SegmentSpec] = &[
    axial("head", 2.5, ShapeSpec::Sphere { radius: fixed(0.35) }),
    axial(
        "neck",
        2.1,
        ShapeSpec::Cylinder {
            radius_top: fixed(0.15),
            radius_bottom: fixed(0.2),
            length: fixed(0.3),
        },
    ),
    SegmentSpec {
        id: "shoulders",
        x: fixed(0.0),
        y: 1.9,
        z: 0.0,
        z_rotation: PI / 2.0,
        shape: ShapeSpec::Cylinder {
            radius_top: fixed(0.11),
            radius_bottom: fixed(0.11),
            length: by_chest(1.3),
        },
        mirrored: false,
    },
    axial(
        "torso_upper",
        1.5,
        ShapeSpec::Cylinder {
            radius_top: by_chest(0.35),
            radius_bottom: by_chest(0.4),
            length: fixed(0.8),
        },
    ),
    axial(
        "torso_mid",
        0.8,
        ShapeSpec::Cylinder {
            radius_top: by_waist(0.3),
            radius_bottom: by_chest(0.35),
            length: fixed(0.6),
        },
    ),
    axial(
        "torso_lower",
        0.3,
        ShapeSpec::Cylinder {
            radius_top: by_hips(0.35),
            radius_bottom: by_waist(0.3),
            length: fixed(0.5),
        },
    ),
    SegmentSpec {
        id: "upper_arm",
        x: by_chest(-0.6),
        y: 1.5,
        z: 0.0,
        z_rotation: PI / 6.0,
        shape: ShapeSpec::Cylinder {
            radius_top: fixed(0.1),
            radius_bottom: fixed(0.12),
            length: fixed(0.8),
        },
        mirrored: true,
    },
    SegmentSpec {
        id: "lower_arm",
        x: by_chest(-0.9),
        y: 0.9,
        z: 0.0,
        z_rotation: PI / 8.0,
        shape: ShapeSpec::Cylinder {
            radius_top: fixed(0.08),
            radius_bottom: fixed(0.1),
            length: fixed(0.8),
        },
        mirrored: true,
    },
    SegmentSpec {
        id: "upper_leg",
        x: by_hips(-0.18),
        y: -0.5,
        z: 0.0,
        z_rotation: 0.0,
        shape: ShapeSpec::Cylinder {
            radius_top: fixed(0.15),
            radius_bottom: fixed(0.18),
            length: fixed(1.0),
        },
        mirrored: true,
    },
    SegmentSpec {
        id: "lower_leg",
        x: by_hips(-0.18),
        y: -1.3,
        z: 0.0,
        z_rotation: 0.0,
        shape: ShapeSpec::Cylinder {
            radius_top: fixed(0.12),
            radius_bottom: fixed(0.15),
            length: fixed(1.0),
        },
        mirrored: true,
    },
    SegmentSpec {
        id: "foot",
        x: by_hips(-0.18),
        y: -1.9,
        z: 0.08,
        z_rotation: 0.0,
        shape: ShapeSpec::Cuboid {
            width: 0.2,
            height: 0.1,
            depth: 0.3,
        },
        mirrored: true,
    },
];

const TOP_TEMPLATE: &[SegmentSpec] = &[axial(
    "bodice",
    0.5,
    ShapeSpec::Cuboid {
        width: 1.2,
        height: 1.5,
        depth: 0.6,
    },
)];

const BOTTOM_TEMPLATE: &[SegmentSpec] = &[SegmentSpec {
    id: "leg",
    x: fixed(-0.3),
    y: -0.5,
    z: 0.0,
    z_rotation: 0.0,
    shape: ShapeSpec::Cylinder {
        radius_top: fixed(0.25),
        radius_bottom: fixed(0.3),
        length: fixed(1.5),
    },
    mirrored: true,
}];

const DRESS_TEMPLATE: &[SegmentSpec] = &[axial(
    "skirt",
    0.0,
    ShapeSpec::Cylinder {
        radius_top: fixed(0.8),
        radius_bottom: fixed(0.5),
        length: fixed(2.5),
    },
)];

/// Outerwear, full-body and anything unrecognized share this box.
const FULL_TEMPLATE: &[SegmentSpec] = &[axial(
    "shell",
    0.0,
    ShapeSpec::Cuboid {
        width: 1.4,
        height: 2.5,
        depth: 0.8,
    },
)];

/// Generate the ordered segment sequence for a body or garment.
///
/// Total over its input domain: missing or degenerate measurements
/// take the fallback scale, and every category string resolves to one
/// of the four silhouette templates.
pub fn generate_mesh(
    profile: &MeasurementProfile,
    entity: MeshEntity,
    baseline: &ReferenceBaseline,
) -> Vec<MeshSegment> {
    match entity {
        MeshEntity::Body => {
            let scales = ScaleFactors::derive(profile, baseline);
            let color = resolve_body_color(profile.skin_tone.as_deref(), profile.gender);
            place_template(BODY_TEMPLATE, &scales, color)
        }
        MeshEntity::Garment(category) => {
            let color = resolve_outfit_color(category);
            let mut segments =
                place_template(garment_template(category), &ScaleFactors::unit(), color);
            // Hanger marker the outfit viewer hangs above every silhouette.
            segments.push(MeshSegment {
                id: "marker".to_string(),
                shape: ShapeKind::Sphere,
                position: [0.0, 1.8, 0.0],
                rotation: [0.0, 0.0, 0.0],
                dimensions: vec![0.1],
                color: MARKER_COLOR.to_string(),
            });
            segments
        }
    }
}

fn garment_template(category: GarmentCategory) -> &'static [SegmentSpec] {
    match category {
        GarmentCategory::Top => TOP_TEMPLATE,
        GarmentCategory::Bottom => BOTTOM_TEMPLATE,
        GarmentCategory::Dress => DRESS_TEMPLATE,
        GarmentCategory::Outerwear | GarmentCategory::FullBody | GarmentCategory::Other => {
            FULL_TEMPLATE
        }
    }
}

/// Resolve a body color: explicit skin tone first, then gender, then
/// the global default. Hard precedence contract.
pub fn resolve_body_color(skin_tone: Option<&str>, gender: Gender) -> &'static str {
    if let Some(tone) = skin_tone {
        if let Some((_, color)) = SKIN_TONE_COLORS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(tone))
        {
            return color;
        }
    }
    match gender {
        Gender::Male => MALE_BODY_COLOR,
        Gender::Female => FEMALE_BODY_COLOR,
        Gender::Other => DEFAULT_BODY_COLOR,
    }
}

/// Resolve a garment color from the category table, falling back to
/// the fixed default for `Other`.
pub fn resolve_outfit_color(category: GarmentCategory) -> &'static str {
    match category {
        GarmentCategory::Top => "#FF6B6B",
        GarmentCategory::Bottom => "#4ECDC4",
        GarmentCategory::Dress => "#95E1D3",
        GarmentCategory::Outerwear => "#F38181",
        GarmentCategory::FullBody => "#AA96DA",
        GarmentCategory::Other => DEFAULT_OUTFIT_COLOR,
    }
}

/// Consume a template: one generic placement pass, so a new segment or
/// scale rule is a table edit rather than a renderer change.
fn place_template(
    template: &[SegmentSpec],
    scales: &ScaleFactors,
    color: &str,
) -> Vec<MeshSegment> {
    let mut segments = Vec::with_capacity(template.len() * 2);
    for spec in template {
        if spec.mirrored {
            let left = build_segment(spec, scales, color, Some("left"));
            let right = mirror_segment(&left, spec.id);
            segments.push(left);
            segments.push(right);
        } else {
            segments.push(build_segment(spec, scales, color, None));
        }
    }
    segments
}

fn build_segment(
    spec: &SegmentSpec,
    scales: &ScaleFactors,
    color: &str,
    side: Option<&str>,
) -> MeshSegment {
    let (shape, dimensions) = match spec.shape {
        ShapeSpec::Sphere { radius } => (ShapeKind::Sphere, vec![radius.resolve(scales)]),
        ShapeSpec::Cylinder {
            radius_top,
            radius_bottom,
            length,
        } => (
            ShapeKind::Cylinder,
            vec![
                radius_top.resolve(scales),
                radius_bottom.resolve(scales),
                length.resolve(scales),
            ],
        ),
        ShapeSpec::Cuboid { width, height, depth } => {
            (ShapeKind::Box, vec![width, height, depth])
        }
    };

    let id = match side {
        Some(side) => format!("{}_{}", side, spec.id),
        None => spec.id.to_string(),
    };

    MeshSegment {
        id,
        shape,
        position: [spec.x.resolve(scales), spec.y * scales.height, spec.z],
        rotation: [0.0, 0.0, spec.z_rotation],
        dimensions,
        color: color.to_string(),
    }
}

/// The right-hand twin is derived from the built left segment, never
/// recomputed: x and the z rotation flip sign, everything else is
/// copied bit-for-bit.
fn mirror_segment(left: &MeshSegment, base_id: &str) -> MeshSegment {
    MeshSegment {
        id: format!("right_{}", base_id),
        shape: left.shape,
        position: [-left.position[0], left.position[1], left.position[2]],
        rotation: [left.rotation[0], left.rotation[1], -left.rotation[2]],
        dimensions: left.dimensions.clone(),
        color: left.color.clone(),
    }
}
