use crate::models::{BodyShape, MeasurementProfile};

/// Bust and hips within this range count as balanced.
const BALANCED_CM: f64 = 2.5;
/// Waist definition needed for hourglass and triangle shapes.
const DEFINED_WAIST_CM: f64 = 18.0;

/// Auto-detect a body shape from measurements.
///
/// Requires chest, waist and hips; returns `None` when any of them is
/// missing or non-positive. Shoulder is optional and only sharpens
/// the inverted-triangle rule. Falls back to `Rectangle` when no
/// clearer pattern applies.
pub fn detect_body_shape(profile: &MeasurementProfile) -> Option<BodyShape> {
    let chest = positive(profile.chest)?;
    let waist = positive(profile.waist)?;
    let hips = positive(profile.hips)?;
    let shoulder = profile.shoulder.filter(|s| *s > 0.0);

    let bust_hip_diff = (chest - hips).abs();
    let waist_hip_diff = hips - waist;
    let waist_bust_diff = chest - waist;

    // Hourglass: bust and hips nearly equal, waist notably smaller.
    if bust_hip_diff <= BALANCED_CM
        && waist_hip_diff >= DEFINED_WAIST_CM
        && waist_bust_diff >= DEFINED_WAIST_CM
    {
        return Some(BodyShape::Hourglass);
    }

    // Triangle (pear): hips larger than bust.
    if hips - chest >= 5.0 && waist_hip_diff >= DEFINED_WAIST_CM {
        return Some(BodyShape::Triangle);
    }

    // Inverted triangle: bust or shoulders larger than hips.
    if chest - hips >= 9.0 || shoulder.is_some_and(|s| s - hips >= 5.0) {
        return Some(BodyShape::InvertedTriangle);
    }

    // Oval (apple): waist larger than, or close to, bust and hips.
    if waist >= chest - BALANCED_CM || waist >= hips - BALANCED_CM {
        return Some(BodyShape::Oval);
    }

    Some(BodyShape::Rectangle)
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0 && v.is_finite())
}

/// Style guidance for one body shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyShapeGuide {
    pub description: &'static str,
    pub best_styles: &'static [&'static str],
    pub avoid: &'static [&'static str],
}

/// Lookup the style guide for a shape; `Unknown` has none.
pub fn body_shape_guide(shape: BodyShape) -> Option<BodyShapeGuide> {
    let guide = match shape {
        BodyShape::Hourglass => BodyShapeGuide {
            description: "Balanced proportions with defined waist",
            best_styles: &[
                "Fitted and tailored pieces",
                "Wrap dresses",
                "High-waisted bottoms",
                "V-necklines",
                "Belted styles",
            ],
            avoid: &["Shapeless or boxy clothing", "Too loose or oversized fits"],
        },
        BodyShape::Triangle => BodyShapeGuide {
            description: "Hips wider than shoulders",
            best_styles: &[
                "A-line skirts and dresses",
                "Wide-leg pants",
                "Boat neck tops",
                "Embellished or detailed tops",
                "Dark colored bottoms",
            ],
            avoid: &["Skinny jeans", "Tapered pants", "Hip pockets"],
        },
        BodyShape::InvertedTriangle => BodyShapeGuide {
            description: "Shoulders wider than hips",
            best_styles: &[
                "V-neck tops",
                "A-line skirts",
                "Bootcut or wide-leg pants",
                "Detailed bottoms",
                "Dark tops with light bottoms",
            ],
            avoid: &[
                "Shoulder pads",
                "Boat necks",
                "Skinny pants without balance on top",
            ],
        },
        BodyShape::Rectangle => BodyShapeGuide {
            description: "Straight silhouette with minimal waist definition",
            best_styles: &[
                "Peplum tops",
                "Belted dresses",
                "Layered clothing",
                "Ruffles and details",
                "Curved hemlines",
            ],
            avoid: &["Straight, shapeless dresses", "Too boxy styles"],
        },
        BodyShape::Oval => BodyShapeGuide {
            description: "Rounded middle with slimmer legs",
            best_styles: &[
                "Empire waist dresses",
                "V-neck tops",
                "Flowing fabrics",
                "Structured jackets",
                "Monochromatic outfits",
            ],
            avoid: &["Tight fitted clothing", "Horizontal stripes", "Clingy fabrics"],
        },
        BodyShape::Unknown => return None,
    };
    Some(guide)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(chest: f64, waist: f64, hips: f64, shoulder: Option<f64>) -> MeasurementProfile {
        MeasurementProfile {
            chest: Some(chest),
            waist: Some(waist),
            hips: Some(hips),
            shoulder,
            ..Default::default()
        }
    }

    #[test]
    fn test_detect_hourglass() {
        let shape = detect_body_shape(&profile(95.0, 70.0, 96.0, None));
        assert_eq!(shape, Some(BodyShape::Hourglass));
    }

    #[test]
    fn test_detect_triangle() {
        let shape = detect_body_shape(&profile(88.0, 75.0, 98.0, None));
        assert_eq!(shape, Some(BodyShape::Triangle));
    }

    #[test]
    fn test_detect_inverted_triangle_by_chest() {
        let shape = detect_body_shape(&profile(104.0, 80.0, 92.0, None));
        assert_eq!(shape, Some(BodyShape::InvertedTriangle));
    }

    #[test]
    fn test_detect_inverted_triangle_by_shoulder() {
        let shape = detect_body_shape(&profile(94.0, 80.0, 92.0, Some(99.0)));
        assert_eq!(shape, Some(BodyShape::InvertedTriangle));
    }

    #[test]
    fn test_detect_oval() {
        let shape = detect_body_shape(&profile(92.0, 91.0, 95.0, None));
        assert_eq!(shape, Some(BodyShape::Oval));
    }

    #[test]
    fn test_detect_rectangle_fallback() {
        let shape = detect_body_shape(&profile(90.0, 78.0, 91.0, None));
        assert_eq!(shape, Some(BodyShape::Rectangle));
    }

    #[test]
    fn test_missing_measurement_yields_none() {
        let mut p = profile(90.0, 75.0, 95.0, None);
        p.waist = None;
        assert_eq!(detect_body_shape(&p), None);

        let zeroed = profile(90.0, 0.0, 95.0, None);
        assert_eq!(detect_body_shape(&zeroed), None);
    }

    #[test]
    fn test_guide_covers_every_detected_shape() {
        for shape in [
            BodyShape::Hourglass,
            BodyShape::Triangle,
            BodyShape::InvertedTriangle,
            BodyShape::Rectangle,
            BodyShape::Oval,
        ] {
            let guide = body_shape_guide(shape).expect("guide missing");
            assert!(!guide.best_styles.is_empty());
            assert!(!guide.avoid.is_empty());
        }
        assert!(body_shape_guide(BodyShape::Unknown).is_none());
    }
}
