use crate::models::{Accessory, AccessoryKind, BodyShape, GarmentCategory, Occasion};

/// Fixed footwear pick per occasion. Formal and work share a row;
/// casual, sport and other take the everyday row.
fn footwear_rule(occasion: Occasion) -> (&'static str, &'static str) {
    match occasion {
        Occasion::Formal | Occasion::Work => (
            "Classic Heels",
            "Perfect for formal occasions and professional settings",
        ),
        Occasion::Party => (
            "Stylish Heels or Dress Shoes",
            "Elevate your party look with elegant footwear",
        ),
        Occasion::Casual | Occasion::Sport | Occasion::Other => (
            "Comfortable Sneakers or Flats",
            "Perfect for casual and everyday wear",
        ),
    }
}

fn jewelry_rule(occasion: Occasion) -> (&'static str, &'static str) {
    match occasion {
        Occasion::Formal | Occasion::Party => (
            "Statement Necklace & Earrings",
            "Add sparkle with elegant jewelry pieces",
        ),
        Occasion::Work => (
            "Minimal Jewelry Set",
            "Simple and professional jewelry for the workplace",
        ),
        Occasion::Casual | Occasion::Sport | Occasion::Other => (
            "Casual Accessories",
            "Simple bracelets or earrings for everyday style",
        ),
    }
}

fn bag_rule(occasion: Occasion) -> (&'static str, &'static str) {
    match occasion {
        Occasion::Formal => ("Clutch or Evening Bag", "Elegant small bag for formal events"),
        Occasion::Work => (
            "Professional Tote or Laptop Bag",
            "Practical and stylish for the office",
        ),
        Occasion::Party => (
            "Stylish Crossbody or Clutch",
            "Fashionable bag for social events",
        ),
        Occasion::Casual | Occasion::Sport | Occasion::Other => (
            "Casual Shoulder Bag or Backpack",
            "Comfortable and practical for daily use",
        ),
    }
}

fn accessory(kind: AccessoryKind, (name, description): (&str, &str)) -> Accessory {
    Accessory {
        kind,
        name: name.to_string(),
        description: description.to_string(),
    }
}

/// Recommend accessories for an occasion and garment category.
///
/// Always one footwear, one jewelry and one bag entry in that order,
/// then the conditional extras: a belt for a dress outside casual
/// wear, and a watch or tracker for casual and sport occasions.
/// Deterministic lookup, no randomness; callers parse raw occasion
/// strings with [`Occasion::parse`] so unknown tags take the casual
/// rows.
pub fn recommend_accessories(occasion: Occasion, category: GarmentCategory) -> Vec<Accessory> {
    let mut recommendations = vec![
        accessory(AccessoryKind::Footwear, footwear_rule(occasion)),
        accessory(AccessoryKind::Jewelry, jewelry_rule(occasion)),
        accessory(AccessoryKind::Bag, bag_rule(occasion)),
    ];

    if category == GarmentCategory::Dress && occasion != Occasion::Casual {
        recommendations.push(accessory(
            AccessoryKind::Other,
            ("Belt", "Cinch your waist for a more defined silhouette"),
        ));
    }

    if matches!(occasion, Occasion::Casual | Occasion::Sport) {
        recommendations.push(accessory(
            AccessoryKind::Other,
            (
                "Watch or Fitness Tracker",
                "Functional accessory for everyday wear",
            ),
        ));
    }

    recommendations
}

/// One-line accessory note per occasion, shown under the grid.
pub fn occasion_note(occasion: Occasion) -> &'static str {
    match occasion {
        Occasion::Formal => {
            "For formal events, keep accessories elegant and coordinated. Less is often more."
        }
        Occasion::Party => {
            "Party outfits are perfect for bold accessories. Don't be afraid to make a statement!"
        }
        Occasion::Work => {
            "Keep work accessories professional and minimal to maintain a polished appearance."
        }
        Occasion::Casual | Occasion::Sport | Occasion::Other => {
            "For casual wear, mix and match accessories to express your personal style!"
        }
    }
}

/// Three tips per body shape; the unknown shape gets the generic
/// confidence set rather than nothing.
fn body_shape_tips(shape: BodyShape) -> [&'static str; 3] {
    match shape {
        BodyShape::Hourglass => [
            "Emphasize your balanced proportions with fitted clothing",
            "Wrap dresses and belted styles work wonderfully",
            "V-necklines and scoop necks complement your shape",
        ],
        BodyShape::Triangle => [
            "Balance wider hips with detailed or structured tops",
            "A-line skirts and wide-leg pants are flattering",
            "Boat necks and off-shoulder styles draw attention upward",
        ],
        BodyShape::InvertedTriangle => [
            "Balance broader shoulders with A-line or flared bottoms",
            "V-necks and vertical details create a slimming effect",
            "Darker colors on top, lighter on bottom create balance",
        ],
        BodyShape::Rectangle => [
            "Create curves with peplum tops and belted dresses",
            "Layering adds dimension to your silhouette",
            "Ruffles and details at bust or hips add definition",
        ],
        BodyShape::Oval => [
            "Empire waist and A-line cuts are very flattering",
            "V-necks elongate the torso beautifully",
            "Structured fabrics and vertical lines create a streamlined look",
        ],
        BodyShape::Unknown => [
            "Focus on what makes you feel confident and comfortable",
            "Experiment with different styles to find your favorites",
            "The best outfit is one that makes you feel amazing",
        ],
    }
}

/// Three tips per recognized occasion; `Other` contributes nothing.
fn occasion_tips(occasion: Occasion) -> &'static [&'static str] {
    match occasion {
        Occasion::Formal => &[
            "Stick to classic silhouettes and quality fabrics",
            "Opt for neutral or jewel tones for elegance",
            "Keep accessories sophisticated and coordinated",
        ],
        Occasion::Party => &[
            "Bold colors and statement pieces are perfect",
            "Metallic accents and sequins add festive flair",
            "Don't shy away from trendy styles and accessories",
        ],
        Occasion::Work => &[
            "Choose structured, professional pieces",
            "Neutral colors with subtle patterns work best",
            "Ensure proper fit for a polished appearance",
        ],
        Occasion::Casual => &[
            "Comfort is key - choose breathable fabrics",
            "Mix and match pieces for versatile looks",
            "Add personality with fun accessories",
        ],
        Occasion::Sport => &[
            "Prioritize moisture-wicking, stretchy fabrics",
            "Ensure proper fit for freedom of movement",
            "Layer strategically for temperature control",
        ],
        Occasion::Other => &[],
    }
}

const COLOR_BASE_TIPS: [&str; 3] = [
    "Monochromatic looks create a sophisticated appearance",
    "Complementary colors make outfits pop",
    "Neutral bases allow for bold accent pieces",
];

/// Substring-matched color addendum; first match wins.
const COLOR_ADDENDA: &[(&[&str], &str)] = &[
    (&["black"], "Black is versatile - add colorful accessories to brighten"),
    (
        &["white", "cream"],
        "White/cream creates a fresh canvas for statement accessories",
    ),
    (&["blue"], "Blue pairs beautifully with neutrals and warm metallics"),
    (&["red"], "Red makes a bold statement - keep other elements simple"),
];

fn color_tips(color: &str) -> Vec<&'static str> {
    let mut tips: Vec<&'static str> = COLOR_BASE_TIPS.to_vec();
    let lower = color.to_lowercase();
    if !lower.is_empty() {
        if let Some((_, addendum)) = COLOR_ADDENDA
            .iter()
            .find(|(needles, _)| needles.iter().any(|needle| lower.contains(needle)))
        {
            tips.push(addendum);
        }
    }
    tips
}

/// Two tips for the categories with specific guidance; the rest get
/// an empty section.
fn category_tips(category: GarmentCategory) -> &'static [&'static str] {
    match category {
        GarmentCategory::Dress => &[
            "The right undergarments make all the difference",
            "Consider the dress length appropriate for the occasion",
        ],
        GarmentCategory::Top => &[
            "Tuck or leave untucked based on your proportions",
            "Consider layering for added interest",
        ],
        GarmentCategory::Bottom => &[
            "Ensure the rise flatters your body type",
            "Hem length should complement your footwear choice",
        ],
        GarmentCategory::Outerwear | GarmentCategory::FullBody | GarmentCategory::Other => &[],
    }
}

/// Build the full styling tip list in fixed section order: body
/// shape, occasion, color, category. Every table has a total default
/// branch, so any tag combination yields a defined list.
pub fn recommend_styling(
    body_shape: BodyShape,
    occasion: Occasion,
    category: GarmentCategory,
    color: &str,
) -> Vec<String> {
    let mut tips: Vec<String> = Vec::new();
    tips.extend(body_shape_tips(body_shape).iter().map(|t| t.to_string()));
    tips.extend(occasion_tips(occasion).iter().map(|t| t.to_string()));
    tips.extend(color_tips(color).iter().map(|t| t.to_string()));
    tips.extend(category_tips(category).iter().map(|t| t.to_string()));
    tips
}
