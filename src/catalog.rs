//! Static haircut catalog keyed by face shape.

use serde::Serialize;

use crate::classify::FaceShape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HaircutStyle {
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

static OVAL_STYLES: &[HaircutStyle] = &[
    HaircutStyle {
        name: "Classic Bob",
        image: "https://dummyimage.com/300x300/5a4fcf/ffffff&text=Classic+Bob",
        description: "A timeless and versatile cut.",
    },
    HaircutStyle {
        name: "Pixie Cut",
        image: "https://dummyimage.com/300x300/5a4fcf/ffffff&text=Pixie+Cut",
        description: "Short and stylish.",
    },
];

static ROUND_STYLES: &[HaircutStyle] = &[
    HaircutStyle {
        name: "Long Layers",
        image: "https://dummyimage.com/300x300/5a4fcf/ffffff&text=Long+Layers",
        description: "Adds definition and length.",
    },
    HaircutStyle {
        name: "Side-Swept Bangs",
        image: "https://dummyimage.com/300x300/5a4fcf/ffffff&text=Side+Swept+Bang",
        description: "Helps to slim the face.",
    },
];

static SQUARE_STYLES: &[HaircutStyle] = &[
    HaircutStyle {
        name: "Angular Bob",
        image: "https://dummyimage.com/300x300/5a4fcf/ffffff&text=Angular+Bob",
        description: "Softens the jawline.",
    },
    HaircutStyle {
        name: "Layered Cut",
        image: "https://dummyimage.com/300x300/5a4fcf/ffffff&text=Layered+Cut",
        description: "Adds softness around the face.",
    },
];

static HEART_STYLES: &[HaircutStyle] = &[HaircutStyle {
    name: "Chin-Length Bob",
    image: "https://dummyimage.com/300x300/5a4fcf/ffffff&text=Chin+Length+Bob",
    description: "Balances a wider forehead.",
}];

static DIAMOND_STYLES: &[HaircutStyle] = &[HaircutStyle {
    name: "Textured Lob",
    image: "https://dummyimage.com/300x300/5a4fcf/ffffff&text=Textured+Lob",
    description: "Softens angular features.",
}];

static OTHER_STYLES: &[HaircutStyle] = &[HaircutStyle {
    name: "Consult Stylist",
    image: "https://dummyimage.com/300x300/5a4fcf/ffffff&text=Consult+Stylist",
    description: "Try a personalized consultation.",
}];

pub fn styles_for(shape: FaceShape) -> &'static [HaircutStyle] {
    match shape {
        FaceShape::Oval => OVAL_STYLES,
        FaceShape::Round => ROUND_STYLES,
        FaceShape::Square => SQUARE_STYLES,
        FaceShape::Heart => HEART_STYLES,
        FaceShape::Diamond => DIAMOND_STYLES,
        FaceShape::Other => OTHER_STYLES,
    }
}

/// Looks up recommendations by label string. Unknown or empty labels
/// resolve to the `Other Shape` bucket, so this never fails and never
/// returns an empty list.
pub fn recommendations_for(label: &str) -> &'static [HaircutStyle] {
    let shape = FaceShape::parse(label).unwrap_or(FaceShape::Other);
    styles_for(shape)
}

pub fn supported_face_shapes() -> [&'static str; 6] {
    [
        FaceShape::Oval.as_str(),
        FaceShape::Round.as_str(),
        FaceShape::Square.as_str(),
        FaceShape::Heart.as_str(),
        FaceShape::Diamond.as_str(),
        FaceShape::Other.as_str(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bucket_is_non_empty() {
        for label in supported_face_shapes() {
            assert!(!recommendations_for(label).is_empty(), "{label}");
        }
    }

    #[test]
    fn unknown_labels_fall_back() {
        assert_eq!(recommendations_for(""), OTHER_STYLES);
        assert_eq!(recommendations_for("Unknown"), OTHER_STYLES);
    }

    #[test]
    fn labels_are_trimmed() {
        assert_eq!(recommendations_for("  Oval  "), recommendations_for("Oval"));
        assert_eq!(recommendations_for("Oval")[0].name, "Classic Bob");
    }
}
