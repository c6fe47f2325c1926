use std::fmt;
use std::ops::RangeInclusive;

use serde::Serialize;

use crate::measure::Measurements;

// Empirically tuned thresholds; behavioral compatibility depends on the
// exact values and on the check order below.
const OVAL_MIN_ASPECT: f32 = 1.22;
const ROUND_MAX_ASPECT: f32 = 1.12;
const SQUARE_ASPECT: RangeInclusive<f32> = 1.10..=1.22;
const SQUARE_JAW_TOLERANCE: f32 = 0.18;
const DIAMOND_MIN_JAW_RATIO: f32 = 0.8;
const SQUARE_FALLBACK_ASPECT: RangeInclusive<f32> = 1.08..=1.25;

/// Closed set of face-shape labels. `Other` is the fallback bucket for
/// faces the heuristic cannot place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FaceShape {
    Oval,
    Round,
    Square,
    Heart,
    Diamond,
    #[serde(rename = "Other Shape")]
    Other,
}

impl FaceShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            FaceShape::Oval => "Oval",
            FaceShape::Round => "Round",
            FaceShape::Square => "Square",
            FaceShape::Heart => "Heart",
            FaceShape::Diamond => "Diamond",
            FaceShape::Other => "Other Shape",
        }
    }

    /// Maps a label string back onto the enumeration. Whitespace is
    /// trimmed; unrecognized labels yield `None`.
    pub fn parse(label: &str) -> Option<FaceShape> {
        match label.trim() {
            "Oval" => Some(FaceShape::Oval),
            "Round" => Some(FaceShape::Round),
            "Square" => Some(FaceShape::Square),
            "Heart" => Some(FaceShape::Heart),
            "Diamond" => Some(FaceShape::Diamond),
            "Other Shape" => Some(FaceShape::Other),
            _ => None,
        }
    }
}

impl fmt::Display for FaceShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered ratio-threshold decision tree. The conditions are not
/// mutually exclusive; first match wins.
pub fn classify(m: &Measurements) -> FaceShape {
    let aspect = m.aspect_ratio();

    if aspect > OVAL_MIN_ASPECT && m.forehead_width >= m.jawline_width {
        return FaceShape::Oval;
    }

    if aspect < ROUND_MAX_ASPECT
        && m.cheekbone_width >= m.jawline_width
        && m.cheekbone_width >= m.forehead_width
    {
        return FaceShape::Round;
    }

    if SQUARE_ASPECT.contains(&aspect)
        && (m.jawline_width - m.cheekbone_width).abs() < m.cheekbone_width * SQUARE_JAW_TOLERANCE
    {
        return FaceShape::Square;
    }

    if m.forehead_width > m.cheekbone_width && m.cheekbone_width > m.jawline_width {
        return FaceShape::Heart;
    }

    if m.cheekbone_width > m.forehead_width
        && m.cheekbone_width > m.jawline_width
        && m.jawline_width > m.forehead_width * DIAMOND_MIN_JAW_RATIO
    {
        return FaceShape::Diamond;
    }

    // Secondary near-square catch. Its range overlaps the primary square
    // band above; kept as tuned rather than merged.
    if SQUARE_FALLBACK_ASPECT.contains(&aspect) {
        return FaceShape::Square;
    }

    FaceShape::Other
}
