use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::AnalysisError;
use crate::shapes::point::PointF32;
use crate::shapes::rect::RectF32;

// Box detectors only report a face rectangle, so the three width bands
// are estimated as fixed fractions of the box width.
const CHEEKBONE_BOX_RATIO: f32 = 0.9;
const JAWLINE_BOX_RATIO: f32 = 0.85;
const FOREHEAD_BOX_RATIO: f32 = 0.8;

// Face-mesh landmark pairs (MediaPipe indexing): forehead-to-chin,
// cheekbone-to-cheekbone, jaw corners, temples.
const FACE_LENGTH_PAIR: (usize, usize) = (10, 152);
const CHEEKBONE_PAIR: (usize, usize) = (234, 454);
const JAWLINE_PAIR: (usize, usize) = (58, 288);
const FOREHEAD_PAIR: (usize, usize) = (71, 301);

// Highest index referenced above; a mesh shorter than this cannot be measured.
const MIN_LANDMARKS: usize = 455;

/// The four facial distances the classifier consumes, all in pixels of
/// the analyzed image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    pub face_length: f32,
    pub cheekbone_width: f32,
    pub jawline_width: f32,
    pub forehead_width: f32,
}

impl Measurements {
    pub fn new(
        face_length: f32,
        cheekbone_width: f32,
        jawline_width: f32,
        forehead_width: f32,
    ) -> Measurements {
        Measurements {
            face_length,
            cheekbone_width,
            jawline_width,
            forehead_width,
        }
    }

    /// Face length over cheekbone width, the primary discriminant.
    /// Defined as 0 for a degenerate zero-width face.
    pub fn aspect_ratio(&self) -> f32 {
        if self.cheekbone_width > 0. {
            self.face_length / self.cheekbone_width
        } else {
            0.
        }
    }
}

/// A dense face-mesh result: normalized `[0, 1]` coordinates plus the
/// pixel dimensions of the image they were detected on.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkSet {
    points: Vec<PointF32>,
    image_w: u32,
    image_h: u32,
}

impl LandmarkSet {
    pub fn new(points: Vec<PointF32>, image_w: u32, image_h: u32) -> LandmarkSet {
        LandmarkSet {
            points,
            image_w,
            image_h,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn point_px(&self, idx: usize) -> Option<PointF32> {
        let p = self.points.get(idx)?;
        Some(PointF32::new(
            p.x * self.image_w as f32,
            p.y * self.image_h as f32,
        ))
    }

    fn distance_px(&self, pair: (usize, usize)) -> Option<f32> {
        let a = self.point_px(pair.0)?;
        let b = self.point_px(pair.1)?;
        Some(a.distance(&b))
    }
}

/// Alternate strategies for producing one [`Measurements`] tuple: a plain
/// bounding-box detector or a dense face mesh.
#[derive(Debug, Clone)]
pub enum MeasurementSource {
    FaceBoxes(Vec<RectF32>),
    FaceMesh(LandmarkSet),
}

impl MeasurementSource {
    pub fn derive_measurements(&self) -> Result<Measurements, AnalysisError> {
        match self {
            MeasurementSource::FaceBoxes(candidates) => from_face_boxes(candidates),
            MeasurementSource::FaceMesh(landmarks) => from_landmarks(landmarks),
        }
    }
}

fn from_face_boxes(candidates: &[RectF32]) -> Result<Measurements, AnalysisError> {
    let mut candidates = candidates.iter();
    let mut chosen = *candidates.next().ok_or(AnalysisError::NoFaceDetected)?;

    for candidate in candidates {
        // strict: ties keep the first-encountered box
        if candidate.area() > chosen.area() {
            chosen = *candidate;
        }
    }
    trace!("Measuring face box {}x{}", chosen.w, chosen.h);

    Ok(Measurements::new(
        chosen.h,
        chosen.w * CHEEKBONE_BOX_RATIO,
        chosen.w * JAWLINE_BOX_RATIO,
        chosen.w * FOREHEAD_BOX_RATIO,
    ))
}

fn from_landmarks(landmarks: &LandmarkSet) -> Result<Measurements, AnalysisError> {
    if landmarks.points.len() < MIN_LANDMARKS {
        return Err(AnalysisError::NoFaceDetected);
    }

    let face_length = landmarks.distance_px(FACE_LENGTH_PAIR);
    let cheekbone_width = landmarks.distance_px(CHEEKBONE_PAIR);
    let jawline_width = landmarks.distance_px(JAWLINE_PAIR);
    let forehead_width = landmarks.distance_px(FOREHEAD_PAIR);

    match (face_length, cheekbone_width, jawline_width, forehead_width) {
        (Some(fl), Some(cw), Some(jw), Some(fw)) => Ok(Measurements::new(fl, cw, jw, fw)),
        _ => Err(AnalysisError::NoFaceDetected),
    }
}
