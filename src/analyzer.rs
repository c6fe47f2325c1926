//! Analysis entry point gluing an opaque detection engine to the
//! classifier and catalog.

use anyhow::Result;
use image::RgbaImage;
use serde::Serialize;
use tracing::{Level, debug, info, span};

use crate::catalog::{HaircutStyle, styles_for};
use crate::classify::{FaceShape, classify};
use crate::error::AnalysisError;
use crate::measure::{LandmarkSet, MeasurementSource, Measurements};
use crate::shapes::rect::RectF32;

/// Bounding-box face detector boundary. Implementations wrap whatever
/// engine actually finds faces; this crate only consumes the rectangles.
pub trait FaceDetector {
    fn detect(&mut self, img: &RgbaImage) -> Result<Vec<RectF32>>;
}

/// Dense face-mesh boundary. `None` means the engine ran but found no face.
pub trait FaceLandmarker {
    fn landmark(&mut self, img: &RgbaImage) -> Result<Option<LandmarkSet>>;
}

enum Engine {
    Detector(Box<dyn FaceDetector>),
    Landmarker(Box<dyn FaceLandmarker>),
}

/// One image's worth of results.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub shape: FaceShape,
    pub measurements: Measurements,
    pub recommendations: &'static [HaircutStyle],
}

/// Caller-owned handle around a ready-to-use engine. Construct once,
/// reuse across images.
pub struct Analyzer {
    engine: Engine,
}

impl Analyzer {
    pub fn with_detector(detector: impl FaceDetector + 'static) -> Analyzer {
        Analyzer {
            engine: Engine::Detector(Box::new(detector)),
        }
    }

    pub fn with_landmarker(landmarker: impl FaceLandmarker + 'static) -> Analyzer {
        Analyzer {
            engine: Engine::Landmarker(Box::new(landmarker)),
        }
    }

    pub fn analyze(&mut self, img: &RgbaImage) -> Result<Analysis> {
        let span = span!(Level::DEBUG, "analyze");
        let _guard = span.enter();

        if img.width() == 0 || img.height() == 0 {
            return Err(AnalysisError::InvalidInput.into());
        }

        let source = match &mut self.engine {
            Engine::Detector(detector) => {
                let candidates = detector.detect(img)?;
                debug!("Detected {} face candidates", candidates.len());
                MeasurementSource::FaceBoxes(candidates)
            }
            Engine::Landmarker(landmarker) => match landmarker.landmark(img)? {
                Some(landmarks) => MeasurementSource::FaceMesh(landmarks),
                None => return Err(AnalysisError::NoFaceDetected.into()),
            },
        };

        let measurements = source.derive_measurements()?;
        let shape = classify(&measurements);
        info!("Classified face as {shape}");

        Ok(Analysis {
            shape,
            measurements,
            recommendations: styles_for(shape),
        })
    }
}
