//! End-to-end analysis with stub detection engines.

use anyhow::Result;
use facecut::{
    AnalysisError, Analyzer, FaceDetector, FaceLandmarker, FaceShape, LandmarkSet, PointF32,
    RectF32,
};
use image::RgbaImage;

struct StubDetector {
    boxes: Vec<RectF32>,
}

impl FaceDetector for StubDetector {
    fn detect(&mut self, _img: &RgbaImage) -> Result<Vec<RectF32>> {
        Ok(self.boxes.clone())
    }
}

struct StubLandmarker {
    result: Option<LandmarkSet>,
}

impl FaceLandmarker for StubLandmarker {
    fn landmark(&mut self, _img: &RgbaImage) -> Result<Option<LandmarkSet>> {
        Ok(self.result.clone())
    }
}

fn test_image() -> RgbaImage {
    RgbaImage::new(640, 480)
}

#[test]
fn classifies_from_largest_detected_box() {
    // areas 50 and 200; measurements must come from the larger box,
    // whose 105x100 proportions land in the square band
    let mut analyzer = Analyzer::with_detector(StubDetector {
        boxes: vec![
            RectF32::from_tl(0., 0., 10., 5.),
            RectF32::from_tl(200., 100., 100., 105.),
        ],
    });

    let analysis = analyzer.analyze(&test_image()).unwrap();
    assert_eq!(analysis.shape, FaceShape::Square);
    assert_eq!(analysis.measurements.face_length, 105.);
    assert_eq!(analysis.measurements.cheekbone_width, 90.);
    assert!(!analysis.recommendations.is_empty());
}

#[test]
fn no_boxes_reports_no_face() {
    let mut analyzer = Analyzer::with_detector(StubDetector { boxes: vec![] });

    let err = analyzer.analyze(&test_image()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<AnalysisError>(),
        Some(&AnalysisError::NoFaceDetected)
    );
}

#[test]
fn missing_landmark_result_reports_no_face() {
    let mut analyzer = Analyzer::with_landmarker(StubLandmarker { result: None });

    let err = analyzer.analyze(&test_image()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<AnalysisError>(),
        Some(&AnalysisError::NoFaceDetected)
    );
}

#[test]
fn classifies_from_landmarks() {
    // oval proportions: long face, forehead wider than jaw
    let mut points = vec![PointF32::new(0.5, 0.5); 468];
    points[10] = PointF32::new(0.5, 0.1);
    points[152] = PointF32::new(0.5, 0.75);
    points[234] = PointF32::new(0.25, 0.5);
    points[454] = PointF32::new(0.75, 0.5);
    points[58] = PointF32::new(0.3, 0.7);
    points[288] = PointF32::new(0.7, 0.7);
    points[71] = PointF32::new(0.27, 0.3);
    points[301] = PointF32::new(0.75, 0.3);

    let mut analyzer = Analyzer::with_landmarker(StubLandmarker {
        result: Some(LandmarkSet::new(points, 200, 200)),
    });

    let analysis = analyzer.analyze(&test_image()).unwrap();
    assert_eq!(analysis.shape, FaceShape::Oval);
    assert_eq!(analysis.recommendations[0].name, "Classic Bob");
}

#[test]
fn empty_image_is_invalid_input() {
    let mut analyzer = Analyzer::with_detector(StubDetector { boxes: vec![] });

    let err = analyzer.analyze(&RgbaImage::new(0, 0)).unwrap_err();
    assert_eq!(
        err.downcast_ref::<AnalysisError>(),
        Some(&AnalysisError::InvalidInput)
    );
}
