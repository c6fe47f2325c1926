//! Face-shape classification feeding a static haircut catalog.
//!
//! The core is a small ratio-threshold decision tree over four facial
//! measurements (face length, cheekbone width, jawline width, forehead
//! width). Measurements come from one of two alternate sources: a plain
//! face bounding box, or a dense face-mesh landmark set. Detection
//! engines themselves stay outside this crate, behind the
//! [`FaceDetector`] and [`FaceLandmarker`] traits.
//!
//! ```rust
//! use facecut::{classify, recommendations_for, Measurements};
//!
//! let m = Measurements::new(130., 100., 80., 95.);
//! let shape = classify(&m);
//! let styles = recommendations_for(shape.as_str());
//! assert!(!styles.is_empty());
//! ```

pub mod analyzer;
pub mod catalog;
pub mod classify;
pub mod error;
pub mod measure;
pub mod shapes;

pub use analyzer::{Analysis, Analyzer, FaceDetector, FaceLandmarker};
pub use catalog::{HaircutStyle, recommendations_for, styles_for, supported_face_shapes};
pub use classify::{FaceShape, classify};
pub use error::AnalysisError;
pub use measure::{LandmarkSet, MeasurementSource, Measurements};
pub use shapes::point::PointF32;
pub use shapes::rect::RectF32;
