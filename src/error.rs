use thiserror::Error;

/// Terminal failures for a single analysis call. A still image either
/// contains an analyzable face or it does not; nothing here is retryable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("no image supplied for analysis")]
    InvalidInput,

    #[error("no face detected; try a clearer, front-facing photo")]
    NoFaceDetected,
}
