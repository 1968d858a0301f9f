use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Incomplete landmark set: {actual} points given, at least {required} required")]
    IncompleteLandmarks { required: usize, actual: usize },

    #[error("Malformed coordinate buffer: {len} values cannot be split into landmarks of stride {stride}")]
    MalformedCoordinates { len: usize, stride: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
