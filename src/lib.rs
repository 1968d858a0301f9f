//! # emotion-face
//!
//! Rule-based facial expression and head pose estimation from face mesh
//! landmarks.
//!
//! This crate provides:
//! - **Features**: scale-invariant mouth, eyebrow and eye ratios measured from
//!   468-point face mesh landmarks
//! - **Head Pose**: approximate pitch, yaw and roll from the nose and eyes
//! - **Classification**: an ordered set of threshold rules mapping features to
//!   Neutral, Happy, Surprised or Angry with a confidence in [0,1]
//!
//! Landmark detection itself is out of scope. Feed the crate the normalized
//! points produced by a face landmark detector (e.g. MediaPipe Face Landmarker)
//! for one face per call.
//!
//! ## Quick Start
//!
//! ```rust
//! use emotion_face::{infer, Emotion, Landmark};
//!
//! // No face detected in this frame.
//! let result = infer(&[]);
//! assert_eq!(result.emotion, Emotion::None);
//!
//! // A full mesh from a detector.
//! let mut points = vec![Landmark::new(0.5, 0.5); emotion_face::CANONICAL_LANDMARK_COUNT];
//! points[emotion_face::mesh::LEFT_EYE_OUTER] = Landmark::new(0.3, 0.4);
//! points[emotion_face::mesh::RIGHT_EYE_OUTER] = Landmark::new(0.7, 0.4);
//! let result = infer(&points);
//! println!("{} ({:.0}%)", result.emotion, result.confidence * 100.0);
//! ```
//!
//! ## Rules
//!
//! The first matching rule wins:
//!
//! 1. mouth aspect ratio above 0.5: Surprised
//! 2. raised mouth corners, or an open mouth with slightly raised corners: Happy
//! 3. inner eyebrows pulled together: Angry
//! 4. otherwise: Neutral
//!
//! Thresholds can be replaced through [`Thresholds`].

mod classifier;
mod error;
mod features;
pub mod mesh;
mod pose;
mod types;

pub use classifier::{Emotion, EmotionClassifier, EmotionResult, Thresholds};
pub use error::{Error, Result};
pub use features::{FeatureExtractor, FeatureVector};
pub use mesh::{FaceMesh, CANONICAL_LANDMARK_COUNT};
pub use pose::{HeadPose, PoseEstimator};
pub use types::{Landmark, LandmarkSet};

/// Classify one face with the default thresholds.
///
/// An empty slice yields [`EmotionResult::none`].
///
/// # Panics
///
/// Panics if `landmarks` is non-empty but has fewer than
/// [`CANONICAL_LANDMARK_COUNT`] points.
pub fn infer(landmarks: &[Landmark]) -> EmotionResult {
    EmotionClassifier::default().classify(landmarks)
}
