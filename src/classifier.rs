//! Rule-based emotion classification.
//!
//! The classifier evaluates an ordered list of threshold rules over the
//! features from [`FeatureExtractor`]. The first rule that matches decides the
//! label, so Surprised takes precedence over Happy, Happy over Angry, and
//! Angry over the Neutral default.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::features::{FeatureExtractor, FeatureVector};
use crate::mesh::FaceMesh;
use crate::pose::{HeadPose, PoseEstimator};
use crate::types::Landmark;

/// Emotion labels the classifier can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    /// No face was supplied.
    None,
    Neutral,
    Happy,
    Surprised,
    Angry,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::None => "None",
            Emotion::Neutral => "Neutral",
            Emotion::Happy => "Happy",
            Emotion::Surprised => "Surprised",
            Emotion::Angry => "Angry",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of classifying one face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmotionResult {
    pub emotion: Emotion,
    /// Always within [0,1].
    pub confidence: f32,
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl EmotionResult {
    /// Build a result, clamping `confidence` into [0,1].
    pub fn new(emotion: Emotion, confidence: f32, pose: HeadPose) -> Self {
        Self {
            emotion,
            confidence: confidence.clamp(0.0, 1.0),
            pitch: pose.pitch,
            yaw: pose.yaw,
            roll: pose.roll,
        }
    }

    /// The result for an empty landmark set.
    pub const fn none() -> Self {
        Self {
            emotion: Emotion::None,
            confidence: 0.0,
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
        }
    }

    pub fn pose(&self) -> HeadPose {
        HeadPose {
            pitch: self.pitch,
            yaw: self.yaw,
            roll: self.roll,
        }
    }
}

/// Decision thresholds and confidence formulas.
///
/// The defaults are hand-tuned values, not fitted weights. Missing fields in a
/// JSON override fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Mouth aspect ratio above which the face is Surprised.
    pub surprised_mar: f32,
    /// Surprised confidence is `mar * surprised_gain`.
    pub surprised_gain: f32,

    /// Smile incline above which the face is Happy.
    pub happy_incline: f32,
    /// With the mouth open past `happy_open_mar`, a smaller incline of
    /// `happy_open_incline` is enough for Happy.
    pub happy_open_mar: f32,
    pub happy_open_incline: f32,
    /// Happy confidence is `incline * happy_gain + happy_bias`.
    pub happy_gain: f32,
    pub happy_bias: f32,

    /// Normalized eyebrow gap below which the face is Angry.
    pub angry_eyebrow: f32,
    /// Angry confidence is `(angry_eyebrow - gap) * angry_gain + angry_bias`.
    pub angry_gain: f32,
    pub angry_bias: f32,

    /// Confidence reported for the Neutral fallback.
    pub neutral_confidence: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            surprised_mar: 0.5,
            surprised_gain: 1.5,
            happy_incline: 0.08,
            happy_open_mar: 0.15,
            happy_open_incline: 0.05,
            happy_gain: 5.0,
            happy_bias: 0.5,
            angry_eyebrow: 0.22,
            angry_gain: 10.0,
            angry_bias: 0.8,
            neutral_confidence: 0.8,
        }
    }
}

impl Thresholds {
    /// Load thresholds from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Classifies facial expressions from face mesh landmarks.
///
/// Holds no mutable state; one instance can be shared across threads.
///
/// ```
/// use emotion_face::{Emotion, EmotionClassifier};
///
/// let classifier = EmotionClassifier::new();
/// let result = classifier.classify(&[]);
/// assert_eq!(result.emotion, Emotion::None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EmotionClassifier {
    thresholds: Thresholds,
    features: FeatureExtractor,
    pose: PoseEstimator,
}

impl EmotionClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            ..Self::default()
        }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Classify one face.
    ///
    /// # Panics
    ///
    /// Panics if `landmarks` is non-empty but shorter than the canonical mesh.
    /// Use [`try_classify`](Self::try_classify) to get an error instead.
    pub fn classify(&self, landmarks: &[Landmark]) -> EmotionResult {
        match self.try_classify(landmarks) {
            Ok(result) => result,
            Err(e) => panic!("{e}"),
        }
    }

    /// Classify one face, reporting an incomplete landmark set as an error.
    ///
    /// An empty slice means no face was detected and yields
    /// [`EmotionResult::none`].
    pub fn try_classify(&self, landmarks: &[Landmark]) -> Result<EmotionResult> {
        if landmarks.is_empty() {
            return Ok(EmotionResult::none());
        }

        let mesh = FaceMesh::new(landmarks)?;
        let features = self.features.extract(&mesh);
        let pose = self.pose.estimate(&mesh);
        let (emotion, confidence) = self.decide(&features);

        Ok(EmotionResult::new(emotion, confidence, pose))
    }

    /// Apply the ordered rules to a feature vector.
    pub fn decide(&self, f: &FeatureVector) -> (Emotion, f32) {
        let t = &self.thresholds;

        if !f.has_eye_scale() {
            tracing::debug!(
                eye_distance = f.eye_distance,
                "degenerate inter-eye distance, falling back to neutral"
            );
            return (Emotion::Neutral, t.neutral_confidence);
        }

        if let Some(mar) = f.mouth_aspect_ratio.filter(|&m| m > t.surprised_mar) {
            tracing::trace!(mar, "surprised");
            return (Emotion::Surprised, (mar * t.surprised_gain).min(1.0));
        }

        if let Some(incline) = f.smile_incline {
            let open_mouth = f
                .mouth_aspect_ratio
                .is_some_and(|m| m > t.happy_open_mar);
            if incline > t.happy_incline || (open_mouth && incline > t.happy_open_incline) {
                tracing::trace!(incline, open_mouth, "happy");
                return (
                    Emotion::Happy,
                    (incline * t.happy_gain + t.happy_bias).min(1.0),
                );
            }
        }

        if let Some(gap) = f.norm_eyebrow_distance.filter(|&g| g < t.angry_eyebrow) {
            tracing::trace!(eyebrow_gap = gap, "angry");
            return (
                Emotion::Angry,
                ((t.angry_eyebrow - gap) * t.angry_gain + t.angry_bias).min(1.0),
            );
        }

        tracing::trace!("neutral");
        (Emotion::Neutral, t.neutral_confidence)
    }
}
