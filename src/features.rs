//! Geometric expression features.
//!
//! Every feature is built from Euclidean distances between mesh points in
//! normalized image space. Ratios that depend on face size are divided by the
//! inter-eye distance or the mouth width so they stay comparable as the face
//! moves toward or away from the camera.

use serde::Serialize;

use crate::mesh::FaceMesh;

/// Features measured from one face.
///
/// Ratio features are `None` when their denominator collapses to zero, which
/// happens only for degenerate input (coincident eye or mouth corners).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct FeatureVector {
    /// Distance between the outer eye corners. Used for normalization only.
    pub eye_distance: f32,

    /// Distance between the mouth corners.
    pub mouth_width: f32,

    /// Left eye lid opening over eye width.
    pub eye_aspect_ratio: Option<f32>,

    /// Lip opening over mouth width.
    pub mouth_aspect_ratio: Option<f32>,

    /// Inner eyebrow gap over inter-eye distance.
    pub norm_eyebrow_distance: Option<f32>,

    /// Height of the lip midline above the mouth corner midline, over mouth
    /// width. Positive when the corners are raised.
    pub smile_incline: Option<f32>,
}

impl FeatureVector {
    /// Whether the inter-eye distance can normalize other features.
    pub fn has_eye_scale(&self) -> bool {
        self.eye_distance > 0.0 && self.eye_distance.is_finite()
    }
}

/// Computes a [`FeatureVector`] from a validated face mesh.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, mesh: &FaceMesh<'_>) -> FeatureVector {
        let eye_distance = mesh.left_eye_outer().distance(mesh.right_eye_outer());
        let mouth_width = mesh
            .left_mouth_corner()
            .distance(mesh.right_mouth_corner());

        let lip_gap = mesh.upper_lip().distance(mesh.lower_lip());
        let eyebrow_gap = mesh
            .left_eyebrow_inner()
            .distance(mesh.right_eyebrow_inner());

        let lid_gap = mesh
            .left_eye_upper_lid()
            .distance(mesh.left_eye_lower_lid());
        let eye_width = mesh.left_eye_inner().distance(mesh.left_eye_outer());

        let lip_mid_y = mesh.upper_lip().midpoint(mesh.lower_lip()).y;
        let corner_mid_y = mesh
            .left_mouth_corner()
            .midpoint(mesh.right_mouth_corner())
            .y;

        FeatureVector {
            eye_distance,
            mouth_width,
            eye_aspect_ratio: ratio(lid_gap, eye_width),
            mouth_aspect_ratio: ratio(lip_gap, mouth_width),
            norm_eyebrow_distance: ratio(eyebrow_gap, eye_distance),
            smile_incline: ratio(lip_mid_y - corner_mid_y, mouth_width),
        }
    }
}

/// Divide, or `None` if the denominator is zero or the quotient is not finite.
fn ratio(numerator: f32, denominator: f32) -> Option<f32> {
    if denominator > 0.0 {
        Some(numerator / denominator).filter(|r| r.is_finite())
    } else {
        None
    }
}
