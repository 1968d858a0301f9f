//! Approximate head orientation from three mesh points.

use serde::{Deserialize, Serialize};

use crate::mesh::FaceMesh;

/// Head orientation in approximate degrees.
///
/// Pitch is negative when looking down. Yaw is positive when the nose sits to
/// the image-right of the eye midpoint. Roll is the tilt of the eye line from
/// horizontal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HeadPose {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

/// Estimates [`HeadPose`] from the nose tip and the outer eye corners.
///
/// Pitch and yaw are the nose offset from the eye midpoint scaled by 100, not
/// a calibrated 3D solve. Only the sign and rough magnitude are meaningful.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoseEstimator;

impl PoseEstimator {
    pub fn new() -> Self {
        Self
    }

    pub fn estimate(&self, mesh: &FaceMesh<'_>) -> HeadPose {
        let nose = mesh.nose_tip();
        let left_eye = mesh.left_eye_outer();
        let right_eye = mesh.right_eye_outer();
        let eye_mid = left_eye.midpoint(right_eye);

        let yaw = (nose.x - eye_mid.x) * 100.0;
        let pitch = (nose.y - eye_mid.y) * -100.0;
        let roll = (right_eye.y - left_eye.y)
            .atan2(right_eye.x - left_eye.x)
            .to_degrees();

        HeadPose { pitch, yaw, roll }
    }
}
