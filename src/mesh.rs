//! Canonical face mesh indices and a validated view over a landmark slice.
//!
//! Indices follow the MediaPipe 468-point face mesh. "Left" and "right" are
//! the subject's, as labelled by the mesh topology.

use crate::error::{Error, Result};
use crate::types::Landmark;

/// Number of points in the canonical face mesh.
pub const CANONICAL_LANDMARK_COUNT: usize = 468;

pub const NOSE_TIP: usize = 1;
pub const UPPER_LIP: usize = 13;
pub const LOWER_LIP: usize = 14;
pub const LEFT_EYE_OUTER: usize = 33;
pub const LEFT_EYEBROW_INNER: usize = 55;
pub const LEFT_MOUTH_CORNER: usize = 61;
pub const LEFT_EYE_INNER: usize = 133;
pub const LEFT_EYE_LOWER_LID: usize = 145;
pub const LEFT_EYE_UPPER_LID: usize = 159;
pub const RIGHT_EYE_OUTER: usize = 263;
pub const RIGHT_EYEBROW_INNER: usize = 285;
pub const RIGHT_MOUTH_CORNER: usize = 291;

/// A landmark slice known to cover the canonical face mesh.
///
/// Construction checks the length once, so the accessors below can index
/// without further bounds reasoning. Detectors that append iris points
/// (478 total) are accepted; the extra points are ignored.
#[derive(Debug, Clone, Copy)]
pub struct FaceMesh<'a> {
    points: &'a [Landmark],
}

impl<'a> FaceMesh<'a> {
    pub fn new(points: &'a [Landmark]) -> Result<Self> {
        if points.len() < CANONICAL_LANDMARK_COUNT {
            return Err(Error::IncompleteLandmarks {
                required: CANONICAL_LANDMARK_COUNT,
                actual: points.len(),
            });
        }
        Ok(Self { points })
    }

    pub fn point(&self, idx: usize) -> &'a Landmark {
        &self.points[idx]
    }

    pub fn nose_tip(&self) -> &'a Landmark {
        self.point(NOSE_TIP)
    }

    pub fn upper_lip(&self) -> &'a Landmark {
        self.point(UPPER_LIP)
    }

    pub fn lower_lip(&self) -> &'a Landmark {
        self.point(LOWER_LIP)
    }

    pub fn left_mouth_corner(&self) -> &'a Landmark {
        self.point(LEFT_MOUTH_CORNER)
    }

    pub fn right_mouth_corner(&self) -> &'a Landmark {
        self.point(RIGHT_MOUTH_CORNER)
    }

    pub fn left_eye_outer(&self) -> &'a Landmark {
        self.point(LEFT_EYE_OUTER)
    }

    pub fn right_eye_outer(&self) -> &'a Landmark {
        self.point(RIGHT_EYE_OUTER)
    }

    pub fn left_eye_inner(&self) -> &'a Landmark {
        self.point(LEFT_EYE_INNER)
    }

    pub fn left_eye_upper_lid(&self) -> &'a Landmark {
        self.point(LEFT_EYE_UPPER_LID)
    }

    pub fn left_eye_lower_lid(&self) -> &'a Landmark {
        self.point(LEFT_EYE_LOWER_LID)
    }

    pub fn left_eyebrow_inner(&self) -> &'a Landmark {
        self.point(LEFT_EYEBROW_INNER)
    }

    pub fn right_eyebrow_inner(&self) -> &'a Landmark {
        self.point(RIGHT_EYEBROW_INNER)
    }
}
