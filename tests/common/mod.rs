//! Synthetic face meshes for integration tests.

#![allow(dead_code)]

use emotion_face::mesh::*;
use emotion_face::Landmark;

/// Left/right counterparts among the points the classifier reads.
pub const MIRROR_PAIRS: [(usize, usize); 6] = [
    (LEFT_EYE_OUTER, RIGHT_EYE_OUTER),
    (LEFT_EYE_INNER, 362),
    (LEFT_EYE_UPPER_LID, 386),
    (LEFT_EYE_LOWER_LID, 374),
    (LEFT_EYEBROW_INNER, RIGHT_EYEBROW_INNER),
    (LEFT_MOUTH_CORNER, RIGHT_MOUTH_CORNER),
];

/// A level, frontal face: eyes 0.4 apart, mouth 1.0 wide.
///
/// Mouth corners span the full width so lip distances read directly as the
/// mouth aspect ratio.
pub fn base_face() -> Vec<Landmark> {
    let mut points = vec![Landmark::new(0.5, 0.5); CANONICAL_LANDMARK_COUNT];
    points[NOSE_TIP] = Landmark::new(0.5, 0.5);
    points[LEFT_EYE_OUTER] = Landmark::new(0.3, 0.4);
    points[RIGHT_EYE_OUTER] = Landmark::new(0.7, 0.4);
    points[LEFT_EYE_INNER] = Landmark::new(0.4, 0.4);
    points[LEFT_EYE_UPPER_LID] = Landmark::new(0.35, 0.39);
    points[LEFT_EYE_LOWER_LID] = Landmark::new(0.35, 0.42);
    points[LEFT_MOUTH_CORNER] = Landmark::new(0.0, 0.7);
    points[RIGHT_MOUTH_CORNER] = Landmark::new(1.0, 0.7);
    set_lip_gap(&mut points, 0.1);
    set_eyebrow_gap(&mut points, 0.3);
    points
}

/// Place the lips `gap` apart, centered on the mouth corner line.
pub fn set_lip_gap(points: &mut [Landmark], gap: f32) {
    points[UPPER_LIP] = Landmark::new(0.5, 0.7 - gap / 2.0);
    points[LOWER_LIP] = Landmark::new(0.5, 0.7 + gap / 2.0);
}

/// Raise both mouth corners by `lift` above the lip midline.
pub fn set_corner_lift(points: &mut [Landmark], lift: f32) {
    points[LEFT_MOUTH_CORNER].y = 0.7 - lift;
    points[RIGHT_MOUTH_CORNER].y = 0.7 - lift;
}

/// Space the inner eyebrows so their gap is `norm` times the eye distance.
pub fn set_eyebrow_gap(points: &mut [Landmark], norm: f32) {
    let eye_distance = points[LEFT_EYE_OUTER].distance(&points[RIGHT_EYE_OUTER]);
    let half = norm * eye_distance / 2.0;
    points[LEFT_EYEBROW_INNER] = Landmark::new(0.5 - half, 0.3);
    points[RIGHT_EYEBROW_INNER] = Landmark::new(0.5 + half, 0.3);
}

/// Mirror a face about the vertical midline, swapping left/right points.
pub fn mirror(points: &[Landmark]) -> Vec<Landmark> {
    let mut mirrored: Vec<Landmark> = points
        .iter()
        .map(|p| Landmark::with_depth(1.0 - p.x, p.y, p.z))
        .collect();
    for (left, right) in MIRROR_PAIRS {
        mirrored.swap(left, right);
    }
    mirrored
}
