use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A face landmark in normalized image coordinates.
///
/// `x` and `y` are in [0,1] relative to the image width and height, with `y`
/// growing downward. `z` is the detector's relative depth and is not used by
/// any measurement here.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub const fn with_depth(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance in the image plane. Depth is ignored.
    pub fn distance(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Point halfway between `self` and `other` in the image plane.
    pub fn midpoint(&self, other: &Landmark) -> Landmark {
        Landmark::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// The landmarks of one detected face, in the detector's index order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    pub points: Vec<Landmark>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Landmark>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[Landmark] {
        &self.points
    }

    /// Build a set from a packed buffer of `[x0, y0, x1, y1, ...]` (stride 2)
    /// or `[x0, y0, z0, ...]` (stride 3) coordinates.
    pub fn from_flat_vec(v: &[f32], stride: usize) -> Result<Self> {
        if !(stride == 2 || stride == 3) || v.len() % stride != 0 {
            return Err(Error::MalformedCoordinates {
                len: v.len(),
                stride,
            });
        }

        let points = v
            .chunks_exact(stride)
            .map(|c| match c {
                [x, y, z] => Landmark::with_depth(*x, *y, *z),
                [x, y] => Landmark::new(*x, *y),
                _ => unreachable!("stride is 2 or 3"),
            })
            .collect();
        Ok(Self { points })
    }

    /// Parse landmark frames from JSON.
    ///
    /// Accepts either a single frame (an array of landmarks) or a list of
    /// frames (an array of such arrays). An empty array is one empty frame.
    pub fn frames_from_json(json: &str) -> Result<Vec<Self>> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Frames {
            Single(Vec<Landmark>),
            Many(Vec<Vec<Landmark>>),
        }

        let frames = match serde_json::from_str::<Frames>(json)? {
            Frames::Single(points) => vec![Self::new(points)],
            Frames::Many(frames) => frames.into_iter().map(Self::new).collect(),
        };
        Ok(frames)
    }
}

impl From<Vec<Landmark>> for LandmarkSet {
    fn from(points: Vec<Landmark>) -> Self {
        Self::new(points)
    }
}

impl std::ops::Index<usize> for LandmarkSet {
    type Output = Landmark;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.points[idx]
    }
}

impl std::ops::IndexMut<usize> for LandmarkSet {
    fn index_mut(&mut self, idx: usize) -> &mut Self::Output {
        &mut self.points[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_ignores_depth() {
        let a = Landmark::with_depth(0.0, 0.0, 5.0);
        let b = Landmark::with_depth(0.3, 0.4, -5.0);
        assert!((a.distance(&b) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn midpoint() {
        let m = Landmark::new(0.2, 0.4).midpoint(&Landmark::new(0.4, 0.8));
        assert!((m.x - 0.3).abs() < 1e-6);
        assert!((m.y - 0.6).abs() < 1e-6);
    }

    #[test]
    fn flat_vec_strides() {
        let set = LandmarkSet::from_flat_vec(&[0.1, 0.2, 0.3, 0.4], 2).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set[1], Landmark::new(0.3, 0.4));

        let set = LandmarkSet::from_flat_vec(&[0.1, 0.2, 0.5, 0.3, 0.4, 0.6], 3).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set[0], Landmark::with_depth(0.1, 0.2, 0.5));
    }

    #[test]
    fn flat_vec_rejects_ragged_buffer() {
        let err = LandmarkSet::from_flat_vec(&[0.1, 0.2, 0.3], 2).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedCoordinates { len: 3, stride: 2 }
        ));
        assert!(LandmarkSet::from_flat_vec(&[0.1; 8], 4).is_err());
    }

    #[test]
    fn json_single_frame() {
        let frames =
            LandmarkSet::frames_from_json(r#"[{"x": 0.1, "y": 0.2}, {"x": 0.3, "y": 0.4, "z": 0.01}]"#)
                .unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0][0], Landmark::new(0.1, 0.2));
        assert_eq!(frames[0][1].z, 0.01);
    }

    #[test]
    fn json_many_frames() {
        let frames = LandmarkSet::frames_from_json(
            r#"[[{"x": 0.1, "y": 0.2}], [], [{"x": 0.5, "y": 0.5}]]"#,
        )
        .unwrap();
        assert_eq!(frames.len(), 3);
        assert!(frames[1].is_empty());
    }

    #[test]
    fn json_empty_array_is_one_empty_frame() {
        let frames = LandmarkSet::frames_from_json("[]").unwrap();
        assert_eq!(frames.len(), 1);
        assert!(frames[0].is_empty());
    }

    #[test]
    fn json_garbage_is_an_error() {
        let err = LandmarkSet::frames_from_json(r#"{"x": 1}"#).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
