//! Joint angle extraction.
//!
//! Each exercise measures a fixed set of named joints, each defined by three
//! landmark indices (proximal, vertex, distal). Angle names follow the
//! mirrored camera view: `left_knee` is measured on landmarks 24/26/28.

use crate::constants::{
    LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, LEFT_WRIST, RIGHT_ANKLE, RIGHT_ELBOW,
    RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER, RIGHT_WRIST,
};
use crate::geometry::angle;
use crate::landmarks::{coords_of, LandmarkSet};
use serde::Serialize;
use std::collections::BTreeMap;

/// A named joint measured at the middle of three landmarks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JointAngle {
    /// Name reported in the angle set
    pub name: &'static str,
    /// Landmark indices (proximal, vertex, distal)
    pub landmarks: [usize; 3],
}

impl JointAngle {
    const fn new(name: &'static str, landmarks: [usize; 3]) -> Self {
        Self { name, landmarks }
    }

    /// Measure this joint in a landmark set
    #[must_use]
    pub fn measure(&self, landmarks: &LandmarkSet) -> i32 {
        let [a, b, c] = self.landmarks;
        angle(coords_of(landmarks, a), coords_of(landmarks, b), coords_of(landmarks, c))
    }
}

pub const SQUAT_JOINTS: &[JointAngle] = &[
    JointAngle::new("left_knee", [RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE]),
    JointAngle::new("right_knee", [LEFT_HIP, LEFT_KNEE, LEFT_ANKLE]),
];

pub const PUSHUP_JOINTS: &[JointAngle] = &[
    JointAngle::new("left_elbow", [RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST]),
    JointAngle::new("right_elbow", [LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST]),
];

pub const LUNGE_JOINTS: &[JointAngle] = &[
    JointAngle::new("front_knee", [RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE]),
    JointAngle::new("back_knee", [LEFT_HIP, LEFT_KNEE, LEFT_ANKLE]),
];

pub const PLANK_JOINTS: &[JointAngle] = &[JointAngle::new(
    "shoulder_hip_ankle",
    [RIGHT_SHOULDER, RIGHT_HIP, RIGHT_ANKLE],
)];

/// Joint angles of one frame, in whole degrees
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AngleSet(BTreeMap<&'static str, i32>);

impl AngleSet {
    /// Create an empty angle set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an angle
    pub fn insert(&mut self, name: &'static str, degrees: i32) {
        self.0.insert(name, degrees);
    }

    /// Angle by name; missing angles read as 0
    #[must_use]
    pub fn get(&self, name: &str) -> i32 {
        self.0.get(name).copied().unwrap_or(0)
    }

    /// True if the named angle was measured
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Mean of the named angles, each missing one counted as 0
    #[must_use]
    pub fn mean_of(&self, names: &[&str]) -> f64 {
        if names.is_empty() {
            return 0.0;
        }
        let total: i32 = names.iter().map(|name| self.get(name)).sum();
        f64::from(total) / names.len() as f64
    }

    /// Number of measured angles
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True before any angle has been measured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over (name, degrees) pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.0.iter().map(|(name, degrees)| (*name, *degrees))
    }
}

impl FromIterator<(&'static str, i32)> for AngleSet {
    fn from_iter<I: IntoIterator<Item = (&'static str, i32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Measure every joint in `joints`
#[must_use]
pub fn extract_angles(joints: &[JointAngle], landmarks: &LandmarkSet) -> AngleSet {
    joints.iter().map(|joint| (joint.name, joint.measure(landmarks))).collect()
}
