//! Form scoring rules.
//!
//! Every frame starts at [`MAX_SCORE`] and each violated rule subtracts a
//! fixed penalty and adds one feedback line. Penalties stack and the running
//! score may go negative; clamping happens when the result is emitted.

use crate::angles::AngleSet;
use crate::constants::{LEFT_HIP, MAX_SCORE, RIGHT_ANKLE, RIGHT_HIP, RIGHT_SHOULDER};
use crate::geometry::angle;
use crate::landmarks::{coords_of, LandmarkSet};
use std::ops::RangeInclusive;

/// Target range for squat knees and pushup elbows
pub const BENT_JOINT_RANGE: RangeInclusive<i32> = 70..=120;

/// Target range for the lunge front knee
pub const LUNGE_FRONT_KNEE_RANGE: RangeInclusive<i32> = 80..=100;

/// Back knee angle above which the lunge is too shallow
pub const LUNGE_BACK_KNEE_MAX: i32 = 120;

/// Target range for shoulder-hip-ankle alignment
pub const STRAIGHT_BODY_RANGE: RangeInclusive<i32> = 170..=190;

/// Largest allowed left/right knee difference in a squat
pub const KNEE_SYMMETRY_TOLERANCE: i32 = 10;

/// Largest allowed hip height difference (fraction of frame height)
pub const HIP_LEVEL_TOLERANCE: f64 = 0.05;

/// Running score and feedback for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormScore {
    /// Unclamped score
    pub score: i32,
    /// One line per violated rule, in rule order
    pub feedback: Vec<String>,
}

impl Default for FormScore {
    fn default() -> Self {
        Self {
            score: MAX_SCORE,
            feedback: Vec::new(),
        }
    }
}

impl FormScore {
    /// Start a fresh score at the maximum
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a penalty with its feedback line
    pub fn penalize(&mut self, points: i32, message: impl Into<String>) {
        self.score -= points;
        self.feedback.push(message.into());
    }

    /// Score clamped at zero
    #[must_use]
    pub fn accuracy(&self) -> i32 {
        self.score.max(0)
    }
}

/// Signature shared by the per-exercise rule tables
pub type ScoringRule = fn(&AngleSet, &LandmarkSet) -> FormScore;

fn shoulder_hip_ankle(landmarks: &LandmarkSet) -> i32 {
    angle(
        coords_of(landmarks, RIGHT_SHOULDER),
        coords_of(landmarks, RIGHT_HIP),
        coords_of(landmarks, RIGHT_ANKLE),
    )
}

/// Squat: both knees in range, knees symmetric, hips level
#[must_use]
pub fn score_squat(angles: &AngleSet, landmarks: &LandmarkSet) -> FormScore {
    let mut form = FormScore::new();
    let left_knee = angles.get("left_knee");
    let right_knee = angles.get("right_knee");

    if !BENT_JOINT_RANGE.contains(&left_knee) {
        form.penalize(15, format!("Left knee angle: {left_knee}° (target: 70-120°)"));
    }
    if !BENT_JOINT_RANGE.contains(&right_knee) {
        form.penalize(15, format!("Right knee angle: {right_knee}° (target: 70-120°)"));
    }

    let knee_diff = (left_knee - right_knee).abs();
    if knee_diff > KNEE_SYMMETRY_TOLERANCE {
        form.penalize(10, format!("Knee symmetry off by {knee_diff}°"));
    }

    let hip_diff = (coords_of(landmarks, RIGHT_HIP).y - coords_of(landmarks, LEFT_HIP).y).abs();
    if hip_diff > HIP_LEVEL_TOLERANCE {
        form.penalize(10, "Keep hips level");
    }

    form
}

/// Pushup: both elbows in range, body straight
#[must_use]
pub fn score_pushup(angles: &AngleSet, landmarks: &LandmarkSet) -> FormScore {
    let mut form = FormScore::new();
    let left_elbow = angles.get("left_elbow");
    let right_elbow = angles.get("right_elbow");

    if !BENT_JOINT_RANGE.contains(&left_elbow) {
        form.penalize(15, format!("Left elbow angle: {left_elbow}° (target: 70-120°)"));
    }
    if !BENT_JOINT_RANGE.contains(&right_elbow) {
        form.penalize(15, format!("Right elbow angle: {right_elbow}° (target: 70-120°)"));
    }

    if !STRAIGHT_BODY_RANGE.contains(&shoulder_hip_ankle(landmarks)) {
        form.penalize(15, "Keep body straight");
    }

    form
}

/// Lunge: front knee near 90°, back knee lowered
#[must_use]
pub fn score_lunge(angles: &AngleSet, _landmarks: &LandmarkSet) -> FormScore {
    let mut form = FormScore::new();
    let front_knee = angles.get("front_knee");
    let back_knee = angles.get("back_knee");

    if !LUNGE_FRONT_KNEE_RANGE.contains(&front_knee) {
        form.penalize(20, format!("Front knee angle: {front_knee}° (target: 90°)"));
    }
    if back_knee > LUNGE_BACK_KNEE_MAX {
        form.penalize(15, "Lower back knee closer to ground");
    }

    form
}

/// Plank: shoulders, hips and ankles in line
#[must_use]
pub fn score_plank(angles: &AngleSet, _landmarks: &LandmarkSet) -> FormScore {
    let mut form = FormScore::new();

    if !STRAIGHT_BODY_RANGE.contains(&angles.get("shoulder_hip_ankle")) {
        form.penalize(20, "Keep body straight - engage core");
    }

    form
}
