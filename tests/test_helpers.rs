//! Helper functions for building synthetic poses in tests

#![allow(dead_code)]

use exercise_form_analyzer::landmarks::{Landmark, LandmarkSet};

/// Length of every synthetic limb segment
const SEGMENT: f64 = 0.2;

/// Place a joint so the angle at `vertex` between its two segments is `degrees`.
///
/// The proximal landmark sits straight above the vertex and the distal one is
/// rotated away from it by the requested angle.
pub fn place_joint(landmarks: &mut LandmarkSet, [proximal, joint, distal]: [usize; 3], vertex: (f64, f64), degrees: f64) {
    let theta = degrees.to_radians();
    landmarks.set(proximal, Landmark::new(vertex.0, vertex.1 - SEGMENT, 0.0));
    landmarks.set(joint, Landmark::new(vertex.0, vertex.1, 0.0));
    landmarks.set(
        distal,
        Landmark::new(vertex.0 + SEGMENT * theta.sin(), vertex.1 - SEGMENT * theta.cos(), 0.0),
    );
}

/// Legs with the given `left_knee` / `right_knee` angles and level hips
pub fn legs_pose(left_knee: f64, right_knee: f64) -> LandmarkSet {
    let mut landmarks = LandmarkSet::full();
    place_joint(&mut landmarks, [24, 26, 28], (0.6, 0.7), left_knee);
    place_joint(&mut landmarks, [23, 25, 27], (0.4, 0.7), right_knee);
    landmarks
}

/// Squat frame with both knees at `degrees`
pub fn squat_pose(degrees: f64) -> LandmarkSet {
    legs_pose(degrees, degrees)
}

/// Pushup frame with both elbows at `degrees`; `hip_drop` moves the hip
/// off the shoulder-ankle line
pub fn pushup_pose(degrees: f64, hip_drop: f64) -> LandmarkSet {
    let mut landmarks = LandmarkSet::full();
    place_joint(&mut landmarks, [12, 14, 16], (0.3, 0.5), degrees);
    place_joint(&mut landmarks, [11, 13, 15], (0.35, 0.5), degrees);

    // Shoulder 12 sits at (0.3, 0.3); extend the body horizontally from it
    landmarks.set(24, Landmark::new(0.6, 0.3 + hip_drop, 0.0));
    landmarks.set(28, Landmark::new(0.9, 0.3, 0.0));
    landmarks
}

/// Plank frame with the shoulder-hip-ankle angle at `degrees`
pub fn plank_pose(degrees: f64) -> LandmarkSet {
    let mut landmarks = LandmarkSet::full();
    place_joint(&mut landmarks, [12, 24, 28], (0.5, 0.5), degrees);
    landmarks
}
