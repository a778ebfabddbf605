//! Constants used throughout the analyzer

/// Number of landmarks in the body pose topology
pub const NUM_POSE_LANDMARKS: usize = 33;

/// Landmark indices of the 33-point body pose topology
pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

/// Visibility above which a landmark counts as visible
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Visibility assumed when a landmark record carries none
pub const DEFAULT_VISIBILITY: f64 = 1.0;

/// Score every frame starts from before penalties
pub const MAX_SCORE: i32 = 100;

/// Scores strictly above this count as correct form
pub const CORRECT_FORM_THRESHOLD: i32 = 70;

/// Feedback emitted when no rule fires
pub const DEFAULT_FEEDBACK: &str = "Good form! 🎉";

/// Session id used for frame records that do not carry one
pub const DEFAULT_SESSION_ID: &str = "default";
