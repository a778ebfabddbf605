//! Exercise form analysis from body pose landmarks.
//!
//! This library scores exercise form frame by frame and counts repetitions
//! across a tracking session. It works on the 33-point body pose topology
//! produced by common pose detection models; detecting the landmarks is left
//! to the caller.
//!
//! The analysis pipeline for each frame consists of:
//! 1. Landmark access, which reads missing or malformed landmarks as the origin
//! 2. Joint angle extraction for the session's exercise
//! 3. Rule-based scoring that turns angles into an accuracy and feedback
//! 4. Repetition counting with two-threshold hysteresis
//!
//! Nothing in this pipeline fails: degenerate input produces penalized
//! scores instead of errors.
//!
//! # Examples
//!
//! ## Analyzing a session
//!
//! ```
//! use exercise_form_analyzer::{
//!     analyzer::ExerciseAnalyzer,
//!     landmarks::{Landmark, LandmarkSet},
//! };
//!
//! let mut analyzer = ExerciseAnalyzer::new("squat");
//!
//! let frame = LandmarkSet::full()
//!     .with(23, Landmark::new(0.4, 0.5, 0.0))
//!     .with(25, Landmark::new(0.4, 0.7, 0.0))
//!     .with(27, Landmark::new(0.6, 0.7, 0.0))
//!     .with(24, Landmark::new(0.6, 0.5, 0.0))
//!     .with(26, Landmark::new(0.6, 0.7, 0.0))
//!     .with(28, Landmark::new(0.8, 0.7, 0.0));
//!
//! let result = analyzer.analyze_frame(&frame);
//! assert_eq!(result.angles.get("left_knee"), 90);
//! assert_eq!(result.accuracy, 100);
//! assert!(result.is_correct_form);
//! ```
//!
//! ## Parsing landmarks from a client payload
//!
//! Labeled and positional landmark records can be mixed freely:
//!
//! ```
//! use exercise_form_analyzer::landmarks::{coords_of, LandmarkSet};
//!
//! let landmarks: LandmarkSet =
//!     serde_yaml::from_str(r#"[{"x": 0.1, "y": 0.2}, [0.3, 0.4, 0.0, 0.9], "garbage"]"#).unwrap();
//!
//! assert_eq!(coords_of(&landmarks, 1).x, 0.3);
//! assert_eq!(coords_of(&landmarks, 2).x, 0.0);
//! ```
//!
//! ## Listing supported exercises
//!
//! ```
//! use exercise_form_analyzer::exercise::Exercise;
//!
//! for exercise in Exercise::ALL {
//!     println!("{}: {}", exercise, exercise.description());
//! }
//! ```

/// Planar angle and distance helpers
pub mod geometry;

/// Landmark records and fail-soft landmark access
pub mod landmarks;

/// Per-exercise joint angle extraction
pub mod angles;

/// Per-exercise form scoring rules
pub mod scoring;

/// Repetition counting state machine
pub mod rep_counter;

/// Supported exercises and their analysis strategies
pub mod exercise;

/// Stateful per-session frame analysis
pub mod analyzer;

/// Frame stream driver used by the command-line tool
pub mod app;

/// Error types and result handling
pub mod error;

/// Constants used throughout the crate
pub mod constants;

/// Configuration management
pub mod config;

pub use analyzer::{analyze_pose, AnalysisResult, ExerciseAnalyzer};
pub use error::{Error, Result};
pub use exercise::Exercise;
