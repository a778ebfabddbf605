//! Per-session frame orchestration.
//!
//! An [`ExerciseAnalyzer`] owns the state of one tracking session: the
//! exercise, the repetition counter and the previous frame's angles. Frames
//! must be fed in arrival order through `&mut self`; independent sessions
//! share nothing and can run on separate threads.

use crate::angles::{extract_angles, AngleSet};
use crate::constants::{CORRECT_FORM_THRESHOLD, DEFAULT_FEEDBACK, MAX_SCORE};
use crate::exercise::Exercise;
use crate::landmarks::LandmarkSet;
use crate::rep_counter::RepCounter;
use crate::scoring::FormScore;
use log::{debug, info, warn};
use serde::Serialize;

/// Outcome of analyzing one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Exercise selector as given when the session was created
    pub exercise: String,
    /// Form score clamped at zero
    pub accuracy: i32,
    /// Feedback lines; never empty
    pub feedback: Vec<String>,
    /// Joint angles measured in this frame
    pub angles: AngleSet,
    /// Repetitions completed so far in the session
    pub rep_count: u32,
    /// Accuracy strictly above 70
    pub is_correct_form: bool,
    /// Accuracy scaled to [0, 1]
    pub confidence: f64,
}

impl AnalysisResult {
    fn new(exercise: &str, form: FormScore, angles: AngleSet, rep_count: u32) -> Self {
        let accuracy = form.accuracy();
        let feedback = if form.feedback.is_empty() {
            vec![DEFAULT_FEEDBACK.to_string()]
        } else {
            form.feedback
        };

        Self {
            exercise: exercise.to_string(),
            accuracy,
            feedback,
            angles,
            rep_count,
            is_correct_form: accuracy > CORRECT_FORM_THRESHOLD,
            confidence: f64::from(accuracy) / f64::from(MAX_SCORE),
        }
    }
}

/// Snapshot of a session's analyzer state
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerState {
    /// Exercise the session was created for, if supported
    pub exercise_type: Option<Exercise>,
    /// Completed repetitions
    pub rep_count: u32,
    /// True while in the down position of a repetition
    pub is_down_position: bool,
    /// Angles of the last analyzed frame
    pub previous_angles: AngleSet,
}

/// Running statistics over a session's frames
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// Frames analyzed so far
    pub frames_analyzed: u64,
    /// Repetitions completed so far
    pub rep_count: u32,
    /// Mean accuracy over all frames (0 with no frames)
    pub average_accuracy: f64,
    /// Lowest accuracy seen
    pub min_accuracy: Option<i32>,
    /// Highest accuracy seen
    pub max_accuracy: Option<i32>,
    /// Frames whose form counted as correct
    pub correct_form_frames: u64,
    #[serde(skip)]
    accuracy_total: i64,
}

impl SessionSummary {
    #[allow(clippy::cast_precision_loss)] // frame counts stay far below 2^52
    fn record(&mut self, result: &AnalysisResult) {
        self.frames_analyzed += 1;
        self.rep_count = result.rep_count;
        self.accuracy_total += i64::from(result.accuracy);
        self.average_accuracy = self.accuracy_total as f64 / self.frames_analyzed as f64;
        self.min_accuracy = Some(self.min_accuracy.map_or(result.accuracy, |min| min.min(result.accuracy)));
        self.max_accuracy = Some(self.max_accuracy.map_or(result.accuracy, |max| max.max(result.accuracy)));
        if result.is_correct_form {
            self.correct_form_frames += 1;
        }
    }
}

/// Stateful analyzer for one exercise-tracking session
#[derive(Debug, Clone)]
pub struct ExerciseAnalyzer {
    exercise_name: String,
    exercise: Option<Exercise>,
    rep_counter: RepCounter,
    previous_angles: AngleSet,
    summary: SessionSummary,
}

impl ExerciseAnalyzer {
    /// Create an analyzer for the given exercise selector.
    ///
    /// Unsupported selectors are accepted; such a session measures no
    /// angles, always scores 100 and never counts repetitions.
    #[must_use]
    pub fn new(exercise: &str) -> Self {
        let parsed = Exercise::parse(exercise);
        match parsed {
            Some(kind) => debug!("Created {} analyzer", kind),
            None => warn!("Unknown exercise '{}', frames will receive a neutral analysis", exercise),
        }

        Self {
            exercise_name: exercise.to_string(),
            exercise: parsed,
            rep_counter: RepCounter::new(parsed.and_then(|kind| kind.profile().rep_thresholds)),
            previous_angles: AngleSet::new(),
            summary: SessionSummary::default(),
        }
    }

    /// Create an analyzer for a known exercise
    #[must_use]
    pub fn for_exercise(exercise: Exercise) -> Self {
        Self::new(exercise.name())
    }

    /// Analyze one frame and advance the session state
    pub fn analyze_frame(&mut self, landmarks: &LandmarkSet) -> AnalysisResult {
        let (angles, form) = match self.exercise.map(Exercise::profile) {
            Some(profile) => {
                let angles = extract_angles(profile.joints, landmarks);
                let form = (profile.score)(&angles, landmarks);
                (angles, form)
            }
            None => (AngleSet::new(), FormScore::new()),
        };

        if self.rep_counter.update(&angles, &self.previous_angles) {
            info!(
                "{} rep {} completed",
                self.exercise_name,
                self.rep_counter.rep_count()
            );
        }
        self.previous_angles = angles.clone();

        debug!(
            "{} frame: score {}, {} of {} landmarks visible",
            self.exercise_name,
            form.score,
            landmarks.visible_count(),
            landmarks.len()
        );

        let result = AnalysisResult::new(&self.exercise_name, form, angles, self.rep_counter.rep_count());
        self.summary.record(&result);
        result
    }

    /// Exercise selector this session was created with
    #[must_use]
    pub fn exercise_name(&self) -> &str {
        &self.exercise_name
    }

    /// Supported exercise of this session, if any
    #[must_use]
    pub fn exercise(&self) -> Option<Exercise> {
        self.exercise
    }

    /// Completed repetitions
    #[must_use]
    pub fn rep_count(&self) -> u32 {
        self.rep_counter.rep_count()
    }

    /// Snapshot of the session state
    #[must_use]
    pub fn state(&self) -> AnalyzerState {
        AnalyzerState {
            exercise_type: self.exercise,
            rep_count: self.rep_counter.rep_count(),
            is_down_position: self.rep_counter.is_down_position(),
            previous_angles: self.previous_angles.clone(),
        }
    }

    /// Running statistics for this session
    #[must_use]
    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Return the session to its initial state
    pub fn reset(&mut self) {
        self.rep_counter.reset();
        self.previous_angles = AngleSet::new();
        self.summary = SessionSummary::default();
    }
}

/// Analyze a single frame with a fresh analyzer.
///
/// Repetitions are never counted this way since no previous frame exists.
#[must_use]
pub fn analyze_pose(landmarks: &LandmarkSet, exercise: &str) -> AnalysisResult {
    ExerciseAnalyzer::new(exercise).analyze_frame(landmarks)
}
