//! Supported exercises and their analysis strategies.

use crate::angles::{JointAngle, LUNGE_JOINTS, PLANK_JOINTS, PUSHUP_JOINTS, SQUAT_JOINTS};
use crate::error::{Error, Result};
use crate::rep_counter::{RepThresholds, PUSHUP_THRESHOLDS, SQUAT_THRESHOLDS};
use crate::scoring::{score_lunge, score_plank, score_pushup, score_squat, ScoringRule};
use std::fmt;
use std::str::FromStr;

/// Exercise types the analyzer has rules for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exercise {
    /// Bodyweight squat
    Squat,
    /// Pushup
    Pushup,
    /// Forward lunge
    Lunge,
    /// Front plank hold
    Plank,
}

/// Everything the analyzer needs to know about one exercise
#[derive(Clone, Copy)]
pub struct ExerciseProfile {
    /// Joints measured every frame
    pub joints: &'static [JointAngle],
    /// Form rules applied to the measured angles
    pub score: ScoringRule,
    /// Repetition thresholds; `None` for exercises without rep counting
    pub rep_thresholds: Option<RepThresholds>,
    /// Short human-readable description
    pub description: &'static str,
}

static SQUAT: ExerciseProfile = ExerciseProfile {
    joints: SQUAT_JOINTS,
    score: score_squat,
    rep_thresholds: Some(SQUAT_THRESHOLDS),
    description: "Basic squat exercise for leg strength",
};

static PUSHUP: ExerciseProfile = ExerciseProfile {
    joints: PUSHUP_JOINTS,
    score: score_pushup,
    rep_thresholds: Some(PUSHUP_THRESHOLDS),
    description: "Upper body strength exercise",
};

// Lunge and plank hold no rep thresholds; their sessions always report 0 reps.
static LUNGE: ExerciseProfile = ExerciseProfile {
    joints: LUNGE_JOINTS,
    score: score_lunge,
    rep_thresholds: None,
    description: "Single leg strength and balance exercise",
};

static PLANK: ExerciseProfile = ExerciseProfile {
    joints: PLANK_JOINTS,
    score: score_plank,
    rep_thresholds: None,
    description: "Core strength and stability exercise",
};

impl Exercise {
    /// All supported exercises, in catalogue order
    pub const ALL: [Self; 4] = [Self::Squat, Self::Pushup, Self::Lunge, Self::Plank];

    /// Selector name of this exercise
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::Pushup => "pushup",
            Self::Lunge => "lunge",
            Self::Plank => "plank",
        }
    }

    /// Analysis strategy for this exercise
    #[must_use]
    pub fn profile(self) -> &'static ExerciseProfile {
        match self {
            Self::Squat => &SQUAT,
            Self::Pushup => &PUSHUP,
            Self::Lunge => &LUNGE,
            Self::Plank => &PLANK,
        }
    }

    /// Short human-readable description
    #[must_use]
    pub fn description(self) -> &'static str {
        self.profile().description
    }

    /// Parse a free-form selector, returning `None` for unsupported names
    #[must_use]
    pub fn parse(selector: &str) -> Option<Self> {
        selector.parse().ok()
    }
}

impl FromStr for Exercise {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "squat" => Ok(Self::Squat),
            "pushup" => Ok(Self::Pushup),
            "lunge" => Ok(Self::Lunge),
            "plank" => Ok(Self::Plank),
            _ => Err(Error::UnknownExercise(s.to_string())),
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
