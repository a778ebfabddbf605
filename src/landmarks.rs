//! Landmark records and fail-soft access into a landmark set.
//!
//! Landmarks arrive from the upstream pose model either as labeled maps
//! (`{x, y, z, visibility}`) or as positional sequences (`[x, y, z, visibility]`).
//! Both shapes are normalized into [`Landmark`] once, at deserialization time.
//! A slot that is neither shape is kept as malformed and reads back as the
//! origin, so a partially broken frame still produces a (penalized) analysis.

use crate::constants::{DEFAULT_VISIBILITY, NUM_POSE_LANDMARKS, VISIBILITY_THRESHOLD};
use crate::geometry::Point;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// A single body landmark
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    /// Horizontal position (0-1 normalized)
    pub x: f64,
    /// Vertical position (0-1 normalized)
    pub y: f64,
    /// Relative depth
    pub z: f64,
    /// Detection confidence in [0, 1]
    pub visibility: f64,
}

impl Landmark {
    /// Create a fully visible landmark
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            visibility: DEFAULT_VISIBILITY,
        }
    }

    /// Replace the visibility value
    #[must_use]
    pub const fn with_visibility(mut self, visibility: f64) -> Self {
        self.visibility = visibility;
        self
    }

    /// Coordinates of this landmark
    #[must_use]
    pub const fn point(&self) -> Point {
        Point::new(self.x, self.y, self.z)
    }
}

impl Default for Landmark {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl From<Landmark> for Point {
    fn from(landmark: Landmark) -> Self {
        landmark.point()
    }
}

impl From<&Landmark> for Point {
    fn from(landmark: &Landmark) -> Self {
        landmark.point()
    }
}

/// Check whether a landmark is visible.
///
/// Tracked for callers; no scoring rule gates on it.
#[must_use]
pub fn is_visible(landmark: &Landmark) -> bool {
    landmark.visibility > VISIBILITY_THRESHOLD
}

/// Ordered landmark collection indexed by the 33-point pose topology
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandmarkSet {
    slots: Vec<Option<Landmark>>,
}

impl LandmarkSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set where every slot holds a well-formed landmark
    #[must_use]
    pub fn from_landmarks(landmarks: Vec<Landmark>) -> Self {
        Self {
            slots: landmarks.into_iter().map(Some).collect(),
        }
    }

    /// Create a full 33-landmark set with every landmark at the origin
    #[must_use]
    pub fn full() -> Self {
        Self::from_landmarks(vec![Landmark::default(); NUM_POSE_LANDMARKS])
    }

    /// Place a landmark at `index`, growing the set with malformed slots if needed
    pub fn set(&mut self, index: usize, landmark: Landmark) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        self.slots[index] = Some(landmark);
    }

    /// Builder form of [`LandmarkSet::set`]
    #[must_use]
    pub fn with(mut self, index: usize, landmark: Landmark) -> Self {
        self.set(index, landmark);
        self
    }

    /// Mark the slot at `index` as malformed
    pub fn set_malformed(&mut self, index: usize) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        } else {
            self.slots[index] = None;
        }
    }

    /// Landmark at `index`, if present and well formed
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Number of slots, malformed ones included
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the set has no slots
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of well-formed, visible landmarks
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.slots.iter().flatten().filter(|landmark| is_visible(landmark)).count()
    }
}

/// Coordinates of the landmark at `index`.
///
/// Out-of-range and malformed slots yield the origin instead of failing.
#[must_use]
pub fn coords_of(landmarks: &LandmarkSet, index: usize) -> Point {
    landmarks.get(index).map_or(Point::ORIGIN, Landmark::point)
}

/// Wire shape of one landmark slot
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLandmark {
    Positional(Vec<Option<LenientNumber>>),
    Labeled {
        #[serde(default)]
        x: Option<LenientNumber>,
        #[serde(default)]
        y: Option<LenientNumber>,
        #[serde(default)]
        z: Option<LenientNumber>,
        #[serde(default)]
        visibility: Option<LenientNumber>,
    },
    Malformed(IgnoredAny),
}

/// A coordinate that may turn out not to be a number
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Number(f64),
    Other(IgnoredAny),
}

fn number_or(value: Option<&Option<LenientNumber>>, default: f64) -> f64 {
    match value {
        Some(Some(LenientNumber::Number(number))) => *number,
        _ => default,
    }
}

impl RawLandmark {
    fn into_landmark(self) -> Option<Landmark> {
        match self {
            RawLandmark::Positional(values) if values.len() >= 2 => Some(
                Landmark::new(
                    number_or(values.first(), 0.0),
                    number_or(values.get(1), 0.0),
                    number_or(values.get(2), 0.0),
                )
                .with_visibility(number_or(values.get(3), DEFAULT_VISIBILITY)),
            ),
            RawLandmark::Labeled { x, y, z, visibility } => Some(
                Landmark::new(
                    number_or(Some(&x), 0.0),
                    number_or(Some(&y), 0.0),
                    number_or(Some(&z), 0.0),
                )
                .with_visibility(number_or(Some(&visibility), DEFAULT_VISIBILITY)),
            ),
            RawLandmark::Positional(_) | RawLandmark::Malformed(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for LandmarkSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<RawLandmark>::deserialize(deserializer)?;
        Ok(Self {
            slots: raw.into_iter().map(RawLandmark::into_landmark).collect(),
        })
    }
}
