//! Repetition counting with two-threshold hysteresis.
//!
//! The counter watches the mean of an exercise's paired primary angles. It
//! drops into the down position below one threshold and only counts a
//! repetition once the angle climbs back above a second, higher threshold,
//! so jitter around a single value cannot double count.

use crate::angles::AngleSet;

/// Hysteresis thresholds for one exercise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepThresholds {
    /// Angles averaged each frame
    pub primary: [&'static str; 2],
    /// Mean angle below which the movement is in the down position
    pub down_below: f64,
    /// Mean angle above which a down position completes a repetition
    pub up_above: f64,
}

pub const SQUAT_THRESHOLDS: RepThresholds = RepThresholds {
    primary: ["left_knee", "right_knee"],
    down_below: 90.0,
    up_above: 120.0,
};

pub const PUSHUP_THRESHOLDS: RepThresholds = RepThresholds {
    primary: ["left_elbow", "right_elbow"],
    down_below: 90.0,
    up_above: 150.0,
};

/// Up/down state machine counting completed repetitions
#[derive(Debug, Clone, PartialEq)]
pub struct RepCounter {
    thresholds: Option<RepThresholds>,
    rep_count: u32,
    is_down_position: bool,
}

impl RepCounter {
    /// Create a counter; `None` thresholds never count
    #[must_use]
    pub fn new(thresholds: Option<RepThresholds>) -> Self {
        Self {
            thresholds,
            rep_count: 0,
            is_down_position: false,
        }
    }

    /// Feed one frame of angles.
    ///
    /// `previous` is the prior frame's angle set; while it is empty (first
    /// frame of a session) no transition happens. Returns true when this
    /// frame completed a repetition.
    pub fn update(&mut self, current: &AngleSet, previous: &AngleSet) -> bool {
        let Some(thresholds) = self.thresholds else {
            return false;
        };
        if previous.is_empty() {
            return false;
        }

        let mean = current.mean_of(&thresholds.primary);

        if !self.is_down_position && mean < thresholds.down_below {
            self.is_down_position = true;
        } else if self.is_down_position && mean > thresholds.up_above {
            self.is_down_position = false;
            self.rep_count += 1;
            return true;
        }

        false
    }

    /// Completed repetitions so far
    #[must_use]
    pub fn rep_count(&self) -> u32 {
        self.rep_count
    }

    /// True while in the down position
    #[must_use]
    pub fn is_down_position(&self) -> bool {
        self.is_down_position
    }

    /// True if this counter can ever count a repetition
    #[must_use]
    pub fn is_counting(&self) -> bool {
        self.thresholds.is_some()
    }

    /// Return to the initial up position with no repetitions
    pub fn reset(&mut self) {
        self.rep_count = 0;
        self.is_down_position = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knees(degrees: i32) -> AngleSet {
        [("left_knee", degrees), ("right_knee", degrees)].into_iter().collect()
    }

    fn run(counter: &mut RepCounter, sequence: &[i32]) -> Vec<u32> {
        let mut previous = AngleSet::new();
        sequence
            .iter()
            .map(|&degrees| {
                let current = knees(degrees);
                counter.update(&current, &previous);
                previous = current;
                counter.rep_count()
            })
            .collect()
    }

    #[test]
    fn test_single_squat_rep() {
        let mut counter = RepCounter::new(Some(SQUAT_THRESHOLDS));
        assert_eq!(run(&mut counter, &[130, 80, 130]), vec![0, 0, 1]);
        assert!(!counter.is_down_position());
    }

    #[test]
    fn test_first_frame_never_transitions() {
        let mut counter = RepCounter::new(Some(SQUAT_THRESHOLDS));
        assert_eq!(run(&mut counter, &[60, 130]), vec![0, 0]);
        assert!(!counter.is_down_position());
    }

    #[test]
    fn test_hysteresis_ignores_jitter() {
        let mut counter = RepCounter::new(Some(SQUAT_THRESHOLDS));
        // Oscillating between the thresholds never completes a rep
        let reps = run(&mut counter, &[130, 85, 95, 85, 110, 88, 119, 120]);
        assert_eq!(reps.last(), Some(&0));
        assert!(counter.is_down_position());
    }

    #[test]
    fn test_multiple_reps() {
        let mut counter = RepCounter::new(Some(SQUAT_THRESHOLDS));
        let reps = run(&mut counter, &[170, 150, 100, 80, 100, 140, 160, 85, 125, 80, 121]);
        assert_eq!(reps.last(), Some(&3));
    }

    #[test]
    fn test_pushup_needs_full_extension() {
        let mut counter = RepCounter::new(Some(PUSHUP_THRESHOLDS));
        let mut previous = AngleSet::new();
        for degrees in [160, 80, 140, 151] {
            let current: AngleSet = [("left_elbow", degrees), ("right_elbow", degrees)].into_iter().collect();
            counter.update(&current, &previous);
            previous = current;
            if degrees == 140 {
                assert_eq!(counter.rep_count(), 0);
            }
        }
        assert_eq!(counter.rep_count(), 1);
    }

    #[test]
    fn test_squat_thresholds_are_strict() {
        let mut counter = RepCounter::new(Some(SQUAT_THRESHOLDS));
        assert_eq!(run(&mut counter, &[130, 90]), vec![0, 0]);
        assert!(!counter.is_down_position());

        // Exactly 120 on the way up does not complete the rep
        assert_eq!(run(&mut counter, &[130, 89, 120]), vec![0, 0, 0]);
        assert!(counter.is_down_position());
    }

    #[test]
    fn test_pushup_thresholds_are_strict() {
        let mut counter = RepCounter::new(Some(PUSHUP_THRESHOLDS));
        let mut previous = AngleSet::new();
        let mut reps = Vec::new();
        for degrees in [160, 90, 89, 150, 151] {
            let current: AngleSet = [("left_elbow", degrees), ("right_elbow", degrees)].into_iter().collect();
            counter.update(&current, &previous);
            previous = current;
            reps.push((counter.is_down_position(), counter.rep_count()));
        }
        assert_eq!(
            reps,
            vec![(false, 0), (false, 0), (true, 0), (true, 0), (false, 1)]
        );
    }

    #[test]
    fn test_without_thresholds_never_counts() {
        let mut counter = RepCounter::new(None);
        assert!(!counter.is_counting());
        assert_eq!(run(&mut counter, &[130, 10, 170, 10, 170]), vec![0; 5]);
    }

    #[test]
    fn test_reset() {
        let mut counter = RepCounter::new(Some(SQUAT_THRESHOLDS));
        run(&mut counter, &[130, 80, 130, 80]);
        assert_eq!(counter.rep_count(), 1);
        assert!(counter.is_down_position());

        counter.reset();
        assert_eq!(counter.rep_count(), 0);
        assert!(!counter.is_down_position());
    }
}
