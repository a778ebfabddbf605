//! Tests that independent tracking sessions never influence each other

mod test_helpers;

use exercise_form_analyzer::{AnalysisResult, ExerciseAnalyzer};
use std::thread;
use test_helpers::{pushup_pose, squat_pose};

const SQUAT_SEQUENCE: [f64; 7] = [150.0, 85.0, 95.0, 130.0, 80.0, 125.0, 100.0];
const PUSHUP_SEQUENCE: [f64; 6] = [160.0, 70.0, 155.0, 85.0, 120.0, 165.0];

fn run_squats(analyzer: &mut ExerciseAnalyzer) -> Vec<AnalysisResult> {
    SQUAT_SEQUENCE.iter().map(|&d| analyzer.analyze_frame(&squat_pose(d))).collect()
}

fn run_pushups(analyzer: &mut ExerciseAnalyzer) -> Vec<AnalysisResult> {
    PUSHUP_SEQUENCE.iter().map(|&d| analyzer.analyze_frame(&pushup_pose(d, 0.0))).collect()
}

#[test]
fn test_interleaved_sessions_match_isolated() {
    let isolated_squats = run_squats(&mut ExerciseAnalyzer::new("squat"));
    let isolated_pushups = run_pushups(&mut ExerciseAnalyzer::new("pushup"));

    let mut squats = ExerciseAnalyzer::new("squat");
    let mut pushups = ExerciseAnalyzer::new("pushup");
    let mut interleaved_squats = Vec::new();
    let mut interleaved_pushups = Vec::new();

    for i in 0..SQUAT_SEQUENCE.len().max(PUSHUP_SEQUENCE.len()) {
        if let Some(&degrees) = SQUAT_SEQUENCE.get(i) {
            interleaved_squats.push(squats.analyze_frame(&squat_pose(degrees)));
        }
        if let Some(&degrees) = PUSHUP_SEQUENCE.get(i) {
            interleaved_pushups.push(pushups.analyze_frame(&pushup_pose(degrees, 0.0)));
        }
    }

    assert_eq!(interleaved_squats, isolated_squats);
    assert_eq!(interleaved_pushups, isolated_pushups);
    assert_eq!(squats.rep_count(), 2);
    assert_eq!(pushups.rep_count(), 2);
}

#[test]
fn test_two_sessions_same_exercise() {
    let mut first = ExerciseAnalyzer::new("squat");
    let mut second = ExerciseAnalyzer::new("squat");

    run_squats(&mut first);
    // The second session has only seen a single frame
    let result = second.analyze_frame(&squat_pose(130.0));

    assert_eq!(first.rep_count(), 2);
    assert_eq!(result.rep_count, 0);
    assert!(!second.state().is_down_position);
}

#[test]
fn test_sessions_on_separate_threads() {
    let expected = run_squats(&mut ExerciseAnalyzer::new("squat"));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                let mut analyzer = ExerciseAnalyzer::new("squat");
                run_squats(&mut analyzer)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_reset_matches_fresh_session() {
    let mut reused = ExerciseAnalyzer::new("pushup");
    run_pushups(&mut reused);
    reused.reset();

    let fresh = run_pushups(&mut ExerciseAnalyzer::new("pushup"));
    assert_eq!(run_pushups(&mut reused), fresh);
}
