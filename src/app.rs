//! Frame stream driver.
//!
//! Reads recorded landmark frames, one record per line in JSON or YAML flow
//! syntax, routes each frame to the analyzer of its session and writes one
//! YAML document per result.

use crate::analyzer::{AnalysisResult, ExerciseAnalyzer, SessionSummary};
use crate::angles::AngleSet;
use crate::config::Config;
use crate::constants::DEFAULT_SESSION_ID;
use crate::error::{Error, Result};
use crate::landmarks::LandmarkSet;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::{BufRead, Write};

/// Driver configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Exercise for frames that do not name one
    pub default_exercise: String,
    /// Include joint angles in each written result
    pub include_angles: bool,
    /// Write per-session summaries after the last frame
    pub summary: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for AppConfig {
    fn from(config: &Config) -> Self {
        Self {
            default_exercise: config.session.default_exercise.clone(),
            include_angles: config.output.include_angles,
            summary: config.output.summary,
        }
    }
}

/// One input line: a frame of landmarks plus routing information
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRecord {
    /// Landmarks of this frame
    pub landmarks: LandmarkSet,
    /// Exercise selector
    #[serde(default)]
    pub exercise: Option<String>,
    /// Tracking session this frame belongs to
    #[serde(default)]
    pub session_id: Option<String>,
    /// Capture time supplied by the client
    #[serde(default)]
    pub timestamp: Option<f64>,
}

impl FrameRecord {
    /// Parse a single line of input
    pub fn parse(line_number: usize, line: &str) -> Result<Self> {
        serde_yaml::from_str(line).map_err(|e| Error::FrameParse {
            line: line_number,
            message: e.to_string(),
        })
    }
}

/// Written form of one frame result
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameReport<'a> {
    session_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<f64>,
    exercise: &'a str,
    accuracy: i32,
    feedback: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    angles: Option<&'a AngleSet>,
    rep_count: u32,
    is_correct_form: bool,
    confidence: f64,
}

/// Written form of one session summary
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryReport<'a> {
    session_id: &'a str,
    exercise: &'a str,
    #[serde(flatten)]
    summary: &'a SessionSummary,
}

/// Routes a stream of frames to per-session analyzers
pub struct FormAnalysisApp {
    config: AppConfig,
    sessions: HashMap<String, ExerciseAnalyzer>,
    session_order: Vec<String>,
}

impl FormAnalysisApp {
    /// Create a driver with no sessions
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        info!("Default exercise: {}", config.default_exercise);
        Self {
            config,
            sessions: HashMap::new(),
            session_order: Vec::new(),
        }
    }

    /// Analyze one frame record, creating its session on first sight
    pub fn process_frame(&mut self, record: &FrameRecord) -> AnalysisResult {
        let session_id = record.session_id.as_deref().unwrap_or(DEFAULT_SESSION_ID);
        let requested = record.exercise.as_deref().unwrap_or(&self.config.default_exercise);

        let analyzer = match self.sessions.entry(session_id.to_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                info!("Starting session '{}' ({})", session_id, requested);
                self.session_order.push(session_id.to_string());
                entry.insert(ExerciseAnalyzer::new(requested))
            }
        };

        if record.exercise.is_some() && !requested.trim().eq_ignore_ascii_case(analyzer.exercise_name().trim()) {
            warn!(
                "Session '{}' is tracking {}, ignoring exercise '{}' on this frame",
                session_id,
                analyzer.exercise_name(),
                requested
            );
        }

        analyzer.analyze_frame(&record.landmarks)
    }

    /// Process every line of `reader`, writing results to `writer`.
    ///
    /// Returns the number of frames analyzed. Blank lines and lines starting
    /// with `#` are skipped; any other line that is not a frame record stops
    /// processing with [`Error::FrameParse`].
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> Result<usize> {
        let mut frames = 0;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let record = FrameRecord::parse(index + 1, trimmed)?;
            let result = self.process_frame(&record);
            let session_id = record.session_id.as_deref().unwrap_or(DEFAULT_SESSION_ID);
            self.write_result(&mut writer, session_id, record.timestamp, &result)?;
            frames += 1;
        }

        debug!("Processed {} frames across {} sessions", frames, self.session_order.len());

        if self.config.summary {
            self.write_summaries(&mut writer)?;
        }
        writer.flush()?;

        Ok(frames)
    }

    fn write_result<W: Write>(
        &self,
        writer: &mut W,
        session_id: &str,
        timestamp: Option<f64>,
        result: &AnalysisResult,
    ) -> Result<()> {
        let report = FrameReport {
            session_id,
            timestamp,
            exercise: &result.exercise,
            accuracy: result.accuracy,
            feedback: &result.feedback,
            angles: self.config.include_angles.then_some(&result.angles),
            rep_count: result.rep_count,
            is_correct_form: result.is_correct_form,
            confidence: result.confidence,
        };
        write_document(writer, &report)
    }

    /// Write one summary document per session, in first-seen order
    pub fn write_summaries<W: Write>(&self, writer: &mut W) -> Result<()> {
        for (session_id, analyzer) in self.sessions_in_order() {
            let report = SummaryReport {
                session_id,
                exercise: analyzer.exercise_name(),
                summary: analyzer.summary(),
            };
            write_document(writer, &report)?;
        }
        Ok(())
    }

    /// Sessions in the order their first frame arrived
    pub fn sessions_in_order(&self) -> impl Iterator<Item = (&str, &ExerciseAnalyzer)> + '_ {
        self.session_order
            .iter()
            .filter_map(|id| self.sessions.get(id).map(|analyzer| (id.as_str(), analyzer)))
    }

    /// Analyzer of a session, if it has seen a frame
    #[must_use]
    pub fn session(&self, session_id: &str) -> Option<&ExerciseAnalyzer> {
        self.sessions.get(session_id)
    }

    /// Number of sessions seen so far
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.session_order.len()
    }
}

fn write_document<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<()> {
    let body = serde_yaml::to_string(value)?;
    writer.write_all(b"---\n")?;
    writer.write_all(body.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRAIGHT_LEGS: &str = "[[0,0],[0,0],[0,0],[0,0],[0,0],[0,0],[0,0],[0,0],[0,0],[0,0],[0,0],\
        [0,0],[0,0],[0,0],[0,0],[0,0],[0,0],[0,0],[0,0],[0,0],[0,0],[0,0],[0,0],\
        [0.4,0.5],[0.6,0.5],[0.4,0.7],[0.6,0.7],[0.4,0.9],[0.6,0.9]]";

    #[test]
    fn test_parse_frame_record() {
        let line = format!(r#"{{"landmarks": {STRAIGHT_LEGS}, "exercise": "squat", "sessionId": "a", "timestamp": 1.5}}"#);
        let record = FrameRecord::parse(1, &line).unwrap();
        assert_eq!(record.landmarks.len(), 29);
        assert_eq!(record.exercise.as_deref(), Some("squat"));
        assert_eq!(record.session_id.as_deref(), Some("a"));
        assert_eq!(record.timestamp, Some(1.5));
    }

    #[test]
    fn test_parse_error_reports_line() {
        match FrameRecord::parse(7, r#"{"exercise": "squat"}"#) {
            Err(Error::FrameParse { line, .. }) => assert_eq!(line, 7),
            other => panic!("Expected FrameParse, got {other:?}"),
        }
    }

    #[test]
    fn test_default_session_and_exercise() {
        let mut app = FormAnalysisApp::new(AppConfig::default());
        let record = FrameRecord::parse(1, &format!("{{landmarks: {STRAIGHT_LEGS}}}")).unwrap();
        let result = app.process_frame(&record);

        assert_eq!(result.exercise, "squat");
        assert_eq!(result.angles.get("left_knee"), 180);
        assert_eq!(app.session_count(), 1);
        assert!(app.session(DEFAULT_SESSION_ID).is_some());
    }

    #[test]
    fn test_session_keeps_first_exercise() {
        let mut app = FormAnalysisApp::new(AppConfig::default());
        let first = FrameRecord::parse(1, &format!("{{landmarks: {STRAIGHT_LEGS}, exercise: plank}}")).unwrap();
        let second = FrameRecord::parse(2, &format!("{{landmarks: {STRAIGHT_LEGS}, exercise: squat}}")).unwrap();

        app.process_frame(&first);
        let result = app.process_frame(&second);
        assert_eq!(result.exercise, "plank");
    }

    #[test]
    fn test_run_writes_documents() {
        let input = format!(
            "# recorded session\n{{landmarks: {STRAIGHT_LEGS}, sessionId: a}}\n\n{{landmarks: {STRAIGHT_LEGS}, sessionId: b, exercise: burpee}}\n"
        );
        let config = AppConfig {
            include_angles: false,
            summary: true,
            ..AppConfig::default()
        };
        let mut app = FormAnalysisApp::new(config);
        let mut output = Vec::new();

        let frames = app.run(input.as_bytes(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert_eq!(frames, 2);
        // Two results plus two summaries
        assert_eq!(text.matches("---\n").count(), 4);
        assert!(!text.contains("angles"));
        assert!(text.contains("framesAnalyzed: 1"));
        assert!(text.contains("exercise: burpee"));
    }

    #[test]
    fn test_run_stops_on_bad_line() {
        let input = format!("{{landmarks: {STRAIGHT_LEGS}}}\nnot a frame\n");
        let mut app = FormAnalysisApp::new(AppConfig::default());
        match app.run(input.as_bytes(), Vec::new()) {
            Err(Error::FrameParse { line, .. }) => assert_eq!(line, 2),
            other => panic!("Expected FrameParse, got {other:?}"),
        }
    }
}
