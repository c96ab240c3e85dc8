//! Exam data model: load an exam definition from JSON and validate it at the
//! ingestion boundary so the UI never has to re-check field invariants.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// A multiple-choice question. Optional fields carry math notation, an image
/// link, and a remediation video for the results review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub topic: String,
    pub question_text: String,
    #[serde(default)]
    pub question_latex: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub options: Vec<String>,
    /// Index into `options`.
    pub correct_answer: usize,
    #[serde(default)]
    pub explanation_latex: Option<String>,
    #[serde(default)]
    pub video_solution_url: Option<String>,
}

/// A topic with an optional full-topic explanation video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    #[serde(default)]
    pub explanation_video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: String,
    pub title: String,
    pub time_limit_minutes: u64,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

/// Upper bound on the exam time limit (24 hours). Keeps the deadline
/// arithmetic in seconds comfortably inside u64.
pub const MAX_TIME_LIMIT_MINUTES: u64 = 24 * 60;

impl Exam {
    /// Explanation video URL for a topic name, when one is configured.
    pub fn topic_video(&self, topic_name: &str) -> Option<&str> {
        self.topics
            .iter()
            .find(|t| t.name == topic_name)
            .and_then(|t| t.explanation_video_url.as_deref())
    }
}

/// Error loading an exam file.
#[derive(Debug, thiserror::Error)]
pub enum ExamError {
    #[error("Failed to read exam file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid exam: {0}")]
    Validation(String),
}

/// Load and validate an exam definition from a JSON file.
pub fn load_exam(path: &Path) -> Result<Exam, ExamError> {
    let content = fs::read_to_string(path)?;
    let exam: Exam = serde_json::from_str(&content)?;
    validate(&exam)?;
    log::debug!(
        "loaded exam '{}' ({} questions)",
        exam.title,
        exam.questions.len()
    );
    Ok(exam)
}

/// Validate field invariants the rest of the app relies on.
fn validate(exam: &Exam) -> Result<(), ExamError> {
    if exam.questions.is_empty() {
        return Err(ExamError::Validation(
            "exam must contain at least one question".to_string(),
        ));
    }
    if exam.time_limit_minutes == 0 {
        return Err(ExamError::Validation(
            "time_limit_minutes must be positive".to_string(),
        ));
    }
    if exam.time_limit_minutes > MAX_TIME_LIMIT_MINUTES {
        return Err(ExamError::Validation(format!(
            "time_limit_minutes must be at most {} (24 hours)",
            MAX_TIME_LIMIT_MINUTES
        )));
    }
    let mut seen = HashSet::new();
    for q in &exam.questions {
        if q.id.is_empty() {
            return Err(ExamError::Validation(
                "question id cannot be empty".to_string(),
            ));
        }
        if !seen.insert(q.id.as_str()) {
            return Err(ExamError::Validation(format!(
                "duplicate question id '{}'",
                q.id
            )));
        }
        if q.options.len() < 2 {
            return Err(ExamError::Validation(format!(
                "question '{}': needs at least two options",
                q.id
            )));
        }
        if q.correct_answer >= q.options.len() {
            return Err(ExamError::Validation(format!(
                "question '{}': correct_answer {} out of range for {} options",
                q.id,
                q.correct_answer,
                q.options.len()
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn sample_question(id: &str, topic: &str, correct: usize) -> Question {
    Question {
        id: id.to_string(),
        topic: topic.to_string(),
        question_text: format!("Question {}", id),
        question_latex: None,
        image_url: None,
        options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
        correct_answer: correct,
        explanation_latex: None,
        video_solution_url: None,
    }
}

#[cfg(test)]
pub(crate) fn sample_exam() -> Exam {
    Exam {
        id: "exam-1".to_string(),
        title: "Sample exam".to_string(),
        time_limit_minutes: 30,
        questions: vec![
            sample_question("q1", "Algebra", 0),
            sample_question("q2", "Algebra", 1),
            sample_question("q3", "Geometry", 2),
        ],
        topics: vec![
            Topic {
                name: "Algebra".to_string(),
                explanation_video_url: Some("https://youtu.be/alg".to_string()),
            },
            Topic {
                name: "Geometry".to_string(),
                explanation_video_url: None,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_exam_passes() {
        assert!(validate(&sample_exam()).is_ok());
    }

    #[test]
    fn empty_questions_rejected() {
        let mut exam = sample_exam();
        exam.questions.clear();
        assert!(matches!(validate(&exam), Err(ExamError::Validation(_))));
    }

    #[test]
    fn zero_time_limit_rejected() {
        let mut exam = sample_exam();
        exam.time_limit_minutes = 0;
        assert!(matches!(validate(&exam), Err(ExamError::Validation(_))));
    }

    #[test]
    fn excessive_time_limit_rejected() {
        let mut exam = sample_exam();
        exam.time_limit_minutes = MAX_TIME_LIMIT_MINUTES + 1;
        let err = validate(&exam).unwrap_err();
        assert!(err.to_string().contains("at most"));
        exam.time_limit_minutes = MAX_TIME_LIMIT_MINUTES;
        assert!(validate(&exam).is_ok());
    }

    #[test]
    fn duplicate_question_id_rejected() {
        let mut exam = sample_exam();
        exam.questions[1].id = "q1".to_string();
        let err = validate(&exam).unwrap_err();
        assert!(err.to_string().contains("duplicate question id"));
    }

    #[test]
    fn out_of_range_answer_rejected() {
        let mut exam = sample_exam();
        exam.questions[0].correct_answer = 4;
        let err = validate(&exam).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn single_option_rejected() {
        let mut exam = sample_exam();
        exam.questions[0].options = vec!["only".into()];
        exam.questions[0].correct_answer = 0;
        assert!(matches!(validate(&exam), Err(ExamError::Validation(_))));
    }

    #[test]
    fn load_exam_from_file() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join("exam.json");
        let json = serde_json::to_string_pretty(&sample_exam()).unwrap();
        std::fs::write(&path, json).unwrap();
        let exam = load_exam(&path).expect("load");
        assert_eq!(exam.questions.len(), 3);
        assert_eq!(exam.topic_video("Algebra"), Some("https://youtu.be/alg"));
        assert_eq!(exam.topic_video("Geometry"), None);
    }

    #[test]
    fn load_exam_invalid_json() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join("exam.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(load_exam(&path), Err(ExamError::Json(_))));
    }

    #[test]
    fn load_exam_missing_file() {
        let path = std::path::Path::new("/nonexistent/exam.json");
        assert!(matches!(load_exam(path), Err(ExamError::Io(_))));
    }
}
