//! Persistence of exam results in ~/.local/share/examdeck/results/.

mod storage;

use std::collections::HashMap;
use std::io;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::exam::Exam;
use crate::core::grading::{self, GradeSummary};

/// One student's graded submission, as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamResult {
    pub id: String,
    pub exam_id: String,
    pub student_name: String,
    pub student_email: String,
    /// Question id -> chosen option index. Unanswered questions are absent.
    pub answers: HashMap<String, usize>,
    pub score: usize,
    pub total_questions: usize,
    pub incorrect_topics: Vec<String>,
    /// Unix timestamp (seconds).
    pub completed_at: u64,
}

impl ExamResult {
    /// Build a result from a graded submission, stamped with a fresh id and
    /// the current time.
    pub fn new(
        exam: &Exam,
        student_name: &str,
        student_email: &str,
        answers: HashMap<String, usize>,
        summary: GradeSummary,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            exam_id: exam.id.clone(),
            student_name: student_name.to_string(),
            student_email: student_email.to_string(),
            answers,
            score: summary.score,
            total_questions: summary.total,
            incorrect_topics: summary.incorrect_topics,
            completed_at: chrono::Utc::now().timestamp().max(0) as u64,
        }
    }

    pub fn percentage(&self) -> u8 {
        grading::percentage(self.score, self.total_questions)
    }
}

/// Append a result to the store. Creates the data directory on first use.
pub fn save_result(result: &ExamResult) -> io::Result<()> {
    let mut all = storage::load_all()?;
    all.push(result.clone());
    storage::save_all(&all)?;
    log::info!(
        "saved result {} for {} ({}/{})",
        result.id,
        result.student_name,
        result.score,
        result.total_questions
    );
    Ok(())
}

/// All stored results, oldest first. Empty on first run.
pub fn load_results() -> io::Result<Vec<ExamResult>> {
    storage::load_all()
}

/// Stored results for one exam, newest first (dashboard "recent results" order).
pub fn load_results_for_exam(exam_id: &str) -> io::Result<Vec<ExamResult>> {
    let mut results: Vec<ExamResult> = storage::load_all()?
        .into_iter()
        .filter(|r| r.exam_id == exam_id)
        .collect();
    results.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
    Ok(results)
}
