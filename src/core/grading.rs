//! Grading: score a finished exam and group mistakes by topic.

use std::collections::HashMap;

use crate::core::exam::{Exam, Question};

/// Outcome of grading one student's answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradeSummary {
    pub score: usize,
    pub total: usize,
    /// Topics with at least one wrong or missing answer, deduplicated,
    /// in first-seen question order.
    pub incorrect_topics: Vec<String>,
}

/// Grade the answer map against the exam key. An unanswered question counts
/// as incorrect.
pub fn grade(exam: &Exam, answers: &HashMap<String, usize>) -> GradeSummary {
    let mut score = 0;
    let mut incorrect_topics: Vec<String> = Vec::new();

    for question in &exam.questions {
        if answers.get(&question.id) == Some(&question.correct_answer) {
            score += 1;
        } else if !incorrect_topics.contains(&question.topic) {
            incorrect_topics.push(question.topic.clone());
        }
    }

    GradeSummary {
        score,
        total: exam.questions.len(),
        incorrect_topics,
    }
}

/// Rounded percentage, 0 when there were no questions.
pub fn percentage(score: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u8
}

/// Questions from `topic` the student got wrong (or skipped), in exam order.
pub fn incorrect_questions<'a>(
    exam: &'a Exam,
    answers: &HashMap<String, usize>,
    topic: &str,
) -> Vec<&'a Question> {
    exam.questions
        .iter()
        .filter(|q| q.topic == topic && answers.get(&q.id) != Some(&q.correct_answer))
        .collect()
}

/// Score band driving green/yellow/red styling on every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceBand {
    High,
    Mid,
    Low,
}

impl PerformanceBand {
    /// >= 80% is High, >= 60% is Mid, below is Low.
    pub fn from_percent(percent: u8) -> Self {
        if percent >= 80 {
            PerformanceBand::High
        } else if percent >= 60 {
            PerformanceBand::Mid
        } else {
            PerformanceBand::Low
        }
    }
}
