//! Admin aggregation: average score and per-topic performance across students.

use crate::core::exam::Question;
use crate::core::grading;
use crate::core::results::ExamResult;

/// Average performance on one topic across all students.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicPerformance {
    pub topic: String,
    /// Mean of each student's percentage on this topic's questions, rounded.
    pub percent: u8,
    pub question_count: usize,
    pub student_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_students: usize,
    /// Mean of per-result percentages, rounded.
    pub average_percent: u8,
    /// One entry per topic, in first-seen question order.
    pub topics: Vec<TopicPerformance>,
}

/// Aggregate stored results against the exam's question set.
pub fn aggregate(results: &[ExamResult], questions: &[Question]) -> DashboardStats {
    let average_percent = if results.is_empty() {
        0
    } else {
        let sum: f64 = results
            .iter()
            .map(|r| (r.score as f64 / r.total_questions.max(1) as f64) * 100.0)
            .sum();
        (sum / results.len() as f64).round() as u8
    };

    let mut topics: Vec<String> = Vec::new();
    for q in questions {
        if !topics.contains(&q.topic) {
            topics.push(q.topic.clone());
        }
    }

    let topics = topics
        .into_iter()
        .map(|topic| {
            let topic_questions: Vec<&Question> =
                questions.iter().filter(|q| q.topic == topic).collect();
            let percent = if results.is_empty() || topic_questions.is_empty() {
                0
            } else {
                let sum: f64 = results
                    .iter()
                    .map(|result| {
                        let correct = topic_questions
                            .iter()
                            .filter(|q| result.answers.get(&q.id) == Some(&q.correct_answer))
                            .count();
                        (correct as f64 / topic_questions.len() as f64) * 100.0
                    })
                    .sum();
                (sum / results.len() as f64).round() as u8
            };
            TopicPerformance {
                topic,
                percent,
                question_count: topic_questions.len(),
                student_count: results.len(),
            }
        })
        .collect();

    DashboardStats {
        total_students: results.len(),
        average_percent,
        topics,
    }
}

/// Plain-text report for the `--report` CLI mode.
pub fn format_report(stats: &DashboardStats, results: &[ExamResult]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Students:      {}\n", stats.total_students));
    out.push_str(&format!("Average score: {}%\n", stats.average_percent));
    out.push_str(&format!("Topics:        {}\n", stats.topics.len()));
    out.push('\n');
    out.push_str("Topic performance\n");
    for t in &stats.topics {
        out.push_str(&format!(
            "  {:<24} {:>3}%  ({} questions)\n",
            t.topic, t.percent, t.question_count
        ));
    }
    out.push('\n');
    out.push_str("Recent results\n");
    for r in results {
        let topics = if r.incorrect_topics.is_empty() {
            "none".to_string()
        } else {
            r.incorrect_topics.join(", ")
        };
        out.push_str(&format!(
            "  {:<20} {}/{} ({}%)  to review: {}\n",
            r.student_name,
            r.score,
            r.total_questions,
            r.percentage(),
            topics
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::exam::sample_exam;
    use crate::core::grading::grade;
    use crate::core::results::ExamResult;
    use std::collections::HashMap;

    fn result_with(answers: &[(&str, usize)]) -> ExamResult {
        let exam = sample_exam();
        let answers: HashMap<String, usize> = answers
            .iter()
            .map(|(id, idx)| (id.to_string(), *idx))
            .collect();
        let summary = grade(&exam, &answers);
        ExamResult::new(&exam, "Student", "s@example.com", answers, summary)
    }

    #[test]
    fn aggregate_empty_results() {
        let exam = sample_exam();
        let stats = aggregate(&[], &exam.questions);
        assert_eq!(stats.total_students, 0);
        assert_eq!(stats.average_percent, 0);
        assert_eq!(stats.topics.len(), 2);
        assert_eq!(stats.topics[0].topic, "Algebra");
        assert_eq!(stats.topics[0].question_count, 2);
        assert_eq!(stats.topics[1].topic, "Geometry");
    }

    #[test]
    fn average_is_mean_of_percentages() {
        let exam = sample_exam();
        // 3/3 = 100% and 0/3 = 0% -> 50%.
        let results = vec![
            result_with(&[("q1", 0), ("q2", 1), ("q3", 2)]),
            result_with(&[]),
        ];
        let stats = aggregate(&results, &exam.questions);
        assert_eq!(stats.total_students, 2);
        assert_eq!(stats.average_percent, 50);
    }

    #[test]
    fn topic_performance_per_student_mean() {
        let exam = sample_exam();
        // Student 1: both Algebra right (100%); student 2: one of two (50%).
        let results = vec![
            result_with(&[("q1", 0), ("q2", 1)]),
            result_with(&[("q1", 0), ("q2", 3)]),
        ];
        let stats = aggregate(&results, &exam.questions);
        let algebra = &stats.topics[0];
        assert_eq!(algebra.percent, 75);
        assert_eq!(algebra.student_count, 2);
        // Geometry untouched by both -> 0%.
        assert_eq!(stats.topics[1].percent, 0);
    }

    #[test]
    fn report_lists_topics_and_students() {
        let exam = sample_exam();
        let results = vec![result_with(&[("q1", 0)])];
        let stats = aggregate(&results, &exam.questions);
        let report = format_report(&stats, &results);
        assert!(report.contains("Students:      1"));
        assert!(report.contains("Algebra"));
        assert!(report.contains("Student"));
        assert!(report.contains("to review:"));
    }
}
