//! TUI application state: active screen, answers, timer, scroll.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::core::config::Config;
use crate::core::exam::{Exam, MAX_TIME_LIMIT_MINUTES};
use crate::core::results::ExamResult;
use crate::core::stats::DashboardStats;

/// Which screen the app is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Exam,
    Results,
    Dashboard,
}

/// Action awaiting y/n confirmation in a popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Submit,
    Quit,
}

/// Aggregated data backing the dashboard screen.
pub struct DashboardData {
    pub stats: DashboardStats,
    pub results: Vec<ExamResult>,
}

pub struct App {
    pub(crate) config: Config,
    pub(crate) exam: Exam,
    pub(crate) screen: Screen,
    pub(crate) student_name: String,
    pub(crate) student_email: String,
    /// Index of the question on screen.
    pub(crate) current_question: usize,
    /// Option highlighted by the cursor on the current question (not yet chosen).
    pub(crate) option_cursor: usize,
    /// Question id -> chosen option index.
    pub(crate) answers: HashMap<String, usize>,
    /// When the exam time limit runs out; answers auto-submit past this.
    pub(crate) deadline: Instant,
    pub(crate) submitted: bool,
    /// Graded submission once submitted (drives the results screen).
    pub(crate) result: Option<ExamResult>,
    /// Result save failure, surfaced on the results screen.
    pub(crate) save_error: Option<String>,
    /// Numbered video links on the results screen; rebuilt each draw so digit
    /// keys can open them.
    pub(crate) video_links: Vec<String>,
    pub(crate) dashboard: Option<DashboardData>,
    /// Scroll offset for results/dashboard; clamped to last_max_scroll.
    pub(crate) scroll: usize,
    /// Max scroll from last draw (content lines minus viewport).
    pub(crate) last_max_scroll: usize,
    /// When set, show a confirmation popup and ignore normal input until y/n.
    pub(crate) confirm_popup: Option<ConfirmAction>,
}

impl App {
    /// App in exam-taking mode: timer starts immediately. The limit is clamped
    /// so the deadline arithmetic cannot overflow on an unvalidated exam.
    pub fn for_exam(config: Config, exam: Exam, student_name: String, student_email: String) -> Self {
        let minutes = exam.time_limit_minutes.min(MAX_TIME_LIMIT_MINUTES);
        let deadline = Instant::now() + Duration::from_secs(minutes * 60);
        Self {
            config,
            exam,
            screen: Screen::Exam,
            student_name,
            student_email,
            current_question: 0,
            option_cursor: 0,
            answers: HashMap::new(),
            deadline,
            submitted: false,
            result: None,
            save_error: None,
            video_links: vec![],
            dashboard: None,
            scroll: 0,
            last_max_scroll: 0,
            confirm_popup: None,
        }
    }

    /// App in admin dashboard mode for one exam's stored results.
    pub fn for_dashboard(config: Config, exam: Exam, data: DashboardData) -> Self {
        let mut app = Self::for_exam(config, exam, String::new(), String::new());
        app.screen = Screen::Dashboard;
        app.dashboard = Some(data);
        app
    }

    pub(crate) fn question_count(&self) -> usize {
        self.exam.questions.len()
    }

    pub(crate) fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub(crate) fn on_last_question(&self) -> bool {
        self.current_question + 1 == self.question_count()
    }

    /// Time left on the exam clock, zero once expired.
    pub(crate) fn time_remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    pub(crate) fn time_expired(&self) -> bool {
        self.time_remaining().is_zero()
    }

    /// Move to a question and sync the option cursor to its current answer.
    pub(crate) fn goto_question(&mut self, index: usize) {
        if index < self.question_count() {
            self.current_question = index;
            let q = &self.exam.questions[index];
            self.option_cursor = self.answers.get(&q.id).copied().unwrap_or(0);
        }
    }

    /// Record an answer for the current question.
    pub(crate) fn choose_option(&mut self, option: usize) {
        let q = &self.exam.questions[self.current_question];
        if option < q.options.len() {
            self.answers.insert(q.id.clone(), option);
            self.option_cursor = option;
        }
    }

    pub(crate) fn scroll_down(&mut self, n: usize) {
        self.scroll = (self.scroll + n).min(self.last_max_scroll);
    }

    pub(crate) fn scroll_up(&mut self, n: usize) {
        self.scroll = self.scroll.saturating_sub(n);
    }
}
