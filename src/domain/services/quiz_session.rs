#[cfg(test)]
#[path = "quiz_session_test.rs"]
mod tests;

use crate::domain::models::score;
use crate::domain::models::Action;
use crate::domain::models::Answers;
use crate::domain::models::AttemptId;
use crate::domain::models::DeleteTarget;
use crate::domain::models::Notice;
use crate::domain::models::QuizAttempt;
use crate::domain::models::QuizError;
use crate::domain::models::QuizRequest;
use crate::domain::models::SaveKind;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum View {
    Input,
    Loading,
    Quiz,
    History,
}

/// State of one quiz session. Every transition is a plain method call that
/// mutates the session and returns the service calls it needs, leaving the
/// I/O to the caller.
#[derive(Default)]
pub struct QuizSession {
    pub input: String,
    pub attempt: Option<QuizAttempt>,
    pub answers: Answers,
    pub results_revealed: bool,
    pub error: Option<String>,
    pub loading: bool,
    pub history: Vec<QuizAttempt>,
    pub showing_history: bool,
    pub notice: Option<Notice>,
    pending_delete: Option<DeleteTarget>,
}

impl QuizSession {
    pub fn view(&self) -> View {
        if self.showing_history {
            return View::History;
        }
        if self.loading {
            return View::Loading;
        }
        if self.attempt.is_some() {
            return View::Quiz;
        }

        return View::Input;
    }

    pub fn question_count(&self) -> usize {
        if let Some(attempt) = &self.attempt {
            return attempt.questions().len();
        }

        return 0;
    }

    pub fn generate(&mut self, input: &str) -> Result<Vec<Action>, QuizError> {
        if self.loading {
            return Ok(vec![]);
        }

        if input.trim().is_empty() {
            let err = QuizError::Validation;
            self.error = Some(err.to_string());
            return Err(err);
        }

        self.input = input.to_string();
        self.loading = true;
        self.error = None;
        self.attempt = None;
        self.answers = Answers::new();
        self.results_revealed = false;

        tracing::debug!(input, "Requesting quiz generation");

        return Ok(vec![Action::GenerateQuiz(QuizRequest::from_input(input))]);
    }

    pub fn handle_generated(&mut self, res: Result<QuizAttempt, QuizError>) -> Vec<Action> {
        self.loading = false;

        match res {
            Ok(attempt) => {
                tracing::debug!(
                    id = ?attempt.id,
                    questions = attempt.questions().len(),
                    "Quiz generated"
                );
                self.attempt = Some(attempt);
                return vec![Action::FetchHistory()];
            }
            Err(err) => {
                tracing::error!(error = %err, "Quiz generation failed");
                self.attempt = None;
                self.error = Some(err.to_string());
                return vec![];
            }
        }
    }

    /// Records an answer. Ignored once results are revealed, or when the index
    /// does not point at a question. The option itself is not checked against
    /// the question's options.
    pub fn select_answer(&mut self, question_idx: usize, option: &str) {
        if self.results_revealed || question_idx >= self.question_count() {
            return;
        }

        self.answers.insert(question_idx, option.to_string());
    }

    pub fn can_submit(&self) -> bool {
        let total = self.question_count();
        if self.attempt.is_none() || self.results_revealed {
            return false;
        }

        return (0..total).all(|idx| return self.answers.contains_key(&idx));
    }

    pub fn submit(&mut self) {
        self.results_revealed = true;
    }

    pub fn score(&self) -> usize {
        if let Some(attempt) = &self.attempt {
            return score(attempt.questions(), &self.answers);
        }

        return 0;
    }

    fn attempt_id(&self) -> Option<AttemptId> {
        return self.attempt.as_ref().and_then(|attempt| return attempt.id);
    }

    pub fn save_progress(&mut self) -> Vec<Action> {
        if self.answers.is_empty() {
            return vec![];
        }

        if let Some(id) = self.attempt_id() {
            return vec![Action::SaveAnswers(
                id,
                self.answers.clone(),
                SaveKind::Progress,
            )];
        }

        return vec![];
    }

    pub fn save_results(&mut self) -> Vec<Action> {
        if let Some(id) = self.attempt_id() {
            return vec![Action::SaveAnswers(
                id,
                self.answers.clone(),
                SaveKind::Results,
            )];
        }

        return vec![];
    }

    pub fn handle_saved(&mut self, kind: SaveKind, res: Result<(), QuizError>) -> Vec<Action> {
        match res {
            Ok(()) => {
                let text = match kind {
                    SaveKind::Progress => "Quiz progress saved successfully!",
                    SaveKind::Results => "Quiz results saved successfully!",
                };
                self.notice = Some(Notice::info(text));
                return vec![Action::FetchHistory()];
            }
            Err(err) => {
                tracing::error!(error = %err, kind = ?kind, "Failed to save answers");
                self.notice = Some(Notice::error(&err.to_string()));
                return vec![];
            }
        }
    }

    pub fn reset(&mut self) {
        self.input = "".to_string();
        self.attempt = None;
        self.answers = Answers::new();
        self.results_revealed = false;
        self.error = None;
    }

    pub fn show_history(&mut self) {
        if self.loading {
            return;
        }
        self.showing_history = true;
    }

    pub fn close_history(&mut self) {
        self.showing_history = false;
    }

    pub fn toggle_history(&mut self) {
        if self.showing_history {
            self.close_history();
        } else {
            self.show_history();
        }
    }

    pub fn load_from_history(&mut self, attempt: QuizAttempt) {
        self.answers = attempt.seeded_answers();
        self.results_revealed = !self.answers.is_empty();
        self.attempt = Some(attempt);
        self.error = None;
        self.showing_history = false;
    }

    pub fn pending_delete(&self) -> Option<DeleteTarget> {
        return self.pending_delete;
    }

    /// First half of a delete. Nothing is sent until `confirm_delete`.
    pub fn request_delete(&mut self, target: DeleteTarget) {
        self.pending_delete = Some(target);
    }

    pub fn confirm_delete(&mut self) -> Vec<Action> {
        if let Some(target) = self.pending_delete.take() {
            return vec![Action::DeleteAttempt(target)];
        }

        return vec![];
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn handle_deleted(
        &mut self,
        target: DeleteTarget,
        res: Result<(), QuizError>,
    ) -> Vec<Action> {
        if let Err(err) = res {
            tracing::error!(error = %err, id = target.id(), "Failed to delete quiz");
            self.notice = Some(Notice::error(&err.to_string()));
            return vec![];
        }

        match target {
            DeleteTarget::HistoryEntry(id) => {
                self.history
                    .retain(|attempt| return attempt.id != Some(id));
                return vec![];
            }
            DeleteTarget::ActiveAttempt(_) => {
                self.reset();
                return vec![Action::FetchHistory()];
            }
        }
    }

    pub fn fetch_history(&self) -> Vec<Action> {
        return vec![Action::FetchHistory()];
    }

    /// History refreshes are not user initiated, so a failure keeps the
    /// current list and is only logged.
    pub fn handle_history(&mut self, res: Result<Vec<QuizAttempt>, QuizError>) {
        match res {
            Ok(history) => {
                self.history = history;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to refresh quiz history");
            }
        }
    }

    pub fn handle_fetched(&mut self, res: Result<QuizAttempt, QuizError>) {
        match res {
            Ok(attempt) => {
                self.load_from_history(attempt);
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to load quiz");
                self.error = Some(err.to_string());
            }
        }
    }

    pub fn handle_health(&mut self, res: Result<(), QuizError>) {
        if let Err(err) = res {
            tracing::error!(error = %err, "Quiz service health check failed");
            self.error = Some(err.to_string());
        }
    }
}
