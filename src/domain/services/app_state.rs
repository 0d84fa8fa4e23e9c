#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use tui_textarea::Input;
use tui_textarea::Key;

use super::QuizSession;
use super::View;
use crate::domain::models::Action;
use crate::domain::models::AttemptId;
use crate::domain::models::DeleteTarget;
use crate::domain::models::Event;
use crate::domain::models::TextArea;

// Notices stay up for six UI ticks of 500ms.
const NOTICE_TICKS: u8 = 6;

pub struct AppState<'a> {
    pub session: QuizSession,
    pub textarea: tui_textarea::TextArea<'a>,
    pub question_cursor: usize,
    pub option_cursor: usize,
    pub history_cursor: usize,
    notice_ticks: u8,
}

impl<'a> Default for AppState<'a> {
    fn default() -> AppState<'a> {
        return AppState {
            session: QuizSession::default(),
            textarea: TextArea::default(),
            question_cursor: 0,
            option_cursor: 0,
            history_cursor: 0,
            notice_ticks: 0,
        };
    }
}

impl<'a> AppState<'a> {
    /// Builds the initial state along with the requests to run at startup. An
    /// attempt id opens that attempt, otherwise a non-empty input generates a
    /// quiz straight away.
    pub fn new(attempt_id: Option<AttemptId>, input: &str) -> (AppState<'a>, Vec<Action>) {
        let mut app_state = AppState::default();
        let mut actions = vec![Action::HealthCheck()];
        actions.append(&mut app_state.session.fetch_history());

        if let Some(id) = attempt_id {
            actions.push(Action::FetchAttempt(id));
        } else if !input.trim().is_empty() {
            app_state.textarea.insert_str(input);
            if let Ok(mut generate) = app_state.session.generate(input) {
                actions.append(&mut generate);
            }
        }

        return (app_state, actions);
    }

    pub fn input_text(&self) -> String {
        return self.textarea.lines().join("\n");
    }

    /// Applies one event. Returns whether the app should exit, and the
    /// service calls to dispatch.
    pub fn handle_event(&mut self, event: Event) -> (bool, Vec<Action>) {
        match event {
            Event::KeyboardCTRLC() => {
                return (true, vec![]);
            }
            Event::UITick() => {
                self.tick();
                return (false, vec![]);
            }
            Event::UIResize() => {
                return (false, vec![]);
            }
            Event::QuizGenerated(res) => {
                self.reset_cursors();
                return (false, self.session.handle_generated(res));
            }
            Event::HistoryFetched(res) => {
                self.session.handle_history(res);
                self.clamp_history_cursor();
                return (false, vec![]);
            }
            Event::AttemptFetched(res) => {
                self.reset_cursors();
                self.session.handle_fetched(res);
                return (false, vec![]);
            }
            Event::AnswersSaved(kind, res) => {
                self.notice_ticks = 0;
                return (false, self.session.handle_saved(kind, res));
            }
            Event::AttemptDeleted(target, res) => {
                self.notice_ticks = 0;
                let cleared = res.is_ok() && matches!(target, DeleteTarget::ActiveAttempt(_));
                let actions = self.session.handle_deleted(target, res);
                if cleared {
                    self.textarea = TextArea::default();
                    self.reset_cursors();
                }
                self.clamp_history_cursor();
                return (false, actions);
            }
            Event::HealthChecked(res) => {
                self.session.handle_health(res);
                return (false, vec![]);
            }
            _ => (),
        }

        if self.session.pending_delete().is_some() {
            return (false, self.handle_confirm(event));
        }

        if let Event::KeyboardCTRLL() = event {
            self.session.toggle_history();
            return (false, vec![]);
        }

        let actions = match self.session.view() {
            View::Input => self.handle_input_view(event),
            View::Loading => vec![],
            View::Quiz => self.handle_quiz_view(event),
            View::History => self.handle_history_view(event),
        };

        return (false, actions);
    }

    fn tick(&mut self) {
        if self.session.notice.is_none() {
            self.notice_ticks = 0;
            return;
        }

        self.notice_ticks += 1;
        if self.notice_ticks >= NOTICE_TICKS {
            self.session.notice = None;
            self.notice_ticks = 0;
        }
    }

    fn reset_cursors(&mut self) {
        self.question_cursor = 0;
        self.option_cursor = 0;
    }

    fn clamp_history_cursor(&mut self) {
        let len = self.session.history.len();
        if self.history_cursor >= len {
            self.history_cursor = len.saturating_sub(1);
        }
    }

    fn option_count(&self) -> usize {
        if let Some(attempt) = &self.session.attempt {
            if let Some(question) = attempt.questions().get(self.question_cursor) {
                return question.options.len();
            }
        }

        return 0;
    }

    fn handle_confirm(&mut self, event: Event) -> Vec<Action> {
        match event {
            Event::KeyboardCharInput(Input {
                key: Key::Char('y'),
                ..
            }) => {
                return self.session.confirm_delete();
            }
            Event::KeyboardCharInput(Input {
                key: Key::Char('n'),
                ..
            })
            | Event::KeyboardEsc() => {
                self.session.cancel_delete();
            }
            _ => (),
        }

        return vec![];
    }

    fn handle_input_view(&mut self, event: Event) -> Vec<Action> {
        match event {
            Event::KeyboardEnter() => {
                // Validation failures are kept on the session as the inline error.
                if let Ok(actions) = self.session.generate(&self.input_text()) {
                    return actions;
                }
            }
            Event::KeyboardPaste(text) => {
                self.textarea.insert_str(&text.replace(['\n', '\r'], " "));
            }
            Event::KeyboardCharInput(input) => {
                self.textarea.input(input);
            }
            _ => (),
        }

        return vec![];
    }

    fn select_option(&mut self, option_idx: usize) {
        let option = match &self.session.attempt {
            Some(attempt) => attempt
                .questions()
                .get(self.question_cursor)
                .and_then(|question| return question.options.get(option_idx).cloned()),
            None => None,
        };

        if self.session.results_revealed {
            return;
        }

        if let Some(option) = option {
            self.session.select_answer(self.question_cursor, &option);
            self.option_cursor = option_idx;
            if self.question_cursor + 1 < self.session.question_count() {
                self.question_cursor += 1;
                self.option_cursor = 0;
            }
        }
    }

    fn move_question(&mut self, forward: bool) {
        let total = self.session.question_count();
        if forward && self.question_cursor + 1 < total {
            self.question_cursor += 1;
            self.option_cursor = 0;
        } else if !forward && self.question_cursor > 0 {
            self.question_cursor -= 1;
            self.option_cursor = 0;
        }
    }

    fn handle_quiz_view(&mut self, event: Event) -> Vec<Action> {
        match event {
            Event::KeyboardEnter() => {
                self.select_option(self.option_cursor);
            }
            Event::KeyboardCharInput(input) => match input {
                Input { key: Key::Up, .. } => {
                    self.option_cursor = self.option_cursor.saturating_sub(1);
                }
                Input { key: Key::Down, .. } => {
                    if self.option_cursor + 1 < self.option_count() {
                        self.option_cursor += 1;
                    }
                }
                Input { key: Key::Left, .. } => {
                    self.move_question(false);
                }
                Input {
                    key: Key::Right, ..
                }
                | Input { key: Key::Tab, .. } => {
                    self.move_question(true);
                }
                Input {
                    key: Key::Char(ch), ..
                } if ch.is_ascii_digit() && ch != '0' => {
                    if let Some(digit) = ch.to_digit(10) {
                        self.select_option(digit as usize - 1);
                    }
                }
                Input {
                    key: Key::Char('s'),
                    ..
                } => {
                    if self.session.can_submit() {
                        self.session.submit();
                    }
                }
                Input {
                    key: Key::Char('p'),
                    ..
                } => {
                    return self.session.save_progress();
                }
                Input {
                    key: Key::Char('v'),
                    ..
                } => {
                    if self.session.results_revealed {
                        return self.session.save_results();
                    }
                }
                Input {
                    key: Key::Char('n'),
                    ..
                } => {
                    self.session.reset();
                    self.textarea = TextArea::default();
                    self.reset_cursors();
                }
                Input {
                    key: Key::Char('d'),
                    ..
                } => {
                    let id = self
                        .session
                        .attempt
                        .as_ref()
                        .and_then(|attempt| return attempt.id);
                    if let Some(id) = id {
                        self.session.request_delete(DeleteTarget::ActiveAttempt(id));
                    }
                }
                _ => (),
            },
            _ => (),
        }

        return vec![];
    }

    fn handle_history_view(&mut self, event: Event) -> Vec<Action> {
        match event {
            Event::KeyboardEsc() => {
                self.session.close_history();
            }
            Event::KeyboardEnter() => {
                if let Some(attempt) = self.session.history.get(self.history_cursor).cloned() {
                    self.reset_cursors();
                    self.session.load_from_history(attempt);
                }
            }
            Event::KeyboardCharInput(input) => match input {
                Input { key: Key::Up, .. } => {
                    self.history_cursor = self.history_cursor.saturating_sub(1);
                }
                Input { key: Key::Down, .. } => {
                    if self.history_cursor + 1 < self.session.history.len() {
                        self.history_cursor += 1;
                    }
                }
                Input {
                    key: Key::Char('d'),
                    ..
                } => {
                    let id = self
                        .session
                        .history
                        .get(self.history_cursor)
                        .and_then(|attempt| return attempt.id);
                    if let Some(id) = id {
                        self.session.request_delete(DeleteTarget::HistoryEntry(id));
                    }
                }
                _ => (),
            },
            _ => (),
        }

        return vec![];
    }
}
