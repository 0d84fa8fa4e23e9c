#[cfg(test)]
#[path = "history_list_test.rs"]
mod tests;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::domain::models::score;
use crate::domain::models::QuizAttempt;

pub struct HistoryList<'a> {
    history: &'a [QuizAttempt],
}

impl<'a> HistoryList<'a> {
    pub fn new(history: &'a [QuizAttempt]) -> HistoryList<'a> {
        return HistoryList { history };
    }

    fn format_entry(attempt: &QuizAttempt) -> String {
        let mut res = attempt.display_title();

        if let Some(date) = attempt.created_date() {
            res = format!("{res} ({date})");
        }

        let answers = attempt.seeded_answers();
        if !answers.is_empty() {
            res = format!(
                "{res}, scored {} of {}",
                score(attempt.questions(), &answers),
                attempt.questions().len()
            );
        }

        return res;
    }

    pub fn entries(&self) -> Vec<String> {
        return self
            .history
            .iter()
            .map(|attempt| return HistoryList::format_entry(attempt))
            .collect();
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, selected: usize) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .title("Quiz History")
            .padding(Padding::new(1, 1, 0, 0));

        if self.history.is_empty() {
            frame.render_widget(
                Paragraph::new("No quizzes generated yet.").block(block),
                rect,
            );
            return;
        }

        let items = self
            .entries()
            .into_iter()
            .map(|entry| return ListItem::new(entry))
            .collect::<Vec<ListItem>>();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let mut state = ListState::default();
        state.select(Some(selected));
        frame.render_stateful_widget(list, rect, &mut state);
    }
}
