#[cfg(test)]
#[path = "question_list_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use super::wrap_lines;
use super::QuizSession;
use crate::domain::models::Question;

pub struct QuestionList<'a> {
    session: &'a QuizSession,
    question_cursor: usize,
    option_cursor: usize,
}

impl<'a> QuestionList<'a> {
    pub fn new(
        session: &'a QuizSession,
        question_cursor: usize,
        option_cursor: usize,
    ) -> QuestionList<'a> {
        return QuestionList {
            session,
            question_cursor,
            option_cursor,
        };
    }

    fn push_wrapped(lines: &mut Vec<Line<'static>>, text: &str, width: usize, style: Style) {
        for line in wrap_lines(text, width) {
            lines.push(Line::from(Span::styled(line, style)));
        }
    }

    fn question_lines(
        &self,
        lines: &mut Vec<Line<'static>>,
        idx: usize,
        question: &Question,
        width: usize,
    ) {
        let revealed = self.session.results_revealed;
        let selected = self.session.answers.get(&idx);
        let is_current = idx == self.question_cursor;

        let mut header_style = Style::default().add_modifier(Modifier::BOLD);
        if is_current && !revealed {
            header_style = header_style.fg(Color::Yellow);
        }

        let mut header = vec![Span::styled(format!("Q{}", idx + 1), header_style)];
        if !question.difficulty.is_empty() {
            header.push(Span::styled(
                format!(" [{}]", question.difficulty),
                Style::default().fg(Color::Cyan),
            ));
        }
        if revealed {
            if selected == Some(&question.correct_answer) {
                header.push(Span::styled(
                    " Correct",
                    Style::default().fg(Color::Green),
                ));
            } else {
                header.push(Span::styled(" Incorrect", Style::default().fg(Color::Red)));
            }
        }
        lines.push(Line::from(header));

        QuestionList::push_wrapped(lines, &question.text, width, Style::default());

        for (option_idx, option) in question.options.iter().enumerate() {
            let is_selected = selected == Some(option);
            let is_correct = *option == question.correct_answer;

            let cursor = if is_current && !revealed && option_idx == self.option_cursor {
                "> "
            } else {
                "  "
            };
            let marker = if is_selected { "[x]" } else { "[ ]" };

            let mut style = Style::default();
            if is_selected {
                style = style.add_modifier(Modifier::BOLD);
            }

            let mut spans = vec![Span::styled(
                format!("{cursor}{marker} {}. {option}", option_idx + 1),
                style,
            )];
            if revealed && is_correct {
                spans.push(Span::styled(" <- answer", Style::default().fg(Color::Green)));
            } else if revealed && is_selected {
                spans.push(Span::styled(" <- yours", Style::default().fg(Color::Red)));
            }
            lines.push(Line::from(spans));
        }

        if revealed && !question.explanation.is_empty() {
            QuestionList::push_wrapped(
                lines,
                &format!("Explanation: {}", question.explanation),
                width,
                Style::default().fg(Color::Gray),
            );
        }
    }

    /// Renders the open attempt as lines wrapped to `width`. Also returns the
    /// line where the question under the cursor starts, for scrolling.
    pub fn as_lines(&self, width: usize) -> (Vec<Line<'static>>, usize) {
        let mut lines: Vec<Line<'static>> = vec![];
        let mut cursor_line = 0;

        let attempt = match &self.session.attempt {
            Some(attempt) => attempt,
            None => return (lines, cursor_line),
        };

        QuestionList::push_wrapped(
            &mut lines,
            &attempt.display_title(),
            width,
            Style::default().add_modifier(Modifier::BOLD),
        );
        if let Some(summary) = &attempt.summary {
            QuestionList::push_wrapped(&mut lines, summary, width, Style::default());
        }
        lines.push(Line::from(""));

        for (idx, question) in attempt.questions().iter().enumerate() {
            if idx == self.question_cursor {
                cursor_line = lines.len();
            }
            self.question_lines(&mut lines, idx, question, width);
            lines.push(Line::from(""));
        }

        let total = attempt.questions().len();
        if self.session.results_revealed {
            lines.push(Line::from(Span::styled(
                format!("You scored {} out of {total}", self.session.score()),
                Style::default().add_modifier(Modifier::BOLD),
            )));
        } else {
            let answered = self.session.answers.len();
            let mut status = format!("Answered {answered} of {total}.");
            if self.session.can_submit() {
                status += " Press s to submit.";
            }
            lines.push(Line::from(status));
        }

        if !attempt.related_topics().is_empty() {
            lines.push(Line::from(""));
            QuestionList::push_wrapped(
                &mut lines,
                &format!("Related topics: {}", attempt.related_topics().join(", ")),
                width,
                Style::default().fg(Color::Cyan),
            );
        }

        return (lines, cursor_line);
    }
}
