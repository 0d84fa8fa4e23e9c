use ratatui::prelude::Alignment;
use ratatui::prelude::Backend;
use ratatui::prelude::Constraint;
use ratatui::prelude::Direction;
use ratatui::prelude::Layout;
use ratatui::prelude::Rect;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::DeleteTarget;

pub struct Confirm {
    text: String,
}

impl Confirm {
    pub fn delete(target: &DeleteTarget) -> Confirm {
        return Confirm {
            text: format!(
                "Are you sure you want to delete quiz {}?\n\n(y) Delete   (n) Cancel",
                target.id()
            ),
        };
    }

    pub fn text(&self) -> &str {
        return &self.text;
    }

    fn centered(rect: Rect) -> Rect {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Percentage(35),
                Constraint::Length(7),
                Constraint::Percentage(35),
            ])
            .split(rect);

        return Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Percentage(20),
                Constraint::Percentage(60),
                Constraint::Percentage(20),
            ])
            .split(vertical[1])[1];
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect) {
        let area = Confirm::centered(rect);
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(self.text.to_string())
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Double)
                        .title("Delete quiz")
                        .padding(Padding::new(1, 1, 0, 0)),
                )
                .alignment(Alignment::Center),
            area,
        );
    }
}
