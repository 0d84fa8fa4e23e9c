use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::EnableBracketedPaste;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::AttemptId;
use crate::domain::models::Confirm;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::NoticeType;
use crate::domain::services::events::EventsService;
use crate::domain::services::AppState;
use crate::domain::services::HistoryList;
use crate::domain::services::QuestionList;
use crate::domain::services::View;

fn hints(view: View) -> &'static str {
    match view {
        View::Input => return "Enter generate | CTRL+L history | CTRL+C quit",
        View::Loading => return "CTRL+C quit",
        View::Quiz => {
            return "Up/Down option | Left/Right question | Enter/1-9 select | s submit | p save progress | v save results | n new | d delete | CTRL+L history"
        }
        View::History => return "Up/Down move | Enter open | d delete | Esc close",
    }
}

fn status_line(app_state: &AppState<'_>) -> Line<'static> {
    if let Some(notice) = &app_state.session.notice {
        let color = match notice.notice_type() {
            NoticeType::Info => Color::Green,
            NoticeType::Error => Color::Red,
        };

        return Line::from(Span::styled(
            notice.text.to_string(),
            Style::default().fg(color),
        ));
    }

    if let Some(error) = &app_state.session.error {
        return Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red),
        ));
    }

    return Line::from("");
}

fn render_quiz<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState<'_>) {
    // Borders and padding take two columns on each side.
    let width = rect.width.saturating_sub(4) as usize;
    let (lines, cursor_line) = QuestionList::new(
        &app_state.session,
        app_state.question_cursor,
        app_state.option_cursor,
    )
    .as_lines(width);

    let height = rect.height.saturating_sub(2) as usize;
    let offset = cursor_line.saturating_sub(height / 3);

    let title = app_state
        .session
        .attempt
        .as_ref()
        .map(|attempt| return attempt.display_title())
        .unwrap_or_default();

    frame.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(title)
                    .padding(Padding::new(1, 1, 0, 0)),
            )
            .scroll((offset as u16, 0)),
        rect,
    );
}

fn render<B: Backend>(frame: &mut Frame<B>, app_state: &AppState<'_>, loading: &Loading) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let view = app_state.session.view();
    match view {
        View::Input => {
            let input_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Length(3), Constraint::Min(0)])
                .split(layout[0]);
            frame.render_widget(app_state.textarea.widget(), input_layout[0]);
        }
        View::Loading => {
            let loading_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Length(3), Constraint::Min(0)])
                .split(layout[0]);
            loading.render(frame, loading_layout[0]);
        }
        View::Quiz => {
            render_quiz(frame, layout[0], app_state);
        }
        View::History => {
            HistoryList::new(&app_state.session.history).render(
                frame,
                layout[0],
                app_state.history_cursor,
            );
        }
    }

    frame.render_widget(Paragraph::new(status_line(app_state)), layout[1]);
    frame.render_widget(
        Paragraph::new(hints(view)).style(Style::default().fg(Color::DarkGray)),
        layout[2],
    );

    if let Some(target) = app_state.session.pending_delete() {
        Confirm::delete(&target).render(frame, frame.size());
    }
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState<'_>,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut loading = Loading::default();
    let mut events = EventsService::new(rx);

    loop {
        terminal.draw(|frame| {
            render(frame, app_state, &loading);
        })?;

        let event = events.next().await?;
        if let Event::UITick() = event {
            loading.tick();
        }

        let (should_break, actions) = app_state.handle_event(event);
        for action in actions {
            tx.send(action)?;
        }

        if should_break {
            break;
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    );
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let attempt_id = Config::get(ConfigKey::AttemptID)
        .parse::<AttemptId>()
        .ok();
    let (mut app_state, actions) = AppState::new(attempt_id, &Config::get(ConfigKey::Input));
    for action in actions {
        tx.send(action)?;
    }

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste
    )?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    start_loop(&mut terminal, &mut app_state, tx, rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
