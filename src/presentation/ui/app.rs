//! Main application orchestrator.

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tracing::{debug, info, warn};

use crate::infrastructure::config::{StorageManager, UiConfig};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::ui::{AlertPopup, LauncherCommand, LauncherController};
use crate::presentation::widgets::GraphSelect;

/// Owns the launcher and drives the terminal until the user quits.
pub struct App {
    launcher: LauncherController,
    storage: StorageManager,
    ui: UiConfig,
    running: bool,
}

impl App {
    #[must_use]
    /// Builds the app; `ui` controls how the graph list is drawn.
    pub const fn new(launcher: LauncherController, storage: StorageManager, ui: UiConfig) -> Self {
        Self {
            launcher,
            storage,
            ui,
            running: true,
        }
    }

    /// # Errors
    /// Returns error if drawing or reading terminal events fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        terminal.draw(|frame| self.render(frame))?;
        self.launcher.mount().await;

        let result = self.run_event_loop(terminal).await;

        let state = self.launcher.unmount();
        if let Err(e) = self.storage.save_state(&state) {
            warn!(error = %e, "Failed to save session state");
        }

        info!("Application exiting normally");
        result
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            let Some(event) = terminal_events.next().await else {
                debug!("Terminal event stream closed");
                break;
            };

            if let Event::Key(key) = event?
                && self.handle_key(terminal, key).await? == EventResult::Exit
            {
                self.running = false;
            }

            terminal.draw(|frame| self.render(frame))?;
        }

        Ok(())
    }

    async fn handle_key(
        &mut self,
        terminal: &mut DefaultTerminal,
        key: KeyEvent,
    ) -> color_eyre::Result<EventResult> {
        if !EventHandler::is_press(&key) {
            return Ok(EventResult::Continue);
        }

        let command = self.launcher.handle_key(key);
        if command == LauncherCommand::Quit {
            return Ok(EventResult::Exit);
        }

        if command.is_async() {
            terminal.draw(|frame| self.render(frame))?;
            self.launcher.execute(command).await;
        }

        Ok(EventResult::Consumed)
    }

    fn render(&mut self, frame: &mut Frame) {
        let [header_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let header = Line::from(vec![
            Span::styled(
                " NodeNote ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                format!("v{}", crate::VERSION),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(header), header_area);

        let timestamp_format = self
            .ui
            .show_last_opened
            .then_some(self.ui.timestamp_format.as_str());
        frame.render_stateful_widget(
            GraphSelect::new().timestamp_format(timestamp_format),
            list_area,
            self.launcher.select_state_mut(),
        );

        let footer = Line::from(Span::styled(
            "↑/↓: Move | Enter: Open | n: New Graph | Ctrl+R: Refresh | q: Quit",
            Style::default().fg(Color::DarkGray),
        ));
        frame.render_widget(Paragraph::new(footer), footer_area);

        frame.render_widget(self.launcher.modal(), frame.area());

        if let Some(alert) = self.launcher.current_alert() {
            frame.render_widget(AlertPopup::new(alert), frame.area());
        }
    }
}
