//! Graph creation modal.

use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::presentation::events::EventHandler;
use crate::presentation::widgets::TextInput;

/// Outcome of the last directory pick, shown under the name field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryStatus {
    /// Nothing picked yet.
    Unset,
    /// A directory was chosen.
    Selected(PathBuf),
    /// The picker was cancelled.
    NotSelected,
    /// The picker could not be shown.
    Failed,
}

impl DirectoryStatus {
    /// Status line text, or `None` when nothing should be shown.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        match self {
            Self::Unset => None,
            Self::Selected(path) => Some(format!("Selected Directory: {}", path.display())),
            Self::NotSelected => Some("No directory selected".to_string()),
            Self::Failed => Some("Failed to select directory".to_string()),
        }
    }

    const fn color(&self) -> Color {
        match self {
            Self::Selected(_) => Color::Green,
            Self::Failed => Color::Red,
            Self::Unset | Self::NotSelected => Color::DarkGray,
        }
    }
}

/// What a key press inside the modal asks the launcher to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateGraphModalAction {
    /// Handled inside the modal.
    None,
    /// Open the directory picker.
    PickDirectory,
    /// Submit the form.
    Submit,
    /// Close the modal.
    Close,
}

/// Modal form collecting a graph name and base directory.
pub struct CreateGraphModal {
    visible: bool,
    name_input: TextInput,
    directory: Option<PathBuf>,
    status: DirectoryStatus,
    busy: bool,
}

impl CreateGraphModal {
    /// Creates a hidden, empty form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            visible: false,
            name_input: TextInput::new(" Graph name ").placeholder("My Graph"),
            directory: None,
            status: DirectoryStatus::Unset,
            busy: false,
        }
    }

    /// Shows the modal and focuses the name field.
    pub fn open(&mut self) {
        self.visible = true;
        self.name_input.set_focused(true);
    }

    /// Hides the modal, keeping the typed name and chosen directory.
    pub fn close(&mut self) {
        self.visible = false;
        self.busy = false;
        self.name_input.set_focused(false);
    }

    /// Whether the modal is shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Raw text of the name field.
    #[must_use]
    pub fn graph_name(&self) -> &str {
        self.name_input.value()
    }

    /// Replaces the name field's text.
    pub fn set_graph_name(&mut self, name: impl Into<String>) {
        self.name_input.set_value(name);
    }

    /// Returns the cached base directory.
    #[must_use]
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    /// Current directory status.
    #[must_use]
    pub const fn status(&self) -> &DirectoryStatus {
        &self.status
    }

    /// Caches `dir` as the base directory.
    pub fn set_directory(&mut self, dir: PathBuf) {
        self.status = DirectoryStatus::Selected(dir.clone());
        self.directory = Some(dir);
    }

    /// Records a cancelled pick. The cached directory is dropped.
    pub fn set_not_selected(&mut self) {
        self.directory = None;
        self.status = DirectoryStatus::NotSelected;
    }

    /// Records a picker failure. The cached directory is kept.
    pub fn set_pick_failed(&mut self) {
        self.status = DirectoryStatus::Failed;
    }

    /// Marks a pick or create call as in flight.
    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    /// Whether a call is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Clears the form.
    pub fn reset(&mut self) {
        self.name_input.clear();
        self.directory = None;
        self.status = DirectoryStatus::Unset;
        self.busy = false;
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> CreateGraphModalAction {
        if self.busy {
            return CreateGraphModalAction::None;
        }

        if EventHandler::is_cancel_event(&key) {
            return CreateGraphModalAction::Close;
        }
        if EventHandler::is_submit_event(&key) {
            return CreateGraphModalAction::Submit;
        }
        if EventHandler::is_pick_directory_event(&key) {
            return CreateGraphModalAction::PickDirectory;
        }

        match key.code {
            KeyCode::Char(c) => self.name_input.input_char(c),
            KeyCode::Backspace => self.name_input.backspace(),
            KeyCode::Delete => self.name_input.delete(),
            KeyCode::Left => self.name_input.move_left(),
            KeyCode::Right => self.name_input.move_right(),
            KeyCode::Home => self.name_input.move_start(),
            KeyCode::End => self.name_input.move_end(),
            _ => {}
        }

        CreateGraphModalAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(10),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(60),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Create New Graph ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let [input_area, status_area, _, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        (&self.name_input).render(input_area, buf);

        if let Some(text) = self.status.text() {
            Paragraph::new(Span::styled(text, Style::default().fg(self.status.color())))
                .render(status_area, buf);
        }

        let help = if self.busy {
            Line::from(Span::styled(
                "Creating graph...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(vec![
                Span::styled("Enter: Create", Style::default().fg(Color::DarkGray)),
                Span::raw(" | "),
                Span::styled("Ctrl+O: Choose Directory", Style::default().fg(Color::DarkGray)),
                Span::raw(" | "),
                Span::styled("Esc: Cancel", Style::default().fg(Color::DarkGray)),
            ])
        };
        Paragraph::new(help).render(help_area, buf);
    }
}

impl Default for CreateGraphModal {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for &CreateGraphModal {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.visible {
            self.render_inner(area, buf);
        }
    }
}
