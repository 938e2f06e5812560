//! Text input widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Single-line text field. The cursor counts characters, not bytes.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
    focused: bool,
    placeholder: String,
    label: String,
}

impl TextInput {
    /// Creates new input with label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: false,
            placeholder: String::new(),
            label: label.into(),
        }
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets whether the field has focus.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Whether the field has focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the text and moves the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    /// Empties the field.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Inserts character at cursor.
    pub fn input_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes character before cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Deletes character at cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Moves cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// Moves cursor to start.
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Moves cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    fn cursor_column(&self) -> usize {
        self.value[..self.byte_index(self.cursor)].width()
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let (display, text_style) = if self.value.is_empty() {
            (self.placeholder.as_str(), Style::default().fg(Color::DarkGray))
        } else {
            (self.value.as_str(), Style::default().fg(Color::White))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.label.as_str());

        let inner = block.inner(area);

        block.render(area, buf);
        Paragraph::new(display).style(text_style).render(inner, buf);

        if self.focused && inner.width > 0 {
            let column = u16::try_from(self.cursor_column()).unwrap_or(u16::MAX);
            let cursor_x = inner.x.saturating_add(column);
            if cursor_x < inner.x + inner.width {
                buf[(cursor_x, inner.y)]
                    .set_style(Style::default().bg(Color::White).fg(Color::Black));
            }
        }
    }
}
