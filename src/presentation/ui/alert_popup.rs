use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Alert, AlertLevel};

const DISMISS_HINT: &str = " Enter: OK ";

/// Bordered popup in the top-right corner showing one alert.
pub struct AlertPopup<'a> {
    alert: &'a Alert,
}

impl<'a> AlertPopup<'a> {
    /// Borrows the alert to draw.
    #[must_use]
    pub const fn new(alert: &'a Alert) -> Self {
        Self { alert }
    }
}

impl Widget for AlertPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.alert.title);
        let message = &self.alert.message;

        let max_popup_width = 60.min(area.width.saturating_sub(2));
        let width = u16::try_from(message.width())
            .unwrap_or(u16::MAX)
            .max(u16::try_from(title.width()).unwrap_or(0))
            .max(u16::try_from(DISMISS_HINT.width()).unwrap_or(0))
            .saturating_add(4)
            .min(max_popup_width);

        let inner_width = width.saturating_sub(2).max(1);
        let content_width = u16::try_from(message.width()).unwrap_or(0);

        let lines = content_width.div_ceil(inner_width);

        let height = lines.saturating_add(3).clamp(3, 10);

        let x = area.width.saturating_sub(width).saturating_sub(2);
        let y = 2;

        let popup_area = Rect::new(x, y, width, height);

        let intersection = area.intersection(popup_area);
        if intersection.area() == 0 {
            return;
        }

        let color = match self.alert.level {
            AlertLevel::Info => Color::Cyan,
            AlertLevel::Error => Color::Red,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_bottom(Line::from(Span::styled(
                DISMISS_HINT,
                Style::default().fg(Color::DarkGray),
            )))
            .style(Style::default().fg(color));

        let para = Paragraph::new(message.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::BOLD));

        Clear.render(intersection, buf);
        para.render(intersection, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_message_in_top_right() {
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        let alert = Alert::error("Error", "Failed to create graph: disk full");

        AlertPopup::new(&alert).render(area, &mut buf);

        let text: String = buf.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("disk full"));
        assert_eq!(buf[(79, 0)].symbol(), " ");
        assert_eq!(buf[(77, 2)].symbol(), "┐");
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let area = Rect::new(0, 0, 3, 1);
        let mut buf = Buffer::empty(area);
        let alert = Alert::info("Info", "Graph created successfully");

        AlertPopup::new(&alert).render(area, &mut buf);
    }
}
