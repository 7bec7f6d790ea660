// Warning screen component - 터미널이 너무 작을 때 표시

use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct WarningScreen {
    current_size: (u16, u16),
    warning_color: Color,
    bg_color: Color,
    fg_color: Color,
}

impl Default for WarningScreen {
    fn default() -> Self {
        Self {
            current_size: (0, 0),
            warning_color: Color::Yellow,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
        }
    }
}

impl WarningScreen {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            current_size: (width, height),
            ..Default::default()
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.warning_color = theme.warning.to_color();
        self.bg_color = theme.bg_primary.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let bold = Style::default()
            .fg(self.warning_color)
            .add_modifier(Modifier::BOLD);
        let text = Style::default().fg(self.fg_color);
        vec![
            Line::from(Span::styled("Window too small", bold)),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "{}x{} (need {}x{})",
                    self.current_size.0, self.current_size.1, MIN_WIDTH, MIN_HEIGHT
                ),
                text,
            )),
            Line::from(Span::styled("q: quit", text.add_modifier(Modifier::DIM))),
        ]
    }
}

impl Widget for WarningScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.warning_color))
            .style(Style::default().bg(self.bg_color));

        Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_required_size() {
        let screen = WarningScreen::new(30, 8);
        let size_line = screen.lines()[2].to_string();
        assert_eq!(size_line, format!("30x8 (need {}x{})", MIN_WIDTH, MIN_HEIGHT));
    }
}
