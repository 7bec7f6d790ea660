// Status bar component - 상태바 컴포넌트
//
// 파일 개수, 선택 개수, 필터 적용 여부, 최근 알림 메시지 표시

use crate::ui::Theme;
use crate::utils::formatter::pluralize;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    file_count: usize,
    selected_count: usize,
    /// 필터가 적용된 목록인지
    filtered: bool,
    /// 알림 메시지 (작업 결과 등)
    message: Option<&'a str>,
    /// 오른쪽 모드 표시 (NORMAL/MAX)
    mode: &'a str,
    bg_color: Color,
    fg_color: Color,
    highlight_color: Color,
}

impl<'a> Default for StatusBar<'a> {
    fn default() -> Self {
        Self {
            file_count: 0,
            selected_count: 0,
            filtered: false,
            message: None,
            mode: "NORMAL",
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            highlight_color: Color::Yellow,
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_count(mut self, count: usize) -> Self {
        self.file_count = count;
        self
    }

    pub fn selected_count(mut self, count: usize) -> Self {
        self.selected_count = count;
        self
    }

    pub fn filtered(mut self, filtered: bool) -> Self {
        self.filtered = filtered;
        self
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }

    pub fn mode(mut self, mode: &'a str) -> Self {
        self.mode = mode;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.highlight_color = theme.file_marked.to_color();
        self
    }

    fn left_info(&self) -> String {
        let mut info = format!(" {}", pluralize(self.file_count, "file", "files"));
        if self.filtered {
            info.push_str(" (filtered)");
        }
        info
    }

    fn selected_info(&self) -> String {
        if self.selected_count > 0 {
            format!(" | {} selected", self.selected_count)
        } else {
            String::new()
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let left_info = self.left_info();
        let selected_info = self.selected_info();
        let message = self
            .message
            .map(|m| format!(" | {}", m))
            .unwrap_or_default();
        let right_info = format!("[{}] ", self.mode);

        let used = left_info.width() + selected_info.width() + message.width() + right_info.width();
        let padding = (area.width as usize).saturating_sub(used);

        let spans = vec![
            Span::styled(left_info, Style::default().fg(self.fg_color)),
            Span::styled(selected_info, Style::default().fg(self.highlight_color)),
            Span::styled(message, Style::default().fg(self.fg_color)),
            Span::raw(" ".repeat(padding)),
            Span::styled(right_info, Style::default().fg(self.fg_color)),
        ];

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_text() {
        let bar = StatusBar::new().file_count(1).filtered(true);
        assert_eq!(bar.left_info(), " 1 file (filtered)");
        assert_eq!(bar.selected_info(), "");

        let bar = StatusBar::new().file_count(12).selected_count(3);
        assert_eq!(bar.left_info(), " 12 files");
        assert_eq!(bar.selected_info(), " | 3 selected");
    }

    #[test]
    fn test_renders_message_and_mode() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new()
            .file_count(2)
            .message(Some("Copied 2 files"))
            .mode("MAX")
            .render(area, &mut buf);

        let text: String = (0..60)
            .map(|x| buf.cell((x, 0)).map(|c| c.symbol()).unwrap_or(" "))
            .collect();
        assert!(text.contains("Copied 2 files"));
        assert!(text.trim_end().ends_with("[MAX]"));
    }
}
