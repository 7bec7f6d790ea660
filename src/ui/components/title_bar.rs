// Title bar component - 상단 타이틀바
//
// 앱 이름, 현재 폴더(없으면 안내 문구), 창 제어 단축키 표시

use crate::ui::Theme;
use crate::utils::display::shorten_path;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub const APP_NAME: &str = "filesift";
pub const NO_FOLDER_PLACEHOLDER: &str = "No folder open";
const WINDOW_HINTS: &str = "[-] min  [=] max  [q] close ";
const MINIMIZED_HINT: &str = " (minimized, press any key) ";

pub struct TitleBar<'a> {
    path: Option<&'a Path>,
    minimized: bool,
    bg_color: Color,
    fg_color: Color,
    accent_color: Color,
}

impl<'a> Default for TitleBar<'a> {
    fn default() -> Self {
        Self {
            path: None,
            minimized: false,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::White,
            accent_color: Color::Rgb(0, 120, 212),
        }
    }
}

impl<'a> TitleBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 폴더 설정
    pub fn path(mut self, path: Option<&'a Path>) -> Self {
        self.path = path;
        self
    }

    pub fn minimized(mut self, minimized: bool) -> Self {
        self.minimized = minimized;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.title_bar_bg.to_color();
        self.fg_color = theme.title_bar_fg.to_color();
        self.accent_color = theme.accent.to_color();
        self
    }

    /// 표시할 경로 문자열
    fn path_text(&self, max_width: usize) -> String {
        match self.path {
            Some(path) => shorten_path(path, max_width),
            None => NO_FOLDER_PLACEHOLDER.to_string(),
        }
    }
}

impl Widget for TitleBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let name = format!(" {} ", APP_NAME);
        let name_style = Style::default()
            .fg(self.accent_color)
            .add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(self.fg_color);

        let right = if self.minimized {
            MINIMIZED_HINT
        } else {
            WINDOW_HINTS
        };
        let path_width = (area.width as usize)
            .saturating_sub(name.width() + right.width() + 2);
        let path_text = self.path_text(path_width);
        let padding = (area.width as usize)
            .saturating_sub(name.width() + path_text.width() + right.width() + 1);

        let line = Line::from(vec![
            Span::styled(name, name_style),
            Span::styled(" ", text_style),
            Span::styled(path_text, text_style),
            Span::raw(" ".repeat(padding)),
            Span::styled(right, text_style.add_modifier(Modifier::DIM)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(buf: &Buffer, width: u16) -> String {
        (0..width)
            .map(|x| buf.cell((x, 0)).map(|c| c.symbol()).unwrap_or(" "))
            .collect()
    }

    #[test]
    fn test_placeholder_without_folder() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        TitleBar::new().render(area, &mut buf);

        let text = line_text(&buf, 80);
        assert!(text.contains(NO_FOLDER_PLACEHOLDER));
        assert!(text.contains("[q] close"));
    }

    #[test]
    fn test_shows_path() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        TitleBar::new()
            .path(Some(Path::new("/srv/docs")))
            .render(area, &mut buf);

        assert!(line_text(&buf, 80).contains("/srv/docs"));
    }
}
