// Folder picker component - 폴더 선택 화면
//
// 현재 폴더의 하위 디렉토리 목록과 조작 안내를 화면 전체에 그린다.

use crate::app::picker::FolderPicker;
use crate::ui::Theme;
use crate::utils::display::{fit_width, shorten_path};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use std::path::Path;

const PICKER_HINT: &str = " Enter: open  Backspace: up  Space: choose  s: choose this folder  Esc: cancel ";

pub struct FolderPickerView<'a> {
    picker: &'a FolderPicker,
    bg_color: Color,
    fg_color: Color,
    border_color: Color,
    cursor_fg: Color,
    cursor_bg: Color,
    hint_color: Color,
    error_color: Color,
}

impl<'a> FolderPickerView<'a> {
    pub fn new(picker: &'a FolderPicker) -> Self {
        Self {
            picker,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            border_color: Color::Rgb(0, 120, 212),
            cursor_fg: Color::White,
            cursor_bg: Color::Rgb(0, 120, 212),
            hint_color: Color::Rgb(128, 128, 128),
            error_color: Color::Rgb(244, 71, 71),
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.panel_bg.to_color();
        self.fg_color = theme.file_normal.to_color();
        self.border_color = theme.panel_active_border.to_color();
        self.cursor_fg = theme.file_selected.to_color();
        self.cursor_bg = theme.file_selected_bg.to_color();
        self.hint_color = theme.category_label.to_color();
        self.error_color = theme.error.to_color();
        self
    }
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| format!("{}/", n.to_string_lossy()))
        .unwrap_or_else(|| path.display().to_string())
}

impl Widget for FolderPickerView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title_width = area.width.saturating_sub(6) as usize;
        let title = format!(" {} ", shorten_path(self.picker.current(), title_width));
        let block = Block::default()
            .title(title)
            .title_bottom(PICKER_HINT)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 2 {
            return;
        }
        let width = inner.width as usize - 1;

        if let Some(error) = self.picker.error() {
            buf.set_string(
                inner.x + 1,
                inner.y,
                fit_width(error, width),
                Style::default().fg(self.error_color),
            );
            return;
        }
        if self.picker.entries().is_empty() {
            buf.set_string(
                inner.x + 1,
                inner.y,
                "(no subfolders)",
                Style::default()
                    .fg(self.hint_color)
                    .add_modifier(Modifier::ITALIC),
            );
            return;
        }

        let rows = inner.height as usize;
        let cursor = self.picker.cursor();
        let scroll = (cursor + 1).saturating_sub(rows);

        for (row, (index, path)) in self
            .picker
            .entries()
            .iter()
            .enumerate()
            .skip(scroll)
            .take(rows)
            .enumerate()
        {
            let y = inner.y + row as u16;
            let text = fit_width(&dir_name(path), width);
            if index == cursor {
                let style = Style::default().fg(self.cursor_fg).bg(self.cursor_bg);
                buf.set_style(Rect::new(inner.x, y, inner.width, 1), style);
                buf.set_string(inner.x + 1, y, text, style);
            } else {
                buf.set_string(inner.x + 1, y, text, Style::default().fg(self.fg_color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::FileSystem;
    use std::fs;
    use tempfile::TempDir;

    fn rendered(picker: &FolderPicker) -> String {
        let area = Rect::new(0, 0, 90, 8);
        let mut buf = Buffer::empty(area);
        FolderPickerView::new(picker).render(area, &mut buf);
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_lists_subfolders_with_slash() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("photos")).unwrap();
        let picker = FolderPicker::open(temp.path().to_path_buf(), &FileSystem::new());

        let text = rendered(&picker);
        assert!(text.contains("photos/"));
        assert!(text.contains("Esc: cancel"));
    }

    #[test]
    fn test_empty_folder_hint() {
        let temp = TempDir::new().unwrap();
        let picker = FolderPicker::open(temp.path().to_path_buf(), &FileSystem::new());
        assert!(rendered(&picker).contains("(no subfolders)"));
    }
}
