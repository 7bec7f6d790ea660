// File list component - 파일 그룹 목록
//
// 파일 하나당 한 행. 각 행은 `카테고리: 값` 항목들의 나열이며
// 커서 행 하이라이트와 선택 마커를 표시한다.

use crate::core::FileGroupView;
use crate::ui::Theme;
use crate::utils::display::fit_width;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

const MARKER_SELECTED: &str = "● ";
const MARKER_NONE: &str = "  ";
const EMPTY_FOLDER: &str = "No files";
const NO_FOLDER: &str = "Press o to open a folder";

pub struct FileList<'a> {
    title: &'a str,
    groups: &'a [FileGroupView],
    cursor: usize,
    scroll_offset: usize,
    /// 폴더가 열려 있는지 (빈 목록 안내 문구 구분)
    has_folder: bool,
    focused: bool,
    border_color: Color,
    inactive_border_color: Color,
    bg_color: Color,
    normal_color: Color,
    label_color: Color,
    cursor_fg: Color,
    cursor_bg: Color,
    marked_color: Color,
}

impl<'a> Default for FileList<'a> {
    fn default() -> Self {
        Self {
            title: "",
            groups: &[],
            cursor: 0,
            scroll_offset: 0,
            has_folder: false,
            focused: true,
            border_color: Color::Rgb(0, 120, 212),
            inactive_border_color: Color::Rgb(60, 60, 60),
            bg_color: Color::Rgb(30, 30, 30),
            normal_color: Color::Rgb(212, 212, 212),
            label_color: Color::Rgb(128, 128, 128),
            cursor_fg: Color::White,
            cursor_bg: Color::Rgb(0, 120, 212),
            marked_color: Color::Rgb(255, 215, 0),
        }
    }
}

impl<'a> FileList<'a> {
    pub fn new(groups: &'a [FileGroupView]) -> Self {
        Self {
            groups,
            ..Default::default()
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub fn has_folder(mut self, has_folder: bool) -> Self {
        self.has_folder = has_folder;
        self
    }

    /// 사이드 패널이 입력을 받는 동안에는 비활성 테두리
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.border_color = theme.panel_active_border.to_color();
        self.inactive_border_color = theme.panel_inactive_border.to_color();
        self.bg_color = theme.panel_bg.to_color();
        self.normal_color = theme.file_normal.to_color();
        self.label_color = theme.category_label.to_color();
        self.cursor_fg = theme.file_selected.to_color();
        self.cursor_bg = theme.file_selected_bg.to_color();
        self.marked_color = theme.file_marked.to_color();
        self
    }

    /// 한 행의 스팬 구성
    fn group_spans(&self, group: &FileGroupView, is_cursor: bool, width: usize) -> Vec<Span<'static>> {
        let base = if is_cursor {
            Style::default().fg(self.cursor_fg).bg(self.cursor_bg)
        } else {
            Style::default().fg(self.normal_color)
        };
        let label = if is_cursor {
            base.add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(self.label_color)
        };
        let marker_style = if group.selected && !is_cursor {
            base.fg(self.marked_color)
        } else {
            base
        };
        let value_style = if group.selected {
            marker_style.add_modifier(Modifier::BOLD)
        } else {
            base
        };

        let marker = if group.selected {
            MARKER_SELECTED
        } else {
            MARKER_NONE
        };
        let mut spans = vec![Span::styled(marker, marker_style)];
        let mut used = marker.width();

        for (i, entry) in group.entries.iter().enumerate() {
            if used >= width {
                break;
            }
            if i > 0 {
                spans.push(Span::styled("  ", base));
                used += 2;
            }
            let category = format!("{}: ", entry.category);
            used += category.width();
            spans.push(Span::styled(category, label));

            let text = fit_width(&entry.text, width.saturating_sub(used));
            used += text.width();
            spans.push(Span::styled(text, value_style));
        }

        if is_cursor && used < width {
            spans.push(Span::styled(" ".repeat(width - used), base));
        }
        spans
    }
}

impl Widget for FileList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            self.border_color
        } else {
            self.inactive_border_color
        };
        let title = format!(" {} ", self.title);
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(self.bg_color));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.groups.is_empty() {
            let hint = if self.has_folder {
                EMPTY_FOLDER
            } else {
                NO_FOLDER
            };
            buf.set_string(
                inner.x + 1,
                inner.y,
                fit_width(hint, inner.width.saturating_sub(1) as usize),
                Style::default()
                    .fg(self.label_color)
                    .add_modifier(Modifier::ITALIC),
            );
            return;
        }

        let width = inner.width as usize;
        for (row, (index, group)) in self
            .groups
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(inner.height as usize)
            .enumerate()
        {
            let spans = self.group_spans(group, index == self.cursor, width);
            buf.set_line(inner.x, inner.y + row as u16, &Line::from(spans), inner.width);
        }
    }
}
