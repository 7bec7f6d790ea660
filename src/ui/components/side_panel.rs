// Side panel component - 왼쪽 사이드 패널
//
// 열린 패널 종류에 따라 폴더 열기 / 필터 폼 / 파일 관리 안내를 그린다.

use super::text_field::{render_text_input, FieldColors};
use crate::app::filter_form::{FilterField, FilterFormState};
use crate::models::OpenPanel;
use crate::ui::Theme;
use crate::utils::display::{fit_width, shorten_path};
use crate::utils::formatter::pluralize;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use std::path::Path;

const FIELDS: [FilterField; 4] = [
    FilterField::Tags,
    FilterField::Extensions,
    FilterField::SizeMin,
    FilterField::SizeMax,
];
/// 크기 단위 선택 표시 너비 (`< MB >`)
const UNIT_WIDTH: u16 = 6;

pub struct SidePanel<'a> {
    panel: OpenPanel,
    current_path: Option<&'a Path>,
    form: Option<&'a FilterFormState>,
    file_count: usize,
    selected_count: usize,
    filters_active: bool,
    bg_color: Color,
    fg_color: Color,
    border_color: Color,
    label_color: Color,
    focus_color: Color,
    input_bg: Color,
}

impl<'a> SidePanel<'a> {
    pub fn new(panel: OpenPanel) -> Self {
        Self {
            panel,
            current_path: None,
            form: None,
            file_count: 0,
            selected_count: 0,
            filters_active: false,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            border_color: Color::Rgb(0, 120, 212),
            label_color: Color::Rgb(128, 128, 128),
            focus_color: Color::Rgb(0, 120, 212),
            input_bg: Color::Rgb(60, 60, 60),
        }
    }

    pub fn current_path(mut self, path: Option<&'a Path>) -> Self {
        self.current_path = path;
        self
    }

    pub fn form(mut self, form: &'a FilterFormState) -> Self {
        self.form = Some(form);
        self
    }

    /// 작업 대상 안내용 개수
    pub fn counts(mut self, file_count: usize, selected_count: usize) -> Self {
        self.file_count = file_count;
        self.selected_count = selected_count;
        self
    }

    pub fn filters_active(mut self, active: bool) -> Self {
        self.filters_active = active;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.panel_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.border_color = theme.panel_active_border.to_color();
        self.label_color = theme.category_label.to_color();
        self.focus_color = theme.accent.to_color();
        self.input_bg = theme.input_bg.to_color();
        self
    }

    /// 작업 대상 설명
    fn target_hint(&self) -> String {
        if self.selected_count > 0 {
            format!("{} selected", self.selected_count)
        } else if self.file_count == 0 {
            "no files".to_string()
        } else {
            format!("all {}", pluralize(self.file_count, "file", "files"))
        }
    }

    fn write_lines(&self, buf: &mut Buffer, inner: Rect, lines: &[(String, Style)]) {
        for (i, (text, style)) in lines.iter().take(inner.height as usize).enumerate() {
            buf.set_string(
                inner.x,
                inner.y + i as u16,
                fit_width(text, inner.width as usize),
                *style,
            );
        }
    }

    fn render_file_search(&self, buf: &mut Buffer, inner: Rect) {
        let text = Style::default().fg(self.fg_color);
        let label = Style::default().fg(self.label_color);
        let path = self
            .current_path
            .map(|p| shorten_path(p, inner.width as usize))
            .unwrap_or_else(|| "(none)".to_string());
        let lines = vec![
            ("Current folder".to_string(), label),
            (path, text),
            (String::new(), text),
            ("Enter: choose folder".to_string(), text.add_modifier(Modifier::BOLD)),
        ];
        self.write_lines(buf, inner, &lines);
    }

    fn render_manage_files(&self, buf: &mut Buffer, inner: Rect) {
        let text = Style::default().fg(self.fg_color);
        let label = Style::default().fg(self.label_color);
        let lines = vec![
            ("Target".to_string(), label),
            (self.target_hint(), text.add_modifier(Modifier::BOLD)),
            (String::new(), text),
            ("v  move to folder".to_string(), text),
            ("c  copy to folder".to_string(), text),
            ("x  delete".to_string(), text),
            ("r  rename with numbers".to_string(), text),
            (String::new(), text),
            ("Space selects files".to_string(), label),
        ];
        self.write_lines(buf, inner, &lines);
    }

    fn render_filters(&self, buf: &mut Buffer, inner: Rect, form: &FilterFormState) {
        let mut y = inner.y;
        let bottom = inner.y + inner.height;

        for field in FIELDS {
            if y + 1 >= bottom {
                break;
            }
            let focused = form.focus == field;
            let label_style = if focused {
                Style::default()
                    .fg(self.focus_color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.label_color)
            };
            let marker = if focused { "> " } else { "  " };
            buf.set_string(inner.x, y, format!("{}{}", marker, field.label()), label_style);

            let unit_width = if field.is_size() { UNIT_WIDTH } else { 0 };
            let input_area = Rect::new(
                inner.x,
                y + 1,
                inner.width.saturating_sub(unit_width),
                1,
            );
            let colors = FieldColors {
                fg: self.fg_color,
                bg: self.input_bg,
            };
            render_text_input(buf, input_area, form.input(field), colors, focused);

            if let Some(unit) = form.unit(field) {
                let unit_text = format!("<{:^4}>", unit);
                buf.set_string(input_area.x + input_area.width, y + 1, unit_text, label_style);
            }
            y += 3;
        }

        if y < bottom {
            let status = if self.filters_active {
                "Filters applied"
            } else {
                "No filters applied"
            };
            buf.set_string(
                inner.x,
                y,
                fit_width(status, inner.width as usize),
                Style::default()
                    .fg(self.label_color)
                    .add_modifier(Modifier::ITALIC),
            );
        }
    }
}

impl Widget for SidePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.panel.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border_color))
            .style(Style::default().bg(self.bg_color));
        let block_inner = block.inner(area);
        block.render(area, buf);

        let inner = Rect {
            x: block_inner.x + 1,
            width: block_inner.width.saturating_sub(2),
            ..block_inner
        };
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        match self.panel {
            OpenPanel::None => {}
            OpenPanel::FileSearch => self.render_file_search(buf, inner),
            OpenPanel::ManageFiles => self.render_manage_files(buf, inner),
            OpenPanel::Filters => {
                if let Some(form) = self.form {
                    self.render_filters(buf, inner, form);
                }
            }
        }
    }
}
