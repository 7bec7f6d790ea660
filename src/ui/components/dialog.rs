//! 다이얼로그 시스템
//!
//! 이름 변경 입력, 삭제 확인, 오류 메시지, 단축키 도움말

use super::text_field::{render_text_input, FieldColors};
use crate::app::text_edit::TextInput;
use crate::core::actions::generate_help_entries;
use crate::ui::Theme;
use crate::utils::formatter::pluralize;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// 다이얼로그 내부 좌우 패딩 (border 안쪽 여백)
const DIALOG_H_PADDING: u16 = 2;
/// 다이얼로그 내부 상단 패딩 (border 아래 여백)
const DIALOG_V_PADDING: u16 = 1;
/// 도움말 키 열 너비
const HELP_KEY_COL: u16 = 16;

/// 입력 다이얼로그 목적
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPurpose {
    /// 대상 파일들의 새 이름(확장자 제외)
    RenameStem,
}

/// 확인 다이얼로그 목적
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPurpose {
    Delete,
}

/// 다이얼로그 종류
#[derive(Debug, Clone)]
pub enum DialogKind {
    Input {
        title: String,
        prompt: String,
        input: TextInput,
        selected_button: usize, // 0: OK, 1: Cancel
        purpose: InputPurpose,
    },
    Confirm {
        title: String,
        message: String,
        selected_button: usize, // 0: OK, 1: Cancel
        purpose: ConfirmPurpose,
    },
    Error { title: String, message: String },
    Help { scroll_offset: usize },
}

impl DialogKind {
    /// 이름 변경 입력 다이얼로그
    pub fn rename_input(count: usize) -> Self {
        DialogKind::Input {
            title: "Rename".to_string(),
            prompt: format!("New name for {}:", pluralize(count, "file", "files")),
            input: TextInput::default(),
            selected_button: 0,
            purpose: InputPurpose::RenameStem,
        }
    }

    /// 삭제 확인 다이얼로그
    pub fn delete_confirm(count: usize, trash: bool) -> Self {
        let target = if trash { "trash" } else { "delete permanently" };
        let message = if trash {
            format!("Move {} to {}?", pluralize(count, "file", "files"), target)
        } else {
            format!("{} {}?", capitalize(target), pluralize(count, "file", "files"))
        };
        DialogKind::Confirm {
            title: "Delete".to_string(),
            message,
            selected_button: 0,
            purpose: ConfirmPurpose::Delete,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogKind::Error {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn help() -> Self {
        DialogKind::Help { scroll_offset: 0 }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 도움말 행 (헤더 여부, 키, 설명)
pub fn help_rows() -> Vec<(bool, &'static str, &'static str)> {
    let mut rows = Vec::new();
    for (category, items) in generate_help_entries() {
        if !rows.is_empty() {
            rows.push((false, "", ""));
        }
        rows.push((true, category, ""));
        rows.extend(items.into_iter().map(|(key, desc)| (false, key, desc)));
    }
    rows
}

pub struct Dialog<'a> {
    kind: &'a DialogKind,
    bg_color: Color,
    fg_color: Color,
    border_color: Color,
    title_color: Color,
    button_bg: Color,
    button_fg: Color,
    button_selected_bg: Color,
    button_selected_fg: Color,
    input_bg: Color,
    error_color: Color,
    muted_color: Color,
}

impl<'a> Dialog<'a> {
    pub fn new(kind: &'a DialogKind) -> Self {
        Self {
            kind,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::Rgb(212, 212, 212),
            border_color: Color::Rgb(0, 120, 212),
            title_color: Color::Rgb(0, 120, 212),
            button_bg: Color::Rgb(60, 60, 60),
            button_fg: Color::Rgb(212, 212, 212),
            button_selected_bg: Color::Rgb(0, 120, 212),
            button_selected_fg: Color::White,
            input_bg: Color::Rgb(30, 30, 30),
            error_color: Color::Rgb(244, 71, 71),
            muted_color: Color::Rgb(128, 128, 128),
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.panel_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.border_color = theme.panel_active_border.to_color();
        self.title_color = theme.accent.to_color();
        self.button_bg = theme.command_bar_bg.to_color();
        self.button_fg = theme.fg_primary.to_color();
        self.button_selected_bg = theme.file_selected_bg.to_color();
        self.button_selected_fg = theme.file_selected.to_color();
        self.input_bg = theme.input_bg.to_color();
        self.error_color = theme.error.to_color();
        self.muted_color = theme.category_label.to_color();
        self
    }

    /// 다이얼로그 영역 계산 (화면 중앙)
    fn calculate_area(&self, screen: Rect) -> Rect {
        let sw = screen.width;
        let sh = screen.height;

        let (width, height) = match self.kind {
            DialogKind::Input { .. } => (50u16.min(sw.saturating_sub(4)).max(30), 7u16),
            DialogKind::Confirm { .. } => (44u16.min(sw.saturating_sub(4)).max(25), 7u16),
            DialogKind::Error { message, .. } => {
                let lines = message.lines().count().max(1) as u16;
                let w = 56u16.min(sw.saturating_sub(4)).max(30);
                (w, (6 + lines).min(sh.saturating_sub(4)).max(6))
            }
            DialogKind::Help { .. } => (
                60u16.min(sw.saturating_sub(4)).max(40),
                sh.saturating_sub(4).max(10),
            ),
        };

        let width = width.min(sw.saturating_sub(4));
        let height = height.min(sh.saturating_sub(2));

        Rect {
            x: screen.x + sw.saturating_sub(width) / 2,
            y: screen.y + sh.saturating_sub(height) / 2,
            width,
            height,
        }
    }

    fn frame(&self, buf: &mut Buffer, area: Rect, title: &str, accent: Color) -> Rect {
        Block::default()
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(self.bg_color))
            .render(area, buf);

        Rect {
            x: area.x + DIALOG_H_PADDING,
            y: area.y + DIALOG_V_PADDING,
            width: area.width.saturating_sub(DIALOG_H_PADDING * 2),
            height: area.height.saturating_sub(DIALOG_V_PADDING * 2),
        }
    }

    /// 버튼 렌더링 헬퍼, 그린 너비 반환
    fn render_button(&self, buf: &mut Buffer, x: u16, y: u16, label: &str, is_selected: bool) -> u16 {
        let (bg, fg) = if is_selected {
            (self.button_selected_bg, self.button_selected_fg)
        } else {
            (self.button_bg, self.button_fg)
        };
        let padded = format!(" {} ", label);
        buf.set_string(x, y, &padded, Style::default().fg(fg).bg(bg));
        padded.width() as u16
    }

    /// OK / Cancel 버튼 (하단 중앙)
    fn render_ok_cancel(&self, buf: &mut Buffer, area: Rect, selected_button: usize) {
        let button_y = area.y + area.height.saturating_sub(2);
        let buttons_width = (" OK ".width() + 2 + " Cancel ".width()) as u16;
        let x = area.x + area.width.saturating_sub(buttons_width) / 2;
        let ok_width = self.render_button(buf, x, button_y, "OK", selected_button == 0);
        self.render_button(buf, x + ok_width + 2, button_y, "Cancel", selected_button == 1);
    }

    fn render_input(
        &self,
        buf: &mut Buffer,
        area: Rect,
        title: &str,
        prompt: &str,
        input: &TextInput,
        selected_button: usize,
    ) {
        let inner = self.frame(buf, area, title, self.title_color);
        buf.set_stringn(
            inner.x,
            inner.y,
            prompt,
            inner.width as usize,
            Style::default().fg(self.fg_color),
        );

        let field = Rect {
            y: inner.y + 1,
            height: 1,
            ..inner
        };
        let colors = FieldColors {
            fg: self.fg_color,
            bg: self.input_bg,
        };
        render_text_input(buf, field, input, colors, true);
        self.render_ok_cancel(buf, area, selected_button);
    }

    fn render_confirm(&self, buf: &mut Buffer, area: Rect, title: &str, message: &str, selected_button: usize) {
        let inner = self.frame(buf, area, title, self.title_color);
        Paragraph::new(message)
            .style(Style::default().fg(self.fg_color))
            .wrap(Wrap { trim: true })
            .render(
                Rect {
                    height: inner.height.saturating_sub(2),
                    ..inner
                },
                buf,
            );
        self.render_ok_cancel(buf, area, selected_button);
    }

    fn render_error(&self, buf: &mut Buffer, area: Rect, title: &str, message: &str) {
        let inner = self.frame(buf, area, title, self.error_color);
        Paragraph::new(message)
            .style(Style::default().fg(self.fg_color))
            .wrap(Wrap { trim: true })
            .render(
                Rect {
                    height: inner.height.saturating_sub(2),
                    ..inner
                },
                buf,
            );

        let button_y = area.y + area.height.saturating_sub(2);
        let button_x = area.x + area.width.saturating_sub(" OK ".width() as u16) / 2;
        self.render_button(buf, button_x, button_y, "OK", true);
    }

    fn render_help(&self, buf: &mut Buffer, area: Rect, scroll_offset: usize) {
        let inner = self.frame(buf, area, "Keyboard shortcuts", self.title_color);
        let content_height = inner.height.saturating_sub(1) as usize;

        let rows = help_rows();
        let max_scroll = rows.len().saturating_sub(content_height);
        let scroll = scroll_offset.min(max_scroll);

        let header_style = Style::default()
            .fg(self.title_color)
            .add_modifier(Modifier::BOLD);
        let key_style = Style::default().fg(self.title_color);
        let desc_style = Style::default().fg(self.fg_color);

        for (i, (is_header, key, desc)) in rows.iter().skip(scroll).take(content_height).enumerate() {
            let y = inner.y + i as u16;
            if *is_header {
                buf.set_string(inner.x, y, *key, header_style);
            } else if !key.is_empty() {
                buf.set_string(inner.x + 2, y, *key, key_style);
                buf.set_stringn(
                    inner.x + HELP_KEY_COL,
                    y,
                    *desc,
                    inner.width.saturating_sub(HELP_KEY_COL) as usize,
                    desc_style,
                );
            }
        }

        let hint = "j/k: scroll  Esc: close";
        let hint_x = area.x + area.width.saturating_sub(hint.width() as u16) / 2;
        buf.set_string(
            hint_x,
            area.y + area.height.saturating_sub(2),
            hint,
            Style::default().fg(self.muted_color),
        );
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_area = self.calculate_area(area);
        Clear.render(dialog_area, buf);

        match self.kind {
            DialogKind::Input {
                title,
                prompt,
                input,
                selected_button,
                ..
            } => self.render_input(buf, dialog_area, title, prompt, input, *selected_button),
            DialogKind::Confirm {
                title,
                message,
                selected_button,
                ..
            } => self.render_confirm(buf, dialog_area, title, message, *selected_button),
            DialogKind::Error { title, message } => {
                self.render_error(buf, dialog_area, title, message)
            }
            DialogKind::Help { scroll_offset } => self.render_help(buf, dialog_area, *scroll_offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                text.push_str(buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_delete_confirm_message() {
        match DialogKind::delete_confirm(3, true) {
            DialogKind::Confirm {
                message, purpose, ..
            } => {
                assert_eq!(message, "Move 3 files to trash?");
                assert_eq!(purpose, ConfirmPurpose::Delete);
            }
            other => panic!("unexpected dialog: {:?}", other),
        }
        match DialogKind::delete_confirm(1, false) {
            DialogKind::Confirm { message, .. } => {
                assert_eq!(message, "Delete permanently 1 file?")
            }
            other => panic!("unexpected dialog: {:?}", other),
        }
    }

    #[test]
    fn test_rename_input_starts_empty() {
        match DialogKind::rename_input(2) {
            DialogKind::Input {
                prompt,
                input,
                selected_button,
                purpose,
                ..
            } => {
                assert_eq!(prompt, "New name for 2 files:");
                assert_eq!(input.value(), "");
                assert_eq!(selected_button, 0);
                assert_eq!(purpose, InputPurpose::RenameStem);
            }
            other => panic!("unexpected dialog: {:?}", other),
        }
    }

    #[test]
    fn test_help_rows_group_by_category() {
        let rows = help_rows();
        assert!(rows.first().is_some_and(|r| r.0));
        assert!(rows.iter().any(|r| r.0 && r.1 == "Window"));
        assert!(rows.iter().any(|r| !r.0 && r.2 == "Close"));
    }

    #[test]
    fn test_error_dialog_renders_centered() {
        let kind = DialogKind::error("Error", "Permission denied");
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        Dialog::new(&kind).render(area, &mut buf);

        let text = screen_text(&buf);
        assert!(text.contains(" Error "));
        assert!(text.contains("Permission denied"));
        assert!(text.contains(" OK "));
    }
}
