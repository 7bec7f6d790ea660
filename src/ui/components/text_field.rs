// Text field - 한 줄 입력 렌더링 (다이얼로그, 필터 패널 공용)

use crate::app::text_edit::TextInput;
use ratatui::{buffer::Buffer, layout::Rect, style::{Color, Style}};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 입력 필드 색상
#[derive(Debug, Clone, Copy)]
pub struct FieldColors {
    pub fg: Color,
    pub bg: Color,
}

/// 커서가 보이도록 스크롤된 (표시 문자열, 커서 열) 계산
///
/// 커서는 바이트 인덱스, 화면 위치는 표시 너비 기준.
pub fn visible_window(value: &str, cursor_pos: usize, max_display: usize) -> (&str, usize) {
    let cursor_col: usize = value[..cursor_pos]
        .chars()
        .map(|c| c.width().unwrap_or(0))
        .sum();

    if value.width() <= max_display || cursor_col < max_display {
        return (value, cursor_col);
    }

    // 커서가 오른쪽 끝에 오도록 앞부분을 잘라낸다
    let target_start = cursor_col.saturating_sub(max_display.saturating_sub(1));
    let mut width_sum = 0;
    let mut start_byte = value.len();
    for (i, c) in value.char_indices() {
        if width_sum >= target_start {
            start_byte = i;
            break;
        }
        width_sum += c.width().unwrap_or(0);
    }
    (&value[start_byte..], cursor_col - width_sum)
}

/// 한 줄 입력 필드 렌더링
///
/// `show_cursor`가 거짓이면 커서 없이 값만 그린다 (포커스 없는 필드).
pub fn render_text_input(
    buf: &mut Buffer,
    area: Rect,
    input: &TextInput,
    colors: FieldColors,
    show_cursor: bool,
) {
    if area.width < 3 || area.height == 0 {
        return;
    }

    for x in area.x..area.x + area.width {
        if let Some(cell) = buf.cell_mut((x, area.y)) {
            cell.set_bg(colors.bg);
        }
    }

    let max_display = area.width as usize - 2;
    let (display, cursor_col) = visible_window(input.value(), input.cursor_pos(), max_display);
    let style = Style::default().fg(colors.fg).bg(colors.bg);
    buf.set_stringn(area.x + 1, area.y, display, max_display, style);

    if !show_cursor {
        return;
    }
    let cursor_x = area.x + 1 + cursor_col as u16;
    if cursor_x < area.x + area.width - 1 {
        if let Some(cell) = buf.cell_mut((cursor_x, area.y)) {
            if input.cursor_pos() < input.value().len() {
                cell.set_style(Style::default().fg(colors.bg).bg(colors.fg));
            } else {
                cell.set_char('▏');
                cell.set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_window_fits() {
        assert_eq!(visible_window("report", 3, 10), ("report", 3));
    }

    #[test]
    fn test_visible_window_scrolls_to_cursor() {
        let value = "abcdefghij";
        let (display, col) = visible_window(value, value.len(), 5);
        assert_eq!(display, "ghij");
        assert_eq!(col, 4);
    }

    #[test]
    fn test_render_draws_cursor_at_end() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        let colors = FieldColors {
            fg: Color::White,
            bg: Color::Black,
        };
        render_text_input(&mut buf, area, &crate::app::text_edit::tests::typed("ab"), colors, true);

        assert_eq!(buf.cell((1, 0)).map(|c| c.symbol()), Some("a"));
        assert_eq!(buf.cell((3, 0)).map(|c| c.symbol()), Some("▏"));
    }
}
