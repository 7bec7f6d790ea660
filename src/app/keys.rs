//! 키 입력 디스패치
//!
//! 최소화 → 다이얼로그 → 필터 폼 편집 → 패널 전용 키 → 전역 키 순서로 처리한다.

use super::*;
use crate::core::actions::{find_action, find_panel_action, Action};
use crate::ui::LayoutMode;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// 도움말 PgUp/PgDn 스크롤 양
const HELP_PAGE: isize = 10;

impl<H: HostApi> App<H> {
    pub async fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // 최소화 상태: 아무 키나 복원
        if self.shell.is_minimized() {
            self.browser.restore_window();
            return;
        }

        if self.layout.mode() == LayoutMode::TooSmall {
            if find_action(key.modifiers, key.code) == Some(Action::Close) {
                self.browser.close_window();
            }
            return;
        }

        if self.dialog.is_some() {
            self.handle_dialog_key(key).await;
            return;
        }

        let panel = self.browser.open_panel();
        if let Some(action) = find_panel_action(panel, key.modifiers, key.code) {
            self.execute_action(action).await;
            return;
        }

        if self.is_editing_filters() && self.handle_filter_form_key(key) {
            return;
        }

        if let Some(action) = find_action(key.modifiers, key.code) {
            self.execute_action(action).await;
        }
    }

    /// 필터 폼 편집 키, 처리했으면 true
    fn handle_filter_form_key(&mut self, key: KeyEvent) -> bool {
        let form = &mut self.filter_form;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Left if form.focus.is_size() => form.cycle_unit(false),
            KeyCode::Right if form.focus.is_size() => form.cycle_unit(true),
            KeyCode::Left => form.focused_input_mut().left(),
            KeyCode::Right => form.focused_input_mut().right(),
            KeyCode::Home => form.focused_input_mut().home(),
            KeyCode::End => form.focused_input_mut().end(),
            KeyCode::Backspace => form.focused_input_mut().backspace(),
            KeyCode::Delete => form.focused_input_mut().delete(),
            KeyCode::Char('w') if ctrl => form.focused_input_mut().delete_prev_word(),
            KeyCode::Char(c) if !ctrl && !alt => form.insert_char(c),
            _ => return false,
        }
        true
    }

    async fn handle_dialog_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match &self.dialog {
            Some(DialogKind::Input { .. }) => match key.code {
                KeyCode::Enter => self.dialog_confirm().await,
                KeyCode::Esc => self.close_dialog(),
                KeyCode::Tab | KeyCode::BackTab => self.dialog_toggle_button(),
                code => {
                    if let Some(input) = self.dialog_input_mut() {
                        match code {
                            KeyCode::Char('w') if ctrl => input.delete_prev_word(),
                            KeyCode::Char(c) if !ctrl => input.insert_char(c),
                            KeyCode::Backspace => input.backspace(),
                            KeyCode::Delete => input.delete(),
                            KeyCode::Left => input.left(),
                            KeyCode::Right => input.right(),
                            KeyCode::Home => input.home(),
                            KeyCode::End => input.end(),
                            _ => {}
                        }
                    }
                }
            },
            Some(DialogKind::Confirm { .. }) => match key.code {
                KeyCode::Enter => self.dialog_confirm().await,
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    if let Some(DialogKind::Confirm {
                        selected_button, ..
                    }) = &mut self.dialog
                    {
                        *selected_button = 0;
                    }
                    self.dialog_confirm().await;
                }
                KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => self.close_dialog(),
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                    self.dialog_toggle_button()
                }
                _ => {}
            },
            Some(DialogKind::Help { .. }) => match key.code {
                KeyCode::Char('j') | KeyCode::Down => self.help_scroll(1),
                KeyCode::Char('k') | KeyCode::Up => self.help_scroll(-1),
                KeyCode::PageDown => self.help_scroll(HELP_PAGE),
                KeyCode::PageUp => self.help_scroll(-HELP_PAGE),
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
                    self.close_dialog()
                }
                _ => {}
            },
            Some(DialogKind::Error { .. }) => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.close_dialog();
                }
            }
            None => {}
        }
    }
}
