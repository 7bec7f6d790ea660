use super::text_edit::TextInput;
use super::*;
use crate::models::OperationType;
use crate::system::service::validate_stem;
use crate::ui::components::dialog::help_rows;
use crate::ui::components::{ConfirmPurpose, InputPurpose};

impl<H: HostApi> App<H> {
    // === 다이얼로그 입력 처리 ===

    /// 입력 다이얼로그의 텍스트 편집
    pub fn dialog_input_mut(&mut self) -> Option<&mut TextInput> {
        match &mut self.dialog {
            Some(DialogKind::Input { input, .. }) => Some(input),
            _ => None,
        }
    }

    /// OK / Cancel 버튼 전환
    pub fn dialog_toggle_button(&mut self) {
        match &mut self.dialog {
            Some(DialogKind::Input {
                selected_button, ..
            })
            | Some(DialogKind::Confirm {
                selected_button, ..
            }) => *selected_button = 1 - (*selected_button).min(1),
            _ => {}
        }
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// 도움말 스크롤
    pub fn help_scroll(&mut self, delta: isize) {
        if let Some(DialogKind::Help { scroll_offset }) = &mut self.dialog {
            let max = help_rows().len().saturating_sub(1);
            *scroll_offset = scroll_offset.saturating_add_signed(delta).min(max);
        }
    }

    /// Enter: 선택된 버튼 실행
    pub async fn dialog_confirm(&mut self) {
        let Some(dialog) = self.dialog.take() else {
            return;
        };

        match dialog {
            DialogKind::Input {
                input,
                selected_button: 0,
                purpose: InputPurpose::RenameStem,
                ..
            } => {
                let stem = input.value().trim().to_string();
                if stem.is_empty() {
                    self.set_toast("Name is empty");
                    return;
                }
                if let Err(e) = validate_stem(&stem) {
                    self.set_toast(e.to_string());
                    return;
                }
                let result = self.browser.rename_all(&stem).await;
                self.finish_bulk(OperationType::Rename, result);
            }
            DialogKind::Confirm {
                selected_button: 0,
                purpose: ConfirmPurpose::Delete,
                ..
            } => {
                let result = self.browser.delete_all().await;
                self.finish_bulk(OperationType::Delete, result);
            }
            // Cancel 버튼, 메시지/오류/도움말은 닫기만
            _ => {}
        }
    }
}
