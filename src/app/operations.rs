use super::*;
use crate::core::actions::Action;
use crate::models::{OperationReport, OperationType};
use crate::system::DeleteMode;
use crate::utils::formatter::pluralize;

/// 실패 다이얼로그에 나열할 최대 항목 수
const MAX_LISTED_FAILURES: usize = 8;

impl<H: HostApi> App<H> {
    /// 액션 실행 (단일 진실 원천)
    pub async fn execute_action(&mut self, action: Action) {
        tracing::trace!(action = action.id(), "execute action");
        match action {
            Action::MoveUp => self.move_cursor_up(),
            Action::MoveDown => self.move_cursor_down(),
            Action::GoToTop => self.go_to_top(),
            Action::GoToBottom => self.go_to_bottom(),
            Action::PageUp => self.move_cursor_page_up(),
            Action::PageDown => self.move_cursor_page_down(),
            Action::ToggleFileSearch => self.browser.toggle_panel(OpenPanel::FileSearch),
            Action::ToggleFilters => self.browser.toggle_panel(OpenPanel::Filters),
            Action::ToggleManageFiles => self.browser.toggle_panel(OpenPanel::ManageFiles),
            Action::ClosePanel => self.browser.close_panel(),
            Action::OpenDirectory => self.open_directory().await,
            Action::ToggleSelection => self.toggle_selection_and_move_down(),
            Action::MoveFiles => {
                let result = self.browser.move_all().await;
                self.finish_bulk(OperationType::Move, result);
            }
            Action::CopyFiles => {
                let result = self.browser.copy_all().await;
                self.finish_bulk(OperationType::Copy, result);
            }
            Action::DeleteFiles => self.prompt_delete(),
            Action::RenameFiles => self.prompt_rename(),
            Action::ApplyFilters => self.apply_filters().await,
            Action::ClearFilters => self.clear_filters().await,
            Action::Minimize => self.browser.minimize_window(),
            Action::Restore => self.browser.restore_window(),
            Action::Close => self.browser.close_window(),
            Action::ToggleTheme => self.cycle_theme(),
            Action::ShowHelp => self.dialog = Some(DialogKind::help()),
        }
    }

    async fn open_directory(&mut self) {
        let result = self.browser.open_directory().await;
        if let Some(true) = self.report_error(result) {
            self.cursor = 0;
            self.scroll_offset = 0;
            let count = self.browser.files().len();
            self.set_toast(format!("Opened ({})", pluralize(count, "file", "files")));
        }
    }

    async fn apply_filters(&mut self) {
        let form = self.filter_form.to_form();
        let result = self.browser.apply_filters(&form).await;
        self.after_list_change();
        if self.report_error(result).is_some() {
            let count = self.browser.files().len();
            self.set_toast(format!("{} match", pluralize(count, "file", "files")));
        }
    }

    async fn clear_filters(&mut self) {
        self.filter_form.reset();
        let result = self.browser.clear_filters().await;
        self.after_list_change();
        if self.report_error(result).is_some() {
            self.set_toast("Filters cleared");
        }
    }

    /// 폴더와 대상이 있는지 확인, 대상 수 반환
    fn targets_for(&mut self, operation_type: OperationType) -> Option<usize> {
        if self.browser.current_path().is_none() {
            self.report_error::<()>(Err(FileSiftError::NoDirectoryOpen));
            return None;
        }
        let count = self.browser.target_set().len();
        if count == 0 {
            self.set_toast(format!("Nothing to {}", operation_type.name().to_lowercase()));
            return None;
        }
        Some(count)
    }

    fn prompt_delete(&mut self) {
        if let Some(count) = self.targets_for(OperationType::Delete) {
            let trash = self.config.delete_mode == DeleteMode::Trash;
            self.dialog = Some(DialogKind::delete_confirm(count, trash));
        }
    }

    fn prompt_rename(&mut self) {
        if let Some(count) = self.targets_for(OperationType::Rename) {
            self.dialog = Some(DialogKind::rename_input(count));
        }
    }

    /// 일괄 작업 결과 처리 (목록은 이미 다시 읽힌 상태)
    pub(super) fn finish_bulk(
        &mut self,
        operation_type: OperationType,
        result: Result<Option<OperationReport>>,
    ) {
        self.after_list_change();
        match self.report_error(result) {
            Some(Some(report)) if report.is_success() => {
                tracing::info!(summary = %report.summary(), "bulk operation done");
                self.set_toast(report.summary());
            }
            Some(Some(report)) => {
                tracing::warn!(
                    summary = %report.summary(),
                    failed = report.failures.len(),
                    "bulk operation finished with failures"
                );
                self.set_toast(report.summary());
                self.dialog = Some(DialogKind::error(
                    format!("{} failed", operation_type.name()),
                    failure_message(&report),
                ));
            }
            Some(None) => {
                tracing::debug!(operation = operation_type.name(), "bulk operation skipped");
            }
            None => {}
        }
    }
}

/// 실패 목록 메시지
fn failure_message(report: &OperationReport) -> String {
    let mut lines: Vec<String> = report
        .failures
        .iter()
        .take(MAX_LISTED_FAILURES)
        .map(|f| {
            let name = f
                .path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| f.path.display().to_string());
            format!("{}: {}", name, f.reason)
        })
        .collect();
    let hidden = report.failures.len().saturating_sub(MAX_LISTED_FAILURES);
    if hidden > 0 {
        lines.push(format!("... and {} more", hidden));
    }
    lines.join("\n")
}
