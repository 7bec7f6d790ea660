//! 브라우저 컨트롤러
//!
//! 세션 상태를 소유하고 사용자 동작을 호스트 API 호출로 옮긴다.
//! 목록을 바꾸는 모든 동작은 호출이 끝난 뒤 마지막 단계로 목록을 통째로 교체한다.

use crate::models::operation::{OperationReport, OperationType};
use crate::models::{FileRecord, FilterForm, OpenPanel, SessionState};
use crate::system::HostApi;
use crate::utils::error::{FileSiftError, Result};
use std::path::{Path, PathBuf};

/// 표시 항목 하나 (카테고리 라벨 + 값)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub category: String,
    pub text: String,
}

/// 파일 하나의 표시 그룹
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroupView {
    pub path: PathBuf,
    pub entries: Vec<EntryView>,
    pub selected: bool,
}

pub struct Browser<H: HostApi> {
    host: H,
    session: SessionState,
}

impl<H: HostApi> Browser<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            session: SessionState::new(),
        }
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    #[cfg(test)]
    pub fn host(&self) -> &H {
        &self.host
    }

    // === 패널 ===

    /// 패널 토글 (다른 패널이 열려 있으면 먼저 닫힘)
    pub fn toggle_panel(&mut self, panel: OpenPanel) {
        self.session.open_panel.toggle(panel);
        tracing::debug!(panel = ?self.session.open_panel, "panel toggled");
    }

    pub fn close_panel(&mut self) {
        self.session.open_panel = OpenPanel::None;
    }

    pub fn open_panel(&self) -> OpenPanel {
        self.session.open_panel
    }

    // === 디렉토리 ===

    /// 폴더 선택기로 디렉토리를 열고 목록을 읽는다
    ///
    /// 선택기가 아무것도 돌려주지 않으면 아무 상태도 바꾸지 않고 `false`.
    pub async fn open_directory(&mut self) -> Result<bool> {
        let picked = self.host.open_folder_picker().await?;
        let Some(path) = picked.into_iter().next() else {
            tracing::debug!("folder picker returned nothing");
            return Ok(false);
        };
        self.load_directory(path).await?;
        Ok(true)
    }

    /// 지정 경로를 현재 디렉토리로 삼고 필터 없는 목록을 읽는다
    pub async fn load_directory(&mut self, path: PathBuf) -> Result<()> {
        let files = self.host.simple_search(&path).await?;
        tracing::info!(path = %path.display(), files = files.len(), "directory loaded");
        self.session.current_path = Some(path);
        self.render_files(files);
        self.session.listing_filtered = false;
        Ok(())
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.session.current_path.as_deref()
    }

    // === 목록/선택 ===

    /// 목록 교체 (선택 초기화)
    pub fn render_files(&mut self, files: Vec<FileRecord>) {
        self.session.replace_files(files);
    }

    /// 현재 목록의 표시 모델
    pub fn view(&self) -> Vec<FileGroupView> {
        self.session
            .current_file_list
            .iter()
            .map(|record| FileGroupView {
                path: record.path().to_path_buf(),
                entries: record
                    .display_fields()
                    .map(|field| EntryView {
                        category: field.key.clone(),
                        text: field.value.clone(),
                    })
                    .collect(),
                selected: self.session.is_selected(record),
            })
            .collect()
    }

    pub fn files(&self) -> &[FileRecord] {
        &self.session.current_file_list
    }

    /// 선택 토글, 토글 후 선택 여부 반환
    #[cfg(test)]
    pub fn toggle_selection(&mut self, path: &Path) -> bool {
        self.session.toggle_selection(path)
    }

    /// 목록 인덱스로 선택 토글
    pub fn toggle_selection_at(&mut self, index: usize) -> Option<bool> {
        let path = self.session.current_file_list.get(index)?.path().to_path_buf();
        Some(self.session.toggle_selection(&path))
    }

    pub fn selected_count(&self) -> usize {
        self.session.selected_files.len()
    }

    /// 일괄 작업 대상 (선택 또는 전체)
    pub fn target_set(&self) -> Vec<FileRecord> {
        self.session.target_set()
    }

    // === 필터 ===

    /// 폼 입력으로 필터 적용
    ///
    /// 조건은 호출 전에 먼저 기록된다.
    pub async fn apply_filters(&mut self, form: &FilterForm) -> Result<()> {
        let criteria = form.compose();
        self.session.current_filters = Some(criteria.clone());
        let dir = self.require_dir()?;
        let files = self.host.apply_filter(&dir, &criteria).await?;
        tracing::info!(files = files.len(), "filters applied");
        self.render_files(files);
        self.session.listing_filtered = !criteria.is_blank();
        Ok(())
    }

    /// 필터 해제 후 필터 없는 목록으로 복귀
    pub async fn clear_filters(&mut self) -> Result<()> {
        self.session.current_filters = None;
        let dir = self.require_dir()?;
        self.reload(&dir).await
    }

    // === 일괄 작업 ===

    pub async fn move_all(&mut self) -> Result<Option<OperationReport>> {
        self.transfer(OperationType::Move).await
    }

    pub async fn copy_all(&mut self) -> Result<Option<OperationReport>> {
        self.transfer(OperationType::Copy).await
    }

    pub async fn delete_all(&mut self) -> Result<Option<OperationReport>> {
        let dir = self.require_dir()?;
        let targets = self.target_set();
        if targets.is_empty() {
            return Ok(None);
        }
        let outcome = self.host.delete_all(&targets).await;
        self.finish(&dir, outcome).await
    }

    /// 대상 파일을 `<stem>_<i><ext>`로 일괄 이름 변경
    pub async fn rename_all(&mut self, new_stem: &str) -> Result<Option<OperationReport>> {
        let dir = self.require_dir()?;
        let targets = self.target_set();
        if targets.is_empty() || new_stem.is_empty() {
            return Ok(None);
        }
        let outcome = self.host.rename_all(&targets, new_stem).await;
        self.finish(&dir, outcome).await
    }

    /// 이동/복사: 목적지를 선택기로 받는다 (취소 시 아무 호출도 하지 않음)
    async fn transfer(&mut self, operation_type: OperationType) -> Result<Option<OperationReport>> {
        let dir = self.require_dir()?;
        let targets = self.target_set();
        if targets.is_empty() {
            return Ok(None);
        }

        let picked = self.host.open_folder_picker().await?;
        let Some(dest) = picked.into_iter().next() else {
            tracing::debug!(operation = operation_type.name(), "no destination chosen");
            return Ok(None);
        };

        tracing::info!(
            operation = operation_type.name(),
            files = targets.len(),
            dest = %dest.display(),
            "starting bulk operation"
        );
        let outcome = match operation_type {
            OperationType::Move => self.host.move_all(&targets, &dest).await,
            _ => self.host.copy_all(&targets, &dest).await,
        };
        self.finish(&dir, outcome).await
    }

    /// 작업 결과와 상관없이 목록을 다시 읽는다
    async fn finish(
        &mut self,
        dir: &Path,
        outcome: Result<OperationReport>,
    ) -> Result<Option<OperationReport>> {
        self.reload(dir).await?;
        outcome.map(Some)
    }

    async fn reload(&mut self, dir: &Path) -> Result<()> {
        let files = self.host.simple_search(dir).await?;
        self.render_files(files);
        self.session.listing_filtered = false;
        Ok(())
    }

    fn require_dir(&self) -> Result<PathBuf> {
        self.session
            .current_path
            .clone()
            .ok_or(FileSiftError::NoDirectoryOpen)
    }

    // === 창 제어 ===

    pub fn minimize_window(&self) {
        self.host.minimize_window();
    }

    pub fn restore_window(&self) {
        self.host.restore_window();
    }

    pub fn close_window(&self) {
        self.host.close_window();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FilterCriteria;
    use crate::system::host::mock::{HostCall, MockHost};

    fn docs() -> Vec<FileRecord> {
        vec![
            FileRecord::new("/docs/a.txt").field("name", "a.txt"),
            FileRecord::new("/docs/b.txt").field("name", "b.txt"),
        ]
    }

    async fn browser_at_docs() -> Browser<MockHost> {
        let host = MockHost::new().with_listing("/docs", docs());
        let mut browser = Browser::new(host);
        browser.load_directory(PathBuf::from("/docs")).await.unwrap();
        browser.host().clear_calls();
        browser
    }

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_only_one_panel_open() {
        let mut browser = Browser::new(MockHost::new());
        browser.toggle_panel(OpenPanel::FileSearch);
        browser.toggle_panel(OpenPanel::Filters);
        assert_eq!(browser.open_panel(), OpenPanel::Filters);
        assert!(browser.session().is_shrunk());

        browser.toggle_panel(OpenPanel::Filters);
        assert_eq!(browser.open_panel(), OpenPanel::None);
        assert!(!browser.session().is_shrunk());
    }

    #[tokio::test]
    async fn test_open_directory_renders_without_path_field() {
        let host = MockHost::new().with_listing("/docs", docs());
        host.push_pick(&["/docs"]);
        let mut browser = Browser::new(host);

        assert!(browser.open_directory().await.unwrap());

        assert_eq!(browser.current_path(), Some(Path::new("/docs")));
        let view = browser.view();
        assert_eq!(view.len(), 2);
        for (group, name) in view.iter().zip(["a.txt", "b.txt"]) {
            assert_eq!(
                group.entries,
                vec![EntryView {
                    category: "name".to_string(),
                    text: name.to_string(),
                }]
            );
            assert!(!group.selected);
        }
        assert_eq!(
            browser.host().calls(),
            vec![HostCall::Picker, HostCall::SimpleSearch(PathBuf::from("/docs"))]
        );
    }

    #[tokio::test]
    async fn test_open_directory_with_empty_pick_is_noop() {
        let mut browser = browser_at_docs().await;
        browser.toggle_selection(Path::new("/docs/a.txt"));

        assert!(!browser.open_directory().await.unwrap());

        assert_eq!(browser.current_path(), Some(Path::new("/docs")));
        assert_eq!(browser.files().len(), 2);
        assert_eq!(browser.selected_count(), 1);
        assert_eq!(browser.host().calls(), vec![HostCall::Picker]);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_directory() {
        let mut browser = browser_at_docs().await;
        *browser.host().fail_search.borrow_mut() = true;

        let result = browser.load_directory(PathBuf::from("/gone")).await;

        assert!(matches!(result, Err(FileSiftError::PathNotFound { .. })));
        assert_eq!(browser.current_path(), Some(Path::new("/docs")));
        assert_eq!(browser.files().len(), 2);
    }

    #[tokio::test]
    async fn test_selection_marks_view() {
        let mut browser = browser_at_docs().await;

        assert_eq!(browser.toggle_selection_at(1), Some(true));
        let view = browser.view();
        assert!(!view[0].selected);
        assert!(view[1].selected);

        assert_eq!(browser.toggle_selection_at(1), Some(false));
        assert_eq!(browser.selected_count(), 0);
        assert_eq!(browser.toggle_selection_at(9), None);
    }

    #[tokio::test]
    async fn test_apply_filters_records_criteria_and_replaces_list() {
        let mut browser = browser_at_docs().await;
        browser.toggle_selection(Path::new("/docs/a.txt"));
        *browser.host().filtered.borrow_mut() =
            vec![FileRecord::new("/docs/c.pdf").field("name", "c.pdf")];

        let form = FilterForm {
            extensions: "pdf".to_string(),
            size_min_value: "0".to_string(),
            size_max_value: "100".to_string(),
            ..Default::default()
        };
        browser.apply_filters(&form).await.unwrap();

        let expected = FilterCriteria {
            tags: vec![String::new()],
            extensions: vec!["pdf".to_string()],
            size_min: "0".to_string(),
            size_max: "100".to_string(),
        };
        assert_eq!(browser.session().current_filters, Some(expected.clone()));
        assert_eq!(
            browser.host().calls(),
            vec![HostCall::ApplyFilter(PathBuf::from("/docs"), expected)]
        );
        assert_eq!(browser.files().len(), 1);
        assert_eq!(browser.selected_count(), 0);
    }

    #[tokio::test]
    async fn test_apply_filters_without_directory() {
        let mut browser = Browser::new(MockHost::new());

        let result = browser.apply_filters(&FilterForm::default()).await;

        assert!(matches!(result, Err(FileSiftError::NoDirectoryOpen)));
        assert!(browser.session().current_filters.is_some());
        assert!(browser.host().calls().is_empty());
    }

    #[tokio::test]
    async fn test_clear_filters_resets_and_reloads() {
        let mut browser = browser_at_docs().await;
        browser.apply_filters(&FilterForm::default()).await.unwrap();
        browser.host().clear_calls();

        browser.clear_filters().await.unwrap();

        assert!(browser.session().current_filters.is_none());
        assert_eq!(browser.files().len(), 2);
        assert_eq!(
            browser.host().calls(),
            vec![HostCall::SimpleSearch(PathBuf::from("/docs"))]
        );
    }

    #[tokio::test]
    async fn test_delete_targets_selection_only_then_reloads() {
        let mut browser = browser_at_docs().await;
        browser.toggle_selection(Path::new("/docs/a.txt"));

        let report = browser.delete_all().await.unwrap().unwrap();

        assert_eq!(report.succeeded, 1);
        assert_eq!(
            browser.host().calls(),
            vec![
                HostCall::DeleteAll(paths(&["/docs/a.txt"])),
                HostCall::SimpleSearch(PathBuf::from("/docs")),
            ]
        );
        assert_eq!(browser.selected_count(), 0);
    }

    #[tokio::test]
    async fn test_move_without_selection_targets_whole_list() {
        let mut browser = browser_at_docs().await;
        browser.host().push_pick(&["/archive", "/ignored"]);

        browser.move_all().await.unwrap();

        assert_eq!(
            browser.host().calls(),
            vec![
                HostCall::Picker,
                HostCall::MoveAll(
                    paths(&["/docs/a.txt", "/docs/b.txt"]),
                    PathBuf::from("/archive")
                ),
                HostCall::SimpleSearch(PathBuf::from("/docs")),
            ]
        );
    }

    #[tokio::test]
    async fn test_copy_selection_to_picked_folder() {
        let mut browser = browser_at_docs().await;
        browser.toggle_selection(Path::new("/docs/b.txt"));
        browser.host().push_pick(&["/backup"]);

        let report = browser.copy_all().await.unwrap().unwrap();

        assert_eq!(report.operation_type, OperationType::Copy);
        assert_eq!(
            browser.host().calls()[1],
            HostCall::CopyAll(paths(&["/docs/b.txt"]), PathBuf::from("/backup"))
        );
    }

    #[tokio::test]
    async fn test_cancelled_destination_skips_operation() {
        let mut browser = browser_at_docs().await;
        browser.toggle_selection(Path::new("/docs/a.txt"));

        assert_eq!(browser.copy_all().await.unwrap(), None);

        assert_eq!(browser.host().calls(), vec![HostCall::Picker]);
        assert_eq!(browser.selected_count(), 1);
    }

    #[tokio::test]
    async fn test_bulk_operation_on_empty_list_is_noop() {
        let host = MockHost::new().with_listing("/empty", Vec::new());
        let mut browser = Browser::new(host);
        browser.load_directory(PathBuf::from("/empty")).await.unwrap();
        browser.host().clear_calls();

        assert_eq!(browser.delete_all().await.unwrap(), None);
        assert_eq!(browser.move_all().await.unwrap(), None);
        assert!(browser.host().calls().is_empty());
    }

    #[tokio::test]
    async fn test_bulk_operation_without_directory() {
        let mut browser = Browser::new(MockHost::new());
        assert!(matches!(
            browser.delete_all().await,
            Err(FileSiftError::NoDirectoryOpen)
        ));
    }

    #[tokio::test]
    async fn test_rename_all_uses_stem() {
        let mut browser = browser_at_docs().await;

        browser.rename_all("note").await.unwrap();
        assert_eq!(
            browser.host().calls()[0],
            HostCall::RenameAll(paths(&["/docs/a.txt", "/docs/b.txt"]), "note".to_string())
        );

        browser.host().clear_calls();
        assert_eq!(browser.rename_all("").await.unwrap(), None);
        assert!(browser.host().calls().is_empty());
    }

    #[tokio::test]
    async fn test_reload_after_bulk_operation_shows_new_listing() {
        let mut browser = browser_at_docs().await;
        browser
            .host()
            .set_listing("/docs", vec![FileRecord::new("/docs/b.txt").field("name", "b.txt")]);
        browser.toggle_selection(Path::new("/docs/a.txt"));

        browser.delete_all().await.unwrap();

        let view = browser.view();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].path, PathBuf::from("/docs/b.txt"));
    }

    #[tokio::test]
    async fn test_listing_unfiltered_after_bulk_operation() {
        let mut browser = browser_at_docs().await;
        *browser.host().filtered.borrow_mut() =
            vec![FileRecord::new("/docs/a.pdf").field("name", "a.pdf")];
        let form = FilterForm {
            extensions: "pdf".to_string(),
            ..Default::default()
        };
        browser.apply_filters(&form).await.unwrap();
        assert!(browser.session().listing_filtered);

        browser.toggle_selection(Path::new("/docs/a.pdf"));
        browser.delete_all().await.unwrap();

        // 조건은 남지만 보이는 목록은 필터 없는 재조회 결과
        assert!(browser.session().current_filters.is_some());
        assert!(!browser.session().listing_filtered);
        assert_eq!(browser.files().len(), 2);
    }

    #[tokio::test]
    async fn test_blank_filters_do_not_mark_listing() {
        let mut browser = browser_at_docs().await;
        browser.apply_filters(&FilterForm::default()).await.unwrap();
        assert!(!browser.session().listing_filtered);
    }

    #[test]
    fn test_window_controls_pass_through() {
        let browser = Browser::new(MockHost::new());
        browser.minimize_window();
        browser.restore_window();
        browser.close_window();
        assert_eq!(
            browser.host().calls(),
            vec![HostCall::Minimize, HostCall::Restore, HostCall::Close]
        );
    }
}
