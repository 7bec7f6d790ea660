//! 터미널 호스트
//!
//! 호스트 API를 터미널 환경에서 구현한다. 파일 작업은 tokio 블로킹 풀에서
//! 로컬 파일 서비스로 실행하고, 창 제어는 공유 셸 상태에 기록한다.

use super::picker::run_folder_picker;
use crate::models::{FileRecord, FilterCriteria, OperationReport};
use crate::system::{HostApi, LocalFileService};
use crate::ui::Theme;
use crate::utils::error::{FileSiftError, Result};
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// 창 상태 (메인 루프와 호스트가 공유)
#[derive(Debug, Default)]
pub struct ShellState {
    minimized: Cell<bool>,
    maximized: Cell<bool>,
    should_quit: Cell<bool>,
    /// 모달 화면이 터미널을 덮어썼음
    needs_redraw: Cell<bool>,
    /// 모달 화면에 쓸 테마 (없으면 dark)
    theme: RefCell<Option<Theme>>,
}

impl ShellState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized.get()
    }

    pub fn is_maximized(&self) -> bool {
        self.maximized.get()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit.get()
    }

    pub fn minimize(&self) {
        self.minimized.set(true);
    }

    /// 최소화 중이면 복원, 아니면 최대화 토글
    pub fn restore(&self) {
        if self.minimized.replace(false) {
            return;
        }
        self.maximized.set(!self.maximized.get());
    }

    pub fn close(&self) {
        self.should_quit.set(true);
    }

    pub fn request_redraw(&self) {
        self.needs_redraw.set(true);
    }

    /// 다시 그리기 요청을 꺼내고 초기화
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }

    pub fn set_theme(&self, theme: Theme) {
        *self.theme.borrow_mut() = Some(theme);
    }

    pub fn theme(&self) -> Theme {
        self.theme.borrow().clone().unwrap_or_else(Theme::dark)
    }
}

/// 터미널 호스트
pub struct TerminalHost {
    service: LocalFileService,
    shell: Rc<ShellState>,
    /// 선택기 시작 위치 (마지막으로 고른 폴더)
    last_picked: RefCell<Option<PathBuf>>,
}

impl TerminalHost {
    pub fn new(service: LocalFileService, shell: Rc<ShellState>) -> Self {
        Self {
            service,
            shell,
            last_picked: RefCell::new(None),
        }
    }

    /// 선택기 시작 위치를 지정 (시작 폴더)
    pub fn remember_folder(&self, path: PathBuf) {
        *self.last_picked.borrow_mut() = Some(path);
    }

    fn picker_start(&self) -> PathBuf {
        self.last_picked
            .borrow()
            .clone()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("/"))
    }
}

/// 블로킹 풀에서 실행
async fn blocking<T, F>(job: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| FileSiftError::Task(e.to_string()))?
}

impl HostApi for TerminalHost {
    async fn open_folder_picker(&self) -> Result<Vec<PathBuf>> {
        let start = self.picker_start();
        let filesystem = self.service.filesystem().clone();
        let theme = self.shell.theme();

        let chosen = blocking(move || run_folder_picker(start, filesystem, theme)).await;
        self.shell.request_redraw();

        let chosen = chosen?;
        if let Some(path) = &chosen {
            *self.last_picked.borrow_mut() = Some(path.clone());
        }
        Ok(chosen.into_iter().collect())
    }

    async fn simple_search(&self, dir: &Path) -> Result<Vec<FileRecord>> {
        let service = self.service.clone();
        let dir = dir.to_path_buf();
        blocking(move || service.simple_search(&dir)).await
    }

    async fn apply_filter(
        &self,
        dir: &Path,
        criteria: &FilterCriteria,
    ) -> Result<Vec<FileRecord>> {
        let service = self.service.clone();
        let dir = dir.to_path_buf();
        let criteria = criteria.clone();
        blocking(move || service.apply_filter(&dir, &criteria)).await
    }

    async fn move_all(&self, files: &[FileRecord], dest: &Path) -> Result<OperationReport> {
        let service = self.service.clone();
        let files = files.to_vec();
        let dest = dest.to_path_buf();
        blocking(move || Ok(service.move_all(&files, &dest))).await
    }

    async fn copy_all(&self, files: &[FileRecord], dest: &Path) -> Result<OperationReport> {
        let service = self.service.clone();
        let files = files.to_vec();
        let dest = dest.to_path_buf();
        blocking(move || Ok(service.copy_all(&files, &dest))).await
    }

    async fn delete_all(&self, files: &[FileRecord]) -> Result<OperationReport> {
        let service = self.service.clone();
        let files = files.to_vec();
        blocking(move || Ok(service.delete_all(&files))).await
    }

    async fn rename_all(&self, files: &[FileRecord], new_stem: &str) -> Result<OperationReport> {
        let service = self.service.clone();
        let files = files.to_vec();
        let new_stem = new_stem.to_string();
        blocking(move || Ok(service.rename_all(&files, &new_stem))).await
    }

    fn minimize_window(&self) {
        self.shell.minimize();
    }

    fn restore_window(&self) {
        self.shell.restore();
    }

    fn close_window(&self) {
        self.shell.close();
    }
}
