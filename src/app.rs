use crate::config::Config;
use crate::core::Browser;
use crate::models::OpenPanel;
use crate::system::{FileSystem, HostApi, LocalFileService};
use crate::ui::components::DialogKind;
use crate::ui::{LayoutManager, LayoutRequest, ThemeManager};
use crate::utils::error::{FileSiftError, Result};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

pub mod filter_form;
pub mod host;
pub mod picker;
pub mod text_edit;

mod dialogs;
mod keys;
mod navigation;
mod operations;


use filter_form::FilterFormState;
pub use host::{ShellState, TerminalHost};

/// 토스트 메시지 표시 시간
const TOAST_DURATION: Duration = Duration::from_secs(4);

/// 앱 상태
pub struct App<H: HostApi = TerminalHost> {
    /// 브라우저 컨트롤러 (세션 상태 소유)
    pub browser: Browser<H>,
    /// 창 상태 (호스트와 공유)
    pub shell: Rc<ShellState>,
    pub layout: LayoutManager,
    pub theme_manager: ThemeManager,
    /// 파일 목록 커서
    pub cursor: usize,
    pub scroll_offset: usize,
    /// 현재 표시 중인 다이얼로그
    pub dialog: Option<DialogKind>,
    /// 필터 패널 입력
    pub filter_form: FilterFormState,
    /// 토스트 메시지 (잠시 후 자동 소멸)
    pub toast_message: Option<(String, Instant)>,
    pub config: Config,
    /// 설정 저장 경로 (None이면 저장하지 않음)
    config_path: Option<PathBuf>,
}

impl App<TerminalHost> {
    pub fn new(config: Config, config_path: Option<PathBuf>) -> Self {
        let shell = Rc::new(ShellState::new());
        let service = LocalFileService::new(FileSystem::with_delete_mode(config.delete_mode));
        let host = TerminalHost::new(service, shell.clone());
        if let Some(dir) = &config.start_dir {
            host.remember_folder(dir.clone());
        }
        Self::with_host(host, shell, config, config_path)
    }
}

impl<H: HostApi> App<H> {
    pub fn with_host(
        host: H,
        shell: Rc<ShellState>,
        config: Config,
        config_path: Option<PathBuf>,
    ) -> Self {
        let theme_manager = ThemeManager::with_theme_name(&config.theme);
        shell.set_theme(theme_manager.current().clone());
        Self {
            browser: Browser::new(host),
            shell,
            layout: LayoutManager::new(),
            theme_manager,
            cursor: 0,
            scroll_offset: 0,
            dialog: None,
            filter_form: FilterFormState::new(),
            toast_message: None,
            config,
            config_path,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.shell.should_quit()
    }

    /// 레이아웃 계산에 넘길 창 상태
    pub fn layout_request(&self) -> LayoutRequest {
        LayoutRequest {
            side_panel_open: self.browser.session().is_shrunk(),
            maximized: self.shell.is_maximized(),
            minimized: self.shell.is_minimized(),
        }
    }

    /// 시작 폴더 열기 (실패하면 오류 다이얼로그)
    pub async fn open_start_dir(&mut self, dir: PathBuf) {
        let result = self.browser.load_directory(dir).await;
        self.after_list_change();
        self.report_error(result);
    }

    pub fn set_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some((message.into(), Instant::now()));
    }

    /// 만료되지 않은 토스트 메시지
    pub fn toast(&self) -> Option<&str> {
        self.toast_message
            .as_ref()
            .filter(|(_, at)| at.elapsed() < TOAST_DURATION)
            .map(|(message, _)| message.as_str())
    }

    /// 필터 패널이 키 입력을 받는 상태인지
    pub fn is_editing_filters(&self) -> bool {
        self.dialog.is_none() && self.browser.open_panel() == OpenPanel::Filters
    }

    /// 오류를 기록하고 다이얼로그로 보여준다
    fn report_error<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!(error = %e, "operation failed");
                self.dialog = Some(DialogKind::error(error_title(&e), e.to_string()));
                None
            }
        }
    }

    /// 테마 순환 후 설정에 저장
    fn cycle_theme(&mut self) {
        self.theme_manager.cycle_theme();
        self.shell.set_theme(self.theme_manager.current().clone());
        self.config.theme = self.theme_manager.current_name().to_string();
        self.set_toast(format!("Theme: {}", self.config.theme));
        self.save_config();
    }

    fn save_config(&self) {
        let Some(path) = &self.config_path else {
            return;
        };
        if let Err(e) = self.config.save(path) {
            tracing::warn!(path = %path.display(), error = %e, "cannot save config");
        }
    }
}

fn error_title(error: &FileSiftError) -> &'static str {
    match error {
        FileSiftError::NoDirectoryOpen => "No folder",
        FileSiftError::PermissionDenied { .. } => "Permission denied",
        FileSiftError::PathNotFound { .. } | FileSiftError::NotADirectory { .. } => "Not found",
        _ => "Error",
    }
}

#[cfg(test)]
impl App<crate::system::host::mock::MockHost> {
    pub(crate) fn new_for_test() -> Self {
        Self::with_mock(crate::system::host::mock::MockHost::new())
    }

    pub(crate) fn with_mock(host: crate::system::host::mock::MockHost) -> Self {
        let mut app = Self::with_host(host, Rc::new(ShellState::new()), Config::default(), None);
        app.layout.update(
            ratatui::layout::Rect::new(0, 0, 100, 30),
            LayoutRequest::default(),
        );
        app
    }

    pub(crate) fn host(&self) -> &crate::system::host::mock::MockHost {
        self.browser.host()
    }
}
