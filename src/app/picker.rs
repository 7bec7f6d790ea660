//! 폴더 선택기
//!
//! 메인 화면 위에 모달로 그려지는 디렉토리 탐색기. 선택이 끝날 때까지 키 입력을 독점한다.

use crate::system::FileSystem;
use crate::ui::components::FolderPickerView;
use crate::ui::Theme;
use crate::utils::error::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};

/// 키 처리 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Continue,
    Chosen(PathBuf),
    Cancelled,
}

/// 선택기 상태
#[derive(Debug, Clone)]
pub struct FolderPicker {
    current: PathBuf,
    entries: Vec<PathBuf>,
    cursor: usize,
    /// 마지막 디렉토리 읽기 오류
    error: Option<String>,
}

impl FolderPicker {
    pub fn open(start: PathBuf, filesystem: &FileSystem) -> Self {
        let mut picker = Self {
            current: start,
            entries: Vec::new(),
            cursor: 0,
            error: None,
        };
        picker.reload(filesystem);
        picker
    }

    fn reload(&mut self, filesystem: &FileSystem) {
        match filesystem.list_subdirectories(&self.current) {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(path = %self.current.display(), error = %e, "cannot list folder");
                self.entries.clear();
                self.error = Some(e.to_string());
            }
        }
        self.cursor = 0;
    }

    pub fn current(&self) -> &Path {
        &self.current
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn highlighted(&self) -> Option<&Path> {
        self.entries.get(self.cursor).map(PathBuf::as_path)
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// 강조된 디렉토리로 들어간다
    pub fn descend(&mut self, filesystem: &FileSystem) {
        if let Some(next) = self.highlighted().map(Path::to_path_buf) {
            self.current = next;
            self.reload(filesystem);
        }
    }

    /// 상위 디렉토리로 이동 (이전 디렉토리에 커서)
    pub fn parent(&mut self, filesystem: &FileSystem) {
        let Some(parent) = self.current.parent().map(Path::to_path_buf) else {
            return;
        };
        let previous = std::mem::replace(&mut self.current, parent);
        self.reload(filesystem);
        if let Some(index) = self.entries.iter().position(|p| *p == previous) {
            self.cursor = index;
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, filesystem: &FileSystem) -> PickerOutcome {
        match code {
            KeyCode::Char('j') | KeyCode::Down => self.move_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_up(),
            KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => self.descend(filesystem),
            KeyCode::Char('h') | KeyCode::Backspace | KeyCode::Left => self.parent(filesystem),
            KeyCode::Char(' ') => {
                let chosen = self.highlighted().unwrap_or(&self.current).to_path_buf();
                return PickerOutcome::Chosen(chosen);
            }
            KeyCode::Char('s') => return PickerOutcome::Chosen(self.current.clone()),
            KeyCode::Esc | KeyCode::Char('q') => return PickerOutcome::Cancelled,
            _ => {}
        }
        PickerOutcome::Continue
    }
}

/// 모달 선택기 실행 (블로킹)
///
/// 취소하면 `None`. 호출 측은 돌아온 뒤 메인 화면을 전부 다시 그려야 한다.
pub fn run_folder_picker(
    start: PathBuf,
    filesystem: FileSystem,
    theme: Theme,
) -> Result<Option<PathBuf>> {
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;
    let mut picker = FolderPicker::open(start, &filesystem);

    loop {
        terminal.draw(|f| {
            let view = FolderPickerView::new(&picker).theme(&theme);
            f.render_widget(view, f.area());
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match picker.handle_key(key.code, &filesystem) {
                PickerOutcome::Continue => {}
                PickerOutcome::Chosen(path) => {
                    tracing::debug!(path = %path.display(), "folder chosen");
                    return Ok(Some(path));
                }
                PickerOutcome::Cancelled => return Ok(None),
            }
        }
    }
}
