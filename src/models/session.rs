use crate::models::file_record::FileRecord;
use crate::models::filter::FilterCriteria;
use std::collections::HashSet;
use std::path::PathBuf;

/// 열려 있는 사이드 패널 (항상 최대 하나)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenPanel {
    #[default]
    None,
    /// 폴더 열기
    FileSearch,
    /// 필터
    Filters,
    /// 이동/복사/삭제
    ManageFiles,
}

impl OpenPanel {
    /// 패널 토글
    ///
    /// 같은 패널이면 닫고, 다른 패널이면 그 패널로 교체한다 (기존 패널은 닫힘).
    pub fn toggle(&mut self, panel: OpenPanel) {
        *self = if *self == panel { OpenPanel::None } else { panel };
    }

    pub fn is_open(&self) -> bool {
        *self != OpenPanel::None
    }

    /// 패널 제목
    pub fn title(&self) -> &'static str {
        match self {
            OpenPanel::None => "",
            OpenPanel::FileSearch => "Open folder",
            OpenPanel::Filters => "Filters",
            OpenPanel::ManageFiles => "Manage files",
        }
    }
}

/// 세션 상태 (창 하나의 수명 동안 유지)
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// 현재 디렉토리
    pub current_path: Option<PathBuf>,
    /// 현재 파일 목록 (통째로 교체됨)
    pub current_file_list: Vec<FileRecord>,
    /// 선택된 파일 경로
    pub selected_files: HashSet<PathBuf>,
    /// 마지막으로 적용한 필터
    pub current_filters: Option<FilterCriteria>,
    /// 지금 보이는 목록이 필터 결과인지 (일괄 작업 후 재조회는 필터 없음)
    pub listing_filtered: bool,
    /// 열린 패널
    pub open_panel: OpenPanel,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 목록 교체 (선택 초기화)
    pub fn replace_files(&mut self, files: Vec<FileRecord>) {
        self.current_file_list = files;
        self.selected_files.clear();
    }

    /// 선택 토글, 토글 후 선택 여부 반환
    pub fn toggle_selection(&mut self, path: &std::path::Path) -> bool {
        if self.selected_files.remove(path) {
            false
        } else {
            self.selected_files.insert(path.to_path_buf());
            true
        }
    }

    pub fn is_selected(&self, record: &FileRecord) -> bool {
        self.selected_files.contains(record.path())
    }

    /// 작업 대상 집합
    ///
    /// 선택이 있으면 선택된 레코드(목록 순서), 없으면 목록 전체.
    pub fn target_set(&self) -> Vec<FileRecord> {
        if self.selected_files.is_empty() {
            return self.current_file_list.clone();
        }
        self.current_file_list
            .iter()
            .filter(|record| self.is_selected(record))
            .cloned()
            .collect()
    }

    /// "shrink" 레이아웃 여부
    pub fn is_shrunk(&self) -> bool {
        self.open_panel.is_open()
    }
}
