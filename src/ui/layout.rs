// Layout system - 창 상태와 사이드 패널에 따른 화면 분할
//
// - 일반: 타이틀바 | (사이드 패널) 파일 목록 | 상태바 | 커맨드바
// - 최대화: 파일 목록 | 상태바 (타이틀바/커맨드바 숨김)
// - 최소화: 한 줄 타이틀바만 표시
// - 너무 작음: 경고 화면

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 50;
pub const MIN_HEIGHT: u16 = 10;
/// 사이드 패널 고정 너비
pub const SIDE_PANEL_WIDTH: u16 = 34;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutMode {
    #[default]
    Normal,
    Maximized,
    Minimized,
    /// 터미널이 너무 작음
    TooSmall,
}

/// 화면 구성 요청
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutRequest {
    pub side_panel_open: bool,
    pub maximized: bool,
    pub minimized: bool,
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default)]
pub struct LayoutAreas {
    pub title_bar: Rect,
    /// 사이드 패널 (닫혀 있으면 빈 영역)
    pub side_panel: Rect,
    pub file_list: Rect,
    pub status_bar: Rect,
    pub command_bar: Rect,
}

/// 레이아웃 매니저
#[derive(Debug, Default)]
pub struct LayoutManager {
    mode: LayoutMode,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl LayoutManager {
    pub fn new() -> Self {
        Self::default()
    }

    fn determine_mode(width: u16, height: u16, request: LayoutRequest) -> LayoutMode {
        if request.minimized {
            LayoutMode::Minimized
        } else if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else if request.maximized {
            LayoutMode::Maximized
        } else {
            LayoutMode::Normal
        }
    }

    /// 터미널 크기와 창 상태로 레이아웃 재계산
    pub fn update(&mut self, area: Rect, request: LayoutRequest) {
        self.terminal_size = (area.width, area.height);
        self.mode = Self::determine_mode(area.width, area.height, request);
        self.areas = match self.mode {
            LayoutMode::TooSmall => LayoutAreas::default(),
            LayoutMode::Minimized => LayoutAreas {
                title_bar: Rect { height: area.height.min(1), ..area },
                ..Default::default()
            },
            LayoutMode::Normal => Self::normal_areas(area, request.side_panel_open),
            LayoutMode::Maximized => Self::maximized_areas(area, request.side_panel_open),
        };
    }

    fn normal_areas(area: Rect, side_panel_open: bool) -> LayoutAreas {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // 타이틀바
                Constraint::Min(3),    // 본문
                Constraint::Length(1), // 상태바
                Constraint::Length(1), // 커맨드바
            ])
            .split(area);

        let (side_panel, file_list) = Self::split_body(vertical_chunks[1], side_panel_open);

        LayoutAreas {
            title_bar: vertical_chunks[0],
            side_panel,
            file_list,
            status_bar: vertical_chunks[2],
            command_bar: vertical_chunks[3],
        }
    }

    fn maximized_areas(area: Rect, side_panel_open: bool) -> LayoutAreas {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let (side_panel, file_list) = Self::split_body(vertical_chunks[0], side_panel_open);

        LayoutAreas {
            side_panel,
            file_list,
            status_bar: vertical_chunks[1],
            ..Default::default()
        }
    }

    /// 패널이 열려 있으면 왼쪽에 고정 너비 패널, 파일 목록은 나머지로 줄어든다
    fn split_body(body: Rect, side_panel_open: bool) -> (Rect, Rect) {
        if !side_panel_open {
            return (Rect::default(), body);
        }
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDE_PANEL_WIDTH), Constraint::Min(10)])
            .split(body);
        (chunks[0], chunks[1])
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// 파일 목록에 보이는 행 수 (테두리 제외)
    pub fn visible_rows(&self) -> usize {
        self.areas.file_list.height.saturating_sub(2) as usize
    }
}
