use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// 색상 테마
///
/// 설정 파일의 `theme` 값으로 dark / light 중 하나를 고른다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,

    // 패널
    pub panel_active_border: ColorDef,
    pub panel_inactive_border: ColorDef,
    pub panel_bg: ColorDef,

    // 파일 목록
    pub file_normal: ColorDef,
    pub file_selected: ColorDef,
    pub file_selected_bg: ColorDef,
    pub file_marked: ColorDef,
    pub category_label: ColorDef,

    // UI 컴포넌트
    pub title_bar_bg: ColorDef,
    pub title_bar_fg: ColorDef,
    pub status_bar_bg: ColorDef,
    pub status_bar_fg: ColorDef,
    pub command_bar_bg: ColorDef,
    pub command_bar_fg: ColorDef,
    pub input_bg: ColorDef,

    // 강조
    pub accent: ColorDef,
    pub warning: ColorDef,
    pub error: ColorDef,
}

/// 색상 정의
///
/// Hex 문자열("#1e1e1e") 또는 색상 이름("Red")을 지원합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    /// ColorDef를 ratatui의 Color로 변환
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(hex) => parse_hex_color(hex),
            ColorDef::Named(name) => parse_named_color(name),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

/// Hex 색상 문자열을 Color로 파싱
fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color::Rgb(r, g, b)
    } else {
        Color::Reset
    }
}

/// 색상 이름을 Color로 파싱
fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

impl Theme {
    /// Dark 테마 (기본)
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#1e1e1e".into(),
            fg_primary: "#d4d4d4".into(),

            panel_active_border: "#0078d4".into(),
            panel_inactive_border: "#3c3c3c".into(),
            panel_bg: "#1e1e1e".into(),

            file_normal: "#d4d4d4".into(),
            file_selected: "#ffffff".into(),
            file_selected_bg: "#0078d4".into(),
            file_marked: "#ffd700".into(),
            category_label: "#808080".into(),

            title_bar_bg: "#2d2d30".into(),
            title_bar_fg: "#ffffff".into(),
            status_bar_bg: "#007acc".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#2d2d30".into(),
            command_bar_fg: "#cccccc".into(),
            input_bg: "#3c3c3c".into(),

            accent: "#0078d4".into(),
            warning: "#ffa500".into(),
            error: "#f44747".into(),
        }
    }

    /// Light 테마
    pub fn light() -> Self {
        Theme {
            bg_primary: "#ffffff".into(),
            fg_primary: "#1e1e1e".into(),

            panel_active_border: "#0078d4".into(),
            panel_inactive_border: "#cccccc".into(),
            panel_bg: "#ffffff".into(),

            file_normal: "#1e1e1e".into(),
            file_selected: "#000000".into(),
            file_selected_bg: "#add6ff".into(),
            file_marked: "#b8860b".into(),
            category_label: "#6a6a6a".into(),

            title_bar_bg: "#0078d4".into(),
            title_bar_fg: "#ffffff".into(),
            status_bar_bg: "#0078d4".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#f3f3f3".into(),
            command_bar_fg: "#1e1e1e".into(),
            input_bg: "#e8e8e8".into(),

            accent: "#0078d4".into(),
            warning: "#ff8c00".into(),
            error: "#e51400".into(),
        }
    }
}

/// 테마 관리자
///
/// 현재 활성 테마를 관리하고 런타임에 테마를 전환합니다.
pub struct ThemeManager {
    current_name: String,
    current_theme: Theme,
    available_themes: Vec<(String, Theme)>,
}

impl ThemeManager {
    /// 기본 테마 관리자 생성 (Dark 테마)
    pub fn new() -> Self {
        Self {
            current_name: "dark".to_string(),
            current_theme: Theme::dark(),
            available_themes: vec![
                ("dark".to_string(), Theme::dark()),
                ("light".to_string(), Theme::light()),
            ],
        }
    }

    /// 이름으로 초기화 (모르는 이름이면 dark)
    pub fn with_theme_name(name: &str) -> Self {
        let mut manager = Self::new();
        if let Err(e) = manager.switch_theme(name) {
            tracing::warn!(error = %e, "falling back to dark theme");
        }
        manager
    }

    /// 현재 테마 반환
    pub fn current(&self) -> &Theme {
        &self.current_theme
    }

    pub fn current_name(&self) -> &str {
        &self.current_name
    }

    /// 테마 전환 (이름으로)
    pub fn switch_theme(&mut self, name: &str) -> Result<(), String> {
        if let Some((n, theme)) = self.available_themes.iter().find(|(n, _)| n == name) {
            self.current_name = n.clone();
            self.current_theme = theme.clone();
            Ok(())
        } else {
            Err(format!("unknown theme: {}", name))
        }
    }

    /// 다음 테마로 순환
    pub fn cycle_theme(&mut self) {
        let current_index = self
            .available_themes
            .iter()
            .position(|(n, _)| *n == self.current_name)
            .unwrap_or(0);

        let next_index = (current_index + 1) % self.available_themes.len();
        let (name, theme) = &self.available_themes[next_index];
        self.current_name = name.clone();
        self.current_theme = theme.clone();
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
