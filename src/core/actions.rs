//! 액션 시스템
//!
//! 키 바인딩, 커맨드바 항목, 도움말 내용이 모두 이 모듈의 레지스트리를 참조한다.

use crate::models::OpenPanel;
use crate::ui::components::command_bar::CommandItem;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    PageUp,
    PageDown,
    // Panels
    ToggleFileSearch,
    ToggleFilters,
    ToggleManageFiles,
    ClosePanel,
    // Directory
    OpenDirectory,
    // Selection
    ToggleSelection,
    // File Operations (ManageFiles 패널)
    MoveFiles,
    CopyFiles,
    DeleteFiles,
    RenameFiles,
    // Filters (Filters 패널)
    ApplyFilters,
    ClearFilters,
    // Window
    Minimize,
    Restore,
    Close,
    // System
    ToggleTheme,
    ShowHelp,
}

/// 액션 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    Panel,
    FileOperation,
    Filter,
    Window,
}

impl ActionCategory {
    pub fn title(&self) -> &'static str {
        match self {
            ActionCategory::Navigation => "Navigation",
            ActionCategory::Panel => "Panels",
            ActionCategory::FileOperation => "File Operations",
            ActionCategory::Filter => "Filters",
            ActionCategory::Window => "Window",
        }
    }
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub label: &'static str,
    pub category: ActionCategory,
    pub shortcut_display: Option<&'static str>,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 패널이 열려 있을 때만 유효한 키 바인딩
pub struct PanelBinding {
    pub panel: OpenPanel,
    pub binding: KeyBinding,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    // Navigation
    ActionDef {
        action: Action::MoveUp,
        id: "move_up",
        label: "Move up",
        category: ActionCategory::Navigation,
        shortcut_display: Some("j / k"),
        command_bar: Some(CommandBarEntry {
            key: "j/k",
            label: "Up/Dn",
            priority: 50,
        }),
    },
    ActionDef {
        action: Action::MoveDown,
        id: "move_down",
        label: "Move down",
        category: ActionCategory::Navigation,
        shortcut_display: None,
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToTop,
        id: "go_top",
        label: "Top",
        category: ActionCategory::Navigation,
        shortcut_display: Some("g / Home"),
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToBottom,
        id: "go_bottom",
        label: "Bottom",
        category: ActionCategory::Navigation,
        shortcut_display: Some("G / End"),
        command_bar: None,
    },
    ActionDef {
        action: Action::PageUp,
        id: "page_up",
        label: "Page up",
        category: ActionCategory::Navigation,
        shortcut_display: Some("PgUp / PgDn"),
        command_bar: None,
    },
    ActionDef {
        action: Action::PageDown,
        id: "page_down",
        label: "Page down",
        category: ActionCategory::Navigation,
        shortcut_display: None,
        command_bar: None,
    },
    ActionDef {
        action: Action::ToggleSelection,
        id: "toggle_selection",
        label: "Select file",
        category: ActionCategory::Navigation,
        shortcut_display: Some("Space"),
        command_bar: Some(CommandBarEntry {
            key: "Spc",
            label: "Select",
            priority: 40,
        }),
    },
    // Panels
    ActionDef {
        action: Action::ToggleFileSearch,
        id: "panel_open",
        label: "Open folder panel",
        category: ActionCategory::Panel,
        shortcut_display: Some("o"),
        command_bar: Some(CommandBarEntry {
            key: "o",
            label: "Open",
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::ToggleFilters,
        id: "panel_filters",
        label: "Filters panel",
        category: ActionCategory::Panel,
        shortcut_display: Some("f"),
        command_bar: Some(CommandBarEntry {
            key: "f",
            label: "Filter",
            priority: 11,
        }),
    },
    ActionDef {
        action: Action::ToggleManageFiles,
        id: "panel_manage",
        label: "Manage files panel",
        category: ActionCategory::Panel,
        shortcut_display: Some("m"),
        command_bar: Some(CommandBarEntry {
            key: "m",
            label: "Manage",
            priority: 12,
        }),
    },
    ActionDef {
        action: Action::ClosePanel,
        id: "panel_close",
        label: "Close panel",
        category: ActionCategory::Panel,
        shortcut_display: Some("Esc"),
        command_bar: None,
    },
    ActionDef {
        action: Action::OpenDirectory,
        id: "open_directory",
        label: "Choose folder",
        category: ActionCategory::Panel,
        shortcut_display: Some("^O"),
        command_bar: Some(CommandBarEntry {
            key: "^O",
            label: "Folder",
            priority: 13,
        }),
    },
    // File Operations
    ActionDef {
        action: Action::MoveFiles,
        id: "move_files",
        label: "Move to folder",
        category: ActionCategory::FileOperation,
        shortcut_display: Some("m v"),
        command_bar: None,
    },
    ActionDef {
        action: Action::CopyFiles,
        id: "copy_files",
        label: "Copy to folder",
        category: ActionCategory::FileOperation,
        shortcut_display: Some("m c"),
        command_bar: None,
    },
    ActionDef {
        action: Action::DeleteFiles,
        id: "delete_files",
        label: "Delete",
        category: ActionCategory::FileOperation,
        shortcut_display: Some("m x"),
        command_bar: None,
    },
    ActionDef {
        action: Action::RenameFiles,
        id: "rename_files",
        label: "Rename with numbers",
        category: ActionCategory::FileOperation,
        shortcut_display: Some("m r"),
        command_bar: None,
    },
    // Filters
    ActionDef {
        action: Action::ApplyFilters,
        id: "apply_filters",
        label: "Apply filters",
        category: ActionCategory::Filter,
        shortcut_display: Some("f Enter"),
        command_bar: None,
    },
    ActionDef {
        action: Action::ClearFilters,
        id: "clear_filters",
        label: "Clear filters",
        category: ActionCategory::Filter,
        shortcut_display: Some("f ^R"),
        command_bar: None,
    },
    // Window
    ActionDef {
        action: Action::Minimize,
        id: "minimize",
        label: "Minimize",
        category: ActionCategory::Window,
        shortcut_display: Some("-"),
        command_bar: None,
    },
    ActionDef {
        action: Action::Restore,
        id: "restore",
        label: "Maximize / restore",
        category: ActionCategory::Window,
        shortcut_display: Some("="),
        command_bar: None,
    },
    ActionDef {
        action: Action::Close,
        id: "close",
        label: "Close",
        category: ActionCategory::Window,
        shortcut_display: Some("q / ^C"),
        command_bar: Some(CommandBarEntry {
            key: "q",
            label: "Quit",
            priority: 90,
        }),
    },
    ActionDef {
        action: Action::ToggleTheme,
        id: "toggle_theme",
        label: "Switch theme",
        category: ActionCategory::Window,
        shortcut_display: Some("t"),
        command_bar: None,
    },
    ActionDef {
        action: Action::ShowHelp,
        id: "help",
        label: "Help",
        category: ActionCategory::Window,
        shortcut_display: Some("?"),
        command_bar: Some(CommandBarEntry {
            key: "?",
            label: "Help",
            priority: 80,
        }),
    },
];

fn key(code: KeyCode, modifiers: Option<KeyModifiers>, action: Action) -> KeyBinding {
    KeyBinding {
        code,
        modifiers,
        action,
    }
}

fn plain(c: char, action: Action) -> KeyBinding {
    key(KeyCode::Char(c), Some(KeyModifiers::NONE), action)
}

fn ctrl(c: char, action: Action) -> KeyBinding {
    key(KeyCode::Char(c), Some(KeyModifiers::CONTROL), action)
}

fn build_key_bindings() -> Vec<KeyBinding> {
    vec![
        // 종료
        plain('q', Action::Close),
        ctrl('c', Action::Close),
        // 창
        plain('-', Action::Minimize),
        plain('=', Action::Restore),
        // 패널
        plain('o', Action::ToggleFileSearch),
        plain('f', Action::ToggleFilters),
        plain('m', Action::ToggleManageFiles),
        key(KeyCode::Esc, None, Action::ClosePanel),
        ctrl('o', Action::OpenDirectory),
        // 탐색
        plain('j', Action::MoveDown),
        key(KeyCode::Down, None, Action::MoveDown),
        plain('k', Action::MoveUp),
        key(KeyCode::Up, None, Action::MoveUp),
        plain('g', Action::GoToTop),
        key(KeyCode::Home, None, Action::GoToTop),
        key(KeyCode::Char('G'), Some(KeyModifiers::SHIFT), Action::GoToBottom),
        plain('G', Action::GoToBottom),
        key(KeyCode::End, None, Action::GoToBottom),
        key(KeyCode::PageUp, None, Action::PageUp),
        key(KeyCode::PageDown, None, Action::PageDown),
        // 선택
        plain(' ', Action::ToggleSelection),
        // 시스템
        plain('t', Action::ToggleTheme),
        key(KeyCode::Char('?'), None, Action::ShowHelp),
    ]
}

fn build_panel_bindings() -> Vec<PanelBinding> {
    let manage = |c: char, action: Action| PanelBinding {
        panel: OpenPanel::ManageFiles,
        binding: plain(c, action),
    };
    vec![
        PanelBinding {
            panel: OpenPanel::FileSearch,
            binding: key(KeyCode::Enter, None, Action::OpenDirectory),
        },
        manage('v', Action::MoveFiles),
        manage('c', Action::CopyFiles),
        manage('x', Action::DeleteFiles),
        manage('r', Action::RenameFiles),
        PanelBinding {
            panel: OpenPanel::Filters,
            binding: key(KeyCode::Enter, None, Action::ApplyFilters),
        },
        PanelBinding {
            panel: OpenPanel::Filters,
            binding: ctrl('r', Action::ClearFilters),
        },
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);
static PANEL_BINDINGS: LazyLock<Vec<PanelBinding>> = LazyLock::new(build_panel_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

fn binding_matches(binding: &KeyBinding, modifiers: KeyModifiers, code: KeyCode) -> bool {
    let mod_matches = match binding.modifiers {
        None => true,
        Some(required) => modifiers == required,
    };
    binding.code == code && mod_matches
}

/// 전역 키 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| binding_matches(binding, modifiers, code))
        .map(|binding| binding.action)
}

/// 열린 패널 전용 키 조회 (전역 키보다 먼저 확인)
pub fn find_panel_action(panel: OpenPanel, modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    PANEL_BINDINGS
        .iter()
        .filter(|pb| pb.panel == panel)
        .find(|pb| binding_matches(&pb.binding, modifiers, code))
        .map(|pb| pb.binding.action)
}

impl Action {
    /// 로그에 남기는 액션 식별자
    pub fn id(&self) -> &'static str {
        ACTION_DEFS
            .iter()
            .find(|d| d.action == *self)
            .map(|d| d.id)
            .unwrap_or("unknown")
    }
}

/// 커맨드바용 항목 생성 (priority 순 정렬)
pub fn generate_command_bar_items() -> Vec<CommandItem> {
    let mut entries: Vec<&CommandBarEntry> = ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref())
        .collect();

    entries.sort_by_key(|cb| cb.priority);

    entries
        .into_iter()
        .map(|cb| CommandItem::new(cb.key, cb.label))
        .collect()
}

/// 열린 패널의 커맨드바 항목
pub fn panel_command_items(panel: OpenPanel) -> Vec<CommandItem> {
    match panel {
        OpenPanel::None => generate_command_bar_items(),
        OpenPanel::FileSearch => vec![
            CommandItem::new("Enter", "Choose folder"),
            CommandItem::new("Esc", "Close"),
        ],
        OpenPanel::Filters => vec![
            CommandItem::new("Tab", "Field"),
            CommandItem::new("←/→", "Unit"),
            CommandItem::new("Enter", "Apply"),
            CommandItem::new("^R", "Clear"),
            CommandItem::new("Esc", "Close"),
        ],
        OpenPanel::ManageFiles => vec![
            CommandItem::new("v", "Move"),
            CommandItem::new("c", "Copy"),
            CommandItem::new("x", "Delete"),
            CommandItem::new("r", "Rename"),
            CommandItem::new("Spc", "Select"),
            CommandItem::new("Esc", "Close"),
        ],
    }
}

/// 도움말 다이얼로그용 엔트리 생성
///
/// 반환: (카테고리명, Vec<(단축키, 설명)>) 목록
pub fn generate_help_entries() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    let categories = [
        ActionCategory::Navigation,
        ActionCategory::Panel,
        ActionCategory::FileOperation,
        ActionCategory::Filter,
        ActionCategory::Window,
    ];

    categories
        .iter()
        .map(|cat| {
            let items: Vec<(&'static str, &'static str)> = ACTION_DEFS
                .iter()
                .filter(|d| d.category == *cat)
                .filter_map(|d| d.shortcut_display.map(|shortcut| (shortcut, d.label)))
                .collect();
            (cat.title(), items)
        })
        .filter(|(_, items)| !items.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_ids() {
        assert_eq!(Action::ToggleFilters.id(), "panel_filters");
        assert_eq!(Action::Close.id(), "close");
        assert_eq!(Action::MoveDown.id(), "move_down");
    }

    #[test]
    fn test_panel_keys() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('o')),
            Some(Action::ToggleFileSearch)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('f')),
            Some(Action::ToggleFilters)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('m')),
            Some(Action::ToggleManageFiles)
        );
        assert_eq!(
            find_action(KeyModifiers::CONTROL, KeyCode::Char('o')),
            Some(Action::OpenDirectory)
        );
    }

    #[test]
    fn test_window_keys() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('-')),
            Some(Action::Minimize)
        );
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Char('=')),
            Some(Action::Restore)
        );
        assert_eq!(
            find_action(KeyModifiers::CONTROL, KeyCode::Char('c')),
            Some(Action::Close)
        );
    }

    #[test]
    fn test_navigation_any_modifier() {
        assert_eq!(
            find_action(KeyModifiers::NONE, KeyCode::Down),
            Some(Action::MoveDown)
        );
        assert_eq!(
            find_action(KeyModifiers::SHIFT, KeyCode::Up),
            Some(Action::MoveUp)
        );
        assert_eq!(
            find_action(KeyModifiers::SHIFT, KeyCode::Char('G')),
            Some(Action::GoToBottom)
        );
    }

    #[test]
    fn test_manage_keys_only_in_manage_panel() {
        assert_eq!(
            find_panel_action(OpenPanel::ManageFiles, KeyModifiers::NONE, KeyCode::Char('x')),
            Some(Action::DeleteFiles)
        );
        assert_eq!(
            find_panel_action(OpenPanel::None, KeyModifiers::NONE, KeyCode::Char('x')),
            None
        );
        assert_eq!(find_action(KeyModifiers::NONE, KeyCode::Char('x')), None);
    }

    #[test]
    fn test_enter_depends_on_panel() {
        assert_eq!(
            find_panel_action(OpenPanel::FileSearch, KeyModifiers::NONE, KeyCode::Enter),
            Some(Action::OpenDirectory)
        );
        assert_eq!(
            find_panel_action(OpenPanel::Filters, KeyModifiers::NONE, KeyCode::Enter),
            Some(Action::ApplyFilters)
        );
        assert_eq!(
            find_panel_action(OpenPanel::Filters, KeyModifiers::CONTROL, KeyCode::Char('r')),
            Some(Action::ClearFilters)
        );
    }

    #[test]
    fn test_generate_command_bar_items() {
        let items = generate_command_bar_items();
        assert_eq!(items[0].key, "o");
        assert_eq!(items.last().map(|i| i.label.as_str()), Some("Quit"));
    }

    #[test]
    fn test_generate_help_entries() {
        let entries = generate_help_entries();
        assert_eq!(entries[0].0, "Navigation");
        let file_ops = entries
            .iter()
            .find(|(category, _)| *category == "File Operations")
            .map(|(_, items)| items)
            .expect("file operations section should exist");
        assert!(file_ops.iter().any(|(k, _)| *k == "m x"));
    }
}
