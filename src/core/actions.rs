//! 액션 시스템
//!
//! 키 바인딩, 커맨드바 항목, 도움말 내용이 모두 이 모듈의 레지스트리를 참조합니다.

use crate::ui::components::command_bar::CommandItem;
use crate::ui::FocusPane;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,
    OpenSelected,
    GoToParent,
    Refresh,
    // File Operations
    NewEntry,
    Rename,
    Delete,
    Save,
    // Editor
    FocusEditor,
    FocusList,
    // System
    ShowHelp,
    Quit,
}

/// 액션 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    FileOperation,
    Editor,
    System,
}

impl ActionCategory {
    fn title(self) -> &'static str {
        match self {
            ActionCategory::Navigation => "Navigation",
            ActionCategory::FileOperation => "File Operations",
            ActionCategory::Editor => "Editor",
            ActionCategory::System => "System",
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

/// 키 바인딩이 유효한 범위
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyScope {
    /// 목록 포커스에서만
    List,
    /// 에디터 포커스에서만
    Editor,
    /// 어디서나
    Global,
}

impl KeyScope {
    fn applies_to(self, focus: FocusPane) -> bool {
        match self {
            KeyScope::Global => true,
            KeyScope::List => focus == FocusPane::List,
            KeyScope::Editor => focus == FocusPane::Editor,
        }
    }
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub scope: KeyScope,
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    // Navigation
    ActionDef {
        action: Action::MoveUp,
        id: "move_up",
        label: "Move cursor up / down",
        category: ActionCategory::Navigation,
        shortcut_display: Some("j / k"),
        command_bar: Some(CommandBarEntry {
            key: "j/k",
            label: "Move",
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
        action: Action::PageUp,
        id: "page_up",
        label: "Page up / down",
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
        action: Action::GoToTop,
        id: "go_top",
        label: "First / last entry",
        category: ActionCategory::Navigation,
        shortcut_display: Some("Home / End"),
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToBottom,
        id: "go_bottom",
        label: "Last entry",
        category: ActionCategory::Navigation,
        shortcut_display: None,
        command_bar: None,
    },
    ActionDef {
        action: Action::OpenSelected,
        id: "open",
        label: "Open directory or file",
        category: ActionCategory::Navigation,
        shortcut_display: Some("Enter / l"),
        command_bar: Some(CommandBarEntry {
            key: "Enter",
            label: "Open",
            priority: 51,
        }),
    },
    ActionDef {
        action: Action::GoToParent,
        id: "go_parent",
        label: "Parent directory",
        category: ActionCategory::Navigation,
        shortcut_display: Some("Bksp / h"),
        command_bar: Some(CommandBarEntry {
            key: "Bksp",
            label: "Up",
            priority: 52,
        }),
    },
    ActionDef {
        action: Action::Refresh,
        id: "refresh",
        label: "Refresh listing",
        category: ActionCategory::Navigation,
        shortcut_display: Some("F5 / ^R"),
        command_bar: None,
    },
    // File Operations
    ActionDef {
        action: Action::NewEntry,
        id: "new",
        label: "New file (name/ for folder)",
        category: ActionCategory::FileOperation,
        shortcut_display: Some("n"),
        command_bar: Some(CommandBarEntry {
            key: "n",
            label: "New",
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::Rename,
        id: "rename",
        label: "Rename entry",
        category: ActionCategory::FileOperation,
        shortcut_display: Some("r"),
        command_bar: Some(CommandBarEntry {
            key: "r",
            label: "Rename",
            priority: 11,
        }),
    },
    ActionDef {
        action: Action::Delete,
        id: "delete",
        label: "Delete entry",
        category: ActionCategory::FileOperation,
        shortcut_display: Some("d / Del"),
        command_bar: Some(CommandBarEntry {
            key: "d",
            label: "Delete",
            priority: 12,
        }),
    },
    ActionDef {
        action: Action::Save,
        id: "save",
        label: "Save open file",
        category: ActionCategory::FileOperation,
        shortcut_display: Some("^S"),
        command_bar: Some(CommandBarEntry {
            key: "^S",
            label: "Save",
            priority: 13,
        }),
    },
    // Editor
    ActionDef {
        action: Action::FocusEditor,
        id: "focus_editor",
        label: "Focus editor",
        category: ActionCategory::Editor,
        shortcut_display: Some("Tab"),
        command_bar: Some(CommandBarEntry {
            key: "Tab",
            label: "Edit",
            priority: 60,
        }),
    },
    ActionDef {
        action: Action::FocusList,
        id: "focus_list",
        label: "Back to list",
        category: ActionCategory::Editor,
        shortcut_display: Some("Esc"),
        command_bar: None,
    },
    // System
    ActionDef {
        action: Action::ShowHelp,
        id: "help",
        label: "Keyboard shortcuts",
        category: ActionCategory::System,
        shortcut_display: Some("? / F1"),
        command_bar: Some(CommandBarEntry {
            key: "?",
            label: "Help",
            priority: 90,
        }),
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        label: "Quit",
        category: ActionCategory::System,
        shortcut_display: Some("q / F10 / ^C"),
        command_bar: Some(CommandBarEntry {
            key: "q",
            label: "Quit",
            priority: 91,
        }),
    },
];

fn bind(code: KeyCode, modifiers: Option<KeyModifiers>, scope: KeyScope, action: Action) -> KeyBinding {
    KeyBinding {
        code,
        modifiers,
        scope,
        action,
    }
}

fn build_key_bindings() -> Vec<KeyBinding> {
    use KeyScope::{Editor, Global, List};
    let none = Some(KeyModifiers::NONE);
    let ctrl = Some(KeyModifiers::CONTROL);

    vec![
        // 어디서나
        bind(KeyCode::Char('s'), ctrl, Global, Action::Save),
        bind(KeyCode::Char('c'), ctrl, Global, Action::Quit),
        bind(KeyCode::F(10), None, Global, Action::Quit),
        bind(KeyCode::F(1), None, Global, Action::ShowHelp),
        // 에디터
        bind(KeyCode::Esc, None, Editor, Action::FocusList),
        // 종료/도움말
        bind(KeyCode::Char('q'), none, List, Action::Quit),
        bind(KeyCode::Char('?'), None, List, Action::ShowHelp),
        // 탐색: Vim
        bind(KeyCode::Char('j'), none, List, Action::MoveDown),
        bind(KeyCode::Char('k'), none, List, Action::MoveUp),
        bind(KeyCode::Char('l'), none, List, Action::OpenSelected),
        bind(KeyCode::Char('h'), none, List, Action::GoToParent),
        // 탐색: 화살표
        bind(KeyCode::Down, None, List, Action::MoveDown),
        bind(KeyCode::Up, None, List, Action::MoveUp),
        bind(KeyCode::Right, None, List, Action::OpenSelected),
        bind(KeyCode::Left, None, List, Action::GoToParent),
        bind(KeyCode::Enter, None, List, Action::OpenSelected),
        bind(KeyCode::Backspace, None, List, Action::GoToParent),
        bind(KeyCode::PageUp, None, List, Action::PageUp),
        bind(KeyCode::PageDown, None, List, Action::PageDown),
        bind(KeyCode::Home, None, List, Action::GoToTop),
        bind(KeyCode::End, None, List, Action::GoToBottom),
        bind(KeyCode::F(5), None, List, Action::Refresh),
        bind(KeyCode::Char('r'), ctrl, List, Action::Refresh),
        // 파일 작업
        bind(KeyCode::Char('n'), none, List, Action::NewEntry),
        bind(KeyCode::Char('r'), none, List, Action::Rename),
        bind(KeyCode::Char('d'), none, List, Action::Delete),
        bind(KeyCode::Delete, None, List, Action::Delete),
        // 포커스
        bind(KeyCode::Tab, None, List, Action::FocusEditor),
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 현재 포커스에서 키 입력으로 액션 조회
pub fn find_action(focus: FocusPane, modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            let mod_matches = match binding.modifiers {
                None => true,
                Some(required) => modifiers == required,
            };
            binding.code == code && mod_matches && binding.scope.applies_to(focus)
        })
        .map(|binding| binding.action)
}

impl Action {
    /// 액션 id (로그 표기용)
    pub fn id(self) -> &'static str {
        ACTION_DEFS
            .iter()
            .find(|d| d.action == self)
            .map_or("unknown", |d| d.id)
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

/// 도움말 다이얼로그용 엔트리 생성
///
/// 반환: (카테고리명, Vec<(단축키, 설명)>) 목록
pub fn generate_help_entries() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    [
        ActionCategory::Navigation,
        ActionCategory::FileOperation,
        ActionCategory::Editor,
        ActionCategory::System,
    ]
    .into_iter()
    .map(|category| {
        let items: Vec<(&'static str, &'static str)> = ACTION_DEFS
            .iter()
            .filter(|d| d.category == category)
            .filter_map(|d| d.shortcut_display.map(|shortcut| (shortcut, d.label)))
            .collect();
        (category.title(), items)
    })
    .filter(|(_, items)| !items.is_empty())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_id() {
        assert_eq!(Action::NewEntry.id(), "new");
        assert_eq!(Action::Save.id(), "save");
        assert_eq!(Action::GoToParent.id(), "go_parent");
    }

    #[test]
    fn test_find_action_list_keys() {
        let list = FocusPane::List;
        assert_eq!(
            find_action(list, KeyModifiers::NONE, KeyCode::Char('j')),
            Some(Action::MoveDown)
        );
        assert_eq!(
            find_action(list, KeyModifiers::NONE, KeyCode::Up),
            Some(Action::MoveUp)
        );
        assert_eq!(
            find_action(list, KeyModifiers::NONE, KeyCode::Enter),
            Some(Action::OpenSelected)
        );
        assert_eq!(
            find_action(list, KeyModifiers::NONE, KeyCode::Backspace),
            Some(Action::GoToParent)
        );
        assert_eq!(
            find_action(list, KeyModifiers::NONE, KeyCode::Char('n')),
            Some(Action::NewEntry)
        );
        assert_eq!(
            find_action(list, KeyModifiers::NONE, KeyCode::Char('r')),
            Some(Action::Rename)
        );
        assert_eq!(
            find_action(list, KeyModifiers::CONTROL, KeyCode::Char('r')),
            Some(Action::Refresh)
        );
        assert_eq!(
            find_action(list, KeyModifiers::NONE, KeyCode::Delete),
            Some(Action::Delete)
        );
        assert_eq!(
            find_action(list, KeyModifiers::NONE, KeyCode::Tab),
            Some(Action::FocusEditor)
        );
    }

    #[test]
    fn test_editor_focus_only_sees_global_and_editor_keys() {
        let editor = FocusPane::Editor;
        // 에디터에서 일반 문자는 텍스트 입력
        assert_eq!(find_action(editor, KeyModifiers::NONE, KeyCode::Char('q')), None);
        assert_eq!(find_action(editor, KeyModifiers::NONE, KeyCode::Char('j')), None);
        assert_eq!(find_action(editor, KeyModifiers::NONE, KeyCode::Tab), None);

        assert_eq!(
            find_action(editor, KeyModifiers::CONTROL, KeyCode::Char('s')),
            Some(Action::Save)
        );
        assert_eq!(
            find_action(editor, KeyModifiers::NONE, KeyCode::Esc),
            Some(Action::FocusList)
        );
        assert_eq!(
            find_action(editor, KeyModifiers::NONE, KeyCode::F(10)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_question_mark_with_shift() {
        assert_eq!(
            find_action(FocusPane::List, KeyModifiers::SHIFT, KeyCode::Char('?')),
            Some(Action::ShowHelp)
        );
    }

    #[test]
    fn test_generate_command_bar_items() {
        let items = generate_command_bar_items();
        assert_eq!(items.first().map(|i| i.key.as_str()), Some("n"));
        assert_eq!(items.last().map(|i| i.key.as_str()), Some("q"));
        assert_eq!(items.len(), 10);
    }

    #[test]
    fn test_generate_help_entries() {
        let entries = generate_help_entries();
        let titles: Vec<&str> = entries.iter().map(|(t, _)| *t).collect();
        assert_eq!(
            titles,
            vec!["Navigation", "File Operations", "Editor", "System"]
        );
        assert!(entries[1].1.contains(&("^S", "Save open file")));
    }
}
