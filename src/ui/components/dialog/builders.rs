use super::{ConfirmPurpose, DialogKind, InputPurpose};
use crate::core::actions::Action;
use std::ffi::OsString;

impl DialogKind {
    /// 새 입력 다이얼로그 생성 (커서는 값 끝)
    pub fn input(
        title: impl Into<String>,
        prompt: impl Into<String>,
        initial: impl Into<String>,
        purpose: InputPurpose,
    ) -> Self {
        let value: String = initial.into();
        let cursor_pos = value.len();
        DialogKind::Input {
            title: title.into(),
            prompt: prompt.into(),
            value,
            cursor_pos,
            selected_button: 0, // OK 기본 선택
            purpose,
        }
    }

    /// 새 엔트리 이름 입력 다이얼로그
    pub fn create_input() -> Self {
        Self::input(
            "New",
            "Name (file, or folder ending with /)",
            "",
            InputPurpose::Create,
        )
    }

    /// 이름 변경 다이얼로그 (현재 이름으로 채움)
    pub fn rename_input(current_name: impl Into<OsString>) -> Self {
        let original: OsString = current_name.into();
        Self::input(
            "Rename",
            "New name",
            original.to_string_lossy().into_owned(),
            InputPurpose::Rename { original },
        )
    }

    /// 새 확인 다이얼로그 생성
    pub fn confirm(
        title: impl Into<String>,
        message: impl Into<String>,
        purpose: ConfirmPurpose,
    ) -> Self {
        DialogKind::Confirm {
            title: title.into(),
            message: message.into(),
            selected_button: 1, // 파괴적 작업이므로 No 기본 선택
            purpose,
        }
    }

    /// 삭제 확인 다이얼로그
    pub fn delete_confirm(name: impl Into<OsString>) -> Self {
        let name: OsString = name.into();
        Self::confirm(
            "Delete",
            format!(
                "Confirm deletion of \"{}\"? This cannot be undone.",
                name.to_string_lossy()
            ),
            ConfirmPurpose::Delete { name },
        )
    }

    /// 변경 사항 폐기 확인 다이얼로그
    pub fn discard_changes_confirm(file_name: &str, resume: Action) -> Self {
        Self::confirm(
            "Unsaved Changes",
            format!("\"{}\" has unsaved changes. Discard unsaved changes?", file_name),
            ConfirmPurpose::DiscardChanges { resume },
        )
    }

    /// 새 에러 다이얼로그 생성
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogKind::Error {
            title: title.into(),
            message: message.into(),
        }
    }

    /// 새 메시지 다이얼로그 생성
    pub fn message(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogKind::Message {
            title: title.into(),
            message: message.into(),
        }
    }

    /// 도움말 다이얼로그 생성
    pub fn help() -> Self {
        DialogKind::Help { scroll_offset: 0 }
    }
}
