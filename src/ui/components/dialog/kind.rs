use crate::core::actions::Action;
use std::ffi::OsString;

/// 입력 다이얼로그 목적
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputPurpose {
    /// 새 파일/디렉토리 이름 입력
    Create,
    /// 이름 변경 (원래 이름 보관)
    Rename { original: OsString },
}

/// 확인 다이얼로그 목적
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmPurpose {
    /// 엔트리 삭제
    Delete { name: OsString },
    /// 저장하지 않은 변경을 버리고 이어서 실행할 액션
    DiscardChanges { resume: Action },
}

/// 다이얼로그 종류
#[derive(Debug, Clone)]
pub enum DialogKind {
    /// 입력 다이얼로그 (이름 입력)
    Input {
        title: String,
        prompt: String,
        value: String,
        cursor_pos: usize,
        selected_button: usize, // 0: OK, 1: Cancel
        purpose: InputPurpose,
    },
    /// 확인 다이얼로그 (Yes/No)
    Confirm {
        title: String,
        message: String,
        selected_button: usize, // 0: Yes, 1: No
        purpose: ConfirmPurpose,
    },
    /// 에러 다이얼로그
    Error { title: String, message: String },
    /// 메시지 다이얼로그 (정보 표시)
    Message { title: String, message: String },
    /// 단축키 도움말 다이얼로그
    Help { scroll_offset: usize },
}
