use super::text_edit::LineEdit;
use super::*;

impl App {
    // === 입력 다이얼로그 ===

    /// 입력 다이얼로그: 문자 입력
    pub fn dialog_input_char(&mut self, c: char) {
        if let Some(DialogKind::Input {
            value, cursor_pos, ..
        }) = &mut self.dialog
        {
            LineEdit::insert_char(value, cursor_pos, c);
        }
    }

    /// 입력 다이얼로그: 백스페이스
    pub fn dialog_input_backspace(&mut self) {
        if let Some(DialogKind::Input {
            value, cursor_pos, ..
        }) = &mut self.dialog
        {
            LineEdit::backspace(value, cursor_pos);
        }
    }

    /// 입력 다이얼로그: 이전 단어 삭제 (Ctrl+W)
    pub fn dialog_input_delete_prev_word(&mut self) {
        if let Some(DialogKind::Input {
            value, cursor_pos, ..
        }) = &mut self.dialog
        {
            LineEdit::delete_prev_word(value, cursor_pos);
        }
    }

    /// 입력 다이얼로그: Delete
    pub fn dialog_input_delete(&mut self) {
        if let Some(DialogKind::Input {
            value, cursor_pos, ..
        }) = &mut self.dialog
        {
            LineEdit::delete(value, *cursor_pos);
        }
    }

    /// 입력 다이얼로그: 커서 왼쪽
    pub fn dialog_input_left(&mut self) {
        if let Some(DialogKind::Input {
            value, cursor_pos, ..
        }) = &mut self.dialog
        {
            LineEdit::left(value, cursor_pos);
        }
    }

    /// 입력 다이얼로그: 커서 오른쪽
    pub fn dialog_input_right(&mut self) {
        if let Some(DialogKind::Input {
            value, cursor_pos, ..
        }) = &mut self.dialog
        {
            LineEdit::right(value, cursor_pos);
        }
    }

    /// 입력 다이얼로그: Home
    pub fn dialog_input_home(&mut self) {
        if let Some(DialogKind::Input { cursor_pos, .. }) = &mut self.dialog {
            *cursor_pos = 0;
        }
    }

    /// 입력 다이얼로그: End
    pub fn dialog_input_end(&mut self) {
        if let Some(DialogKind::Input {
            value, cursor_pos, ..
        }) = &mut self.dialog
        {
            *cursor_pos = value.len();
        }
    }

    /// 입력/확인 다이얼로그: 버튼 선택 변경 (Tab)
    pub fn dialog_toggle_button(&mut self) {
        if let Some(
            DialogKind::Input {
                selected_button, ..
            }
            | DialogKind::Confirm {
                selected_button, ..
            },
        ) = &mut self.dialog
        {
            *selected_button = if *selected_button == 0 { 1 } else { 0 };
        }
    }

    /// 입력/확인 다이얼로그: 선택된 버튼 반환
    pub fn get_dialog_selected_button(&self) -> Option<usize> {
        match &self.dialog {
            Some(DialogKind::Input {
                selected_button, ..
            })
            | Some(DialogKind::Confirm {
                selected_button, ..
            }) => Some(*selected_button),
            _ => None,
        }
    }

    /// 입력 다이얼로그 확정 (OK)
    pub fn confirm_input_dialog(&mut self) {
        let Some(DialogKind::Input { value, purpose, .. }) = self.dialog.take() else {
            return;
        };

        match purpose {
            InputPurpose::Create => self.confirm_create(&value),
            InputPurpose::Rename { original } => self.confirm_rename(&original, &value),
        }
    }

    /// Enter: 선택된 버튼에 따라 확정 또는 취소
    pub fn dialog_submit(&mut self) {
        let accepted = self.get_dialog_selected_button() == Some(0);
        match &self.dialog {
            Some(DialogKind::Input { .. }) if accepted => self.confirm_input_dialog(),
            Some(DialogKind::Confirm { .. }) if accepted => self.accept_confirm_dialog(),
            Some(_) => self.close_dialog(),
            None => {}
        }
    }
}
