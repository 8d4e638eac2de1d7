use super::*;
use crate::ui::components::dialog::help_max_scroll;

impl App {
    /// 액션 실행
    pub fn execute_action(&mut self, action: Action) {
        debug!(action = action.id(), "execute");
        match action {
            Action::Quit => self.quit(),
            Action::MoveDown => self.move_selection_down(),
            Action::MoveUp => self.move_selection_up(),
            Action::PageUp => self.move_selection_page_up(),
            Action::PageDown => self.move_selection_page_down(),
            Action::GoToTop => self.go_to_top(),
            Action::GoToBottom => self.go_to_bottom(),
            Action::OpenSelected => self.activate_selected(),
            Action::GoToParent => self.go_up(),
            Action::Refresh => self.refresh_listing(),
            Action::NewEntry => self.start_create(),
            Action::Rename => self.start_rename(),
            Action::Delete => self.start_delete(),
            Action::Save => self.save(),
            Action::FocusEditor => self.focus_editor(),
            Action::FocusList => self.layout.set_focus(FocusPane::List),
            Action::ShowHelp => self.dialog = Some(DialogKind::help()),
        }
    }

    // === 커서 이동 ===

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
        self.adjust_scroll_offset();
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.entries.len() {
            self.selected_index += 1;
        }
        self.adjust_scroll_offset();
    }

    pub fn move_selection_page_up(&mut self) {
        let page = self.layout.list_visible_rows().max(1);
        self.selected_index = self.selected_index.saturating_sub(page);
        self.adjust_scroll_offset();
    }

    pub fn move_selection_page_down(&mut self) {
        let page = self.layout.list_visible_rows().max(1);
        let last = self.entries.len().saturating_sub(1);
        self.selected_index = (self.selected_index + page).min(last);
        self.adjust_scroll_offset();
    }

    pub fn go_to_top(&mut self) {
        self.selected_index = 0;
        self.adjust_scroll_offset();
    }

    pub fn go_to_bottom(&mut self) {
        self.selected_index = self.entries.len().saturating_sub(1);
        self.adjust_scroll_offset();
    }

    /// 커서가 보이도록 스크롤 오프셋 조정
    pub(super) fn adjust_scroll_offset(&mut self) {
        let visible = self.layout.list_visible_rows().max(1);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible {
            self.scroll_offset = self.selected_index + 1 - visible;
        }

        let max_scroll = self.entries.len().saturating_sub(visible);
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    /// 이름으로 커서 이동 (없으면 false)
    pub(super) fn focus_entry_by_name(&mut self, name: impl AsRef<OsStr>) -> bool {
        let name = name.as_ref();
        match self.entries.iter().position(|e| e.file_name.as_os_str() == name) {
            Some(index) => {
                self.selected_index = index;
                self.adjust_scroll_offset();
                true
            }
            None => false,
        }
    }

    // === 디렉토리 탐색 ===

    /// 현재 디렉토리 다시 읽기
    pub fn refresh_listing(&mut self) {
        if self.confirm_discard_if_dirty(Action::Refresh) {
            return;
        }
        self.reload_entries();
        self.close_editor();
    }

    /// 목록만 다시 읽고 커서를 범위 안으로 유지
    pub(super) fn reload_entries(&mut self) {
        match self.session.list(&self.filesystem) {
            Ok(entries) => self.replace_entries(entries),
            Err(e) => {
                warn!(dir = %self.current_dir().display(), error = %e, "listing failed");
                self.dialog = Some(DialogKind::error(
                    "Navigation Error",
                    Self::format_user_error(
                        "List directory",
                        Some(self.session.current_dir()),
                        &e.to_string(),
                        "Check that the directory still exists and is readable.",
                    ),
                ));
            }
        }
    }

    fn replace_entries(&mut self, entries: Vec<DirectoryEntry>) {
        self.entries = entries;
        if self.selected_index >= self.entries.len() {
            self.selected_index = self.entries.len().saturating_sub(1);
        }
        self.adjust_scroll_offset();
    }

    /// 커서 위치 엔트리 열기 (디렉토리 진입 또는 파일 읽기)
    pub fn activate_selected(&mut self) {
        let Some(entry) = self.selected_entry().cloned() else {
            return;
        };

        if entry.is_directory {
            if self.confirm_discard_if_dirty(Action::OpenSelected) {
                return;
            }
            self.enter_directory(&entry.file_name);
        } else {
            // 수정 중인 같은 파일이면 다시 읽지 않고 에디터로
            let path = self.session.path_of(&entry.file_name);
            if self
                .editor
                .as_ref()
                .is_some_and(|b| b.is_dirty() && b.path() == path.as_path())
            {
                self.layout.set_focus(FocusPane::Editor);
                return;
            }
            if self.confirm_discard_if_dirty(Action::OpenSelected) {
                return;
            }
            self.open_file(&entry.file_name);
        }
    }

    fn enter_directory(&mut self, name: &OsStr) {
        match self.session.enter(name, &self.filesystem) {
            Ok(entries) => {
                self.selected_index = 0;
                self.scroll_offset = 0;
                self.replace_entries(entries);
                self.close_editor();
                self.file_status = STATUS_DIRECTORY_VIEW.to_string();
            }
            Err(e) => {
                warn!(name = ?name, error = %e, "enter directory failed");
                self.dialog = Some(DialogKind::error(
                    "Navigation Error",
                    Self::format_user_error(
                        "Open directory",
                        Some(&self.session.path_of(name)),
                        &e.to_string(),
                        "You may not have permission to read this directory.",
                    ),
                ));
            }
        }
    }

    /// 파일을 읽어 에디터에 표시
    pub(super) fn open_file(&mut self, name: impl AsRef<OsStr>) {
        let path = self.session.path_of(name);
        match self.filesystem.read_file(&path) {
            Ok((bytes, metadata)) => {
                let buffer = EditorBuffer::from_bytes(path, bytes, metadata);
                let read_only = buffer.is_read_only();
                self.editor = Some(buffer);
                self.update_file_status();
                if read_only {
                    self.show_message(
                        "Read-Only",
                        "File is not valid UTF-8. It is shown with replacement characters and cannot be saved.",
                    );
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "read failed");
                self.editor = None;
                self.layout.set_focus(FocusPane::List);
                self.file_status = STATUS_READ_FAILED.to_string();
                self.dialog = Some(DialogKind::error(
                    "File Read Error",
                    Self::format_user_error("Read", Some(&path), &e.to_string(), ""),
                ));
            }
        }
    }

    /// 상위 디렉토리로 이동 (루트에서는 무시)
    pub fn go_up(&mut self) {
        if self.session.is_root() {
            return;
        }
        if self.confirm_discard_if_dirty(Action::GoToParent) {
            return;
        }

        let previous = self.current_dir().file_name().map(OsStr::to_os_string);

        match self.session.up(&self.filesystem) {
            Ok(Some(entries)) => {
                self.selected_index = 0;
                self.scroll_offset = 0;
                self.replace_entries(entries);
                // 방금 나온 디렉토리에 커서
                if let Some(name) = previous {
                    self.focus_entry_by_name(&name);
                }
                self.close_editor();
                self.file_status = STATUS_DIRECTORY_VIEW.to_string();
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "go up failed");
                self.dialog = Some(DialogKind::error(
                    "Navigation Error",
                    Self::format_user_error(
                        "Open parent directory",
                        e.path(),
                        &e.to_string(),
                        "",
                    ),
                ));
            }
        }
    }

    // === 포커스 / 에디터 ===

    /// 에디터로 포커스 이동 (열린 파일이 있을 때만)
    pub fn focus_editor(&mut self) {
        if self.editor.is_some() {
            self.layout.set_focus(FocusPane::Editor);
        } else {
            self.set_toast("Open a file first.", StatusKind::Info);
        }
    }

    pub(super) fn close_editor(&mut self) {
        self.editor = None;
        self.layout.set_focus(FocusPane::List);
        self.update_file_status();
    }

    /// 에디터 편집 명령 실행 (보이는 줄 수에 맞춰 스크롤)
    pub fn edit_with(&mut self, f: impl FnOnce(&mut EditorBuffer, usize)) {
        let height = self.layout.editor_visible_rows();
        if let Some(buffer) = self.editor.as_mut() {
            f(buffer, height);
            buffer.ensure_visible(height);
        }
    }

    // === 메시지 ===

    pub fn show_message(&mut self, title: &str, message: &str) {
        self.dialog = Some(DialogKind::message(title, message));
    }

    pub(super) fn format_user_error(
        action: &str,
        path: Option<&Path>,
        error: &str,
        hint: &str,
    ) -> String {
        let mut message = format!("{} failed.", action);
        if let Some(p) = path {
            message.push_str(&format!("\nPath: {}", p.display()));
        }
        message.push_str(&format!("\nReason: {}", error));
        if !hint.is_empty() {
            message.push_str(&format!("\nHint: {}", hint));
        }
        message
    }

    // === 도움말 ===

    /// 도움말 스크롤 아래로
    pub fn dialog_help_scroll_down(&mut self) {
        let max_scroll = help_max_scroll(self.layout.terminal_size().1);
        if let Some(DialogKind::Help { scroll_offset }) = &mut self.dialog {
            *scroll_offset = (*scroll_offset + 1).min(max_scroll);
        }
    }

    /// 도움말 스크롤 위로
    pub fn dialog_help_scroll_up(&mut self) {
        if let Some(DialogKind::Help { scroll_offset }) = &mut self.dialog {
            *scroll_offset = scroll_offset.saturating_sub(1);
        }
    }
}
