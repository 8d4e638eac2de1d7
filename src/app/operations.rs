use super::*;
use crate::system::filesystem::is_directory_name;

impl App {
    /// 다이얼로그가 열려 있는지
    pub fn is_dialog_active(&self) -> bool {
        self.dialog.is_some()
    }

    /// 다이얼로그 닫기
    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    // === 생성 ===

    /// 새 파일/디렉토리 생성 시작 (n)
    pub fn start_create(&mut self) {
        self.dialog = Some(DialogKind::create_input());
    }

    /// 새 파일/디렉토리 생성 확인
    ///
    /// 이름이 `/`로 끝나면 디렉토리, 아니면 빈 파일을 만듭니다.
    pub fn confirm_create(&mut self, name: &str) {
        if name.trim().is_empty() {
            self.dialog = Some(DialogKind::error("Create Error", "Please enter a name."));
            return;
        }

        let dir = self.current_dir().to_path_buf();
        match self.filesystem.create_entry(&dir, name) {
            Ok(path) => {
                self.dialog = None;
                self.reload_entries();

                // "a/b/" 형태면 현재 목록에 보이는 건 첫 구성요소
                let shown = name
                    .trim_end_matches(['/', '\\'])
                    .split(['/', '\\'])
                    .next()
                    .unwrap_or_default()
                    .to_string();
                self.focus_entry_by_name(&shown);

                let message = if is_directory_name(name) {
                    "Directory created."
                } else {
                    "File created."
                };
                debug!(path = %path.display(), "create completed");
                self.set_toast(message, StatusKind::Success);
            }
            Err(DirpadError::AlreadyExists { path, .. }) => {
                debug!(path = %path.display(), "create target exists");
                self.dialog = Some(DialogKind::error(
                    "Create Error",
                    "File or directory already exists.",
                ));
            }
            Err(e) => {
                warn!(name, error = %e, "create failed");
                self.dialog = Some(DialogKind::error(
                    "Create Error",
                    Self::format_user_error(
                        "Create",
                        Some(&dir.join(name)),
                        &e.to_string(),
                        "Use a valid name and check write permission.",
                    ),
                ));
            }
        }
    }

    // === 이름 변경 ===

    /// 이름 변경 시작 (r)
    pub fn start_rename(&mut self) {
        match self.selected_entry() {
            Some(entry) => {
                self.dialog = Some(DialogKind::rename_input(entry.file_name.clone()));
            }
            None => {
                self.dialog = Some(DialogKind::error("Rename Error", "Please select an item."));
            }
        }
    }

    /// 이름 변경 확인 (현재 디렉토리 안에서만)
    pub fn confirm_rename(&mut self, original: impl AsRef<OsStr>, new_name: &str) {
        let original = original.as_ref();
        if new_name.trim().is_empty() {
            self.dialog = Some(DialogKind::error("Rename Error", "Please enter new name."));
            return;
        }
        if OsStr::new(new_name) == original {
            self.dialog = None;
            return;
        }
        if new_name.contains(['/', '\\']) {
            let e = DirpadError::InvalidName {
                name: new_name.to_string(),
            };
            self.dialog = Some(DialogKind::error(
                "Rename Error",
                format!("Rename failed: {}", e),
            ));
            return;
        }

        let src = self.session.path_of(original);
        let dest = self.session.path_of(new_name);

        match self.filesystem.rename_entry(&src, &dest) {
            Ok(()) => {
                self.dialog = None;
                self.follow_renamed_editor(&src, &dest);
                self.reload_entries();
                self.focus_entry_by_name(new_name);
                self.set_toast("Item renamed.", StatusKind::Success);
            }
            Err(DirpadError::AlreadyExists { .. }) => {
                self.dialog = Some(DialogKind::error(
                    "Rename Error",
                    "Item with the new name already exists.",
                ));
            }
            Err(e) => {
                warn!(src = %src.display(), error = %e, "rename failed");
                self.dialog = Some(DialogKind::error(
                    "Rename Error",
                    format!("Rename failed: {}", e),
                ));
            }
        }
    }

    /// 열린 파일(또는 그 상위 디렉토리)이 이름이 바뀌었으면 경로 갱신
    fn follow_renamed_editor(&mut self, src: &Path, dest: &Path) {
        let Some(buffer) = self.editor.as_mut() else {
            return;
        };
        let Ok(rest) = buffer.path().strip_prefix(src) else {
            return;
        };

        let new_path = if rest.as_os_str().is_empty() {
            dest.to_path_buf()
        } else {
            dest.join(rest)
        };
        debug!(path = %new_path.display(), "open file follows rename");
        buffer.set_path(new_path);
        self.update_file_status();
    }

    // === 삭제 ===

    /// 삭제 시작 (d)
    pub fn start_delete(&mut self) {
        match self.selected_entry() {
            Some(entry) => {
                self.dialog = Some(DialogKind::delete_confirm(entry.file_name.clone()));
            }
            None => {
                self.dialog = Some(DialogKind::error("Delete Error", "Please select an item."));
            }
        }
    }

    /// 삭제 확인 처리 (Yes 선택 시에만 호출)
    pub fn confirm_delete(&mut self, name: impl AsRef<OsStr>) {
        self.dialog = None;
        let path = self.session.path_of(name);

        match self.filesystem.delete_entry(&path) {
            Ok(()) => {
                if self
                    .editor
                    .as_ref()
                    .is_some_and(|b| b.path().starts_with(&path))
                {
                    self.close_editor();
                }
                self.reload_entries();
                self.set_toast("Item deleted.", StatusKind::Success);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "delete failed");
                // 일부만 지워졌을 수 있으므로 목록은 다시 읽음
                self.reload_entries();
                self.dialog = Some(DialogKind::error(
                    "Delete Error",
                    Self::format_user_error(
                        "Delete",
                        e.path().or(Some(path.as_path())),
                        &e.to_string(),
                        "Check permissions of the item and its contents.",
                    ),
                ));
            }
        }
    }

    // === 저장 ===

    /// 에디터 내용을 파일에 저장 (Ctrl+S)
    pub fn save(&mut self) {
        let Some(buffer) = self.editor.as_ref() else {
            self.dialog = Some(DialogKind::error(
                "Save Error",
                "Please select a file to save.",
            ));
            return;
        };

        let path = buffer.path().to_path_buf();
        if buffer.is_read_only() {
            self.dialog = Some(DialogKind::error(
                "Save Error",
                "File is not valid UTF-8 and was opened read-only.",
            ));
            return;
        }
        if self.filesystem.is_directory(&path) {
            self.dialog = Some(DialogKind::error(
                "Save Error",
                "Cannot save content to a directory.",
            ));
            return;
        }

        let contents = buffer.contents();
        if let Err(e) = self.filesystem.write_file(&path, contents.as_bytes()) {
            warn!(path = %path.display(), error = %e, "save failed");
            self.dialog = Some(DialogKind::error(
                "Save Error",
                Self::format_user_error(
                    "Save",
                    Some(&path),
                    &e.to_string(),
                    "Check write permission and available disk space.",
                ),
            ));
            return;
        }

        // 메타데이터 갱신을 위해 다시 읽음
        match self.filesystem.read_file(&path) {
            Ok((_, metadata)) => {
                if let Some(buffer) = self.editor.as_mut() {
                    buffer.mark_saved(metadata);
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "re-read after save failed");
                if let Some(buffer) = self.editor.as_mut() {
                    let metadata = *buffer.metadata();
                    buffer.mark_saved(metadata);
                }
            }
        }

        info!(path = %path.display(), bytes = contents.len(), "file saved");
        self.update_file_status();
        // 새 파일 생성 등으로 크기가 바뀌었을 수 있음
        self.reload_entries();
        self.set_toast("File saved (updated).", StatusKind::Success);
    }

    // === 확인 다이얼로그 ===

    /// 확인 다이얼로그에서 Yes 선택
    pub fn accept_confirm_dialog(&mut self) {
        let Some(DialogKind::Confirm { purpose, .. }) = self.dialog.take() else {
            return;
        };

        match purpose {
            ConfirmPurpose::Delete { name } => self.confirm_delete(&name),
            ConfirmPurpose::DiscardChanges { resume } => {
                debug!(?resume, "discarding unsaved changes");
                self.close_editor();
                self.execute_action(resume);
            }
        }
    }
}
