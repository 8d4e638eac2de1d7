use crate::config::Config;
use crate::core::actions::Action;
use crate::models::{DirectoryEntry, NavigationSession};
use crate::system::FileSystem;
use crate::ui::components::{ConfirmPurpose, DialogKind, IconMode, InputPurpose, StatusKind};
use crate::ui::{FocusPane, LayoutManager, LayoutMode, ThemeManager};
use crate::utils::error::{DirpadError, Result};
use crate::utils::formatter::format_file_status;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

mod dialogs;
pub mod editor;
mod navigation;
mod operations;
mod text_edit;

pub use editor::EditorBuffer;

/// 파일이 열려 있지 않을 때 상태 문구
const STATUS_NONE_SELECTED: &str = "Current File: None Selected";
/// 디렉토리로 이동한 직후 상태 문구
const STATUS_DIRECTORY_VIEW: &str = "Current File: None Selected (Directory View)";
/// 파일 읽기 실패 상태 문구
const STATUS_READ_FAILED: &str = "Current File: Read Failed";

/// 토스트 메시지 유지 시간 (초)
const TOAST_SECONDS: u64 = 3;

/// 앱 상태
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 레이아웃 매니저 (포커스 포함)
    pub layout: LayoutManager,
    /// 파일 시스템
    pub filesystem: FileSystem,
    /// 탐색 세션 (현재 디렉토리)
    pub session: NavigationSession,
    /// 현재 디렉토리 목록
    pub entries: Vec<DirectoryEntry>,
    /// 커서 위치
    pub selected_index: usize,
    /// 목록 스크롤 오프셋
    pub scroll_offset: usize,
    /// 열린 파일
    pub editor: Option<EditorBuffer>,
    /// 현재 표시 중인 다이얼로그
    pub dialog: Option<DialogKind>,
    /// 상태줄 (열린 파일 정보)
    pub file_status: String,
    /// 토스트 메시지 (3초 후 자동 소멸)
    pub toast_message: Option<(String, StatusKind, Instant)>,
    /// 테마 관리자
    pub theme_manager: ThemeManager,
    /// 아이콘 표시 모드
    pub icon_mode: IconMode,
    /// 에디터 탭 너비
    pub tab_width: usize,
    /// 경로 표시줄의 `~` 축약 기준
    pub home_dir: Option<PathBuf>,
}

impl App {
    /// 설정과 시작 디렉토리로 앱 생성
    pub fn new(config: &Config, start_dir: &Path, theme_manager: ThemeManager) -> Result<Self> {
        let filesystem = FileSystem::new().with_safe_write(config.safe_write);
        let session = NavigationSession::new(start_dir, &filesystem)?;
        let entries = session.list(&filesystem)?;
        info!(dir = %session.current_dir().display(), "session started");

        Ok(Self {
            should_quit: false,
            layout: LayoutManager::new(),
            filesystem,
            session,
            entries,
            selected_index: 0,
            scroll_offset: 0,
            editor: None,
            dialog: None,
            file_status: STATUS_NONE_SELECTED.to_string(),
            toast_message: None,
            theme_manager,
            icon_mode: config.icons,
            tab_width: config.tab_width,
            home_dir: dirs::home_dir(),
        })
    }

    #[cfg(test)]
    pub(crate) fn new_for_test(dir: &Path) -> Self {
        let config = Config::default();
        let mut app = Self::new(&config, dir, ThemeManager::new())
            .unwrap_or_else(|e| panic!("test app for {}: {}", dir.display(), e));
        app.home_dir = None;
        app
    }

    /// 종료 요청 (저장하지 않은 변경이 있으면 확인)
    pub fn quit(&mut self) {
        if self.confirm_discard_if_dirty(Action::Quit) {
            return;
        }
        self.should_quit = true;
    }

    /// 종료 상태 확인
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// 레이아웃 모드 반환
    pub fn layout_mode(&self) -> LayoutMode {
        self.layout.mode()
    }

    pub fn focus(&self) -> FocusPane {
        self.layout.focus()
    }

    /// 현재 디렉토리
    pub fn current_dir(&self) -> &Path {
        self.session.current_dir()
    }

    /// 커서 위치의 엔트리
    pub fn selected_entry(&self) -> Option<&DirectoryEntry> {
        self.entries.get(self.selected_index)
    }

    /// (파일 수, 디렉토리 수)
    pub fn entry_counts(&self) -> (usize, usize) {
        let dirs = self.entries.iter().filter(|e| e.is_directory).count();
        (self.entries.len() - dirs, dirs)
    }

    /// 상태줄에 표시할 문구 (토스트 우선)
    pub fn status_line(&self) -> (&str, StatusKind) {
        match self.toast_display() {
            Some((message, kind)) => (message, kind),
            None if self.file_status == STATUS_READ_FAILED => {
                (self.file_status.as_str(), StatusKind::Error)
            }
            None => (self.file_status.as_str(), StatusKind::Info),
        }
    }

    /// 토스트 메시지 설정
    pub fn set_toast(&mut self, message: &str, kind: StatusKind) {
        self.toast_message = Some((message.to_string(), kind, Instant::now()));
    }

    /// 토스트 메시지 가져오기 (만료 안 된 경우만)
    pub fn toast_display(&self) -> Option<(&str, StatusKind)> {
        self.toast_message.as_ref().and_then(|(msg, kind, time)| {
            if time.elapsed().as_secs() < TOAST_SECONDS {
                Some((msg.as_str(), *kind))
            } else {
                None
            }
        })
    }

    /// 만료된 토스트 제거
    pub fn clear_expired_toast(&mut self) {
        if self.toast_display().is_none() {
            self.toast_message = None;
        }
    }

    /// 열린 파일의 상태줄 문구 갱신
    fn update_file_status(&mut self) {
        self.file_status = match &self.editor {
            Some(buffer) => format_file_status(&buffer.file_name(), buffer.metadata()),
            None => STATUS_NONE_SELECTED.to_string(),
        };
    }

    /// 에디터가 수정된 상태면 폐기 확인 다이얼로그를 띄우고 true 반환
    fn confirm_discard_if_dirty(&mut self, resume: Action) -> bool {
        match &self.editor {
            Some(buffer) if buffer.is_dirty() => {
                debug!(?resume, "unsaved changes, asking before continuing");
                self.dialog = Some(DialogKind::discard_changes_confirm(
                    &buffer.file_name(),
                    resume,
                ));
                true
            }
            _ => false,
        }
    }
}
