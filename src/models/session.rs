use crate::models::file_entry::DirectoryEntry;
use crate::system::filesystem::FileSystem;
use crate::utils::error::{DirpadError, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 탐색 세션
///
/// 현재 디렉토리 하나만 보관합니다. 항상 존재하는 디렉토리를 가리키며,
/// 탐색이 실패하면 상태는 바뀌지 않습니다.
#[derive(Debug, Clone)]
pub struct NavigationSession {
    /// 현재 디렉토리 (절대 경로)
    current_dir: PathBuf,
}

impl NavigationSession {
    /// 시작 디렉토리로 세션 생성
    ///
    /// 상대 경로는 절대 경로로 바꾸고, 디렉토리가 아니면 실패합니다.
    pub fn new(start: &Path, filesystem: &FileSystem) -> Result<Self> {
        let absolute = if start.is_absolute() {
            start.to_path_buf()
        } else {
            std::env::current_dir()
                .map_err(|e| DirpadError::from_io(e, start))?
                .join(start)
        };
        let canonical =
            std::fs::canonicalize(&absolute).map_err(|e| DirpadError::from_io(e, &absolute))?;

        if !filesystem.is_directory(&canonical) {
            return Err(DirpadError::not_a_directory(canonical));
        }

        Ok(Self {
            current_dir: canonical,
        })
    }

    /// 현재 디렉토리
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// 현재 디렉토리 목록
    pub fn list(&self, filesystem: &FileSystem) -> Result<Vec<DirectoryEntry>> {
        filesystem.list_directory(&self.current_dir)
    }

    /// 하위 디렉토리로 진입
    ///
    /// 대상 목록을 읽을 수 있을 때만 현재 디렉토리를 바꾸고 그 목록을 반환합니다.
    pub fn enter(
        &mut self,
        name: impl AsRef<OsStr>,
        filesystem: &FileSystem,
    ) -> Result<Vec<DirectoryEntry>> {
        let target = filesystem.enter_directory(&self.current_dir, name)?;
        self.move_to(target, filesystem)
    }

    /// 상위 디렉토리로 이동
    ///
    /// 루트에서는 아무 일도 하지 않고 `Ok(None)`을 반환합니다.
    pub fn up(&mut self, filesystem: &FileSystem) -> Result<Option<Vec<DirectoryEntry>>> {
        let parent = filesystem.parent_directory(&self.current_dir);
        if parent == self.current_dir {
            return Ok(None);
        }
        self.move_to(parent, filesystem).map(Some)
    }

    /// 현재 디렉토리 기준 엔트리 경로
    pub fn path_of(&self, name: impl AsRef<OsStr>) -> PathBuf {
        self.current_dir.join(name.as_ref())
    }

    /// 루트 여부
    pub fn is_root(&self) -> bool {
        self.current_dir.parent().is_none()
    }

    fn move_to(
        &mut self,
        target: PathBuf,
        filesystem: &FileSystem,
    ) -> Result<Vec<DirectoryEntry>> {
        let entries = filesystem.list_directory(&target)?;
        debug!(from = %self.current_dir.display(), to = %target.display(), "changed directory");
        self.current_dir = target;
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn session_in(temp: &TempDir) -> NavigationSession {
        NavigationSession::new(temp.path(), &FileSystem::new()).unwrap()
    }

    #[test]
    fn test_session_creation_canonicalizes() {
        let temp = TempDir::new().unwrap();
        let session = session_in(&temp);

        assert!(session.current_dir().is_absolute());
        assert_eq!(
            session.current_dir(),
            fs::canonicalize(temp.path()).unwrap()
        );
    }

    #[test]
    fn test_session_creation_rejects_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("f.txt");
        fs::write(&file, "x").unwrap();

        assert!(matches!(
            NavigationSession::new(&file, &FileSystem::new()),
            Err(DirpadError::NotADirectory { .. })
        ));
    }

    #[test]
    fn test_enter_then_up_returns_to_start() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub").join("inner.txt"), "x").unwrap();

        let mut session = session_in(&temp);
        let start = session.current_dir().to_path_buf();

        let entries = session.enter("sub", &fs_instance).unwrap();
        assert_eq!(session.current_dir(), start.join("sub"));
        assert_eq!(entries, vec![DirectoryEntry::file("inner.txt")]);

        let entries = session.up(&fs_instance).unwrap();
        assert!(entries.is_some());
        assert_eq!(session.current_dir(), start);
    }

    #[test]
    fn test_failed_enter_leaves_state_unchanged() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("file.txt"), "x").unwrap();

        let mut session = session_in(&temp);
        let start = session.current_dir().to_path_buf();

        assert!(session.enter("file.txt", &fs_instance).is_err());
        assert!(session.enter("missing", &fs_instance).is_err());
        assert_eq!(session.current_dir(), start);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_is_not_entered() {
        use std::os::unix::fs::PermissionsExt;

        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        let locked = temp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let mut session = session_in(&temp);
        let start = session.current_dir().to_path_buf();
        let result = session.enter("locked", &fs_instance);

        // root 권한으로 실행되면 열리므로 결과와 상태가 일치하는지만 확인
        match result {
            Ok(_) => assert_eq!(session.current_dir(), start.join("locked")),
            Err(DirpadError::PermissionDenied { .. }) => assert_eq!(session.current_dir(), start),
            Err(other) => panic!("unexpected error: {:?}", other),
        }

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_up_at_root_is_noop() {
        let fs_instance = FileSystem::new();
        let mut session = NavigationSession::new(Path::new("/"), &fs_instance).unwrap();

        assert!(session.is_root());
        assert!(session.up(&fs_instance).unwrap().is_none());
        assert_eq!(session.current_dir(), Path::new("/"));
    }

    #[test]
    fn test_path_of_joins_current_dir() {
        let temp = TempDir::new().unwrap();
        let session = session_in(&temp);
        assert_eq!(
            session.path_of("a.txt"),
            session.current_dir().join("a.txt")
        );
    }
}
