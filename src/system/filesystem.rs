use crate::models::file_entry::{sort_entries, DirectoryEntry, FileMetadata};
use crate::utils::error::{DirpadError, Result};
use std::ffi::{OsStr, OsString};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 안전 저장 시 사용하는 임시 파일 접미사
const SAFE_WRITE_SUFFIX: &str = ".dirpad-tmp";

/// 파일 시스템 모듈
///
/// 디렉토리 탐색과 파일 CRUD 작업을 제공합니다.
/// 모든 메서드는 상태 없이 절대 경로를 받아 동작하며, 호출 스레드를 블로킹합니다.
#[derive(Debug, Clone, Default)]
pub struct FileSystem {
    /// 저장 시 임시 파일에 먼저 쓰고 rename 할지 여부
    safe_write: bool,
}

impl FileSystem {
    /// 새 파일 시스템 인스턴스 생성
    pub fn new() -> Self {
        Self { safe_write: false }
    }

    /// 안전 저장 모드 설정
    pub fn with_safe_write(mut self, safe_write: bool) -> Self {
        self.safe_write = safe_write;
        self
    }

    // === 탐색 ===

    /// 디렉토리 읽기
    ///
    /// `.`/`..`를 제외한 직계 자식을 대소문자 무시 이름순으로 반환합니다.
    /// 심볼릭 링크는 대상이 디렉토리이면 디렉토리로 취급합니다.
    #[allow(clippy::unused_self)]
    pub fn list_directory(&self, dir: &Path) -> Result<Vec<DirectoryEntry>> {
        // 1. 경로 확인 (없으면 NotFound, 파일이면 NotADirectory)
        let metadata = fs::metadata(dir).map_err(|e| DirpadError::from_io(e, dir))?;
        if !metadata.is_dir() {
            return Err(DirpadError::not_a_directory(dir));
        }

        // 2. 디렉토리 열기
        let read_dir = fs::read_dir(dir).map_err(|e| DirpadError::from_io(e, dir))?;

        // 3. 엔트리 수집
        let mut entries = Vec::new();
        for entry in read_dir {
            // 읽는 도중 사라진 엔트리 등은 스킵
            let Ok(entry) = entry else { continue };

            let name = entry.file_name();
            if name == "." || name == ".." {
                continue;
            }

            let is_directory = fs::metadata(entry.path())
                .map(|m| m.is_dir())
                .unwrap_or(false);

            // 이름은 바이트 그대로 보관 (표시용 문자열은 엔트리가 만듦)
            entries.push(DirectoryEntry::new(name, is_directory));
        }

        sort_entries(&mut entries);
        debug!(dir = %dir.display(), count = entries.len(), "listed directory");
        Ok(entries)
    }

    /// 하위 디렉토리로 진입할 경로 계산
    ///
    /// `dir/name`이 디렉토리일 때만 성공합니다.
    #[allow(clippy::unused_self)]
    pub fn enter_directory(&self, dir: &Path, name: impl AsRef<OsStr>) -> Result<PathBuf> {
        let name = name.as_ref();
        validate_entry_name(name)?;

        let target = dir.join(name);
        let metadata = fs::metadata(&target).map_err(|e| DirpadError::from_io(e, &target))?;
        if metadata.is_dir() {
            Ok(target)
        } else {
            Err(DirpadError::not_a_directory(target))
        }
    }

    /// 상위 디렉토리 경로 계산
    ///
    /// 루트에서는 자기 자신을 반환합니다.
    #[allow(clippy::unused_self)]
    pub fn parent_directory(&self, dir: &Path) -> PathBuf {
        dir.parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| dir.to_path_buf())
    }

    // === 파일 CRUD ===

    /// 파일 전체 읽기
    ///
    /// 내용과 함께 읽은 시점의 크기/수정 시간을 반환합니다.
    #[allow(clippy::unused_self)]
    pub fn read_file(&self, path: &Path) -> Result<(Vec<u8>, FileMetadata)> {
        let mut file = File::open(path).map_err(|e| DirpadError::from_io(e, path))?;

        // 디렉토리도 open은 성공하는 플랫폼이 있으므로 먼저 확인
        let before = file.metadata().map_err(|e| DirpadError::from_io(e, path))?;
        if before.is_dir() {
            return Err(DirpadError::is_a_directory(path));
        }

        let mut contents = Vec::with_capacity(before.len() as usize);
        file.read_to_end(&mut contents)
            .map_err(|e| DirpadError::from_io(e, path))?;

        let after = file.metadata().map_err(|e| DirpadError::from_io(e, path))?;
        let modified = after
            .modified()
            .unwrap_or_else(|_| std::time::SystemTime::now());
        let metadata = FileMetadata::new(after.len(), modified);

        debug!(path = %path.display(), size = metadata.size_bytes, "read file");
        Ok((contents, metadata))
    }

    /// 파일 전체 덮어쓰기
    ///
    /// 없으면 생성하고 있으면 잘라낸 뒤 씁니다. 디렉토리에는 쓰지 않습니다.
    pub fn write_file(&self, path: &Path, contents: &[u8]) -> Result<()> {
        if path.is_dir() {
            return Err(DirpadError::is_a_directory(path));
        }

        if self.safe_write {
            self.write_via_temp(path, contents)?;
        } else {
            fs::write(path, contents).map_err(|e| DirpadError::from_io(e, path))?;
        }

        info!(path = %path.display(), size = contents.len(), safe = self.safe_write, "wrote file");
        Ok(())
    }

    /// 임시 파일에 쓰고 fsync 후 대상 위치로 rename
    ///
    /// 심볼릭 링크는 실제 대상 파일을 교체하고 링크는 그대로 둡니다.
    fn write_via_temp(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let tmp = safe_write_temp_path(&target)?;

        let result = (|| -> std::io::Result<()> {
            let mut file = File::create(&tmp)?;
            file.write_all(contents)?;
            file.sync_all()?;
            // 기존 파일 권한 유지
            if let Ok(existing) = fs::metadata(&target) {
                fs::set_permissions(&tmp, existing.permissions())?;
            }
            fs::rename(&tmp, &target)
        })();

        if let Err(e) = result {
            if tmp.exists() {
                if let Err(cleanup) = fs::remove_file(&tmp) {
                    warn!(tmp = %tmp.display(), error = %cleanup, "failed to remove temp file");
                }
            }
            return Err(DirpadError::from_io(e, path));
        }
        Ok(())
    }

    /// 빈 파일 또는 디렉토리 생성
    ///
    /// 이름이 `/` 또는 `\`로 끝나면 디렉토리(상위 경로 포함)를, 아니면 빈 파일을 만듭니다.
    /// 앞뒤 공백도 이름의 일부로 취급합니다.
    /// 마지막 구성요소는 배타적 생성으로 만들어 이미 있으면 항상 `AlreadyExists`가 됩니다.
    /// 반환값: 생성된 경로
    #[allow(clippy::unused_self)]
    pub fn create_entry(&self, dir: &Path, name: &str) -> Result<PathBuf> {
        let is_dir = is_directory_name(name);
        let stripped = name.trim_end_matches(['/', '\\']);
        if stripped.trim().is_empty() {
            return Err(DirpadError::InvalidName {
                name: name.to_string(),
            });
        }

        let path = dir.join(stripped);
        if fs::symlink_metadata(&path).is_ok() {
            return Err(DirpadError::already_exists(path));
        }

        if is_dir {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| DirpadError::from_io(e, parent))?;
            }
            fs::create_dir(&path).map_err(|e| DirpadError::from_io(e, &path))?;
            info!(path = %path.display(), "created directory");
        } else {
            OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .map_err(|e| DirpadError::from_io(e, &path))?;
            info!(path = %path.display(), "created file");
        }

        Ok(path)
    }

    /// 파일/디렉토리 재귀 영구 삭제
    ///
    /// 하위 항목을 먼저 지우고 부모를 지웁니다 (후위 순회).
    /// 심볼릭 링크는 따라가지 않고 링크 자체만 지웁니다.
    pub fn delete_entry(&self, path: &Path) -> Result<()> {
        let metadata = fs::symlink_metadata(path).map_err(|e| DirpadError::from_io(e, path))?;

        if metadata.is_dir() {
            self.remove_tree(path)?;
        } else {
            fs::remove_file(path).map_err(|e| DirpadError::from_io(e, path))?;
        }

        info!(path = %path.display(), "deleted entry");
        Ok(())
    }

    fn remove_tree(&self, dir: &Path) -> Result<()> {
        for entry in fs::read_dir(dir).map_err(|e| DirpadError::from_io(e, dir))? {
            let entry = entry.map_err(|e| DirpadError::from_io(e, dir))?;
            let child = entry.path();
            let metadata =
                fs::symlink_metadata(&child).map_err(|e| DirpadError::from_io(e, &child))?;

            if metadata.is_dir() {
                self.remove_tree(&child)?;
            } else {
                fs::remove_file(&child).map_err(|e| DirpadError::from_io(e, &child))?;
            }
        }

        fs::remove_dir(dir).map_err(|e| DirpadError::from_io(e, dir))
    }

    /// 파일/디렉토리 이름 변경
    ///
    /// 대상이 이미 있으면 `AlreadyExists`. 존재 확인과 rename 사이는 원자적이지 않습니다.
    #[allow(clippy::unused_self)]
    pub fn rename_entry(&self, src: &Path, dest: &Path) -> Result<()> {
        fs::symlink_metadata(src).map_err(|e| DirpadError::from_io(e, src))?;

        if fs::symlink_metadata(dest).is_ok() {
            return Err(DirpadError::already_exists(dest));
        }

        fs::rename(src, dest).map_err(|e| match e.kind() {
            std::io::ErrorKind::AlreadyExists => DirpadError::from_io(e, dest),
            _ => DirpadError::from_io(e, src),
        })?;

        info!(src = %src.display(), dest = %dest.display(), "renamed entry");
        Ok(())
    }

    /// 디렉토리 여부 확인
    #[allow(clippy::unused_self)]
    pub fn is_directory(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

/// 이름이 디렉토리 생성을 뜻하는지 (`/` 또는 `\`로 끝남)
pub fn is_directory_name(name: &str) -> bool {
    name.ends_with('/') || name.ends_with('\\')
}

/// 목록에서 고른 엔트리 이름 검증
fn validate_entry_name(name: &OsStr) -> Result<()> {
    let lossy = name.to_string_lossy();
    if lossy.is_empty() || lossy == "." || lossy == ".." || lossy.contains(['/', '\\']) {
        return Err(DirpadError::InvalidName {
            name: lossy.into_owned(),
        });
    }
    Ok(())
}

fn safe_write_temp_path(path: &Path) -> Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| DirpadError::InvalidName {
        name: path.display().to_string(),
    })?;
    let mut tmp_name = OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(SAFE_WRITE_SUFFIX);
    Ok(path.with_file_name(tmp_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[cfg(unix)]
    use std::os::unix::fs as unix_fs;

    fn names(entries: &[DirectoryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_list_scenario() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "hello").unwrap();
        fs::create_dir(temp.path().join("b")).unwrap();

        let entries = fs_instance.list_directory(temp.path()).unwrap();
        assert_eq!(
            entries,
            vec![DirectoryEntry::file("a.txt"), DirectoryEntry::directory("b")]
        );

        let (contents, metadata) = fs_instance.read_file(&temp.path().join("a.txt")).unwrap();
        assert_eq!(contents, b"hello");
        assert_eq!(metadata.size_bytes, 5);
    }

    #[test]
    fn test_list_sorted_case_insensitive() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        for name in ["zeta", "Beta", "alpha", "Delta"] {
            fs::write(temp.path().join(name), "").unwrap();
        }
        fs::create_dir(temp.path().join("charlie")).unwrap();

        let entries = fs_instance.list_directory(temp.path()).unwrap();
        assert_eq!(
            names(&entries),
            vec!["alpha", "Beta", "charlie", "Delta", "zeta"]
        );
        assert!(!entries.iter().any(|e| e.name == "." || e.name == ".."));
    }

    #[test]
    fn test_list_nonexistent_directory() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        let result = fs_instance.list_directory(&temp.path().join("missing"));

        match result {
            Err(DirpadError::NotFound { .. }) => {}
            other => panic!("Expected NotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_list_file_is_not_a_directory() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "x").unwrap();

        assert!(matches!(
            fs_instance.list_directory(&file),
            Err(DirpadError::NotADirectory { .. })
        ));
    }

    #[test]
    fn test_enter_and_up_round_trip() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("child")).unwrap();

        let entered = fs_instance.enter_directory(temp.path(), "child").unwrap();
        assert_eq!(entered, temp.path().join("child"));
        assert_eq!(fs_instance.parent_directory(&entered), temp.path());
    }

    #[test]
    fn test_enter_file_fails() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "x").unwrap();

        assert!(matches!(
            fs_instance.enter_directory(temp.path(), "a.txt"),
            Err(DirpadError::NotADirectory { .. })
        ));
        assert!(matches!(
            fs_instance.enter_directory(temp.path(), "nope"),
            Err(DirpadError::NotFound { .. })
        ));
        assert!(matches!(
            fs_instance.enter_directory(temp.path(), ".."),
            Err(DirpadError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_up_at_root_is_noop() {
        let fs_instance = FileSystem::new();
        let root = PathBuf::from("/");
        assert_eq!(fs_instance.parent_directory(&root), root);
    }

    #[test]
    fn test_write_then_read() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("note.txt");
        let bytes = b"first line\nsecond line\n";

        fs_instance.write_file(&path, bytes).unwrap();
        let (contents, metadata) = fs_instance.read_file(&path).unwrap();
        assert_eq!(contents, bytes);
        assert_eq!(metadata.size_bytes, bytes.len() as u64);

        // 덮어쓰기는 잘라냄
        fs_instance.write_file(&path, b"short").unwrap();
        let (contents, metadata) = fs_instance.read_file(&path).unwrap();
        assert_eq!(contents, b"short");
        assert_eq!(metadata.size_bytes, 5);
    }

    #[test]
    fn test_safe_write_replaces_contents_and_leaves_no_temp() {
        let fs_instance = FileSystem::new().with_safe_write(true);
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("safe.txt");
        fs::write(&path, "old contents that are long").unwrap();

        fs_instance.write_file(&path, b"new").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"new");
        let leftovers = fs_instance.list_directory(temp.path()).unwrap();
        assert_eq!(names(&leftovers), vec!["safe.txt"]);
    }

    #[test]
    fn test_write_to_directory_fails() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();

        assert!(matches!(
            fs_instance.write_file(temp.path(), b"x"),
            Err(DirpadError::IsADirectory { .. })
        ));
    }

    #[test]
    fn test_read_errors() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();

        assert!(matches!(
            fs_instance.read_file(&temp.path().join("missing.txt")),
            Err(DirpadError::NotFound { .. })
        ));
        assert!(matches!(
            fs_instance.read_file(temp.path()),
            Err(DirpadError::IsADirectory { .. })
        ));
    }

    #[test]
    fn test_create_file_and_directory() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();

        let file = fs_instance.create_entry(temp.path(), "foo").unwrap();
        let dir = fs_instance.create_entry(temp.path(), "bar/").unwrap();
        assert_eq!(file, temp.path().join("foo"));
        assert_eq!(dir, temp.path().join("bar"));

        let entries = fs_instance.list_directory(temp.path()).unwrap();
        assert!(entries.contains(&DirectoryEntry::file("foo")));
        assert!(entries.contains(&DirectoryEntry::directory("bar")));
        assert_eq!(fs::read(&file).unwrap().len(), 0);
    }

    #[test]
    fn test_create_directory_with_ancestors() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();

        fs_instance.create_entry(temp.path(), "a/b/c/").unwrap();
        assert!(temp.path().join("a").join("b").join("c").is_dir());

        // 백슬래시 접미사도 디렉토리
        fs_instance.create_entry(temp.path(), "win\\").unwrap();
        assert!(temp.path().join("win").is_dir());
    }

    #[test]
    fn test_create_existing_fails() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("foo"), "keep me").unwrap();

        assert!(matches!(
            fs_instance.create_entry(temp.path(), "foo"),
            Err(DirpadError::AlreadyExists { .. })
        ));
        assert!(matches!(
            fs_instance.create_entry(temp.path(), "foo/"),
            Err(DirpadError::AlreadyExists { .. })
        ));
        assert_eq!(fs::read_to_string(temp.path().join("foo")).unwrap(), "keep me");
    }

    #[test]
    fn test_create_empty_name_fails() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();

        for name in ["", "   ", "/"] {
            assert!(matches!(
                fs_instance.create_entry(temp.path(), name),
                Err(DirpadError::InvalidName { .. })
            ));
        }
    }

    #[test]
    fn test_delete_non_empty_directory() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("tree");
        fs::create_dir_all(root.join("nested").join("deeper")).unwrap();
        fs::write(root.join("top.txt"), "1").unwrap();
        fs::write(root.join("nested").join("mid.txt"), "2").unwrap();
        fs::write(root.join("nested").join("deeper").join("low.txt"), "3").unwrap();

        fs_instance.delete_entry(&root).unwrap();

        assert!(!root.exists());
        let entries = fs_instance.list_directory(temp.path()).unwrap();
        assert!(!entries.iter().any(|e| e.name == "tree"));
    }

    #[test]
    fn test_delete_file_and_missing() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("gone.txt");
        fs::write(&file, "x").unwrap();

        fs_instance.delete_entry(&file).unwrap();
        assert!(!file.exists());

        assert!(matches!(
            fs_instance.delete_entry(&file),
            Err(DirpadError::NotFound { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_delete_does_not_follow_symlinks() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        let outside = temp.path().join("outside");
        let keep = outside.join("keep.txt");
        let doomed = temp.path().join("doomed");
        fs::create_dir_all(&outside).unwrap();
        fs::write(&keep, "safe").unwrap();
        fs::create_dir_all(&doomed).unwrap();
        unix_fs::symlink(&outside, doomed.join("link")).unwrap();

        fs_instance.delete_entry(&doomed).unwrap();

        assert!(!doomed.exists());
        assert!(keep.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_list_follows_symlink_for_directory_flag() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("real");
        fs::create_dir(&target).unwrap();
        unix_fs::symlink(&target, temp.path().join("link")).unwrap();
        unix_fs::symlink(temp.path().join("void"), temp.path().join("dangling")).unwrap();

        let entries = fs_instance.list_directory(temp.path()).unwrap();
        assert!(entries.contains(&DirectoryEntry::directory("link")));
        assert!(entries.contains(&DirectoryEntry::file("dangling")));
    }

    #[test]
    fn test_rename_entry() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        let old = temp.path().join("old.txt");
        let new = temp.path().join("new.txt");
        fs::write(&old, "test").unwrap();

        fs_instance.rename_entry(&old, &new).unwrap();

        let entries = fs_instance.list_directory(temp.path()).unwrap();
        assert_eq!(names(&entries), vec!["new.txt"]);
        assert_eq!(fs::read_to_string(&new).unwrap(), "test");
    }

    #[test]
    fn test_rename_onto_existing_fails() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.txt");
        let b = temp.path().join("b.txt");
        fs::write(&a, "a").unwrap();
        fs::write(&b, "b").unwrap();

        match fs_instance.rename_entry(&a, &b) {
            Err(DirpadError::AlreadyExists { path, .. }) => assert_eq!(path, b),
            other => panic!("Expected AlreadyExists error, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(&a).unwrap(), "a");
        assert_eq!(fs::read_to_string(&b).unwrap(), "b");
    }

    #[test]
    fn test_rename_missing_source() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();

        assert!(matches!(
            fs_instance.rename_entry(&temp.path().join("ghost"), &temp.path().join("x")),
            Err(DirpadError::NotFound { .. })
        ));
    }

    #[test]
    fn test_rename_into_missing_directory_is_not_found() {
        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("a.txt");
        fs::write(&src, "a").unwrap();

        let err = fs_instance
            .rename_entry(&src, &temp.path().join("nowhere").join("a.txt"))
            .unwrap_err();
        assert!(matches!(err, DirpadError::NotFound { .. }), "got {:?}", err);
        // OS 원문이 메시지에 남음
        assert!(err.to_string().contains(" ("), "message: {}", err);
        assert!(src.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_safe_write_through_symlink_keeps_link() {
        let fs_instance = FileSystem::new().with_safe_write(true);
        let temp = TempDir::new().unwrap();
        let real = temp.path().join("real.txt");
        let link = temp.path().join("link.txt");
        fs::write(&real, "old").unwrap();
        unix_fs::symlink(&real, &link).unwrap();

        fs_instance.write_file(&link, b"new").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read(&real).unwrap(), b"new");
        let entries = fs_instance.list_directory(temp.path()).unwrap();
        assert_eq!(names(&entries), vec!["link.txt", "real.txt"]);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_names_round_trip() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let fs_instance = FileSystem::new();
        let temp = TempDir::new().unwrap();
        let raw_dir = OsString::from_vec(b"dir\xfe".to_vec());
        fs::create_dir(temp.path().join(&raw_dir)).unwrap();

        let entries = fs_instance.list_directory(temp.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].file_name, raw_dir);
        assert!(entries[0].is_directory);

        let entered = fs_instance
            .enter_directory(temp.path(), &entries[0].file_name)
            .unwrap();
        assert_eq!(entered, temp.path().join(&raw_dir));
        fs_instance.delete_entry(&entered).unwrap();
        assert!(!entered.exists());
    }

    #[test]
    fn test_is_directory_name() {
        assert!(is_directory_name("docs/"));
        assert!(is_directory_name("docs\\"));
        assert!(!is_directory_name("docs"));
    }
}
