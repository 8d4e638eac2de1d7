use std::cmp::Ordering;
use std::ffi::OsString;
use std::time::SystemTime;

/// 디렉토리 엔트리
///
/// 목록 요청마다 새로 만들어지며 저장되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// 디렉토리에서 읽은 그대로의 이름 (경로 구분자 없음)
    pub file_name: OsString,
    /// 표시용 이름 (UTF-8이 아닌 바이트는 대체 문자)
    pub name: String,
    /// 디렉토리 여부
    pub is_directory: bool,
}

impl DirectoryEntry {
    pub fn new(file_name: impl Into<OsString>, is_directory: bool) -> Self {
        let file_name = file_name.into();
        Self {
            name: file_name.to_string_lossy().into_owned(),
            file_name,
            is_directory,
        }
    }

    #[cfg(test)]
    pub fn file(name: impl Into<OsString>) -> Self {
        Self::new(name, false)
    }

    #[cfg(test)]
    pub fn directory(name: impl Into<OsString>) -> Self {
        Self::new(name, true)
    }

    /// 대소문자 무시 이름 비교 (동률이면 원래 바이트 순서)
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.name
            .to_lowercase()
            .cmp(&other.name.to_lowercase())
            .then_with(|| self.file_name.cmp(&other.file_name))
    }
}

/// 파일 메타데이터
///
/// 파일을 읽을 때마다 다시 계산됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileMetadata {
    /// 바이트 단위 크기
    pub size_bytes: u64,
    /// 수정 시간
    pub modified_time: SystemTime,
}

impl FileMetadata {
    pub fn new(size_bytes: u64, modified_time: SystemTime) -> Self {
        Self {
            size_bytes,
            modified_time,
        }
    }
}

/// 엔트리 목록을 대소문자 무시 오름차순으로 정렬
pub fn sort_entries(entries: &mut [DirectoryEntry]) {
    entries.sort_by(DirectoryEntry::cmp_by_name);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_constructors() {
        let file = DirectoryEntry::file("a.txt");
        assert_eq!(file.name, "a.txt");
        assert!(!file.is_directory);

        let dir = DirectoryEntry::directory("b");
        assert!(dir.is_directory);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_keeps_raw_bytes() {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let entry = DirectoryEntry::file(OsString::from_vec(b"bad\xffname".to_vec()));
        assert_eq!(entry.file_name.as_bytes(), b"bad\xffname");
        assert_eq!(entry.name, "bad\u{FFFD}name");
    }

    #[test]
    fn test_sort_is_case_insensitive() {
        let mut entries = vec![
            DirectoryEntry::file("beta"),
            DirectoryEntry::directory("Alpha"),
            DirectoryEntry::file("alpha2"),
            DirectoryEntry::file("Gamma"),
        ];
        sort_entries(&mut entries);

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "alpha2", "beta", "Gamma"]);
    }

    #[test]
    fn test_sort_ties_are_deterministic() {
        let mut entries = vec![DirectoryEntry::file("readme"), DirectoryEntry::file("README")];
        sort_entries(&mut entries);
        assert_eq!(entries[0].name, "README");
        assert_eq!(entries[1].name, "readme");
    }
}
