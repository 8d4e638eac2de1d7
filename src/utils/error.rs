use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// dirpad 에러 분류
///
/// 파일 시스템 호출 실패는 모두 이 열거형 중 하나로 분류됩니다.
/// 메시지에는 OS가 돌려준 원문을 그대로 담습니다.
/// 분류된 변형은 OS 에러가 있으면 `source`로 보관하고 메시지 끝에 원문을 붙입니다.
#[derive(Error, Debug)]
pub enum DirpadError {
    #[error("Not found: {}{}", path.display(), os_detail(source))]
    NotFound {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },

    #[error("Permission denied: {}{}", path.display(), os_detail(source))]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },

    #[error("Already exists: {}{}", path.display(), os_detail(source))]
    AlreadyExists {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },

    #[error("Is a directory: {}{}", path.display(), os_detail(source))]
    IsADirectory {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },

    #[error("Not a directory: {}{}", path.display(), os_detail(source))]
    NotADirectory {
        path: PathBuf,
        #[source]
        source: Option<io::Error>,
    },

    #[error("{reason} ({})", path.display())]
    Other { path: PathBuf, reason: String },

    #[error("Invalid name: '{name}'")]
    InvalidName { name: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl DirpadError {
    /// io::Error를 경로 정보와 함께 분류
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => DirpadError::NotFound {
                path,
                source: Some(err),
            },
            io::ErrorKind::PermissionDenied => DirpadError::PermissionDenied {
                path,
                source: Some(err),
            },
            io::ErrorKind::AlreadyExists => DirpadError::AlreadyExists {
                path,
                source: Some(err),
            },
            io::ErrorKind::IsADirectory => DirpadError::IsADirectory {
                path,
                source: Some(err),
            },
            io::ErrorKind::NotADirectory => DirpadError::NotADirectory {
                path,
                source: Some(err),
            },
            _ => DirpadError::Other {
                path,
                reason: err.to_string(),
            },
        }
    }

    /// OS 에러 없이 판정한 "디렉토리가 아님"
    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        DirpadError::NotADirectory {
            path: path.into(),
            source: None,
        }
    }

    /// OS 에러 없이 판정한 "디렉토리임"
    pub fn is_a_directory(path: impl Into<PathBuf>) -> Self {
        DirpadError::IsADirectory {
            path: path.into(),
            source: None,
        }
    }

    /// OS 에러 없이 판정한 "이미 있음"
    pub fn already_exists(path: impl Into<PathBuf>) -> Self {
        DirpadError::AlreadyExists {
            path: path.into(),
            source: None,
        }
    }

    /// 에러가 가리키는 경로 (있는 경우)
    pub fn path(&self) -> Option<&Path> {
        match self {
            DirpadError::NotFound { path, .. }
            | DirpadError::PermissionDenied { path, .. }
            | DirpadError::AlreadyExists { path, .. }
            | DirpadError::IsADirectory { path, .. }
            | DirpadError::NotADirectory { path, .. }
            | DirpadError::Other { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// 메시지에 덧붙일 OS 에러 원문
fn os_detail(source: &Option<io::Error>) -> String {
    match source {
        Some(err) => format!(" ({})", err),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, DirpadError>;
