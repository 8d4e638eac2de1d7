// Configuration - config.toml 로드
//
// 위치: --config 플래그 > DIRPAD_CONFIG 환경변수 > <config_dir>/dirpad/config.toml

use crate::ui::components::file_list::IconMode;
use crate::utils::error::{DirpadError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// 설정 파일 경로 환경변수
pub const CONFIG_ENV: &str = "DIRPAD_CONFIG";

const APP_DIR: &str = "dirpad";
const CONFIG_FILE: &str = "config.toml";
const MAX_TAB_WIDTH: usize = 16;

/// 사용자 설정
///
/// 모든 키는 선택 사항이며 빠진 키는 기본값을 사용합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 시작 디렉토리 (CLI 인자가 우선)
    pub start_dir: Option<PathBuf>,
    /// 테마 이름
    pub theme: String,
    /// 목록 아이콘 모드
    pub icons: IconMode,
    /// 임시 파일에 쓴 뒤 rename으로 교체
    pub safe_write: bool,
    /// 탭 키가 삽입하는 공백 수
    pub tab_width: usize,
    /// 로그 필터 (예: "debug", "dirpad=trace")
    pub log_level: Option<String>,
    /// 로그 파일 경로
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_dir: None,
            theme: "dark".to_string(),
            icons: IconMode::default(),
            safe_write: false,
            tab_width: 4,
            log_level: None,
            log_file: None,
        }
    }
}

impl Config {
    /// TOML 문자열 파싱 + 값 검증
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| DirpadError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// 설정 로드
    ///
    /// 명시한 파일이 없으면 에러, 기본 위치의 파일이 없으면 기본값을 반환합니다.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let env_value = env::var_os(CONFIG_ENV);
        let explicit_given = explicit.is_some() || env_value.is_some();
        let Some(path) = resolve_config_path(explicit, env_value, dirs::config_dir()) else {
            return Ok(Self::default());
        };

        match fs::read_to_string(&path) {
            Ok(content) => Self::from_toml_str(&content).map_err(|e| match e {
                DirpadError::Config(reason) => {
                    DirpadError::Config(format!("{}: {}", path.display(), reason))
                }
                other => other,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound && !explicit_given => {
                Ok(Self::default())
            }
            Err(e) => Err(DirpadError::Config(format!("{}: {}", path.display(), e))),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.tab_width == 0 || self.tab_width > MAX_TAB_WIDTH {
            return Err(DirpadError::Config(format!(
                "tab_width must be between 1 and {} (got {})",
                MAX_TAB_WIDTH, self.tab_width
            )));
        }
        if self.theme.trim().is_empty() {
            return Err(DirpadError::Config("theme must not be empty".to_string()));
        }
        Ok(())
    }

    /// 로그 파일 경로 (설정값 또는 `<data_local_dir>/dirpad/dirpad.log`)
    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join("dirpad.log"))
        })
    }
}

/// 설정 파일 경로 결정
pub fn resolve_config_path(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(value));
    }
    config_dir.map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
