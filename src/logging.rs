// Logging - tracing 구독자 초기화
//
// 터미널은 ratatui가 점유하므로 로그는 항상 파일로만 기록합니다.

use crate::config::Config;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// 로그 필터 환경변수
pub const LOG_ENV: &str = "DIRPAD_LOG";

const DEFAULT_FILTER: &str = "warn";

/// 필터 문자열 결정: 환경변수 > 설정 > 기본값(warn)
pub fn filter_directive(env_value: Option<String>, config: &Config) -> String {
    env_value
        .filter(|v| !v.trim().is_empty())
        .or_else(|| config.log_level.clone())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

/// 파일 로거 설치
///
/// 로그 파일을 열 수 없으면 아무것도 설치하지 않습니다. 반환값: 로그 파일 경로
pub fn init(config: &Config) -> Option<PathBuf> {
    let path = config.log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let directive = filter_directive(std::env::var(LOG_ENV).ok(), config);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;

    Some(path)
}
