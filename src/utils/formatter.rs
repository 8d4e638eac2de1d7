// Formatters - 파일 크기, 날짜, 상태줄 포맷팅

use crate::models::FileMetadata;
use chrono::{DateTime, Local, SecondsFormat};
use std::time::SystemTime;

/// 파일 크기를 읽기 쉬운 형식으로 포맷팅 (숫자와 단위 사이 공백)
///
/// # Examples
/// ```ignore
/// assert_eq!(format_file_size(0), "0 B");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    }
}

/// 시스템 시간을 ISO-8601 형식으로 포맷팅 (로컬 시간대 오프셋 포함)
///
/// 예: "2026-02-08T14:30:05+09:00"
pub fn format_iso_time(time: SystemTime) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// 개수에 따라 단수/복수형 반환
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// 열린 파일 상태줄 문구
pub fn format_file_status(name: &str, metadata: &FileMetadata) -> String {
    format!(
        "Current File: {} | Size: {} bytes | Modified: {}",
        name,
        metadata.size_bytes,
        format_iso_time(metadata.modified_time)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(3_670_016), "3.5 MB");
        assert_eq!(format_file_size(2_147_483_648), "2.0 GB");
    }

    #[test]
    fn test_format_iso_time_round_trips() {
        let time = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let formatted = format_iso_time(time);

        assert!(formatted.contains('T'));
        let parsed = DateTime::parse_from_rfc3339(&formatted).unwrap();
        assert_eq!(parsed.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "file", "files"), "0 files");
        assert_eq!(pluralize(1, "file", "files"), "1 file");
        assert_eq!(pluralize(5, "dir", "dirs"), "5 dirs");
    }

    #[test]
    fn test_format_file_status() {
        let metadata = FileMetadata::new(5, UNIX_EPOCH + Duration::from_secs(60));
        let status = format_file_status("a.txt", &metadata);

        assert!(status.starts_with("Current File: a.txt | Size: 5 bytes | Modified: "));
        assert!(status.ends_with(&format_iso_time(metadata.modified_time)));
    }
}
