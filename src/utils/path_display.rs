use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// 문자열을 최대 너비에 맞춰 중간 생략
pub fn truncate_middle(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width < ELLIPSIS.width() + 2 {
        return take_prefix(text, max_width);
    }

    let budget = max_width - ELLIPSIS.width();
    let head = take_prefix(text, budget - budget / 2);
    let tail = take_suffix(text, budget / 2);
    format!("{}{}{}", head, ELLIPSIS, tail)
}

/// 경로 표시줄용 축약
///
/// 홈 디렉토리는 `~`로 바꾸고, 그래도 길면 앞부분을 `...`로 줄여
/// 현재 디렉토리 이름이 항상 보이게 합니다.
pub fn display_path(path: &Path, home: Option<&Path>, max_width: usize) -> String {
    let text = match home.and_then(|h| path.strip_prefix(h).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => format!("~/{}", rest.display()),
        None => path.display().to_string(),
    };

    if text.width() <= max_width {
        return text;
    }
    if max_width <= ELLIPSIS.width() {
        return take_suffix(&text, max_width);
    }
    format!(
        "{}{}",
        ELLIPSIS,
        take_suffix(&text, max_width - ELLIPSIS.width())
    )
}

fn take_prefix(text: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

fn take_suffix(text: &str, max_width: usize) -> String {
    let mut start = text.len();
    let mut width = 0;
    for (i, ch) in text.char_indices().rev() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        start = i;
        width += ch_width;
    }
    text[start..].to_string()
}
