use unicode_width::UnicodeWidthChar;

/// 한 줄 텍스트 편집 헬퍼
///
/// 커서는 항상 UTF-8 문자 경계의 바이트 인덱스입니다.
/// 다이얼로그 입력 필드와 에디터의 각 줄이 함께 사용합니다.
pub(crate) struct LineEdit;

impl LineEdit {
    pub(crate) fn insert_char(value: &mut String, cursor_pos: &mut usize, c: char) {
        value.insert(*cursor_pos, c);
        *cursor_pos += c.len_utf8();
    }

    pub(crate) fn insert_str(value: &mut String, cursor_pos: &mut usize, s: &str) {
        value.insert_str(*cursor_pos, s);
        *cursor_pos += s.len();
    }

    /// 커서 앞 문자 삭제. 삭제했으면 true
    pub(crate) fn backspace(value: &mut String, cursor_pos: &mut usize) -> bool {
        let Some(prev) = Self::prev_boundary(value, *cursor_pos) else {
            return false;
        };
        value.remove(prev);
        *cursor_pos = prev;
        true
    }

    /// 커서 위치 문자 삭제. 삭제했으면 true
    pub(crate) fn delete(value: &mut String, cursor_pos: usize) -> bool {
        if cursor_pos >= value.len() {
            return false;
        }
        value.remove(cursor_pos);
        true
    }

    /// 왼쪽 이동. 줄 맨 앞이면 false
    pub(crate) fn left(value: &str, cursor_pos: &mut usize) -> bool {
        match Self::prev_boundary(value, *cursor_pos) {
            Some(prev) => {
                *cursor_pos = prev;
                true
            }
            None => false,
        }
    }

    /// 오른쪽 이동. 줄 맨 끝이면 false
    pub(crate) fn right(value: &str, cursor_pos: &mut usize) -> bool {
        match value[*cursor_pos..].chars().next() {
            Some(c) => {
                *cursor_pos += c.len_utf8();
                true
            }
            None => false,
        }
    }

    /// 커서 앞의 단어 하나 삭제 (Ctrl+W)
    pub(crate) fn delete_prev_word(value: &mut String, cursor_pos: &mut usize) {
        let head = &value[..*cursor_pos];
        let trimmed = head.trim_end_matches(Self::is_word_delimiter);
        let word_start = trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| Self::is_word_delimiter(*c))
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);

        value.replace_range(word_start..*cursor_pos, "");
        *cursor_pos = word_start;
    }

    /// 바이트 위치까지의 표시 너비 (셀 단위)
    pub(crate) fn display_column(value: &str, cursor_pos: usize) -> usize {
        value[..cursor_pos]
            .chars()
            .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
            .sum()
    }

    /// 표시 너비 기준 열을 바이트 위치로 변환 (위/아래 이동 시 열 유지)
    pub(crate) fn byte_at_column(value: &str, column: usize) -> usize {
        let mut width = 0;
        for (i, c) in value.char_indices() {
            let w = UnicodeWidthChar::width(c).unwrap_or(0);
            if width + w > column {
                return i;
            }
            width += w;
        }
        value.len()
    }

    fn prev_boundary(value: &str, cursor_pos: usize) -> Option<usize> {
        value[..cursor_pos].char_indices().next_back().map(|(i, _)| i)
    }

    fn is_word_delimiter(ch: char) -> bool {
        ch.is_whitespace() || matches!(ch, '/' | '\\' | '.' | '-' | '_' | ',' | ';' | ':')
    }
}

#[cfg(test)]
mod tests {
    use super::LineEdit;

    #[test]
    fn test_insert_backspace_delete_utf8() {
        let mut value = "\u{AC00}\u{B098}".to_string();
        let mut cursor_pos = "\u{AC00}".len();

        LineEdit::insert_char(&mut value, &mut cursor_pos, '\u{B2E4}');
        assert_eq!(value, "\u{AC00}\u{B2E4}\u{B098}");
        assert_eq!(cursor_pos, "\u{AC00}\u{B2E4}".len());

        assert!(LineEdit::backspace(&mut value, &mut cursor_pos));
        assert_eq!(value, "\u{AC00}\u{B098}");
        assert_eq!(cursor_pos, "\u{AC00}".len());

        assert!(LineEdit::delete(&mut value, 0));
        assert_eq!(value, "\u{B098}");

        let mut at_start = 0;
        assert!(!LineEdit::backspace(&mut value, &mut at_start));
        let end = value.len();
        assert!(!LineEdit::delete(&mut value, end));
    }

    #[test]
    fn test_left_right_report_edges() {
        let value = "a\u{AC00}";
        let mut cursor_pos = 0;

        assert!(!LineEdit::left(value, &mut cursor_pos));
        assert!(LineEdit::right(value, &mut cursor_pos));
        assert!(LineEdit::right(value, &mut cursor_pos));
        assert_eq!(cursor_pos, value.len());
        assert!(!LineEdit::right(value, &mut cursor_pos));
        assert!(LineEdit::left(value, &mut cursor_pos));
        assert_eq!(cursor_pos, 1);
    }

    #[test]
    fn test_delete_prev_word() {
        let mut value = "notes/draft v2".to_string();
        let mut cursor_pos = value.len();

        LineEdit::delete_prev_word(&mut value, &mut cursor_pos);
        assert_eq!(value, "notes/draft ");

        LineEdit::delete_prev_word(&mut value, &mut cursor_pos);
        assert_eq!(value, "notes/");
        assert_eq!(cursor_pos, value.len());
    }

    #[test]
    fn test_columns_with_wide_chars() {
        let value = "a\u{D55C}b";
        assert_eq!(LineEdit::display_column(value, value.len()), 4);
        assert_eq!(LineEdit::byte_at_column(value, 1), 1);
        // 넓은 문자 중간 열은 그 문자 시작으로
        assert_eq!(LineEdit::byte_at_column(value, 2), 1);
        assert_eq!(LineEdit::byte_at_column(value, 3), 1 + '\u{D55C}'.len_utf8());
        assert_eq!(LineEdit::byte_at_column(value, 99), value.len());
    }
}
