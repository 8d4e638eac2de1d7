use super::text_edit::LineEdit;
use crate::models::FileMetadata;
use std::path::{Path, PathBuf};

/// 줄 끝 문자
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// 열린 파일의 편집 버퍼
///
/// 파일 전체를 줄 단위로 보관합니다. 줄마다 원래 줄 끝(LF/CRLF)을 기억하므로
/// 줄바꿈이 섞인 파일도 편집하지 않고 저장하면 바이트가 그대로 유지됩니다.
#[derive(Debug, Clone)]
pub struct EditorBuffer {
    /// 파일 경로
    path: PathBuf,
    /// 줄 목록 (항상 1줄 이상)
    lines: Vec<String>,
    /// 줄별 줄 끝 (`lines`와 길이 같음, 마지막 줄은 `trailing_newline`일 때만 씀)
    endings: Vec<LineEnding>,
    /// 커서 줄
    row: usize,
    /// 커서 열 (바이트 인덱스)
    col: usize,
    /// 위/아래 이동 시 유지할 표시 열
    preferred_column: Option<usize>,
    /// 화면 첫 줄
    scroll_row: usize,
    /// 마지막 읽기/저장 이후 변경 여부
    dirty: bool,
    /// UTF-8이 아닌 파일은 읽기 전용
    read_only: bool,
    /// 파일이 줄바꿈으로 끝나는지
    trailing_newline: bool,
    /// 새 줄에 쓸 줄 끝 (파일의 첫 줄 끝을 따름)
    default_ending: LineEnding,
    /// 마지막 읽기 시점 메타데이터
    metadata: FileMetadata,
}

impl EditorBuffer {
    /// 읽은 바이트로 버퍼 생성
    pub fn from_bytes(path: PathBuf, bytes: Vec<u8>, metadata: FileMetadata) -> Self {
        let (text, read_only) = match String::from_utf8(bytes) {
            Ok(text) => (text, false),
            Err(e) => (String::from_utf8_lossy(e.as_bytes()).into_owned(), true),
        };

        let trailing_newline = text.ends_with('\n');
        let body = text.strip_suffix('\n').unwrap_or(&text);

        let mut lines = Vec::new();
        let mut endings = Vec::new();
        let mut pieces = body.split('\n').peekable();
        while let Some(piece) = pieces.next() {
            let terminated = pieces.peek().is_some() || trailing_newline;
            match piece.strip_suffix('\r') {
                Some(line) if terminated => {
                    lines.push(line.to_string());
                    endings.push(LineEnding::CrLf);
                }
                _ => {
                    lines.push(piece.to_string());
                    endings.push(LineEnding::Lf);
                }
            }
        }

        let default_ending = if trailing_newline || lines.len() > 1 {
            endings[0]
        } else {
            LineEnding::Lf
        };

        Self {
            path,
            lines,
            endings,
            row: 0,
            col: 0,
            preferred_column: None,
            scroll_row: 0,
            dirty: false,
            read_only,
            trailing_newline,
            default_ending,
            metadata,
        }
    }

    /// 저장할 전체 내용
    pub fn contents(&self) -> String {
        let last = self.lines.len() - 1;
        let mut text = String::new();
        for (i, (line, ending)) in self.lines.iter().zip(&self.endings).enumerate() {
            text.push_str(line);
            if i < last || self.trailing_newline {
                text.push_str(ending.as_str());
            }
        }
        text
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 파일 이름 (표시용)
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn set_path(&mut self, path: PathBuf) {
        self.path = path;
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// 커서의 화면 열 (전각 문자는 2칸)
    pub fn cursor_display_column(&self) -> usize {
        LineEdit::display_column(&self.lines[self.row], self.col)
    }

    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn metadata(&self) -> &FileMetadata {
        &self.metadata
    }

    /// 저장 완료 후 상태 갱신
    pub fn mark_saved(&mut self, metadata: FileMetadata) {
        self.dirty = false;
        self.metadata = metadata;
    }

    // === 편집 ===

    pub fn insert_char(&mut self, c: char) {
        if self.read_only {
            return;
        }
        let line = &mut self.lines[self.row];
        LineEdit::insert_char(line, &mut self.col, c);
        self.touch();
    }

    /// 탭은 공백으로 삽입
    pub fn insert_tab(&mut self, tab_width: usize) {
        if self.read_only {
            return;
        }
        let spaces = " ".repeat(tab_width.max(1));
        let line = &mut self.lines[self.row];
        LineEdit::insert_str(line, &mut self.col, &spaces);
        self.touch();
    }

    /// 커서 위치에서 줄 나누기
    pub fn insert_newline(&mut self) {
        if self.read_only {
            return;
        }
        let rest = self.lines[self.row].split_off(self.col);
        self.lines.insert(self.row + 1, rest);
        // 나뉜 뒷부분이 원래 줄 끝을 가져감
        self.endings.insert(self.row, self.default_ending);
        self.row += 1;
        self.col = 0;
        self.touch();
    }

    /// 줄 맨 앞에서는 이전 줄과 합침
    pub fn backspace(&mut self) {
        if self.read_only {
            return;
        }
        if LineEdit::backspace(&mut self.lines[self.row], &mut self.col) {
            self.touch();
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            // 합쳐진 줄은 아래 줄의 줄 끝을 가져감
            self.endings.remove(self.row - 1);
            self.row -= 1;
            self.col = self.lines[self.row].len();
            self.lines[self.row].push_str(&current);
            self.touch();
        }
    }

    /// 줄 맨 끝에서는 다음 줄과 합침
    pub fn delete(&mut self) {
        if self.read_only {
            return;
        }
        if LineEdit::delete(&mut self.lines[self.row], self.col) {
            self.touch();
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.endings.remove(self.row);
            self.lines[self.row].push_str(&next);
            self.touch();
        }
    }

    pub fn delete_prev_word(&mut self) {
        if self.read_only || self.col == 0 {
            return;
        }
        LineEdit::delete_prev_word(&mut self.lines[self.row], &mut self.col);
        self.touch();
    }

    // === 커서 이동 ===

    pub fn move_left(&mut self) {
        self.preferred_column = None;
        if !LineEdit::left(&self.lines[self.row], &mut self.col) && self.row > 0 {
            self.row -= 1;
            self.col = self.lines[self.row].len();
        }
    }

    pub fn move_right(&mut self) {
        self.preferred_column = None;
        if !LineEdit::right(&self.lines[self.row], &mut self.col)
            && self.row + 1 < self.lines.len()
        {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        self.move_rows(-1);
    }

    pub fn move_down(&mut self) {
        self.move_rows(1);
    }

    pub fn page_up(&mut self, page: usize) {
        self.move_rows(-(page.max(1) as isize));
    }

    pub fn page_down(&mut self, page: usize) {
        self.move_rows(page.max(1) as isize);
    }

    pub fn home(&mut self) {
        self.preferred_column = None;
        self.col = 0;
    }

    pub fn end(&mut self) {
        self.preferred_column = None;
        self.col = self.lines[self.row].len();
    }

    /// 커서 줄이 보이도록 스크롤 조정
    pub fn ensure_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.row < self.scroll_row {
            self.scroll_row = self.row;
        } else if self.row >= self.scroll_row + height {
            self.scroll_row = self.row + 1 - height;
        }
    }

    fn move_rows(&mut self, delta: isize) {
        let column = self
            .preferred_column
            .unwrap_or_else(|| LineEdit::display_column(&self.lines[self.row], self.col));

        let last = self.lines.len() - 1;
        let target = (self.row as isize + delta).clamp(0, last as isize) as usize;
        if target == self.row {
            return;
        }

        self.row = target;
        self.col = LineEdit::byte_at_column(&self.lines[self.row], column);
        self.preferred_column = Some(column);
    }

    fn touch(&mut self) {
        self.dirty = true;
        self.preferred_column = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;

    fn buffer(text: &str) -> EditorBuffer {
        let metadata = FileMetadata::new(text.len() as u64, SystemTime::now());
        EditorBuffer::from_bytes(
            PathBuf::from("/tmp/test.txt"),
            text.as_bytes().to_vec(),
            metadata,
        )
    }

    #[test]
    fn test_contents_round_trip() {
        for text in ["", "one", "one\n", "one\ntwo", "one\ntwo\n", "a\r\nb\r\n", "\n\n"] {
            assert_eq!(buffer(text).contents(), text, "text: {:?}", text);
        }
    }

    #[test]
    fn test_mixed_line_endings_preserved() {
        for text in ["a\r\nb\nc\n", "a\nb\r\n", "a\r\nb", "x\r", "\r\n\n\r\n"] {
            let buf = buffer(text);
            assert_eq!(buf.contents(), text, "text: {:?}", text);
            assert!(buf.lines().iter().all(|l| !l.contains('\n')));
        }
        assert_eq!(buffer("a\r\nb\nc\n").lines(), ["a", "b", "c"]);
    }

    #[test]
    fn test_edits_keep_neighbouring_line_endings() {
        let mut buf = buffer("a\r\nb\nc\n");
        // "b" 줄 끝에서 Enter: 새 줄은 원래 LF를, "b"는 첫 줄 형식(CRLF)을 씀
        buf.move_down();
        buf.end();
        buf.insert_newline();
        buf.insert_char('x');
        assert_eq!(buf.contents(), "a\r\nb\r\nx\nc\n");

        // 줄 맨 앞 백스페이스로 다시 합치면 원래대로
        buf.backspace();
        buf.backspace();
        assert_eq!(buf.contents(), "a\r\nb\nc\n");

        // 첫 줄 끝 Delete: 합쳐진 줄은 아래 줄의 LF를 씀
        buf.move_up();
        buf.end();
        buf.delete();
        assert_eq!(buf.contents(), "ab\nc\n");
    }

    #[test]
    fn test_insert_and_newline() {
        let mut buf = buffer("hello");
        buf.end();
        buf.insert_char('!');
        buf.home();
        buf.move_right();
        buf.move_right();
        buf.insert_newline();

        assert_eq!(buf.lines(), &["he".to_string(), "llo!".to_string()]);
        assert_eq!(buf.cursor(), (1, 0));
        assert!(buf.is_dirty());
        assert_eq!(buf.contents(), "he\nllo!");
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut buf = buffer("ab\ncd\n");
        buf.move_down();
        buf.home();
        buf.backspace();

        assert_eq!(buf.lines(), &["abcd".to_string()]);
        assert_eq!(buf.cursor(), (0, 2));
        assert_eq!(buf.contents(), "abcd\n");
    }

    #[test]
    fn test_delete_joins_next_line() {
        let mut buf = buffer("ab\ncd");
        buf.end();
        buf.delete();
        assert_eq!(buf.contents(), "abcd");

        // 마지막 줄 끝에서는 변화 없음
        let mut buf = buffer("x");
        buf.end();
        buf.delete();
        assert!(!buf.is_dirty());
    }

    #[test]
    fn test_vertical_movement_keeps_column() {
        let mut buf = buffer("long line\nab\nanother long");
        buf.end();
        buf.move_down();
        assert_eq!(buf.cursor(), (1, 2));
        buf.move_down();
        assert_eq!(buf.cursor(), (2, 9));
        buf.move_up();
        buf.move_up();
        assert_eq!(buf.cursor(), (0, 9));
    }

    #[test]
    fn test_left_right_cross_lines() {
        let mut buf = buffer("ab\ncd");
        buf.end();
        buf.move_right();
        assert_eq!(buf.cursor(), (1, 0));
        buf.move_left();
        assert_eq!(buf.cursor(), (0, 2));
    }

    #[test]
    fn test_non_utf8_is_read_only() {
        let metadata = FileMetadata::new(3, SystemTime::now());
        let mut buf =
            EditorBuffer::from_bytes(PathBuf::from("/tmp/bin"), vec![0xff, b'a', 0xfe], metadata);

        assert!(buf.is_read_only());
        buf.insert_char('x');
        buf.insert_newline();
        buf.backspace();
        assert!(!buf.is_dirty());
    }

    #[test]
    fn test_ensure_visible_scrolls() {
        let text: String = (0..50).map(|i| format!("line {}\n", i)).collect();
        let mut buf = buffer(&text);
        buf.page_down(30);
        buf.ensure_visible(10);
        assert_eq!(buf.cursor().0, 30);
        assert_eq!(buf.scroll_row(), 21);

        buf.page_up(100);
        buf.ensure_visible(10);
        assert_eq!(buf.scroll_row(), 0);
    }

    #[test]
    fn test_insert_tab_and_mark_saved() {
        let mut buf = buffer("x");
        buf.insert_tab(4);
        assert_eq!(buf.contents(), "    x");
        assert!(buf.is_dirty());

        buf.mark_saved(FileMetadata::new(5, SystemTime::now()));
        assert!(!buf.is_dirty());
        assert_eq!(buf.metadata().size_bytes, 5);
    }
}
