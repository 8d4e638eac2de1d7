// Status bar component - 상태바 컴포넌트
//
// 왼쪽: 상태 문구 (열린 파일 정보 또는 작업 결과), 오른쪽: 엔트리 개수

use crate::ui::Theme;
use crate::utils::formatter::pluralize;
use crate::utils::path_display::truncate_middle;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 상태 문구 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Info,
    Success,
    Error,
}

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    /// 왼쪽 상태 문구
    message: &'a str,
    kind: StatusKind,
    file_count: usize,
    dir_count: usize,
    bg_color: Color,
    fg_color: Color,
    success_color: Color,
    error_color: Color,
}

impl Default for StatusBar<'_> {
    fn default() -> Self {
        Self {
            message: "",
            kind: StatusKind::Info,
            file_count: 0,
            dir_count: 0,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            success_color: Color::Green,
            error_color: Color::Red,
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(mut self, message: &'a str, kind: StatusKind) -> Self {
        self.message = message;
        self.kind = kind;
        self
    }

    /// 파일/디렉토리 개수 설정
    pub fn counts(mut self, file_count: usize, dir_count: usize) -> Self {
        self.file_count = file_count;
        self.dir_count = dir_count;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.success_color = theme.success.to_color();
        self.error_color = theme.error.to_color();
        self
    }

    fn counts_text(&self) -> String {
        format!(
            "{}, {} ",
            pluralize(self.file_count, "file", "files"),
            pluralize(self.dir_count, "dir", "dirs")
        )
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let right_info = self.counts_text();
        let width = area.width as usize;
        let message_room = width.saturating_sub(right_info.width() + 2);
        let left_info = format!(" {}", truncate_middle(self.message, message_room));

        let message_color = match self.kind {
            StatusKind::Info => self.fg_color,
            StatusKind::Success => self.success_color,
            StatusKind::Error => self.error_color,
        };

        let padding_len = width.saturating_sub(left_info.width() + right_info.width());

        let spans = vec![
            Span::styled(left_info, Style::default().fg(message_color)),
            Span::raw(" ".repeat(padding_len)),
            Span::styled(right_info, Style::default().fg(self.fg_color)),
        ];

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer) -> String {
        let mut line = String::new();
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, 0)) {
                line.push_str(cell.symbol());
            }
        }
        line
    }

    #[test]
    fn test_status_bar_layout() {
        let area = Rect::new(0, 0, 50, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new()
            .message("Saved notes.txt", StatusKind::Success)
            .counts(1, 3)
            .render(area, &mut buf);

        let text = row_text(&buf);
        assert!(text.starts_with(" Saved notes.txt"));
        assert!(text.ends_with("1 file, 3 dirs "));
    }

    #[test]
    fn test_long_message_is_truncated() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        let message = "Current File: a-very-long-file-name.txt | Size: 12345 bytes";
        StatusBar::new()
            .message(message, StatusKind::Info)
            .counts(10, 2)
            .render(area, &mut buf);

        let text = row_text(&buf);
        assert!(text.contains("..."));
        assert!(text.ends_with("10 files, 2 dirs "));
    }
}
