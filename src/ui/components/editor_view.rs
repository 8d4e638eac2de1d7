// Editor view component - 텍스트 편집 영역
//
// 줄 번호 거터, 커서 셀, 수정/읽기 전용 표시

use crate::app::EditorBuffer;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

const PLACEHOLDER: &str = "Select a file and press Enter to open it";

/// 에디터 뷰 컴포넌트
pub struct EditorView<'a> {
    /// 열린 파일 (없으면 안내 문구)
    buffer: Option<&'a EditorBuffer>,
    focused: bool,
    focused_border_color: Color,
    unfocused_border_color: Color,
    bg_color: Color,
    fg_color: Color,
    line_number_color: Color,
    cursor_bg_color: Color,
    accent_color: Color,
    warning_color: Color,
}

impl Default for EditorView<'_> {
    fn default() -> Self {
        Self {
            buffer: None,
            focused: false,
            focused_border_color: Color::Rgb(0, 120, 212),
            unfocused_border_color: Color::Rgb(60, 60, 60),
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            line_number_color: Color::Rgb(110, 110, 110),
            cursor_bg_color: Color::Rgb(200, 200, 200),
            accent_color: Color::Rgb(0, 120, 212),
            warning_color: Color::Yellow,
        }
    }
}

impl<'a> EditorView<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(mut self, buffer: Option<&'a EditorBuffer>) -> Self {
        self.buffer = buffer;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.focused_border_color = theme.border_focused.to_color();
        self.unfocused_border_color = theme.border_unfocused.to_color();
        self.bg_color = theme.pane_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.line_number_color = theme.line_number.to_color();
        self.cursor_bg_color = theme.editor_cursor_bg.to_color();
        self.accent_color = theme.accent.to_color();
        self.warning_color = theme.warning.to_color();
        self
    }

    fn title(&self) -> Line<'static> {
        let Some(buffer) = self.buffer else {
            return Line::from(" Editor ");
        };

        let mut spans = vec![Span::raw(format!(" {}", buffer.file_name()))];
        if buffer.is_read_only() {
            spans.push(Span::styled(
                " [RO]",
                Style::default().fg(self.warning_color),
            ));
        } else if buffer.is_dirty() {
            spans.push(Span::styled(
                " [+]",
                Style::default()
                    .fg(self.accent_color)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }

    fn render_buffer(&self, buffer: &EditorBuffer, inner: Rect, buf: &mut Buffer) {
        let lines = buffer.lines();
        let gutter_width = lines.len().to_string().len().max(3) + 1;
        if (inner.width as usize) <= gutter_width + 1 {
            return;
        }
        let text_width = inner.width as usize - gutter_width;
        let text_x = inner.x + gutter_width as u16;

        let (cursor_row, _) = buffer.cursor();
        let cursor_column = buffer.cursor_display_column();
        // 커서가 보이도록 가로 스크롤
        let column_offset = (cursor_column + 1).saturating_sub(text_width);

        let number_style = Style::default().fg(self.line_number_color);
        let text_style = Style::default().fg(self.fg_color);

        let start = buffer.scroll_row();
        for (i, line) in lines.iter().skip(start).take(inner.height as usize).enumerate() {
            let y = inner.y + i as u16;
            let number = format!("{:>width$} ", start + i + 1, width = gutter_width - 1);
            buf.set_string(inner.x, y, number, number_style);

            let visible = slice_columns(line, column_offset, text_width);
            buf.set_string(text_x, y, visible, text_style);
        }

        if self.focused && !buffer.is_read_only() && cursor_row >= start {
            let y = inner.y as usize + cursor_row - start;
            if y < (inner.y + inner.height) as usize {
                let x = text_x + (cursor_column - column_offset) as u16;
                if let Some(cell) = buf.cell_mut((x, y as u16)) {
                    cell.set_style(
                        Style::default()
                            .fg(self.bg_color)
                            .bg(self.cursor_bg_color),
                    );
                }
            }
        }
    }
}

impl Widget for EditorView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let border_color = if self.focused {
            self.focused_border_color
        } else {
            self.unfocused_border_color
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(self.title())
            .style(Style::default().bg(self.bg_color));

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        match self.buffer {
            Some(buffer) => self.render_buffer(buffer, inner, buf),
            None => {
                let placeholder = Line::from(Span::styled(
                    format!(" {}", PLACEHOLDER),
                    Style::default().fg(self.line_number_color),
                ));
                buf.set_line(inner.x, inner.y, &placeholder, inner.width);
            }
        }
    }
}

/// 표시 열 [start, start + width) 구간의 문자열
///
/// 경계에 걸친 전각 문자는 제외합니다.
fn slice_columns(line: &str, start: usize, width: usize) -> String {
    let mut result = String::new();
    let mut column = 0;
    for ch in line.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if column >= start && column + ch_width <= start + width {
            result.push(ch);
        }
        column += ch_width;
        if column >= start + width {
            break;
        }
    }
    result
}
