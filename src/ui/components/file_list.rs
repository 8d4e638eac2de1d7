// File list component - 엔트리 목록 컴포넌트
//
// 현재 디렉토리의 엔트리 표시, 커서 하이라이트, 스크롤바

use crate::models::DirectoryEntry;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use serde::{Deserialize, Serialize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 아이콘 표시 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconMode {
    /// `[D]` / `[F]` 텍스트 마커 (기본)
    #[default]
    Ascii,
    /// 이모지 아이콘
    Emoji,
}

/// 엔트리 목록 컴포넌트
pub struct FileList<'a> {
    entries: &'a [DirectoryEntry],
    /// 커서 위치
    selected_index: usize,
    scroll_offset: usize,
    focused: bool,
    icon_mode: IconMode,
    focused_border_color: Color,
    unfocused_border_color: Color,
    bg_color: Color,
    file_color: Color,
    directory_color: Color,
    cursor_fg_color: Color,
    cursor_bg_color: Color,
}

impl Default for FileList<'_> {
    fn default() -> Self {
        Self {
            entries: &[],
            selected_index: 0,
            scroll_offset: 0,
            focused: true,
            icon_mode: IconMode::default(),
            focused_border_color: Color::Rgb(0, 120, 212),
            unfocused_border_color: Color::Rgb(60, 60, 60),
            bg_color: Color::Rgb(30, 30, 30),
            file_color: Color::Rgb(212, 212, 212),
            directory_color: Color::Rgb(86, 156, 214),
            cursor_fg_color: Color::Rgb(255, 255, 255),
            cursor_bg_color: Color::Rgb(38, 79, 120),
        }
    }
}

impl<'a> FileList<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(mut self, entries: &'a [DirectoryEntry]) -> Self {
        self.entries = entries;
        self
    }

    pub fn selected_index(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn icon_mode(mut self, mode: IconMode) -> Self {
        self.icon_mode = mode;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.focused_border_color = theme.border_focused.to_color();
        self.unfocused_border_color = theme.border_unfocused.to_color();
        self.bg_color = theme.pane_bg.to_color();
        self.file_color = theme.file_normal.to_color();
        self.directory_color = theme.directory.to_color();
        self.cursor_fg_color = theme.cursor_fg.to_color();
        self.cursor_bg_color = theme.cursor_bg.to_color();
        self
    }

    fn marker(&self, entry: &DirectoryEntry) -> &'static str {
        match (self.icon_mode, entry.is_directory) {
            (IconMode::Ascii, true) => "[D]",
            (IconMode::Ascii, false) => "[F]",
            (IconMode::Emoji, true) => "📁",
            (IconMode::Emoji, false) => "📄",
        }
    }

    fn render_entry(&self, entry: &DirectoryEntry, is_cursor: bool, row: Rect, buf: &mut Buffer) {
        let fg = if is_cursor {
            self.cursor_fg_color
        } else if entry.is_directory {
            self.directory_color
        } else {
            self.file_color
        };
        let mut style = Style::default().fg(fg);
        if is_cursor {
            style = style.bg(self.cursor_bg_color);
            if self.focused {
                style = style.add_modifier(Modifier::BOLD);
            }
        }

        let marker = format!("{} ", self.marker(entry));
        let name_width = (row.width as usize).saturating_sub(marker.width() + 1);
        let name = truncate_name(&entry.name, name_width);
        let padding = (row.width as usize).saturating_sub(1 + marker.width() + name.width());

        let line = Line::from(vec![
            Span::styled(" ", style),
            Span::styled(marker, style),
            Span::styled(name, style),
            Span::styled(" ".repeat(padding), style),
        ]);
        buf.set_line(row.x, row.y, &line, row.width);
    }

    fn render_scrollbar(&self, inner: Rect, buf: &mut Buffer) {
        let track_height = inner.height as usize;
        let total_items = self.entries.len();
        let thumb_height = (track_height * track_height / total_items).max(1);
        let max_scroll = total_items.saturating_sub(track_height);
        let thumb_pos = if max_scroll == 0 {
            0
        } else {
            self.scroll_offset.min(max_scroll) * track_height.saturating_sub(thumb_height)
                / max_scroll
        };

        let scrollbar_x = inner.x + inner.width - 1;
        let track_style = Style::default().fg(Color::Rgb(60, 60, 60));
        let thumb_style = Style::default().fg(Color::Rgb(150, 150, 150));

        for i in 0..track_height {
            let (symbol, style) = if i >= thumb_pos && i < thumb_pos + thumb_height {
                ("┃", thumb_style)
            } else {
                ("│", track_style)
            };
            buf.set_string(scrollbar_x, inner.y + i as u16, symbol, style);
        }
    }
}

impl Widget for FileList<'_> {
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
            .title(" Entries ")
            .style(Style::default().bg(self.bg_color));

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width < 2 || inner.height == 0 {
            return;
        }

        if self.entries.is_empty() {
            let empty = Line::from(Span::styled(
                " (Empty directory)",
                Style::default().fg(Color::Rgb(100, 100, 100)),
            ));
            buf.set_line(inner.x, inner.y, &empty, inner.width);
            return;
        }

        let visible = inner.height as usize;
        let has_scrollbar = self.entries.len() > visible;
        let row_width = if has_scrollbar {
            inner.width - 1
        } else {
            inner.width
        };

        let start = self.scroll_offset.min(self.entries.len());
        let end = (start + visible).min(self.entries.len());
        for (i, entry) in self.entries[start..end].iter().enumerate() {
            let row = Rect::new(inner.x, inner.y + i as u16, row_width, 1);
            self.render_entry(entry, start + i == self.selected_index, row, buf);
        }

        if has_scrollbar {
            self.render_scrollbar(inner, buf);
        }
    }
}

/// 파일명을 최대 너비로 잘라냄 (확장자 보존)
///
/// 중간 생략 방식: "very_long_fi...ated.txt"
/// 확장자가 없거나 숨김 파일(.bashrc)이면 끝에서 자릅니다.
pub fn truncate_name(name: &str, max_width: usize) -> String {
    if name.width() <= max_width {
        return name.to_string();
    }

    const ELLIPSIS: &str = "...";
    let ellipsis_width = ELLIPSIS.len();

    let (stem, ext) = match name.rfind('.') {
        Some(dot_pos) if dot_pos > 0 => (&name[..dot_pos], &name[dot_pos..]),
        _ => (name, ""),
    };

    if ext.is_empty() || ellipsis_width + ext.width() >= max_width {
        let mut truncated = String::new();
        let mut current_width = 0;
        for ch in name.chars() {
            let ch_width = ch.width().unwrap_or(1);
            if current_width + ch_width + ellipsis_width > max_width {
                break;
            }
            truncated.push(ch);
            current_width += ch_width;
        }
        if max_width >= ellipsis_width {
            truncated.push_str(ELLIPSIS);
        }
        return truncated;
    }

    let available_stem_width = max_width - ellipsis_width - ext.width();
    let mut truncated = String::new();
    let mut current_width = 0;
    for ch in stem.chars() {
        let ch_width = ch.width().unwrap_or(1);
        if current_width + ch_width > available_stem_width {
            break;
        }
        truncated.push(ch);
        current_width += ch_width;
    }
    truncated.push_str(ELLIPSIS);
    truncated.push_str(ext);
    truncated
}
