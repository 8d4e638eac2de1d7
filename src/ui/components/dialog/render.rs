use super::DialogKind;
use crate::core::actions::generate_help_entries;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 다이얼로그 내부 좌우 패딩 (border 안쪽 여백)
const DIALOG_H_PADDING: u16 = 2;
/// 다이얼로그 내부 상단 패딩 (border 아래 여백)
const DIALOG_V_PADDING: u16 = 1;

const HELP_HINT: &str = "j/k: Scroll  Esc: Close";

pub struct Dialog<'a> {
    kind: &'a DialogKind,
    bg_color: Color,
    fg_color: Color,
    border_color: Color,
    title_color: Color,
    button_bg: Color,
    button_fg: Color,
    button_selected_bg: Color,
    button_selected_fg: Color,
    input_bg: Color,
    error_color: Color,
    muted_color: Color,
}

impl<'a> Dialog<'a> {
    pub fn new(kind: &'a DialogKind) -> Self {
        Self {
            kind,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::Rgb(212, 212, 212),
            border_color: Color::Rgb(0, 120, 212),
            title_color: Color::Rgb(0, 120, 212),
            button_bg: Color::Rgb(60, 60, 60),
            button_fg: Color::Rgb(212, 212, 212),
            button_selected_bg: Color::Rgb(0, 120, 212),
            button_selected_fg: Color::White,
            input_bg: Color::Rgb(30, 30, 30),
            error_color: Color::Rgb(244, 71, 71),
            muted_color: Color::Rgb(128, 128, 128),
        }
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.pane_bg.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.border_color = theme.border_focused.to_color();
        self.title_color = theme.accent.to_color();
        self.button_bg = theme.command_bar_bg.to_color();
        self.button_fg = theme.fg_primary.to_color();
        self.button_selected_bg = theme.cursor_bg.to_color();
        self.button_selected_fg = theme.cursor_fg.to_color();
        self.input_bg = theme.bg_primary.to_color();
        self.error_color = theme.error.to_color();
        self.muted_color = theme.border_unfocused.to_color();
        self
    }

    /// 다이얼로그 영역 계산 (화면 중앙, 반응형)
    fn calculate_area(&self, screen: Rect) -> Rect {
        let sw = screen.width;
        let sh = screen.height;

        let (width, height) = match self.kind {
            DialogKind::Input { .. } => (56u16.min(sw.saturating_sub(4)).max(30), 7u16),
            DialogKind::Confirm { message, .. } => {
                let w = 50u16.min(sw.saturating_sub(4)).max(30);
                let text_width = w.saturating_sub(DIALOG_H_PADDING * 2).max(1) as usize;
                let lines = wrapped_line_count(message, text_width) as u16;
                (w, (5 + lines).max(7))
            }
            DialogKind::Error { message, .. } | DialogKind::Message { message, .. } => {
                let w = 56u16.min(sw.saturating_sub(4)).max(30);
                let text_width = w.saturating_sub(DIALOG_H_PADDING * 2).max(1) as usize;
                let lines = wrapped_line_count(message, text_width) as u16;
                let h = (5 + lines).min(sh.saturating_sub(4)).max(6);
                (w, h)
            }
            DialogKind::Help { .. } => {
                let w = 60u16.min(sw.saturating_sub(4)).max(36);
                (w, help_dialog_height(sh))
            }
        };

        let width = width.min(sw.saturating_sub(2));
        let height = height.min(sh.saturating_sub(2));

        let x = screen.x + (sw.saturating_sub(width)) / 2;
        let y = screen.y + (sh.saturating_sub(height)) / 2;

        Rect {
            x,
            y,
            width,
            height,
        }
    }

    fn frame(&self, title: &str, accent: Color) -> Block<'static> {
        Block::default()
            .title(format!(" {} ", title))
            .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(self.bg_color))
    }

    fn inner(area: Rect) -> Rect {
        Rect {
            x: area.x + DIALOG_H_PADDING,
            y: area.y + DIALOG_V_PADDING,
            width: area.width.saturating_sub(DIALOG_H_PADDING * 2),
            height: area.height.saturating_sub(DIALOG_V_PADDING * 2),
        }
    }

    /// 버튼 렌더링 헬퍼
    fn render_button(
        &self,
        buf: &mut Buffer,
        x: u16,
        y: u16,
        label: &str,
        is_selected: bool,
    ) -> u16 {
        let (bg, fg) = if is_selected {
            (self.button_selected_bg, self.button_selected_fg)
        } else {
            (self.button_bg, self.button_fg)
        };

        let padded_label = format!(" {} ", label);
        let width = padded_label.width() as u16;
        buf.set_string(x, y, &padded_label, Style::default().fg(fg).bg(bg));
        width
    }

    /// 버튼 두 개를 하단 중앙에 배치
    fn render_button_pair(&self, buf: &mut Buffer, area: Rect, labels: [&str; 2], selected: usize) {
        let button_y = area.y + area.height.saturating_sub(2);
        let buttons_width = (format!(" {} ", labels[0]).width()
            + 2
            + format!(" {} ", labels[1]).width()) as u16;
        let button_x = area.x + (area.width.saturating_sub(buttons_width)) / 2;

        let first_width = self.render_button(buf, button_x, button_y, labels[0], selected == 0);
        self.render_button(
            buf,
            button_x + first_width + 2,
            button_y,
            labels[1],
            selected == 1,
        );
    }

    /// 입력 다이얼로그 렌더링
    #[allow(clippy::too_many_arguments)]
    fn render_input(
        &self,
        buf: &mut Buffer,
        area: Rect,
        title: &str,
        prompt: &str,
        value: &str,
        cursor_pos: usize,
        selected_button: usize,
    ) {
        self.frame(title, self.title_color).render(area, buf);
        let inner = Self::inner(area);

        buf.set_string(inner.x, inner.y, prompt, Style::default().fg(self.fg_color));

        // 입력 필드 배경
        let input_y = inner.y + 1;
        for x in inner.x..inner.x + inner.width {
            if let Some(cell) = buf.cell_mut((x, input_y)) {
                cell.set_bg(self.input_bg);
            }
        }

        // cursor_pos는 바이트 인덱스, 화면 표시는 display width 기반
        let max_display = (inner.width as usize).saturating_sub(2);
        let cursor_col: usize = value[..cursor_pos]
            .chars()
            .map(|c| c.width().unwrap_or(0))
            .sum();

        // 커서가 보이도록 앞부분을 건너뜀
        let mut start_byte = 0;
        let mut skipped = 0;
        if cursor_col >= max_display {
            let target = cursor_col + 1 - max_display;
            for (i, c) in value.char_indices() {
                if skipped >= target {
                    start_byte = i;
                    break;
                }
                skipped += c.width().unwrap_or(0);
                start_byte = i + c.len_utf8();
            }
        }
        let display_value = &value[start_byte..];
        let value_style = Style::default().fg(self.fg_color).bg(self.input_bg);
        buf.set_stringn(inner.x + 1, input_y, display_value, max_display, value_style);

        // 커서 표시
        let cursor_x = inner.x + 1 + (cursor_col - skipped) as u16;
        if cursor_x < inner.x + inner.width.saturating_sub(1) {
            if let Some(cell) = buf.cell_mut((cursor_x, input_y)) {
                if cursor_pos < value.len() {
                    cell.set_style(Style::default().fg(self.input_bg).bg(self.fg_color));
                } else {
                    cell.set_char('▏');
                    cell.set_style(Style::default().fg(self.fg_color).bg(self.input_bg));
                }
            }
        }

        self.render_button_pair(buf, area, ["OK", "Cancel"], selected_button);
    }

    /// 확인 다이얼로그 렌더링
    fn render_confirm(
        &self,
        buf: &mut Buffer,
        area: Rect,
        title: &str,
        message: &str,
        selected_button: usize,
    ) {
        self.frame(title, self.title_color).render(area, buf);
        let inner = Self::inner(area);

        let msg_area = Rect {
            height: inner.height.saturating_sub(2),
            ..inner
        };
        Paragraph::new(message)
            .style(Style::default().fg(self.fg_color))
            .wrap(Wrap { trim: true })
            .render(msg_area, buf);

        self.render_button_pair(buf, area, ["Yes", "No"], selected_button);
    }

    /// 에러/메시지 다이얼로그 렌더링
    fn render_message(
        &self,
        buf: &mut Buffer,
        area: Rect,
        title: &str,
        message: &str,
        is_error: bool,
    ) {
        let accent = if is_error {
            self.error_color
        } else {
            self.title_color
        };
        self.frame(title, accent).render(area, buf);

        let inner = Rect {
            height: area.height.saturating_sub(DIALOG_V_PADDING + 3),
            ..Self::inner(area)
        };
        Paragraph::new(message)
            .style(Style::default().fg(self.fg_color))
            .wrap(Wrap { trim: true })
            .render(inner, buf);

        let button_y = area.y + area.height.saturating_sub(2);
        let button_width = " OK ".width() as u16;
        let button_x = area.x + (area.width.saturating_sub(button_width)) / 2;
        self.render_button(buf, button_x, button_y, "OK", true);
    }

    /// 단축키 도움말 렌더링
    fn render_help(&self, buf: &mut Buffer, area: Rect, scroll_offset: usize) {
        self.frame("Keyboard Shortcuts", self.title_color)
            .render(area, buf);

        let inner = Rect {
            height: area.height.saturating_sub(4), // 하단 힌트 공간
            ..Self::inner(area)
        };

        let rows = help_rows();

        let header_style = Style::default()
            .fg(self.title_color)
            .add_modifier(Modifier::BOLD);
        let key_style = Style::default().fg(self.title_color);
        let desc_style = Style::default().fg(self.fg_color);
        let key_col_width = 16u16;

        let visible_height = inner.height as usize;
        let effective_scroll = rows.len().saturating_sub(visible_height).min(scroll_offset);

        for (i, (is_header, key, desc)) in rows
            .iter()
            .skip(effective_scroll)
            .take(visible_height)
            .enumerate()
        {
            let y = inner.y + i as u16;
            if *is_header {
                buf.set_string(inner.x, y, key, header_style);
            } else if !key.is_empty() {
                buf.set_string(inner.x + 2, y, key, key_style);
                buf.set_stringn(
                    inner.x + key_col_width,
                    y,
                    desc,
                    inner.width.saturating_sub(key_col_width) as usize,
                    desc_style,
                );
            }
        }

        let hint_x = area.x + (area.width.saturating_sub(HELP_HINT.width() as u16)) / 2;
        let hint_y = area.y + area.height.saturating_sub(2);
        buf.set_string(hint_x, hint_y, HELP_HINT, Style::default().fg(self.muted_color));
    }
}

/// 도움말 행 목록 (is_header, 단축키, 설명)
fn help_rows() -> Vec<(bool, &'static str, &'static str)> {
    let mut rows = Vec::new();
    for (category, items) in generate_help_entries() {
        if !rows.is_empty() {
            rows.push((false, "", ""));
        }
        rows.push((true, category, ""));
        rows.extend(items.into_iter().map(|(key, desc)| (false, key, desc)));
    }
    rows
}

fn help_dialog_height(screen_height: u16) -> u16 {
    screen_height.saturating_sub(4).max(10)
}

/// 화면 높이 기준 도움말 최대 스크롤 위치
pub fn help_max_scroll(screen_height: u16) -> usize {
    let height = help_dialog_height(screen_height).min(screen_height.saturating_sub(2));
    let visible = height.saturating_sub(4) as usize;
    help_rows().len().saturating_sub(visible)
}

/// 단어 단위 줄바꿈 후 대략적인 줄 수
fn wrapped_line_count(message: &str, width: usize) -> usize {
    message
        .lines()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum::<usize>()
        .max(1)
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dialog_area = self.calculate_area(area);
        if dialog_area.width < 6 || dialog_area.height < 4 {
            return;
        }

        // 배경 클리어
        Clear.render(dialog_area, buf);

        match self.kind {
            DialogKind::Input {
                title,
                prompt,
                value,
                cursor_pos,
                selected_button,
                ..
            } => {
                self.render_input(
                    buf,
                    dialog_area,
                    title,
                    prompt,
                    value,
                    *cursor_pos,
                    *selected_button,
                );
            }
            DialogKind::Confirm {
                title,
                message,
                selected_button,
                ..
            } => {
                self.render_confirm(buf, dialog_area, title, message, *selected_button);
            }
            DialogKind::Error { title, message } => {
                self.render_message(buf, dialog_area, title, message, true);
            }
            DialogKind::Message { title, message } => {
                self.render_message(buf, dialog_area, title, message, false);
            }
            DialogKind::Help { scroll_offset } => {
                self.render_help(buf, dialog_area, *scroll_offset);
            }
        }
    }
}
