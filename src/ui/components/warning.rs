// Warning screen component - 경고 화면 컴포넌트
//
// 터미널이 최소 크기보다 작을 때 전체 화면 대신 표시

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::Theme;

/// 경고 화면 컴포넌트
pub struct WarningScreen {
    /// 현재 터미널 크기
    current_size: (u16, u16),
    warning_color: Color,
    bg_color: Color,
    fg_color: Color,
    error_color: Color,
    success_color: Color,
}

impl Default for WarningScreen {
    fn default() -> Self {
        Self {
            current_size: (0, 0),
            warning_color: Color::Yellow,
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            error_color: Color::Red,
            success_color: Color::Green,
        }
    }
}

impl WarningScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_size(mut self, width: u16, height: u16) -> Self {
        self.current_size = (width, height);
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.warning_color = theme.warning.to_color();
        self.bg_color = theme.bg_primary.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.error_color = theme.error.to_color();
        self.success_color = theme.success.to_color();
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
        let (width, height) = self.current_size;

        vec![
            Line::from(Span::styled("Terminal Too Small", bold(self.warning_color))),
            Line::from(""),
            Line::from(vec![
                Span::styled("Current: ", Style::default().fg(self.fg_color)),
                Span::styled(format!("{}x{}", width, height), bold(self.error_color)),
            ]),
            Line::from(vec![
                Span::styled("Required: ", Style::default().fg(self.fg_color)),
                Span::styled(
                    format!("{}x{}", MIN_WIDTH, MIN_HEIGHT),
                    bold(self.success_color),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Resize the terminal or press q to quit",
                Style::default().fg(self.fg_color).add_modifier(Modifier::DIM),
            )),
        ]
    }
}

impl Widget for WarningScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.warning_color))
            .style(Style::default().bg(self.bg_color));

        Paragraph::new(self.lines())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_shows_sizes() {
        let area = Rect::new(0, 0, 36, 10);
        let mut buf = Buffer::empty(area);
        WarningScreen::new().current_size(36, 10).render(area, &mut buf);

        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                if let Some(cell) = buf.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        assert!(text.contains("36x10"));
        assert!(text.contains("40x12"));
    }
}
