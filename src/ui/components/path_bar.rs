// Path bar component - 상단 현재 경로 표시줄

use crate::ui::Theme;
use crate::utils::path_display::display_path;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::path::Path;

/// 경로 표시줄
pub struct PathBar<'a> {
    path: &'a Path,
    home: Option<&'a Path>,
    bg_color: Color,
    fg_color: Color,
}

impl<'a> PathBar<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self {
            path,
            home: None,
            bg_color: Color::Rgb(0, 120, 212),
            fg_color: Color::White,
        }
    }

    /// `~` 축약에 쓸 홈 디렉토리
    pub fn home(mut self, home: Option<&'a Path>) -> Self {
        self.home = home;
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.path_bar_bg.to_color();
        self.fg_color = theme.path_bar_fg.to_color();
        self
    }
}

impl Widget for PathBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().bg(self.bg_color).fg(self.fg_color);
        buf.set_style(area, style);

        let shown = display_path(
            self.path,
            self.home,
            (area.width as usize).saturating_sub(2),
        );
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(shown, style.add_modifier(Modifier::BOLD)),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_bar_shows_home_relative_path() {
        let area = Rect::new(0, 0, 30, 1);
        let mut buf = Buffer::empty(area);
        PathBar::new(Path::new("/home/user/projects"))
            .home(Some(Path::new("/home/user")))
            .render(area, &mut buf);

        let mut line = String::new();
        for x in 0..area.width {
            if let Some(cell) = buf.cell((x, 0)) {
                line.push_str(cell.symbol());
            }
        }
        assert!(line.starts_with(" ~/projects"));
    }
}
