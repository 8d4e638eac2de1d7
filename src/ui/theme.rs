use crate::utils::error::{DirpadError, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

/// 색상 테마
///
/// TOML 파일에서 테마를 로드하거나 미리 정의된 테마를 사용할 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,

    // 영역 테두리
    pub border_focused: ColorDef,
    pub border_unfocused: ColorDef,
    pub pane_bg: ColorDef,

    // 엔트리 목록
    pub file_normal: ColorDef,
    pub directory: ColorDef,
    pub cursor_fg: ColorDef,
    pub cursor_bg: ColorDef,

    // 에디터
    pub line_number: ColorDef,
    pub editor_cursor_bg: ColorDef,

    // 바
    pub path_bar_bg: ColorDef,
    pub path_bar_fg: ColorDef,
    pub status_bar_bg: ColorDef,
    pub status_bar_fg: ColorDef,
    pub command_bar_bg: ColorDef,
    pub command_bar_fg: ColorDef,

    // 강조
    pub accent: ColorDef,
    pub warning: ColorDef,
    pub error: ColorDef,
    pub success: ColorDef,
}

/// 색상 정의 (TOML 직렬화/역직렬화 지원)
///
/// Hex 문자열("#1e1e1e") 또는 색상 이름("Red")을 지원합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Hex(String),
    Named(String),
}

impl ColorDef {
    pub fn to_color(&self) -> Color {
        match self {
            ColorDef::Hex(hex) => parse_hex_color(hex),
            ColorDef::Named(name) => parse_named_color(name),
        }
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        if s.starts_with('#') {
            ColorDef::Hex(s.to_string())
        } else {
            ColorDef::Named(s.to_string())
        }
    }
}

/// Hex 색상 문자열을 Color로 파싱
fn parse_hex_color(hex: &str) -> Color {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 && hex.is_ascii() {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color::Rgb(r, g, b)
    } else {
        Color::Reset
    }
}

/// 색상 이름을 Color로 파싱
fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => Color::Reset,
    }
}

impl Theme {
    /// Dark 테마 (기본)
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#1e1e1e".into(),
            fg_primary: "#d4d4d4".into(),

            border_focused: "#0078d4".into(),
            border_unfocused: "#3c3c3c".into(),
            pane_bg: "#1e1e1e".into(),

            file_normal: "#d4d4d4".into(),
            directory: "#569cd6".into(),
            cursor_fg: "#ffffff".into(),
            cursor_bg: "#0078d4".into(),

            line_number: "#858585".into(),
            editor_cursor_bg: "#d4d4d4".into(),

            path_bar_bg: "#2d2d30".into(),
            path_bar_fg: "#ffffff".into(),
            status_bar_bg: "#007acc".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#2d2d30".into(),
            command_bar_fg: "#cccccc".into(),

            accent: "#0078d4".into(),
            warning: "#ffa500".into(),
            error: "#f44747".into(),
            success: "#4ec9b0".into(),
        }
    }

    /// Light 테마
    pub fn light() -> Self {
        Theme {
            bg_primary: "#ffffff".into(),
            fg_primary: "#1e1e1e".into(),

            border_focused: "#0078d4".into(),
            border_unfocused: "#cccccc".into(),
            pane_bg: "#ffffff".into(),

            file_normal: "#1e1e1e".into(),
            directory: "#0066cc".into(),
            cursor_fg: "#000000".into(),
            cursor_bg: "#add6ff".into(),

            line_number: "#999999".into(),
            editor_cursor_bg: "#1e1e1e".into(),

            path_bar_bg: "#0078d4".into(),
            path_bar_fg: "#ffffff".into(),
            status_bar_bg: "#0078d4".into(),
            status_bar_fg: "#ffffff".into(),
            command_bar_bg: "#f3f3f3".into(),
            command_bar_fg: "#1e1e1e".into(),

            accent: "#0078d4".into(),
            warning: "#ff8c00".into(),
            error: "#e51400".into(),
            success: "#107c10".into(),
        }
    }

    /// High Contrast 테마
    pub fn high_contrast() -> Self {
        Theme {
            bg_primary: "#000000".into(),
            fg_primary: "#ffffff".into(),

            border_focused: "#00ff00".into(),
            border_unfocused: "#808080".into(),
            pane_bg: "#000000".into(),

            file_normal: "#ffffff".into(),
            directory: "#00ffff".into(),
            cursor_fg: "#000000".into(),
            cursor_bg: "#00ff00".into(),

            line_number: "#ffff00".into(),
            editor_cursor_bg: "#00ff00".into(),

            path_bar_bg: "#000000".into(),
            path_bar_fg: "#00ff00".into(),
            status_bar_bg: "#000000".into(),
            status_bar_fg: "#00ff00".into(),
            command_bar_bg: "#000000".into(),
            command_bar_fg: "#ffffff".into(),

            accent: "#00ff00".into(),
            warning: "#ffff00".into(),
            error: "#ff0000".into(),
            success: "#00ff00".into(),
        }
    }

    /// TOML 파일에서 테마 로드
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let theme: Theme = toml::from_str(&content)?;
        Ok(theme)
    }
}

/// 테마 관리자
pub struct ThemeManager {
    current_name: String,
    current_theme: Theme,
    available_themes: Vec<(String, Theme)>,
}

impl ThemeManager {
    /// 기본 테마 관리자 생성 (Dark 테마)
    pub fn new() -> Self {
        Self {
            current_name: "dark".to_string(),
            current_theme: Theme::dark(),
            available_themes: vec![
                ("dark".to_string(), Theme::dark()),
                ("light".to_string(), Theme::light()),
                ("high_contrast".to_string(), Theme::high_contrast()),
            ],
        }
    }

    pub fn current(&self) -> &Theme {
        &self.current_theme
    }

    pub fn current_name(&self) -> &str {
        &self.current_name
    }

    /// 테마 전환 (이름으로)
    pub fn switch_theme(&mut self, name: &str) -> Result<()> {
        let Some((found, theme)) = self.available_themes.iter().find(|(n, _)| n == name) else {
            return Err(DirpadError::Config(format!("unknown theme: {}", name)));
        };
        self.current_name = found.clone();
        self.current_theme = theme.clone();
        Ok(())
    }

    pub fn available_themes(&self) -> Vec<String> {
        self.available_themes
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// 커스텀 테마 추가 (같은 이름이면 교체)
    pub fn add_theme(&mut self, name: String, theme: Theme) {
        if let Some(slot) = self.available_themes.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = theme;
        } else {
            self.available_themes.push((name, theme));
        }
    }

    /// 디렉토리의 `*.toml` 테마 파일 로드
    ///
    /// 파싱에 실패한 파일은 건너뜁니다. 반환값: 로드된 테마 수
    pub fn load_themes_from_dir(&mut self, themes_dir: &Path) -> anyhow::Result<usize> {
        if !themes_dir.is_dir() {
            return Ok(0);
        }

        let mut loaded = 0;
        for entry in fs::read_dir(themes_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                continue;
            }

            match Theme::from_file(&path) {
                Ok(theme) => {
                    let name = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("custom")
                        .to_string();
                    self.add_theme(name, theme);
                    loaded += 1;
                }
                Err(e) => warn!(path = %path.display(), error = %e, "skipped theme file"),
            }
        }

        Ok(loaded)
    }

    /// 설정 디렉토리(`<config_dir>/dirpad/themes`)에서 테마 파일 로드
    pub fn load_themes_from_config_dir(&mut self) -> anyhow::Result<usize> {
        match dirs::config_dir() {
            Some(config_dir) => self.load_themes_from_dir(&config_dir.join("dirpad").join("themes")),
            None => Ok(0),
        }
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_themes() {
        assert_eq!(Theme::dark().bg_primary.to_color(), Color::Rgb(30, 30, 30));
        assert_eq!(
            Theme::light().bg_primary.to_color(),
            Color::Rgb(255, 255, 255)
        );
        assert_eq!(
            Theme::high_contrast().bg_primary.to_color(),
            Color::Rgb(0, 0, 0)
        );
    }

    #[test]
    fn test_color_parsing() {
        assert_eq!(parse_hex_color("#1e1e1e"), Color::Rgb(30, 30, 30));
        assert_eq!(parse_hex_color("#123"), Color::Reset);
        assert_eq!(parse_named_color("red"), Color::Red);
        assert_eq!(parse_named_color("DarkGray"), Color::DarkGray);
        assert_eq!(parse_named_color("nope"), Color::Reset);
    }

    #[test]
    fn test_theme_switching() {
        let mut manager = ThemeManager::new();
        assert_eq!(manager.current_name(), "dark");
        assert_eq!(manager.available_themes().len(), 3);

        assert!(manager.switch_theme("light").is_ok());
        assert_eq!(manager.current_name(), "light");
        assert_eq!(
            manager.current().bg_primary.to_color(),
            Color::Rgb(255, 255, 255)
        );

        assert!(matches!(
            manager.switch_theme("missing"),
            Err(DirpadError::Config(_))
        ));
        assert_eq!(manager.current_name(), "light");
    }

    #[test]
    fn test_load_themes_from_dir() {
        let temp = TempDir::new().unwrap();
        let custom = toml::to_string_pretty(&Theme::high_contrast()).unwrap();
        fs::write(temp.path().join("solar.toml"), custom).unwrap();
        fs::write(temp.path().join("broken.toml"), "not = [valid").unwrap();
        fs::write(temp.path().join("notes.txt"), "ignored").unwrap();

        let mut manager = ThemeManager::new();
        let loaded = manager.load_themes_from_dir(temp.path()).unwrap();

        assert_eq!(loaded, 1);
        assert!(manager.available_themes().contains(&"solar".to_string()));
        assert!(manager.switch_theme("solar").is_ok());
    }

    #[test]
    fn test_missing_themes_dir_is_empty() {
        let temp = TempDir::new().unwrap();
        let mut manager = ThemeManager::new();
        assert_eq!(
            manager
                .load_themes_from_dir(&temp.path().join("none"))
                .unwrap(),
            0
        );
    }
}
