mod app;
mod config;
mod core;
mod logging;
mod models;
mod system;
mod ui;
mod utils;

use app::App;
use clap::Parser;
use config::Config;
use core::actions::{find_action, generate_command_bar_items};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use ui::components::{
    CommandBar, Dialog, DialogKind, EditorView, FileList, PathBar, StatusBar, WarningScreen,
};
use ui::{FocusPane, LayoutMode, ThemeManager};
use utils::error::Result;

/// 터미널 디렉토리 탐색기 + 텍스트 편집기
#[derive(Parser, Debug)]
#[command(name = "dirpad", version, about)]
struct Cli {
    /// 시작 디렉토리 (기본: 설정값 또는 현재 디렉토리)
    dir: Option<PathBuf>,

    /// 설정 파일 경로 (기본: <config_dir>/dirpad/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let log_path = logging::init(&config);
    info!(log = ?log_path, "dirpad starting");

    let theme_manager = build_theme_manager(&config);
    let start_dir = resolve_start_dir(cli.dir, &config);

    // 시작 디렉토리 오류는 터미널을 잡기 전에 보고
    let mut app = App::new(&config, &start_dir, theme_manager)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        warn!(error = %err, "event loop aborted");
        eprintln!("Error: {}", err);
    }

    info!("dirpad exiting");
    Ok(())
}

/// 내장 테마 + 사용자 테마 로드 후 설정된 테마 선택
fn build_theme_manager(config: &Config) -> ThemeManager {
    let mut theme_manager = ThemeManager::new();
    if let Err(e) = theme_manager.load_themes_from_config_dir() {
        warn!(error = %e, "failed to load user themes");
    }
    if let Err(e) = theme_manager.switch_theme(&config.theme) {
        warn!(
            error = %e,
            available = ?theme_manager.available_themes(),
            "falling back to default theme"
        );
    }
    info!(theme = theme_manager.current_name(), "theme selected");
    theme_manager
}

/// 시작 디렉토리: CLI 인자 > 설정 > 현재 디렉토리 > 루트
fn resolve_start_dir(cli_dir: Option<PathBuf>, config: &Config) -> PathBuf {
    cli_dir
        .or_else(|| config.start_dir.clone())
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| Path::new("/").to_path_buf())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();

            // 레이아웃 업데이트
            app.layout.update(size);

            match app.layout.mode() {
                LayoutMode::TooSmall => {
                    let (width, height) = app.layout.terminal_size();
                    let warning = WarningScreen::new()
                        .current_size(width, height)
                        .theme(app.theme_manager.current());
                    f.render_widget(warning, size);
                }
                LayoutMode::Split => {
                    render_main_ui(f, app);
                }
            }
        })?;

        // 토스트 만료 확인을 위해 주기적으로 깨어남
        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key.modifiers, key.code);
                }
            }
        }

        app.clear_expired_toast();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 키 입력 분기 (경고 화면 / 다이얼로그 / 일반)
fn handle_key(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    if app.layout_mode() == LayoutMode::TooSmall {
        // 경고 화면에서는 종료만 허용
        if matches!(code, KeyCode::Char('q') | KeyCode::F(10))
            || (modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c'))
        {
            app.quit();
        }
        return;
    }

    if app.is_dialog_active() {
        handle_dialog_keys(app, modifiers, code);
        return;
    }

    // 액션 테이블 우선 (에디터 포커스에서는 Esc와 전역 키만 등록됨)
    if let Some(action) = find_action(app.focus(), modifiers, code) {
        app.execute_action(action);
        return;
    }

    if app.focus() == FocusPane::Editor {
        handle_editor_keys(app, modifiers, code);
    }
}

/// 에디터 포커스 키 처리
fn handle_editor_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    let tab_width = app.tab_width;
    match (modifiers, code) {
        (KeyModifiers::CONTROL, KeyCode::Char('w')) => app.edit_with(|b, _| b.delete_prev_word()),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.edit_with(|b, _| b.insert_char(c));
        }
        (_, KeyCode::Tab) => app.edit_with(|b, _| b.insert_tab(tab_width)),
        (_, KeyCode::Enter) => app.edit_with(|b, _| b.insert_newline()),
        (_, KeyCode::Backspace) => app.edit_with(|b, _| b.backspace()),
        (_, KeyCode::Delete) => app.edit_with(|b, _| b.delete()),
        (_, KeyCode::Left) => app.edit_with(|b, _| b.move_left()),
        (_, KeyCode::Right) => app.edit_with(|b, _| b.move_right()),
        (_, KeyCode::Up) => app.edit_with(|b, _| b.move_up()),
        (_, KeyCode::Down) => app.edit_with(|b, _| b.move_down()),
        (_, KeyCode::Home) => app.edit_with(|b, _| b.home()),
        (_, KeyCode::End) => app.edit_with(|b, _| b.end()),
        (_, KeyCode::PageUp) => app.edit_with(|b, height| b.page_up(height)),
        (_, KeyCode::PageDown) => app.edit_with(|b, height| b.page_down(height)),
        _ => {}
    }
}

/// 다이얼로그 모드 키 처리
fn handle_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    let Some(dialog) = app.dialog.as_ref() else {
        return;
    };

    match dialog {
        DialogKind::Input { .. } => handle_input_dialog_keys(app, modifiers, code),
        DialogKind::Confirm { .. } => handle_confirm_dialog_keys(app, modifiers, code),
        DialogKind::Error { .. } | DialogKind::Message { .. } => {
            handle_message_dialog_keys(app, code)
        }
        DialogKind::Help { .. } => handle_help_dialog_keys(app, code),
    }
}

/// 입력 다이얼로그 키 처리
fn handle_input_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (_, KeyCode::Enter) => app.dialog_submit(),
        (_, KeyCode::Esc) => app.close_dialog(),
        (KeyModifiers::NONE, KeyCode::Tab) | (KeyModifiers::SHIFT, KeyCode::BackTab) => {
            app.dialog_toggle_button();
        }
        (KeyModifiers::CONTROL, KeyCode::Char('w')) => app.dialog_input_delete_prev_word(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.dialog_input_char(c);
        }
        (_, KeyCode::Backspace) => app.dialog_input_backspace(),
        (_, KeyCode::Delete) => app.dialog_input_delete(),
        (_, KeyCode::Left) => app.dialog_input_left(),
        (_, KeyCode::Right) => app.dialog_input_right(),
        (_, KeyCode::Home) => app.dialog_input_home(),
        (_, KeyCode::End) => app.dialog_input_end(),
        _ => {}
    }
}

/// 확인 다이얼로그 키 처리
fn handle_confirm_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (KeyModifiers::NONE, KeyCode::Tab)
        | (KeyModifiers::SHIFT, KeyCode::BackTab)
        | (_, KeyCode::Left)
        | (_, KeyCode::Right) => app.dialog_toggle_button(),
        (_, KeyCode::Enter) => app.dialog_submit(),
        (_, KeyCode::Char('y')) | (_, KeyCode::Char('Y')) => app.accept_confirm_dialog(),
        (_, KeyCode::Char('n')) | (_, KeyCode::Char('N')) | (_, KeyCode::Esc) => {
            app.close_dialog();
        }
        _ => {}
    }
}

/// 메시지/에러 다이얼로그 키 처리
fn handle_message_dialog_keys(app: &mut App, code: KeyCode) {
    if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.close_dialog();
    }
}

/// 도움말 다이얼로그 키 처리
fn handle_help_dialog_keys(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.close_dialog();
        }
        KeyCode::Char('j') | KeyCode::Down => app.dialog_help_scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.dialog_help_scroll_up(),
        _ => {}
    }
}

/// 메인 UI 렌더링
fn render_main_ui(f: &mut ratatui::Frame<'_>, app: &App) {
    let areas = app.layout.areas();
    let theme = app.theme_manager.current();
    let focus = app.focus();

    let path_bar = PathBar::new(app.current_dir())
        .home(app.home_dir.as_deref())
        .theme(theme);
    f.render_widget(path_bar, areas.path_bar);

    let file_list = FileList::new()
        .entries(&app.entries)
        .selected_index(app.selected_index)
        .scroll_offset(app.scroll_offset)
        .focused(focus == FocusPane::List)
        .icon_mode(app.icon_mode)
        .theme(theme);
    f.render_widget(file_list, areas.list);

    let editor = EditorView::new()
        .buffer(app.editor.as_ref())
        .focused(focus == FocusPane::Editor)
        .theme(theme);
    f.render_widget(editor, areas.editor);

    let (message, kind) = app.status_line();
    let (files, dirs) = app.entry_counts();
    let status_bar = StatusBar::new()
        .message(message, kind)
        .counts(files, dirs)
        .theme(theme);
    f.render_widget(status_bar, areas.status_bar);

    let command_bar = CommandBar::new()
        .commands(generate_command_bar_items())
        .theme(theme);
    f.render_widget(command_bar, areas.command_bar);

    if let Some(ref dialog_kind) = app.dialog {
        let dialog = Dialog::new(dialog_kind).theme(theme);
        f.render_widget(dialog, f.area());
    }
}
