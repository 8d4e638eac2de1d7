// Layout system - 반응형 레이아웃
//
// 경로 바 | 목록 + 에디터 | 상태바 | 커맨드바
// 40x12 미만이면 경고 화면만 표시

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기 상수
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 12;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// 목록 + 에디터 분할
    Split,
    /// 경고 모드 (터미널이 너무 작음)
    TooSmall,
}

/// 키 입력을 받는 영역
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    #[default]
    List,
    Editor,
}

/// 목록/에디터 비율 (퍼센트)
#[derive(Debug, Clone, Copy)]
pub struct PaneRatio {
    pub list: u16,
    pub editor: u16,
}

impl Default for PaneRatio {
    fn default() -> Self {
        Self {
            list: 35,
            editor: 65,
        }
    }
}

/// 레이아웃 영역
#[derive(Debug, Clone, Default)]
pub struct LayoutAreas {
    /// 상단 경로 표시줄
    pub path_bar: Rect,
    /// 엔트리 목록
    pub list: Rect,
    /// 텍스트 에디터
    pub editor: Rect,
    /// 상태바 영역
    pub status_bar: Rect,
    /// 하단 커맨드 바 영역
    pub command_bar: Rect,
    /// 경고 메시지 영역 (TooSmall 모드에서 사용)
    pub warning: Rect,
}

/// 레이아웃 상태
#[derive(Debug, Clone)]
pub struct LayoutState {
    pub mode: LayoutMode,
    pub focus: FocusPane,
    pub ratio: PaneRatio,
    pub terminal_size: (u16, u16),
    pub areas: LayoutAreas,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Split,
            focus: FocusPane::default(),
            ratio: PaneRatio::default(),
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }
}

/// 레이아웃 매니저
#[derive(Debug)]
pub struct LayoutManager {
    state: LayoutState,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutManager {
    pub fn new() -> Self {
        Self {
            state: LayoutState::default(),
        }
    }

    /// 터미널 크기에 따라 레이아웃 모드 결정
    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else {
            LayoutMode::Split
        }
    }

    /// 터미널 크기 업데이트 및 레이아웃 재계산
    pub fn update(&mut self, area: Rect) {
        self.state.terminal_size = (area.width, area.height);
        self.state.mode = Self::determine_mode(area.width, area.height);
        self.state.areas = self.calculate_areas(area);
    }

    fn calculate_areas(&self, area: Rect) -> LayoutAreas {
        if self.state.mode == LayoutMode::TooSmall {
            return LayoutAreas {
                warning: area,
                ..Default::default()
            };
        }

        // 메인 수직 레이아웃: 경로 | 본문 | 상태바 | 커맨드바
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(self.state.ratio.list),
                Constraint::Percentage(self.state.ratio.editor),
            ])
            .split(vertical_chunks[1]);

        LayoutAreas {
            path_bar: vertical_chunks[0],
            list: body_chunks[0],
            editor: body_chunks[1],
            status_bar: vertical_chunks[2],
            command_bar: vertical_chunks[3],
            warning: Rect::default(),
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.state.mode
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.state.areas
    }

    pub fn focus(&self) -> FocusPane {
        self.state.focus
    }

    pub fn set_focus(&mut self, focus: FocusPane) {
        self.state.focus = focus;
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.state.terminal_size
    }

    /// 목록에 보이는 행 수 (테두리 제외)
    pub fn list_visible_rows(&self) -> usize {
        self.body_inner_height()
    }

    /// 에디터에 보이는 줄 수 (테두리 제외)
    pub fn editor_visible_rows(&self) -> usize {
        self.body_inner_height()
    }

    fn body_inner_height(&self) -> usize {
        let (_, height) = self.state.terminal_size;
        // 경로/상태/커맨드바 3줄 + 테두리 2줄
        height.saturating_sub(5).max(1) as usize
    }
}
