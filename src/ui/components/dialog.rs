//! 다이얼로그 시스템
//!
//! 이름 입력, 삭제/폐기 확인, 에러/메시지, 단축키 도움말 위젯

mod builders;
mod kind;
mod render;

pub use kind::{ConfirmPurpose, DialogKind, InputPurpose};
pub use render::{help_max_scroll, Dialog};
