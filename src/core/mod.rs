// Core - 액션 레지스트리
pub mod actions;
