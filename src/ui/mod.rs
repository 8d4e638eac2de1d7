// UI Layer
pub mod components;
pub mod layout;
pub mod theme;

// Re-export layout types for convenience
pub use layout::{FocusPane, LayoutManager, LayoutMode};
pub use theme::{Theme, ThemeManager};
