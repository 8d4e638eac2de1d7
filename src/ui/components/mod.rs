// UI Components
pub mod command_bar;
pub mod dialog;
pub mod editor_view;
pub mod file_list;
pub mod path_bar;
pub mod status_bar;
pub mod warning;

// Re-export components for convenience
pub use command_bar::CommandBar;
pub use dialog::{ConfirmPurpose, Dialog, DialogKind, InputPurpose};
pub use editor_view::EditorView;
pub use file_list::{FileList, IconMode};
pub use path_bar::PathBar;
pub use status_bar::{StatusBar, StatusKind};
pub use warning::WarningScreen;
