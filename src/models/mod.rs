// Data Models
pub mod file_entry;
pub mod session;

pub use file_entry::{DirectoryEntry, FileMetadata};
pub use session::NavigationSession;
