pub mod hook_id;
pub mod path;
pub mod pattern;

pub use hook_id::HookId;
pub use path::RepoPath;
pub use pattern::{selects, FilePattern};
