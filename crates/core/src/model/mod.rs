mod auth;
mod level;
mod progress;
mod topic;
mod unlock;

pub use auth::{AuthError, AuthToken, LoginStatus, normalize_username};
pub use level::{Level, LevelError};
pub use progress::{LevelState, ProgressError, ProgressMap};
pub use topic::{Topic, TopicError};
pub use unlock::{LevelAccess, UnlockState, quiz_href};
