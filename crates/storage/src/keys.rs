//! Fixed keys shared by every store backend.

/// JSON mapping of topic to `{easy, medium, hard}` completion flags.
pub const PROGRESS: &str = "ispace_progress";

/// Present iff the learner is logged in on this profile.
pub const AUTH_TOKEN: &str = "ispace_auth_token";

pub const USERNAME: &str = "ispace_username";
