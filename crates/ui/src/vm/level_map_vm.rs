use ispace_core::model::{Level, LevelAccess, Topic, UnlockState, quiz_href};

/// UI-ready representation of one level tile in the level overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelLinkVm {
    pub level: Level,
    pub label: &'static str,
    pub access: LevelAccess,
    /// Quiz target; `None` while the level is locked.
    pub href: Option<String>,
}

impl LevelLinkVm {
    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.access {
            LevelAccess::Locked => "level-link locked",
            LevelAccess::Unlocked => "level-link",
            LevelAccess::Completed => "level-link completed",
        }
    }

    #[must_use]
    pub fn status_text(&self) -> &'static str {
        match self.access {
            LevelAccess::Locked => "Locked",
            LevelAccess::Unlocked => "Ready",
            LevelAccess::Completed => "Completed",
        }
    }
}

/// Build the three level tiles for `topic`.
#[must_use]
pub fn map_level_links(topic: &Topic, unlock: &UnlockState) -> Vec<LevelLinkVm> {
    Level::ALL
        .iter()
        .map(|&level| {
            let access = unlock.access(level);
            LevelLinkVm {
                level,
                label: level.label(),
                access,
                href: access.is_playable().then(|| quiz_href(topic, level)),
            }
        })
        .collect()
}
