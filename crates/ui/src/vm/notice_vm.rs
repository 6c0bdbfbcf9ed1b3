use std::time::Duration;

/// How long a toast stays on screen.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient notification message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeVm {
    pub message: String,
    pub kind: NoticeKind,
}

impl NoticeVm {
    #[must_use]
    pub fn new(message: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notification notification-success",
            NoticeKind::Error => "notification notification-error",
        }
    }
}

/// The toast currently on screen, tagged so a stale timer cannot clear a
/// newer notice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    current: Option<NoticeVm>,
    generation: u64,
}

impl NoticeSlot {
    /// Replace the shown notice. Pass the returned id to [`Self::expire`].
    pub fn show(&mut self, notice: NoticeVm) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(notice);
        self.generation
    }

    /// Clear the notice only if it is still the one shown as `id`.
    pub fn expire(&mut self, id: u64) {
        if self.generation == id {
            self.current = None;
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&NoticeVm> {
        self.current.as_ref()
    }
}
