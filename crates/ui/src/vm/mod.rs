mod level_map_vm;
mod notice_vm;
mod star_vm;
mod topic_vm;

pub use level_map_vm::{LevelLinkVm, map_level_links};
pub use notice_vm::{NOTICE_TTL, NoticeKind, NoticeSlot, NoticeVm};
pub use star_vm::{HEADER_STAR_COUNT, StarVm, scatter_stars};
pub use topic_vm::{TopicCardVm, map_topic_cards};
